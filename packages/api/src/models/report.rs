use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Aggregation window for agent reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReportPeriod {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 3] = [Self::Daily, Self::Weekly, Self::Monthly];

    /// Query-string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Activity of one agent over a [`ReportPeriod`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AgentReport {
    pub agent_id: String,
    pub agent_name: String,
    pub work_id: String,
    pub total_clients_engaged: u32,
    pub sectors_worked_in: Vec<String>,
    pub days_worked: u32,
    pub daily_comment: String,
    /// Clients engaged, keyed by date.
    pub daily_clients_count: BTreeMap<String, u32>,
    /// Sectors visited, keyed by date.
    pub daily_sectors: BTreeMap<String, Vec<String>>,
    /// Attendance status, keyed by date.
    pub work_status: BTreeMap<String, String>,
}

impl AgentReport {
    pub fn sectors_label(&self) -> String {
        if self.sectors_worked_in.is_empty() {
            "-".to_string()
        } else {
            self.sectors_worked_in.join(", ")
        }
    }

    /// Attendance status on the most recent reported date.
    pub fn latest_status(&self) -> Option<&str> {
        self.work_status.values().next_back().map(String::as_str)
    }

    /// Case-insensitive match on name, work ID or any sector.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.agent_name.to_lowercase().contains(&query)
            || self.work_id.to_lowercase().contains(&query)
            || self
                .sectors_worked_in
                .iter()
                .any(|sector| sector.to_lowercase().contains(&query))
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReportList {
    #[serde(default)]
    pub agent_reports: Vec<AgentReport>,
}
