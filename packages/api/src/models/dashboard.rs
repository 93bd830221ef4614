use serde::{Deserialize, Serialize};

/// Manager home-page figures from `GET /manager/dashboard`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    pub total_agents: u32,
    pub active_agents: u32,
    pub performance_metrics: PerformanceMetrics,
    pub weekly_data: Vec<WeeklyPoint>,
    pub performance_data: Vec<PerformanceSlice>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PerformanceMetrics {
    pub total_clients: u32,
    pub average_engagement: f64,
    pub success_rate: f64,
}

/// Clients engaged on one weekday.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeeklyPoint {
    pub day: String,
    pub clients: u32,
}

/// One segment of the performance breakdown chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceSlice {
    pub name: String,
    pub value: f64,
    pub color: String,
}

impl DashboardSummary {
    /// Largest weekly value, used to scale the bar chart.
    pub fn weekly_peak(&self) -> u32 {
        self.weekly_data
            .iter()
            .map(|point| point.clients)
            .max()
            .unwrap_or(0)
    }

    /// Share of agents currently active, in percent.
    pub fn active_ratio(&self) -> f64 {
        if self.total_agents == 0 {
            0.0
        } else {
            f64::from(self.active_agents) * 100.0 / f64::from(self.total_agents)
        }
    }
}
