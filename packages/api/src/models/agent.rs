use serde::{Deserialize, Serialize};

/// A field agent managed by a manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(deserialize_with = "store::models::id_string")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub national_id: String,
    pub work_id: String,
    /// Whether the agent leads a team.
    #[serde(default)]
    pub leader: bool,
}

/// Form body for `POST /manager/agents`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAgent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub work_id: String,
    pub national_id: String,
    pub phone_number: String,
}

#[derive(Deserialize)]
pub(crate) struct AgentList {
    #[serde(default)]
    pub agents: Vec<Agent>,
}
