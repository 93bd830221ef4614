use serde::{Deserialize, Serialize};

/// A manager account, as listed to admins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    #[serde(deserialize_with = "store::models::id_string")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub phone_number: String,
    pub work_id: String,
}

impl Manager {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Form body for `POST /admin/managers`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewManager {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub work_id: String,
    pub national_id: String,
    pub phone_number: String,
}
