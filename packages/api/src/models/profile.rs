use serde::{Deserialize, Serialize};

/// Signed-in user's profile from `GET /user-profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "store::models::id_string")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub name: String,
    pub email: String,
    pub work_id: String,
    pub phone_number: String,
    pub national_id: String,
    pub region: Option<String>,
    pub profile_image_url: Option<String>,
    pub role: ProfileRole,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRole {
    pub name: String,
}

impl Profile {
    pub fn display_name(&self) -> String {
        if !self.name.trim().is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
