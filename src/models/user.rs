use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct UserPublic {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub roles: Vec<String>,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct UsersPage {
    pub data: Vec<UserPublic>,
    pub count: u64,
}
