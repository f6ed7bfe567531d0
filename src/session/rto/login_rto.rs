use serde::{Deserialize, Serialize};

// The login response also carries the full user document and a dashboard
// path; only the fields the seeder acts on are kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRto {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub token: Option<String>,
  #[serde(rename = "userType")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user_type: Option<String>,
}
