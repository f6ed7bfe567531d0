use serde::{Deserialize, Serialize};

/// Structured error body the backend attaches to 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
  pub message: String,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl HttpError {
  // Not every error body is JSON in this shape; callers fall back to the
  // raw body when this returns None.
  pub fn parse(body: &str) -> Option<Self> {
    serde_json::from_str(body).ok()
  }
}

impl From<&str> for HttpError {
  fn from(message: &str) -> Self {
    Self {
      message: String::from(message),
      kind: None,
      field: None,
    }
  }
}
