use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusCreatedRto {
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bus: Option<BusRto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusRto {
  #[serde(rename = "_id")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "busNumber")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bus_number: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub seats: Option<u32>,
  #[serde(rename = "busType")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bus_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub model: Option<String>,
}
