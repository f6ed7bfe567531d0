use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCreatedRto {
  pub success: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub trip: Option<TripRto>,
}

// Echo of the stored trip document. The backend returns the whole record;
// every field is optional so schema drift never fails a successful create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRto {
  #[serde(rename = "_id")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(rename = "busNumber")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bus_number: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub origin: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub destination: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cost: Option<u32>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub status: Option<String>,
  #[serde(rename = "availableSeats")]
  #[serde(skip_serializing_if = "Option::is_none")]
  pub available_seats: Option<u32>,
}
