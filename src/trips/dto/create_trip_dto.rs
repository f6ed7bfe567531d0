use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator_derive::Validate;

// Wire shape of POST /add-trip. Dates serialize as YYYY-MM-DD; clock times
// stay HH:MM strings because the backend stores them as strings. Length and
// range rules follow the backend's trip schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateTripDto {
  #[serde(rename = "busNumber")]
  #[validate(length(min = 1))]
  pub bus_number: String,
  #[validate(length(min = 2, max = 100))]
  pub origin: String,
  #[validate(length(min = 2, max = 100))]
  pub destination: String,
  #[serde(rename = "departureDate")]
  pub departure_date: NaiveDate,
  #[serde(rename = "arrivalDate")]
  pub arrival_date: NaiveDate,
  #[serde(rename = "departureTime")]
  pub departure_time: String,
  #[serde(rename = "arrivalTime")]
  pub arrival_time: String,
  #[validate(range(min = 1))]
  pub cost: u32,
}
