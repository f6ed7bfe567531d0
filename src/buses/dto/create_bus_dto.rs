use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateBusDto {
  #[serde(rename = "busNumber")]
  #[validate(length(min = 1))]
  pub bus_number: String,
  #[validate(range(min = 1))]
  pub seats: u32,
  #[serde(rename = "busType")]
  pub bus_type: String,
  pub model: String,
}
