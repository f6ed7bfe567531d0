use serde::{Deserialize, Serialize};
use validator_derive::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginDto {
  #[validate(length(min = 1))]
  pub username: String,
  #[validate(length(min = 1))]
  pub password: String,
}
