pub mod dto;
pub mod rto;

use dto::login_dto::LoginDto;
use log::{error, info, warn};
use validator::Validate;

use crate::shared::backend::{Backend, BackendError};
use crate::shared::config::Config;

/// Logs into the backend as a manager and returns the bearer token.
pub async fn login<B: Backend>(
  backend: &B,
  config: &Config,
) -> Result<String, BackendError> {
  let dto = LoginDto::from(config);
  // Perform validation
  dto.validate()?;

  info!("Attempting to log in as {}...", dto.username);
  match backend.login(&dto).await {
    Ok(rto) => match rto.token {
      Some(token) => {
        info!("Login successful! Token obtained.");
        Ok(token)
      }
      None => {
        warn!("Login successful, but no token received in response.");
        warn!("Response: {:?}", rto);
        Err(BackendError::MissingToken)
      }
    },
    Err(BackendError::Http { status, body }) => {
      error!("HTTP error during login: {}", status);
      error!("Response content: {}", body);
      Err(BackendError::Http { status, body })
    }
    Err(error) => {
      error!("Error during login: {}", error);
      Err(error)
    }
  }
}

impl From<&Config> for LoginDto {
  fn from(config: &Config) -> Self {
    Self {
      username: config.username.clone(),
      password: config.password.clone(),
    }
  }
}
