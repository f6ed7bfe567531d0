use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::buses::dto::create_bus_dto::CreateBusDto;
use crate::buses::rto::bus_created_rto::BusCreatedRto;
use crate::session::dto::login_dto::LoginDto;
use crate::session::rto::login_rto::LoginRto;
use crate::shared::config::Config;
use crate::trips::dto::create_trip_dto::CreateTripDto;
use crate::trips::rto::trip_created_rto::TripCreatedRto;

#[derive(Debug, Error)]
pub enum BackendError {
  #[error("HTTP {status}: {body}")]
  Http { status: u16, body: String },

  #[error("Transport error: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Validation error: {0}")]
  Validation(#[from] validator::ValidationErrors),

  #[error("Login response contained no token")]
  MissingToken,
}

/// Gateway to the booking backend's HTTP API.
pub trait Backend {
  async fn login(&self, dto: &LoginDto) -> Result<LoginRto, BackendError>;
  async fn create_trip(
    &self,
    token: &str,
    dto: &CreateTripDto,
  ) -> Result<TripCreatedRto, BackendError>;
  async fn create_bus(
    &self,
    token: &str,
    dto: &CreateBusDto,
  ) -> Result<BusCreatedRto, BackendError>;
}

pub struct HttpBackend {
  client: Client,
  base_url: String,
}

impl HttpBackend {
  pub fn new(config: &Config) -> Self {
    Self {
      client: Client::new(),
      base_url: config.base_url.trim_end_matches('/').to_string(),
    }
  }

  async fn post_json<P, R>(
    &self,
    path: &str,
    token: Option<&str>,
    payload: &P,
  ) -> Result<R, BackendError>
  where
    P: Serialize,
    R: DeserializeOwned,
  {
    let url = format!("{}{}", self.base_url, path);
    let mut request = self.client.post(&url).json(payload);
    if let Some(token) = token {
      request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    // The body is read eagerly so HTTP failures can be logged verbatim.
    let body = response.text().await?;
    if !status.is_success() {
      return Err(BackendError::Http {
        status: status.as_u16(),
        body,
      });
    }
    serde_json::from_str(&body).map_err(BackendError::from)
  }
}

impl Backend for HttpBackend {
  async fn login(&self, dto: &LoginDto) -> Result<LoginRto, BackendError> {
    self.post_json("/login", None, dto).await
  }

  async fn create_trip(
    &self,
    token: &str,
    dto: &CreateTripDto,
  ) -> Result<TripCreatedRto, BackendError> {
    self.post_json("/add-trip", Some(token), dto).await
  }

  async fn create_bus(
    &self,
    token: &str,
    dto: &CreateBusDto,
  ) -> Result<BusCreatedRto, BackendError> {
    self.post_json("/company/add-bus", Some(token), dto).await
  }
}
