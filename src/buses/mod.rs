pub mod dto;
pub mod generator;
pub mod rto;

use dto::create_bus_dto::CreateBusDto;
use log::{debug, error, info};
use rand::Rng;
use validator::Validate;

use crate::shared::backend::{Backend, BackendError};
use crate::shared::http_error::HttpError;
use crate::shared::outcome::SeedOutcome;

/// Posts one bus record and reports whether the backend accepted it.
pub async fn create_bus<B: Backend>(
  backend: &B,
  token: &str,
  dto: &CreateBusDto,
) -> bool {
  // Perform validation
  if let Err(validation_errors) = dto.validate() {
    error!("Invalid bus payload, request skipped: {}", validation_errors);
    return false;
  }

  info!("Creating bus {}...", dto.bus_number);
  match backend.create_bus(token, dto).await {
    Ok(rto) => {
      info!("Bus created successfully!");
      debug!("Response: {:?}", rto);
      true
    }
    Err(BackendError::Http { status, body }) => {
      error!("Failed to create bus. HTTP error: {}", status);
      error!("Request data: {:?}", dto);
      error!("Response content: {}", body);
      log_backend_rejection(&body);
      false
    }
    Err(error) => {
      error!("Error creating bus: {}", error);
      error!("Request data: {:?}", dto);
      false
    }
  }
}

/// Provisions `count` sequentially numbered buses ahead of trip seeding.
pub async fn seed<B: Backend, R: Rng>(
  backend: &B,
  rng: &mut R,
  token: &str,
  count: u32,
) -> SeedOutcome {
  info!("--- Seeding {} Buses ---", count);
  let mut created = 0;
  for i in 1..=count {
    info!("Seeding bus {}/{}...", i, count);
    let dto = generator::random_bus(rng, i);
    if create_bus(backend, token, &dto).await {
      created += 1;
    } else {
      info!("Skipping bus {} due to error.", i);
    }
  }
  SeedOutcome {
    requested: count,
    created,
  }
}

// Duplicate bus numbers are the common rejection when reseeding an already
// populated database; the message is worth its own line next to the raw body.
fn log_backend_rejection(body: &str) {
  if let Some(http_error) = HttpError::parse(body) {
    match http_error.kind {
      Some(kind) => error!("Backend rejected bus ({}): {}", kind, http_error.message),
      None => error!("Backend rejected bus: {}", http_error.message),
    }
  }
}
