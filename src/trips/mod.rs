pub mod dto;
pub mod generator;
pub mod rto;

use dto::create_trip_dto::CreateTripDto;
use log::{debug, error, info};
use rand::Rng;
use validator::Validate;

use crate::shared::backend::{Backend, BackendError};
use crate::shared::http_error::HttpError;
use crate::shared::outcome::SeedOutcome;

/// Posts one trip record and reports whether the backend accepted it.
pub async fn create_trip<B: Backend>(
  backend: &B,
  token: &str,
  dto: &CreateTripDto,
) -> bool {
  // Perform validation
  if let Err(validation_errors) = dto.validate() {
    error!("Invalid trip payload, request skipped: {}", validation_errors);
    return false;
  }

  info!(
    "Creating trip from {} to {} on {}...",
    dto.origin, dto.destination, dto.departure_date
  );
  match backend.create_trip(token, dto).await {
    Ok(rto) => {
      info!("Trip created successfully!");
      debug!("Response: {:?}", rto);
      true
    }
    Err(BackendError::Http { status, body }) => {
      error!("Failed to create trip. HTTP error: {}", status);
      error!("Request data: {:?}", dto);
      error!("Response content: {}", body);
      log_backend_rejection(&body);
      false
    }
    Err(error) => {
      error!("Error creating trip: {}", error);
      error!("Request data: {:?}", dto);
      false
    }
  }
}

/// Posts `count` generated trips sequentially and tallies the successes.
pub async fn seed<B: Backend, R: Rng>(
  backend: &B,
  rng: &mut R,
  token: &str,
  count: u32,
) -> SeedOutcome {
  info!("--- Seeding {} Trips ---", count);
  let mut created = 0;
  for i in 1..=count {
    info!("Seeding trip {}/{}...", i, count);
    let dto = generator::random_trip(rng);
    if create_trip(backend, token, &dto).await {
      created += 1;
    } else {
      info!("Skipping trip {} due to error.", i);
    }
  }
  SeedOutcome {
    requested: count,
    created,
  }
}

// Surface the structured message the backend attaches to rejections, e.g.
// BUSY_BUS when the bus is already scheduled for an overlapping window.
fn log_backend_rejection(body: &str) {
  if let Some(http_error) = HttpError::parse(body) {
    match http_error.kind {
      Some(kind) => error!("Backend rejected trip ({}): {}", kind, http_error.message),
      None => error!("Backend rejected trip: {}", http_error.message),
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use rand::thread_rng;

  use super::*;
  use crate::shared::backend::tests::BackendMock;

  fn fixed_trip() -> CreateTripDto {
    CreateTripDto {
      bus_number: "BUS004".to_string(),
      origin: "دمشق".to_string(),
      destination: "حلب".to_string(),
      departure_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
      arrival_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
      departure_time: "08:15".to_string(),
      arrival_time: "14:30".to_string(),
      cost: 150_000,
    }
  }

  #[tokio::test]
  async fn test_create_trip_successful() {
    let backend = BackendMock::with_token("jwt-token");
    let dto = fixed_trip();

    let created = create_trip(&backend, "jwt-token", &dto).await;

    assert!(created);
    assert_eq!(backend.trips.read().unwrap().as_slice(), &[dto]);
    assert_eq!(backend.tokens_seen.read().unwrap().as_slice(), &[
      "jwt-token".to_string()
    ]);
  }

  #[tokio::test]
  async fn test_create_trip_reports_backend_rejection() {
    let mut backend = BackendMock::with_token("jwt-token");
    backend.fail_first_trips = 1;

    let created = create_trip(&backend, "jwt-token", &fixed_trip()).await;

    assert!(!created);
    // The request reached the backend even though it was rejected.
    assert_eq!(backend.trips.read().unwrap().len(), 1);
  }

  #[tokio::test]
  async fn test_create_trip_invalid_payload_skips_request() {
    let backend = BackendMock::with_token("jwt-token");
    let mut dto = fixed_trip();
    dto.origin = "د".to_string();

    let created = create_trip(&backend, "jwt-token", &dto).await;

    assert!(!created);
    assert!(backend.trips.read().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_seed_tallies_successes_and_continues_past_failures() {
    let mut backend = BackendMock::with_token("jwt-token");
    backend.fail_first_trips = 2;
    let mut rng = thread_rng();

    let outcome = seed(&backend, &mut rng, "jwt-token", 5).await;

    assert_eq!(outcome, SeedOutcome {
      requested: 5,
      created: 3,
    });
    assert_eq!(backend.trips.read().unwrap().len(), 5);
  }

  #[tokio::test]
  async fn test_seed_created_never_exceeds_requested() {
    let backend = BackendMock::with_token("jwt-token");
    let mut rng = thread_rng();

    let outcome = seed(&backend, &mut rng, "jwt-token", 10).await;

    assert!(outcome.created <= outcome.requested);
    assert_eq!(backend.trips.read().unwrap().len(), 10);
  }

  #[tokio::test]
  async fn test_seed_zero_trips_issues_no_requests() {
    let backend = BackendMock::with_token("jwt-token");
    let mut rng = thread_rng();

    let outcome = seed(&backend, &mut rng, "jwt-token", 0).await;

    assert_eq!(outcome, SeedOutcome {
      requested: 0,
      created: 0,
    });
    assert!(backend.trips.read().unwrap().is_empty());
  }
}
