mod buses;
mod session;
mod shared;
mod trips;

use log::{error, info, LevelFilter};
use rand::thread_rng;
use shared::backend::{Backend, BackendError, HttpBackend};
use shared::config::Config;
use shared::outcome::SeedOutcome;

// Tallies of one whole seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunReport {
  buses: Option<SeedOutcome>,
  trips: SeedOutcome,
}

#[tokio::main]
async fn main() {
  env_logger::builder()
    .filter_level(LevelFilter::Info)
    .format_target(false)
    .format_timestamp(None)
    .parse_default_env()
    .init();

  let config = Config::default();
  let backend = HttpBackend::new(&config);
  // Success and failure are reported through the summary lines; the process
  // exits 0 either way.
  let _ = run(&config, &backend).await;
}

// Login once, then drive the seeding loops strictly sequentially. Aborts
// before the first creation request when no token could be obtained.
async fn run<B: Backend>(
  config: &Config,
  backend: &B,
) -> Result<RunReport, BackendError> {
  let token = match session::login(backend, config).await {
    Ok(token) => token,
    Err(error) => {
      error!("Could not obtain a JWT token. Seeding aborted.");
      error!(
        "Please ensure your backend is running and manager credentials are correct."
      );
      return Err(error);
    }
  };

  let mut rng = thread_rng();

  // Buses first: the trip endpoint rejects bus numbers that were never
  // provisioned. Disabled by default (buses_to_create = 0).
  let buses = if config.buses_to_create > 0 {
    Some(buses::seed(backend, &mut rng, &token, config.buses_to_create).await)
  } else {
    None
  };
  let trips =
    trips::seed(backend, &mut rng, &token, config.trips_to_create).await;

  let report = RunReport { buses, trips };
  print_summary(&report);
  Ok(report)
}

fn print_summary(report: &RunReport) {
  info!("--- Seeding Complete ---");
  if let Some(buses) = &report.buses {
    info!(
      "Successfully created {} out of {} buses.",
      buses.created, buses.requested
    );
  }
  info!(
    "Successfully created {} out of {} trips.",
    report.trips.created, report.trips.requested
  );
}
