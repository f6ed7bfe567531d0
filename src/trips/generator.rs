use chrono::{Duration, Local};
use fake::Fake;
use rand::Rng;

use super::dto::create_trip_dto::CreateTripDto;

const CITIES: [&str; 6] = ["دمشق", "حمص", "حماه", "طرطوس", "اللاذقية", "حلب"];
const QUARTER_HOURS: [u32; 4] = [0, 15, 30, 45];

/// Produces one randomized trip record.
pub fn random_trip<R: Rng>(rng: &mut R) -> CreateTripDto {
  let origin = CITIES[rng.gen_range(0..CITIES.len())];
  let destinations: Vec<&str> = CITIES
    .iter()
    .copied()
    .filter(|city| *city != origin)
    .collect();
  let destination = destinations[rng.gen_range(0..destinations.len())];

  // Departure within the next 30 days; the trip itself lasts 4-10 hours,
  // so the arrival date either matches or rolls over to the next day.
  let departure = Local::now() + Duration::days((1..=30).fake_with_rng(rng));
  let arrival = departure + Duration::hours((4..=10).fake_with_rng(rng));

  // Clock times are drawn independently of the dates.
  let departure_hour: u32 = (6..=22).fake_with_rng(rng);
  let arrival_hour: u32 = (departure_hour + 1..=23).fake_with_rng(rng);

  CreateTripDto {
    bus_number: format!("BUS{:03}", (1..=20).fake_with_rng::<u32, _>(rng)),
    origin: origin.to_string(),
    destination: destination.to_string(),
    departure_date: departure.date_naive(),
    arrival_date: arrival.date_naive(),
    departure_time: format!(
      "{:02}:{:02}",
      departure_hour,
      QUARTER_HOURS[rng.gen_range(0..QUARTER_HOURS.len())]
    ),
    arrival_time: format!(
      "{:02}:{:02}",
      arrival_hour,
      QUARTER_HOURS[rng.gen_range(0..QUARTER_HOURS.len())]
    ),
    cost: (5..=50).fake_with_rng::<u32, _>(rng) * 10_000,
  }
}
