use fake::Fake;
use rand::Rng;

use super::dto::create_bus_dto::CreateBusDto;

const BUS_TYPES: [&str; 4] = ["standard", "premium", "luxury", "sleeper"];
const MODELS: [&str; 4] = [
  "Mercedes-Benz Travego",
  "Volvo 9700",
  "Scania Touring",
  "Setra S 517 HD",
];

// Bus numbers are sequential rather than random so generated trips can
// reference them; `index` is 1-based.
pub fn random_bus<R: Rng>(rng: &mut R, index: u32) -> CreateBusDto {
  CreateBusDto {
    bus_number: format!("BUS{:03}", index),
    seats: (30..=50).fake_with_rng(rng),
    bus_type: BUS_TYPES[rng.gen_range(0..BUS_TYPES.len())].to_string(),
    model: MODELS[rng.gen_range(0..MODELS.len())].to_string(),
  }
}
