/// Tally of one seeding loop; `created` never exceeds `requested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedOutcome {
  pub requested: u32,
  pub created: u32,
}
