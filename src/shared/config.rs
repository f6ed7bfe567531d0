use std::env;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
  pub base_url: String,
  pub username: String,
  pub password: String,
  pub trips_to_create: u32,
  pub buses_to_create: u32,
}

impl Default for Config {
  fn default() -> Self {
    let base_url = env::var("BASE_URL")
      .unwrap_or_else(|_| "http://localhost:5001/api".to_string());
    let username = env::var("MANAGER_USERNAME")
      .unwrap_or_else(|_| "Co_manager_test".to_string());
    let password = env::var("MANAGER_PASSWORD")
      .unwrap_or_else(|_| "password123".to_string());
    Self {
      base_url,
      username,
      password,
      trips_to_create: env_count("TRIPS_TO_CREATE", 10),
      buses_to_create: env_count("BUSES_TO_CREATE", 0),
    }
  }
}

// Counts that are unset or unparsable fall back to the default; a malformed
// environment never aborts a seeding run.
fn env_count(name: &str, fallback: u32) -> u32 {
  env::var(name)
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config_runner() {
    test_default_config();
    test_default_config_with_missing_env_vars();
    test_count_parsing();
  }

  fn test_default_config() {
    // Temporarily set environment variables
    env::set_var("BASE_URL", "http://backend:9000/api");
    env::set_var("MANAGER_USERNAME", "Co_test");
    env::set_var("MANAGER_PASSWORD", "secret");
    env::set_var("TRIPS_TO_CREATE", "25");
    env::set_var("BUSES_TO_CREATE", "3");

    let config = Config::default();
    assert_eq!(config.base_url, "http://backend:9000/api");
    assert_eq!(config.username, "Co_test");
    assert_eq!(config.password, "secret");
    assert_eq!(config.trips_to_create, 25);
    assert_eq!(config.buses_to_create, 3);

    // Clean up environment variables
    env::remove_var("BASE_URL");
    env::remove_var("MANAGER_USERNAME");
    env::remove_var("MANAGER_PASSWORD");
    env::remove_var("TRIPS_TO_CREATE");
    env::remove_var("BUSES_TO_CREATE");
  }

  fn test_default_config_with_missing_env_vars() {
    // Ensure environment variables are unset
    env::remove_var("BASE_URL");
    env::remove_var("MANAGER_USERNAME");
    env::remove_var("MANAGER_PASSWORD");
    env::remove_var("TRIPS_TO_CREATE");
    env::remove_var("BUSES_TO_CREATE");

    let config = Config::default();
    assert_eq!(config.base_url, "http://localhost:5001/api");
    assert_eq!(config.username, "Co_manager_test");
    assert_eq!(config.password, "password123");
    assert_eq!(config.trips_to_create, 10);
    assert_eq!(config.buses_to_create, 0);
  }

  fn test_count_parsing() {
    env::set_var("TRIPS_TO_CREATE", "not-a-number");
    let config = Config::default();
    assert_eq!(config.trips_to_create, 10);
    env::remove_var("TRIPS_TO_CREATE");
  }

  #[test]
  fn test_serialization() {
    let config = Config {
      base_url: "http://localhost:5001/api".to_string(),
      username: "Co_manager_test".to_string(),
      password: "password123".to_string(),
      trips_to_create: 10,
      buses_to_create: 0,
    };

    let serialized =
      serde_json::to_string(&config).expect("Failed to serialize");
    assert!(serialized.contains("Co_manager_test"));
    assert!(serialized.contains("trips_to_create"));
  }

  #[test]
  fn test_deserialization() {
    let json = r#"{
      "base_url": "http://localhost:5001/api",
      "username": "Co_manager_test",
      "password": "password123",
      "trips_to_create": 5,
      "buses_to_create": 2
    }"#;

    let config: Config =
      serde_json::from_str(json).expect("Failed to deserialize");
    assert_eq!(config.trips_to_create, 5);
    assert_eq!(config.buses_to_create, 2);
  }
}
