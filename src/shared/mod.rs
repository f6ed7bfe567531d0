pub mod backend;
pub mod config;
pub mod http_error;
pub mod outcome;
