// src/lib.rs
pub mod config;
pub mod db;
pub mod fapshi;
pub mod health;
pub mod models;
pub mod search;

pub use config::{Config, ConfigError};
pub use fapshi::{FapshiConfig, FapshiEnvironment};
pub use search::{SearchModule, SearchService};
