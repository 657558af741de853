//! Adroute Traffic Routing Service
//!
//! A Rust implementation of the Adroute traffic-routing decision server,
//! providing a REST JSON API for managing routing targets and making
//! real-time accept/reject routing decisions against them.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
