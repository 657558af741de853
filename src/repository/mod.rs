//! Repository layer for Redis-backed stores

pub mod counters;
pub mod targets;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{error::AppResult, models::target::Target, services::redis::RedisService};

/// Durable mapping from target id to target record
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TargetStore: Send + Sync {
    /// Enumerate the full target catalog
    async fn list(&self) -> AppResult<Vec<Target>>;

    /// Point lookup by id
    async fn get(&self, id: &str) -> AppResult<Option<Target>>;

    /// Existence check by id
    async fn exists(&self, id: &str) -> AppResult<bool>;

    /// Persist a new target record under its id
    async fn create(&self, target: &Target) -> AppResult<()>;

    /// Write the supplied fields of an existing target
    async fn update(&self, id: &str, fields: &HashMap<String, String>) -> AppResult<()>;
}

/// Durable daily accept counters keyed by (target id, UTC date)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Read the counters for several targets in one batched query
    ///
    /// The result is aligned with the input id order; a missing counter
    /// reads as 0.
    async fn get_many(&self, ids: &[String], date: NaiveDate) -> AppResult<Vec<u64>>;

    /// Increment a counter, returning the new count
    async fn increment(&self, id: &str, date: NaiveDate) -> AppResult<u64>;

    /// Bound a counter's lifetime
    async fn set_expiry(&self, id: &str, date: NaiveDate, seconds: u64) -> AppResult<()>;
}

/// Main repository struct holding the store handles
///
/// The trait objects are the substitution seam for tests, which plug in
/// in-memory stores instead of Redis.
#[derive(Clone)]
pub struct Repository {
    pub targets: Arc<dyn TargetStore>,
    pub counters: Arc<dyn CounterStore>,
}

impl Repository {
    /// Create a repository backed by Redis
    pub fn new(redis: RedisService) -> Self {
        Self {
            targets: Arc::new(targets::RedisTargetStore::new(redis.clone())),
            counters: Arc::new(counters::RedisCounterStore::new(redis)),
        }
    }

    /// Create a repository over explicit store implementations
    pub fn with_stores(targets: Arc<dyn TargetStore>, counters: Arc<dyn CounterStore>) -> Self {
        Self { targets, counters }
    }
}
