//! Daily accept counters backed by Redis
//!
//! A counter lives at `accepts:{id}:{YYYY-MM-DD}` and disappears on its own
//! once its expiry runs out; there is no explicit cleanup.

use async_trait::async_trait;
use chrono::NaiveDate;
use redis::AsyncCommands;

use crate::{error::AppResult, services::redis::RedisService};

use super::CounterStore;

fn counter_key(id: &str, date: NaiveDate) -> String {
    format!("accepts:{}:{}", id, date.format("%Y-%m-%d"))
}

#[derive(Clone)]
pub struct RedisCounterStore {
    redis: RedisService,
}

impl RedisCounterStore {
    pub fn new(redis: RedisService) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn get_many(&self, ids: &[String], date: NaiveDate) -> AppResult<Vec<u64>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let keys: Vec<String> = ids.iter().map(|id| counter_key(id, date)).collect();
        let mut conn = self.redis.get_connection().await?;
        // MGET keeps the reply aligned with the requested id order
        let counts: Vec<Option<u64>> = conn.mget(&keys).await?;
        Ok(counts.into_iter().map(|c| c.unwrap_or(0)).collect())
    }

    async fn increment(&self, id: &str, date: NaiveDate) -> AppResult<u64> {
        let mut conn = self.redis.get_connection().await?;
        Ok(conn.incr(counter_key(id, date), 1u64).await?)
    }

    async fn set_expiry(&self, id: &str, date: NaiveDate, seconds: u64) -> AppResult<()> {
        let mut conn = self.redis.get_connection().await?;
        conn.expire::<_, ()>(counter_key(id, date), seconds as i64)
            .await?;
        Ok(())
    }
}
