//! Target store backed by Redis
//!
//! Each target lives in a hash `target:{id}`; the set `targets` indexes
//! every known id.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::AsyncCommands;

use crate::{error::AppResult, models::target::Target, services::redis::RedisService};

use super::TargetStore;

const TARGETS_INDEX: &str = "targets";

fn target_key(id: &str) -> String {
    format!("target:{}", id)
}

#[derive(Clone)]
pub struct RedisTargetStore {
    redis: RedisService,
}

impl RedisTargetStore {
    pub fn new(redis: RedisService) -> Self {
        Self { redis }
    }
}

#[async_trait]
impl TargetStore for RedisTargetStore {
    async fn list(&self) -> AppResult<Vec<Target>> {
        let mut conn = self.redis.get_connection().await?;
        let ids: Vec<String> = conn.smembers(TARGETS_INDEX).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        // One pipelined round trip for the whole catalog
        let mut pipe = redis::pipe();
        for id in &ids {
            pipe.hgetall(target_key(id));
        }
        let hashes: Vec<HashMap<String, String>> = pipe.query_async(&mut conn).await?;

        // A hash without an id is an index leftover, not a target
        Ok(hashes.into_iter().filter_map(Target::from_hash).collect())
    }

    async fn get(&self, id: &str) -> AppResult<Option<Target>> {
        let mut conn = self.redis.get_connection().await?;
        let fields: HashMap<String, String> = conn.hgetall(target_key(id)).await?;
        Ok(Target::from_hash(fields))
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let mut conn = self.redis.get_connection().await?;
        Ok(conn.exists(target_key(id)).await?)
    }

    async fn create(&self, target: &Target) -> AppResult<()> {
        let mut fields: Vec<(String, String)> = vec![
            ("id".to_string(), target.id.clone()),
            ("url".to_string(), target.url.clone()),
            ("value".to_string(), target.value.clone()),
            (
                "maxAcceptsPerDay".to_string(),
                target.max_accepts_per_day.clone(),
            ),
        ];
        if let Some(accept) = &target.accept {
            fields.push(("accept".to_string(), accept.clone()));
        }

        let mut conn = self.redis.get_connection().await?;
        conn.hset_multiple::<_, _, _, ()>(target_key(&target.id), &fields)
            .await?;
        conn.sadd::<_, _, ()>(TARGETS_INDEX, &target.id).await?;
        Ok(())
    }

    async fn update(&self, id: &str, fields: &HashMap<String, String>) -> AppResult<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let pairs: Vec<(&String, &String)> = fields.iter().collect();
        let mut conn = self.redis.get_connection().await?;
        conn.hset_multiple::<_, _, _, ()>(target_key(id), &pairs)
            .await?;
        Ok(())
    }
}
