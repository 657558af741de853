//! Business logic services

pub mod matcher;
pub mod redis;
pub mod routing;
pub mod targets;

use crate::{config::RoutingConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub targets: targets::TargetsService,
    pub routing: routing::RoutingService,
    pub redis: redis::RedisService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        routing_config: RoutingConfig,
        redis_service: redis::RedisService,
    ) -> Self {
        Self {
            targets: targets::TargetsService::new(repository.clone()),
            routing: routing::RoutingService::new(
                repository,
                routing_config.counter_ttl_seconds,
            ),
            redis: redis_service,
        }
    }
}
