//! Target catalog service

use std::collections::HashMap;

use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::target::{CreateTarget, Target, UpdateTarget},
    repository::Repository,
};

#[derive(Clone)]
pub struct TargetsService {
    repository: Repository,
}

impl TargetsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the full target catalog
    pub async fn list(&self) -> AppResult<Vec<Target>> {
        self.repository.targets.list().await
    }

    /// Get a target by id
    pub async fn get(&self, id: &str) -> AppResult<Target> {
        self.repository
            .targets
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Target {} not found", id)))
    }

    /// Create a target, assigning it a fresh server-side id
    pub async fn create(&self, data: &CreateTarget) -> AppResult<String> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let target = Target {
            id: Uuid::new_v4().to_string(),
            url: data.url.clone(),
            value: data.value.clone().unwrap_or_default(),
            max_accepts_per_day: data.max_accepts_per_day.clone().unwrap_or_default(),
            accept: data.accept.as_ref().map(serialize_accept),
        };

        self.repository.targets.create(&target).await?;
        Ok(target.id)
    }

    /// Apply a partial update to an existing target
    ///
    /// The id is immutable; any client-supplied id has already been dropped
    /// during payload decoding.
    pub async fn update(&self, id: &str, data: &UpdateTarget) -> AppResult<()> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !self.repository.targets.exists(id).await? {
            return Err(AppError::NotFound(format!("Target {} not found", id)));
        }

        let mut fields = HashMap::new();
        if let Some(url) = &data.url {
            fields.insert("url".to_string(), url.clone());
        }
        if let Some(value) = &data.value {
            fields.insert("value".to_string(), value.clone());
        }
        if let Some(cap) = &data.max_accepts_per_day {
            fields.insert("maxAcceptsPerDay".to_string(), cap.clone());
        }
        if let Some(accept) = &data.accept {
            fields.insert("accept".to_string(), serialize_accept(accept));
        }

        self.repository.targets.update(id, &fields).await
    }
}

/// Store the accept rules the way they arrived: objects are serialized to
/// JSON text, strings pass through as-is
fn serialize_accept(accept: &serde_json::Value) -> String {
    match accept {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
