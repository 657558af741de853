//! Routing decision engine
//!
//! One decision is a sequential pass over the catalog: keep the targets
//! whose rules accept the visitor, drop those at their daily cap, pick the
//! highest bid and record the accept against its counter.

use chrono::{NaiveDate, Utc};

use crate::{
    error::AppResult,
    models::{decision::Decision, target::Target, visitor::Visitor},
    repository::Repository,
    services::matcher,
};

#[derive(Clone)]
pub struct RoutingService {
    repository: Repository,
    counter_ttl_seconds: u64,
}

impl RoutingService {
    pub fn new(repository: Repository, counter_ttl_seconds: u64) -> Self {
        Self {
            repository,
            counter_ttl_seconds,
        }
    }

    /// Decide which target, if any, receives this visitor
    ///
    /// A successful accept has already been recorded against the winner's
    /// daily counter when this returns. Store failures abort the decision:
    /// the caller is never told "accept" unless the accept was durably
    /// counted.
    pub async fn decide(&self, visitor: &Visitor) -> AppResult<Decision> {
        let targets = self.repository.targets.list().await?;
        if targets.is_empty() {
            return Ok(Decision::Reject);
        }

        let matched: Vec<Target> = targets
            .into_iter()
            .filter(|target| matcher::matches(target, visitor))
            .collect();
        if matched.is_empty() {
            return Ok(Decision::Reject);
        }

        // "Today" is the server's wall-clock UTC date, not the visitor's
        let today = Utc::now().date_naive();
        let eligible = self.filter_by_daily_limit(matched, today).await?;
        if eligible.is_empty() {
            return Ok(Decision::Reject);
        }

        let winner = select_highest_bid(&eligible);

        // Check-then-increment: the cap is a soft bound that concurrent
        // decisions racing on the same counter can overshoot
        let count = self
            .repository
            .counters
            .increment(&winner.id, today)
            .await?;
        if count == 1 {
            self.repository
                .counters
                .set_expiry(&winner.id, today, self.counter_ttl_seconds)
                .await?;
        }

        tracing::debug!(target_id = %winner.id, count, "Accept recorded");

        Ok(Decision::Accept {
            url: winner.url.clone(),
        })
    }

    /// Drop candidates whose daily counter has reached their cap
    ///
    /// One batched counter read covers all candidates; a missing counter
    /// reads as 0. Pure with respect to the snapshot it reads.
    async fn filter_by_daily_limit(
        &self,
        candidates: Vec<Target>,
        today: NaiveDate,
    ) -> AppResult<Vec<Target>> {
        let ids: Vec<String> = candidates.iter().map(|t| t.id.clone()).collect();
        let counts = self.repository.counters.get_many(&ids, today).await?;

        Ok(candidates
            .into_iter()
            .zip(counts)
            .filter(|(target, count)| *count < target.daily_cap())
            .map(|(target, _)| target)
            .collect())
    }
}

/// Highest bid wins; ties keep the first candidate in filtered order
fn select_highest_bid(eligible: &[Target]) -> &Target {
    let mut winner = &eligible[0];
    for target in &eligible[1..] {
        if target.bid_value() > winner.bid_value() {
            winner = target;
        }
    }
    winner
}
