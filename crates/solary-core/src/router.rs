//! Request routing: the decision state machine behind `/api/solar_chart`.
//!
//! One request runs straight through: authenticate, evaluate the
//! subscription, then either report subscription status or validate
//! coordinates and assemble the location's dataset. The first failing step
//! terminates the request; a repository failure at any step degrades to the
//! generic internal outcome instead of propagating.

use chrono::{DateTime, Utc};

use crate::aggregate::{self, SolarAggregate};
use crate::coords;
use crate::error::ChartError;
use crate::models::ChartRequest;
use crate::repository::ChartRepository;
use crate::subscription;

/// Terminal outcome of a chart request. Exactly one per request.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    /// Valid subscription, no coordinates supplied.
    SubscriptionStatus {
        expiration_date: DateTime<Utc>,
        valid_for_days: i64,
    },
    /// Valid subscription and coordinates; the aggregated dataset.
    Data(SolarAggregate),
    /// Any terminal error.
    Failed(ChartError),
}

impl ChartOutcome {
    /// HTTP status this outcome renders as.
    pub fn status_code(&self) -> u16 {
        match self {
            ChartOutcome::SubscriptionStatus { .. } | ChartOutcome::Data(_) => 200,
            ChartOutcome::Failed(err) => err.status_code(),
        }
    }
}

/// Drive one request through the state machine.
///
/// `now` is explicit so validity windows are testable; callers pass
/// `Utc::now()`.
pub async fn handle_chart_request<R>(
    repo: &R,
    request: &ChartRequest,
    now: DateTime<Utc>,
) -> ChartOutcome
where
    R: ChartRepository + ?Sized,
{
    match route(repo, request, now).await {
        Ok(outcome) => outcome,
        Err(_) => ChartOutcome::Failed(ChartError::Internal),
    }
}

async fn route<R>(
    repo: &R,
    request: &ChartRequest,
    now: DateTime<Utc>,
) -> anyhow::Result<ChartOutcome>
where
    R: ChartRepository + ?Sized,
{
    if request.apikey.is_empty() {
        return Ok(ChartOutcome::Failed(ChartError::UnknownApiKey));
    }
    let Some(user) = repo.find_user_by_apikey(&request.apikey).await? else {
        return Ok(ChartOutcome::Failed(ChartError::UnknownApiKey));
    };

    let expiration_date = subscription::valid_until(&user.subscriptions);
    if expiration_date <= now {
        return Ok(ChartOutcome::Failed(ChartError::NoValidSubscription));
    }

    // Subscription status report unless both coordinates are present
    let (Some(lat_raw), Some(lng_raw)) = (request.lat.as_deref(), request.lng.as_deref()) else {
        let valid_for_days = (expiration_date - now).num_days();
        return Ok(ChartOutcome::SubscriptionStatus {
            expiration_date,
            valid_for_days,
        });
    };

    let (lat, lng) = match coords::normalize(lat_raw, lng_raw) {
        Ok(pair) => pair,
        Err(err) => return Ok(ChartOutcome::Failed(err)),
    };

    let Some(location) = repo.find_location(lat, lng).await? else {
        return Ok(ChartOutcome::Failed(ChartError::LocationNotFound));
    };

    let mut samples = repo.find_samples(location.id).await?;
    if samples.is_empty() {
        // Location exists but carries no dataset yet: generate on first access
        samples = repo.create_samples(&location).await?;
    }

    Ok(ChartOutcome::Data(aggregate::aggregate(&samples)))
}
