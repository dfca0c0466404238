//! Error taxonomy for the chart API.
//!
//! Every terminal failure of a chart request is one of these kinds; each maps
//! 1:1 to an HTTP status and a fixed user-facing message. None of them is
//! retryable.

use thiserror::Error;

/// Portal links embedded in the auth and subscription error messages.
#[derive(Debug, Clone)]
pub struct PortalUrls {
    pub login: String,
    pub signup: String,
}

impl Default for PortalUrls {
    fn default() -> Self {
        Self {
            login: "https://pro.solary.org/login".to_string(),
            signup: "https://pro.solary.org/signup?role_id=9".to_string(),
        }
    }
}

/// Terminal error outcomes of a chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("unknown api key")]
    UnknownApiKey,
    #[error("no valid subscription")]
    NoValidSubscription,
    #[error("parameters out of range")]
    ParametersOutOfRange,
    #[error("location not found")]
    LocationNotFound,
    #[error("internal error")]
    Internal,
}

impl ChartError {
    /// HTTP status this error renders as.
    pub fn status_code(&self) -> u16 {
        match self {
            ChartError::UnknownApiKey => 400,
            ChartError::NoValidSubscription => 402,
            ChartError::ParametersOutOfRange => 400,
            ChartError::LocationNotFound => 404,
            ChartError::Internal => 500,
        }
    }

    /// The message placed in the response `error` field.
    pub fn user_message(&self, urls: &PortalUrls) -> String {
        match self {
            ChartError::UnknownApiKey => format!(
                "Unknown ApiKey. Please sign in at <a href='{}' title='Login at pro.solary.org'>pro.solary.org</a> to check your key.",
                urls.login
            ),
            ChartError::NoValidSubscription => format!(
                "You don't have any valid subscriptions. Visit <a href='{}' title='Sign up at pro.solary.org'>pro.solary.org</a> to acquire one now.",
                urls.signup
            ),
            ChartError::ParametersOutOfRange => "Parameters out of range".to_string(),
            ChartError::LocationNotFound => "Location not found".to_string(),
            ChartError::Internal => "An unexpected error occurred".to_string(),
        }
    }
}
