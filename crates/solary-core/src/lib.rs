pub mod aggregate;
pub mod coords;
pub mod error;
pub mod models;
pub mod repository;
pub mod router;
pub mod solar;
pub mod subscription;

pub use aggregate::{aggregate, SolarAggregate};
pub use coords::normalize;
pub use error::{ChartError, PortalUrls};
pub use models::{ChartRequest, ChartSolarSample, Location, Subscription, User};
pub use repository::ChartRepository;
pub use router::{handle_chart_request, ChartOutcome};
pub use solar::{generate_samples, SAMPLES_PER_DAY};
pub use subscription::{is_valid, valid_until};
