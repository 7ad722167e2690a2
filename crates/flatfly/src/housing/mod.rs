//! Listing catalog, property search, and landlord outreach.

pub mod catalog;
mod outreach;
pub mod router;
mod search;
mod service;

pub use outreach::{compose, ComposedEmail, OutreachTemplate, UserProfile};
pub use router::housing_router;
pub use search::{
    filter_and_rank, CriteriaError, FeatureToggle, FilterCriteria, InclusiveRange, ANY_AREA,
};
pub use service::{HousingService, HousingServiceError};
