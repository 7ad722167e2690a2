use tracing::debug;

use super::catalog::{CatalogImportError, CatalogSource, Listing};
use super::outreach::{compose, ComposedEmail, OutreachTemplate, UserProfile};
use super::search::{filter_and_rank, FilterCriteria};

/// Catalog-backed facade over the search and the composer. Owns no
/// mutable state; every call re-reads the source so catalog swaps are
/// picked up immediately.
pub struct HousingService<C> {
    source: C,
    default_profile: UserProfile,
}

impl<C: CatalogSource> HousingService<C> {
    pub fn new(source: C, default_profile: UserProfile) -> Self {
        Self {
            source,
            default_profile,
        }
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Result<Vec<Listing>, HousingServiceError> {
        let catalog = self.source.catalog()?;
        let ranked = filter_and_rank(&catalog, criteria);
        debug!(
            total = catalog.len(),
            matched = ranked.len(),
            "ranked catalog against criteria"
        );
        Ok(ranked)
    }

    pub fn listing(&self, id: &str) -> Result<Listing, HousingServiceError> {
        self.source
            .catalog()?
            .into_iter()
            .find(|listing| listing.id == id)
            .ok_or_else(|| HousingServiceError::UnknownListing(id.to_string()))
    }

    /// Composes an outreach email for one listing. Falls back to the
    /// service's default profile when the caller supplies none.
    pub fn outreach(
        &self,
        listing_id: &str,
        template: OutreachTemplate,
        profile: Option<&UserProfile>,
    ) -> Result<ComposedEmail, HousingServiceError> {
        let listing = self.listing(listing_id)?;
        Ok(compose(
            &listing,
            profile.unwrap_or(&self.default_profile),
            template,
        ))
    }

    pub fn default_profile(&self) -> &UserProfile {
        &self.default_profile
    }
}

#[derive(Debug, thiserror::Error)]
pub enum HousingServiceError {
    #[error("no listing with id {0}")]
    UnknownListing(String),
    #[error(transparent)]
    Catalog(#[from] CatalogImportError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::housing::catalog::SampleCatalog;

    fn service() -> HousingService<SampleCatalog> {
        HousingService::new(SampleCatalog, UserProfile::default())
    }

    #[test]
    fn looks_up_listings_by_id() {
        let listing = service().listing("H003").expect("sample listing exists");
        assert_eq!(listing.title, "Family House with Garden");
    }

    #[test]
    fn unknown_listing_is_an_error() {
        let err = service().listing("H999").expect_err("unknown id");
        match err {
            HousingServiceError::UnknownListing(id) => assert_eq!(id, "H999"),
            other => panic!("expected unknown listing, got {other:?}"),
        }
    }

    #[test]
    fn outreach_uses_default_profile_when_none_supplied() {
        let email = service()
            .outreach("H001", OutreachTemplate::ViewingRequest, None)
            .expect("composes");
        assert!(email.body.contains("- Name: John Doe"));
    }
}
