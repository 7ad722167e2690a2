//! Property filtering and ranking.
//!
//! [`filter_and_rank`] is a pure function of the catalog and the active
//! criteria: the hosting layer re-runs it in full on every criteria or
//! catalog change rather than maintaining any incremental state.

use serde::{Deserialize, Serialize};

use super::catalog::{Feature, Listing};

/// Sentinel area label that disables the area constraint.
pub const ANY_AREA: &str = "Any";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("{field} range is inverted: lower bound {lower} exceeds upper bound {upper}")]
    InvertedRange {
        field: &'static str,
        lower: u32,
        upper: u32,
    },
}

/// Closed integer interval. An inverted range is safe to evaluate and
/// simply contains nothing; [`FilterCriteria::validate`] rejects it up
/// front for callers that want the stricter contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InclusiveRange {
    pub lower: u32,
    pub upper: u32,
}

impl InclusiveRange {
    pub const fn spanning(lower: u32, upper: u32) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Tri-state feature constraint: require the feature, require its
/// absence, or ignore it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureToggle {
    Require,
    Exclude,
    #[default]
    Any,
}

impl FeatureToggle {
    pub fn admits(self, present: bool) -> bool {
        match self {
            Self::Require => present,
            Self::Exclude => !present,
            Self::Any => true,
        }
    }
}

/// The active set of user-chosen filter constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub price: InclusiveRange,
    pub rooms: InclusiveRange,
    /// `"Any"` disables the constraint; anything else must appear in
    /// the listing address as a case-insensitive substring.
    pub area: String,
    pub furnished: FeatureToggle,
    pub pet_friendly: FeatureToggle,
    pub parking: FeatureToggle,
    pub balcony: FeatureToggle,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price: InclusiveRange::spanning(0, 3000),
            rooms: InclusiveRange::spanning(1, 5),
            area: ANY_AREA.to_string(),
            furnished: FeatureToggle::Any,
            pet_friendly: FeatureToggle::Any,
            parking: FeatureToggle::Any,
            balcony: FeatureToggle::Any,
        }
    }
}

impl FilterCriteria {
    /// Construction-time range validation. Criteria arriving from the
    /// wire or from a UI should pass through here once; evaluation
    /// itself stays tolerant of inverted ranges.
    pub fn validate(&self) -> Result<(), CriteriaError> {
        for (field, range) in [("price", self.price), ("rooms", self.rooms)] {
            if range.lower > range.upper {
                return Err(CriteriaError::InvertedRange {
                    field,
                    lower: range.lower,
                    upper: range.upper,
                });
            }
        }
        Ok(())
    }

    fn admits(&self, listing: &Listing) -> bool {
        self.price.contains(listing.price)
            && self.rooms.contains(listing.rooms)
            && area_matches(&listing.address, &self.area)
            && self.furnished.admits(listing.has_feature(&Feature::Furnished))
            && self
                .pet_friendly
                .admits(listing.has_feature(&Feature::PetFriendly))
            && self.parking.admits(listing.has_feature(&Feature::Parking))
            && self.balcony.admits(listing.has_feature(&Feature::Balcony))
    }
}

fn area_matches(address: &str, area: &str) -> bool {
    area == ANY_AREA || address.to_lowercase().contains(&area.to_lowercase())
}

/// Returns the subset of `catalog` admitted by `criteria`, ordered by
/// match score descending. The sort is stable: listings with equal
/// scores keep their relative catalog order, which callers rely on.
pub fn filter_and_rank(catalog: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let mut admitted: Vec<Listing> = catalog
        .iter()
        .filter(|listing| criteria.admits(listing))
        .cloned()
        .collect();
    admitted.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    admitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::housing::catalog::sample_listings;

    fn listing(id: &str, score: u8) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            address: "1 Test Street, Testville".to_string(),
            price: 1000,
            rooms: 2,
            area_sqm: 50,
            description: String::new(),
            features: Vec::new(),
            contact_email: "test@example.com".to_string(),
            contact_phone: String::new(),
            landlord_name: "Test Landlord".to_string(),
            available: true,
            match_score: score,
        }
    }

    #[test]
    fn toggle_admits_matrix() {
        assert!(FeatureToggle::Any.admits(true));
        assert!(FeatureToggle::Any.admits(false));
        assert!(FeatureToggle::Require.admits(true));
        assert!(!FeatureToggle::Require.admits(false));
        assert!(FeatureToggle::Exclude.admits(false));
        assert!(!FeatureToggle::Exclude.admits(true));
    }

    #[test]
    fn area_matching_is_case_insensitive_substring() {
        assert!(area_matches("456 College Ave, University District", "university district"));
        assert!(area_matches("456 College Ave, University District", "COLLEGE"));
        assert!(!area_matches("456 College Ave, University District", "Downtown"));
        assert!(area_matches("anything at all", ANY_AREA));
    }

    #[test]
    fn validate_rejects_inverted_ranges() {
        let mut criteria = FilterCriteria::default();
        criteria.price = InclusiveRange::spanning(2000, 500);
        let err = criteria.validate().expect_err("inverted price range");
        assert_eq!(
            err,
            CriteriaError::InvertedRange {
                field: "price",
                lower: 2000,
                upper: 500
            }
        );
    }

    #[test]
    fn inverted_range_evaluates_to_empty_rather_than_panicking() {
        let mut criteria = FilterCriteria::default();
        criteria.rooms = InclusiveRange::spanning(4, 2);
        assert!(filter_and_rank(&sample_listings(), &criteria).is_empty());
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let catalog = vec![
            listing("T1", 50),
            listing("T2", 80),
            listing("T3", 50),
            listing("T4", 50),
            listing("T5", 90),
        ];
        let ranked = filter_and_rank(&catalog, &FilterCriteria::default());
        let ids: Vec<&str> = ranked.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["T5", "T2", "T1", "T3", "T4"]);
    }

    #[test]
    fn exclude_toggle_requires_feature_absence() {
        let mut criteria = FilterCriteria::default();
        criteria.furnished = FeatureToggle::Exclude;
        let ranked = filter_and_rank(&sample_listings(), &criteria);
        let ids: Vec<&str> = ranked.iter().map(|l| l.id.as_str()).collect();
        // H001 and H002 are furnished; only the other two survive.
        assert_eq!(ids, ["H003", "H004"]);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        assert!(filter_and_rank(&[], &FilterCriteria::default()).is_empty());
    }
}
