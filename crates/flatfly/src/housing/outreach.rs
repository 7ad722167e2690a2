//! Landlord outreach composer.
//!
//! Three fixed skeletons, filled by plain interpolation from a listing
//! and a user profile. Deterministic by construction: no clock, no
//! randomness, no state between calls. The skeleton text is a
//! compatibility surface; edits here change what tenants actually send.

use serde::{Deserialize, Serialize};

use super::catalog::{Feature, Listing};
use super::search::InclusiveRange;

/// Substitution input for the composer. Never consulted by the search;
/// criteria and profile are deliberately independent values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub budget: InclusiveRange,
    pub preferred_area: String,
    pub room_count: u32,
    pub pet_friendly: bool,
    pub furnished: bool,
    pub balcony: bool,
    pub parking: bool,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            budget: InclusiveRange::spanning(800, 1500),
            preferred_area: "City Center".to_string(),
            room_count: 2,
            pet_friendly: false,
            furnished: true,
            balcony: true,
            parking: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutreachTemplate {
    ViewingRequest,
    Application,
    FollowUp,
}

impl OutreachTemplate {
    pub const fn ordered() -> [Self; 3] {
        [Self::ViewingRequest, Self::Application, Self::FollowUp]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewingRequest => "Viewing Request",
            Self::Application => "Application",
            Self::FollowUp => "Follow-up",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Renders subject and body for the chosen template. Total over
/// well-formed inputs; an empty listing or profile field renders as an
/// empty substitution rather than an error.
pub fn compose(listing: &Listing, profile: &UserProfile, template: OutreachTemplate) -> ComposedEmail {
    let (subject, body) = match template {
        OutreachTemplate::ViewingRequest => (
            format!("Property Viewing Request - {}", listing.title),
            viewing_request_body(listing, profile),
        ),
        OutreachTemplate::Application => (
            format!("Rental Application - {}", listing.title),
            application_body(listing, profile),
        ),
        OutreachTemplate::FollowUp => (
            format!("Follow-up: Property Inquiry - {}", listing.title),
            follow_up_body(listing, profile),
        ),
    };

    ComposedEmail {
        recipient: listing.contact_email.clone(),
        subject,
        body,
    }
}

fn viewing_request_body(listing: &Listing, profile: &UserProfile) -> String {
    let accommodation = if profile.furnished {
        "furnished accommodation"
    } else {
        "accommodation"
    };
    let pet_clause = if profile.pet_friendly {
        "that is pet-friendly"
    } else {
        ""
    };

    format!(
        "Dear {landlord},

I hope this email finds you well. I am writing to express my interest in the property located at {address}, which I found through your listing.

About myself:
- Name: {name}
- Budget: €{budget_lower} - €{budget_upper} per month
- Looking for: {room_count} room(s)
- Preferred area: {preferred_area}

I am particularly interested in this property because it matches my requirements for {accommodation} {pet_clause}.

Would it be possible to schedule a viewing at your earliest convenience? I am available most days and can be flexible with timing.

I would also appreciate any additional information about:
- Utility costs and what's included in the rent
- Lease terms and move-in requirements
- Availability date

Thank you for your time and consideration. I look forward to hearing from you soon.

Best regards,
{name}",
        landlord = listing.landlord_name,
        address = listing.address,
        name = profile.name,
        budget_lower = profile.budget.lower,
        budget_upper = profile.budget.upper,
        room_count = profile.room_count,
        preferred_area = profile.preferred_area,
    )
}

fn application_body(listing: &Listing, profile: &UserProfile) -> String {
    format!(
        "Dear {landlord},

I would like to formally apply for the rental property at {address}.

Applicant Information:
- Full Name: {name}
- Monthly Budget: €{budget_lower} - €{budget_upper}
- Desired Move-in Date: As soon as possible
- Lease Duration: 12+ months preferred

I am a reliable tenant with stable income and excellent references. I am particularly drawn to this property because of its {features} and its location in {neighborhood}.

I have attached the following documents:
- Proof of income/employment
- Previous landlord references
- ID copy
- Schufa credit report

I would be happy to provide any additional documentation you may require and am available for an interview at your convenience.

The monthly rent of €{price} fits comfortably within my budget, and I am prepared to pay the required deposit and first month's rent upon lease signing.

Thank you for considering my application. I look forward to the opportunity to discuss this further.

Best regards,
{name}",
        landlord = listing.landlord_name,
        address = listing.address,
        name = profile.name,
        budget_lower = profile.budget.lower,
        budget_upper = profile.budget.upper,
        features = join_features(&listing.features, ", "),
        neighborhood = neighborhood_fragment(&listing.address),
        price = listing.price,
    )
}

fn follow_up_body(listing: &Listing, profile: &UserProfile) -> String {
    let highlighted: Vec<&str> = listing
        .features
        .iter()
        .take(2)
        .map(Feature::label)
        .collect();

    format!(
        "Dear {landlord},

I hope you are doing well. I am following up on my previous inquiry regarding the property at {address}.

I remain very interested in this {rooms}-room property and would appreciate any updates on its availability. The property's features, particularly {highlights}, make it an ideal match for my housing needs.

If the property is still available, I would be grateful for the opportunity to:
- Schedule a viewing
- Submit a formal application
- Provide any additional information you might need

I am a serious candidate with all necessary documentation ready and can move forward quickly with the rental process.

Please let me know if there's a convenient time to discuss this further or if you need any additional information from me.

Thank you for your time.

Best regards,
{name}",
        landlord = listing.landlord_name,
        address = listing.address,
        rooms = listing.rooms,
        highlights = highlighted.join(" and "),
        name = profile.name,
    )
}

fn join_features(features: &[Feature], separator: &str) -> String {
    features
        .iter()
        .map(Feature::label)
        .collect::<Vec<_>>()
        .join(separator)
}

// Locality heuristic: the text after the last ", " in the address, or
// the whole address when no separator exists. Brittle for addresses
// that put the locality elsewhere; see DESIGN.md before changing it.
fn neighborhood_fragment(address: &str) -> &str {
    address
        .rsplit_once(", ")
        .map(|(_, after)| after)
        .unwrap_or(address)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::housing::catalog::sample_listings;

    fn first_listing() -> Listing {
        sample_listings().remove(0)
    }

    #[test]
    fn viewing_request_subject_prefixes_title() {
        let listing = first_listing();
        let email = compose(&listing, &UserProfile::default(), OutreachTemplate::ViewingRequest);
        assert_eq!(email.subject, "Property Viewing Request - Modern City Apartment");
        assert_eq!(email.recipient, "landlord@example.com");
    }

    #[test]
    fn viewing_request_reflects_profile_flags() {
        let listing = first_listing();
        let mut profile = UserProfile::default();
        profile.furnished = true;
        profile.pet_friendly = true;
        let body = compose(&listing, &profile, OutreachTemplate::ViewingRequest).body;
        assert!(body.contains("furnished accommodation that is pet-friendly."));

        profile.furnished = false;
        profile.pet_friendly = false;
        let body = compose(&listing, &profile, OutreachTemplate::ViewingRequest).body;
        // Without the pet clause the skeleton keeps its separator space.
        assert!(body.contains("requirements for accommodation ."));
        assert!(!body.contains("furnished accommodation"));
    }

    #[test]
    fn application_lists_features_and_neighborhood() {
        let listing = first_listing();
        let body = compose(&listing, &UserProfile::default(), OutreachTemplate::Application).body;
        assert!(body.contains("Furnished, Balcony, Central Heating, High-Speed Internet"));
        assert!(body.contains("its location in City Center."));
        assert!(body.contains("The monthly rent of €1200"));
    }

    #[test]
    fn neighborhood_falls_back_to_whole_address() {
        assert_eq!(neighborhood_fragment("Unterm Dach 7"), "Unterm Dach 7");
        assert_eq!(
            neighborhood_fragment("1 First St, Midtown, Old Quarter"),
            "Old Quarter"
        );
    }

    #[test]
    fn follow_up_highlights_first_two_features() {
        let listing = first_listing();
        let body = compose(&listing, &UserProfile::default(), OutreachTemplate::FollowUp).body;
        assert!(body.contains("particularly Furnished and Balcony,"));
        assert!(body.contains("this 2-room property"));
    }

    #[test]
    fn composition_is_deterministic() {
        let listing = first_listing();
        let profile = UserProfile::default();
        for template in OutreachTemplate::ordered() {
            let first = compose(&listing, &profile, template);
            let second = compose(&listing, &profile, template);
            assert_eq!(first, second);
        }
    }
}
