//! Listing records and the catalog sources that supply them.

pub mod import;

use serde::{Deserialize, Serialize};

pub use import::{CatalogCsvImporter, CatalogImportError};

/// A known, filterable amenity kind plus a free-text arm for everything
/// the filter never looks at. Canonical labels are exact strings the
/// catalog must use verbatim; parsing is case-sensitive so that
/// `Other("furnished")` never masquerades as [`Feature::Furnished`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Feature {
    Furnished,
    PetFriendly,
    Parking,
    Balcony,
    Other(String),
}

impl Feature {
    pub fn parse(label: &str) -> Self {
        match label {
            "Furnished" => Self::Furnished,
            "Pet-Friendly" => Self::PetFriendly,
            "Parking" => Self::Parking,
            "Balcony" => Self::Balcony,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Furnished => "Furnished",
            Self::PetFriendly => "Pet-Friendly",
            Self::Parking => "Parking",
            Self::Balcony => "Balcony",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Feature {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Feature> for String {
    fn from(value: Feature) -> Self {
        value.label().to_string()
    }
}

/// A single rental property record. Constructed once by a catalog
/// source and never mutated afterwards; the match score is supplied by
/// whatever produced the catalog, not computed here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub address: String,
    pub price: u32,
    pub rooms: u32,
    pub area_sqm: u32,
    pub description: String,
    /// Order is display-significant; membership is filter-significant.
    pub features: Vec<Feature>,
    pub contact_email: String,
    pub contact_phone: String,
    pub landlord_name: String,
    pub available: bool,
    pub match_score: u8,
}

impl Listing {
    pub fn has_feature(&self, feature: &Feature) -> bool {
        self.features.contains(feature)
    }

    pub fn feature_labels(&self) -> Vec<&str> {
        self.features.iter().map(Feature::label).collect()
    }
}

/// Where listings come from. The search never cares whether the catalog
/// is the built-in sample set, a CSV export, or a future remote feed.
pub trait CatalogSource: Send + Sync {
    fn catalog(&self) -> Result<Vec<Listing>, CatalogImportError>;
}

impl<C: CatalogSource + ?Sized> CatalogSource for Box<C> {
    fn catalog(&self) -> Result<Vec<Listing>, CatalogImportError> {
        (**self).catalog()
    }
}

/// The built-in demo catalog. Four listings spanning the price and room
/// spectrum, with externally assigned match scores 95/75/60/40.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn catalog(&self) -> Result<Vec<Listing>, CatalogImportError> {
        Ok(sample_listings())
    }
}

/// A catalog backed by a CSV export on disk, re-read on every call so a
/// replaced file is picked up without restarting.
#[derive(Debug, Clone)]
pub struct CsvFileCatalog {
    path: std::path::PathBuf,
}

impl CsvFileCatalog {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for CsvFileCatalog {
    fn catalog(&self) -> Result<Vec<Listing>, CatalogImportError> {
        CatalogCsvImporter::from_path(&self.path)
    }
}

pub fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "H001".to_string(),
            title: "Modern City Apartment".to_string(),
            address: "123 Main Street, City Center".to_string(),
            price: 1200,
            rooms: 2,
            area_sqm: 65,
            description: "Beautiful modern apartment in the heart of the city with all amenities."
                .to_string(),
            features: vec![
                Feature::Furnished,
                Feature::Balcony,
                Feature::parse("Central Heating"),
                Feature::parse("High-Speed Internet"),
            ],
            contact_email: "landlord@example.com".to_string(),
            contact_phone: "+49 123 456 7890".to_string(),
            landlord_name: "Maria Schmidt".to_string(),
            available: true,
            match_score: 95,
        },
        Listing {
            id: "H002".to_string(),
            title: "Cozy Studio Near University".to_string(),
            address: "456 College Ave, University District".to_string(),
            price: 850,
            rooms: 1,
            area_sqm: 35,
            description: "Perfect for students, close to university and public transport."
                .to_string(),
            features: vec![
                Feature::Furnished,
                Feature::parse("WiFi"),
                Feature::parse("Laundry"),
                Feature::parse("Security"),
            ],
            contact_email: "student.housing@uni.de".to_string(),
            contact_phone: "+49 987 654 3210".to_string(),
            landlord_name: "Hans Mueller".to_string(),
            available: true,
            match_score: 75,
        },
        Listing {
            id: "H003".to_string(),
            title: "Family House with Garden".to_string(),
            address: "789 Oak Street, Suburban Area".to_string(),
            price: 1800,
            rooms: 4,
            area_sqm: 120,
            description: "Spacious family house with private garden and parking space."
                .to_string(),
            features: vec![
                Feature::parse("Garden"),
                Feature::Parking,
                Feature::PetFriendly,
                Feature::parse("Dishwasher"),
            ],
            contact_email: "family.home@realty.de".to_string(),
            contact_phone: "+49 555 123 4567".to_string(),
            landlord_name: "Anna Weber".to_string(),
            available: true,
            match_score: 60,
        },
        Listing {
            id: "H004".to_string(),
            title: "Luxury Penthouse Downtown".to_string(),
            address: "321 Sky Tower, Downtown".to_string(),
            price: 2500,
            rooms: 3,
            area_sqm: 90,
            description: "Luxurious penthouse with panoramic city views and premium finishes."
                .to_string(),
            features: vec![
                Feature::parse("City View"),
                Feature::Balcony,
                Feature::parse("Elevator"),
                Feature::parse("Concierge"),
                Feature::parse("Gym"),
            ],
            contact_email: "luxury@skytower.de".to_string(),
            contact_phone: "+49 111 222 3333".to_string(),
            landlord_name: "Robert Klein".to_string(),
            available: true,
            match_score: 40,
        },
    ]
}
