//! CSV catalog ingestion.
//!
//! Accepts exports with one listing per row. Features are `|`-separated
//! labels inside a single column so the file stays a plain rectangle.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::{Feature, Listing};

#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog record {record}: {reason}")]
    Record { record: usize, reason: String },
}

pub struct CatalogCsvImporter;

impl CatalogCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Listing>, CatalogImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Listing>, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut listings = Vec::new();
        for (index, row) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            // Header is row 1, so the first record lands on row 2.
            let record = index + 2;
            let row = row?;
            listings.push(row.into_listing(record)?);
        }

        Ok(listings)
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Address")]
    address: String,
    #[serde(rename = "Price")]
    price: u32,
    #[serde(rename = "Rooms")]
    rooms: u32,
    #[serde(rename = "Area")]
    area_sqm: u32,
    #[serde(rename = "Description", default)]
    description: String,
    #[serde(rename = "Features", default)]
    features: String,
    #[serde(rename = "Contact Email")]
    contact_email: String,
    #[serde(rename = "Contact Phone", default)]
    contact_phone: String,
    #[serde(rename = "Landlord")]
    landlord_name: String,
    #[serde(rename = "Available", default = "default_available")]
    available: bool,
    #[serde(rename = "Match Score", default)]
    match_score: u8,
}

fn default_available() -> bool {
    true
}

impl CatalogRow {
    fn into_listing(self, record: usize) -> Result<Listing, CatalogImportError> {
        if self.id.is_empty() {
            return Err(CatalogImportError::Record {
                record,
                reason: "listing id must not be empty".to_string(),
            });
        }
        if self.rooms == 0 {
            return Err(CatalogImportError::Record {
                record,
                reason: format!("listing {} must have at least one room", self.id),
            });
        }
        if self.match_score > 100 {
            return Err(CatalogImportError::Record {
                record,
                reason: format!(
                    "listing {} match score {} exceeds 100",
                    self.id, self.match_score
                ),
            });
        }

        let features = self
            .features
            .split('|')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(Feature::parse)
            .collect();

        Ok(Listing {
            id: self.id,
            title: self.title,
            address: self.address,
            price: self.price,
            rooms: self.rooms,
            area_sqm: self.area_sqm,
            description: self.description,
            features,
            contact_email: self.contact_email,
            contact_phone: self.contact_phone,
            landlord_name: self.landlord_name,
            available: self.available,
            match_score: self.match_score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "ID,Title,Address,Price,Rooms,Area,Description,Features,Contact Email,Contact Phone,Landlord,Available,Match Score\n";

    #[test]
    fn imports_a_well_formed_row() {
        let csv = format!(
            "{HEADER}L100,Riverside Flat,\"12 Quay Lane, Harborside\",980,2,54,Bright two-room flat,Furnished|Balcony|River View,owner@quay.example,+49 30 000 111,Petra Vogel,true,82\n"
        );
        let listings =
            CatalogCsvImporter::from_reader(csv.as_bytes()).expect("well-formed CSV imports");

        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.id, "L100");
        assert_eq!(listing.address, "12 Quay Lane, Harborside");
        assert_eq!(
            listing.features,
            vec![
                Feature::Furnished,
                Feature::Balcony,
                Feature::Other("River View".to_string())
            ]
        );
        assert_eq!(listing.match_score, 82);
        assert!(listing.available);
    }

    #[test]
    fn rejects_zero_rooms_with_record_position() {
        let csv = format!(
            "{HEADER}L101,Broom Closet,1 Nowhere St,400,0,8,,,closet@example.com,,Nobody,true,10\n"
        );
        let err = CatalogCsvImporter::from_reader(csv.as_bytes())
            .expect_err("zero rooms must be rejected");
        match err {
            CatalogImportError::Record { record, reason } => {
                assert_eq!(record, 2);
                assert!(reason.contains("at least one room"));
            }
            other => panic!("expected record error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_match_score_above_hundred() {
        let csv = format!(
            "{HEADER}L102,Overscored,2 Somewhere St,700,1,30,,,over@example.com,,Owner,true,101\n"
        );
        let err = CatalogCsvImporter::from_reader(csv.as_bytes())
            .expect_err("score above 100 must be rejected");
        assert!(matches!(err, CatalogImportError::Record { record: 2, .. }));
    }

    #[test]
    fn surfaces_malformed_numbers_as_csv_errors() {
        let csv = format!(
            "{HEADER}L103,Bad Price,3 Elsewhere St,cheap,1,30,,,bad@example.com,,Owner,true,50\n"
        );
        let err = CatalogCsvImporter::from_reader(csv.as_bytes())
            .expect_err("non-numeric price must fail");
        assert!(matches!(err, CatalogImportError::Csv(_)));
    }

    #[test]
    fn empty_feature_column_yields_no_features() {
        let csv = format!(
            "{HEADER}L104,Bare Room,4 Plain St,500,1,20,,,bare@example.com,,Owner,false,30\n"
        );
        let listings = CatalogCsvImporter::from_reader(csv.as_bytes()).expect("imports");
        assert!(listings[0].features.is_empty());
        assert!(!listings[0].available);
    }
}
