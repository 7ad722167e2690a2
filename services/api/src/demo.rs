use std::path::PathBuf;

use clap::Args;

use crate::infra::toggle_from_flag;
use flatfly::assistant;
use flatfly::error::AppError;
use flatfly::housing::catalog::{sample_listings, CatalogCsvImporter, Listing};
use flatfly::housing::{
    compose, filter_and_rank, FilterCriteria, InclusiveRange, OutreachTemplate, UserProfile,
};
use flatfly::onboarding::{Checklist, TaskStatus};

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Lower price bound (inclusive)
    #[arg(long, default_value_t = 0)]
    pub(crate) min_price: u32,
    /// Upper price bound (inclusive)
    #[arg(long, default_value_t = 3000)]
    pub(crate) max_price: u32,
    /// Minimum room count (inclusive)
    #[arg(long, default_value_t = 1)]
    pub(crate) min_rooms: u32,
    /// Maximum room count (inclusive)
    #[arg(long, default_value_t = 5)]
    pub(crate) max_rooms: u32,
    /// Area label; "Any" disables the constraint
    #[arg(long, default_value = "Any")]
    pub(crate) area: String,
    /// Require (true) or exclude (false) furnished listings
    #[arg(long)]
    pub(crate) furnished: Option<bool>,
    /// Require (true) or exclude (false) pet-friendly listings
    #[arg(long)]
    pub(crate) pet_friendly: Option<bool>,
    /// Require (true) or exclude (false) listings with parking
    #[arg(long)]
    pub(crate) parking: Option<bool>,
    /// Require (true) or exclude (false) listings with a balcony
    #[arg(long)]
    pub(crate) balcony: Option<bool>,
    /// Filter a CSV catalog export instead of the built-in sample set
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

impl SearchArgs {
    fn criteria(&self) -> Result<FilterCriteria, AppError> {
        let criteria = FilterCriteria {
            price: InclusiveRange::spanning(self.min_price, self.max_price),
            rooms: InclusiveRange::spanning(self.min_rooms, self.max_rooms),
            area: self.area.clone(),
            furnished: toggle_from_flag(self.furnished),
            pet_friendly: toggle_from_flag(self.pet_friendly),
            parking: toggle_from_flag(self.parking),
            balcony: toggle_from_flag(self.balcony),
        };
        criteria.validate()?;
        Ok(criteria)
    }

    fn catalog(&self) -> Result<Vec<Listing>, AppError> {
        match &self.catalog_csv {
            Some(path) => CatalogCsvImporter::from_path(path).map_err(AppError::from),
            None => Ok(sample_listings()),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Listing the outreach portion of the demo writes to
    #[arg(long, default_value = "H001")]
    pub(crate) listing: String,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let criteria = args.criteria()?;
    let catalog = args.catalog()?;
    let ranked = filter_and_rank(&catalog, &criteria);

    println!("{} of {} properties match", ranked.len(), catalog.len());
    render_listing_table(&ranked);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = sample_listings();
    let profile = UserProfile::default();

    println!("== FlatFly demo ==");
    println!();
    println!("Searching with the default criteria:");
    let ranked = filter_and_rank(&catalog, &FilterCriteria::default());
    render_listing_table(&ranked);

    let listing = catalog
        .iter()
        .find(|listing| listing.id == args.listing)
        .ok_or_else(|| {
            flatfly::housing::HousingServiceError::UnknownListing(args.listing.clone())
        })?;

    println!();
    println!("Composing outreach for {} ({}):", listing.id, listing.title);
    for template in OutreachTemplate::ordered() {
        let email = compose(listing, &profile, template);
        println!();
        println!("--- {} ---", template.label());
        println!("To: {}", email.recipient);
        println!("Subject: {}", email.subject);
        println!();
        println!("{}", email.body);
    }

    println!();
    println!("Onboarding checklist:");
    let checklist = Checklist::relocation_default();
    for status in TaskStatus::ordered() {
        let items = checklist.with_status(status);
        println!("  {} ({})", status.label(), items.len());
        for item in items {
            println!("    - [{}] {} (priority {})", item.id, item.title, item.priority);
        }
    }
    let progress = checklist.progress();
    println!("  {}% complete", progress.percent_complete);

    println!();
    println!("Assistant sample exchange:");
    let question = "Where do I start with housing?";
    println!("  Q: {question}");
    println!("  A: {}", assistant::reply(question));

    Ok(())
}

fn render_listing_table(listings: &[Listing]) {
    if listings.is_empty() {
        println!("  (no matching properties)");
        return;
    }

    for listing in listings {
        println!(
            "  [{:>3}%] {} - {} | €{}/month | {} room(s) | {} m²",
            listing.match_score,
            listing.id,
            listing.title,
            listing.price,
            listing.rooms,
            listing.area_sqm
        );
        println!("         {}", listing.address);
    }
}
