use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::catalog::{CatalogCsvImporter, CatalogSource, Listing};
use super::outreach::{OutreachTemplate, UserProfile};
use super::search::{filter_and_rank, FilterCriteria};
use super::service::{HousingService, HousingServiceError};

/// Router builder exposing the search, listing lookup, and outreach
/// endpoints.
pub fn housing_router<C>(service: Arc<HousingService<C>>) -> Router
where
    C: CatalogSource + 'static,
{
    Router::new()
        .route("/api/v1/housing/search", post(search_handler::<C>))
        .route("/api/v1/housing/listings/:listing_id", get(listing_handler::<C>))
        .route("/api/v1/housing/outreach", post(outreach_handler::<C>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchRequest {
    #[serde(default)]
    pub(crate) criteria: FilterCriteria,
    /// Inline CSV catalog that replaces the configured source for this
    /// one request.
    #[serde(default)]
    pub(crate) catalog_csv: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) count: usize,
    pub(crate) listings: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OutreachRequest {
    pub(crate) listing_id: String,
    pub(crate) template: OutreachTemplate,
    #[serde(default)]
    pub(crate) profile: Option<UserProfile>,
}

pub(crate) async fn search_handler<C>(
    State(service): State<Arc<HousingService<C>>>,
    axum::Json(request): axum::Json<SearchRequest>,
) -> Response
where
    C: CatalogSource + 'static,
{
    let SearchRequest {
        criteria,
        catalog_csv,
    } = request;

    if let Err(error) = criteria.validate() {
        let payload = json!({ "error": error.to_string() });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    }

    let listings = match catalog_csv {
        Some(csv) => match CatalogCsvImporter::from_reader(csv.as_bytes()) {
            Ok(catalog) => Ok(filter_and_rank(&catalog, &criteria)),
            Err(error) => {
                let payload = json!({ "error": error.to_string() });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
        None => service.search(&criteria),
    };

    match listings {
        Ok(listings) => {
            let body = SearchResponse {
                count: listings.len(),
                listings,
            };
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn listing_handler<C>(
    State(service): State<Arc<HousingService<C>>>,
    Path(listing_id): Path<String>,
) -> Response
where
    C: CatalogSource + 'static,
{
    match service.listing(&listing_id) {
        Ok(listing) => (StatusCode::OK, axum::Json(listing)).into_response(),
        Err(error) => service_error_response(error),
    }
}

pub(crate) async fn outreach_handler<C>(
    State(service): State<Arc<HousingService<C>>>,
    axum::Json(request): axum::Json<OutreachRequest>,
) -> Response
where
    C: CatalogSource + 'static,
{
    let OutreachRequest {
        listing_id,
        template,
        profile,
    } = request;

    match service.outreach(&listing_id, template, profile.as_ref()) {
        Ok(email) => (StatusCode::OK, axum::Json(email)).into_response(),
        Err(error) => service_error_response(error),
    }
}

fn service_error_response(error: HousingServiceError) -> Response {
    let status = match &error {
        HousingServiceError::UnknownListing(_) => StatusCode::NOT_FOUND,
        HousingServiceError::Catalog(_) => StatusCode::BAD_REQUEST,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}
