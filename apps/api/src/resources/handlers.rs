//! Axum route handlers for the Resources API. All read-only.

use axum::{extract::Query, Json};
use tracing::debug;

use crate::models::resource::{EmergencyResource, LegalAidOrganization, SelfHelpResource};
use crate::resources::directory::{EMERGENCY_RESOURCES, ORGANIZATIONS, SELF_HELP_RESOURCES};
use crate::resources::search::{filter_organizations, practice_areas, OrganizationFilter};

/// GET /api/resources/organizations?area=&q=
pub async fn handle_list_organizations(
    Query(filter): Query<OrganizationFilter>,
) -> Json<Vec<&'static LegalAidOrganization>> {
    let organizations = filter_organizations(ORGANIZATIONS, &filter);
    debug!(
        area = ?filter.area,
        query = %filter.query,
        matched = organizations.len(),
        "filtered organizations"
    );
    Json(organizations)
}

/// GET /api/resources/areas
pub async fn handle_list_areas() -> Json<Vec<&'static str>> {
    Json(practice_areas(ORGANIZATIONS))
}

/// GET /api/resources/emergency
pub async fn handle_list_emergency() -> Json<&'static [EmergencyResource]> {
    Json(EMERGENCY_RESOURCES)
}

/// GET /api/resources/self-help
pub async fn handle_list_self_help() -> Json<&'static [SelfHelpResource]> {
    Json(SELF_HELP_RESOURCES)
}
