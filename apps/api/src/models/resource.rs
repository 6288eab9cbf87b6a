use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationStatus {
    Open,
}

/// A legal-aid organization listed in the resource directory. Static reference data.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalAidOrganization {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<&'static str>,
    pub website: &'static str,
    pub areas: &'static [&'static str],
    pub hours: &'static str,
    pub languages: &'static [&'static str],
    pub eligibility: &'static str,
    pub response_time: &'static str,
    pub years_active: &'static str,
    pub people_helped: &'static str,
    pub status: OrganizationStatus,
    pub locations: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergencyResource {
    pub name: &'static str,
    pub description: &'static str,
    pub phone: &'static str,
    pub available: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelfHelpKind {
    Guide,
    Database,
    Forms,
    Education,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelfHelpResource {
    pub title: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: SelfHelpKind,
}
