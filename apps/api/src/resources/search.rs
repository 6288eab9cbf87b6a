//! Directory filtering: practice-area selection plus free-text search.

use serde::Deserialize;

use crate::models::resource::LegalAidOrganization;

/// Area value that disables area filtering.
pub const ALL_AREAS: &str = "all";

#[derive(Debug, Default, Deserialize)]
pub struct OrganizationFilter {
    /// Exact practice area, or `all`.
    pub area: Option<String>,
    /// Case-insensitive text matched against name, description and areas.
    /// Matched as given; only the empty string disables it.
    #[serde(default, rename = "q")]
    pub query: String,
}

impl OrganizationFilter {
    fn matches_area(&self, org: &LegalAidOrganization) -> bool {
        match self.area.as_deref() {
            None | Some(ALL_AREAS) => true,
            Some(area) => org.areas.iter().any(|a| *a == area),
        }
    }

    fn matches_query(&self, org: &LegalAidOrganization) -> bool {
        let query = self.query.to_lowercase();
        if query.is_empty() {
            return true;
        }
        org.name.to_lowercase().contains(&query)
            || org.description.to_lowercase().contains(&query)
            || org
                .areas
                .iter()
                .any(|area| area.to_lowercase().contains(&query))
    }

    pub fn matches(&self, org: &LegalAidOrganization) -> bool {
        self.matches_area(org) && self.matches_query(org)
    }
}

/// Organizations passing `filter`, in directory order.
pub fn filter_organizations<'a>(
    organizations: &'a [LegalAidOrganization],
    filter: &OrganizationFilter,
) -> Vec<&'a LegalAidOrganization> {
    organizations.iter().filter(|org| filter.matches(org)).collect()
}

/// Distinct practice areas in order of first appearance.
pub fn practice_areas(organizations: &[LegalAidOrganization]) -> Vec<&'static str> {
    let mut areas: Vec<&'static str> = Vec::new();
    for area in organizations.iter().flat_map(|org| org.areas.iter().copied()) {
        if !areas.contains(&area) {
            areas.push(area);
        }
    }
    areas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::directory::ORGANIZATIONS;

    fn names(filter: &OrganizationFilter) -> Vec<&'static str> {
        filter_organizations(ORGANIZATIONS, filter)
            .into_iter()
            .map(|org| org.name)
            .collect()
    }

    fn filter(area: Option<&str>, query: &str) -> OrganizationFilter {
        OrganizationFilter {
            area: area.map(str::to_string),
            query: query.to_string(),
        }
    }

    #[test]
    fn test_no_filter_returns_everything_in_order() {
        let all = names(&OrganizationFilter::default());
        assert_eq!(all.len(), ORGANIZATIONS.len());
        assert_eq!(all[0], "Legal Aid Society");
        assert_eq!(names(&filter(Some("all"), "")).len(), ORGANIZATIONS.len());
    }

    #[test]
    fn test_area_filter_is_exact() {
        assert_eq!(
            names(&filter(Some("Housing"), "")),
            vec!["Legal Aid Society", "National Housing Law Project"]
        );
        assert!(names(&filter(Some("housing"), "")).is_empty());
    }

    #[test]
    fn test_query_matches_name_description_and_area() {
        assert_eq!(names(&filter(None, "pro bono")), vec!["Pro Bono Net"]);
        assert_eq!(
            names(&filter(None, "EVICTION")),
            vec!["National Housing Law Project"]
        );
        assert_eq!(
            names(&filter(None, "citizenship")),
            vec!["Immigrant Legal Resource Center"]
        );
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        assert_eq!(names(&filter(None, "pro bono ")), vec!["Pro Bono Net"]);
        assert!(names(&filter(None, "  pro bono")).is_empty());
        // Every name contains a space.
        assert_eq!(names(&filter(None, " ")).len(), ORGANIZATIONS.len());
    }

    #[test]
    fn test_area_and_query_combine() {
        assert_eq!(
            names(&filter(Some("Immigration"), "volunteer")),
            vec!["Volunteer Lawyers Project"]
        );
        assert!(names(&filter(Some("Housing"), "immigra")).is_empty());
    }

    #[test]
    fn test_query_does_not_search_locations() {
        assert!(names(&filter(None, "Seattle")).is_empty());
    }

    #[test]
    fn test_practice_areas_are_unique_and_ordered() {
        let areas = practice_areas(ORGANIZATIONS);
        assert_eq!(&areas[..4], &["Housing", "Family Law", "Benefits", "Eviction Defense"]);
        assert_eq!(areas.iter().filter(|a| **a == "Immigration").count(), 1);
        assert_eq!(areas.len(), 11);
    }
}
