//! Static directory data. Read-only; order here is the order clients see.

use crate::models::resource::{
    EmergencyResource, LegalAidOrganization, OrganizationStatus, SelfHelpKind, SelfHelpResource,
};

pub static ORGANIZATIONS: &[LegalAidOrganization] = &[
    LegalAidOrganization {
        name: "Legal Aid Society",
        description:
            "Provides free legal services to low-income individuals and families in civil matters.",
        phone: Some("1-800-555-0100"),
        website: "https://legalaid.org",
        areas: &["Housing", "Family Law", "Benefits"],
        hours: "Mon-Fri: 9am-5pm",
        languages: &["English", "Spanish", "Mandarin"],
        eligibility: "Income below 125% of federal poverty line",
        response_time: "24-48 hours",
        years_active: "75+ years",
        people_helped: "50,000+ annually",
        status: OrganizationStatus::Open,
        locations: &["New York", "Los Angeles", "Chicago"],
    },
    LegalAidOrganization {
        name: "National Housing Law Project",
        description:
            "Advocates for housing justice and provides resources for tenants facing eviction.",
        phone: Some("1-800-555-0101"),
        website: "https://nhlp.org",
        areas: &["Housing", "Eviction Defense"],
        hours: "Mon-Thu: 9am-7pm, Fri: 9am-5pm",
        languages: &["English", "Spanish"],
        eligibility: "All tenants facing housing issues",
        response_time: "Same day for emergencies",
        years_active: "50+ years",
        people_helped: "30,000+ annually",
        status: OrganizationStatus::Open,
        locations: &["Nationwide"],
    },
    LegalAidOrganization {
        name: "Pro Bono Net",
        description: "Connects people with free legal help and self-help resources online.",
        phone: Some("1-800-555-0102"),
        website: "https://probono.net",
        areas: &["General Legal Aid", "Self-Help Resources"],
        hours: "24/7 Online Access",
        languages: &["English", "Spanish", "French", "Vietnamese"],
        eligibility: "Open to all",
        response_time: "1-3 business days",
        years_active: "25+ years",
        people_helped: "100,000+ annually",
        status: OrganizationStatus::Open,
        locations: &["Online - All States"],
    },
    LegalAidOrganization {
        name: "American Bar Association Free Legal Answers",
        description: "Online platform where qualifying users can ask legal questions and receive answers from volunteer lawyers.",
        phone: None,
        website: "https://abafreelegalanswers.org",
        areas: &["General Legal Questions"],
        hours: "24/7 Online Platform",
        languages: &["English", "Spanish"],
        eligibility: "Income below 200% of federal poverty line",
        response_time: "2-5 business days",
        years_active: "10+ years",
        people_helped: "200,000+ questions answered",
        status: OrganizationStatus::Open,
        locations: &["42 States Available"],
    },
    LegalAidOrganization {
        name: "Volunteer Lawyers Project",
        description:
            "Matches low-income individuals with volunteer attorneys for free legal representation.",
        phone: Some("1-800-555-0103"),
        website: "https://vlp.org",
        areas: &["Family Law", "Immigration", "Consumer Rights"],
        hours: "Mon-Thu: 9am-7pm, Fri: 9am-5pm",
        languages: &["English", "Spanish", "Creole"],
        eligibility: "Income-based qualification required",
        response_time: "1 week for case review",
        years_active: "40+ years",
        people_helped: "15,000+ annually",
        status: OrganizationStatus::Open,
        locations: &["Boston", "Miami", "Seattle"],
    },
    LegalAidOrganization {
        name: "Immigrant Legal Resource Center",
        description: "Provides legal assistance and resources for immigrants and their families.",
        phone: Some("1-800-555-0104"),
        website: "https://ilrc.org",
        areas: &["Immigration", "Citizenship", "Deportation Defense"],
        hours: "Mon-Fri: 9am-5pm",
        languages: &["English", "Spanish", "Arabic", "Tagalog"],
        eligibility: "All immigrants regardless of status",
        response_time: "48 hours",
        years_active: "35+ years",
        people_helped: "25,000+ annually",
        status: OrganizationStatus::Open,
        locations: &["San Francisco", "Washington DC"],
    },
];

pub static EMERGENCY_RESOURCES: &[EmergencyResource] = &[
    EmergencyResource {
        name: "National Domestic Violence Hotline",
        description: "24/7 support for victims of domestic violence and abuse.",
        phone: "1-800-799-7233",
        available: "24/7",
    },
    EmergencyResource {
        name: "Eviction Defense Hotline",
        description: "Immediate assistance for tenants facing eviction.",
        phone: "1-800-555-0200",
        available: "Mon-Fri 9am-5pm",
    },
    EmergencyResource {
        name: "Legal Services Corporation",
        description: "Find local legal aid offices in your area.",
        phone: "1-800-555-0201",
        available: "Mon-Fri 9am-6pm",
    },
];

pub static SELF_HELP_RESOURCES: &[SelfHelpResource] = &[
    SelfHelpResource {
        title: "Understanding Your Eviction Notice",
        description: "Step-by-step guide to reading and responding to eviction notices.",
        kind: SelfHelpKind::Guide,
    },
    SelfHelpResource {
        title: "Tenant Rights by State",
        description: "Comprehensive database of tenant rights and protections in all 50 states.",
        kind: SelfHelpKind::Database,
    },
    SelfHelpResource {
        title: "Court Forms and Templates",
        description: "Free downloadable legal forms for common civil matters.",
        kind: SelfHelpKind::Forms,
    },
    SelfHelpResource {
        title: "Know Your Rights",
        description: "Educational resources about your legal rights in various situations.",
        kind: SelfHelpKind::Education,
    },
];
