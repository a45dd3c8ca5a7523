//! Services and industries offered by the company.
//!
//! Drives the overview pages, the per-offering pages, the navigation menus
//! and the service choices of the quote form.

/// A service or an industry with its own page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offering {
    pub template_id: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub highlights: &'static [&'static str],
}

pub const SERVICES: &[Offering] = &[
    Offering {
        template_id: "services/inbound",
        path: "/services/inbound",
        title: "Inbound Call Centre",
        summary: "Round-the-clock customer care, order taking and help desk support handled by trained agents in your brand's voice.",
        highlights: &[
            "24/7 customer support lines",
            "Order processing and reservations",
            "Technical help desk",
            "Call overflow and after-hours cover",
        ],
    },
    Offering {
        template_id: "services/outbound",
        path: "/services/outbound",
        title: "Outbound Call Centre",
        summary: "Lead generation, appointment setting and customer outreach campaigns run to your scripts and compliance rules.",
        highlights: &[
            "Lead generation and qualification",
            "Appointment setting",
            "Customer surveys and follow-ups",
            "Win-back and renewal campaigns",
        ],
    },
    Offering {
        template_id: "services/data_scrubbing",
        path: "/services/data-scrubbing",
        title: "Data Scrubbing",
        summary: "Clean, deduplicated and verified contact data so your campaigns reach real people and stay compliant.",
        highlights: &[
            "Duplicate removal",
            "Phone and address verification",
            "Do-not-call list screening",
            "Data enrichment",
        ],
    },
    Offering {
        template_id: "services/software_development",
        path: "/services/software-development",
        title: "Software Development",
        summary: "Custom CRM integrations, dialer tooling and business applications built by our in-house engineering team.",
        highlights: &[
            "CRM and dialer integrations",
            "Custom web applications",
            "Reporting dashboards",
            "Maintenance and support",
        ],
    },
    Offering {
        template_id: "services/digital_marketing",
        path: "/services/digital-marketing",
        title: "Digital Marketing",
        summary: "Search, social and paid campaigns that feed qualified leads straight to your sales team.",
        highlights: &[
            "Search engine optimisation",
            "Social media management",
            "Pay-per-click campaigns",
            "Conversion tracking",
        ],
    },
    Offering {
        template_id: "services/website_development",
        path: "/services/website-development",
        title: "Website Development",
        summary: "Fast, responsive websites and landing pages designed to turn visitors into customers.",
        highlights: &[
            "Responsive design",
            "Landing pages for campaigns",
            "E-commerce storefronts",
            "Hosting and care plans",
        ],
    },
];

pub const INDUSTRIES: &[Offering] = &[
    Offering {
        template_id: "industries/insurance",
        path: "/industries/insurance",
        title: "Insurance",
        summary: "Policy enquiries, claims intake and renewal campaigns for carriers and agencies.",
        highlights: &[
            "First notice of loss intake",
            "Policy renewals",
            "Final expense and Medicare campaigns",
        ],
    },
    Offering {
        template_id: "industries/healthcare",
        path: "/industries/healthcare",
        title: "Healthcare",
        summary: "Patient scheduling, reminders and support lines handled with care and confidentiality.",
        highlights: &[
            "Appointment scheduling",
            "Patient reminders",
            "Insurance verification",
        ],
    },
    Offering {
        template_id: "industries/financial",
        path: "/industries/financial",
        title: "Financial Services",
        summary: "Account servicing, collections support and lead qualification for lenders and advisers.",
        highlights: &[
            "Account servicing",
            "Loan lead qualification",
            "Payment reminders",
        ],
    },
    Offering {
        template_id: "industries/real_estate",
        path: "/industries/real-estate",
        title: "Real Estate",
        summary: "Seller and buyer lead generation, cold calling and appointment setting for agents and investors.",
        highlights: &[
            "Motivated seller outreach",
            "Buyer follow-ups",
            "Showing appointments",
        ],
    },
    Offering {
        template_id: "industries/it",
        path: "/industries/information-technology",
        title: "Information Technology",
        summary: "Technical support desks and B2B appointment setting for software and IT service companies.",
        highlights: &[
            "Tier 1 technical support",
            "B2B appointment setting",
            "Product onboarding calls",
        ],
    },
];

/// Look up a service or industry by template identifier.
pub fn find(template_id: &str) -> Option<&'static Offering> {
    SERVICES
        .iter()
        .chain(INDUSTRIES)
        .find(|o| o.template_id == template_id)
}
