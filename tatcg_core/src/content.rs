//! Static site content: services, offices, testimonials and the rest of the
//! copy the pages lay out. Pure data.

use crate::navigation::PageId;

/// Glyph a card or badge shows. The landing app maps these to inline SVG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Building,
    TrendingUp,
    GraduationCap,
    Briefcase,
    Shield,
    BarChart,
    Target,
    BadgeCheck,
    Mail,
    MapPin,
    Clock,
    Send,
    Star,
}

/// A headed paragraph inside a service's long description, with optional
/// sub-items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceHighlight {
    pub heading: Option<&'static str>,
    pub text: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub slug: &'static str,
    pub icon: Icon,
    pub title: &'static str,
    /// One-liner for the home-page card.
    pub summary: &'static str,
    /// Lead paragraph on the services page.
    pub detail: &'static str,
    pub highlights: &'static [ServiceHighlight],
    pub details: &'static [&'static str],
}

impl ServiceDescriptor {
    /// Bullets shown on the home-page preview card.
    pub fn preview_details(&self) -> &'static [&'static str] {
        let details = self.details;
        &details[..details.len().min(4)]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Office {
    pub country: &'static str,
    pub address: &'static str,
    pub street: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub org: &'static str,
    pub rating: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metric {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaseStudy {
    pub title: &'static str,
    pub industry: &'static str,
    pub outcome: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolicySection {
    pub title: &'static str,
    pub body: &'static str,
}

/// `<select>` option on the contact form. `value` is what gets posted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceInterest {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactDetails {
    pub email: &'static str,
    pub hours: &'static str,
    pub response_window: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub page: PageId,
    pub label: &'static str,
}

pub const COMPANY_NAME: &str = "TAT Consulting Group";
pub const COMPANY_LEGAL_NAME: &str = "TAT Consulting Group, Inc.";
pub const COMPANY_TAGLINE: &str = "Business • Tax • Talent";
pub const REGIONS: &str = "Liberia • Sierra Leone • West Africa";

pub const MENU: [MenuItem; 5] = [
    MenuItem { page: PageId::Home, label: PageId::Home.default_label() },
    MenuItem { page: PageId::Services, label: PageId::Services.default_label() },
    MenuItem { page: PageId::Contact, label: PageId::Contact.default_label() },
    MenuItem { page: PageId::Jobs, label: PageId::Jobs.default_label() },
    MenuItem { page: PageId::Privacy, label: PageId::Privacy.default_label() },
];

pub const CONTACT: ContactDetails = ContactDetails {
    email: "frontdesk@tatconsg.com",
    hours: "Mon–Fri: 9am–6pm",
    response_window: "24–48 hours",
};

pub const SERVICES: &[ServiceDescriptor] = &[
    ServiceDescriptor {
        slug: "business",
        icon: Icon::Building,
        title: "Business Advisory",
        summary: "Executive-grade strategy and operational execution that turns complexity into momentum.",
        detail: "Our business advisory practice helps clients strengthen resilience, governance, and growth through strategic interventions.",
        highlights: &[
            ServiceHighlight {
                heading: Some("Human Resources Outsource"),
                text: "Recruiting, onboarding, management, regulatory compliance, salary processing of local and expat staff.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Business Continuity & Succession Planning"),
                text: "Designing transition frameworks and risk management strategies for sustainable operations.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Extractive Sector Concession Planning & Negotiation"),
                text: "Structuring fiscal terms, advising on contract negotiations, and ensuring compliance with local content laws.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Special Projects Support"),
                text: "",
                items: &[
                    "Fixed Asset Verification",
                    "Inventory Verification & Management",
                    "Business Process Improvement and Internal Control Design",
                ],
            },
        ],
        details: &[
            "Strategic Planning",
            "M&A Support",
            "Due Diligence",
            "Business Restructuring",
            "Process Design",
            "Asset Verification",
        ],
    },
    ServiceDescriptor {
        slug: "tax",
        icon: Icon::TrendingUp,
        title: "Tax Advisory",
        summary: "Transfer pricing, compliance, and dispute support engineered to withstand regulatory pressure.",
        detail: "TAT offers end-to-end tax solutions that combine technical accuracy with strategic insight, ensuring compliance and efficiency across jurisdictions.",
        highlights: &[
            ServiceHighlight {
                heading: Some("Transfer Pricing Documentation & Planning"),
                text: "Aligning intercompany transactions with OECD and local requirements.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Tax Dispute & Resolution"),
                text: "Managing audits, appeals, and settlements with tax authorities.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Tax Health Check"),
                text: "Risk mitigation and planning optimisation.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("M&A Due Diligence"),
                text: "Pre- and post-acquisition assessments for potential tax exposures and integration efficiency.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Tax Compliance & Reporting"),
                text: "Preparation and filing of returns, and tax computations.",
                items: &[],
            },
        ],
        details: &[
            "Transfer Pricing",
            "Tax Compliance",
            "Dispute Resolution",
            "Fiscal Modeling",
            "Cross-border Advisory",
            "Tax Risk Assessment",
        ],
    },
    ServiceDescriptor {
        slug: "training",
        icon: Icon::GraduationCap,
        title: "Professional Development",
        summary: "High-impact training, internships, and talent systems built to raise performance across teams.",
        detail: "We bridge the gap between academic learning and industry readiness through practical, results-driven training programs.",
        highlights: &[
            ServiceHighlight {
                heading: Some("Onboarding Training"),
                text: "Orientation programs for new hires, integrating culture, compliance, and performance expectations.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Junior Executive Program"),
                text: "Foundational business, leadership, and communication training for early-career professionals.",
                items: &[],
            },
            ServiceHighlight {
                heading: Some("Sector Series"),
                text: "Industry-specific modules (Telecom, Extractives, Aviation, Finance) developed with partners and experts.",
                items: &[],
            },
            ServiceHighlight {
                heading: None,
                text: "Delivery Options: At TAT model training facilities, at client sites, or virtually through our hybrid learning platforms.",
                items: &[],
            },
        ],
        details: &[
            "Corporate Training",
            "Internship Programs",
            "Leadership Development",
            "Technical Skills",
            "Certification Support",
            "Capacity Building",
        ],
    },
];

pub const OFFICES: &[Office] = &[
    Office {
        country: "LIBERIA",
        address: "2nd Floor, Danny Horton Building",
        street: "A-1254 Horton Avenue, Monrovia",
    },
    Office {
        country: "SIERRA LEONE",
        address: "22 Wellington Street",
        street: "Freetown, Sierra Leone",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "TAT delivered transfer pricing documentation that stood up to regulatory scrutiny and accelerated executive decision-making.",
        author: "CFO",
        org: "Telecommunications",
        rating: 5,
    },
    Testimonial {
        quote: "The team brought discipline and clarity to a complex asset verification effort. Fast, credible, and executive-ready.",
        author: "Finance Manager",
        org: "Extractives",
        rating: 5,
    },
    Testimonial {
        quote: "Operationally sharp. TAT streamlined our people ops and reduced admin burden while improving controls and reporting.",
        author: "Operations Director",
        org: "Logistics",
        rating: 5,
    },
];

pub const METRICS: &[Metric] = &[
    Metric { value: "15+", label: "Years of advisory execution" },
    Metric { value: "200+", label: "Client engagements delivered" },
    Metric { value: "2 Countries", label: "Regional footprint" },
];

pub const CAPABILITIES: &[&str] = &[
    "Transfer Pricing",
    "Dispute Resolution",
    "M&A Due Diligence",
    "Asset Verification",
    "HR Outsourcing",
    "Capacity Building",
];

pub const VALUE_POINTS: &[&str] = &[
    "Board-ready reporting & documentation",
    "Risk-led compliance posture",
    "Execution velocity with control",
    "Senior advisory accountability",
    "Cross-border advisory discipline",
    "Trusted stakeholder management",
];

pub const INDUSTRIES: &[&str] = &["Extractives", "Telecom", "Logistics", "Finance", "Education"];

pub const ENGAGEMENT_STEPS: &[&str] = &[
    "Executive-grade discovery call",
    "Clear scope and deliverable definition",
    "Timeline + stakeholders aligned",
    "Confidentiality-first engagement",
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        title: "Transfer Pricing Documentation & Defense",
        industry: "Telecom",
        outcome: "Defensible documentation + faster regulatory alignment",
        bullets: &[
            "Documentation aligned to local requirements and governance expectations",
            "Clear assumptions and audit-ready artifacts",
            "Executive summary for leadership decision-making",
        ],
    },
    CaseStudy {
        title: "Asset Verification & Controls Readiness",
        industry: "Extractives",
        outcome: "Visibility, controls, and faster close confidence",
        bullets: &[
            "Verification workflow with traceability and reporting",
            "Findings packaged for executive and stakeholder review",
            "Operational controls strengthened for repeatability",
        ],
    },
    CaseStudy {
        title: "HR Outsourcing & People Ops Streamlining",
        industry: "Logistics",
        outcome: "Reduced admin load + improved reporting control",
        bullets: &[
            "Process standardization and reporting cadence",
            "Operational handoffs simplified for speed",
            "Foundational controls to reduce risk and variance",
        ],
    },
];

pub const PRIVACY_UPDATED: &str = "Last updated: January 26, 2026";

pub const PRIVACY_SECTIONS: &[PolicySection] = &[
    PolicySection {
        title: "Information We Collect",
        body: "We collect information you provide when you submit forms, apply for positions, or request services.",
    },
    PolicySection {
        title: "How We Use Information",
        body: "We use information to respond to inquiries, provide services, and improve the website experience.",
    },
    PolicySection {
        title: "Security",
        body: "We implement measures to safeguard your information.",
    },
    PolicySection {
        title: "Contact Us",
        body: "Questions about privacy? Email frontdesk@tatconsg.com.",
    },
];

/// Options for the "Service of Interest" select. The empty value is the
/// placeholder.
pub const SERVICE_INTERESTS: &[ServiceInterest] = &[
    ServiceInterest { value: "", label: "Select..." },
    ServiceInterest { value: "business", label: "Business Advisory" },
    ServiceInterest { value: "tax", label: "Tax Advisory" },
    ServiceInterest { value: "training", label: "Professional Development" },
    ServiceInterest { value: "other", label: "Other" },
];

pub fn service(slug: &str) -> Option<&'static ServiceDescriptor> {
    SERVICES.iter().find(|s| s.slug == slug)
}

/// Cycles through testimonials on a timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TestimonialRotation {
    index: usize,
    len: usize,
}

impl TestimonialRotation {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Current testimonial, `None` when there are none.
    pub fn current(&self) -> Option<&'static Testimonial> {
        TESTIMONIALS.get(self.index)
    }

    pub fn advance(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}

impl Default for TestimonialRotation {
    fn default() -> Self {
        Self::new(TESTIMONIALS.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_follows_page_order() {
        let pages: Vec<PageId> = MENU.iter().map(|m| m.page).collect();
        assert_eq!(pages, PageId::ALL.to_vec());
        assert_eq!(MENU[3].label, "Careers");
    }

    #[test]
    fn three_service_pillars_with_previews() {
        assert_eq!(SERVICES.len(), 3);
        for svc in SERVICES {
            assert_eq!(svc.preview_details().len(), 4);
            assert_eq!(svc.details.len(), 6);
            assert!(!svc.highlights.is_empty());
        }
        assert_eq!(service("tax").map(|s| s.title), Some("Tax Advisory"));
        assert!(service("legal").is_none());
    }

    #[test]
    fn interest_values_cover_each_service() {
        for svc in SERVICES {
            assert!(SERVICE_INTERESTS.iter().any(|o| o.value == svc.slug), "{}", svc.slug);
        }
        assert_eq!(SERVICE_INTERESTS[0].value, "");
    }

    #[test]
    fn rotation_wraps() {
        let mut rotation = TestimonialRotation::default();
        assert_eq!(rotation.index(), 0);
        assert_eq!(rotation.advance(), 1);
        assert_eq!(rotation.advance(), 2);
        assert_eq!(rotation.advance(), 0);
        assert!(rotation.current().is_some());
    }

    #[test]
    fn empty_rotation_stays_put() {
        let mut rotation = TestimonialRotation::new(0);
        assert_eq!(rotation.advance(), 0);
    }

    #[test]
    fn two_regional_offices() {
        let countries: Vec<&str> = OFFICES.iter().map(|o| o.country).collect();
        assert_eq!(countries, vec!["LIBERIA", "SIERRA LEONE"]);
    }
}
