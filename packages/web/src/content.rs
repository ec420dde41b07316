//! Site copy and template options.
//!
//! The page is one template rendered from a `SiteContent` value, so copy
//! changes and restyles are data edits rather than parallel page variants.

use crate::state::PhoneField;

/// Styling theme for the page accents
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Theme {
    /// Dark slate headings with orange calls to action
    #[default]
    Charcoal,
    /// Deep blue headings with amber calls to action
    Midnight,
}

impl Theme {
    pub fn heading_class(&self) -> &'static str {
        match self {
            Theme::Charcoal => "text-slate-800",
            Theme::Midnight => "text-blue-950",
        }
    }

    pub fn body_class(&self) -> &'static str {
        match self {
            Theme::Charcoal => "text-slate-600",
            Theme::Midnight => "text-blue-900/70",
        }
    }

    pub fn cta_class(&self) -> &'static str {
        match self {
            Theme::Charcoal => "bg-orange-500 hover:bg-orange-400 text-white",
            Theme::Midnight => "bg-amber-500 hover:bg-amber-400 text-blue-950",
        }
    }

    pub fn submit_class(&self) -> &'static str {
        match self {
            Theme::Charcoal => "bg-slate-800 hover:bg-slate-600 text-white",
            Theme::Midnight => "bg-blue-950 hover:bg-blue-800 text-white",
        }
    }
}

/// A document an owner-operator must provide to partner with the carrier
#[derive(Clone, Debug, PartialEq)]
pub struct Credential {
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// One bullet in the partnership-terms columns
#[derive(Clone, Debug, PartialEq)]
pub struct TermItem {
    pub lead: &'static str,
    pub text: &'static str,
}

/// All copy for the page, plus the template options
#[derive(Clone, Debug, PartialEq)]
pub struct SiteContent {
    pub company_name: &'static str,
    pub tagline: &'static str,
    pub authority_line: &'static str,
    pub hero_pitch: &'static str,
    pub cta_label: &'static str,

    pub about_heading: &'static str,
    pub about_subheading: &'static str,
    pub about_paragraphs: [&'static str; 2],

    pub credentials_heading: &'static str,
    pub credentials_subheading: &'static str,
    pub credentials: &'static [Credential],

    pub terms_heading: &'static str,
    pub compensation_terms: &'static [TermItem],
    pub responsibility_terms: &'static [TermItem],
    pub contractor_note: &'static str,

    pub contact_heading: &'static str,
    pub contact_pitch: &'static str,
    pub contact_email: &'static str,
    pub contact_address: &'static str,

    pub theme: Theme,
    pub phone_field: PhoneField,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            company_name: "TIGER HILL TRANSPORT LLC",
            tagline: "Carrier & Owner-Operator Partner",
            authority_line: "MC: 1091445 | DOT: 3394301",
            hero_pitch: "Partner with us for reliable freight opportunities",
            cta_label: "Get In Touch",

            about_heading: "About Tiger Hill Transport LLC",
            about_subheading:
                "Connecting owner-operators with quality freight opportunities across the United States",
            about_paragraphs: [
                "Tiger Hill Transport LLC is a licensed carrier (MC: 1091445, DOT: 3394301) that \
                 partners with qualified owner-operators to provide reliable freight transportation \
                 services. We connect independent contractors with quality freight opportunities \
                 while maintaining the highest standards of safety and compliance.",
                "Our owner-operators benefit from established broker relationships, competitive \
                 rates, and reliable weekly settlements. We handle the administrative burden while \
                 you focus on what you do best - driving and delivering freight safely and on time.",
            ],

            credentials_heading: "Required Documents",
            credentials_subheading:
                "Owner-operators must provide current documentation to partner with Tiger Hill Transport LLC",
            credentials: &[
                Credential {
                    name: "Insurance",
                    icon: "\u{1F6E1}",
                    description: "Bobtail and physical damage insurance coverage",
                },
                Credential {
                    name: "Equipment Registration",
                    icon: "\u{1F69B}",
                    description: "Valid truck and trailer registration",
                },
                Credential {
                    name: "Driver License",
                    icon: "\u{1FAAA}",
                    description: "Valid commercial driver's license (CDL)",
                },
                Credential {
                    name: "Medical Certificate",
                    icon: "\u{1F4C4}",
                    description: "Current DOT medical certificate",
                },
                Credential {
                    name: "Other Certifications",
                    icon: "\u{2705}",
                    description: "Additional safety and compliance certifications as required",
                },
            ],

            terms_heading: "Partnership Terms",
            compensation_terms: &[
                TermItem {
                    lead: "8%",
                    text: "Carrier fee - only 8% of gross revenue",
                },
                TermItem {
                    lead: "Weekly",
                    text: "Weekly settlements with detailed sheets",
                },
                TermItem {
                    lead: "Direct",
                    text: "Direct payment collection from brokers",
                },
            ],
            responsibility_terms: &[
                TermItem {
                    lead: "Equipment",
                    text: "Provide your own truck and equipment",
                },
                TermItem {
                    lead: "Operating",
                    text: "Fuel, maintenance, and operating costs",
                },
                TermItem {
                    lead: "Compliance",
                    text: "Maintain DOT compliance and safety standards",
                },
            ],
            contractor_note:
                "You operate as an independent contractor under our authority. You're responsible \
                 for your own taxes, workers' compensation, and benefits. We provide the freight \
                 opportunities and handle the administrative burden of broker relationships and \
                 compliance.",

            contact_heading: "Partner With Us",
            contact_pitch:
                "Ready to partner with Tiger Hill Transport LLC? Contact us to learn more about \
                 our owner-operator opportunities.",
            contact_email: "tigerhilltransport@gmail.com",
            contact_address: "220 Ash Dr, Elizabeth, PA 15037",

            theme: Theme::Charcoal,
            phone_field: PhoneField::Optional,
        }
    }
}
