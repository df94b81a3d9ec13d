use yew_router::prelude::*;

use crate::components::icons::Icon;
use crate::Route;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavTarget {
    /// In-page section on the landing page, e.g. `#services`.
    Anchor(&'static str),
    Page(Route),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavItem {
    pub fn href(&self) -> String {
        match self.target {
            // Anchors live on the landing page, so point there from any route
            NavTarget::Anchor(anchor) => format!("{}{}", Route::Home.to_path(), anchor),
            NavTarget::Page(route) => route.to_path(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    MultiLine,
}

impl FieldKind {
    /// Value of the `type` attribute, `None` for fields rendered as a textarea.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Email => Some("email"),
            FieldKind::MultiLine => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterSection {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Services", target: NavTarget::Anchor("#services") },
    // No section carries this id yet
    NavItem { label: "About", target: NavTarget::Anchor("#about") },
    NavItem { label: "Our Approach", target: NavTarget::Page(Route::Approach) },
    NavItem { label: "Contact", target: NavTarget::Anchor("#contact") },
];

pub const SERVICES: &[ContentCard] = &[
    ContentCard {
        icon: Icon::BarChart3,
        title: "Portfolio Management",
        description: "Customized investment strategies aligned with your goals and risk tolerance.",
    },
    ContentCard {
        icon: Icon::Shield,
        title: "Wealth Preservation",
        description: "Protecting and growing your assets through diversified investment approaches.",
    },
    ContentCard {
        icon: Icon::Globe,
        title: "Global Investment",
        description: "Access to international markets and diverse investment opportunities worldwide.",
    },
];

pub const PRINCIPLES: &[ContentCard] = &[
    ContentCard {
        icon: Icon::Target,
        title: "Strategic Goal Alignment",
        description: "We begin by deeply understanding your unique financial objectives, risk tolerance, and long-term aspirations.",
    },
    ContentCard {
        icon: Icon::PieChart,
        title: "Diversified Portfolio Construction",
        description: "Our investment strategies leverage comprehensive diversification across asset classes, sectors, and geographic regions.",
    },
    ContentCard {
        icon: Icon::RefreshCw,
        title: "Adaptive Investment Approach",
        description: "We continuously monitor market conditions and dynamically adjust portfolios to optimize performance and manage risk.",
    },
];

pub const METHODOLOGY_STEPS: &[ContentCard] = &[
    ContentCard {
        icon: Icon::BookOpen,
        title: "Comprehensive Analysis",
        description: "Rigorous research and data-driven insights form the foundation of our investment decision-making process.",
    },
    ContentCard {
        icon: Icon::BarChart2,
        title: "Performance Optimization",
        description: "Leveraging advanced quantitative models and machine learning to identify high-potential investment opportunities.",
    },
    ContentCard {
        icon: Icon::ShieldCheck,
        title: "Risk Management",
        description: "Proactive risk mitigation strategies to protect and preserve your capital through sophisticated hedging techniques.",
    },
];

pub const CONTACT_DETAILS: &[ContactDetail] = &[
    ContactDetail { icon: Icon::Phone, text: "+1 (555) 123-4567" },
    ContactDetail { icon: Icon::Mail, text: "contact@upsurgecapital.com" },
    ContactDetail { icon: Icon::MapPin, text: "123 Financial District, New York, NY 10004" },
];

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField { id: "name", label: "Name", kind: FieldKind::Text },
    ContactField { id: "email", label: "Email", kind: FieldKind::Email },
    ContactField { id: "message", label: "Message", kind: FieldKind::MultiLine },
];

pub const FOOTER_SECTIONS: &[FooterSection] = &[
    FooterSection {
        heading: "Quick Links",
        links: &["Services", "About Us", "Our Approach", "Contact"],
    },
    FooterSection {
        heading: "Services",
        links: &["Portfolio Management", "Wealth Preservation", "Global Investment", "Financial Planning"],
    },
    FooterSection {
        heading: "Legal",
        links: &["Privacy Policy", "Terms of Service", "Disclaimer"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(cards: &[ContentCard]) -> Vec<&'static str> {
        cards.iter().map(|c| c.title).collect()
    }

    #[test]
    fn nav_links_in_display_order() {
        let labels: Vec<_> = NAV_ITEMS.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Services", "About", "Our Approach", "Contact"]);
    }

    #[test]
    fn nav_hrefs_point_at_landing_sections_or_routes() {
        let hrefs: Vec<String> = NAV_ITEMS.iter().map(NavItem::href).collect();
        assert_eq!(hrefs, ["/#services", "/#about", "/approach", "/#contact"]);
    }

    #[test]
    fn service_cards() {
        assert_eq!(
            titles(SERVICES),
            ["Portfolio Management", "Wealth Preservation", "Global Investment"]
        );
        assert_eq!(SERVICES[0].icon, Icon::BarChart3);
    }

    #[test]
    fn principle_cards_keep_exact_copy() {
        assert_eq!(PRINCIPLES.len(), 3);
        assert_eq!(PRINCIPLES[0].title, "Strategic Goal Alignment");
        assert_eq!(
            PRINCIPLES[0].description,
            "We begin by deeply understanding your unique financial objectives, risk tolerance, and long-term aspirations."
        );
        assert_eq!(
            titles(PRINCIPLES),
            ["Strategic Goal Alignment", "Diversified Portfolio Construction", "Adaptive Investment Approach"]
        );
    }

    #[test]
    fn methodology_steps() {
        assert_eq!(
            titles(METHODOLOGY_STEPS),
            ["Comprehensive Analysis", "Performance Optimization", "Risk Management"]
        );
        assert_eq!(METHODOLOGY_STEPS[2].icon, Icon::ShieldCheck);
    }

    #[test]
    fn contact_form_has_name_email_and_multiline_message() {
        let ids: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.id).collect();
        assert_eq!(ids, ["name", "email", "message"]);
        assert_eq!(CONTACT_FIELDS[1].kind.input_type(), Some("email"));
        assert_eq!(CONTACT_FIELDS.last().map(|f| f.kind), Some(FieldKind::MultiLine));
        assert_eq!(FieldKind::MultiLine.input_type(), None);
    }

    #[test]
    fn footer_sections() {
        let headings: Vec<_> = FOOTER_SECTIONS.iter().map(|s| s.heading).collect();
        assert_eq!(headings, ["Quick Links", "Services", "Legal"]);
        assert_eq!(FOOTER_SECTIONS[1].links.len(), 4);
        assert_eq!(FOOTER_SECTIONS[2].links, ["Privacy Policy", "Terms of Service", "Disclaimer"]);
    }
}
