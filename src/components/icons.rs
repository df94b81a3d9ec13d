use yew::prelude::*;

// Outline icons drawn on a 24x24 grid, stroke follows the text colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    TrendingUp,
    ArrowRight,
    BarChart2,
    BarChart3,
    Shield,
    ShieldCheck,
    Globe,
    Phone,
    Mail,
    MapPin,
    PieChart,
    Target,
    RefreshCw,
    BookOpen,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::TrendingUp => "trending-up",
            Icon::ArrowRight => "arrow-right",
            Icon::BarChart2 => "bar-chart-2",
            Icon::BarChart3 => "bar-chart-3",
            Icon::Shield => "shield",
            Icon::ShieldCheck => "shield-check",
            Icon::Globe => "globe",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::MapPin => "map-pin",
            Icon::PieChart => "pie-chart",
            Icon::Target => "target",
            Icon::RefreshCw => "refresh-cw",
            Icon::BookOpen => "book-open",
        }
    }

    fn shapes(&self) -> Html {
        match self {
            Icon::TrendingUp => html! {
                <>
                    <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                    <polyline points="16 7 22 7 22 13" />
                </>
            },
            Icon::ArrowRight => html! {
                <>
                    <path d="M5 12h14" />
                    <path d="m12 5 7 7-7 7" />
                </>
            },
            Icon::BarChart2 => html! {
                <>
                    <line x1="18" y1="20" x2="18" y2="10" />
                    <line x1="12" y1="20" x2="12" y2="4" />
                    <line x1="6" y1="20" x2="6" y2="14" />
                </>
            },
            Icon::BarChart3 => html! {
                <>
                    <path d="M3 3v18h18" />
                    <path d="M18 17V9" />
                    <path d="M13 17V5" />
                    <path d="M8 17v-3" />
                </>
            },
            Icon::Shield => html! {
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
            },
            Icon::ShieldCheck => html! {
                <>
                    <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z" />
                    <path d="m9 12 2 2 4-4" />
                </>
            },
            Icon::Globe => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                    <path d="M2 12h20" />
                </>
            },
            Icon::Phone => html! {
                <path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z" />
            },
            Icon::Mail => html! {
                <>
                    <rect x="2" y="4" width="20" height="16" rx="2" />
                    <path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" />
                </>
            },
            Icon::MapPin => html! {
                <>
                    <path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z" />
                    <circle cx="12" cy="10" r="3" />
                </>
            },
            Icon::PieChart => html! {
                <>
                    <path d="M21.21 15.89A10 10 0 1 1 8 2.83" />
                    <path d="M22 12A10 10 0 0 0 12 2v10z" />
                </>
            },
            Icon::Target => html! {
                <>
                    <circle cx="12" cy="12" r="10" />
                    <circle cx="12" cy="12" r="6" />
                    <circle cx="12" cy="12" r="2" />
                </>
            },
            Icon::RefreshCw => html! {
                <>
                    <path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" />
                    <path d="M21 3v5h-5" />
                    <path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" />
                    <path d="M8 16H3v5" />
                </>
            },
            Icon::BookOpen => html! {
                <>
                    <path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z" />
                    <path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z" />
                </>
            },
        }
    }
}

/// Renders `icon` as inline SVG with the given utility classes.
pub fn icon_for(icon: Icon, class: &'static str) -> Html {
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class={class}
            data-icon={icon.name()}
            aria-hidden="true"
        >
            { icon.shapes() }
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Icon; 14] = [
        Icon::TrendingUp,
        Icon::ArrowRight,
        Icon::BarChart2,
        Icon::BarChart3,
        Icon::Shield,
        Icon::ShieldCheck,
        Icon::Globe,
        Icon::Phone,
        Icon::Mail,
        Icon::MapPin,
        Icon::PieChart,
        Icon::Target,
        Icon::RefreshCw,
        Icon::BookOpen,
    ];

    #[test]
    fn icon_names_are_unique() {
        let names: HashSet<&str> = ALL.iter().map(Icon::name).collect();
        assert_eq!(names.len(), ALL.len());
    }
}
