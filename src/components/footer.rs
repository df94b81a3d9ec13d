use yew::prelude::*;
use stylist::css;

use crate::components::animation::{stagger_delay, FadeInWhenVisible, Offset, ROW_DURATION_MS, ROW_STAGGER_MS};
use crate::components::icons::{icon_for, Icon};
use crate::config::BRAND_NAME;
use crate::content::{FooterSection, FOOTER_SECTIONS};

fn footer_links(section: &FooterSection) -> Html {
    let nudge = css!(r#"
        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
        &:hover {
            transform: translateX(5px);
        }
    "#);

    html! {
        <ul class="space-y-2">
            { for section.links.iter().map(|link| html! {
                <li key={*link} class={nudge.clone()}>
                    <a href="#" class="text-gray-400 hover:text-white">{ *link }</a>
                </li>
            }) }
        </ul>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-900 text-white py-12">
            <div class="max-w-7xl mx-auto px-6">
                <div class="grid md:grid-cols-4 gap-8">
                    <FadeInWhenVisible duration_ms={ROW_DURATION_MS}>
                        <div class="flex items-center space-x-2 mb-4">
                            { icon_for(Icon::TrendingUp, "h-6 w-6 text-blue-500") }
                            <span class="text-lg font-bold">{ BRAND_NAME }</span>
                        </div>
                        <p class="text-gray-400">
                            {"Your trusted partner in building and preserving wealth through strategic investment management."}
                        </p>
                    </FadeInWhenVisible>
                    { for FOOTER_SECTIONS.iter().enumerate().map(|(index, section)| html! {
                        <FadeInWhenVisible
                            key={section.heading}
                            delay_ms={stagger_delay(index, ROW_STAGGER_MS)}
                            duration_ms={ROW_DURATION_MS}
                        >
                            <h3 class="font-semibold mb-4">{ section.heading }</h3>
                            { footer_links(section) }
                        </FadeInWhenVisible>
                    }) }
                </div>
                <FadeInWhenVisible
                    offset={Offset::None}
                    duration_ms={ROW_DURATION_MS}
                    class="border-t border-gray-800 mt-12 pt-8 text-center text-gray-400"
                >
                    <p>{"© 2025 Upsurge Capital. All rights reserved."}</p>
                </FadeInWhenVisible>
            </div>
        </footer>
    }
}
