use yew::prelude::*;

use crate::components::animation::{FadeInWhenVisible, Offset};
use crate::components::card::CardGrid;
use crate::content::{ContentCard, METHODOLOGY_STEPS, PRINCIPLES};

// This page enters from further down, and a little quicker, than the landing page
const OFFSET: Offset = Offset::Y(50);
const DURATION_MS: u32 = 500;

#[derive(Properties, PartialEq)]
struct CardSectionProps {
    heading: &'static str,
    cards: &'static [ContentCard],
}

#[function_component(CardSection)]
fn card_section(props: &CardSectionProps) -> Html {
    html! {
        <section class="py-20 bg-black">
            <div class="max-w-7xl mx-auto px-6">
                <FadeInWhenVisible offset={OFFSET} duration_ms={DURATION_MS}>
                    <h2 class="text-3xl font-bold text-center mb-16">{ props.heading }</h2>
                </FadeInWhenVisible>
                <CardGrid cards={props.cards} offset={OFFSET} duration_ms={DURATION_MS} />
            </div>
        </section>
    }
}

#[function_component(ApproachPage)]
pub fn approach_page() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="min-h-screen bg-black text-white pt-16">
            <header class="bg-black py-24 text-center">
                <FadeInWhenVisible offset={OFFSET} duration_ms={DURATION_MS}>
                    <h1 class="text-5xl md:text-6xl font-bold mb-6">
                        {"Our Investment Philosophy"}
                    </h1>
                </FadeInWhenVisible>
                <FadeInWhenVisible offset={OFFSET} duration_ms={DURATION_MS} delay_ms={300}>
                    <p class="text-xl text-gray-300 max-w-3xl mx-auto px-6">
                        {"At Upsurge Capital, we blend cutting-edge technology, deep financial expertise, and a personalized approach to deliver exceptional investment strategies."}
                    </p>
                </FadeInWhenVisible>
            </header>

            <CardSection heading="Core Investment Principles" cards={PRINCIPLES} />
            <CardSection heading="Our Investment Methodology" cards={METHODOLOGY_STEPS} />

            <section class="py-20 bg-black text-center">
                <FadeInWhenVisible offset={OFFSET} duration_ms={DURATION_MS}>
                    <h2 class="text-4xl font-bold mb-6">{"Ready to Optimize Your Investments?"}</h2>
                    <p class="text-xl text-gray-300 mb-8 max-w-2xl mx-auto px-6">
                        {"Discover how our strategic approach can help you achieve your financial goals. Schedule a personalized consultation with our expert advisors."}
                    </p>
                    <button class="press-button bg-blue-600 text-white px-10 py-4 rounded-lg font-medium hover:bg-blue-700">
                        {"Schedule Consultation"}
                    </button>
                </FadeInWhenVisible>
            </section>
        </div>
    }
}
