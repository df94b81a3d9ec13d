use yew::prelude::*;
use stylist::css;

use crate::components::animation::{stagger_delay, FadeInWhenVisible, Offset, CARD_STAGGER_MS, REVEAL_DURATION_MS};
use crate::components::icons::icon_for;
use crate::content::ContentCard;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub card: ContentCard,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let card = &props.card;
    // Overshooting curve stands in for a stiff spring
    let hover = css!(r#"
        transition: transform 0.35s cubic-bezier(0.34, 1.56, 0.64, 1), background-color 0.35s ease;
        &:hover {
            transform: scale(1.05);
            background-color: rgb(31, 41, 55);
        }
    "#);

    html! {
        <div class={classes!("bg-gray-900", "p-8", "rounded-xl", hover)}>
            { icon_for(card.icon, "h-12 w-12 text-blue-500 mb-4") }
            <h3 class="text-xl font-semibold mb-4 text-white">{ card.title }</h3>
            <p class="text-gray-300">{ card.description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    pub cards: &'static [ContentCard],
    #[prop_or_default]
    pub offset: Offset,
    #[prop_or(REVEAL_DURATION_MS)]
    pub duration_ms: u32,
}

/// One card per record, in input order, each entering a little after the previous.
#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    html! {
        <div class="grid md:grid-cols-3 gap-8">
            { for props.cards.iter().enumerate().map(|(index, card)| html! {
                <FadeInWhenVisible
                    key={card.title}
                    delay_ms={stagger_delay(index, CARD_STAGGER_MS)}
                    offset={props.offset}
                    duration_ms={props.duration_ms}
                >
                    <Card card={*card} />
                </FadeInWhenVisible>
            }) }
        </div>
    }
}
