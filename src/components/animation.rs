use yew::prelude::*;
use gloo_timers::callback::Timeout;
use log::debug;

use crate::components::viewport::use_enter_viewport;

pub const REVEAL_DURATION_MS: u32 = 600;
// Default for the small staggered rows that only set a delay
pub const ROW_DURATION_MS: u32 = 400;
pub const CARD_STAGGER_MS: u32 = 200;
pub const ROW_STAGGER_MS: u32 = 100;

/// Where an element sits, relative to its resting place, before it is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Offset {
    None,
    X(i32),
    Y(i32),
}

impl Default for Offset {
    fn default() -> Self {
        Offset::Y(20)
    }
}

impl Offset {
    fn transform(&self) -> String {
        match self {
            Offset::None => "none".to_string(),
            Offset::X(px) => format!("translateX({}px)", px),
            Offset::Y(px) => format!("translateY({}px)", px),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualState {
    Hidden,
    Shown,
}

/// A one-way hidden -> shown entrance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub offset: Offset,
    pub duration_ms: u32,
    pub delay_ms: u32,
}

impl Transition {
    pub fn new(offset: Offset, duration_ms: u32, delay_ms: u32) -> Self {
        Self { offset, duration_ms, delay_ms }
    }

    /// Inline style for the given state. The transition rule is present in both
    /// states so the browser animates the switch.
    pub fn style(&self, state: VisualState) -> String {
        let (opacity, transform) = match state {
            VisualState::Hidden => ("0", self.offset.transform()),
            VisualState::Shown => ("1", "none".to_string()),
        };
        format!(
            "opacity: {}; transform: {}; transition: opacity {}ms ease-out {}ms, transform {}ms ease-out {}ms;",
            opacity, transform,
            self.duration_ms, self.delay_ms,
            self.duration_ms, self.delay_ms,
        )
    }
}

/// Entrance delay for the item at `index` in a staggered list.
pub fn stagger_delay(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

/// One-bit "has entered the viewport" flag. Set once, never reset.
#[derive(Debug, Default)]
pub struct EntranceLatch {
    fired: bool,
}

impl EntranceLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state to move to on the first entry, `None` on every later one.
    pub fn enter_viewport(&mut self) -> Option<VisualState> {
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(VisualState::Shown)
    }

    /// Feeds one batch of intersection results; any visible entry counts as entering.
    pub fn observe<I>(&mut self, intersecting: I) -> Option<VisualState>
    where
        I: IntoIterator<Item = bool>,
    {
        if intersecting.into_iter().any(|visible| visible) {
            self.enter_viewport()
        } else {
            None
        }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Properties, PartialEq)]
pub struct TextRevealProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub offset: Offset,
    #[prop_or(REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Plays the entrance once, right after mount.
#[function_component(TextReveal)]
pub fn text_reveal(props: &TextRevealProps) -> Html {
    let shown = use_state(|| false);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                // Deferred so the hidden state gets painted first
                let timeout = Timeout::new(0, move || shown.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let transition = Transition::new(props.offset, props.duration_ms, props.delay_ms);
    let state = if *shown { VisualState::Shown } else { VisualState::Hidden };

    html! {
        <div class={props.class.clone()} style={transition.style(state)}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FadeInWhenVisibleProps {
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub offset: Offset,
    #[prop_or(REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Plays the entrance the first time the element scrolls into view.
#[function_component(FadeInWhenVisible)]
pub fn fade_in_when_visible(props: &FadeInWhenVisibleProps) -> Html {
    let node = use_node_ref();
    let entered = use_enter_viewport(node.clone());

    {
        let delay_ms = props.delay_ms;
        use_effect_with_deps(
            move |entered| {
                if *entered {
                    debug!("Section entered viewport, revealing after {}ms", delay_ms);
                }
                || ()
            },
            entered,
        );
    }

    let transition = Transition::new(props.offset, props.duration_ms, props.delay_ms);
    let state = if entered { VisualState::Shown } else { VisualState::Hidden };

    html! {
        <div ref={node} class={props.class.clone()} style={transition.style(state)}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_only_on_first_entry() {
        let mut latch = EntranceLatch::new();
        assert!(!latch.has_fired());
        assert_eq!(latch.enter_viewport(), Some(VisualState::Shown));
        for _ in 0..5 {
            assert_eq!(latch.enter_viewport(), None);
        }
        assert!(latch.has_fired());
    }

    #[test]
    fn latch_ignores_later_scrolls_back_into_view() {
        let mut latch = EntranceLatch::new();
        assert_eq!(latch.observe([false]), None);
        assert!(!latch.has_fired());
        assert_eq!(latch.observe([false, true]), Some(VisualState::Shown));
        assert_eq!(latch.observe([false]), None);
        assert_eq!(latch.observe([true]), None);
        assert_eq!(latch.observe([true, true]), None);
        assert!(latch.has_fired());
    }

    #[test]
    fn stagger_saturates_instead_of_wrapping() {
        assert_eq!(stagger_delay(usize::MAX, CARD_STAGGER_MS), u32::MAX);
        assert_eq!(stagger_delay(30_000_000, CARD_STAGGER_MS), u32::MAX);
    }

    #[test]
    fn stagger_is_linear_in_index() {
        let delays: Vec<u32> = (0..4).map(|i| stagger_delay(i, CARD_STAGGER_MS)).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(stagger_delay(2, ROW_STAGGER_MS), 200);
    }

    #[test]
    fn hidden_state_is_transparent_and_offset() {
        let t = Transition::new(Offset::Y(20), 600, 300);
        assert_eq!(
            t.style(VisualState::Hidden),
            "opacity: 0; transform: translateY(20px); transition: opacity 600ms ease-out 300ms, transform 600ms ease-out 300ms;"
        );
    }

    #[test]
    fn shown_state_rests_in_place() {
        let t = Transition::new(Offset::X(-20), 400, 0);
        let style = t.style(VisualState::Shown);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("400ms ease-out 0ms"));
    }

    #[test]
    fn opacity_only_offset_never_moves() {
        let t = Transition::new(Offset::None, 600, 0);
        assert!(t.style(VisualState::Hidden).contains("transform: none;"));
    }

    #[test]
    fn default_offset_slides_up_twenty_pixels() {
        assert_eq!(Offset::default(), Offset::Y(20));
    }

    #[function_component(RevealedHeading)]
    fn revealed_heading() -> Html {
        html! {
            <FadeInWhenVisible delay_ms={400}>
                <h2>{"Our Services"}</h2>
            </FadeInWhenVisible>
        }
    }

    #[tokio::test]
    async fn content_starts_hidden_until_it_enters_view() {
        let html = yew::ServerRenderer::<RevealedHeading>::new()
            .hydratable(false)
            .render()
            .await;

        let hidden = Transition::new(Offset::Y(20), REVEAL_DURATION_MS, 400).style(VisualState::Hidden);
        assert!(html.contains(&hidden), "{}", html);
        assert!(html.contains("<h2>Our Services</h2>"), "{}", html);
    }
}
