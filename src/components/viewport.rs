use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use log::warn;

use crate::components::animation::EntranceLatch;
use crate::config;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type SharedLatch = Rc<RefCell<EntranceLatch>>;

// Keeps the JS callback alive for as long as the observer can call it.
struct ViewportWatch {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl Drop for ViewportWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn watch_first_entry(element: &Element, latch: SharedLatch, on_enter: Callback<()>) -> Result<ViewportWatch, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        let intersecting = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| entry.is_intersecting());

        let entered = latch.borrow_mut().observe(intersecting).is_some();
        if entered {
            // Nothing left to watch for once the element has been seen
            observer.disconnect();
            on_enter.emit(());
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::VIEWPORT_THRESHOLD));
    options.set_root_margin(config::VIEWPORT_ROOT_MARGIN);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);

    Ok(ViewportWatch { observer, _callback: callback })
}

fn reveal_now(latch: &SharedLatch, on_enter: &Callback<()>) {
    if latch.borrow_mut().enter_viewport().is_some() {
        on_enter.emit(());
    }
}

// Content that can't be watched is shown straight away rather than left hidden.
fn watch_or_reveal(element: Option<Element>, latch: SharedLatch, on_enter: Callback<()>) -> Option<ViewportWatch> {
    let Some(element) = element else {
        warn!("Reveal target is not mounted, showing content immediately");
        reveal_now(&latch, &on_enter);
        return None;
    };

    match watch_first_entry(&element, latch.clone(), on_enter.clone()) {
        Ok(watch) => Some(watch),
        Err(err) => {
            warn!("IntersectionObserver unavailable, showing content immediately: {:?}", err);
            reveal_now(&latch, &on_enter);
            None
        }
    }
}

/// `true` from the first time the referenced element intersects the viewport.
/// Never goes back to `false`, however often the element leaves and re-enters.
#[hook]
pub fn use_enter_viewport(node: NodeRef) -> bool {
    let latch = use_mut_ref(EntranceLatch::new);
    let rerender = use_force_update();

    {
        let latch = latch.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_enter = Callback::from(move |_: ()| rerender.force_update());
                let watch = watch_or_reveal(node.cast::<Element>(), latch, on_enter);

                // Disconnects on unmount so no callback reaches a dead component
                move || drop(watch)
            },
            node,
        );
    }

    let entered = latch.borrow().has_fired();
    entered
}
