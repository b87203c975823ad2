use gloo::events::EventListener;
use yew::prelude::*;

use crate::services::date_utils::viewport_width;

/// Viewport width in CSS pixels, re-read on every window resize
#[hook]
pub fn use_viewport_width() -> u32 {
    let width = use_state(viewport_width);

    use_effect_with((), {
        let width = width.clone();
        move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| width.set(viewport_width()))
            });
            move || drop(listener)
        }
    });

    *width
}
