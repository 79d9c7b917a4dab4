use leptos::prelude::*;
use leptos_use::core::IntoElementsMaybeSignal;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::trigger_root_margin;

/// Tracks whether `target`'s top has crossed `start_pct`% of the viewport.
///
/// Crossing downward plays the entrance; scrolling back up past the line
/// reverses it. Leaving through the top of the viewport keeps it visible.
pub fn use_reveal<El, M>(target: El, start_pct: u8) -> Signal<bool>
where
    El: IntoElementsMaybeSignal<web_sys::Element, M>,
{
    let (visible, set_visible) = signal(false);

    use_intersection_observer_with_options(
        target,
        move |entries, _| {
            for entry in entries {
                if entry.is_intersecting() {
                    set_visible.set(true);
                } else if entry.bounding_client_rect().top() > 0.0 {
                    set_visible.set(false);
                }
            }
        },
        UseIntersectionObserverOptions::default().root_margin(trigger_root_margin(start_pct)),
    );

    visible.into()
}
