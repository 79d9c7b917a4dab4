//! Direct DOM access. Every helper is a no-op outside the browser.

#[cfg(feature = "hydrate")]
use leptos::prelude::document;

/// Smooth-scrolls to the element matching `href` (e.g. `#about`).
/// A missing target is ignored.
pub fn scroll_to_anchor(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

        match document().query_selector(href).ok().flatten() {
            Some(el) => {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
            None => log::debug!("no scroll target for {href}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = href;
}

/// Suspends page scrolling for as long as it is held.
#[derive(Debug)]
pub struct ScrollLock(());

impl ScrollLock {
    pub fn acquire() -> Self {
        set_body_overflow("hidden");
        Self(())
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        release_page_scroll();
    }
}

/// Restores page scrolling regardless of who suspended it.
pub fn release_page_scroll() {
    set_body_overflow("");
}

fn set_body_overflow(value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = document().body() else {
            return;
        };
        if let Err(err) = body.style().set_property("overflow", value) {
            log::warn!("couldn't set body overflow to {value:?}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = value;
}
