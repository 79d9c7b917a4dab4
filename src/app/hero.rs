use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size, UseWindowSizeReturn};

use super::dom::scroll_to_anchor;
use crate::content::Owner;
use crate::motion::{HeroParallax, HERO_CTA, HERO_INDICATOR, HERO_NAME, HERO_SUBTITLE, HERO_TITLE};

#[component]
pub fn Hero(owner: &'static Owner) -> impl IntoView {
    let (entered, set_entered) = signal(false);
    // SSR markup starts hidden; flip on the first frame after hydration
    Effect::new(move |_| {
        request_animation_frame(move || set_entered(true));
    });

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let parallax = Memo::new(move |_| HeroParallax::at(scroll_y.get(), height.get()));

    view! {
        <section
            id="hero"
            class="relative min-h-screen w-full flex items-center justify-center overflow-hidden pt-20"
        >
            <div
                class="absolute inset-0 -z-10"
                style=move || parallax.get().background_style()
            />

            <div
                class="absolute top-1/4 -left-32 w-96 h-96 bg-blue-500/30 rounded-full blur-2xl"
                style=move || parallax.get().blue_orb_style()
            />
            <div
                class="absolute bottom-1/4 -right-32 w-96 h-96 bg-purple-500/30 rounded-full blur-2xl"
                style=move || parallax.get().purple_orb_style()
            />

            <div
                class="relative z-10 text-center px-6 max-w-4xl mx-auto"
                style=move || parallax.get().content_style()
            >
                <h1
                    class="text-hero text-charcoal mb-6"
                    style=move || {
                        format!("{} {}", HERO_NAME.style(entered.get()), parallax.get().title_style())
                    }
                >
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-charcoal via-blue-600 to-charcoal bg-clip-text text-transparent">
                        {owner.name.as_str()}
                    </span>
                </h1>

                <p class="text-subhead text-charcoal/80 mb-4" style=move || HERO_TITLE.style(entered.get())>
                    {owner.headline.as_str()}
                </p>

                <p class="text-body text-charcoal/60" style=move || HERO_SUBTITLE.style(entered.get())>
                    {owner.tagline.as_str()}
                </p>

                <div
                    class="flex flex-wrap justify-center gap-4 mt-10"
                    style=move || HERO_CTA.style(entered.get())
                >
                    <a
                        href="#experience"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_anchor("#experience");
                        }
                        class="px-8 py-3.5 rounded-full bg-charcoal text-white font-medium hover:bg-charcoal-light transition-all duration-300 btn-glow"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#about"
                        on:click=move |ev| {
                            ev.prevent_default();
                            scroll_to_anchor("#about");
                        }
                        class="px-8 py-3.5 rounded-full bg-white text-charcoal font-medium border border-charcoal/10 hover:border-charcoal/20 hover:bg-offwhite transition-all duration-300 shadow-card"
                    >
                        "Learn More"
                    </a>
                </div>
            </div>

            <div
                class="absolute bottom-10 left-1/2 -translate-x-1/2 cursor-pointer"
                style=move || HERO_INDICATOR.style(entered.get())
                on:click=move |_| scroll_to_anchor("#about")
            >
                <div
                    class="flex flex-col items-center gap-3"
                    style=move || format!("opacity: {:.3};", parallax.get().indicator_opacity())
                >
                    <span class="text-caption text-charcoal/50">"Scroll to explore"</span>
                    <div class="w-10 h-10 rounded-full bg-white shadow-apple flex items-center justify-center animate-bounce text-charcoal/60">
                        "↓"
                    </div>
                </div>
            </div>
        </section>
    }
}
