use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::content::{Owner, SocialLink};
use crate::motion::{Cue, Offset};

const BUILD_YEAR: &str = env!("BUILD_YEAR");

const LABEL: Cue = Cue::new(Offset::Up(60), 1000, 0);
const STATEMENT: Cue = Cue::new(Offset::Up(40), 800, 200);
const CTA: Cue = Cue::new(Offset::Up(30), 800, 400);

#[component]
pub fn Footer(owner: &'static Owner, socials: &'static [SocialLink]) -> impl IntoView {
    let section_ref = NodeRef::<html::Footer>::new();
    let visible = use_reveal(section_ref, 70);

    view! {
        <footer
            node_ref=section_ref
            id="contact"
            class="relative min-h-[70vh] w-full flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-offwhite via-charcoal to-charcoal-dark" />
            <div class="absolute top-0 left-1/4 w-96 h-96 bg-blue-500/10 rounded-full blur-3xl" />
            <div class="absolute bottom-1/4 right-1/4 w-64 h-64 bg-purple-500/10 rounded-full blur-3xl" />

            <div class="relative z-10 w-full">
                <div class="max-w-4xl mx-auto px-6 py-24 text-center">
                    <div style=move || LABEL.style(visible.get())>
                        <div class="flex items-center justify-center gap-3 mb-8">
                            <div class="w-12 h-px bg-white/20" />
                            <span class="text-caption uppercase tracking-widest text-white/50">
                                "Get in Touch"
                            </span>
                            <div class="w-12 h-px bg-white/20" />
                        </div>
                    </div>

                    <p
                        class="text-headline text-white mb-12"
                        style=move || STATEMENT.style(visible.get())
                    >
                        "Let's build something "
                        <span class="bg-gradient-to-r from-blue-400 to-purple-400 bg-clip-text text-transparent">
                            "data-driven"
                        </span> " and "
                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "visually compelling"
                        </span> " together."
                    </p>

                    <div style=move || CTA.style(visible.get())>
                        <a
                            href=owner.mailto()
                            class="group inline-flex items-center gap-3 px-8 py-4 rounded-full bg-white text-charcoal font-semibold hover:bg-offwhite transition-all duration-300 btn-glow mb-8"
                        >
                            <span>"✉"</span>
                            <span>"Get in Touch"</span>
                            <span class="transition-transform duration-300 group-hover:translate-x-1 group-hover:-translate-y-1">
                                "↗"
                            </span>
                        </a>

                        <p class="text-caption text-white/40 mb-8">{owner.email.as_str()}</p>

                        <div class="flex justify-center gap-4">
                            {socials
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.url.as_str()
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            class="w-12 h-12 rounded-full bg-white/10 flex items-center justify-center overflow-hidden hover:bg-white/20 transition-all duration-300 hover:scale-110"
                                            aria-label=social.name.as_str()
                                        >
                                            <img
                                                src=social.image.as_str()
                                                alt=""
                                                class="w-6 h-6 rounded-md object-cover opacity-70"
                                            />
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>

                <div class="border-t border-white/10">
                    <div class="max-w-7xl mx-auto px-6 py-6 flex flex-col sm:flex-row justify-between items-center gap-4">
                        <p class="text-caption text-white/40">
                            {format!("© {BUILD_YEAR} {}. All rights reserved.", owner.name)}
                        </p>
                        <p class="text-caption text-white/30">
                            {format!("Crafted with passion in {}", owner.location)}
                        </p>
                    </div>
                </div>
            </div>
        </footer>
    }
}
