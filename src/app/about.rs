use leptos::{either::Either, html, prelude::*};

use super::reveal::use_reveal;
use crate::content::{About, Fragment, Owner, Tone};
use crate::motion::{Cue, Offset};

const IMAGE: Cue = Cue::new(Offset::Left(80), 1000, 0);
const TEXT: Cue = Cue::new(Offset::Right(80), 1000, 0);
const PILL: Cue = Cue::new(Offset::Up(30), 600, 0);

#[component]
pub fn AboutMe(owner: &'static Owner, about: &'static About) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let image_visible = use_reveal(section_ref, 70);
    let text_visible = use_reveal(section_ref, 60);
    let pills_visible = use_reveal(section_ref, 40);

    view! {
        <section node_ref=section_ref id="about" class="relative min-h-screen w-full py-24 lg:py-32 overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-offwhite via-white to-offwhite" />

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class="flex items-center gap-3 mb-12">
                    <div class="w-12 h-px bg-charcoal/20" />
                    <span class="text-caption uppercase tracking-widest text-charcoal/50">
                        "About Me"
                    </span>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                    <div
                        class="relative order-2 lg:order-1"
                        style=move || IMAGE.style(image_visible.get())
                    >
                        <div class="relative aspect-[4/5] max-w-md mx-auto lg:mx-0">
                            <div class="absolute -inset-4 bg-gradient-to-br from-blue-500/10 to-purple-500/10 rounded-3xl -z-10" />
                            <div class="w-full h-full rounded-2xl overflow-hidden shadow-apple-xl bg-gradient-to-br from-softgray to-offwhite flex items-center justify-center">
                                <div class="text-center p-8">
                                    <div class="w-32 h-32 mx-auto mb-6 rounded-full bg-gradient-to-br from-blue-100 to-purple-100 flex items-center justify-center">
                                        <span class="text-5xl font-semibold text-charcoal/30">
                                            {owner.initials.as_str()}
                                        </span>
                                    </div>
                                    <p class="text-caption text-charcoal/40 uppercase tracking-wider">
                                        "Profile Photo"
                                    </p>
                                </div>
                            </div>
                            <div class="absolute -bottom-4 -right-4 glass-card rounded-2xl p-4 shadow-apple-lg">
                                <p class="text-sm font-semibold text-charcoal">"Data & Creative"</p>
                                <p class="text-xs text-charcoal/50">"Dual Expertise"</p>
                            </div>
                        </div>
                    </div>

                    <div class="order-1 lg:order-2" style=move || TEXT.style(text_visible.get())>
                        <h2 class="text-headline text-charcoal mb-6">
                            "Bridging Data & "
                            <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                                "Creativity"
                            </span>
                        </h2>

                        <div class="space-y-5 text-body text-charcoal/70 leading-relaxed">
                            {about
                                .paragraphs
                                .iter()
                                .map(|paragraph| {
                                    view! { <p>{paragraph.iter().map(fragment).collect_view()}</p> }
                                })
                                .collect_view()}
                        </div>

                        <div class="flex flex-wrap gap-3 mt-8">
                            {about
                                .pills
                                .iter()
                                .enumerate()
                                .map(|(i, pill)| {
                                    let cue = PILL.delayed(100 * i as u64);
                                    view! {
                                        <div
                                            class=format!(
                                                "flex items-center gap-2 px-4 py-2.5 rounded-xl {}",
                                                pill.tone.pill_class(),
                                            )
                                            style=move || cue.style(pills_visible.get())
                                        >
                                            <span class="text-sm">{pill.icon.as_str()}</span>
                                            <span class="text-sm font-medium">{pill.label.as_str()}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="grid grid-cols-3 gap-6 mt-10 pt-10 border-t border-charcoal/10">
                            {about
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <p class="text-3xl font-bold text-charcoal">{stat.value.as_str()}</p>
                                            <p class="text-caption text-charcoal/50 mt-1">{stat.label.as_str()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn fragment(part: &'static Fragment) -> impl IntoView {
    match part.tone {
        Tone::Plain => Either::Left(part.text.as_str()),
        tone => Either::Right(view! { <span class=tone.text_class()>{part.text.as_str()}</span> }),
    }
}
