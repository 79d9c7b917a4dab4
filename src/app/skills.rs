use leptos::{html, prelude::*};

use super::reveal::use_reveal;
use crate::content::{SkillCategory, SocialLink};
use crate::motion::{Cue, Offset};

const HEADER: Cue = Cue::new(Offset::Up(50), 1000, 0);
const SOCIALS: Cue = Cue::new(Offset::Left(60), 900, 0);
const SKILLS: Cue = Cue::new(Offset::Right(60), 900, 0);

#[component]
pub fn SocialsSkills(
    socials: &'static [SocialLink],
    skills: &'static [SkillCategory],
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let header_visible = use_reveal(section_ref, 70);
    let socials_visible = use_reveal(section_ref, 60);
    let skills_visible = use_reveal(section_ref, 50);

    view! {
        <section
            node_ref=section_ref
            id="skills"
            class="relative min-h-screen w-full flex items-center py-24 overflow-hidden"
        >
            <div class="absolute inset-0 bg-gradient-to-b from-white via-offwhite to-white" />
            <div class="absolute top-1/3 right-0 w-72 h-72 bg-blue-400/5 rounded-full blur-3xl" />
            <div class="absolute bottom-1/3 left-0 w-72 h-72 bg-purple-400/5 rounded-full blur-3xl" />

            <div class="relative z-10 w-full max-w-7xl mx-auto px-6">
                <div class="text-center mb-16" style=move || HEADER.style(header_visible.get())>
                    <div class="flex items-center justify-center gap-3 mb-6">
                        <div class="w-12 h-px bg-charcoal/20" />
                        <span class="text-caption uppercase tracking-widest text-charcoal/50">
                            "Connect & Skills"
                        </span>
                        <div class="w-12 h-px bg-charcoal/20" />
                    </div>
                    <h2 class="text-headline text-charcoal mb-4">
                        "Let's Connect & "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Collaborate"
                        </span>
                    </h2>
                    <p class="text-body text-charcoal/60 max-w-xl mx-auto">
                        "Find me on social media and explore the skills I've developed through years of practice and passion."
                    </p>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-16 items-start">
                    <div style=move || SOCIALS.style(socials_visible.get())>
                        <h3 class="text-xl font-semibold text-charcoal mb-6 flex items-center gap-3">
                            <img
                                src="/images/find-me-icon.jpg"
                                alt="Find Me"
                                class="w-8 h-8 rounded-lg object-cover"
                            />
                            "Find Me On"
                        </h3>
                        <div class="space-y-4">
                            {socials.iter().map(|social| view! { <SocialCard social /> }).collect_view()}
                        </div>
                    </div>

                    <div style=move || SKILLS.style(skills_visible.get())>
                        <h3 class="text-xl font-semibold text-charcoal mb-6 flex items-center gap-3">
                            <img
                                src="/images/skills-icon.jpg"
                                alt="Skills"
                                class="w-8 h-8 rounded-lg object-cover"
                            />
                            "My Skills"
                        </h3>
                        <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                            {skills.iter().map(|category| view! { <SkillCard category /> }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SocialCard(social: &'static SocialLink) -> impl IntoView {
    view! {
        <a
            href=social.url.as_str()
            target="_blank"
            rel="noopener noreferrer"
            class="group flex items-center justify-between p-5 rounded-2xl glass-card card-hover"
        >
            <div class="flex items-center gap-4">
                <div class="w-12 h-12 rounded-xl overflow-hidden group-hover:scale-110 transition-transform duration-300">
                    <img
                        src=social.image.as_str()
                        alt=social.name.as_str()
                        class="w-full h-full object-cover"
                    />
                </div>
                <div>
                    <p class="font-semibold text-charcoal group-hover:text-blue-600 transition-colors">
                        {social.name.as_str()}
                    </p>
                    <p class="text-sm text-charcoal/50">{social.handle.as_str()}</p>
                </div>
            </div>
            <span class="text-charcoal/30 group-hover:text-blue-600 transition-all duration-300">
                "↗"
            </span>
        </a>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="p-5 rounded-2xl glass-card hover:bg-white hover:shadow-card-hover transition-all duration-300">
            <div class="flex items-center gap-3 mb-4">
                <div class="w-10 h-10 rounded-xl overflow-hidden">
                    <img
                        src=category.image.as_str()
                        alt=category.name.as_str()
                        class="w-full h-full object-cover"
                    />
                </div>
                <p class="font-semibold text-charcoal">{category.name.as_str()}</p>
            </div>
            <ul class="space-y-2">
                {category
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <li class="text-sm text-charcoal/60 flex items-start gap-2">
                                <span class="w-1 h-1 rounded-full bg-blue-500 mt-2 flex-shrink-0" />
                                <span>{item.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
