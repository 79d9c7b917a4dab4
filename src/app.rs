mod about;
mod dom;
mod experience;
mod footer;
mod hero;
mod modal;
mod navigation;
mod reveal;
mod skills;

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{profile, Profile};

use about::AboutMe;
use experience::ExperienceGallery;
use footer::Footer;
use hero::Hero;
use navigation::Navigation;
use skills::SocialsSkills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-white text-charcoal antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let site_name = profile()
        .map(|p| p.owner.name.as_str())
        .unwrap_or("Portfolio");

    view! {
        <Title formatter=move |title| format!("{site_name} - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

/// The whole site: every section lives on this one page.
#[component]
fn PortfolioPage() -> impl IntoView {
    match profile() {
        Ok(profile) => Either::Left(view! { <Sections profile /> }),
        Err(err) => {
            log::error!("content failed to load: {err}");
            Either::Right(view! { <ContentUnavailable /> })
        }
    }
}

#[component]
fn Sections(profile: &'static Profile) -> impl IntoView {
    let brand = profile
        .owner
        .name
        .split_whitespace()
        .next()
        .unwrap_or_default();

    view! {
        <Title text="Portfolio" />
        <Navigation brand />
        <main class="w-full overflow-x-hidden">
            <Hero owner=&profile.owner />
            <AboutMe owner=&profile.owner about=&profile.about />
            <SocialsSkills socials=profile.socials.as_slice() skills=profile.skills.as_slice() />
            <ExperienceGallery records=profile.experiences.as_slice() />
        </main>
        <Footer owner=&profile.owner socials=profile.socials.as_slice() />
    }
}

#[component]
fn ContentUnavailable() -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <main class="flex min-h-screen items-center justify-center px-6">
            <p class="text-body text-charcoal/60">
                "This portfolio is being updated. Please check back soon."
            </p>
        </main>
    }
}
