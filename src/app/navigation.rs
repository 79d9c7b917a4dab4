use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;

use super::dom::scroll_to_anchor;
use crate::chrome::{NavStyle, NAV_LINKS};

#[component]
pub fn Navigation(brand: &'static str) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let nav_style = Memo::new(move |_| NavStyle::for_scroll(scroll_y.get()));
    let (menu_open, set_menu_open) = signal(false);

    let jump = move |ev: MouseEvent, href: &'static str| {
        ev.prevent_default();
        set_menu_open(false);
        scroll_to_anchor(href);
    };

    view! {
        <header class=move || {
            format!(
                "fixed top-0 left-0 right-0 z-50 transition-all duration-500 ease-apple {}",
                nav_style.get().class(),
            )
        }>
            <div class="max-w-7xl mx-auto px-6 flex items-center justify-between">
                <a
                    href="#hero"
                    on:click=move |ev| jump(ev, "#hero")
                    class="text-lg font-semibold text-charcoal tracking-tight hover:opacity-70 transition-opacity flex items-center gap-2"
                >
                    <img src="/images/logo-icon.jpg" alt="Logo" class="w-8 h-8 rounded-lg object-cover" />
                    <span>{format!("{brand}'s Dashboard")}</span>
                </a>

                <nav class="hidden md:flex items-center gap-1">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    on:click=move |ev| jump(ev, link.href)
                                    class="relative px-4 py-2 text-sm font-medium text-charcoal/80 hover:text-charcoal transition-colors duration-300 group"
                                >
                                    {link.name}
                                    <span class="absolute bottom-1 left-4 right-4 h-0.5 bg-blue-500 scale-x-0 group-hover:scale-x-100 transition-transform duration-300 origin-left" />
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>

                <a
                    href="#contact"
                    on:click=move |ev| jump(ev, "#contact")
                    class="hidden md:inline-flex items-center px-5 py-2.5 rounded-full bg-charcoal text-white text-sm font-medium hover:bg-charcoal-light transition-all duration-300 btn-glow"
                >
                    "Get in Touch"
                </a>

                <button
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    class="md:hidden p-2 rounded-xl hover:bg-black/5 transition-colors text-2xl leading-none"
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>

        <Show when=move || menu_open.get()>
            <div class="fixed inset-0 z-40 md:hidden" on:click=move |_| set_menu_open(false)>
                <div class="absolute inset-0 bg-charcoal/20 backdrop-blur-sm" />
            </div>
        </Show>

        <div class=move || {
            if menu_open.get() {
                "fixed top-[72px] left-4 right-4 z-50 md:hidden transition-all duration-300 opacity-100 translate-y-0 pointer-events-auto"
            } else {
                "fixed top-[72px] left-4 right-4 z-50 md:hidden transition-all duration-300 opacity-0 -translate-y-4 pointer-events-none"
            }
        }>
            <nav class="glass rounded-2xl p-4 shadow-apple-xl">
                <div class="flex flex-col gap-1">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    on:click=move |ev| jump(ev, link.href)
                                    class="px-4 py-3 rounded-xl text-base font-medium text-charcoal/80 hover:text-charcoal hover:bg-black/5 transition-all duration-200"
                                >
                                    {link.name}
                                </a>
                            }
                        })
                        .collect_view()}
                    <div class="mt-2 pt-2 border-t border-black/5">
                        <a
                            href="#contact"
                            on:click=move |ev| jump(ev, "#contact")
                            class="flex items-center justify-center px-4 py-3 rounded-xl bg-charcoal text-white text-base font-medium hover:bg-charcoal-light transition-colors"
                        >
                            "Get in Touch"
                        </a>
                    </div>
                </div>
            </nav>
        </div>
    }
}
