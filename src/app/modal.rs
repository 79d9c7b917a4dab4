use std::time::Duration;

use leptos::{either::Either, ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use super::dom::{release_page_scroll, ScrollLock};
use crate::content::{Documentation, ExperienceRecord};
use crate::modal::{CloseToken, ModalState};
use crate::motion::{dialog_style, overlay_style, MODAL_EXIT_MS};

#[component]
pub fn ExperienceModal(state: RwSignal<ModalState>) -> impl IntoView {
    let selected = Memo::new(move |_| state.with(|m| m.selected().cloned()));
    // Only rendered while a record is selected, so not open means exiting
    let closing = Memo::new(move |_| state.with(|m| !m.is_open()));

    // Page scroll is held for the whole open + exit animation
    let scroll_lock = StoredValue::new(None::<ScrollLock>);
    Effect::new(move |_| {
        let locked = state.with(ModalState::scroll_locked);
        scroll_lock.update_value(|held| {
            if locked {
                held.get_or_insert_with(ScrollLock::acquire);
            } else {
                *held = None;
            }
        });
    });
    on_cleanup(release_page_scroll);

    let finish_later = move |token: CloseToken| {
        set_timeout(
            move || {
                if state.try_update(|m| m.finish_close(token)).unwrap_or(false) {
                    log::debug!("experience details closed");
                }
            },
            Duration::from_millis(MODAL_EXIT_MS),
        );
    };

    let dismiss = move || {
        if let Some(token) = state.try_update(ModalState::close).flatten() {
            finish_later(token);
        }
    };

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if let Some(token) = state.try_update(|m| m.handle_key(&ev.key())).flatten() {
            finish_later(token);
        }
    });

    move || {
        selected.get().map(|record| {
            view! {
                <div class="fixed inset-0 z-[100]" role="dialog" aria-modal="true">
                    <div
                        class="absolute inset-0 modal-overlay"
                        style=move || overlay_style(closing.get())
                        on:click=move |_| dismiss()
                    />

                    <div class="absolute inset-0 flex items-center justify-center p-4 md:p-8 pointer-events-none">
                        <div
                            class="relative w-full max-w-4xl max-h-[90vh] bg-white rounded-3xl shadow-2xl overflow-hidden pointer-events-auto"
                            style=move || dialog_style(closing.get())
                        >
                            <button
                                on:click=move |_| dismiss()
                                class="absolute top-4 right-4 z-10 w-10 h-10 rounded-full bg-white/90 backdrop-blur-sm shadow-lg flex items-center justify-center hover:bg-white hover:scale-110 transition-all duration-300 text-charcoal"
                                aria-label="Close"
                            >
                                "✕"
                            </button>
                            <div class="overflow-y-auto max-h-[90vh]">
                                <ExperienceDetail record />
                            </div>
                        </div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
fn ExperienceDetail(record: ExperienceRecord) -> impl IntoView {
    let image = record.image().to_string();
    let ExperienceRecord {
        category,
        title,
        role,
        date,
        location,
        description,
        responsibilities,
        results,
        documentation,
        ..
    } = record;

    view! {
        <div class="relative h-64 md:h-80 overflow-hidden">
            <img src=image alt=title.clone() class="w-full h-full object-cover" />
            <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-black/20 to-transparent" />
            <div class="absolute bottom-0 left-0 right-0 p-6 md:p-8">
                <span class="inline-block px-3 py-1 rounded-full bg-white/20 backdrop-blur-sm text-white text-xs font-medium mb-3">
                    {category.label()}
                </span>
                <h2 class="text-2xl md:text-4xl font-bold text-white mb-2">{title}</h2>
                <p class="text-lg text-white/80">{role}</p>
            </div>
        </div>

        <div class="p-6 md:p-8">
            <div class="flex flex-wrap gap-4 mb-8 pb-8 border-b border-charcoal/10">
                <div class="flex items-center gap-2 px-4 py-2 rounded-xl bg-offwhite">
                    <span class="text-blue-600">"📅"</span>
                    <span class="text-sm font-medium text-charcoal">{date}</span>
                </div>
                <div class="flex items-center gap-2 px-4 py-2 rounded-xl bg-offwhite">
                    <span class="text-purple-600">"📍"</span>
                    <span class="text-sm font-medium text-charcoal">{location}</span>
                </div>
            </div>

            <div class="mb-8">
                <h3 class="text-lg font-semibold text-charcoal mb-3">"Overview"</h3>
                <p class="text-body text-charcoal/70 leading-relaxed">{description}</p>
            </div>

            <div class="mb-8">
                <h3 class="text-lg font-semibold text-charcoal mb-4">"✔ What I Did"</h3>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-3">
                    {responsibilities
                        .into_iter()
                        .enumerate()
                        .map(|(idx, item)| {
                            view! {
                                <div class="flex items-start gap-3 p-4 rounded-xl bg-offwhite/50 hover:bg-offwhite transition-colors duration-200">
                                    <span class="flex-shrink-0 w-6 h-6 rounded-full bg-blue-500/10 flex items-center justify-center text-xs font-semibold text-blue-600">
                                        {idx + 1}
                                    </span>
                                    <span class="text-sm text-charcoal/80">{item}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="mb-8">
                <h3 class="text-lg font-semibold text-charcoal mb-4">"🏆 Results & Impact"</h3>
                <div class="p-6 rounded-2xl bg-gradient-to-br from-amber-50 to-orange-50 border border-amber-100">
                    <p class="text-body text-charcoal/80">{results}</p>
                </div>
            </div>

            <div>
                <h3 class="text-lg font-semibold text-charcoal mb-4">"Documentation"</h3>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {if documentation.is_empty() {
                        Either::Left(
                            (1..=3)
                                .map(|i| {
                                    view! {
                                        <div class="aspect-square rounded-xl bg-offwhite flex items-center justify-center">
                                            <span class="text-xs text-charcoal/40">{format!("Photo {i}")}</span>
                                        </div>
                                    }
                                })
                                .collect_view(),
                        )
                    } else {
                        Either::Right(
                            documentation
                                .into_iter()
                                .map(|doc| view! { <DocumentationTile doc /> })
                                .collect_view(),
                        )
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn DocumentationTile(doc: Documentation) -> impl IntoView {
    let Documentation {
        image,
        caption,
        link,
    } = doc;
    let figure = view! {
        <figure class="aspect-square rounded-xl overflow-hidden bg-offwhite relative group">
            <img
                src=image
                alt=caption.clone().unwrap_or_default()
                class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
            />
            {caption
                .map(|caption| {
                    view! {
                        <figcaption class="absolute bottom-0 left-0 right-0 p-2 text-xs text-white bg-gradient-to-t from-black/60 to-transparent">
                            {caption}
                        </figcaption>
                    }
                })}
        </figure>
    };
    match link {
        Some(href) => Either::Left(view! {
            <a href=href target="_blank" rel="noopener noreferrer">
                {figure}
            </a>
        }),
        None => Either::Right(figure),
    }
}
