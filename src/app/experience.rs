use leptos::{html, prelude::*};

use super::modal::ExperienceModal;
use super::reveal::use_reveal;
use crate::content::{Category, ExperienceRecord};
use crate::gallery::CategoryFilter;
use crate::modal::ModalState;
use crate::motion::{self, Cue, Offset};

const HEADING: Cue = Cue::new(Offset::Up(50), 1000, 0);
const BUTTON: Cue = Cue::new(Offset::Up(30), 800, 0);

#[component]
pub fn ExperienceGallery(records: &'static [ExperienceRecord]) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let heading_visible = use_reveal(section_ref, 70);
    let buttons_visible = use_reveal(section_ref, 60);
    let grid_visible = use_reveal(section_ref, 50);

    let filter = RwSignal::new(CategoryFilter::default());
    let modal = RwSignal::new(ModalState::default());
    let visible = Memo::new(move |_| filter.with(|f| f.visible(records)));

    let change_category = move |category: Category| {
        let leaving = visible.with_untracked(Vec::len);
        if !filter.try_update(|f| f.select(category)).unwrap_or(false) {
            return;
        }
        log::debug!("switching experience category to {category}");
        set_timeout(
            move || {
                filter.update(CategoryFilter::finish_fade_out);
                let entering = visible.with_untracked(Vec::len);
                set_timeout(
                    move || filter.update(CategoryFilter::finish_fade_in),
                    motion::fade_in_duration(entering),
                );
            },
            motion::fade_out_duration(leaving),
        );
    };

    let open_record = Callback::new(move |record: &'static ExperienceRecord| {
        log::debug!("opening experience {}", record.id);
        modal.update(|m| m.open(record.clone()));
    });

    view! {
        <section node_ref=section_ref id="experience" class="relative min-h-screen w-full py-24 lg:py-32">
            <div class="absolute inset-0 bg-gradient-to-b from-offwhite via-white to-offwhite" />

            <div class="relative z-10 max-w-7xl mx-auto px-6">
                <div class="text-center mb-16" style=move || HEADING.style(heading_visible.get())>
                    <div class="flex items-center justify-center gap-3 mb-6">
                        <div class="w-12 h-px bg-charcoal/20" />
                        <span class="text-caption uppercase tracking-widest text-charcoal/50">
                            "Portfolio"
                        </span>
                        <div class="w-12 h-px bg-charcoal/20" />
                    </div>
                    <h2 class="text-headline text-charcoal mb-4">
                        "My "
                        <span class="bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                            "Experience"
                        </span>
                    </h2>
                    <p class="text-body text-charcoal/60 max-w-2xl mx-auto">
                        "Explore my journey across different domains. Click on any card to see the full story."
                    </p>
                </div>

                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {Category::ALL
                        .into_iter()
                        .enumerate()
                        .map(|(i, category)| {
                            let cue = BUTTON.delayed(100 * i as u64);
                            let is_active = move || filter.with(|f| f.active() == category);
                            view! {
                                <button
                                    on:click=move |_| change_category(category)
                                    style=move || cue.style(buttons_visible.get())
                                    class=move || {
                                        if is_active() {
                                            "group relative flex items-center gap-2.5 px-5 py-3 rounded-2xl border-2 transition-all duration-500 ease-apple overflow-hidden border-charcoal bg-charcoal text-white shadow-apple-lg"
                                        } else {
                                            "group relative flex items-center gap-2.5 px-5 py-3 rounded-2xl border-2 transition-all duration-500 ease-apple overflow-hidden border-charcoal/10 bg-white text-charcoal/70 hover:border-charcoal/30 hover:bg-offwhite"
                                        }
                                    }
                                >
                                    <img
                                        src=category.button_image()
                                        alt=category.label()
                                        class=move || {
                                            if is_active() {
                                                "w-6 h-6 rounded-md object-cover transition-all duration-300 opacity-100"
                                            } else {
                                                "w-6 h-6 rounded-md object-cover transition-all duration-300 opacity-70 group-hover:opacity-100"
                                            }
                                        }
                                    />
                                    <span class="text-sm font-semibold">{category.label()}</span>
                                    <Show when=is_active>
                                        <span class="absolute inset-0 bg-gradient-to-r from-blue-600/20 to-purple-600/20" />
                                    </Show>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, record)| {
                                view! {
                                    <ExperienceCard
                                        record
                                        index
                                        filter
                                        revealed=grid_visible
                                        on_open=open_record
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <Show when=move || visible.with(Vec::is_empty)>
                    <div class="text-center py-16">
                        <p class="text-body text-charcoal/50">"No experiences in this category yet."</p>
                    </div>
                </Show>
            </div>
        </section>
        <ExperienceModal state=modal />
    }
}

#[component]
fn ExperienceCard(
    record: &'static ExperienceRecord,
    index: usize,
    filter: RwSignal<CategoryFilter>,
    revealed: Signal<bool>,
    on_open: Callback<&'static ExperienceRecord>,
) -> impl IntoView {
    view! {
        <div
            on:click=move |_| on_open.run(record)
            style=move || motion::card_style(filter.with(CategoryFilter::phase), index, revealed.get())
            class="group relative bg-white rounded-3xl border border-charcoal/8 overflow-hidden cursor-pointer card-hover"
        >
            <div class="relative h-52 overflow-hidden">
                <img
                    src=record.image()
                    alt=record.title.as_str()
                    class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/50 via-transparent to-transparent" />
                <div class="absolute top-4 left-4">
                    <span class="px-3 py-1.5 rounded-full bg-white/90 backdrop-blur-sm text-xs font-semibold text-charcoal">
                        {record.category.label()}
                    </span>
                </div>
                <div class="absolute top-4 right-4 opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="w-10 h-10 rounded-full bg-white/90 backdrop-blur-sm flex items-center justify-center text-charcoal">
                        "↗"
                    </div>
                </div>
            </div>

            <div class="p-6">
                <div class="mb-3">
                    <h3 class="text-lg font-bold text-charcoal mb-1 group-hover:text-blue-600 transition-colors">
                        {record.title.as_str()}
                    </h3>
                    <p class="text-sm text-charcoal/60">{record.role.as_str()}</p>
                </div>
                <div class="flex flex-wrap gap-3 mb-4 text-caption text-charcoal/50">
                    <span>"📅 " {record.date.as_str()}</span>
                    <span>"📍 " {record.location.as_str()}</span>
                </div>
                <p class="text-sm text-charcoal/60 line-clamp-2 mb-4">{record.description.as_str()}</p>
                <div class="flex items-start gap-2 p-3 rounded-xl bg-amber-50/50 border border-amber-100">
                    <span class="text-sm flex-shrink-0">"🏆"</span>
                    <p class="text-xs text-charcoal/70 line-clamp-1">{record.results.as_str()}</p>
                </div>
            </div>
        </div>
    }
}
