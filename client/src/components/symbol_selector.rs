//! Symbol picker — pictographic incident tags grouped by category.

use leptos::prelude::*;

use reports::{Symbol, SymbolCategory};

use crate::state::composer::ReportComposer;

fn category_icon(category: SymbolCategory) -> &'static str {
    match category {
        SymbolCategory::Physical => "👊",
        SymbolCategory::Verbal => "💬",
        SymbolCategory::Social => "👥",
        SymbolCategory::Cyber => "💻",
    }
}

/// Grid of toggleable symbol cards with a category filter row. Selection is
/// a set keyed by symbol id; clicking a selected card deselects it.
#[component]
pub fn SymbolSelector(composer: RwSignal<ReportComposer>, symbols: Vec<Symbol>) -> impl IntoView {
    let catalog = StoredValue::new(symbols);
    let active_category = RwSignal::new(Option::<SymbolCategory>::None);

    view! {
        <div class="symbol-selector">
            <h3 class="step-heading">"What happened?"</h3>

            <div class="category-filters">
                <button
                    class="filter-chip"
                    class:active=move || active_category.get().is_none()
                    on:click=move |_| active_category.set(None)
                >
                    "All"
                </button>
                {SymbolCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                class="filter-chip"
                                class:active=move || active_category.get() == Some(category)
                                on:click=move |_| active_category.set(Some(category))
                            >
                                {format!("{} {}", category_icon(category), category.as_str())}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="symbols-grid">
                {move || {
                    let filter = active_category.get();
                    catalog
                        .get_value()
                        .into_iter()
                        .filter(|s| filter.is_none_or(|c| s.category == c))
                        .map(|symbol| {
                            let id = symbol.id.clone();
                            let toggled = symbol.clone();
                            view! {
                                <button
                                    class="symbol-card"
                                    class:selected=move || composer.with(|c| c.is_symbol_selected(&id))
                                    on:click=move |_| composer.update(|c| c.toggle_symbol(toggled.clone()))
                                >
                                    <span class="symbol-icon">{category_icon(symbol.category)}</span>
                                    <span class="symbol-label">{symbol.label.clone()}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || composer.with(|c| !c.symbols.is_empty())>
                <div class="selected-symbols">
                    <p class="selected-symbols__title">"Selected:"</p>
                    {move || {
                        composer
                            .with(|c| c.symbols.clone())
                            .into_iter()
                            .map(|symbol| view! { <span class="symbol-tag">{symbol.label}</span> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
