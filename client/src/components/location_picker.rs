//! Location picker — fixed catalog of places rendered as icon cards.

use leptos::prelude::*;

use reports::Location;

use crate::state::composer::ReportComposer;

#[component]
pub fn LocationPicker(composer: RwSignal<ReportComposer>, locations: Vec<Location>) -> impl IntoView {
    view! {
        <div class="location-picker">
            <h3 class="step-heading">"Where did this happen?"</h3>
            <div class="locations-grid">
                {locations
                    .into_iter()
                    .map(|location| {
                        let id = location.id.clone();
                        let chosen = location.clone();
                        view! {
                            <button
                                class="location-card"
                                class:selected=move || {
                                    composer.with(|c| c.location.as_ref().map(|l| l.id.as_str()) == Some(id.as_str()))
                                }
                                on:click=move |_| composer.update(|c| c.set_location(chosen.clone()))
                            >
                                <span class="location-card__icon">{location.icon.clone()}</span>
                                <span class="location-card__name">{location.name.clone()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
