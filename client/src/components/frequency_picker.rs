//! Frequency picker — how often the incident happens.

use leptos::prelude::*;

use reports::Frequency;

use crate::state::composer::ReportComposer;

#[component]
pub fn FrequencyPicker(composer: RwSignal<ReportComposer>) -> impl IntoView {
    view! {
        <div class="frequency-picker">
            <h3 class="step-heading">"How often does this happen?"</h3>
            <div class="frequency-picker__options">
                {Frequency::ALL
                    .into_iter()
                    .map(|frequency| {
                        view! {
                            <button
                                class="frequency-btn"
                                class:selected=move || composer.with(|c| c.frequency == Some(frequency))
                                on:click=move |_| composer.update(|c| c.set_frequency(frequency))
                            >
                                {frequency.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
