//! Safety thermometer — how safe the student feels, 1 (very safe) to
//! 5 (very unsafe). Segments below the selected level fill in.

use leptos::prelude::*;

use reports::SafetyRating;

use crate::state::composer::ReportComposer;

const SAFETY_LEVELS: [(u8, &str, &str); 5] = [
    (1, "Very Safe", "#22c55e"),
    (2, "Safe", "#84cc16"),
    (3, "Neutral", "#eab308"),
    (4, "Unsafe", "#f97316"),
    (5, "Very Unsafe", "#ef4444"),
];

#[component]
pub fn SafetyThermometer(composer: RwSignal<ReportComposer>) -> impl IntoView {
    let selected_level = move || composer.with(|c| c.safety.map_or(0, |s| s.level));

    view! {
        <div class="safety-thermometer">
            <h3 class="step-heading">"Do you feel safe at school?"</h3>

            <div class="thermometer">
                <div class="thermometer__bar">
                    {SAFETY_LEVELS
                        .into_iter()
                        .map(|(level, _, color)| {
                            view! {
                                <div
                                    class="thermometer__segment"
                                    class:filled=move || { selected_level() >= level }
                                    class:active=move || selected_level() == level
                                    style:background-color=move || {
                                        if selected_level() >= level { color } else { "#e5e7eb" }
                                    }
                                    on:click=move |_| composer.update(|c| c.set_safety(level))
                                >
                                    <span class="thermometer__segment-label">{level.to_string()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="thermometer__labels">
                    {SAFETY_LEVELS
                        .into_iter()
                        .map(|(level, label, _)| {
                            view! {
                                <button
                                    class="thermometer__label-btn"
                                    class:active=move || selected_level() == level
                                    on:click=move |_| composer.update(|c| c.set_safety(level))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            {move || {
                composer
                    .with(|c| c.safety)
                    .map(|safety: SafetyRating| {
                        view! { <p class="scale-hint">{format!("Safety level: {}", safety.label())}</p> }
                    })
            }}
        </div>
    }
}
