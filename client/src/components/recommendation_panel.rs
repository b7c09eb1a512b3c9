//! Recommendation panel — renders a generated recommendation record.

use leptos::prelude::*;

use reports::Recommendation;

#[component]
fn ActionGroup(title: &'static str, items: Vec<String>) -> impl IntoView {
    (!items.is_empty()).then(|| {
        view! {
            <div class="action-group">
                <h4>{title}</h4>
                <ul>
                    {items
                        .into_iter()
                        .map(|item| view! { <li>{item}</li> })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        }
    })
}

#[component]
pub fn RecommendationPanel(recommendation: Recommendation) -> impl IntoView {
    let urgency = recommendation.urgency;
    let notes = (!recommendation.notes.trim().is_empty()).then(|| {
        view! {
            <div class="recommendation-panel__notes">
                <h4>"Analysis Notes"</h4>
                <p>{recommendation.notes.clone()}</p>
            </div>
        }
    });

    view! {
        <div class="recommendation-panel">
            <span class=format!("urgency-badge urgency-badge--{}", urgency.as_str())>
                {format!("{} urgency", urgency.as_str().to_uppercase())}
            </span>

            <div class="recommendation-panel__summary">
                <h4>"Summary"</h4>
                <p>{recommendation.summary}</p>
            </div>

            <ActionGroup title="Immediate Actions" items=recommendation.immediate_actions/>
            <ActionGroup title="Short-term Actions" items=recommendation.short_term_actions/>
            <ActionGroup title="Long-term Actions" items=recommendation.long_term_actions/>
            <ActionGroup title="Resources" items=recommendation.resources/>

            {notes}
        </div>
    }
}
