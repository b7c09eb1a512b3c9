//! Emotion scale — five faces from very good to very bad.

use leptos::prelude::*;

use reports::EmotionRating;

use crate::state::composer::ReportComposer;

const EMOTIONS: [(u8, &str, &str); 5] = [
    (1, "😊", "Very Good"),
    (2, "🙂", "Good"),
    (3, "😐", "Neutral"),
    (4, "😟", "Bad"),
    (5, "😢", "Very Bad"),
];

#[component]
pub fn EmotionScale(composer: RwSignal<ReportComposer>) -> impl IntoView {
    view! {
        <div class="emotion-scale">
            <h3 class="step-heading">"How do you feel?"</h3>
            <div class="emotion-scale__buttons">
                {EMOTIONS
                    .into_iter()
                    .map(|(level, emoji, label)| {
                        view! {
                            <button
                                class=format!("emotion-button emotion-button--{level}")
                                class:selected=move || {
                                    composer.with(|c| c.emotion.map(|e| e.level) == Some(level))
                                }
                                title=label
                                on:click=move |_| composer.update(|c| c.set_emotion(level))
                            >
                                <span class="emotion-button__emoji">{emoji}</span>
                                <span class="emotion-button__label">{label}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                composer
                    .with(|c| c.emotion)
                    .map(|emotion: EmotionRating| {
                        view! { <p class="scale-hint">{format!("Selected level: {}", emotion.label())}</p> }
                    })
            }}
        </div>
    }
}
