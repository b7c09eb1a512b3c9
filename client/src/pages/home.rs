//! Landing page — entry points for students, bystanders, and teachers.

use leptos::prelude::*;

use crate::components::theme_selector::ThemeSelector;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <ThemeSelector/>

            <header class="home-page__hero">
                <h1 class="home-page__title">"Are You Safe"</h1>
                <p class="home-page__subtitle">
                    "A safe place to tell someone what happened. You can use pictures instead of words."
                </p>
            </header>

            <div class="home-page__cards">
                <a class="home-card" href="/report">
                    <span class="home-card__icon">"🙋"</span>
                    <span class="home-card__title">"Get help for myself"</span>
                    <span class="home-card__text">"Tell us what happened to you."</span>
                </a>
                <a class="home-card" href="/help-others">
                    <span class="home-card__icon">"🤝"</span>
                    <span class="home-card__title">"Help someone in need"</span>
                    <span class="home-card__text">"Saw something? Report it for a friend."</span>
                </a>
                <a class="home-card home-card--teacher" href="/teacher">
                    <span class="home-card__icon">"🧑‍🏫"</span>
                    <span class="home-card__title">"Teacher dashboard"</span>
                    <span class="home-card__text">"Review and follow up on reports."</span>
                </a>
            </div>
        </div>
    }
}
