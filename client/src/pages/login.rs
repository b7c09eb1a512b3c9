//! Teacher login and registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

#[derive(Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Already signed in — straight to the dashboard.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate("/teacher", NavigateOptions::default());
        }
    });

    let mode = RwSignal::new(FormMode::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let pending = RwSignal::new(false);

    let submit = move |_| {
        if pending.get_untracked() {
            return;
        }
        error.set(None);
        pending.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            use crate::net::api;

            let result = match mode.get_untracked() {
                FormMode::Login => api::login(&email.get_untracked(), &password.get_untracked()).await,
                FormMode::Register => {
                    api::register(
                        &name.get_untracked(),
                        &email.get_untracked(),
                        &password.get_untracked(),
                    )
                    .await
                }
            };

            match result {
                Ok(()) => match api::fetch_current_user().await {
                    Some(user) => auth.set(AuthState::signed_in(user)),
                    None => {
                        pending.set(false);
                        error.set(Some("session could not be established".to_owned()));
                    }
                },
                Err(e) => {
                    pending.set(false);
                    error.set(Some(e.to_string()));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        pending.set(false);
    };

    view! {
        <div class="login-page">
            <a class="page-title-link" href="/">
                <h1 class="page-title">"Are You Safe"</h1>
            </a>

            <div class="login-card">
                <div class="login-card__tabs">
                    <button
                        class="login-card__tab"
                        class:active=move || mode.get() == FormMode::Login
                        on:click=move |_| mode.set(FormMode::Login)
                    >
                        "Sign in"
                    </button>
                    <button
                        class="login-card__tab"
                        class:active=move || mode.get() == FormMode::Register
                        on:click=move |_| mode.set(FormMode::Register)
                    >
                        "Register"
                    </button>
                </div>

                <Show when=move || mode.get() == FormMode::Register>
                    <label class="login-card__label">
                        "Name"
                        <input
                            class="login-card__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                </Show>

                <label class="login-card__label">
                    "Email"
                    <input
                        class="login-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="login-card__label">
                    "Password"
                    <input
                        class="login-card__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit(());
                            }
                        }
                    />
                </label>

                {move || error.get().map(|msg| view! { <p class="login-card__error">{msg}</p> })}

                <button class="btn btn--primary login-card__submit" disabled=move || pending.get() on:click=move |_| submit(())>
                    {move || {
                        match (mode.get(), pending.get()) {
                            (_, true) => "Working...",
                            (FormMode::Login, false) => "Sign in",
                            (FormMode::Register, false) => "Create account",
                        }
                    }}
                </button>
            </div>
        </div>
    }
}
