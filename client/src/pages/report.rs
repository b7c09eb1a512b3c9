//! Report wizard — six gated steps accumulating one draft.
//!
//! Two entry points share the wizard: "get help for myself" and "help
//! someone in need". Only the identity-step copy differs; the composer
//! and gating are identical.

use leptos::prelude::*;

use reports::Symbol;

use crate::components::body_map::BodyMap;
use crate::components::emotion_scale::EmotionScale;
use crate::components::frequency_picker::FrequencyPicker;
use crate::components::location_picker::LocationPicker;
use crate::components::safety_thermometer::SafetyThermometer;
use crate::components::symbol_selector::SymbolSelector;
use crate::net::api;
use crate::state::composer::{FIRST_STEP, LAST_STEP, ReportComposer, ReportMode};

/// How long the confirmation screen shows before the composer resets.
#[cfg(feature = "csr")]
const SUCCESS_RESET_MS: u32 = 3_000;

#[component]
pub fn ReportSelfPage() -> impl IntoView {
    view! { <ReportWizard mode=ReportMode::Myself/> }
}

#[component]
pub fn HelpOthersPage() -> impl IntoView {
    view! { <ReportWizard mode=ReportMode::SomeoneElse/> }
}

/// Submit the composer draft. On failure the draft stays intact so the user
/// can resubmit; on success the confirmation shows and the composer resets
/// after a fixed delay.
fn submit(composer: RwSignal<ReportComposer>) {
    let Some(draft) = composer.with_untracked(ReportComposer::build_draft) else {
        return;
    };
    composer.update(ReportComposer::begin_submit);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match api::submit_report(&draft).await {
            Ok(_) => {
                composer.update(ReportComposer::submit_succeeded);
                gloo_timers::callback::Timeout::new(SUCCESS_RESET_MS, move || {
                    composer.update(ReportComposer::reset);
                })
                .forget();
            }
            Err(e) => composer.update(|c| c.submit_failed(e.to_string())),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = draft;
    }
}

#[component]
fn ReportWizard(mode: ReportMode) -> impl IntoView {
    let composer = RwSignal::new(ReportComposer::new(mode));
    let symbols = LocalResource::new(|| api::fetch_symbols());
    let locations = LocalResource::new(|| api::fetch_locations());

    view! {
        <div class="report-page">
            <a class="page-title-link" href="/">
                <h1 class="page-title">"Are You Safe"</h1>
            </a>

            <Show
                when=move || composer.with(|c| c.submitted)
                fallback=move || {
                    view! {
                        <div class="report-form">
                            <ProgressBar composer=composer/>
                            <WizardStep composer=composer mode=mode symbols=symbols locations=locations/>
                            <WizardActions composer=composer/>
                        </div>
                    }
                }
            >
                <SuccessCard composer=composer/>
            </Show>
        </div>
    }
}

#[component]
fn ProgressBar(composer: RwSignal<ReportComposer>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            {(FIRST_STEP..=LAST_STEP)
                .map(|step| {
                    view! {
                        <div
                            class="progress-step"
                            class:active=move || composer.with(|c| c.step >= step)
                            class:current=move || composer.with(|c| c.step == step)
                        >
                            {step.to_string()}
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn WizardStep(
    composer: RwSignal<ReportComposer>,
    mode: ReportMode,
    symbols: LocalResource<Result<Vec<Symbol>, api::ApiError>>,
    locations: LocalResource<Result<Vec<reports::Location>, api::ApiError>>,
) -> impl IntoView {
    move || {
        let step = composer.with(|c| c.step);
        match step {
            2 => match symbols.get() {
                Some(Ok(list)) => view! { <SymbolSelector composer=composer symbols=list/> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="load-error">{format!("Could not load the symbols: {e}")}</p> }.into_any()
                }
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
            },
            3 => view! { <EmotionScale composer=composer/> }.into_any(),
            4 => match locations.get() {
                Some(Ok(list)) => view! { <LocationPicker composer=composer locations=list/> }.into_any(),
                Some(Err(e)) => {
                    view! { <p class="load-error">{format!("Could not load the locations: {e}")}</p> }.into_any()
                }
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
            },
            5 => view! { <FrequencyPicker composer=composer/> }.into_any(),
            6 => view! {
                <div class="safety-step">
                    <SafetyThermometer composer=composer/>
                    <Show when=move || composer.with(ReportComposer::requires_body_map)>
                        <BodyMap composer=composer/>
                    </Show>
                </div>
            }
            .into_any(),
            _ => view! { <IdentityStep composer=composer mode=mode/> }.into_any(),
        }
    }
}

#[component]
fn IdentityStep(composer: RwSignal<ReportComposer>, mode: ReportMode) -> impl IntoView {
    let (heading, placeholder, hint) = match mode {
        ReportMode::Myself => (
            "What's your name?",
            "Enter your name or a nickname",
            "A nickname is fine — a teacher just needs a way to find you.",
        ),
        ReportMode::SomeoneElse => (
            "Who needs help?",
            "Enter the student's name",
            "Tell us who this happened to so a teacher can check on them.",
        ),
    };

    view! {
        <div class="identity-step">
            <h3 class="step-heading">{heading}</h3>
            <input
                class="identity-step__input"
                type="text"
                placeholder=placeholder
                prop:value=move || composer.with(|c| c.student_name.clone())
                on:input=move |ev| composer.update(|c| c.set_student_name(event_target_value(&ev)))
            />
            <p class="identity-step__hint">{hint}</p>
        </div>
    }
}

#[component]
fn WizardActions(composer: RwSignal<ReportComposer>) -> impl IntoView {
    view! {
        <div class="form-actions">
            <Show when=move || composer.with(|c| c.step > FIRST_STEP)>
                <button class="btn" on:click=move |_| composer.update(ReportComposer::previous)>
                    "Previous"
                </button>
            </Show>

            {move || {
                if composer.with(|c| c.step) < LAST_STEP {
                    view! {
                        <button
                            class="btn btn--primary"
                            disabled=move || !composer.with(ReportComposer::can_proceed)
                            on:click=move |_| composer.update(ReportComposer::next)
                        >
                            "Next"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn--primary"
                            disabled=move || composer.with(|c| !c.is_complete() || c.submitting)
                            on:click=move |_| submit(composer)
                        >
                            {move || if composer.with(|c| c.submitting) { "Sending..." } else { "Submit Report" }}
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>

        {move || {
            composer
                .with(|c| c.submit_error.clone())
                .map(|err| {
                    view! {
                        <p class="submit-error">
                            {format!("Could not send the report: {err}. Your answers are kept — try again.")}
                        </p>
                    }
                })
        }}
    }
}

#[component]
fn SuccessCard(composer: RwSignal<ReportComposer>) -> impl IntoView {
    let student_name = composer.with_untracked(|c| c.student_name.clone());

    view! {
        <div class="success-card">
            <div class="success-card__icon">"✓"</div>
            <h2>"Report Sent Successfully"</h2>
            <p>
                {format!(
                    "The report for {student_name} has been received. A teacher will review it shortly."
                )}
            </p>
            <div class="success-card__actions">
                <a class="btn" href="/">
                    "Back to Home"
                </a>
                <button class="btn btn--primary" on:click=move |_| composer.update(ReportComposer::reset)>
                    "Create New Report"
                </button>
            </div>
        </div>
    }
}
