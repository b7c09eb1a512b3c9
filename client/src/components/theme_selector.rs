//! Theme selector — palette popover persisting one preference key.

use leptos::prelude::*;

use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeSelector() -> impl IntoView {
    let open = RwSignal::new(false);
    let current = RwSignal::new(theme::read_preference());

    // Apply the stored preference when the selector first mounts.
    theme::apply(current.get_untracked());

    view! {
        <div class="theme-selector">
            <button class="theme-selector__toggle" title="Background theme" on:click=move |_| open.update(|o| *o = !*o)>
                "🎨"
            </button>
            <Show when=move || open.get()>
                <div class="theme-selector__menu">
                    {Theme::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <button
                                    class="theme-selector__option"
                                    class:active=move || current.get() == option
                                    style:background=option.gradient()
                                    on:click=move |_| {
                                        current.set(theme::select(option));
                                        open.set(false);
                                    }
                                >
                                    {option.name()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </div>
    }
}
