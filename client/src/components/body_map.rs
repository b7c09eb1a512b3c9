//! Body map — click the silhouette to mark where physical contact happened.
//!
//! Click coordinates are normalized to percentages of the silhouette box;
//! the body region is derived by the shared classifier when the point is
//! added to the composer. Clicking a marker (or its chip) removes exactly
//! that point and keeps the others in click order.

use leptos::prelude::*;

use crate::state::composer::ReportComposer;

/// Convert a click on the silhouette into percentage coordinates.
#[cfg(feature = "csr")]
fn click_percent(ev: &leptos::ev::MouseEvent) -> Option<(f64, f64)> {
    use wasm_bindgen::JsCast;

    let target = ev.current_target()?;
    let element = target.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let x = (f64::from(ev.client_x()) - rect.left()) / rect.width() * 100.0;
    let y = (f64::from(ev.client_y()) - rect.top()) / rect.height() * 100.0;
    Some((x.clamp(0.0, 100.0), y.clamp(0.0, 100.0)))
}

#[cfg(not(feature = "csr"))]
fn click_percent(_ev: &leptos::ev::MouseEvent) -> Option<(f64, f64)> {
    None
}

#[component]
pub fn BodyMap(composer: RwSignal<ReportComposer>) -> impl IntoView {
    let on_silhouette_click = move |ev: leptos::ev::MouseEvent| {
        if let Some((x, y)) = click_percent(&ev) {
            composer.update(|c| c.add_body_point(x, y));
        }
    };

    view! {
        <div class="body-map">
            <h3 class="step-heading">"Where were you touched?"</h3>
            <div class="body-map__wrapper">
                <svg viewBox="0 0 200 400" class="body-map__svg" on:click=on_silhouette_click>
                    // Simplified silhouette.
                    <ellipse cx="100" cy="50" rx="30" ry="35" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>
                    <ellipse cx="100" cy="120" rx="50" ry="60" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>
                    <ellipse cx="100" cy="220" rx="45" ry="50" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>
                    <ellipse cx="70" cy="180" rx="20" ry="60" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>
                    <ellipse cx="130" cy="180" rx="20" ry="60" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>
                    <ellipse cx="100" cy="300" rx="25" ry="80" fill="#e5e7eb" stroke="#9ca3af" stroke-width="2"></ellipse>

                    {move || {
                        composer
                            .with(|c| c.body_map.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, point)| {
                                let cx = point.x / 100.0 * 200.0;
                                let cy = point.y / 100.0 * 400.0;
                                view! {
                                    <g>
                                        <circle
                                            cx=format!("{cx:.1}")
                                            cy=format!("{cy:.1}")
                                            r="8"
                                            fill="#ef4444"
                                            stroke="#dc2626"
                                            stroke-width="2"
                                            class="body-map__point"
                                            on:click=move |ev: leptos::ev::MouseEvent| {
                                                ev.stop_propagation();
                                                composer.update(|c| c.remove_body_point(index));
                                            }
                                        ></circle>
                                        <text
                                            x=format!("{cx:.1}")
                                            y=format!("{:.1}", cy - 15.0)
                                            text-anchor="middle"
                                            font-size="10"
                                            fill="#dc2626"
                                            font-weight="bold"
                                        >
                                            {(index + 1).to_string()}
                                        </text>
                                    </g>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </svg>
            </div>

            <Show when=move || composer.with(|c| !c.body_map.is_empty())>
                <div class="body-map__chips">
                    <p class="body-map__chips-title">"Selected points:"</p>
                    {move || {
                        composer
                            .with(|c| c.body_map.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, point)| {
                                view! {
                                    <button
                                        class="body-part-chip"
                                        on:click=move |_| composer.update(|c| c.remove_body_point(index))
                                    >
                                        {format!("{} ×", point.body_part.as_str())}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
