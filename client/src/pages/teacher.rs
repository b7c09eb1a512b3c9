//! Teacher dashboard — review reports, change status, write notes, request
//! AI recommendations, inspect per-student trends, export documents.
//!
//! The report collection refreshes on a fixed interval while the page is
//! mounted; the interval is unconditionally cancelled on unmount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use uuid::Uuid;

use reports::{Recommendation, Report, ReportStatus};

use crate::components::recommendation_panel::RecommendationPanel;
use crate::state::auth::AuthState;
use crate::state::dashboard::{
    DashboardState, DashboardView, StatusFilter, analyze_student_reports, reports_for_student, students_from_reports,
};
use crate::util::format::format_timestamp;

/// Dashboard refresh cadence while mounted.
#[cfg(feature = "csr")]
const REFRESH_INTERVAL_MS: u32 = 30_000;

/// Reload the report collection; only display state changes on completion.
fn load_reports(dashboard: RwSignal<DashboardState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        dashboard.update(|d| d.loading = true);
        match crate::net::api::fetch_reports().await {
            Ok(reports) => dashboard.update(|d| {
                d.reports = reports;
                d.loading = false;
                d.load_error = None;
            }),
            Err(e) => dashboard.update(|d| {
                d.loading = false;
                d.load_error = Some(e.to_string());
            }),
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = dashboard;
    }
}

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login once the session probe resolves unauthenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let dashboard = RwSignal::new(DashboardState::default());
    load_reports(dashboard);

    #[cfg(feature = "csr")]
    {
        let interval =
            gloo_timers::callback::Interval::new(REFRESH_INTERVAL_MS, move || load_reports(dashboard));
        on_cleanup(move || drop(interval));
    }

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.set(AuthState::signed_out());
        });
    };

    view! {
        <div class="teacher-dashboard">
            <header class="dashboard-header">
                <div class="dashboard-header__top">
                    <div>
                        <h1 class="dashboard-title">"Teacher Dashboard"</h1>
                        {move || {
                            auth.with(|a| a.user.clone())
                                .map(|user| view! { <p class="dashboard-teacher">{format!("Teacher: {}", user.name)}</p> })
                        }}
                    </div>
                    <div class="dashboard-header__actions">
                        <a class="btn" href="/">
                            "Home"
                        </a>
                        <button class="btn" on:click=on_logout>
                            "Sign out"
                        </button>
                    </div>
                </div>
                <div class="dashboard-header__subtitle">
                    <p>
                        {move || {
                            dashboard
                                .with(|d| {
                                    format!(
                                        "{} total report(s) • {} pending",
                                        d.count_for(StatusFilter::All),
                                        d.count_for(StatusFilter::Only(ReportStatus::Pending)),
                                    )
                                })
                        }}
                    </p>
                    <div class="view-toggle">
                        <button
                            class="btn"
                            class=("btn--primary", move || dashboard.with(|d| d.view == DashboardView::Reports))
                            on:click=move |_| {
                                dashboard
                                    .update(|d| {
                                        d.view = DashboardView::Reports;
                                        d.selected_student = None;
                                    })
                            }
                        >
                            "Reports"
                        </button>
                        <button
                            class="btn"
                            class=("btn--primary", move || dashboard.with(|d| d.view == DashboardView::Students))
                            on:click=move |_| {
                                dashboard
                                    .update(|d| {
                                        d.view = DashboardView::Students;
                                        d.selected = None;
                                    })
                            }
                        >
                            "Students"
                        </button>
                    </div>
                </div>
            </header>

            {move || {
                dashboard
                    .with(|d| d.load_error.clone())
                    .map(|err| view! { <p class="load-error">{format!("Could not refresh reports: {err}")}</p> })
            }}

            {move || match dashboard.with(|d| d.view) {
                DashboardView::Reports => view! { <ReportsView dashboard=dashboard/> }.into_any(),
                DashboardView::Students => view! { <StudentsView dashboard=dashboard/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================================
// REPORTS VIEW
// =============================================================================

#[component]
fn ReportsView(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="dashboard-content">
            <div class="reports-list">
                <div class="filters">
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|filter| {
                            view! {
                                <button
                                    class="filter-chip"
                                    class:active=move || dashboard.with(|d| d.filter == filter)
                                    on:click=move |_| dashboard.update(|d| d.filter = filter)
                                >
                                    {move || {
                                        dashboard.with(|d| format!("{} ({})", filter.label(), d.count_for(filter)))
                                    }}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="reports-grid">
                    {move || {
                        let (filtered, initial_load): (Vec<Report>, bool) = dashboard
                            .with(|d| {
                                (
                                    d.filtered().into_iter().cloned().collect(),
                                    d.loading && d.reports.is_empty(),
                                )
                            });
                        if initial_load {
                            view! { <p class="loading">"Loading reports..."</p> }.into_any()
                        } else if filtered.is_empty() {
                            view! { <p class="empty-state">"No reports to display"</p> }.into_any()
                        } else {
                            filtered
                                .into_iter()
                                .map(|report| view! { <ReportCard dashboard=dashboard report=report/> })
                                .collect::<Vec<_>>()
                                .into_any()
                        }
                    }}
                </div>
            </div>

            {move || {
                dashboard
                    .with(|d| d.selected_report().cloned())
                    .map(|report| view! { <ReportDetail dashboard=dashboard report=report/> })
            }}
        </div>
    }
}

#[component]
fn ReportCard(dashboard: RwSignal<DashboardState>, report: Report) -> impl IntoView {
    let id = report.id;
    let preview: Vec<String> = report.symbols.iter().take(3).map(|s| s.label.clone()).collect();
    let more = report.symbols.len().saturating_sub(3);

    view! {
        <div
            class="report-card"
            class:selected=move || dashboard.with(|d| d.selected == Some(id))
            on:click=move |_| dashboard.update(|d| d.selected = Some(id))
        >
            <div class="report-card__header">
                <span class="report-card__student">{report.student_name.clone()}</span>
                <span class="report-card__date">{format_timestamp(report.timestamp)}</span>
                <span class=format!("status-badge status-badge--{}", report.status.as_str())>
                    {report.status.label()}
                </span>
            </div>
            <div class="report-card__preview">
                {preview
                    .into_iter()
                    .map(|label| view! { <span class="symbol-tag">{label}</span> })
                    .collect::<Vec<_>>()}
                {(more > 0).then(|| view! { <span class="symbol-tag">{format!("+{more}")}</span> })}
                <span class="report-card__location">
                    {format!("{} {}", report.location.icon, report.location.name)}
                </span>
                <span class=format!("emotion-badge emotion-badge--{}", report.emotion.level)>
                    {format!("Level {}", report.emotion.level)}
                </span>
            </div>
        </div>
    }
}

// =============================================================================
// REPORT DETAIL
// =============================================================================

#[component]
fn ReportDetail(dashboard: RwSignal<DashboardState>, report: Report) -> impl IntoView {
    let id = report.id;
    let notes = RwSignal::new(report.teacher_notes.clone().unwrap_or_default());
    let notes_saved = RwSignal::new(false);

    let set_status = move |status: ReportStatus| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if crate::net::api::update_report_status(id, status).await.is_ok() {
                load_reports(dashboard);
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = status;
        }
    };

    let save_notes = move |_| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if crate::net::api::update_report_notes(id, &notes.get_untracked()).await.is_ok() {
                notes_saved.set(true);
                load_reports(dashboard);
            }
        });
    };

    let current_status = report.status;
    let export_href = format!("/api/reports/{id}/export.md");

    view! {
        <div class="report-detail">
            <div class="report-detail__header">
                <h2>"Report Details"</h2>
                <div class="report-detail__header-actions">
                    <a class="btn" href=export_href target="_blank">
                        "Export document"
                    </a>
                    <button class="close-btn" on:click=move |_| dashboard.update(|d| d.selected = None)>
                        "×"
                    </button>
                </div>
            </div>

            <div class="detail-section">
                <h3>"Student"</h3>
                <p>{format!("{} (id: {})", report.student_name, report.student_id)}</p>
                <p class="detail-muted">{format!("Reported on {}", format_timestamp(report.timestamp))}</p>
            </div>

            <div class="detail-section">
                <h3>"Incident Type"</h3>
                <div class="symbols-list">
                    {report
                        .symbols
                        .iter()
                        .map(|symbol| {
                            view! {
                                <div class="symbol-item">
                                    <span class="symbol-item__category">{symbol.category.as_str()}</span>
                                    <span class="symbol-item__label">{symbol.label.clone()}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            {(!report.body_map.is_empty())
                .then(|| {
                    view! {
                        <div class="detail-section">
                            <h3>"Physical Harassment"</h3>
                            <div class="body-parts-list">
                                {report
                                    .body_map
                                    .iter()
                                    .map(|point| {
                                        view! { <span class="body-part-tag">{point.body_part.as_str()}</span> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                })}

            <div class="detail-section">
                <h3>"Circumstances"</h3>
                <p>{format!("{} {} — {}", report.location.icon, report.location.name, report.frequency.label())}</p>
                <p>{format!("Emotion: level {}/5 ({})", report.emotion.level, report.emotion.label())}</p>
                <p>{format!("Safety: level {}/5 ({})", report.safety.level, report.safety.label())}</p>
            </div>

            <div class="detail-section">
                <h3>"Status"</h3>
                <div class="status-actions">
                    {ReportStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <button
                                    class="btn"
                                    class=("btn--primary", move || current_status == status)
                                    on:click=move |_| set_status(status)
                                >
                                    {status.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <RecommendationSection report_id=id/>

            <div class="detail-section">
                <h3>"Teacher Notes"</h3>
                <textarea
                    class="notes-textarea"
                    rows="4"
                    placeholder="Add your notes here..."
                    prop:value=move || notes.get()
                    on:input=move |ev| {
                        notes.set(event_target_value(&ev));
                        notes_saved.set(false);
                    }
                ></textarea>
                <button class="btn btn--primary" disabled=move || notes_saved.get() on:click=save_notes>
                    {move || if notes_saved.get() { "✓ Saved" } else { "Save Notes" }}
                </button>
            </div>
        </div>
    }
}

// =============================================================================
// RECOMMENDATIONS
// =============================================================================

#[component]
fn RecommendationSection(report_id: Uuid) -> impl IntoView {
    let recommendation = RwSignal::new(Option::<Recommendation>::None);
    let generating = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    // Show the stored recommendation if one was generated earlier.
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Ok(Some(stored)) = crate::net::api::fetch_recommendations(report_id).await {
            recommendation.set(Some(stored));
        }
    });

    let generate = move |_| {
        if generating.get_untracked() {
            return;
        }
        generating.set(true);
        error.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_recommendations(report_id).await {
                Ok(rec) => recommendation.set(Some(rec)),
                Err(e) => error.set(Some(e.to_string())),
            }
            generating.set(false);
        });
        #[cfg(not(feature = "csr"))]
        generating.set(false);
    };

    view! {
        <div class="detail-section">
            <h3>"AI Recommendations"</h3>

            {move || error.get().map(|msg| view! { <p class="load-error">{format!("Generation failed: {msg}")}</p> })}

            {move || match recommendation.get() {
                Some(rec) => view! {
                    <div class="recommendation-block">
                        <RecommendationPanel recommendation=rec/>
                        <div class="recommendation-actions">
                            <button class="btn" disabled=move || generating.get() on:click=generate>
                                {move || if generating.get() { "Regenerating..." } else { "Regenerate" }}
                            </button>
                            <button class="btn" on:click=move |_| recommendation.set(None)>
                                "Hide"
                            </button>
                        </div>
                    </div>
                }
                    .into_any(),
                None => view! {
                    <div class="recommendation-block">
                        <p class="detail-muted">"Generate actionable recommendations based on this report."</p>
                        <button class="btn btn--primary" disabled=move || generating.get() on:click=generate>
                            {move || if generating.get() { "Generating..." } else { "✨ Generate Recommendations" }}
                        </button>
                    </div>
                }
                    .into_any(),
            }}
        </div>
    }
}

// =============================================================================
// STUDENTS VIEW
// =============================================================================

#[component]
fn StudentsView(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    move || {
        match dashboard.with(|d| d.selected_student.clone()) {
            Some(name) => view! { <StudentDetail dashboard=dashboard name=name/> }.into_any(),
            None => view! { <StudentList dashboard=dashboard/> }.into_any(),
        }
    }
}

#[component]
fn StudentList(dashboard: RwSignal<DashboardState>) -> impl IntoView {
    view! {
        <div class="students-view">
            <div class="students-view__header">
                <h2>"All Students"</h2>
                <input
                    class="students-view__search"
                    type="text"
                    placeholder="Search by name..."
                    prop:value=move || dashboard.with(|d| d.student_search.clone())
                    on:input=move |ev| dashboard.update(|d| d.student_search = event_target_value(&ev))
                />
            </div>

            <div class="students-grid">
                {move || {
                    let (students, search) = dashboard
                        .with(|d| (students_from_reports(&d.reports), d.student_search.to_lowercase()));
                    let filtered: Vec<_> = students
                        .into_iter()
                        .filter(|s| search.is_empty() || s.name.to_lowercase().contains(&search))
                        .collect();
                    if filtered.is_empty() {
                        view! { <p class="empty-state">"No students found."</p> }.into_any()
                    } else {
                        filtered
                            .into_iter()
                            .map(|student| {
                                let name = student.name.clone();
                                view! {
                                    <div
                                        class="student-card"
                                        on:click=move |_| {
                                            let selected = name.clone();
                                            dashboard.update(|d| d.selected_student = Some(selected));
                                        }
                                    >
                                        <span class="student-card__name">{student.name.clone()}</span>
                                        <span class="student-card__stats">
                                            {format!(
                                                "{} report(s) • {} pending • {} resolved",
                                                student.report_count,
                                                student.pending_count,
                                                student.resolved_count,
                                            )}
                                        </span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn StudentDetail(dashboard: RwSignal<DashboardState>, name: String) -> impl IntoView {
    let display_name = name.clone();

    view! {
        <div class="student-detail">
            <div class="student-detail__header">
                <button class="btn" on:click=move |_| dashboard.update(|d| d.selected_student = None)>
                    "← Back to Students"
                </button>
                <h2>{display_name}</h2>
            </div>

            {
                let name = name.clone();
                move || {
                    let student_reports: Vec<Report> = dashboard
                        .with(|d| reports_for_student(&d.reports, &name).into_iter().cloned().collect());
                    match analyze_student_reports(&student_reports) {
                        Some(analysis) => view! { <AnalysisPanel analysis=analysis/> }.into_any(),
                        None => view! { <p class="empty-state">"No reports found for this student."</p> }.into_any(),
                    }
                }
            }

            <div class="student-reports">
                <h3>
                    {
                        let name = name.clone();
                        move || {
                            dashboard
                                .with(|d| {
                                    format!("All Reports ({})", reports_for_student(&d.reports, &name).len())
                                })
                        }
                    }
                </h3>
                {
                    let name = name.clone();
                    move || {
                        let mut rows: Vec<Report> = dashboard
                            .with(|d| reports_for_student(&d.reports, &name).into_iter().cloned().collect());
                        rows.reverse();
                        rows.into_iter()
                            .map(|report| {
                                view! {
                                    <div class="student-report-row">
                                        <span class="report-card__date">{format_timestamp(report.timestamp)}</span>
                                        <span class=format!("status-badge status-badge--{}", report.status.as_str())>
                                            {report.status.label()}
                                        </span>
                                        <span>
                                            {report
                                                .symbols
                                                .iter()
                                                .map(|s| s.category.as_str())
                                                .collect::<Vec<_>>()
                                                .join(", ")}
                                        </span>
                                        <span>{format!("Safety {}/5", report.safety.level)}</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }
                }
            </div>
        </div>
    }
}

#[component]
fn AnalysisPanel(analysis: crate::state::dashboard::StudentAnalysis) -> impl IntoView {
    let trend_class = if analysis.trend.has_recurring {
        "trend-alert trend-alert--critical"
    } else if analysis.trend.is_worsening {
        "trend-alert trend-alert--warning"
    } else {
        "trend-alert trend-alert--info"
    };
    let trend_icon = if analysis.trend.has_recurring {
        "⚠️"
    } else if analysis.trend.is_worsening {
        "📉"
    } else {
        "📈"
    };

    view! {
        <div class="analysis-section">
            <h3>"Long-term Analysis"</h3>

            <div class=trend_class>
                <span class="trend-alert__icon">{trend_icon}</span>
                <p class="trend-alert__text">{analysis.trend.recommendation.clone()}</p>
            </div>

            <div class="analysis-grid">
                <div class="analysis-card">
                    <h4>"Overview"</h4>
                    <p>{format!("Total reports: {}", analysis.total_reports)}</p>
                    <p>{format!("First report: {}", format_timestamp(analysis.first_report))}</p>
                    <p>{format!("Last report: {}", format_timestamp(analysis.last_report))}</p>
                </div>
                <div class="analysis-card">
                    <h4>"Average Levels"</h4>
                    <p>{format!("Emotion: {}/5", analysis.average_emotion_level)}</p>
                    <p>{format!("Safety: {}/5", analysis.average_safety_level)}</p>
                </div>
                <div class="analysis-card">
                    <h4>"Most Common Categories"</h4>
                    {analysis
                        .category_counts
                        .iter()
                        .take(3)
                        .map(|c| view! { <p>{format!("{}: {}×", c.category.as_str(), c.count)}</p> })
                        .collect::<Vec<_>>()}
                </div>
                <div class="analysis-card">
                    <h4>"Frequency Pattern"</h4>
                    <p>{format!("Once: {}", analysis.frequency_pattern.once)}</p>
                    <p>{format!("Sometimes: {}", analysis.frequency_pattern.sometimes)}</p>
                    <p>{format!("Often: {}", analysis.frequency_pattern.often)}</p>
                    <p>{format!("Always: {}", analysis.frequency_pattern.always)}</p>
                </div>
            </div>

            {(!analysis.recurring_categories.is_empty())
                .then(|| {
                    view! {
                        <div class="recurring-issues">
                            <h4>"⚠️ Recurring Issues Detected"</h4>
                            <ul>
                                {analysis
                                    .recurring_categories
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <li>{format!("Repeated {} incidents across multiple reports", c.as_str())}</li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })}
        </div>
    }
}
