#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use reports::{Frequency, Report, ReportStatus, SymbolCategory};

/// A student's reports must repeat a category this many times before it
/// counts as recurring. Policy threshold, tunable.
pub const RECURRING_THRESHOLD: usize = 3;

/// Minimum rise of the later-half mean safety level over the earlier-half
/// mean before the trend counts as worsening. Policy threshold, tunable.
pub const WORSENING_DELTA: f64 = 1.0;

// =============================================================================
// DASHBOARD STATE
// =============================================================================

/// Status filter for the reports list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ReportStatus),
}

impl StatusFilter {
    /// All filter chips in display order.
    pub const ALL: [Self; 4] = [
        Self::All,
        Self::Only(ReportStatus::Pending),
        Self::Only(ReportStatus::Reviewed),
        Self::Only(ReportStatus::Resolved),
    ];

    #[must_use]
    pub fn matches(self, status: ReportStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => status == wanted,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(status) => status.label(),
        }
    }
}

/// Which side of the dashboard is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DashboardView {
    #[default]
    Reports,
    Students,
}

/// Teacher-dashboard state: the loaded collection plus review UI selections.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub reports: Vec<Report>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub filter: StatusFilter,
    pub view: DashboardView,
    pub selected: Option<Uuid>,
    pub selected_student: Option<String>,
    pub student_search: String,
}

impl DashboardState {
    /// Reports passing the active filter, original order preserved.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Report> {
        self.reports
            .iter()
            .filter(|r| self.filter.matches(r.status))
            .collect()
    }

    /// Number of reports a filter chip would show.
    #[must_use]
    pub fn count_for(&self, filter: StatusFilter) -> usize {
        self.reports
            .iter()
            .filter(|r| filter.matches(r.status))
            .count()
    }

    #[must_use]
    pub fn selected_report(&self) -> Option<&Report> {
        let id = self.selected?;
        self.reports.iter().find(|r| r.id == id)
    }
}

// =============================================================================
// STUDENT GROUPING
// =============================================================================

/// Grouping key for one student. Ids are per-submission opaque values, so
/// the dashboard groups by normalized name.
#[must_use]
pub fn student_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One row in the students view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentSummary {
    pub name: String,
    pub report_count: usize,
    pub pending_count: usize,
    pub resolved_count: usize,
}

/// Group the collection into per-student summaries, sorted by name.
#[must_use]
pub fn students_from_reports(reports: &[Report]) -> Vec<StudentSummary> {
    fn bump(summary: &mut StudentSummary, status: ReportStatus) {
        summary.report_count += 1;
        match status {
            ReportStatus::Pending => summary.pending_count += 1,
            ReportStatus::Resolved => summary.resolved_count += 1,
            ReportStatus::Reviewed => {}
        }
    }

    let mut summaries: Vec<StudentSummary> = Vec::new();
    for report in reports {
        let key = student_key(&report.student_name);
        if let Some(existing) = summaries.iter_mut().find(|s| student_key(&s.name) == key) {
            bump(existing, report.status);
            continue;
        }
        let mut summary = StudentSummary {
            name: report.student_name.trim().to_owned(),
            report_count: 0,
            pending_count: 0,
            resolved_count: 0,
        };
        bump(&mut summary, report.status);
        summaries.push(summary);
    }
    summaries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    summaries
}

/// One student's reports in chronological order (oldest first).
#[must_use]
pub fn reports_for_student<'a>(reports: &'a [Report], name: &str) -> Vec<&'a Report> {
    let key = student_key(name);
    let mut selected: Vec<&Report> = reports
        .iter()
        .filter(|r| student_key(&r.student_name) == key)
        .collect();
    selected.sort_by_key(|r| r.timestamp);
    selected
}

// =============================================================================
// TREND ANALYSIS
// =============================================================================

/// Reports per symbol category, most frequent first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: SymbolCategory,
    pub count: usize,
}

/// Frequency-bucket counts across one student's reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrequencyPattern {
    pub once: usize,
    pub sometimes: usize,
    pub often: usize,
    pub always: usize,
}

/// Qualitative judgment over the chronological report list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendJudgment {
    pub is_worsening: bool,
    pub has_recurring: bool,
    pub recommendation: String,
}

/// Derived statistics for one student.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentAnalysis {
    pub total_reports: usize,
    pub first_report: DateTime<Utc>,
    pub last_report: DateTime<Utc>,
    pub average_emotion_level: f64,
    pub average_safety_level: f64,
    pub category_counts: Vec<CategoryCount>,
    pub frequency_pattern: FrequencyPattern,
    pub recurring_categories: Vec<SymbolCategory>,
    pub trend: TrendJudgment,
}

/// Derive trend statistics from one student's reports. Pure: the input is
/// re-sorted chronologically internally and nothing is mutated.
///
/// Returns `None` for an empty list.
#[must_use]
pub fn analyze_student_reports(reports: &[Report]) -> Option<StudentAnalysis> {
    if reports.is_empty() {
        return None;
    }

    let mut ordered: Vec<&Report> = reports.iter().collect();
    ordered.sort_by_key(|r| r.timestamp);

    let total = ordered.len();
    let first_report = ordered.first()?.timestamp;
    let last_report = ordered.last()?.timestamp;

    let average_emotion_level = round1(mean(ordered.iter().map(|r| f64::from(r.emotion.level))));
    let average_safety_level = round1(mean(ordered.iter().map(|r| f64::from(r.safety.level))));

    // Count reports per category (a category counts once per report no
    // matter how many of its symbols were picked).
    let mut category_counts: Vec<CategoryCount> = SymbolCategory::ALL
        .iter()
        .map(|&category| CategoryCount {
            category,
            count: ordered
                .iter()
                .filter(|r| r.symbols.iter().any(|s| s.category == category))
                .count(),
        })
        .filter(|c| c.count > 0)
        .collect();
    category_counts.sort_by(|a, b| b.count.cmp(&a.count));

    let recurring_categories: Vec<SymbolCategory> = category_counts
        .iter()
        .filter(|c| c.count >= RECURRING_THRESHOLD)
        .map(|c| c.category)
        .collect();

    let mut frequency_pattern = FrequencyPattern::default();
    for report in &ordered {
        match report.frequency {
            Frequency::Once => frequency_pattern.once += 1,
            Frequency::Sometimes => frequency_pattern.sometimes += 1,
            Frequency::Often => frequency_pattern.often += 1,
            Frequency::Always => frequency_pattern.always += 1,
        }
    }

    let is_worsening = safety_is_worsening(&ordered);
    let has_recurring = !recurring_categories.is_empty();
    let trend = TrendJudgment {
        is_worsening,
        has_recurring,
        recommendation: trend_recommendation(is_worsening, &recurring_categories, total),
    };

    Some(StudentAnalysis {
        total_reports: total,
        first_report,
        last_report,
        average_emotion_level,
        average_safety_level,
        category_counts,
        frequency_pattern,
        recurring_categories,
        trend,
    })
}

/// Split the chronological list in half and compare mean safety levels.
/// Higher is less safe, so a later-half rise of at least [`WORSENING_DELTA`]
/// counts as worsening.
fn safety_is_worsening(ordered: &[&Report]) -> bool {
    if ordered.len() < 2 {
        return false;
    }
    let mid = ordered.len() / 2;
    let earlier = mean(ordered[..mid].iter().map(|r| f64::from(r.safety.level)));
    let later = mean(ordered[mid..].iter().map(|r| f64::from(r.safety.level)));
    later - earlier >= WORSENING_DELTA
}

fn trend_recommendation(is_worsening: bool, recurring: &[SymbolCategory], total: usize) -> String {
    if !recurring.is_empty() {
        let names: Vec<&str> = recurring.iter().map(|c| c.as_str()).collect();
        return format!(
            "Recurring {} issues across {total} reports — a coordinated intervention is recommended.",
            names.join(" and ")
        );
    }
    if is_worsening {
        return "Safety levels are worsening over time — increase monitoring and check in with the student soon."
            .to_owned();
    }
    "No worsening trend detected — continue regular monitoring.".to_owned()
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut count = 0_usize;
    for value in values {
        sum += value;
        count += 1;
    }
    if count == 0 { 0.0 } else { sum / count as f64 }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
