#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use reports::{
    BodyMapPoint, EmotionRating, Frequency, Location, ReportDraft, SafetyRating, Symbol, has_physical_symbols,
};
use uuid::Uuid;

/// First wizard step (identity).
pub const FIRST_STEP: u8 = 1;
/// Last wizard step (safety, plus body map for physical incidents).
pub const LAST_STEP: u8 = 6;

/// Who the report is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportMode {
    /// The reporter describes what happened to them.
    Myself,
    /// A bystander reports for another student.
    SomeoneElse,
}

/// The report composer: a step-indexed wizard accumulating the widget
/// selections into one draft.
///
/// The composer is the sole writer of the merged draft. Widgets receive the
/// composer signal and call the mutators below; none of them alias any of
/// this state. `reset` is the one supported way to discard a draft.
///
/// Steps: 1 identity → 2 symbols → 3 emotion → 4 location → 5 frequency →
/// 6 safety (+ body map when a physical symbol is selected).
#[derive(Clone, Debug)]
pub struct ReportComposer {
    pub mode: ReportMode,
    pub step: u8,
    pub student_name: String,
    pub symbols: Vec<Symbol>,
    pub body_map: Vec<BodyMapPoint>,
    pub emotion: Option<EmotionRating>,
    pub location: Option<Location>,
    pub frequency: Option<Frequency>,
    pub safety: Option<SafetyRating>,
    pub submitting: bool,
    pub submit_error: Option<String>,
    pub submitted: bool,
}

impl ReportComposer {
    #[must_use]
    pub fn new(mode: ReportMode) -> Self {
        Self {
            mode,
            step: FIRST_STEP,
            student_name: String::new(),
            symbols: Vec::new(),
            body_map: Vec::new(),
            emotion: None,
            location: None,
            frequency: None,
            safety: None,
            submitting: false,
            submit_error: None,
            submitted: false,
        }
    }

    // =========================================================================
    // STEP GATING
    // =========================================================================

    /// Completion predicate for the current step.
    #[must_use]
    pub fn can_proceed(&self) -> bool {
        match self.step {
            1 => !self.student_name.trim().is_empty(),
            2 => !self.symbols.is_empty(),
            3 => self.emotion.is_some(),
            4 => self.location.is_some(),
            5 => self.frequency.is_some(),
            6 => self.safety.is_some(),
            _ => false,
        }
    }

    /// Advance one step. No-op when gated or already on the last step.
    pub fn next(&mut self) {
        if self.step < LAST_STEP && self.can_proceed() {
            self.step += 1;
        }
    }

    /// Go back one step. Always enabled except on step 1.
    pub fn previous(&mut self) {
        if self.step > FIRST_STEP {
            self.step -= 1;
        }
    }

    /// All step predicates hold simultaneously — the submit gate.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.student_name.trim().is_empty()
            && !self.symbols.is_empty()
            && self.emotion.is_some()
            && self.location.is_some()
            && self.frequency.is_some()
            && self.safety.is_some()
    }

    // =========================================================================
    // WIDGET MUTATORS
    // =========================================================================

    pub fn set_student_name(&mut self, name: String) {
        self.student_name = name;
    }

    /// Toggle a symbol in the selection set (membership keyed by id).
    pub fn toggle_symbol(&mut self, symbol: Symbol) {
        if let Some(index) = self.symbols.iter().position(|s| s.id == symbol.id) {
            self.symbols.remove(index);
        } else {
            self.symbols.push(symbol);
        }
    }

    #[must_use]
    pub fn is_symbol_selected(&self, id: &str) -> bool {
        self.symbols.iter().any(|s| s.id == id)
    }

    /// Whether the body map applies: some selected symbol is physical.
    #[must_use]
    pub fn requires_body_map(&self) -> bool {
        has_physical_symbols(&self.symbols)
    }

    /// Append a body-map point; the body part is derived from `y`.
    pub fn add_body_point(&mut self, x: f64, y: f64) {
        self.body_map.push(BodyMapPoint::new(x, y));
    }

    /// Remove exactly one point by index, preserving the order of the rest.
    pub fn remove_body_point(&mut self, index: usize) {
        if index < self.body_map.len() {
            self.body_map.remove(index);
        }
    }

    pub fn set_emotion(&mut self, level: u8) {
        self.emotion = Some(EmotionRating::new(level));
    }

    pub fn set_location(&mut self, location: Location) {
        self.location = Some(location);
    }

    pub fn set_frequency(&mut self, frequency: Frequency) {
        self.frequency = Some(frequency);
    }

    pub fn set_safety(&mut self, level: u8) {
        self.safety = Some(SafetyRating::new(level));
    }

    // =========================================================================
    // SUBMISSION
    // =========================================================================

    /// Package the draft for submission. `None` while any step is incomplete.
    ///
    /// Each submission gets a fresh opaque student id; the dashboard groups
    /// by student name, so the id only needs to be unique.
    #[must_use]
    pub fn build_draft(&self) -> Option<ReportDraft> {
        if !self.is_complete() {
            return None;
        }
        Some(ReportDraft {
            student_id: format!("student-{}", Uuid::new_v4()),
            student_name: self.student_name.trim().to_owned(),
            symbols: self.symbols.clone(),
            body_map: self.body_map.clone(),
            emotion: self.emotion?,
            location: self.location.clone()?,
            frequency: self.frequency?,
            safety: self.safety?,
        })
    }

    /// Mark the submission in flight and clear any previous error.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.submit_error = None;
    }

    /// Submission failed: surface the message and keep the draft intact so
    /// the user can resubmit.
    pub fn submit_failed(&mut self, message: String) {
        self.submitting = false;
        self.submit_error = Some(message);
    }

    /// Submission succeeded: show the confirmation screen. The draft is
    /// cleared by the delayed [`ReportComposer::reset`].
    pub fn submit_succeeded(&mut self) {
        self.submitting = false;
        self.submit_error = None;
        self.submitted = true;
    }

    /// Explicit reset back to step 1 with an empty draft.
    pub fn reset(&mut self) {
        *self = Self::new(self.mode);
    }
}
