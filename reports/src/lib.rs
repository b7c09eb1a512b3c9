//! Shared report model for the incident-reporting platform.
//!
//! This crate owns the record types used by both `server` and `client`:
//! symbol and location catalogs, the selection widgets' value types, the
//! body-part classifier, draft validation, the finalized [`Report`], and the
//! AI [`Recommendation`] record. Wire format is camelCase JSON to stay
//! compatible with the original web API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// SYMBOLS
// =============================================================================

/// Incident category a symbol belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolCategory {
    Physical,
    Verbal,
    Social,
    Cyber,
}

impl SymbolCategory {
    /// All categories in catalog display order.
    pub const ALL: [Self; 4] = [Self::Physical, Self::Verbal, Self::Social, Self::Cyber];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Physical => "physical",
            Self::Verbal => "verbal",
            Self::Social => "social",
            Self::Cyber => "cyber",
        }
    }
}

/// A pictographic incident tag. The catalog entry and the selection stored on
/// a report share this shape; selection-set membership is keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: String,
    pub label: String,
    pub category: SymbolCategory,
}

/// Whether any selected symbol is in the physical category. The body map is
/// only meaningful when this holds.
#[must_use]
pub fn has_physical_symbols(symbols: &[Symbol]) -> bool {
    symbols
        .iter()
        .any(|s| s.category == SymbolCategory::Physical)
}

// =============================================================================
// BODY MAP
// =============================================================================

/// Body region derived from a normalized vertical coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyPart {
    Head,
    Neck,
    Chest,
    Stomach,
    Arms,
    Legs,
    Feet,
}

impl BodyPart {
    /// Classify a normalized vertical coordinate (percent of silhouette
    /// height) into a body region. Bands are half-open and non-overlapping:
    /// y<15 head, 15–25 neck, 25–40 chest, 40–55 stomach, 55–70 arms,
    /// 70–85 legs, ≥85 feet.
    #[must_use]
    pub fn from_y(y: f64) -> Self {
        if y < 15.0 {
            Self::Head
        } else if y < 25.0 {
            Self::Neck
        } else if y < 40.0 {
            Self::Chest
        } else if y < 55.0 {
            Self::Stomach
        } else if y < 70.0 {
            Self::Arms
        } else if y < 85.0 {
            Self::Legs
        } else {
            Self::Feet
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Neck => "neck",
            Self::Chest => "chest",
            Self::Stomach => "stomach",
            Self::Arms => "arms",
            Self::Legs => "legs",
            Self::Feet => "feet",
        }
    }
}

/// One click on the body silhouette: percentage coordinates plus the derived
/// region. Points form an ordered sequence (click order) and are removable by
/// index.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyMapPoint {
    pub x: f64,
    pub y: f64,
    pub body_part: BodyPart,
}

impl BodyMapPoint {
    /// Build a point from raw coordinates, deriving the body part from `y`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, body_part: BodyPart::from_y(y) }
    }
}

// =============================================================================
// EMOTION SCALE
// =============================================================================

/// Display color derived from an emotion level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmotionColor {
    Green,
    Yellow,
    Orange,
    Red,
    DarkRed,
}

/// How the student feels, on a 1 (very good) to 5 (very bad) scale.
/// The color is always derived from the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionRating {
    pub level: u8,
    pub color: EmotionColor,
}

impl EmotionRating {
    /// Build a rating from a level, clamping into 1..=5 and deriving the
    /// color.
    #[must_use]
    pub fn new(level: u8) -> Self {
        let level = level.clamp(1, 5);
        let color = match level {
            1 => EmotionColor::Green,
            2 => EmotionColor::Yellow,
            3 => EmotionColor::Orange,
            4 => EmotionColor::Red,
            _ => EmotionColor::DarkRed,
        };
        Self { level, color }
    }

    /// Human label for the level (widget and export copy).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.level {
            1 => "Very Good",
            2 => "Good",
            3 => "Neutral",
            4 => "Bad",
            _ => "Very Bad",
        }
    }
}

// =============================================================================
// SAFETY THERMOMETER
// =============================================================================

/// Feeling derived from a safety level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyFeeling {
    VerySafe,
    Safe,
    Neutral,
    Unsafe,
    VeryUnsafe,
}

/// How safe the student feels, on a 1 (very safe) to 5 (very unsafe) scale.
/// Higher is worse. The feeling is always derived from the level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyRating {
    pub level: u8,
    pub feeling: SafetyFeeling,
}

impl SafetyRating {
    /// Build a rating from a level, clamping into 1..=5 and deriving the
    /// feeling.
    #[must_use]
    pub fn new(level: u8) -> Self {
        let level = level.clamp(1, 5);
        let feeling = match level {
            1 => SafetyFeeling::VerySafe,
            2 => SafetyFeeling::Safe,
            3 => SafetyFeeling::Neutral,
            4 => SafetyFeeling::Unsafe,
            _ => SafetyFeeling::VeryUnsafe,
        };
        Self { level, feeling }
    }

    /// Human label for the level (widget and export copy).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.level {
            1 => "Very Safe",
            2 => "Safe",
            3 => "Neutral",
            4 => "Unsafe",
            _ => "Very Unsafe",
        }
    }
}

// =============================================================================
// LOCATION AND FREQUENCY
// =============================================================================

/// Where the incident happened, chosen from a fixed catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub icon: String,
}

/// How often the incident happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Once,
    Sometimes,
    Often,
    Always,
}

impl Frequency {
    /// All frequencies in ascending order.
    pub const ALL: [Self; 4] = [Self::Once, Self::Sometimes, Self::Often, Self::Always];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Sometimes => "sometimes",
            Self::Often => "often",
            Self::Always => "always",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "once" => Some(Self::Once),
            "sometimes" => Some(Self::Sometimes),
            "often" => Some(Self::Often),
            "always" => Some(Self::Always),
            _ => None,
        }
    }

    /// Human label (widget and export copy).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Once => "Once",
            Self::Sometimes => "Sometimes",
            Self::Often => "Often",
            Self::Always => "Always",
        }
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// Review status of a submitted report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Reviewed,
    Resolved,
}

impl ReportStatus {
    /// All statuses in review-lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Reviewed, Self::Resolved];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "reviewed" => Some(Self::Reviewed),
            "resolved" => Some(Self::Resolved),
            _ => None,
        }
    }

    /// Human label (dashboard badges).
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Reviewed => "Reviewed",
            Self::Resolved => "Resolved",
        }
    }
}

/// Validation failure for a submitted draft.
#[derive(Debug, thiserror::Error)]
pub enum DraftError {
    #[error("at least one symbol must be selected")]
    EmptySymbols,
    #[error("student name must not be blank")]
    BlankName,
    #[error("body map point {index} is outside the 0..=100 range")]
    PointOutOfRange { index: usize },
    #[error("{field} level {level} is outside the 1..=5 range")]
    LevelOutOfRange { field: &'static str, level: u8 },
}

/// The in-progress report payload the composer submits. All singleton fields
/// are present by construction; [`ReportDraft::validate`] re-checks the
/// invariants for payloads arriving over the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    pub student_id: String,
    pub student_name: String,
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub body_map: Vec<BodyMapPoint>,
    pub emotion: EmotionRating,
    pub location: Location,
    pub frequency: Frequency,
    pub safety: SafetyRating,
}

impl ReportDraft {
    /// Check the submittability invariant: non-empty symbol set, non-blank
    /// name, in-range levels and coordinates.
    ///
    /// # Errors
    ///
    /// Returns the first violated [`DraftError`].
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.symbols.is_empty() {
            return Err(DraftError::EmptySymbols);
        }
        if self.student_name.trim().is_empty() {
            return Err(DraftError::BlankName);
        }
        for (index, point) in self.body_map.iter().enumerate() {
            let in_range = |v: f64| (0.0..=100.0).contains(&v);
            if !in_range(point.x) || !in_range(point.y) {
                return Err(DraftError::PointOutOfRange { index });
            }
        }
        if !(1..=5).contains(&self.emotion.level) {
            return Err(DraftError::LevelOutOfRange { field: "emotion", level: self.emotion.level });
        }
        if !(1..=5).contains(&self.safety.level) {
            return Err(DraftError::LevelOutOfRange { field: "safety", level: self.safety.level });
        }
        Ok(())
    }
}

/// A finalized, submitted incident record. Created once on submission;
/// mutated only by status changes and note edits; never deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: Uuid,
    pub student_id: String,
    pub student_name: String,
    pub symbols: Vec<Symbol>,
    #[serde(default)]
    pub body_map: Vec<BodyMapPoint>,
    pub emotion: EmotionRating,
    pub location: Location,
    pub frequency: Frequency,
    pub safety: SafetyRating,
    pub status: ReportStatus,
    pub teacher_notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// AI RECOMMENDATION
// =============================================================================

/// Urgency class assigned by recommendation generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

/// AI-generated guidance for one report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub summary: String,
    pub urgency: Urgency,
    pub immediate_actions: Vec<String>,
    pub short_term_actions: Vec<String>,
    pub long_term_actions: Vec<String>,
    pub resources: Vec<String>,
    pub notes: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
