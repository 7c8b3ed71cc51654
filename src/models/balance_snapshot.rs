//! Balance snapshot model and note annotations.

use serde::{Deserialize, Serialize};

/// The financial state of the household on a specific date.
///
/// Snapshots are consumed by the chart renderer; the pay engine only uses
/// a snapshot's date as the target when asking "how much is incoming as of
/// this snapshot".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    /// Unique integer id, assigned by the record store.
    pub id: i32,
    /// The snapshot date as `YYYY-MM-DD`.
    pub date: String,
    /// Checking account balance in dollars.
    pub checking: f64,
    /// Available credit in dollars.
    pub credit_available: f64,
    /// Total credit limit in dollars.
    pub credit_limit: f64,
    /// Personal (non-card) debt in dollars.
    pub personal_debt: f64,
    /// Free-form annotation shown on the chart.
    pub note: String,
}

impl BalanceSnapshot {
    /// Returns the credit currently in use (limit minus available).
    pub fn credit_used(&self) -> f64 {
        self.credit_limit - self.credit_available
    }

    /// Returns the chart annotation for this snapshot's note.
    pub fn annotation(&self) -> NoteAnnotation {
        NoteAnnotation::from_legacy_note(&self.note)
    }
}

/// A chart annotation with an optional highlight color.
///
/// Older data files encoded the color inside the note string as
/// `"color:text"` (for example `"green:bonus"`). New data keeps color and
/// text separate; [`NoteAnnotation::from_legacy_note`] is the migration
/// shim that still understands the delimited form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteAnnotation {
    /// Highlight color name, if the note carries one.
    pub color: Option<String>,
    /// The annotation text.
    pub text: String,
}

/// Colors the legacy note encoding was ever written with.
const LEGACY_NOTE_COLORS: [&str; 4] = ["green", "red", "yellow", "blue"];

impl NoteAnnotation {
    /// Parses a stored note string, honoring the legacy `color:text` form.
    ///
    /// Only known color names activate the split; any other text containing
    /// a colon is treated as plain text.
    ///
    /// # Example
    ///
    /// ```
    /// use finance_display::models::NoteAnnotation;
    ///
    /// let a = NoteAnnotation::from_legacy_note("green:bonus");
    /// assert_eq!(a.color.as_deref(), Some("green"));
    /// assert_eq!(a.text, "bonus");
    ///
    /// let b = NoteAnnotation::from_legacy_note("paid rent at 9:30");
    /// assert_eq!(b.color, None);
    /// ```
    pub fn from_legacy_note(note: &str) -> Self {
        if let Some((prefix, rest)) = note.split_once(':') {
            if LEGACY_NOTE_COLORS.contains(&prefix) {
                return Self {
                    color: Some(prefix.to_string()),
                    text: rest.to_string(),
                };
            }
        }
        Self {
            color: None,
            text: note.to_string(),
        }
    }
}
