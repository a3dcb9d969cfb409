// ============================================================================
// domain/error.rs - AGGREGATED VALIDATION FAILURE
// ============================================================================

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

/// The single failure mode of the domain: one or more required fields were
/// missing at build time.
///
/// The aggregate is:
/// - Ordered (fields iterate in declaration order, because validation walks
///   the declaration table in order)
/// - Multi-message (appending to an already-reported field concatenates with
///   a newline, in call order)
/// - Self-contained (owns its mapping; no reference back to the builder or
///   the entity that failed to build)
///
/// A failed `build()` raises exactly one of these describing *every* missing
/// field, so callers fix the whole batch instead of one field per attempt.
#[derive(Debug, Error, Clone, Default, PartialEq, Eq, Serialize)]
#[error("{}", render_entries(.entries))]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: IndexMap<&'static str, String>,
}

impl ValidationErrors {
    /// The message recorded for each missing required field.
    pub const VALUE_REQUIRED: &'static str = "Value is required";

    /// An empty aggregate. Not an error yet — see [`Self::into_result`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `field`.
    ///
    /// A field reported more than once keeps every message, newline-joined
    /// in call order. First report of a field appends it to the iteration
    /// order.
    pub fn append(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.entries.get_mut(field) {
            Some(existing) => {
                existing.push('\n');
                existing.push_str(&message);
            }
            None => {
                self.entries.insert(field, message);
            }
        }
    }

    /// The message(s) recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    /// Offending field names, in the order they were first reported.
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// `(field, message)` pairs, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Number of offending fields (not messages).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Collapse into a `Result`: `Ok(())` when nothing was reported,
    /// otherwise `Err(self)`.
    ///
    /// This is the bridge between accumulation (one pass over all required
    /// fields) and propagation (`?` at the build site).
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Human-readable combined rendering: one block per offending field,
/// continuation lines of multi-message fields indented beneath the name.
fn render_entries(entries: &IndexMap<&'static str, String>) -> String {
    let mut out = String::new();
    for (i, (field, message)) in entries.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, line) in message.lines().enumerate() {
            if j == 0 {
                out.push_str(field);
                out.push_str(": ");
            } else {
                out.push_str("\n    ");
            }
            out.push_str(line);
        }
    }
    out
}
