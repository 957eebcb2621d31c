use alloc::string::String;

/// A model-produced correction of the learner's message.
///
/// `original` is expected to be an exact, contiguous substring of the
/// segmented message; records for which that does not hold are ignored by
/// [`align`](crate::align).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Correction {
    /// Minimal original substring that needs correcting.
    pub original: String,
    /// Replacement text.
    pub correction: String,
    /// Why the replacement is needed, usually in simple Mandarin.
    pub explanation: String,
}

impl Correction {
    /// Build a correction record.
    pub fn new(
        original: impl Into<String>,
        correction: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            original: original.into(),
            correction: correction.into(),
            explanation: explanation.into(),
        }
    }
}
