/// Configuration for [`WordStream`](crate::WordStream).
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamOptions {
    /// Whether to also yield the word still being received.
    ///
    /// When `true`, each chunk that leaves undelimited text behind is followed
    /// by a [`StreamedWord`](crate::StreamedWord) with `is_final: false`
    /// carrying that text, so a UI can render the word as it is typed out. The
    /// partial word shares its `index` with the final word that replaces it.
    ///
    /// # Default
    ///
    /// `false`
    pub emit_partial: bool,
}
