mod appearance;
mod core;
mod flashcards;
mod playback;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app) enum Effect {
    LoadManifest,
    LoadQuestions,
    /// Ask the transport for the media length once per load.
    ResolveDuration(Option<f64>),
    /// Fire-and-forget; clipboard failures are not reported.
    CopyToClipboard(String),
    QuitSafely,
}
