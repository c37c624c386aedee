use thiserror::Error;

/// Failures raised while binding the effect to its host.
///
/// Activation is atomic: when one of these is returned the engine is exactly
/// as it was before the call.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The host container could not be measured.
    #[error("host container has no measurable bounds")]
    InvalidHost,

    /// The render surface could not be created.
    #[error("failed to initialize render surface: {0}")]
    SurfaceInit(String),
}
