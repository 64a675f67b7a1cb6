//! Error type for the visualization pipeline.

use thiserror::Error;

/// Failures surfaced at the API boundary.
///
/// Unresolvable edge endpoints are deliberately *not* represented here: an
/// edge whose label matches no node is dropped silently everywhere in the
/// pipeline.
#[derive(Debug, Error)]
pub enum VizError {
    /// The caller supplied data the pipeline refuses to compute on, e.g. a
    /// node position containing NaN or infinity.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Rasterization failed (SVG tree construction, pixmap allocation or
    /// PNG encoding).
    #[error("render failed: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, VizError>;

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = VizError::InvalidInput("node 3 has NaN x".to_string());
        assert_eq!(e.to_string(), "invalid input: node 3 has NaN x");
        let e = VizError::Render("pixmap allocation failed".to_string());
        assert!(e.to_string().starts_with("render failed"));
    }
}
