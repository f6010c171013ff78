use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while loading or building a scene.
///
/// The physics step itself cannot fail; everything here happens before the
/// first step, while turning a scenario file into a world.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A position or velocity list did not have exactly two components.
    #[error("{field} must have 2 components, got {len}")]
    VectorLength { field: String, len: usize },

    /// NaN or infinite input value.
    #[error("{0} must be finite")]
    NonFinite(String),

    /// Wall half-extent must be positive.
    #[error("wall {index}: radius must be > 0, got {r}")]
    InvalidWallRadius { index: usize, r: f64 },

    /// Drop block lattice spacing must be positive.
    #[error("block {index}: spacing must be > 0, got {spacing}")]
    InvalidSpacing { index: usize, spacing: f64 },

    /// Wall run step must be positive and the run must have nonzero length.
    #[error("wall run {index}: {reason}")]
    InvalidWallRun { index: usize, reason: &'static str },

    /// Broad-phase cell must cover the drop interaction radius.
    #[error("grid cell size {0} is smaller than the interaction radius")]
    InvalidCellSize(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
