use thiserror::Error;

/// Rejected play-area geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    #[error("arena dimensions must be finite, got {width}x{height}")]
    NotFinite { width: f32, height: f32 },

    #[error("arena {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    TooSmall {
        width: f32,
        height: f32,
        min_width: f32,
        min_height: f32,
    },
}
