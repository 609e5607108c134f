//! Grid generation errors

use thiserror::Error;

/// Parameter validation errors for grid generation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("entries_per_axis must be at least 1, got {0}")]
    InvalidAxisCount(u32),

    #[error("spacing must be greater than 0.0, got {0}")]
    InvalidSpacing(f32),
}
