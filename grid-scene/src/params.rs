//! Grid generation parameters

use crate::error::GridError;
use crate::scene::Primitive;

/// Default number of grid entries along each axis
pub const DEFAULT_ENTRIES_PER_AXIS: u32 = 11;

/// Default world-unit spacing between adjacent grid cells
pub const DEFAULT_SPACING: f32 = 2.5;

/// Parameters for one generated grid layer
#[derive(Debug, Clone, PartialEq)]
pub struct GridParams {
    /// Number of cells along each of the two grid axes
    pub entries_per_axis: u32,
    /// World-unit distance between adjacent cell centers
    pub spacing: f32,
    /// Constant height at which the whole layer is placed
    pub offset_y: f32,
    /// Primitive shape instantiated in every cell
    pub primitive: Primitive,
}

impl GridParams {
    /// Grid layer with the default axis count and spacing
    pub fn new(primitive: Primitive, offset_y: f32) -> Self {
        Self {
            entries_per_axis: DEFAULT_ENTRIES_PER_AXIS,
            spacing: DEFAULT_SPACING,
            offset_y,
            primitive,
        }
    }

    /// Check parameter preconditions
    pub fn validate(&self) -> Result<(), GridError> {
        if self.entries_per_axis < 1 {
            return Err(GridError::InvalidAxisCount(self.entries_per_axis));
        }
        if self.spacing <= 0.0 {
            return Err(GridError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self::new(Primitive::Sphere, 0.0)
    }
}
