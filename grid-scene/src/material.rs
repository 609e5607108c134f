//! PBR material factors ramped across the grid axes
//!
//! Roughness sweeps 0.0 → 1.0 along the z axis and metallic sweeps
//! 1.0 → 0.0 along the x axis, so a full grid covers the whole
//! roughness/metallic parameter square with exact endpoint values.

/// A physically-based material reduced to the two swept scalar factors.
///
/// Each generated object owns exactly one material instance; materials are
/// never shared between objects.
#[derive(Debug, Clone, PartialEq)]
pub struct PbrMaterial {
    pub name: String,
    pub roughness: f32,
    pub metallic: f32,
}

/// Roughness for grid row `z`: 0.0 at the first row, 1.0 at the last,
/// `z / 10` in between.
///
/// The divisor is the literal constant 10 independent of `entries_per_axis`;
/// only the default 11-entry grid yields a uniform ramp.
pub fn roughness_for_row(z: u32, entries_per_axis: u32) -> f32 {
    if z == 0 {
        0.0
    } else if z == entries_per_axis - 1 {
        1.0
    } else {
        z as f32 / 10.0
    }
}

/// Metallic for grid column `x`: 1.0 at the first column, 0.0 at the last,
/// `1.0 - x / 10` in between.
pub fn metallic_for_column(x: u32, entries_per_axis: u32) -> f32 {
    if x == 0 {
        1.0
    } else if x == entries_per_axis - 1 {
        0.0
    } else {
        1.0 - x as f32 / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const N: u32 = 11;

    #[test]
    fn roughness_endpoints_are_exact() {
        assert_eq!(roughness_for_row(0, N), 0.0);
        assert_eq!(roughness_for_row(N - 1, N), 1.0);
    }

    #[test]
    fn roughness_interior_is_tenths() {
        for z in 1..N - 1 {
            assert_eq!(roughness_for_row(z, N), z as f32 / 10.0);
        }
    }

    #[test]
    fn metallic_endpoints_are_exact() {
        assert_eq!(metallic_for_column(0, N), 1.0);
        assert_eq!(metallic_for_column(N - 1, N), 0.0);
    }

    #[test]
    fn metallic_interior_is_inverted_tenths() {
        for x in 1..N - 1 {
            assert_eq!(metallic_for_column(x, N), 1.0 - x as f32 / 10.0);
        }
    }

    #[test]
    fn single_entry_grid_takes_first_branch() {
        // With one entry, index 0 is both the first and last cell; the
        // first-cell rule wins, matching the original's condition order.
        assert_eq!(roughness_for_row(0, 1), 0.0);
        assert_eq!(metallic_for_column(0, 1), 1.0);
    }
}
