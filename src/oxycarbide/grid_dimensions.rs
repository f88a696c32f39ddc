use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::oxycarbide::diagnostics::{Diagnostic, Validated};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("grid dimensions need exactly 3 components, got {0}")]
pub struct ShapeError(pub usize);

/// Number of hafnium unit cells along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDimensions {
  pub nx: u32,
  pub ny: u32,
  pub nz: u32,
}

fn clamp_axis(axis: char, requested: i64, diagnostics: &mut Vec<Diagnostic>) -> u32 {
  if requested < 1 {
    let diagnostic = Diagnostic::DimensionClamped { axis, requested };
    diagnostic.report();
    diagnostics.push(diagnostic);
    return 1;
  }
  requested.min(u32::MAX as i64) as u32
}

impl GridDimensions {
  /// Builds grid dimensions from raw per-axis cell counts.
  ///
  /// Counts below 1 are clamped to 1 and generation proceeds; each clamp is
  /// reported as a warning diagnostic on the returned value.
  pub fn new(nx: i64, ny: i64, nz: i64) -> Validated<GridDimensions> {
    let mut diagnostics = Vec::new();
    let dims = GridDimensions {
      nx: clamp_axis('x', nx, &mut diagnostics),
      ny: clamp_axis('y', ny, &mut diagnostics),
      nz: clamp_axis('z', nz, &mut diagnostics),
    };
    Validated::with_diagnostics(dims, diagnostics)
  }

  /// Builds grid dimensions from a raw component slice.
  /// Anything other than exactly 3 components is fatal; no dimensions are produced.
  pub fn from_slice(components: &[i64]) -> Result<Validated<GridDimensions>, ShapeError> {
    if components.len() != 3 {
      return Err(ShapeError(components.len()));
    }
    Ok(Self::new(components[0], components[1], components[2]))
  }

  /// Number of unit cells in the grid.
  pub fn cell_count(&self) -> u64 {
    self.nx as u64 * self.ny as u64 * self.nz as u64
  }

  /// Total number of vertical sub-layers (two per unit cell).
  pub fn sub_layer_count(&self) -> u32 {
    2 * self.nz
  }
}
