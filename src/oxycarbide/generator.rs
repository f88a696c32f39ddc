use glam::f64::DVec3;
use rand::Rng;

use crate::oxycarbide::atom_collection::AtomCollection;
use crate::oxycarbide::grid_dimensions::GridDimensions;
use crate::oxycarbide::oxycarbide_constants::{
  HAFNIUM_SITE_OFFSETS, HFOC_LATTICE_CONSTANT_ANGSTROM,
};

// ============================================================================
// Result Structures
// ============================================================================

#[derive(Debug, Clone)]
pub struct LatticeGenStatistics {
  pub cells_walked: u64,
  pub hafnium_atoms: usize,
  pub oxygen_atoms: usize,
  pub carbon_atoms: usize,
}

impl LatticeGenStatistics {
  pub fn total_atoms(&self) -> usize {
    self.hafnium_atoms + self.oxygen_atoms + self.carbon_atoms
  }

  pub fn log_statistics(&self) {
    log::info!("LatticeGen statistics:");
    log::info!("  cells walked: {}", self.cells_walked);
    log::info!("  hafnium atoms: {}", self.hafnium_atoms);
    log::info!("  oxygen atoms: {}", self.oxygen_atoms);
    log::info!("  carbon atoms: {}", self.carbon_atoms);
    log::info!("  total atoms: {}", self.total_atoms());
  }
}

/// Result of a lattice generation run
pub struct LatticeGenResult {
  pub atoms: AtomCollection,
  pub statistics: LatticeGenStatistics,
}

// ============================================================================
// Main Algorithm Entry Point
// ============================================================================

/// Carbon probability used when no profile is supplied: a uniform 50/50 split
/// of oxygen and carbon on every layer.
pub fn uniform_profile(_z: i64) -> f64 {
  0.5
}

/// Generates the atom coordinates for a hafnium oxycarbide grid.
///
/// Walks the unit cells z-slab by z-slab, placing 4 hafnium atoms per cell at
/// their canonical offsets and classifying the 4 derived variable sites as
/// oxygen or carbon by independent uniform draws against the carbon fraction
/// of the site's sub-layer. All coordinates are scaled by the lattice
/// constant after the walk, so the returned positions are in Ångströms with
/// the bottom-left hafnium at the origin.
///
/// # Arguments
/// * `dims` - Number of unit cells along each axis
/// * `profile` - Carbon fraction per vertical sub-layer index
/// * `rng` - Random source for the per-site classification draws
///
/// # Returns
/// * `LatticeGenResult` with the grouped coordinates and walk statistics
pub fn generate_lattice<F, R>(dims: &GridDimensions, profile: F, rng: &mut R) -> LatticeGenResult
where
  F: Fn(i64) -> f64,
  R: Rng,
{
  let mut atoms = AtomCollection::with_cell_capacity(dims.cell_count() as usize);

  for z in 0..dims.nz as i64 {
    // Both sub-layer fractions are constant across the whole z-slab
    let lower_cutoff = profile(2 * z);
    let upper_cutoff = profile(2 * z + 1);
    for y in 0..dims.ny as i64 {
      for x in 0..dims.nx as i64 {
        emit_cell(x, y, z, lower_cutoff, upper_cutoff, &mut atoms, rng);
      }
    }
  }

  atoms.scale(HFOC_LATTICE_CONSTANT_ANGSTROM);

  let counts = atoms.counts();
  let statistics = LatticeGenStatistics {
    cells_walked: dims.cell_count(),
    hafnium_atoms: counts.hafnium,
    oxygen_atoms: counts.oxygen,
    carbon_atoms: counts.carbon,
  };
  statistics.log_statistics();

  LatticeGenResult { atoms, statistics }
}

/// Generates with the uniform 50/50 profile and a thread-local random source.
pub fn generate_lattice_default(dims: &GridDimensions) -> LatticeGenResult {
  generate_lattice(dims, uniform_profile, &mut rand::thread_rng())
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Emits one unit cell: 4 hafnium sites plus 4 randomly classified variable
/// sites, two per sub-layer.
fn emit_cell<R: Rng>(
  x: i64,
  y: i64,
  z: i64,
  lower_cutoff: f64,
  upper_cutoff: f64,
  atoms: &mut AtomCollection,
  rng: &mut R,
) {
  for offset in HAFNIUM_SITE_OFFSETS {
    atoms.hafnium.push(DVec3::new(
      (2 * x + offset[0]) as f64,
      (2 * y + offset[1]) as f64,
      (2 * z + offset[2]) as f64,
    ));
  }

  // The lower sub-layer sites run along one cell diagonal, the upper sites
  // along the other, filling the corners the hafnium atoms leave open.
  for i in 0..2i64 {
    let lower_site = DVec3::new((2 * x + 1 - i) as f64, (2 * y + i) as f64, (2 * z) as f64);
    classify_site(lower_site, lower_cutoff, atoms, rng);

    let upper_site = DVec3::new((2 * x + i) as f64, (2 * y + i) as f64, (2 * z + 1) as f64);
    classify_site(upper_site, upper_cutoff, atoms, rng);
  }
}

/// Classifies a variable site with an independent uniform draw in [0, 1):
/// carbon when the draw falls below the sub-layer's carbon fraction,
/// oxygen otherwise.
fn classify_site<R: Rng>(
  position: DVec3,
  carbon_cutoff: f64,
  atoms: &mut AtomCollection,
  rng: &mut R,
) {
  if rng.gen_range(0.0..1.0) < carbon_cutoff {
    atoms.carbon.push(position);
  } else {
    atoms.oxygen.push(position);
  }
}
