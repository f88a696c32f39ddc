pub mod atom_collection;
pub mod diagnostics;
pub mod generator;
pub mod grid_dimensions;
pub mod io;
pub mod layer_profile;
pub mod oxycarbide_constants;

// Re-export main API
pub use atom_collection::{AtomCollection, SpeciesCounts};
pub use diagnostics::{Diagnostic, Severity, Validated};
pub use generator::{LatticeGenResult, LatticeGenStatistics, generate_lattice, generate_lattice_default, uniform_profile};
pub use grid_dimensions::{GridDimensions, ShapeError};
pub use layer_profile::{LayerProfile, LayerProfileParams};
