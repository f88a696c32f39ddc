pub mod structure_loader;
pub mod structure_saver;

pub use structure_loader::{StructureLoadError, load_structure};
pub use structure_saver::{StructureSaveError, save_structure};
