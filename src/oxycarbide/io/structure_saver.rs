use std::fs::File;
use std::io::{self, Write};
use thiserror::Error;

use crate::oxycarbide::atom_collection::AtomCollection;
use crate::oxycarbide::oxycarbide_constants::{
    CARBON_SYMBOL, HAFNIUM_SYMBOL, HFOC_LATTICE_CONSTANT_ANGSTROM, OXYGEN_SYMBOL,
};

#[derive(Debug, Error)]
pub enum StructureSaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Saves an AtomCollection to an XYZ-style structure file.
///
/// The first line carries the total atom count, the comment line names the
/// lattice constant and the per-species counts, and each following row is
/// `symbol x y z`, grouped hafnium, then oxygen, then carbon.
///
/// # Arguments
///
/// * `atoms` - The generated coordinates to save
/// * `file_path` - The path where the structure file should be saved
///
/// # Returns
///
/// * `Result<(), StructureSaveError>` - Ok(()) if successful, or an error if the operation fails
pub fn save_structure(atoms: &AtomCollection, file_path: &str) -> Result<(), StructureSaveError> {
    let mut file = File::create(file_path)?;
    let counts = atoms.counts();

    writeln!(file, "{}", counts.total())?;
    writeln!(
        file,
        "HfOC lattice a={} Hf={} O={} C={}",
        HFOC_LATTICE_CONSTANT_ANGSTROM, counts.hafnium, counts.oxygen, counts.carbon
    )?;

    let groups = [
        (HAFNIUM_SYMBOL, &atoms.hafnium),
        (OXYGEN_SYMBOL, &atoms.oxygen),
        (CARBON_SYMBOL, &atoms.carbon),
    ];
    for (symbol, positions) in groups {
        for position in positions {
            writeln!(
                file,
                "{} {:.6} {:.6} {:.6}",
                symbol, position.x, position.y, position.z
            )?;
        }
    }

    Ok(())
}
