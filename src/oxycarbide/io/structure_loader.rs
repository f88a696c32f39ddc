use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::num::ParseFloatError;
use glam::f64::DVec3;
use thiserror::Error;

use crate::oxycarbide::atom_collection::{AtomCollection, SpeciesCounts};
use crate::oxycarbide::oxycarbide_constants::{CARBON_SYMBOL, HAFNIUM_SYMBOL, OXYGEN_SYMBOL};

#[derive(Debug, Error)]
pub enum StructureLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid structure format: {0}")]
    Parse(String),

    #[error("Invalid floating point number: {0}")]
    FloatParse(#[from] ParseFloatError),

    #[error("Declared {declared} {species} atoms, but found {parsed}")]
    CountMismatch {
        species: &'static str,
        declared: usize,
        parsed: usize,
    },
}

fn parse_declared_count(comment: &str, key: &str) -> Result<usize, StructureLoadError> {
    comment
        .split_whitespace()
        .find_map(|token| token.strip_prefix(key))
        .ok_or_else(|| StructureLoadError::Parse(format!("Missing {} count in comment line", key)))?
        .parse()
        .map_err(|_| StructureLoadError::Parse(format!("Invalid {} count in comment line", key)))
}

/// Loads a structure file written by `save_structure` and verifies that the
/// counts declared in its header round-trip against the parsed rows.
pub fn load_structure(
    file_path: &str,
) -> Result<(AtomCollection, SpeciesCounts), StructureLoadError> {
    let file = File::open(file_path)?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();
    let mut atoms = AtomCollection::new();

    // Read the first line (total number of atoms)
    let total_atoms: usize = lines
        .next()
        .ok_or_else(|| StructureLoadError::Parse("Missing number of atoms".to_string()))??
        .trim()
        .parse()
        .map_err(|_| StructureLoadError::Parse("Invalid number of atoms".to_string()))?;

    // Read the comment line and the species counts it declares
    let comment = lines
        .next()
        .ok_or_else(|| StructureLoadError::Parse("Missing comment line".to_string()))??;
    let declared = SpeciesCounts {
        hafnium: parse_declared_count(&comment, "Hf=")?,
        oxygen: parse_declared_count(&comment, "O=")?,
        carbon: parse_declared_count(&comment, "C=")?,
    };

    for (index, line) in lines.enumerate() {
        let line = line?;

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(StructureLoadError::Parse(format!(
                "Invalid atom format on line {}: {}",
                index + 3,
                line
            )));
        }

        let position = DVec3::new(parts[1].parse()?, parts[2].parse()?, parts[3].parse()?);
        match parts[0] {
            symbol if symbol == HAFNIUM_SYMBOL => atoms.hafnium.push(position),
            symbol if symbol == OXYGEN_SYMBOL => atoms.oxygen.push(position),
            symbol if symbol == CARBON_SYMBOL => atoms.carbon.push(position),
            other => {
                return Err(StructureLoadError::Parse(format!(
                    "Unknown element {} on line {}",
                    other,
                    index + 3
                )));
            }
        }
    }

    // Round-trip check: header counts against parsed list lengths
    let parsed = atoms.counts();
    let pairs = [
        ("hafnium", declared.hafnium, parsed.hafnium),
        ("oxygen", declared.oxygen, parsed.oxygen),
        ("carbon", declared.carbon, parsed.carbon),
        ("total", total_atoms, parsed.total()),
    ];
    for (species, declared_count, parsed_count) in pairs {
        if declared_count != parsed_count {
            return Err(StructureLoadError::CountMismatch {
                species,
                declared: declared_count,
                parsed: parsed_count,
            });
        }
    }

    Ok((atoms, declared))
}
