use std::fs;

use glam::f64::DVec3;
use hfoc_lattice::oxycarbide::io::structure_loader::{StructureLoadError, load_structure};
use hfoc_lattice::oxycarbide::io::structure_saver::save_structure;
use hfoc_lattice::oxycarbide::{AtomCollection, GridDimensions, generate_lattice, uniform_profile};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_positions_equal(original: &[DVec3], loaded: &[DVec3]) {
    assert_eq!(original.len(), loaded.len(), "Atom count mismatch");
    for (i, (original_pos, loaded_pos)) in original.iter().zip(loaded.iter()).enumerate() {
        let diff = (*original_pos - *loaded_pos).length();
        assert!(
            diff < 1e-5,
            "Position mismatch at atom {}: original {:?}, loaded {:?}",
            i,
            original_pos,
            loaded_pos
        );
    }
}

#[test]
fn test_structure_roundtrip_generated() {
    let mut rng = StdRng::seed_from_u64(42);
    let grid = GridDimensions::new(2, 2, 3).value;
    let result = generate_lattice(&grid, uniform_profile, &mut rng);

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("hfoc.xyz");
    let file_path_str = file_path.to_str().unwrap();

    save_structure(&result.atoms, file_path_str).expect("Failed to save structure");
    let (loaded, declared) = load_structure(file_path_str).expect("Failed to load structure");

    assert_eq!(declared, result.atoms.counts());
    assert_positions_equal(&result.atoms.hafnium, &loaded.hafnium);
    assert_positions_equal(&result.atoms.oxygen, &loaded.oxygen);
    assert_positions_equal(&result.atoms.carbon, &loaded.carbon);
}

#[test]
fn test_structure_roundtrip_empty() {
    let empty = AtomCollection::new();

    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("empty.xyz");
    let file_path_str = file_path.to_str().unwrap();

    save_structure(&empty, file_path_str).expect("Failed to save structure");
    let (loaded, declared) = load_structure(file_path_str).expect("Failed to load structure");

    assert_eq!(declared.total(), 0);
    assert_eq!(loaded.total_atoms(), 0);
}

#[test]
fn test_loader_rejects_count_mismatch() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("bad_counts.xyz");

    // Header declares 2 hafnium atoms, rows carry only 1
    let text = "3\nHfOC lattice a=2.305 Hf=2 O=1 C=0\nHf 0.0 0.0 0.0\nO 2.305 0.0 0.0\n";
    fs::write(&file_path, text).expect("Failed to write test file");

    let error = load_structure(file_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(
        error,
        StructureLoadError::CountMismatch {
            species: "hafnium",
            declared: 2,
            parsed: 1,
        }
    ));
}

#[test]
fn test_loader_rejects_malformed_row() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("malformed.xyz");

    let text = "1\nHfOC lattice a=2.305 Hf=1 O=0 C=0\nHf 0.0 0.0\n";
    fs::write(&file_path, text).expect("Failed to write test file");

    let error = load_structure(file_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(error, StructureLoadError::Parse(_)));
}

#[test]
fn test_loader_rejects_unknown_element() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("unknown.xyz");

    let text = "1\nHfOC lattice a=2.305 Hf=0 O=0 C=0\nXe 0.0 0.0 0.0\n";
    fs::write(&file_path, text).expect("Failed to write test file");

    let error = load_structure(file_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(error, StructureLoadError::Parse(_)));
}

#[test]
fn test_loader_requires_species_counts_in_comment() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let file_path = temp_dir.path().join("no_counts.xyz");

    let text = "1\njust a comment\nHf 0.0 0.0 0.0\n";
    fs::write(&file_path, text).expect("Failed to write test file");

    let error = load_structure(file_path.to_str().unwrap()).unwrap_err();
    assert!(matches!(error, StructureLoadError::Parse(_)));
}
