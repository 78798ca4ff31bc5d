use nodal_well::schema::*;
use nodal_well::{WellError, load, save, validate_well_file};

fn two_wells() -> WellFile {
    let mut file = WellFile::single("A-1", WellParameters::default());
    file.name = "North pad".to_string();
    file.wells.push(WellDef {
        name: "A-2".to_string(),
        params: WellParameters {
            reservoir_pressure: 3800.0,
            choke_size: 24.0,
            well_depth: 6200.0,
            ..WellParameters::default()
        },
    });
    file.settings.sample_count = 25;
    file
}

#[test]
fn roundtrip_yaml_two_wells() {
    let file = two_wells();
    validate_well_file(&file).unwrap();

    let path = std::env::temp_dir().join("nodal_well_roundtrip_two.yaml");
    save(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json_two_wells() {
    let file = two_wells();

    let path = std::env::temp_dir().join("nodal_well_roundtrip_two.json");
    save(&path, &file).unwrap();
    let loaded = load(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn hand_written_yaml_with_omissions() {
    let yaml = r#"
version: 1
name: sparse
settings:
  solver:
    tolerance_psi: 0.01
wells:
  - name: W-3
    reservoir_pressure: 4500
    surface_pressure: 150
"#;
    let path = std::env::temp_dir().join("nodal_well_sparse.yml");
    std::fs::write(&path, yaml).unwrap();

    let file = load(&path).unwrap();
    let well = file.well("W-3").unwrap();
    assert_eq!(well.params.reservoir_pressure, 4500.0);
    assert_eq!(well.params.max_flow_rate, 2000.0);
    assert_eq!(file.settings.sample_count, DEFAULT_SAMPLE_COUNT);
    assert_eq!(file.settings.solver.tolerance_psi, 0.01);
    assert_eq!(file.settings.solver.max_iterations, DEFAULT_MAX_ITERATIONS);
}

#[test]
fn invalid_file_is_not_loaded() {
    let yaml = "version: 1\nwells:\n  - name: bad\n    min_flowing_pressure: 9000\n";
    let path = std::env::temp_dir().join("nodal_well_invalid.yaml");
    std::fs::write(&path, yaml).unwrap();

    assert!(matches!(load(&path), Err(WellError::Validation(_))));
}

#[test]
fn newer_version_is_rejected() {
    let mut file = two_wells();
    file.version = 99;
    let path = std::env::temp_dir().join("nodal_well_future.yaml");
    assert!(matches!(save(&path, &file), Err(WellError::Validation(_))));
}

#[test]
fn unknown_extension_is_rejected() {
    let path = std::env::temp_dir().join("nodal_well.toml");
    assert!(matches!(
        load(&path),
        Err(WellError::UnsupportedFormat { .. })
    ));
}
