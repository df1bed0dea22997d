use sf_layout::MountView;
use sf_project::schema::*;
use sf_project::{ProjectError, load, load_json, load_yaml, save_json, save_yaml};

#[test]
fn roundtrip_yaml_starter_design() {
    let design = DesignFile::default();

    let path = std::env::temp_dir().join("sf_project_roundtrip_starter.yaml");
    save_yaml(&path, &design).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn roundtrip_json_existing_mode() {
    let design = DesignFile {
        name: "Existing hardware".to_string(),
        mode: ModeDef::default_existing(),
        layout: LayoutDef {
            mount: MountView::Side,
            shuffle_seed: 7,
        },
        ..DesignFile::default()
    };

    let path = std::env::temp_dir().join("sf_project_roundtrip_existing.json");
    save_json(&path, &design).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(design, loaded);
}

#[test]
fn minimal_yaml_fills_defaults() {
    let yaml = r#"
version: 1
name: Minimal
tank: { length_cm: 40, width_cm: 30, height_cm: 20, water_level_cm: 15 }
boards:
  k28: { watts: 100, heads: 2 }
  k40: { watts: 100, heads: 3 }
mode:
  type: New
"#;
    let design: DesignFile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(design.conditions, ConditionsDef::default());
    assert_eq!(design.layout, LayoutDef::default());
    assert_eq!(
        design.mode,
        ModeDef::New {
            target_density_w_per_l: None,
            ratio_28_percent: 70.0,
        }
    );
}

#[test]
fn save_refuses_invalid_design() {
    let mut design = DesignFile::default();
    design.tank.water_level_cm = 80.0;

    let path = std::env::temp_dir().join("sf_project_invalid.yaml");
    let err = save_yaml(&path, &design).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn load_rejects_unknown_extension() {
    let path = std::env::temp_dir().join("sf_project_design.toml");
    assert!(matches!(load(&path), Err(ProjectError::UnknownFormat(ext)) if ext == "toml"));
}
