// crates/iconcode-adapters/tests/adapters_integration.rs
//
// Adapters wired into the core services the way the CLI wires them.

use std::fs;

use iconcode_adapters::{FileCodeSource, InMemoryCodeSource, InMemoryProfileStore, TomlProfileLoader};
use iconcode_core::{
    application::{BatchService, ProfileService, ports::FontProfileStore},
    error::IconcodeError,
};
use tempfile::TempDir;

const CUSTOM_PROFILE: &str = r#"
[profile]
name   = "custom"
family = "CustomIconFont"
label  = "Custom Icons"
start  = "0x1000"
end    = "0x2000"
"#;

fn store_with_profiles_dir() -> (TempDir, InMemoryProfileStore) {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("custom.toml"), CUSTOM_PROFILE).unwrap();

    let store = InMemoryProfileStore::with_builtin().unwrap();
    let loaded = TomlProfileLoader::new(temp.path()).load_all().unwrap();
    store.extend(loaded).unwrap();
    (temp, store)
}

#[test]
fn loaded_profile_is_listed_with_builtins() {
    let (_temp, store) = store_with_profiles_dir();
    let names: Vec<_> = store
        .list()
        .unwrap()
        .into_iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, ["custom", "fontawesome", "material"]);
}

#[test]
fn loaded_profile_removes_warnings_for_its_range() {
    let (_temp, store) = store_with_profiles_dir();
    let service = ProfileService::new(Box::new(store));

    let custom = service.converter_for(Some("Custom")).unwrap();
    let result = custom.convert("&#x1500;");
    assert!(result.is_success());
    assert!(result.warnings().is_none());

    let material = service.converter_for(None).unwrap();
    assert!(material.convert("&#x1500;").has_warnings());
}

#[test]
fn unknown_profile_is_not_found() {
    let (_temp, store) = store_with_profiles_dir();
    let service = ProfileService::new(Box::new(store));
    assert!(matches!(
        service.converter_for(Some("segoe")),
        Err(IconcodeError::Application(_))
    ));
}

#[test]
fn batch_over_file_source() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("codes.txt");
    fs::write(&path, "# from the design export\n&#xe5d2;\ninvalid\n\n0x41\n").unwrap();

    let report = BatchService::new(Default::default())
        .run(&FileCodeSource::new(&path))
        .unwrap();

    assert_eq!(report.total, 3);
    assert_eq!(report.converted, 2);
    assert_eq!(report.warnings, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(report.results[1].original_code(), "invalid");
}

#[test]
fn batch_over_memory_source_with_profile() {
    let (_temp, store) = store_with_profiles_dir();
    let converter = ProfileService::new(Box::new(store))
        .converter_for(Some("custom"))
        .unwrap();

    let report = BatchService::new(converter)
        .run(&InMemoryCodeSource::new(["0x1000", "0x2000", "0x2001"]))
        .unwrap();

    assert_eq!(report.warnings, 1);
    assert!(report.is_clean(false));
    assert!(!report.is_clean(true));
}
