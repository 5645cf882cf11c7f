use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use quickopen_core::config::Config;
use quickopen_core::extensions::resolve_extension_app;
use quickopen_core::platform::Platform;
use quickopen_core::service::{OpenService, ServiceError};

fn unique_temp_dir(label: &str) -> PathBuf {
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "quickopen-{label}-{}-{unique}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be created");
    dir
}

fn service_in(dir: &Path) -> OpenService {
    OpenService::load_from(dir.join("config.yaml"), Platform::current())
        .expect("service should load from an absent config")
}

#[test]
fn registered_file_type_resolves_for_matching_paths() {
    let dir = unique_temp_dir("service-filetype");
    let mut service = service_in(&dir);

    let normalized = service
        .register_file_type(".MD", "Typora")
        .expect("file type should register");
    assert_eq!(normalized, "md");

    let resolved = resolve_extension_app(
        Path::new("/notes/todo.md"),
        &service.config().file_type_apps,
    );
    assert_eq!(resolved, Some("Typora".to_string()));

    // The mapping survives a fresh load from disk.
    let reloaded = service_in(&dir);
    assert_eq!(
        reloaded.config().file_type_apps.get("md"),
        Some(&"Typora".to_string())
    );

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn file_group_maps_every_member_extension_and_only_those() {
    let dir = unique_temp_dir("service-filegroup");
    let mut service = service_in(&dir);

    let registered = service
        .register_file_group("audio", "vlc")
        .expect("audio group should register");

    assert_eq!(registered.len(), 7);
    for extension in registered {
        assert_eq!(
            service.config().file_type_apps.get(*extension),
            Some(&"vlc".to_string()),
            "extension {extension} should map to vlc"
        );
    }
    assert_eq!(service.config().file_type_apps.len(), registered.len());
    assert!(!service.config().file_type_apps.contains_key("mp4"));

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn unknown_file_group_lists_valid_groups() {
    let dir = unique_temp_dir("service-badgroup");
    let mut service = service_in(&dir);

    let error = service
        .register_file_group("fonts", "fontforge")
        .expect_err("unknown group should fail");

    assert!(matches!(error, ServiceError::UnknownFileGroup(_)));
    let message = error.to_string();
    assert!(message.contains("fonts"), "message: {message}");
    assert!(message.contains("audio"), "message: {message}");

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn removing_an_unmapped_file_type_fails() {
    let dir = unique_temp_dir("service-remove");
    let mut service = service_in(&dir);

    let error = service
        .remove_file_type("xyz")
        .expect_err("unmapped extension should fail");

    assert!(matches!(error, ServiceError::UnknownFileType(_)));
    assert!(error.to_string().contains(".xyz"));

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn remove_round_trips_with_register() {
    let dir = unique_temp_dir("service-remove-roundtrip");
    let mut service = service_in(&dir);

    service
        .register_file_type("pdf", "Skim")
        .expect("file type should register");
    service
        .remove_file_type(".PDF")
        .expect("file type should remove");

    assert!(service.config().file_type_apps.is_empty());

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn clear_recent_empties_a_loaded_list() {
    let dir = unique_temp_dir("service-clear");
    let config_path = dir.join("config.yaml");
    std::fs::write(
        &config_path,
        b"recent_paths:\n  - /tmp/one\n  - /tmp/two\n",
    )
    .expect("seeded config should be written");

    let mut service = OpenService::load_from(config_path.clone(), Platform::current())
        .expect("seeded config should load");
    assert_eq!(service.config().recent_paths.len(), 2);

    service.clear_recent().expect("clear should persist");

    let reloaded = Config::load(&config_path).expect("cleared config should load");
    assert!(reloaded.recent_paths.is_empty());

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[cfg(unix)]
#[test]
fn launching_with_a_custom_manager_records_the_path() {
    let dir = unique_temp_dir("service-launch");
    let target = dir.join("notes.txt");
    std::fs::write(&target, b"ok").expect("launch fixture should be created");

    let mut service = service_in(&dir);
    service
        .add_custom_manager("quiet", "true")
        .expect("custom manager should register");

    let outcome = service
        .resolve_and_launch(target.to_string_lossy().as_ref(), Some("quiet"))
        .expect("launch via true(1) should succeed");

    assert_eq!(outcome.used_app, "quiet");
    assert_eq!(
        service.config().recent_paths.first().map(String::as_str),
        Some(target.to_string_lossy().as_ref())
    );

    // The recent list was persisted as part of the launch.
    let reloaded = service_in(&dir);
    assert_eq!(
        reloaded.config().recent_paths.first().map(String::as_str),
        Some(target.to_string_lossy().as_ref())
    );

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn launching_a_missing_path_fails_before_spawning() {
    let dir = unique_temp_dir("service-missing-target");
    let mut service = service_in(&dir);

    let missing = dir.join("does-not-exist");
    let error = service
        .resolve_and_launch(missing.to_string_lossy().as_ref(), None)
        .expect_err("missing path should fail");

    assert!(matches!(error, ServiceError::Target(_)));
    assert!(error.to_string().contains("does not exist"));

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}

#[test]
fn failed_spawns_surface_and_leave_recents_untouched() {
    let dir = unique_temp_dir("service-spawn-fail");
    let target = dir.join("notes.txt");
    std::fs::write(&target, b"ok").expect("launch fixture should be created");

    let mut service = service_in(&dir);
    let error = service
        .resolve_and_launch(
            target.to_string_lossy().as_ref(),
            Some("quickopen-test-no-such-program"),
        )
        .expect_err("spawning a missing program should fail");

    assert!(matches!(error, ServiceError::Launch(_)));
    assert!(service.config().recent_paths.is_empty());

    std::fs::remove_dir_all(&dir).expect("temp dir should be removed");
}
