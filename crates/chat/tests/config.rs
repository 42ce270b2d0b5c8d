// File: crates/chat/tests/config.rs
// Purpose: TOML configuration parsing and defaults.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use datachat::Config;

#[test]
fn empty_file_is_all_defaults() {
    assert_eq!(Config::from_toml_str("").expect("parse"), Config::default());
}

#[test]
fn partial_sections_keep_other_defaults() {
    let cfg = Config::from_toml_str(
        r#"
        [chat]
        processing_delay_ms = 0

        [render]
        theme = "light"
        output = "charts/latest.png"
        "#,
    )
    .expect("parse");
    assert_eq!(cfg.chat.processing_delay(), Duration::ZERO);
    assert_eq!(cfg.chat.log_level, "info");
    assert_eq!(cfg.render.theme, "light");
    assert_eq!(cfg.render.output, PathBuf::from("charts/latest.png"));
    assert_eq!(cfg.render.width, 400);
    assert_eq!(cfg.render.options().theme.name, "light");
}

#[test]
fn wrong_types_are_rejected() {
    assert!(Config::from_toml_str("[render]\nwidth = \"wide\"").is_err());
}

#[test]
fn load_reads_explicit_file() {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    writeln!(file, "[render]\nwidth = 800\nheight = 430\ndraw_labels = false").expect("write");

    let cfg = Config::load(Some(file.path())).expect("load");
    assert_eq!((cfg.render.width, cfg.render.height), (800, 430));
    assert!(!cfg.render.draw_labels);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}
