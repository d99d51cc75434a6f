// tests/pipeline_tests.rs
//! End-to-end runs of the generator with an in-memory font

use std::fs;

use clap::Parser;
use fontgen::error::{
    CANNOT_FIT_BOUNDS, CANNOT_PARSE_CONFIG_FILE, CANNOT_READ_CONFIG_FILE, CANNOT_READ_FONT_FILE,
};
use fontgen::{load_config, run, run_with_font, AppError, Cli, ConfigFile};
use fontgen_core::dummy_font::{DummyFont, DummyGlyph};

fn font() -> DummyFont {
    DummyFont::new(800.0, -200.0, 1000.0)
        .with_face("Dummy Sans", true, false)
        .with_glyph(DummyGlyph::new('a', 550.0, 500.0, 500.0))
        .with_glyph(DummyGlyph::new('b', 560.0, 500.0, 750.0))
        .with_glyph(DummyGlyph::new('y', 520.0, 480.0, 700.0).with_depth(200.0))
        .with_glyph(DummyGlyph::empty(' ', 250.0).with_name("space"))
        .with_kerning('a', 'y', -100.0)
}

#[test]
fn test_run_writes_png_and_descriptor() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigFile {
        glyphs: Some("ab y".to_string()),
        size: Some(20),
        width: Some(64),
        height: Some(64),
        png: Some(dir.path().join("atlas.png")),
        fnt: Some(dir.path().join("atlas.fnt")),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let atlas = run_with_font(&font(), &config).unwrap();
    assert_eq!(atlas.glyphs.len(), 4);

    let png = fs::read(dir.path().join("atlas.png")).unwrap();
    assert_eq!(&png[1..4], b"PNG");

    let text = fs::read_to_string(dir.path().join("atlas.fnt")).unwrap();
    assert_eq!(text, atlas.descriptor_text());
    assert!(text.starts_with("<font>\n    <info face='font' "));
    assert!(text.contains("bold='1' "));
    assert!(text.contains("<page id='0' file='atlas.png'/>"));
    assert!(text.contains("<chars count='4'>"));
    // -100 units * 20 / 1000
    assert!(text.contains("<kernings count='1'>"));
    assert!(text.contains("<kerning first='97' second='121' amount='-2' />"));
    assert!(text.ends_with("</font>"));
}

#[test]
fn test_descriptor_base_and_offsets() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigFile {
        glyphs: Some("ay".to_string()),
        size: Some(20),
        width: Some(64),
        height: Some(64),
        line_spacing: Some(4),
        png: Some(dir.path().join("font.png")),
        fnt: Some(dir.path().join("font.fnt")),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let atlas = run_with_font(&font(), &config).unwrap();
    let desc = &atlas.descriptor;
    // y rises 10px above the baseline and hangs 4px below it
    let y = desc.chars.iter().find(|c| c.id == 'y' as u32).unwrap();
    assert_eq!((y.yoffset, y.height), (-10, 14));
    let a = desc.chars.iter().find(|c| c.id == 'a' as u32).unwrap();
    assert_eq!((a.yoffset, a.height), (-10, 10));
    assert_eq!(desc.base, 10);
    assert_eq!(desc.line_height, 24);
}

#[test]
fn test_fit_failure_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigFile {
        glyphs: Some("bbbbbbbb".to_string()),
        size: Some(40),
        width: Some(64),
        height: Some(64),
        png: Some(dir.path().join("font.png")),
        fnt: Some(dir.path().join("font.fnt")),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let err = run_with_font(&font(), &config).unwrap_err();
    assert_eq!(err.exit_code(), CANNOT_FIT_BOUNDS);
    assert!(!dir.path().join("font.png").exists());
    assert!(!dir.path().join("font.fnt").exists());
}

#[test]
fn test_cli_overrides_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let json = r#"{"size": 32, "name": "from-file", "width": 128, "padding": null}"#;
    fs::write(&path, json).unwrap();

    let cli = Cli::try_parse_from(["fontgen", "-c", path.to_str().unwrap(), "-s", "16"]).unwrap();
    let merged = load_config(&cli).unwrap();
    assert_eq!(merged.size, Some(16));
    assert_eq!(merged.name.as_deref(), Some("from-file"));
    assert_eq!(merged.width, Some(128));
    assert_eq!(merged.height, Some(256));

    let dumped: serde_json::Value = serde_json::from_str(&merged.to_json().unwrap()).unwrap();
    assert_eq!(dumped["size"], 16);
    assert_eq!(dumped["letterSpacing"], 0);
}

#[test]
fn test_config_errors_map_to_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let cli = Cli::try_parse_from(["fontgen", "-c", missing.to_str().unwrap()]).unwrap();
    let err = load_config(&cli).unwrap_err();
    assert!(matches!(err, AppError::ConfigNotFound { .. }));
    assert_eq!(err.exit_code(), CANNOT_READ_CONFIG_FILE);

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "{ size: 12").unwrap();
    let cli = Cli::try_parse_from(["fontgen", "-c", broken.to_str().unwrap()]).unwrap();
    let err = load_config(&cli).unwrap_err();
    assert_eq!(err.exit_code(), CANNOT_PARSE_CONFIG_FILE);
}

#[test]
fn test_missing_font_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigFile {
        font: Some(dir.path().join("nope.ttf")),
        ..Default::default()
    }
    .resolve()
    .unwrap();
    assert_eq!(run(&config).unwrap_err().exit_code(), CANNOT_READ_FONT_FILE);

    let no_font = ConfigFile::default().resolve().unwrap();
    assert!(matches!(run(&no_font).unwrap_err(), AppError::NoFont));
}
