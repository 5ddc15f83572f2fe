// SPDX-License-Identifier: MPL-2.0
use iced_toast::config::{self, ToasterConfig, DEFAULT_MAX_TOASTS};
use iced_toast::toast::{AnimationStyle, Position};
use iced_toast::ui::theming::ThemeMode;
use iced_toast::ui::Toaster;
use std::fs;
use tempfile::tempdir;

#[test]
fn saved_config_drives_a_new_toaster() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = ToasterConfig {
        max_toasts: 2,
        position: Position::TopLeft,
        theme: ThemeMode::Dark,
        ..ToasterConfig::default()
    };
    saved.toast_options.animation_on_close = AnimationStyle::Swipe;
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let (toaster, _) = Toaster::new(loaded);
    assert_eq!(toaster.config().max_visible(), 2);
    assert_eq!(toaster.section().class.to_string(), "t_toasts t_top-left t_default_font");
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("toaster.toml");
    fs::write(&path, "position = \"top-center\"\n").expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");

    assert_eq!(loaded.position, Position::TopCenter);
    assert_eq!(loaded.max_toasts, DEFAULT_MAX_TOASTS);
    assert_eq!(loaded.theme, ThemeMode::System);
}

#[test]
fn broken_file_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("toaster.toml"), "max_toasts = \"many\"")
        .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(loaded, ToasterConfig::default());
    assert!(warning.is_some_and(|w| w.contains("toaster.toml")));
}
