// SPDX-License-Identifier: MPL-2.0
use art_space::app::setup_gallery;
use art_space::config::{self, Config};
use art_space::error::Error;
use art_space::gallery::{ArtworkRecord, Catalog, ForwardWrap, GalleryController};
use art_space::i18n::fluent::I18n;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut initial_config = Config::default();
    initial_config.general.language = Some("en-US".to_string());
    config::save_to_path(&initial_config, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load initial config");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-next-button"), "Next");

    let mut french_config = Config::default();
    french_config.general.language = Some("fr".to_string());
    config::save_to_path(&french_config, &config_path).expect("Failed to write french config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load french config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-next-button"), "Suivant");
}

#[test]
fn sample_gallery_walkthrough_matches_button_presses() {
    let mut controller = GalleryController::new(Catalog::sample("gallery"));

    assert_eq!(controller.current().description, "Batman Beyond 1");
    controller.previous();
    assert_eq!(controller.index(), 14);
    assert_eq!(controller.current().description, "The Wolf Among Us 4");
    assert_eq!(controller.current().caption(), "Bigby Wolf (2013)");
    controller.previous();
    assert_eq!(controller.index(), 13);
    controller.next();
    assert_eq!(controller.index(), 14);
    controller.next();
    assert_eq!(controller.index(), 0);
}

#[test]
fn empty_catalog_never_yields_a_controller() {
    let result = Catalog::new(Vec::<ArtworkRecord>::new(), "gallery").map(GalleryController::new);
    assert!(matches!(result, Err(Error::EmptyCatalog)));
}

#[test]
fn legacy_wrap_from_settings_file_reaches_controller() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let manifest_path = dir.path().join("catalog.toml");
    Catalog::sample(dir.path())
        .save_to_path(&manifest_path)
        .expect("Failed to write manifest");

    let settings_path = dir.path().join("settings.toml");
    fs::write(
        &settings_path,
        format!(
            "[gallery]\ncatalog_path = {:?}\nforward_wrap = \"legacy\"\n",
            manifest_path.to_string_lossy()
        ),
    )
    .expect("Failed to write settings");

    let config = config::load_from_path(&settings_path).expect("Failed to load settings");
    let mut controller = setup_gallery(None, false, &config, None, dir.path().join("unused"))
        .controller;

    assert_eq!(controller.forward_wrap(), ForwardWrap::Legacy);
    assert_eq!(controller.catalog().image_dir(), dir.path());

    let len = controller.len();
    for _ in 0..len - 1 {
        controller.next();
        assert_ne!(controller.index(), len - 1);
    }
    assert_eq!(controller.index(), 0);
}

#[test]
fn relative_catalog_path_in_settings_is_relative_to_config_dir() {
    let config_dir = tempdir().expect("Failed to create temporary directory");
    let art_dir = config_dir.path().join("art");
    Catalog::sample(&art_dir)
        .save_to_path(&art_dir.join("catalog.toml"))
        .expect("Failed to write manifest");
    fs::write(
        config_dir.path().join("settings.toml"),
        "[gallery]\ncatalog_path = \"art/catalog.toml\"\n",
    )
    .expect("Failed to write settings");

    let (config, warning) = config::load_with_override(Some(config_dir.path().to_path_buf()));
    assert!(warning.is_none());
    let setup = setup_gallery(
        None,
        false,
        &config,
        Some(config_dir.path()),
        config_dir.path().join("unused"),
    );

    assert!(setup.catalog_error.is_none());
    assert_eq!(setup.controller.catalog().image_dir(), art_dir.as_path());
}

#[test]
fn unreadable_manifest_falls_back_with_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let setup = setup_gallery(
        Some(dir.path().join("missing.toml")),
        false,
        &Config::default(),
        None,
        dir.path().to_path_buf(),
    );

    assert!(matches!(setup.catalog_error, Some(Error::Io(_))));
    assert_eq!(setup.controller.len(), 15);
    assert_eq!(setup.controller.catalog().image_dir(), dir.path());
}
