// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the gallery controller, localization and
//! user preferences. Startup decisions (which catalog to show, which
//! forward wrap to use) are made once in [`App::new`]; afterwards every button
//! press or arrow key becomes a [`Message`] handled synchronously by
//! [`App::update`], followed by a re-render from [`App::view`].

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::error::Error;
use crate::gallery::{Catalog, ForwardWrap, GalleryController};
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use crate::ui::theming::ThemeMode;
use iced::widget::image::Handle;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    controller: GalleryController,
    /// Handle for the artwork on display, refreshed after every navigation.
    current_image: Option<Handle>,
    theme_mode: ThemeMode,
    /// Localized warnings gathered during startup.
    notices: Vec<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("index", &self.controller.index())
            .field("len", &self.controller.len())
            .field("has_image", &self.current_image.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config::WINDOW_DEFAULT_WIDTH as f32,
            config::WINDOW_DEFAULT_HEIGHT as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    // iced requires an `Fn` boot closure; flags are consumed on the first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Controller chosen at startup, plus the error that forced a fallback to the
/// sample catalog, if any.
#[derive(Debug)]
pub struct GallerySetup {
    pub controller: GalleryController,
    pub catalog_error: Option<Error>,
}

/// Picks the catalog to show and builds its controller.
///
/// A manifest given on the command line wins over the one in the config. A
/// relative `catalog_path` from the config resolves against `config_dir`. If
/// the manifest cannot be loaded, the bundled sample catalog is shown instead
/// and the error is returned alongside.
pub fn setup_gallery(
    cli_catalog: Option<PathBuf>,
    legacy_wrap: bool,
    config: &config::Config,
    config_dir: Option<&Path>,
    sample_dir: PathBuf,
) -> GallerySetup {
    let forward_wrap = if legacy_wrap {
        ForwardWrap::Legacy
    } else {
        config.gallery.forward_wrap
    };

    let manifest =
        cli_catalog.or_else(|| config.gallery.resolved_catalog_path(config_dir));
    let (catalog, catalog_error) = match manifest {
        Some(path) => match Catalog::load_from_path(&path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    artworks = catalog.len(),
                    "loaded catalog manifest"
                );
                (catalog, None)
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "catalog manifest unusable, showing the sample gallery"
                );
                (Catalog::sample(sample_dir), Some(err))
            }
        },
        None => (Catalog::sample(sample_dir), None),
    };

    tracing::info!(?forward_wrap, artworks = catalog.len(), "gallery ready");
    GallerySetup {
        controller: GalleryController::with_forward_wrap(catalog, forward_wrap),
        catalog_error,
    }
}

impl App {
    /// Initializes application state from the config and the launcher's flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let setup = setup_gallery(
            flags.catalog_path,
            flags.legacy_wrap,
            &config,
            paths::get_app_config_dir().as_deref(),
            paths::get_sample_gallery_dir(),
        );

        let mut notices = Vec::new();
        if let Some(key) = config_warning {
            notices.push(i18n.tr(&key));
        }
        if let Some(err) = &setup.catalog_error {
            notices.push(format!(
                "{} {}",
                i18n.tr("notification-catalog-load-error"),
                i18n.tr(err.i18n_key())
            ));
        }

        let mut app = App {
            i18n,
            controller: setup.controller,
            current_image: None,
            theme_mode: config.general.theme_mode,
            notices,
        };
        app.refresh_image();

        (app, Task::none())
    }

    fn title(&self) -> String {
        format!(
            "{} - {}",
            self.controller.current().description,
            self.i18n.tr("window-title")
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                gallery::update(gallery_message, &mut self.controller);
                self.refresh_image();
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        gallery::view(gallery::ViewContext {
            i18n: &self.i18n,
            artwork: self.controller.current(),
            image: self.current_image.as_ref(),
            index: self.controller.index(),
            total: self.controller.len(),
            notices: &self.notices,
        })
        .map(Message::Gallery)
    }

    fn refresh_image(&mut self) {
        self.current_image =
            gallery::load_image(self.controller.catalog(), self.controller.current());
    }
}
