// SPDX-License-Identifier: MPL-2.0
//! Gallery screen: the artwork wall, its descriptor and the navigation controls.
//!
//! The screen is stateless. It renders whatever [`GalleryController::current`]
//! returns and emits [`Message`]s that [`update`] applies to the controller.

use crate::config::{
    CONTROL_BUTTON_PORTION, CONTROL_SPACER_PORTION, DESCRIPTION_FONT_SIZE,
    DESCRIPTOR_HEIGHT_PORTION, WALL_HEIGHT_PORTION,
};
use crate::gallery::{ArtworkRecord, Catalog, GalleryController};
use crate::i18n::fluent::I18n;
use iced::font::Weight;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Font, Length};
use std::path::Path;

const SPACING: f32 = 16.0;
const PADDING: f32 = 20.0;
const DESCRIPTOR_PADDING: f32 = 15.0;

/// Contextual data needed to render the gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub artwork: &'a ArtworkRecord,
    /// Decoded handle for the current artwork; `None` when the file is missing.
    pub image: Option<&'a Handle>,
    /// Zero-based index of the current artwork.
    pub index: usize,
    pub total: usize,
    /// Localized startup notices shown above the artwork.
    pub notices: &'a [String],
}

/// Messages emitted by the gallery screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    First,
    Last,
}

/// Applies a navigation message to the controller.
///
/// `First` and `Last` jump through [`GalleryController::go_to`]; a rejected
/// jump leaves the position unchanged.
pub fn update(message: Message, controller: &mut GalleryController) {
    let outcome = match message {
        Message::Previous => {
            controller.previous();
            Ok(())
        }
        Message::Next => {
            controller.next();
            Ok(())
        }
        Message::First => controller.go_to(0),
        Message::Last => controller.go_to(controller.len() - 1),
    };
    if let Err(err) = outcome {
        tracing::warn!(?message, error = %err, "navigation rejected");
        return;
    }
    tracing::debug!(
        ?message,
        index = controller.index(),
        description = %controller.current().description,
        "navigated"
    );
}

/// Creates an image handle for `record`, or `None` when its file is missing.
pub fn load_image(catalog: &Catalog, record: &ArtworkRecord) -> Option<Handle> {
    handle_for_path(&catalog.image_path(record))
}

fn handle_for_path(path: &Path) -> Option<Handle> {
    if path.is_file() {
        Some(Handle::from_path(path))
    } else {
        tracing::warn!(path = %path.display(), "artwork image not found");
        None
    }
}

/// Render the gallery screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(SPACING)
        .padding(PADDING)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    for notice in ctx.notices {
        content = content.push(Text::new(notice.as_str()));
    }

    content
        .push(artwork_wall(&ctx))
        .push(artwork_descriptor(ctx.artwork))
        .push(Text::new(position_label(ctx.i18n, ctx.index, ctx.total)))
        .push(artwork_controls(ctx.i18n))
        .into()
}

/// The artwork itself, cropped to fill its area.
fn artwork_wall<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let wall: Element<'a, Message> = match ctx.image {
        Some(handle) => Image::new(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Text::new(ctx.i18n.tr("gallery-image-missing")).into(),
    };

    Container::new(wall)
        .width(Length::Fill)
        .height(Length::FillPortion(WALL_HEIGHT_PORTION))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

/// Description on the first line, "artist (year)" caption on the second.
fn artwork_descriptor<'a>(artwork: &'a ArtworkRecord) -> Element<'a, Message> {
    let description = Text::new(artwork.description.as_str())
        .size(DESCRIPTION_FONT_SIZE)
        .font(Font {
            weight: Weight::Light,
            ..Font::default()
        });

    let caption = Row::new()
        .push(
            Text::new(format!("{} ", artwork.artist)).font(Font {
                weight: Weight::Semibold,
                ..Font::default()
            }),
        )
        .push(Text::new(format!("({})", artwork.year)).font(Font {
            weight: Weight::Light,
            ..Font::default()
        }));

    Container::new(Column::new().push(description).push(caption))
        .padding(DESCRIPTOR_PADDING)
        .width(Length::Fill)
        .height(Length::FillPortion(DESCRIPTOR_HEIGHT_PORTION))
        .into()
}

fn artwork_controls<'a>(i18n: &I18n) -> Element<'a, Message> {
    Row::new()
        .width(Length::Fill)
        .push(
            button(Text::new(i18n.tr("gallery-previous-button")))
                .on_press(Message::Previous)
                .width(Length::FillPortion(CONTROL_BUTTON_PORTION)),
        )
        .push(Space::new().width(Length::FillPortion(CONTROL_SPACER_PORTION)))
        .push(
            button(Text::new(i18n.tr("gallery-next-button")))
                .on_press(Message::Next)
                .width(Length::FillPortion(CONTROL_BUTTON_PORTION)),
        )
        .into()
}

/// One-based "current / total" indicator.
pub fn position_label(i18n: &I18n, index: usize, total: usize) -> String {
    let current = (index + 1).to_string();
    let total = total.to_string();
    i18n.tr_with_args(
        "gallery-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    )
}
