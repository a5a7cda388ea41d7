// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys step through the gallery; Home and End jump to its boundaries.
//! Key presses already captured by a widget are ignored.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match status {
        event::Status::Ignored => map_event(&event),
        event::Status::Captured => None,
    })
}

fn map_event(event: &Event) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            map_key(key).map(Message::Gallery)
        }
        _ => None,
    }
}

fn map_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        Key::Named(Named::Home) => Some(gallery::Message::First),
        Key::Named(Named::End) => Some(gallery::Message::Last),
        _ => None,
    }
}
