// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::notifications;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Tick period while notices are transitioning (about one frame).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes Escape to the notice overlay.
///
/// Captured events are routed too, so Escape still closes a dialog while a
/// text input has focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(key::Named::Escape),
            ..
        }) => Some(Message::Notice(notifications::Message::Escape)),
        _ => None,
    })
}

/// Creates the tick subscription driving toast lifetimes and transitions.
///
/// Nothing is subscribed while no transition is scheduled.
pub fn create_tick_subscription(has_scheduled_work: bool) -> Subscription<Message> {
    if has_scheduled_work {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
