//! Acknowledgement - 一定時間だけ表示するバナー（"uploaded!", "sent!"）

use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Window {
    #[default]
    Hidden,
    Until(DateTime<Utc>),
    /// `now + duration` is past the end of representable time.
    Indefinite,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Acknowledgement {
    window: Window,
}

impl Acknowledgement {
    /// Show from `now` for `duration`. Re-raising restarts the window.
    pub fn raise(&mut self, now: DateTime<Utc>, duration: Duration) {
        self.window = match now.checked_add_signed(duration) {
            Some(until) => Window::Until(until),
            None => Window::Indefinite,
        };
    }

    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        match self.window {
            Window::Hidden => false,
            Window::Until(until) => now < until,
            Window::Indefinite => true,
        }
    }
}
