use std::{env, io};

use crate::outcome::Status;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum ColorSetting {
    /// Color when the target is a terminal and `NO_COLOR` is not set.
    #[default]
    Automatic,
    Always,
    Never,
}

impl From<bool> for ColorSetting {
    fn from(value: bool) -> Self {
        match value {
            true => Self::Always,
            false => Self::Never,
        }
    }
}

pub(crate) mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const GREY: &str = "\x1b[90m";
    pub const BOLD: &str = "\x1b[1m";
}

pub(crate) fn status_color(status: Status) -> &'static str {
    match status {
        Status::Passed => colors::GREEN,
        Status::Failed => colors::RED,
        Status::Skipped => colors::GREY,
    }
}

/// See <https://no-color.org>.
pub(crate) fn no_color_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
}

pub trait SupportsColor {
    fn supports_color(&self) -> bool;
}

impl<T: io::IsTerminal> SupportsColor for T {
    fn supports_color(&self) -> bool {
        self.is_terminal()
    }
}
