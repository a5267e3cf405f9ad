//! Keyboard bindings for the flashcard screens.
//!
//! | Key(s)                 | Command        |
//! |------------------------|----------------|
//! | `n`, arrow-right       | Next           |
//! | `p`, arrow-left        | Previous       |
//! | `a`, enter, space      | ToggleAnswer   |
//! | `+`, `=`               | ZoomIn         |
//! | `-`, `_`               | ZoomOut        |
//! | `0`                    | ZoomReset      |
//! | copy modifier + `c`    | CopyAnswer     |
//!
//! A `Some` result means the key was consumed; `None` leaves it to the host.

use crate::navigation::NavCommand;

/// Platform-neutral name of a pressed key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyName {
    Character(String),
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other,
}

/// A key press as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: KeyName,
    /// Ctrl on Linux/Windows, Cmd on macOS. Either counts.
    pub copy_modifier: bool,
}

impl KeyInput {
    pub fn plain(key: KeyName) -> Self {
        Self {
            key,
            copy_modifier: false,
        }
    }

    pub fn character(ch: &str) -> Self {
        Self::plain(KeyName::Character(ch.to_string()))
    }
}

/// Translate a key press into a navigation command.
pub fn dispatch(input: &KeyInput) -> Option<NavCommand> {
    let lowered = match &input.key {
        KeyName::Character(ch) => Some(ch.to_lowercase()),
        _ => None,
    };

    if input.copy_modifier && lowered.as_deref() == Some("c") {
        return Some(NavCommand::CopyAnswer);
    }

    match (&input.key, lowered.as_deref()) {
        (KeyName::ArrowRight, _) | (_, Some("n")) => Some(NavCommand::Next),
        (KeyName::ArrowLeft, _) | (_, Some("p")) => Some(NavCommand::Previous),
        (KeyName::Enter | KeyName::Space, _) | (_, Some("a" | " ")) => {
            Some(NavCommand::ToggleAnswer)
        }
        (_, Some("+" | "=")) => Some(NavCommand::ZoomIn),
        (_, Some("-" | "_")) => Some(NavCommand::ZoomOut),
        (_, Some("0")) => Some(NavCommand::ZoomReset),
        _ => None,
    }
}
