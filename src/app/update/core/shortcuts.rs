use iced::keyboard::{Key, Modifiers, key};
use strategix_core::{KeyInput, KeyName};

/// Convert an iced key press into the dispatcher's platform-neutral form.
pub(in crate::app) fn key_input(key: &Key, modifiers: Modifiers) -> KeyInput {
    let name = match key.as_ref() {
        Key::Named(key::Named::ArrowLeft) => KeyName::ArrowLeft,
        Key::Named(key::Named::ArrowRight) => KeyName::ArrowRight,
        Key::Named(key::Named::Enter) => KeyName::Enter,
        Key::Named(key::Named::Space) => KeyName::Space,
        Key::Character(ch) => KeyName::Character(ch.to_string()),
        _ => KeyName::Other,
    };
    KeyInput {
        key: name,
        copy_modifier: modifiers.control() || modifiers.logo(),
    }
}

/// Space toggles playback on the video screen.
pub(in crate::app) fn is_play_pause(key: &Key, modifiers: Modifiers) -> bool {
    matches!(key.as_ref(), Key::Named(key::Named::Space))
        && !modifiers.control()
        && !modifiers.alt()
        && !modifiers.logo()
}

/// Plain `q` quits from the video screen.
pub(in crate::app) fn is_safe_quit(key: &Key, modifiers: Modifiers) -> bool {
    matches!(key.as_ref(), Key::Character(ch) if ch.eq_ignore_ascii_case("q"))
        && !modifiers.control()
        && !modifiers.alt()
        && !modifiers.logo()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strategix_core::{NavCommand, dispatch};

    #[test]
    fn named_keys_are_translated() {
        let input = key_input(&Key::Named(key::Named::ArrowRight), Modifiers::empty());
        assert_eq!(input.key, KeyName::ArrowRight);
        assert!(!input.copy_modifier);
    }

    #[test]
    fn ctrl_c_copies_instead_of_passing_through() {
        let input = key_input(&Key::Character("c".into()), Modifiers::CTRL);
        assert_eq!(dispatch(&input), Some(NavCommand::CopyAnswer));
    }

    #[test]
    fn logo_counts_as_copy_modifier() {
        let input = key_input(&Key::Character("C".into()), Modifiers::LOGO);
        assert_eq!(dispatch(&input), Some(NavCommand::CopyAnswer));
    }

    #[test]
    fn unrelated_named_keys_are_other() {
        let input = key_input(&Key::Named(key::Named::Tab), Modifiers::empty());
        assert_eq!(input.key, KeyName::Other);
        assert_eq!(dispatch(&input), None);
    }

    #[test]
    fn space_with_ctrl_is_not_play_pause() {
        assert!(is_play_pause(&Key::Named(key::Named::Space), Modifiers::empty()));
        assert!(!is_play_pause(&Key::Named(key::Named::Space), Modifiers::CTRL));
    }

    #[test]
    fn q_quits_but_ctrl_q_does_not() {
        assert!(is_safe_quit(&Key::Character("q".into()), Modifiers::empty()));
        assert!(is_safe_quit(&Key::Character("Q".into()), Modifiers::SHIFT));
        assert!(!is_safe_quit(&Key::Character("q".into()), Modifiers::CTRL));
    }
}
