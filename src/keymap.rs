use crate::keys::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventState};

/// Maps a physical key event to a key identity, distinguishing the numeric
/// pad from the top-row digits.
///
/// Terminals report the pad differently across systems: with the kitty
/// keyboard protocol a pad digit arrives as a digit char carrying the KEYPAD
/// state, while a num-locked-off pad arrives as navigation codes (End for
/// pad-1, Down for pad-2, ...). Both shapes are folded into [`Key::Pad`].
/// Unrecognized events map to None; the shell reports those to the user and
/// leaves the session untouched.
pub fn map_key_event(event: &KeyEvent) -> Option<Key> {
    let keypad = event.state.contains(KeyEventState::KEYPAD);

    if let KeyCode::Char(c) = event.code {
        if let Some(d) = c.to_digit(10) {
            let d = d as u8;
            return Some(if keypad { Key::Pad(d) } else { Key::Digit(d) });
        }
        return None;
    }

    // Navigation-cluster aliases produced by the pad with num lock off.
    match event.code {
        KeyCode::Insert => Some(Key::Pad(0)),
        KeyCode::End => Some(Key::Pad(1)),
        KeyCode::PageDown => Some(Key::Pad(3)),
        KeyCode::KeypadBegin => Some(Key::Pad(5)),
        KeyCode::Home => Some(Key::Pad(7)),
        KeyCode::PageUp => Some(Key::Pad(9)),
        // Arrow codes also come from the real arrow keys; only treat them as
        // pad aliases when the terminal marks the event as keypad-originated.
        KeyCode::Down if keypad => Some(Key::Pad(2)),
        KeyCode::Left if keypad => Some(Key::Pad(4)),
        KeyCode::Right if keypad => Some(Key::Pad(6)),
        KeyCode::Up if keypad => Some(Key::Pad(8)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use crossterm::event::KeyModifiers;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn keypad(code: KeyCode) -> KeyEvent {
        let mut event = KeyEvent::new(code, KeyModifiers::NONE);
        event.state = KeyEventState::KEYPAD;
        event
    }

    #[test]
    fn top_row_digits_map_to_digit_keys() {
        assert_matches!(map_key_event(&plain(KeyCode::Char('0'))), Some(Key::Digit(0)));
        assert_matches!(map_key_event(&plain(KeyCode::Char('7'))), Some(Key::Digit(7)));
    }

    #[test]
    fn keypad_digits_map_to_pad_keys() {
        assert_matches!(map_key_event(&keypad(KeyCode::Char('7'))), Some(Key::Pad(7)));
        assert_matches!(map_key_event(&keypad(KeyCode::Char('0'))), Some(Key::Pad(0)));
    }

    #[test]
    fn navigation_aliases_map_to_pad_keys() {
        assert_matches!(map_key_event(&plain(KeyCode::End)), Some(Key::Pad(1)));
        assert_matches!(map_key_event(&plain(KeyCode::PageDown)), Some(Key::Pad(3)));
        assert_matches!(map_key_event(&plain(KeyCode::KeypadBegin)), Some(Key::Pad(5)));
        assert_matches!(map_key_event(&plain(KeyCode::Home)), Some(Key::Pad(7)));
        assert_matches!(map_key_event(&plain(KeyCode::PageUp)), Some(Key::Pad(9)));
        assert_matches!(map_key_event(&plain(KeyCode::Insert)), Some(Key::Pad(0)));
    }

    #[test]
    fn arrows_are_pad_aliases_only_with_keypad_state() {
        assert_matches!(map_key_event(&keypad(KeyCode::Up)), Some(Key::Pad(8)));
        assert_matches!(map_key_event(&keypad(KeyCode::Left)), Some(Key::Pad(4)));
        assert_matches!(map_key_event(&plain(KeyCode::Up)), None);
        assert_matches!(map_key_event(&plain(KeyCode::Left)), None);
    }

    #[test]
    fn unrecognized_keys_map_to_none() {
        assert_matches!(map_key_event(&plain(KeyCode::Char('a'))), None);
        assert_matches!(map_key_event(&plain(KeyCode::Tab)), None);
        assert_matches!(map_key_event(&plain(KeyCode::F(3))), None);
    }
}
