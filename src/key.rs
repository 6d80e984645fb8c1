//! 16-bit key-code encoding.
//!
//! Text keys encode as their Unicode scalar value, so `'A'` is `0x41`.
//! Ctrl+letter encodes as the matching C0 control byte (Ctrl-C is `0x03`),
//! which is what a raw-mode tty delivers on the wire anyway. Keys with no
//! character representation (arrows, function keys, navigation) live in the
//! Unicode private use area starting at [`KEY_UP`], so they can never
//! collide with text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const KEY_BACKSPACE: u16 = 0x0008;
pub const KEY_TAB: u16 = 0x0009;
pub const KEY_ENTER: u16 = 0x000D;
pub const KEY_ESC: u16 = 0x001B;

// Special keys, private use area.
pub const KEY_UP: u16 = 0xE000;
pub const KEY_DOWN: u16 = 0xE001;
pub const KEY_LEFT: u16 = 0xE002;
pub const KEY_RIGHT: u16 = 0xE003;
pub const KEY_HOME: u16 = 0xE004;
pub const KEY_END: u16 = 0xE005;
pub const KEY_PAGE_UP: u16 = 0xE006;
pub const KEY_PAGE_DOWN: u16 = 0xE007;
pub const KEY_INSERT: u16 = 0xE008;
pub const KEY_DELETE: u16 = 0xE009;
/// F1; F2..F12 follow contiguously.
pub const KEY_F1: u16 = 0xE010;

/// A key this encoding cannot represent.
pub const KEY_UNKNOWN: u16 = 0x0000;

/// Encode a key event as a 16-bit key code.
pub fn encode(key: &KeyEvent) -> u16 {
    match key.code {
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() {
                u16::from(c.to_ascii_uppercase() as u8 & 0x1F)
            } else if (c as u32) <= u32::from(u16::MAX) {
                c as u16
            } else {
                // Outside the BMP; a 16-bit code cannot carry it.
                char::REPLACEMENT_CHARACTER as u16
            }
        }
        KeyCode::Backspace => KEY_BACKSPACE,
        KeyCode::Tab | KeyCode::BackTab => KEY_TAB,
        KeyCode::Enter => KEY_ENTER,
        KeyCode::Esc => KEY_ESC,
        KeyCode::Up => KEY_UP,
        KeyCode::Down => KEY_DOWN,
        KeyCode::Left => KEY_LEFT,
        KeyCode::Right => KEY_RIGHT,
        KeyCode::Home => KEY_HOME,
        KeyCode::End => KEY_END,
        KeyCode::PageUp => KEY_PAGE_UP,
        KeyCode::PageDown => KEY_PAGE_DOWN,
        KeyCode::Insert => KEY_INSERT,
        KeyCode::Delete => KEY_DELETE,
        KeyCode::F(n @ 1..=12) => KEY_F1 + u16::from(n - 1),
        _ => KEY_UNKNOWN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn plain_char_is_its_scalar_value() {
        assert_eq!(encode(&plain(KeyCode::Char('A'))), 0x41);
        assert_eq!(encode(&plain(KeyCode::Char('é'))), 0xE9);
    }

    #[test]
    fn ctrl_letter_is_c0_control() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(encode(&key), 0x03);
        let key = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::CONTROL);
        assert_eq!(encode(&key), 0x03);
    }

    #[test]
    fn non_bmp_char_is_replacement() {
        let key = plain(KeyCode::Char('🦀'));
        assert_eq!(encode(&key), char::REPLACEMENT_CHARACTER as u16);
    }

    #[test]
    fn specials_map_to_named_constants() {
        assert_eq!(encode(&plain(KeyCode::Enter)), KEY_ENTER);
        assert_eq!(encode(&plain(KeyCode::Esc)), KEY_ESC);
        assert_eq!(encode(&plain(KeyCode::Up)), KEY_UP);
        assert_eq!(encode(&plain(KeyCode::F(1))), KEY_F1);
        assert_eq!(encode(&plain(KeyCode::F(12))), KEY_F1 + 11);
    }

    #[test]
    fn unmapped_key_is_unknown() {
        assert_eq!(encode(&plain(KeyCode::CapsLock)), KEY_UNKNOWN);
    }
}
