//! Menu key equivalents.
//!
//! AppKit menus describe a shortcut as a `keyEquivalent` string plus a
//! modifier mask. Only keys that produce a character, or that AppKit assigns
//! a function-key character to, can be shown; everything else has no
//! equivalent and the menu item is displayed without a shortcut.

use serde::Serialize;
use std::fmt;

use super::flags::{flags_from_mods, ModifierFlags};
use crate::input::{Key, Trigger};

/// `NSUpArrowFunctionKey`
const UP_ARROW: char = '\u{F700}';
/// `NSDownArrowFunctionKey`
const DOWN_ARROW: char = '\u{F701}';
/// `NSLeftArrowFunctionKey`
const LEFT_ARROW: char = '\u{F702}';
/// `NSRightArrowFunctionKey`
const RIGHT_ARROW: char = '\u{F703}';
/// `NSF1FunctionKey`; F2..F35 follow consecutively.
const F1: u32 = 0xF704;
/// `NSInsertFunctionKey`
const INSERT: char = '\u{F727}';
/// `NSDeleteFunctionKey`
const DELETE: char = '\u{F728}';
/// `NSHomeFunctionKey`
const HOME: char = '\u{F729}';
/// `NSEndFunctionKey`
const END: char = '\u{F72B}';
/// `NSPageUpFunctionKey`
const PAGE_UP: char = '\u{F72C}';
/// `NSPageDownFunctionKey`
const PAGE_DOWN: char = '\u{F72D}';

/// A platform menu shortcut.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyEquivalent {
    /// Value for `NSMenuItem.keyEquivalent`
    pub key: String,
    /// Value for `NSMenuItem.keyEquivalentModifierMask`
    pub modifiers: ModifierFlags,
}

/// The `keyEquivalent` character for a key.
#[must_use]
pub fn equivalent_char(key: Key) -> Option<char> {
    if let Some(c) = key.to_char() {
        return Some(c);
    }

    if let Some(n) = key.function_number() {
        return char::from_u32(F1 + u32::from(n) - 1);
    }

    let c = match key {
        Key::ArrowUp => UP_ARROW,
        Key::ArrowDown => DOWN_ARROW,
        Key::ArrowLeft => LEFT_ARROW,
        Key::ArrowRight => RIGHT_ARROW,
        Key::Insert => INSERT,
        Key::Delete => DELETE,
        Key::Home => HOME,
        Key::End => END,
        Key::PageUp => PAGE_UP,
        Key::PageDown => PAGE_DOWN,
        Key::Enter => '\r',
        Key::Tab => '\t',
        Key::Backspace => '\u{8}',
        Key::Escape => '\u{1b}',
        _ => return None,
    };
    Some(c)
}

/// Menu shortcut for a trigger, or `None` if AppKit cannot display it.
///
/// Letters stay lowercase with an explicit shift flag, so `shift+a` becomes
/// `"a"` with `.shift` rather than `"A"`.
#[must_use]
pub fn key_equivalent(trigger: &Trigger) -> Option<KeyEquivalent> {
    let c = equivalent_char(trigger.key)?;
    Some(KeyEquivalent {
        key: c.to_string(),
        modifiers: flags_from_mods(trigger.mods.binding()),
    })
}

impl KeyEquivalent {
    /// The key glyph macOS draws in menus.
    #[must_use]
    pub fn key_glyph(&self) -> String {
        let Some(c) = self.key.chars().next() else {
            return String::new();
        };

        let glyph = match c {
            UP_ARROW => "↑",
            DOWN_ARROW => "↓",
            LEFT_ARROW => "←",
            RIGHT_ARROW => "→",
            INSERT => "Ins",
            DELETE => "⌦",
            HOME => "↖",
            END => "↘",
            PAGE_UP => "⇞",
            PAGE_DOWN => "⇟",
            '\r' => "↩",
            '\t' => "⇥",
            '\u{8}' => "⌫",
            '\u{1b}' => "⎋",
            ' ' => "Space",
            _ => {
                let code = u32::from(c);
                if (F1..F1 + 35).contains(&code) {
                    return format!("F{}", code - F1 + 1);
                }
                return c.to_uppercase().collect();
            }
        };
        glyph.to_string()
    }
}

impl fmt::Display for KeyEquivalent {
    /// Formats like a menu: `⌃⌥⇧⌘` in Apple's order, then the key glyph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyphs = [
            (ModifierFlags::CONTROL, "⌃"),
            (ModifierFlags::OPTION, "⌥"),
            (ModifierFlags::SHIFT, "⇧"),
            (ModifierFlags::COMMAND, "⌘"),
        ];
        for (flag, glyph) in glyphs {
            if self.modifiers.contains(flag) {
                f.write_str(glyph)?;
            }
        }
        f.write_str(&self.key_glyph())
    }
}

impl Serialize for KeyEquivalent {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("KeyEquivalent", 3)?;
        state.serialize_field("key", &self.key)?;
        state.serialize_field("modifiers", &self.modifiers.bits())?;
        state.serialize_field("display", &self.to_string())?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Mods;

    fn equivalent(text: &str) -> Option<KeyEquivalent> {
        key_equivalent(&text.parse().unwrap())
    }

    #[test]
    fn test_letters_and_punctuation() {
        let eq = equivalent("super+c").unwrap();
        assert_eq!(eq.key, "c");
        assert_eq!(eq.modifiers, ModifierFlags::COMMAND);

        let eq = equivalent("super+shift+bracket_left").unwrap();
        assert_eq!(eq.key, "[");
        assert_eq!(eq.modifiers, ModifierFlags::COMMAND | ModifierFlags::SHIFT);

        assert_eq!(equivalent("super+equal").unwrap().key, "=");
        assert_eq!(equivalent("super+digit_0").unwrap().key, "0");
    }

    #[test]
    fn test_function_and_navigation_keys() {
        assert_eq!(equivalent("f1").unwrap().key, "\u{F704}");
        assert_eq!(equivalent("f12").unwrap().key, "\u{F70F}");
        assert_eq!(equivalent("f25").unwrap().key, "\u{F71C}");
        assert_eq!(equivalent("super+arrow_up").unwrap().key, "\u{F700}");
        assert_eq!(equivalent("super+arrow_right").unwrap().key, "\u{F703}");
        assert_eq!(equivalent("page_down").unwrap().key, "\u{F72D}");
        assert_eq!(equivalent("delete").unwrap().key, "\u{F728}");
        assert_eq!(equivalent("enter").unwrap().key, "\r");
        assert_eq!(equivalent("backspace").unwrap().key, "\u{8}");
    }

    #[test]
    fn test_keys_without_equivalent() {
        for key in [
            Key::Numpad1,
            Key::NumpadEnter,
            Key::ShiftLeft,
            Key::CapsLock,
            Key::AudioVolumeUp,
            Key::Lang1,
            Key::Fn,
            Key::ContextMenu,
        ] {
            assert_eq!(key_equivalent(&Trigger::new(key, Mods::SUPER)), None);
        }
    }

    #[test]
    fn test_every_key_is_handled_without_panicking() {
        for &key in Key::ALL {
            let _ = key_equivalent(&Trigger::new(key, Mods::all()));
        }
    }

    #[test]
    fn test_sides_and_locks_do_not_reach_menu() {
        let trigger = Trigger::new(Key::KeyT, Mods::SUPER | Mods::SUPER_RIGHT | Mods::CAPS);
        let eq = key_equivalent(&trigger).unwrap();
        assert_eq!(eq.modifiers, ModifierFlags::COMMAND);
    }

    #[test]
    fn test_display_glyphs() {
        assert_eq!(equivalent("super+shift+t").unwrap().to_string(), "⇧⌘T");
        assert_eq!(equivalent("ctrl+alt+super+arrow_left").unwrap().to_string(), "⌃⌥⌘←");
        assert_eq!(equivalent("super+f5").unwrap().to_string(), "⌘F5");
        assert_eq!(equivalent("super+enter").unwrap().to_string(), "⌘↩");
    }
}
