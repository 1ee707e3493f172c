//! Symbolic physical keys understood by the terminal core.
//!
//! Keys follow the W3C UI Events "code" set: they name a physical position on
//! a US layout, not the character it produces. Names are the snake case form
//! used in config files (`key_a`, `arrow_up`, `numpad_enter`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::Mods;

macro_rules! keys {
    ($( $(#[$doc:meta])* $variant:ident => $name:literal, )+) => {
        /// A physical key.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $(
                #[doc = concat!("`", $name, "`")]
                $(#[$doc])*
                $variant,
            )+
        }

        impl Key {
            /// Every key, in declaration order.
            pub const ALL: &'static [Self] = &[ $( Self::$variant, )+ ];

            /// Config name of the key.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )+
                }
            }

            /// Looks a key up by its config name.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

keys! {
    // Writing system keys
    Backquote => "backquote",
    Backslash => "backslash",
    BracketLeft => "bracket_left",
    BracketRight => "bracket_right",
    Comma => "comma",
    Digit0 => "digit_0",
    Digit1 => "digit_1",
    Digit2 => "digit_2",
    Digit3 => "digit_3",
    Digit4 => "digit_4",
    Digit5 => "digit_5",
    Digit6 => "digit_6",
    Digit7 => "digit_7",
    Digit8 => "digit_8",
    Digit9 => "digit_9",
    Equal => "equal",
    /// ISO key between left shift and Z.
    IntlBackslash => "intl_backslash",
    /// JIS `\ _` key next to right shift.
    IntlRo => "intl_ro",
    /// JIS yen key next to backspace.
    IntlYen => "intl_yen",
    KeyA => "key_a",
    KeyB => "key_b",
    KeyC => "key_c",
    KeyD => "key_d",
    KeyE => "key_e",
    KeyF => "key_f",
    KeyG => "key_g",
    KeyH => "key_h",
    KeyI => "key_i",
    KeyJ => "key_j",
    KeyK => "key_k",
    KeyL => "key_l",
    KeyM => "key_m",
    KeyN => "key_n",
    KeyO => "key_o",
    KeyP => "key_p",
    KeyQ => "key_q",
    KeyR => "key_r",
    KeyS => "key_s",
    KeyT => "key_t",
    KeyU => "key_u",
    KeyV => "key_v",
    KeyW => "key_w",
    KeyX => "key_x",
    KeyY => "key_y",
    KeyZ => "key_z",
    Minus => "minus",
    Period => "period",
    Quote => "quote",
    Semicolon => "semicolon",
    Slash => "slash",

    // Functional keys
    AltLeft => "alt_left",
    AltRight => "alt_right",
    Backspace => "backspace",
    CapsLock => "caps_lock",
    ContextMenu => "context_menu",
    ControlLeft => "control_left",
    ControlRight => "control_right",
    Enter => "enter",
    MetaLeft => "meta_left",
    MetaRight => "meta_right",
    ShiftLeft => "shift_left",
    ShiftRight => "shift_right",
    Space => "space",
    Tab => "tab",
    /// Kana key on JIS keyboards.
    Lang1 => "lang_1",
    /// Eisu key on JIS keyboards.
    Lang2 => "lang_2",
    Fn => "fn",

    // Control pad
    Delete => "delete",
    End => "end",
    Help => "help",
    Home => "home",
    Insert => "insert",
    PageDown => "page_down",
    PageUp => "page_up",

    // Arrow pad
    ArrowDown => "arrow_down",
    ArrowLeft => "arrow_left",
    ArrowRight => "arrow_right",
    ArrowUp => "arrow_up",

    // Numpad
    NumLock => "num_lock",
    Numpad0 => "numpad_0",
    Numpad1 => "numpad_1",
    Numpad2 => "numpad_2",
    Numpad3 => "numpad_3",
    Numpad4 => "numpad_4",
    Numpad5 => "numpad_5",
    Numpad6 => "numpad_6",
    Numpad7 => "numpad_7",
    Numpad8 => "numpad_8",
    Numpad9 => "numpad_9",
    NumpadAdd => "numpad_add",
    NumpadComma => "numpad_comma",
    NumpadDecimal => "numpad_decimal",
    NumpadDivide => "numpad_divide",
    NumpadEnter => "numpad_enter",
    NumpadEqual => "numpad_equal",
    NumpadMultiply => "numpad_multiply",
    NumpadSubtract => "numpad_subtract",

    // Function section
    Escape => "escape",
    F1 => "f1",
    F2 => "f2",
    F3 => "f3",
    F4 => "f4",
    F5 => "f5",
    F6 => "f6",
    F7 => "f7",
    F8 => "f8",
    F9 => "f9",
    F10 => "f10",
    F11 => "f11",
    F12 => "f12",
    F13 => "f13",
    F14 => "f14",
    F15 => "f15",
    F16 => "f16",
    F17 => "f17",
    F18 => "f18",
    F19 => "f19",
    F20 => "f20",
    F21 => "f21",
    F22 => "f22",
    F23 => "f23",
    F24 => "f24",
    F25 => "f25",
    PrintScreen => "print_screen",
    ScrollLock => "scroll_lock",
    Pause => "pause",

    // Media keys
    AudioVolumeDown => "audio_volume_down",
    AudioVolumeMute => "audio_volume_mute",
    AudioVolumeUp => "audio_volume_up",
}

impl Key {
    /// Maps an unshifted US layout character to the key that produces it.
    ///
    /// Uppercase ASCII letters map to the same key as their lowercase form.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let key = match c.to_ascii_lowercase() {
            'a' => Self::KeyA,
            'b' => Self::KeyB,
            'c' => Self::KeyC,
            'd' => Self::KeyD,
            'e' => Self::KeyE,
            'f' => Self::KeyF,
            'g' => Self::KeyG,
            'h' => Self::KeyH,
            'i' => Self::KeyI,
            'j' => Self::KeyJ,
            'k' => Self::KeyK,
            'l' => Self::KeyL,
            'm' => Self::KeyM,
            'n' => Self::KeyN,
            'o' => Self::KeyO,
            'p' => Self::KeyP,
            'q' => Self::KeyQ,
            'r' => Self::KeyR,
            's' => Self::KeyS,
            't' => Self::KeyT,
            'u' => Self::KeyU,
            'v' => Self::KeyV,
            'w' => Self::KeyW,
            'x' => Self::KeyX,
            'y' => Self::KeyY,
            'z' => Self::KeyZ,
            '0' => Self::Digit0,
            '1' => Self::Digit1,
            '2' => Self::Digit2,
            '3' => Self::Digit3,
            '4' => Self::Digit4,
            '5' => Self::Digit5,
            '6' => Self::Digit6,
            '7' => Self::Digit7,
            '8' => Self::Digit8,
            '9' => Self::Digit9,
            '`' => Self::Backquote,
            '\\' => Self::Backslash,
            '[' => Self::BracketLeft,
            ']' => Self::BracketRight,
            ',' => Self::Comma,
            '=' => Self::Equal,
            '-' => Self::Minus,
            '.' => Self::Period,
            '\'' => Self::Quote,
            ';' => Self::Semicolon,
            '/' => Self::Slash,
            ' ' => Self::Space,
            _ => return None,
        };
        Some(key)
    }

    /// Maps a shifted US layout symbol to the key that produces it (`!` -> Digit1).
    ///
    /// Letters are not covered; [`Key::from_char`] already folds case.
    #[must_use]
    pub const fn from_shifted_char(c: char) -> Option<Self> {
        let key = match c {
            ')' => Self::Digit0,
            '!' => Self::Digit1,
            '@' => Self::Digit2,
            '#' => Self::Digit3,
            '$' => Self::Digit4,
            '%' => Self::Digit5,
            '^' => Self::Digit6,
            '&' => Self::Digit7,
            '*' => Self::Digit8,
            '(' => Self::Digit9,
            '~' => Self::Backquote,
            '|' => Self::Backslash,
            '{' => Self::BracketLeft,
            '}' => Self::BracketRight,
            '<' => Self::Comma,
            '+' => Self::Equal,
            '_' => Self::Minus,
            '>' => Self::Period,
            '"' => Self::Quote,
            ':' => Self::Semicolon,
            '?' => Self::Slash,
            _ => return None,
        };
        Some(key)
    }

    /// The character a writing system key produces with shift held.
    #[must_use]
    pub const fn to_shifted_char(self) -> Option<char> {
        let c = match self {
            Self::Digit0 => ')',
            Self::Digit1 => '!',
            Self::Digit2 => '@',
            Self::Digit3 => '#',
            Self::Digit4 => '$',
            Self::Digit5 => '%',
            Self::Digit6 => '^',
            Self::Digit7 => '&',
            Self::Digit8 => '*',
            Self::Digit9 => '(',
            Self::Backquote => '~',
            Self::Backslash => '|',
            Self::BracketLeft => '{',
            Self::BracketRight => '}',
            Self::Comma => '<',
            Self::Equal => '+',
            Self::Minus => '_',
            Self::Period => '>',
            Self::Quote => '"',
            Self::Semicolon => ':',
            Self::Slash => '?',
            _ => match self.to_char() {
                Some(c) if c.is_ascii_lowercase() => c.to_ascii_uppercase(),
                _ => return None,
            },
        };
        Some(c)
    }

    /// The unshifted US layout character of a writing system key.
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        let c = match self {
            Self::KeyA => 'a',
            Self::KeyB => 'b',
            Self::KeyC => 'c',
            Self::KeyD => 'd',
            Self::KeyE => 'e',
            Self::KeyF => 'f',
            Self::KeyG => 'g',
            Self::KeyH => 'h',
            Self::KeyI => 'i',
            Self::KeyJ => 'j',
            Self::KeyK => 'k',
            Self::KeyL => 'l',
            Self::KeyM => 'm',
            Self::KeyN => 'n',
            Self::KeyO => 'o',
            Self::KeyP => 'p',
            Self::KeyQ => 'q',
            Self::KeyR => 'r',
            Self::KeyS => 's',
            Self::KeyT => 't',
            Self::KeyU => 'u',
            Self::KeyV => 'v',
            Self::KeyW => 'w',
            Self::KeyX => 'x',
            Self::KeyY => 'y',
            Self::KeyZ => 'z',
            Self::Digit0 => '0',
            Self::Digit1 => '1',
            Self::Digit2 => '2',
            Self::Digit3 => '3',
            Self::Digit4 => '4',
            Self::Digit5 => '5',
            Self::Digit6 => '6',
            Self::Digit7 => '7',
            Self::Digit8 => '8',
            Self::Digit9 => '9',
            Self::Backquote => '`',
            Self::Backslash => '\\',
            Self::BracketLeft => '[',
            Self::BracketRight => ']',
            Self::Comma => ',',
            Self::Equal => '=',
            Self::Minus => '-',
            Self::Period => '.',
            Self::Quote => '\'',
            Self::Semicolon => ';',
            Self::Slash => '/',
            Self::Space => ' ',
            _ => return None,
        };
        Some(c)
    }

    /// Function key F1..F25 by number.
    #[must_use]
    pub const fn function(n: u8) -> Option<Self> {
        let key = match n {
            1 => Self::F1,
            2 => Self::F2,
            3 => Self::F3,
            4 => Self::F4,
            5 => Self::F5,
            6 => Self::F6,
            7 => Self::F7,
            8 => Self::F8,
            9 => Self::F9,
            10 => Self::F10,
            11 => Self::F11,
            12 => Self::F12,
            13 => Self::F13,
            14 => Self::F14,
            15 => Self::F15,
            16 => Self::F16,
            17 => Self::F17,
            18 => Self::F18,
            19 => Self::F19,
            20 => Self::F20,
            21 => Self::F21,
            22 => Self::F22,
            23 => Self::F23,
            24 => Self::F24,
            25 => Self::F25,
            _ => return None,
        };
        Some(key)
    }

    /// Number of a function key (F1 -> 1).
    #[must_use]
    pub fn function_number(self) -> Option<u8> {
        (1..=25).find(|&n| Self::function(n) == Some(self))
    }

    /// The modifier bits a modifier key controls.
    ///
    /// Right-hand keys report the base bit plus its side bit. Caps lock and
    /// num lock report their lock bits.
    #[must_use]
    pub const fn modifier(self) -> Option<Mods> {
        let mods = match self {
            Self::ShiftLeft => Mods::SHIFT,
            Self::ShiftRight => Mods::SHIFT.union(Mods::SHIFT_RIGHT),
            Self::ControlLeft => Mods::CTRL,
            Self::ControlRight => Mods::CTRL.union(Mods::CTRL_RIGHT),
            Self::AltLeft => Mods::ALT,
            Self::AltRight => Mods::ALT.union(Mods::ALT_RIGHT),
            Self::MetaLeft => Mods::SUPER,
            Self::MetaRight => Mods::SUPER.union(Mods::SUPER_RIGHT),
            Self::CapsLock => Mods::CAPS,
            Self::NumLock => Mods::NUM,
            _ => return None,
        };
        Some(mods)
    }

    /// Whether this key is a modifier or lock key.
    #[must_use]
    pub const fn is_modifier(self) -> bool {
        self.modifier().is_some()
    }

    /// Whether this key sits on the numeric keypad.
    #[must_use]
    pub const fn is_numpad(self) -> bool {
        matches!(
            self,
            Self::Numpad0
                | Self::Numpad1
                | Self::Numpad2
                | Self::Numpad3
                | Self::Numpad4
                | Self::Numpad5
                | Self::Numpad6
                | Self::Numpad7
                | Self::Numpad8
                | Self::Numpad9
                | Self::NumpadAdd
                | Self::NumpadComma
                | Self::NumpadDecimal
                | Self::NumpadDivide
                | Self::NumpadEnter
                | Self::NumpadEqual
                | Self::NumpadMultiply
                | Self::NumpadSubtract
        )
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown key: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for &key in Key::ALL {
            assert!(seen.insert(key.name()), "duplicate name {}", key.name());
            assert_eq!(Key::from_name(key.name()), Some(key));
        }
        assert_eq!(Key::from_name("not_a_key"), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('a'), Some(Key::KeyA));
        assert_eq!(Key::from_char('A'), Some(Key::KeyA));
        assert_eq!(Key::from_char('0'), Some(Key::Digit0));
        assert_eq!(Key::from_char('['), Some(Key::BracketLeft));
        assert_eq!(Key::from_char(' '), Some(Key::Space));
        assert_eq!(Key::from_char('!'), None);
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn test_char_mapping_is_consistent() {
        for &key in Key::ALL {
            if let Some(c) = key.to_char() {
                assert_eq!(Key::from_char(c), Some(key));
            }
        }
    }

    #[test]
    fn test_shifted_chars() {
        assert_eq!(Key::from_shifted_char('!'), Some(Key::Digit1));
        assert_eq!(Key::from_shifted_char('?'), Some(Key::Slash));
        assert_eq!(Key::from_shifted_char('a'), None);
        assert_eq!(Key::Digit1.to_shifted_char(), Some('!'));
        assert_eq!(Key::KeyQ.to_shifted_char(), Some('Q'));
        assert_eq!(Key::Space.to_shifted_char(), None);

        for &key in Key::ALL {
            if let Some(c) = key.to_shifted_char() {
                let back = Key::from_shifted_char(c).or_else(|| Key::from_char(c));
                assert_eq!(back, Some(key), "{c}");
            }
        }
    }

    #[test]
    fn test_function_keys() {
        assert_eq!(Key::function(1), Some(Key::F1));
        assert_eq!(Key::function(25), Some(Key::F25));
        assert_eq!(Key::function(0), None);
        assert_eq!(Key::function(26), None);
        assert_eq!(Key::F12.function_number(), Some(12));
        assert_eq!(Key::KeyA.function_number(), None);
    }

    #[test]
    fn test_modifier_keys() {
        assert_eq!(Key::ShiftLeft.modifier(), Some(Mods::SHIFT));
        assert_eq!(
            Key::MetaRight.modifier(),
            Some(Mods::SUPER | Mods::SUPER_RIGHT)
        );
        assert!(Key::CapsLock.is_modifier());
        assert!(!Key::KeyA.is_modifier());
        assert!(Key::NumpadEnter.is_numpad());
        assert!(!Key::Enter.is_numpad());
    }

    #[test]
    fn test_serde_uses_names() {
        let json = serde_json::to_string(&Key::ArrowUp).unwrap();
        assert_eq!(json, "\"arrow_up\"");
        let key: Key = serde_json::from_str("\"page_down\"").unwrap();
        assert_eq!(key, Key::PageDown);
        assert!(serde_json::from_str::<Key>("\"bogus\"").is_err());
    }
}
