//! Translation of AppKit key events into core key events.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::flags::{mods_from_flags, ModifierFlags};
use super::keycode::key_for_code;
use crate::input::{Key, KeyAction, KeyEvent, Mods};

/// First and last scalar AppKit reserves for function keys.
const FUNCTION_KEY_RANGE: std::ops::RangeInclusive<u32> = 0xF700..=0xF8FF;

/// Which `NSEvent.EventType` produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeKind {
    /// `.keyDown`
    KeyDown,
    /// `.keyUp`
    KeyUp,
    /// `.flagsChanged`, sent when a modifier key goes down or up
    FlagsChanged,
}

/// The fields of an `NSEvent` that key translation reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeKeyEvent {
    /// Event type
    pub kind: NativeKind,
    /// `keyCode`
    pub key_code: u16,
    /// `modifierFlags.rawValue`
    pub modifier_flags: u64,
    /// `characters`
    #[serde(default)]
    pub characters: Option<String>,
    /// `charactersIgnoringModifiers`
    #[serde(default)]
    pub characters_ignoring_modifiers: Option<String>,
    /// `isARepeat`
    #[serde(default)]
    pub is_repeat: bool,
    /// The view has marked text from an input method
    #[serde(default)]
    pub composing: bool,
}

impl NativeKeyEvent {
    /// A key down event with no text.
    #[must_use]
    pub fn key_down(key_code: u16, modifier_flags: ModifierFlags) -> Self {
        Self {
            kind: NativeKind::KeyDown,
            key_code,
            modifier_flags: modifier_flags.bits(),
            characters: None,
            characters_ignoring_modifiers: None,
            is_repeat: false,
            composing: false,
        }
    }

    /// Sets `characters` and `charactersIgnoringModifiers`.
    #[must_use]
    pub fn with_characters(mut self, characters: &str, ignoring_modifiers: &str) -> Self {
        self.characters = Some(characters.to_string());
        self.characters_ignoring_modifiers = Some(ignoring_modifiers.to_string());
        self
    }

    /// The modifier flags as typed flags.
    #[must_use]
    pub const fn flags(&self) -> ModifierFlags {
        ModifierFlags::from_bits_retain(self.modifier_flags)
    }
}

/// Which option keys act as alt instead of composing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OptionAsAlt {
    /// Option always composes characters (macOS default)
    #[default]
    None,
    /// Left option acts as alt
    Left,
    /// Right option acts as alt
    Right,
    /// Both option keys act as alt
    Both,
}

impl OptionAsAlt {
    /// Whether the option key held in `mods` should act as alt.
    #[must_use]
    pub fn applies(self, mods: Mods) -> bool {
        if !mods.contains(Mods::ALT) {
            return false;
        }
        let right = mods.is_right(Mods::ALT);
        match self {
            Self::None => false,
            Self::Left => !right,
            Self::Right => right,
            Self::Both => true,
        }
    }
}

/// Settings that change how native events translate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TranslateOptions {
    /// Option-as-alt behaviour
    pub option_as_alt: OptionAsAlt,
}

/// Translates an AppKit key event.
///
/// Returns `None` only for `flagsChanged` events whose key code is not a
/// modifier key. Key down and key up always produce an event, with `key`
/// unset when the code has no mapping.
#[must_use]
pub fn translate(event: &NativeKeyEvent, options: &TranslateOptions) -> Option<KeyEvent> {
    let flags = event.flags();
    let mods = mods_from_flags(flags);

    let translated = match event.kind {
        NativeKind::FlagsChanged => {
            let key = key_for_code(event.key_code)?;
            let action = if modifier_held(key, flags)? {
                KeyAction::Press
            } else {
                KeyAction::Release
            };
            KeyEvent::new(action, Some(key), mods)
        }
        NativeKind::KeyDown | NativeKind::KeyUp => {
            let action = match (event.kind, event.is_repeat) {
                (NativeKind::KeyUp, _) => KeyAction::Release,
                (_, true) => KeyAction::Repeat,
                _ => KeyAction::Press,
            };

            let text = if action == KeyAction::Release {
                None
            } else {
                event.characters.as_deref().and_then(filter_text)
            };

            let unshifted_codepoint = event
                .characters_ignoring_modifiers
                .as_deref()
                .and_then(|s| s.chars().next())
                .filter(|&c| is_printable(c));

            let consumed_mods = consumed_mods(mods, text.is_some(), options);

            KeyEvent {
                action,
                key: key_for_code(event.key_code),
                mods,
                consumed_mods,
                text,
                unshifted_codepoint,
                composing: event.composing,
            }
        }
    };

    trace!(
        kind = ?event.kind,
        key_code = event.key_code,
        ?translated,
        "translated appkit key event"
    );
    Some(translated)
}

/// Whether a modifier key is down according to the flags of its
/// `flagsChanged` event. `None` if `key` is not a modifier AppKit reports.
fn modifier_held(key: Key, flags: ModifierFlags) -> Option<bool> {
    let (base, this_side, other_side) = match key {
        Key::CapsLock => return Some(flags.contains(ModifierFlags::CAPS_LOCK)),
        Key::ShiftLeft => (
            ModifierFlags::SHIFT,
            ModifierFlags::LEFT_SHIFT,
            ModifierFlags::RIGHT_SHIFT,
        ),
        Key::ShiftRight => (
            ModifierFlags::SHIFT,
            ModifierFlags::RIGHT_SHIFT,
            ModifierFlags::LEFT_SHIFT,
        ),
        Key::ControlLeft => (
            ModifierFlags::CONTROL,
            ModifierFlags::LEFT_CONTROL,
            ModifierFlags::RIGHT_CONTROL,
        ),
        Key::ControlRight => (
            ModifierFlags::CONTROL,
            ModifierFlags::RIGHT_CONTROL,
            ModifierFlags::LEFT_CONTROL,
        ),
        Key::AltLeft => (
            ModifierFlags::OPTION,
            ModifierFlags::LEFT_OPTION,
            ModifierFlags::RIGHT_OPTION,
        ),
        Key::AltRight => (
            ModifierFlags::OPTION,
            ModifierFlags::RIGHT_OPTION,
            ModifierFlags::LEFT_OPTION,
        ),
        Key::MetaLeft => (
            ModifierFlags::COMMAND,
            ModifierFlags::LEFT_COMMAND,
            ModifierFlags::RIGHT_COMMAND,
        ),
        Key::MetaRight => (
            ModifierFlags::COMMAND,
            ModifierFlags::RIGHT_COMMAND,
            ModifierFlags::LEFT_COMMAND,
        ),
        _ => return None,
    };

    if !flags.contains(base) {
        return Some(false);
    }

    // Synthesized events may carry no device bits at all; trust the base flag.
    let has_device_bits = flags.intersects(this_side | other_side);
    Some(!has_device_bits || flags.contains(this_side))
}

/// Modifiers AppKit used up while producing `text`.
fn consumed_mods(mods: Mods, has_text: bool, options: &TranslateOptions) -> Mods {
    if !has_text {
        return Mods::empty();
    }

    let mut consumed = Mods::empty();
    if mods.contains(Mods::SHIFT) {
        consumed |= Mods::SHIFT;
    }
    if mods.contains(Mods::ALT) && !options.option_as_alt.applies(mods) {
        consumed |= Mods::ALT;
    }
    consumed
}

fn is_printable(c: char) -> bool {
    !c.is_control() && !FUNCTION_KEY_RANGE.contains(&u32::from(c))
}

/// Strips control characters and AppKit function-key characters.
fn filter_text(characters: &str) -> Option<String> {
    let text: String = characters.chars().filter(|&c| is_printable(c)).collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn defaults() -> TranslateOptions {
        TranslateOptions::default()
    }

    #[test]
    fn test_plain_key_down() {
        let native =
            NativeKeyEvent::key_down(0x00, ModifierFlags::empty()).with_characters("a", "a");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.action, KeyAction::Press);
        assert_eq!(event.key, Some(Key::KeyA));
        assert_eq!(event.mods, Mods::empty());
        assert_eq!(event.text.as_deref(), Some("a"));
        assert_eq!(event.unshifted_codepoint, Some('a'));
        assert_eq!(event.consumed_mods, Mods::empty());
    }

    #[test]
    fn test_repeat_and_release() {
        let mut native =
            NativeKeyEvent::key_down(0x00, ModifierFlags::empty()).with_characters("a", "a");
        native.is_repeat = true;
        assert_eq!(
            translate(&native, &defaults()).unwrap().action,
            KeyAction::Repeat
        );

        native.kind = NativeKind::KeyUp;
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.action, KeyAction::Release);
        assert_eq!(event.text, None);
    }

    #[test]
    fn test_unknown_code_still_translates() {
        let native =
            NativeKeyEvent::key_down(0x34, ModifierFlags::empty()).with_characters("x", "x");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.key, None);
        assert_eq!(event.text.as_deref(), Some("x"));
    }

    #[test]
    fn test_function_key_characters_are_dropped() {
        let native = NativeKeyEvent::key_down(0x7E, ModifierFlags::empty())
            .with_characters("\u{F700}", "\u{F700}");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.key, Some(Key::ArrowUp));
        assert_eq!(event.text, None);
        assert_eq!(event.unshifted_codepoint, None);
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let flags = ModifierFlags::CONTROL | ModifierFlags::LEFT_CONTROL;
        let native = NativeKeyEvent::key_down(0x08, flags).with_characters("\u{3}", "c");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.text, None);
        assert_eq!(event.unshifted_codepoint, Some('c'));
        assert_eq!(event.mods, Mods::CTRL);
    }

    #[test]
    fn test_shift_consumed_by_text() {
        let flags = ModifierFlags::SHIFT | ModifierFlags::LEFT_SHIFT;
        let native = NativeKeyEvent::key_down(0x00, flags).with_characters("A", "a");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.consumed_mods, Mods::SHIFT);
        assert_eq!(event.effective_mods(), Mods::empty());
    }

    #[test]
    fn test_option_composes_by_default() {
        let flags = ModifierFlags::OPTION | ModifierFlags::LEFT_OPTION;
        let native = NativeKeyEvent::key_down(0x00, flags).with_characters("å", "a");
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.consumed_mods, Mods::ALT);
    }

    #[test]
    fn test_option_as_alt_by_side() {
        let left_flags = ModifierFlags::OPTION | ModifierFlags::LEFT_OPTION;
        let right_flags = ModifierFlags::OPTION | ModifierFlags::RIGHT_OPTION;
        let left = NativeKeyEvent::key_down(0x00, left_flags).with_characters("å", "a");
        let right = NativeKeyEvent::key_down(0x00, right_flags).with_characters("å", "a");

        let options = TranslateOptions {
            option_as_alt: OptionAsAlt::Left,
        };
        assert_eq!(
            translate(&left, &options).unwrap().consumed_mods,
            Mods::empty()
        );
        assert_eq!(
            translate(&right, &options).unwrap().consumed_mods,
            Mods::ALT
        );

        let options = TranslateOptions {
            option_as_alt: OptionAsAlt::Both,
        };
        assert_eq!(
            translate(&right, &options).unwrap().consumed_mods,
            Mods::empty()
        );
    }

    #[test]
    fn test_flags_changed_press_and_release() {
        let flags = ModifierFlags::COMMAND | ModifierFlags::RIGHT_COMMAND;
        let mut native = NativeKeyEvent::key_down(0x36, flags);
        native.kind = NativeKind::FlagsChanged;
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.key, Some(Key::MetaRight));
        assert_eq!(event.action, KeyAction::Press);
        assert_eq!(event.mods, Mods::SUPER | Mods::SUPER_RIGHT);

        // Right command released while left is still held.
        native.modifier_flags = (ModifierFlags::COMMAND | ModifierFlags::LEFT_COMMAND).bits();
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.action, KeyAction::Release);
    }

    #[test]
    fn test_flags_changed_without_device_bits() {
        let mut native = NativeKeyEvent::key_down(0x38, ModifierFlags::SHIFT);
        native.kind = NativeKind::FlagsChanged;
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.action, KeyAction::Press);

        native.modifier_flags = 0;
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.action, KeyAction::Release);
    }

    #[test]
    fn test_flags_changed_caps_lock() {
        let mut native = NativeKeyEvent::key_down(0x39, ModifierFlags::CAPS_LOCK);
        native.kind = NativeKind::FlagsChanged;
        let event = translate(&native, &defaults()).unwrap();
        assert_eq!(event.key, Some(Key::CapsLock));
        assert_eq!(event.action, KeyAction::Press);
        assert_eq!(event.mods, Mods::CAPS);
    }

    #[test]
    fn test_flags_changed_for_non_modifier_is_ignored() {
        let mut native = NativeKeyEvent::key_down(0x00, ModifierFlags::empty());
        native.kind = NativeKind::FlagsChanged;
        assert_eq!(translate(&native, &defaults()), None);

        native.key_code = 0x3F;
        assert_eq!(translate(&native, &defaults()), None);
    }
}
