//! Terminal host adapter built on crossterm.
//!
//! A TUI front end receives `crossterm::event::KeyEvent`s. These map onto the
//! core representation the same way AppKit events do, and configured
//! triggers map back to crossterm events so a TUI can match them directly.

use crossterm::event::{
    KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyEventState, KeyModifiers,
    MediaKeyCode, ModifierKeyCode,
};
use tracing::{debug, trace};

use super::Platform;
use crate::input::{Key, KeyAction, KeyEvent, Mods, Trigger};

/// Keypad keys and the characters crossterm reports for them.
const NUMPAD_CHARS: [(Key, char); 16] = [
    (Key::Numpad0, '0'),
    (Key::Numpad1, '1'),
    (Key::Numpad2, '2'),
    (Key::Numpad3, '3'),
    (Key::Numpad4, '4'),
    (Key::Numpad5, '5'),
    (Key::Numpad6, '6'),
    (Key::Numpad7, '7'),
    (Key::Numpad8, '8'),
    (Key::Numpad9, '9'),
    (Key::NumpadAdd, '+'),
    (Key::NumpadSubtract, '-'),
    (Key::NumpadMultiply, '*'),
    (Key::NumpadDivide, '/'),
    (Key::NumpadDecimal, '.'),
    (Key::NumpadEqual, '='),
];

/// The crossterm terminal platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

impl Platform for Terminal {
    type KeyCode = KeyCode;
    type Modifiers = KeyModifiers;

    fn key(code: KeyCode) -> Option<Key> {
        key_for_code(code)
    }

    fn mods(flags: KeyModifiers) -> Mods {
        mods_from_crossterm(flags, KeyEventState::NONE)
    }

    fn flags(mods: Mods) -> KeyModifiers {
        crossterm_from_mods(mods)
    }
}

/// Symbolic key for a crossterm key code.
#[must_use]
pub fn key_for_code(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Char(c) => Key::from_char(c).or_else(|| Key::from_shifted_char(c)),
        KeyCode::F(n) => Key::function(n),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Left => Some(Key::ArrowLeft),
        KeyCode::Right => Some(Key::ArrowRight),
        KeyCode::Up => Some(Key::ArrowUp),
        KeyCode::Down => Some(Key::ArrowDown),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::CapsLock => Some(Key::CapsLock),
        KeyCode::ScrollLock => Some(Key::ScrollLock),
        KeyCode::NumLock => Some(Key::NumLock),
        KeyCode::PrintScreen => Some(Key::PrintScreen),
        KeyCode::Pause => Some(Key::Pause),
        KeyCode::Menu => Some(Key::ContextMenu),
        KeyCode::Media(MediaKeyCode::LowerVolume) => Some(Key::AudioVolumeDown),
        KeyCode::Media(MediaKeyCode::RaiseVolume) => Some(Key::AudioVolumeUp),
        KeyCode::Media(MediaKeyCode::MuteVolume) => Some(Key::AudioVolumeMute),
        KeyCode::Modifier(modifier) => modifier_key(modifier),
        _ => None,
    };

    if key.is_none() {
        debug!(?code, "no key mapping for crossterm key code");
    }
    key
}

fn modifier_key(code: ModifierKeyCode) -> Option<Key> {
    let key = match code {
        ModifierKeyCode::LeftShift => Key::ShiftLeft,
        ModifierKeyCode::RightShift => Key::ShiftRight,
        ModifierKeyCode::LeftControl => Key::ControlLeft,
        ModifierKeyCode::RightControl => Key::ControlRight,
        ModifierKeyCode::LeftAlt => Key::AltLeft,
        ModifierKeyCode::RightAlt => Key::AltRight,
        ModifierKeyCode::LeftSuper => Key::MetaLeft,
        ModifierKeyCode::RightSuper => Key::MetaRight,
        _ => return None,
    };
    Some(key)
}

/// Core modifiers for crossterm modifiers and lock state.
///
/// Crossterm has no notion of sides, so no side bits are ever set. Hyper and
/// meta have no core counterpart and are dropped.
#[must_use]
pub fn mods_from_crossterm(modifiers: KeyModifiers, state: KeyEventState) -> Mods {
    let mut mods = Mods::empty();
    if modifiers.contains(KeyModifiers::SHIFT) {
        mods |= Mods::SHIFT;
    }
    if modifiers.contains(KeyModifiers::CONTROL) {
        mods |= Mods::CTRL;
    }
    if modifiers.contains(KeyModifiers::ALT) {
        mods |= Mods::ALT;
    }
    if modifiers.contains(KeyModifiers::SUPER) {
        mods |= Mods::SUPER;
    }
    if state.contains(KeyEventState::CAPS_LOCK) {
        mods |= Mods::CAPS;
    }
    if state.contains(KeyEventState::NUM_LOCK) {
        mods |= Mods::NUM;
    }
    mods
}

/// Crossterm modifiers for core modifiers.
#[must_use]
pub fn crossterm_from_mods(mods: Mods) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if mods.contains(Mods::SHIFT) {
        modifiers |= KeyModifiers::SHIFT;
    }
    if mods.contains(Mods::CTRL) {
        modifiers |= KeyModifiers::CONTROL;
    }
    if mods.contains(Mods::ALT) {
        modifiers |= KeyModifiers::ALT;
    }
    if mods.contains(Mods::SUPER) {
        modifiers |= KeyModifiers::SUPER;
    }
    modifiers
}

/// Translates a crossterm key event into a core key event.
#[must_use]
pub fn translate(event: CrosstermKeyEvent) -> KeyEvent {
    let action = match event.kind {
        KeyEventKind::Press => KeyAction::Press,
        KeyEventKind::Repeat => KeyAction::Repeat,
        KeyEventKind::Release => KeyAction::Release,
    };

    let mut mods = mods_from_crossterm(event.modifiers, event.state);
    let keypad = event.state.contains(KeyEventState::KEYPAD);
    match event.code {
        KeyCode::BackTab => mods |= Mods::SHIFT,
        // Legacy terminals send `!` without reporting shift.
        KeyCode::Char(c) if !keypad && Key::from_shifted_char(c).is_some() => {
            mods |= Mods::SHIFT;
        }
        _ => {}
    }

    let key = match event.code {
        KeyCode::Char(c) if keypad => numpad_key(c),
        KeyCode::Enter if keypad => Some(Key::NumpadEnter),
        code => key_for_code(code),
    };

    // Chords with ctrl, alt or super are for the core to encode, not text.
    let chord = mods.intersects(Mods::CTRL | Mods::ALT | Mods::SUPER);
    let text = match event.code {
        KeyCode::Char(c) if action != KeyAction::Release && !chord && !c.is_control() => {
            Some(c.to_string())
        }
        _ => None,
    };

    let consumed_mods = if text.is_some() && mods.contains(Mods::SHIFT) {
        Mods::SHIFT
    } else {
        Mods::empty()
    };

    let translated = KeyEvent {
        action,
        key,
        mods,
        consumed_mods,
        text,
        unshifted_codepoint: key.and_then(Key::to_char),
        composing: false,
    };

    trace!(?event, ?translated, "translated crossterm key event");
    translated
}

fn numpad_key(c: char) -> Option<Key> {
    NUMPAD_CHARS
        .iter()
        .find(|&&(_, ch)| ch == c)
        .map(|&(key, _)| key)
}

/// The crossterm event a TUI receives for a trigger.
///
/// Writing system keys held with shift are reported by terminals as their
/// shifted character (`K`, `!`), and shift+tab as `BackTab`. Both are
/// reproduced here.
/// Returns `None` for keys crossterm cannot express.
#[must_use]
pub fn trigger_to_crossterm(trigger: &Trigger) -> Option<CrosstermKeyEvent> {
    let mods = trigger.mods.binding();
    let shift = mods.contains(Mods::SHIFT);
    let modifiers = crossterm_from_mods(mods);

    if let Some(&(_, c)) = NUMPAD_CHARS.iter().find(|&&(k, _)| k == trigger.key) {
        return Some(CrosstermKeyEvent::new_with_kind_and_state(
            KeyCode::Char(c),
            modifiers,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        ));
    }

    if trigger.key == Key::NumpadEnter {
        return Some(CrosstermKeyEvent::new_with_kind_and_state(
            KeyCode::Enter,
            modifiers,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        ));
    }

    let code = match trigger.key {
        key if key.to_char().is_some() => {
            let shifted = if shift { key.to_shifted_char() } else { None };
            KeyCode::Char(shifted.or_else(|| key.to_char())?)
        }
        Key::Tab if shift => KeyCode::BackTab,
        Key::Tab => KeyCode::Tab,
        Key::Enter => KeyCode::Enter,
        Key::Backspace => KeyCode::Backspace,
        Key::Delete => KeyCode::Delete,
        Key::Insert => KeyCode::Insert,
        Key::Home => KeyCode::Home,
        Key::End => KeyCode::End,
        Key::PageUp => KeyCode::PageUp,
        Key::PageDown => KeyCode::PageDown,
        Key::ArrowUp => KeyCode::Up,
        Key::ArrowDown => KeyCode::Down,
        Key::ArrowLeft => KeyCode::Left,
        Key::ArrowRight => KeyCode::Right,
        Key::Escape => KeyCode::Esc,
        Key::CapsLock => KeyCode::CapsLock,
        Key::NumLock => KeyCode::NumLock,
        Key::ScrollLock => KeyCode::ScrollLock,
        Key::PrintScreen => KeyCode::PrintScreen,
        Key::Pause => KeyCode::Pause,
        Key::ContextMenu => KeyCode::Menu,
        Key::AudioVolumeDown => KeyCode::Media(MediaKeyCode::LowerVolume),
        Key::AudioVolumeUp => KeyCode::Media(MediaKeyCode::RaiseVolume),
        Key::AudioVolumeMute => KeyCode::Media(MediaKeyCode::MuteVolume),
        Key::ShiftLeft => KeyCode::Modifier(ModifierKeyCode::LeftShift),
        Key::ShiftRight => KeyCode::Modifier(ModifierKeyCode::RightShift),
        Key::ControlLeft => KeyCode::Modifier(ModifierKeyCode::LeftControl),
        Key::ControlRight => KeyCode::Modifier(ModifierKeyCode::RightControl),
        Key::AltLeft => KeyCode::Modifier(ModifierKeyCode::LeftAlt),
        Key::AltRight => KeyCode::Modifier(ModifierKeyCode::RightAlt),
        Key::MetaLeft => KeyCode::Modifier(ModifierKeyCode::LeftSuper),
        Key::MetaRight => KeyCode::Modifier(ModifierKeyCode::RightSuper),
        key => KeyCode::F(key.function_number()?),
    };

    Some(CrosstermKeyEvent::new(code, modifiers))
}
