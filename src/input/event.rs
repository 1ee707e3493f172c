//! Key events as delivered to the terminal core.

use serde::{Deserialize, Serialize};

use super::{Key, Mods, Trigger};

/// What happened to the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Key went down
    #[default]
    Press,
    /// Key came up
    Release,
    /// Key is held and auto-repeating
    Repeat,
}

/// A translated key event.
///
/// `key` is `None` when the platform key code has no mapping. The event is
/// still worth forwarding: the core can act on its text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KeyEvent {
    /// Press, release or repeat
    pub action: KeyAction,
    /// Physical key, if known
    pub key: Option<Key>,
    /// Modifiers held during the event
    pub mods: Mods,
    /// Modifiers the platform already used to produce `text`
    pub consumed_mods: Mods,
    /// Text produced by the key, after the platform's layout translation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Codepoint the key produces with no modifiers applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unshifted_codepoint: Option<char>,
    /// An input method is composing; the core should not encode this key
    pub composing: bool,
}

impl KeyEvent {
    /// Create an event with only action, key and modifiers set.
    #[must_use]
    pub fn new(action: KeyAction, key: Option<Key>, mods: Mods) -> Self {
        Self {
            action,
            key,
            mods,
            ..Self::default()
        }
    }

    /// The trigger this event would fire.
    #[must_use]
    pub fn trigger(&self) -> Option<Trigger> {
        Trigger::from_event(self)
    }

    /// Modifiers that are still significant after text translation.
    #[must_use]
    pub fn effective_mods(&self) -> Mods {
        (self.mods - self.consumed_mods.binding()).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_requires_key() {
        let event = KeyEvent::new(KeyAction::Press, Some(Key::KeyV), Mods::SUPER);
        assert_eq!(
            event.trigger(),
            Some(Trigger::new(Key::KeyV, Mods::SUPER))
        );

        let event = KeyEvent::new(KeyAction::Press, None, Mods::SUPER);
        assert_eq!(event.trigger(), None);
    }

    #[test]
    fn test_effective_mods_drops_consumed() {
        let event = KeyEvent {
            mods: Mods::ALT | Mods::ALT_RIGHT | Mods::SHIFT,
            consumed_mods: Mods::ALT,
            ..KeyEvent::default()
        };
        assert_eq!(event.effective_mods(), Mods::SHIFT);
    }

    #[test]
    fn test_serialize_skips_missing_text() {
        let event = KeyEvent::new(KeyAction::Release, Some(Key::Enter), Mods::empty());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["action"], "release");
        assert_eq!(json["key"], "enter");
        assert!(json.get("text").is_none());
    }
}
