//! Keyboard triggers: a key plus the modifiers that must be held.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use super::{Key, KeyEvent, Mods, ParseError};

/// A configured keyboard shortcut.
///
/// Triggers compare and hash on [`Mods::binding`], so side and lock bits never
/// change which trigger an event matches.
#[derive(Debug, Clone, Copy)]
pub struct Trigger {
    /// The physical key
    pub key: Key,
    /// Modifiers held with the key
    pub mods: Mods,
}

impl Trigger {
    /// Create a new trigger.
    #[must_use]
    pub const fn new(key: Key, mods: Mods) -> Self {
        Self { key, mods }
    }

    /// The trigger a key event would fire, if its key is known.
    #[must_use]
    pub fn from_event(event: &KeyEvent) -> Option<Self> {
        event.key.map(|key| Self::new(key, event.mods))
    }
}

impl PartialEq for Trigger {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.mods.binding() == other.mods.binding()
    }
}

impl Eq for Trigger {}

impl Hash for Trigger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
        self.mods.binding().hash(state);
    }
}

impl FromStr for Trigger {
    type Err = ParseError;

    /// Parses `mod+mod+key`.
    ///
    /// The key part is either a key name (`arrow_up`) or a single character
    /// on the US layout (`a`, `,`). A literal `+` key is written `equal` with
    /// shift, so `+` always separates parts.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseError::EmptyTrigger);
        }

        let mut parts: Vec<&str> = input.split('+').map(str::trim).collect();
        let key_part = parts.pop().unwrap_or_default();
        if key_part.is_empty() {
            return Err(ParseError::MissingKey(input.to_string()));
        }

        let mut mods = Mods::empty();
        for part in parts {
            mods |= Mods::from_alias(part)
                .ok_or_else(|| ParseError::UnknownModifier(part.to_string()))?;
        }

        let key =
            parse_key(key_part).ok_or_else(|| ParseError::UnknownKey(key_part.to_string()))?;

        Ok(Self::new(key, mods))
    }
}

/// Resolves the key part of a trigger.
fn parse_key(part: &str) -> Option<Key> {
    let mut chars = part.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Key::from_char(c);
    }
    Key::from_name(&part.to_ascii_lowercase())
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mods = self.mods.binding();
        if mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", mods, self.key)
        }
    }
}

impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
