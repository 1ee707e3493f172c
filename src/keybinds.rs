//! Keybinding registry.
//!
//! Maps triggers to the action names the terminal core executes, and answers
//! the reverse question menus ask: which shortcut should be shown next to an
//! action, if any.

use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::input::{KeyEvent, ParseError, Trigger};
use crate::platform::appkit::{key_equivalent, KeyEquivalent};

/// Action name that removes a trigger instead of binding it.
pub const UNBIND: &str = "unbind";

/// Bindings every macOS install starts with.
const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    ("super+c", "copy_to_clipboard"),
    ("super+v", "paste_from_clipboard"),
    ("super+a", "select_all"),
    ("super+k", "clear_screen"),
    ("super+equal", "increase_font_size:1"),
    ("super+shift+equal", "increase_font_size:1"),
    ("super+minus", "decrease_font_size:1"),
    ("super+digit_0", "reset_font_size"),
    ("super+n", "new_window"),
    ("super+t", "new_tab"),
    ("super+w", "close_surface"),
    ("super+shift+w", "close_window"),
    ("super+q", "quit"),
    ("super+comma", "open_config"),
    ("super+shift+bracket_left", "previous_tab"),
    ("super+shift+bracket_right", "next_tab"),
    ("super+d", "new_split:right"),
    ("super+shift+d", "new_split:down"),
    ("super+bracket_left", "goto_split:previous"),
    ("super+bracket_right", "goto_split:next"),
    ("super+digit_1", "goto_tab:1"),
    ("super+digit_2", "goto_tab:2"),
    ("super+digit_3", "goto_tab:3"),
    ("super+digit_4", "goto_tab:4"),
    ("super+digit_5", "goto_tab:5"),
    ("super+digit_6", "goto_tab:6"),
    ("super+digit_7", "goto_tab:7"),
    ("super+digit_8", "goto_tab:8"),
    ("super+digit_9", "last_tab"),
    ("super+arrow_up", "jump_to_prompt:-1"),
    ("super+arrow_down", "jump_to_prompt:1"),
    ("super+home", "scroll_to_top"),
    ("super+end", "scroll_to_bottom"),
    ("super+page_up", "scroll_page_up"),
    ("super+page_down", "scroll_page_down"),
    ("super+enter", "toggle_fullscreen"),
    ("super+ctrl+f", "toggle_fullscreen"),
];

/// A single trigger bound to an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keybind {
    /// What the user presses
    pub trigger: Trigger,
    /// Action name, with an optional `:parameter`
    pub action: String,
}

/// Parses `trigger=action`.
///
/// Everything after the first `=` is the action, so actions may themselves
/// contain `=`. A trigger for the `=` key is written `equal`.
pub fn parse_binding(text: &str) -> Result<Keybind, ParseError> {
    let (trigger, action) = text
        .split_once('=')
        .ok_or_else(|| ParseError::MalformedBinding(text.to_string()))?;

    let action = action.trim();
    if action.is_empty() {
        return Err(ParseError::MissingAction(text.to_string()));
    }

    Ok(Keybind {
        trigger: trigger.parse()?,
        action: action.to_string(),
    })
}

/// Ordered set of keybindings with lookup in both directions.
#[derive(Debug, Clone, Default)]
pub struct Keybinds {
    /// Bindings in the order they were configured
    bindings: Vec<Keybind>,
    /// Trigger to index in `bindings`
    lookup: HashMap<Trigger, usize>,
}

impl Keybinds {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default macOS bindings.
    #[must_use]
    pub fn defaults() -> Self {
        let mut keybinds = Self::new();
        for &(text, action) in DEFAULT_BINDINGS {
            match text.parse() {
                Ok(trigger) => keybinds.bind(trigger, action),
                Err(err) => warn!(trigger = text, %err, "skipping invalid default keybinding"),
            }
        }
        keybinds
    }

    /// Binds a trigger, replacing any earlier binding for the same trigger.
    ///
    /// Binding to [`UNBIND`] removes the trigger instead.
    pub fn bind(&mut self, trigger: Trigger, action: &str) {
        self.unbind(&trigger);
        if action == UNBIND {
            return;
        }

        self.lookup.insert(trigger, self.bindings.len());
        self.bindings.push(Keybind {
            trigger,
            action: action.to_string(),
        });
    }

    /// Applies a `trigger=action` line.
    pub fn apply(&mut self, text: &str) -> Result<(), ParseError> {
        let keybind = parse_binding(text)?;
        self.bind(keybind.trigger, &keybind.action);
        Ok(())
    }

    /// Removes a trigger. Returns whether it was bound.
    pub fn unbind(&mut self, trigger: &Trigger) -> bool {
        let Some(idx) = self.lookup.remove(trigger) else {
            return false;
        };

        self.bindings.remove(idx);
        for slot in self.lookup.values_mut() {
            if *slot > idx {
                *slot -= 1;
            }
        }
        true
    }

    /// Action bound to a trigger.
    #[must_use]
    pub fn lookup(&self, trigger: &Trigger) -> Option<&str> {
        let idx = self.lookup.get(trigger)?;
        Some(self.bindings[*idx].action.as_str())
    }

    /// Action bound to the trigger a key event fires.
    #[must_use]
    pub fn lookup_event(&self, event: &KeyEvent) -> Option<&str> {
        self.lookup(&event.trigger()?)
    }

    /// First configured trigger for an action.
    #[must_use]
    pub fn trigger_for(&self, action: &str) -> Option<&Trigger> {
        self.bindings
            .iter()
            .find(|keybind| keybind.action == action)
            .map(|keybind| &keybind.trigger)
    }

    /// Menu shortcut to display for an action.
    ///
    /// Uses the first trigger for the action that AppKit can display, so an
    /// action bound to both a numpad key and a letter still gets a shortcut.
    #[must_use]
    pub fn menu_shortcut(&self, action: &str) -> Option<KeyEquivalent> {
        let equivalent = self
            .bindings
            .iter()
            .filter(|keybind| keybind.action == action)
            .find_map(|keybind| key_equivalent(&keybind.trigger));

        if equivalent.is_none() {
            debug!(action, "no menu shortcut for action");
        }
        equivalent
    }

    /// All bindings in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Keybind> {
        self.bindings.iter()
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether there are no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
