//! macOS AppKit adapter.
//!
//! Converts `NSEvent` key codes and modifier flags into core input types, and
//! core triggers into `NSMenuItem` key equivalents.

pub mod equivalent;
pub mod event;
pub mod flags;
pub mod keycode;

pub use equivalent::{key_equivalent, KeyEquivalent};
pub use event::{translate, NativeKeyEvent, NativeKind, OptionAsAlt, TranslateOptions};
pub use flags::{flags_from_mods, mods_from_flags, ModifierFlags};
pub use keycode::{code_for_key, key_for_code, KEYCODE_TABLE};

use super::Platform;
use crate::input::{Key, Mods};

/// The AppKit platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppKit;

impl Platform for AppKit {
    type KeyCode = u16;
    type Modifiers = ModifierFlags;

    fn key(code: u16) -> Option<Key> {
        key_for_code(code)
    }

    fn mods(flags: ModifierFlags) -> Mods {
        mods_from_flags(flags)
    }

    fn flags(mods: Mods) -> ModifierFlags {
        flags_from_mods(mods)
    }
}
