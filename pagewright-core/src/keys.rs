//! Keyboard shortcut resolution.
//!
//! | Keys                           | Shortcut          | While typing |
//! |--------------------------------|-------------------|--------------|
//! | Ctrl/Cmd+Z                     | undo              | no           |
//! | Ctrl/Cmd+Y, Ctrl/Cmd+Shift+Z   | redo              | no           |
//! | Ctrl/Cmd+D                     | duplicate         | no           |
//! | Ctrl/Cmd+S                     | save project      | yes          |
//! | Delete                         | delete selected   | no           |
//! | Escape                         | clear transients  | no           |
//! | Ctrl/Cmd+= / Ctrl/Cmd+-        | zoom in / out     | no           |
//! | Ctrl/Cmd+0                     | reset zoom        | no           |

use serde::{Deserialize, Serialize};

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct KeyModifiers {
    /// Shift key pressed.
    pub shift: bool,
    /// Control key pressed.
    pub ctrl: bool,
    /// Alt/Option key pressed.
    pub alt: bool,
    /// Meta/Command key pressed.
    pub meta: bool,
}

impl KeyModifiers {
    /// Control or Command held.
    #[must_use]
    pub const fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A key press.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPress {
    /// Key name as reported by the platform (`z`, `Delete`, `Escape`, ...).
    pub key: String,
    /// Active modifier keys.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// A key pressed without modifiers.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: KeyModifiers::default(),
        }
    }

    /// A key pressed with Control held.
    #[must_use]
    pub fn ctrl(key: impl Into<String>) -> Self {
        Self::new(key).with_ctrl()
    }

    /// Add Control.
    #[must_use]
    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Add Command.
    #[must_use]
    pub fn with_meta(mut self) -> Self {
        self.modifiers.meta = true;
        self
    }

    /// Add Shift.
    #[must_use]
    pub fn with_shift(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Editor actions bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Undo the last commit.
    Undo,
    /// Redo the last undo.
    Redo,
    /// Duplicate the selected element.
    Duplicate,
    /// Save the current project.
    SaveProject,
    /// Delete the selected element.
    DeleteSelected,
    /// Clear the selection and close transient panels.
    Escape,
    /// Zoom in one step.
    ZoomIn,
    /// Zoom out one step.
    ZoomOut,
    /// Reset zoom to 100%.
    ZoomReset,
}

impl Shortcut {
    /// Check if the shortcut fires while a text field has focus.
    #[must_use]
    pub const fn active_while_typing(self) -> bool {
        matches!(self, Self::SaveProject)
    }
}

/// Map a key press to a shortcut.
///
/// `typing` is true when a text field has focus.
#[must_use]
pub fn resolve(press: &KeyPress, typing: bool) -> Option<Shortcut> {
    let key = press.key.to_lowercase();
    let mods = press.modifiers;

    let shortcut = if mods.command() {
        match key.as_str() {
            "z" if mods.shift => Shortcut::Redo,
            "z" => Shortcut::Undo,
            "y" => Shortcut::Redo,
            "d" => Shortcut::Duplicate,
            "s" => Shortcut::SaveProject,
            "=" | "+" => Shortcut::ZoomIn,
            "-" => Shortcut::ZoomOut,
            "0" => Shortcut::ZoomReset,
            _ => return None,
        }
    } else {
        match key.as_str() {
            "delete" => Shortcut::DeleteSelected,
            "escape" => Shortcut::Escape,
            _ => return None,
        }
    };

    if typing && !shortcut.active_while_typing() {
        return None;
    }
    Some(shortcut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_shortcuts() {
        assert_eq!(resolve(&KeyPress::ctrl("z"), false), Some(Shortcut::Undo));
        assert_eq!(
            resolve(&KeyPress::new("z").with_meta(), false),
            Some(Shortcut::Undo)
        );
        assert_eq!(resolve(&KeyPress::ctrl("y"), false), Some(Shortcut::Redo));
        assert_eq!(
            resolve(&KeyPress::ctrl("Z").with_shift(), false),
            Some(Shortcut::Redo)
        );
        assert_eq!(
            resolve(&KeyPress::ctrl("d"), false),
            Some(Shortcut::Duplicate)
        );
        assert_eq!(resolve(&KeyPress::ctrl("="), false), Some(Shortcut::ZoomIn));
        assert_eq!(resolve(&KeyPress::ctrl("-"), false), Some(Shortcut::ZoomOut));
        assert_eq!(
            resolve(&KeyPress::ctrl("0"), false),
            Some(Shortcut::ZoomReset)
        );
    }

    #[test]
    fn test_plain_keys() {
        assert_eq!(
            resolve(&KeyPress::new("Delete"), false),
            Some(Shortcut::DeleteSelected)
        );
        assert_eq!(
            resolve(&KeyPress::new("Escape"), false),
            Some(Shortcut::Escape)
        );
        assert_eq!(resolve(&KeyPress::new("z"), false), None);
        assert_eq!(resolve(&KeyPress::ctrl("q"), false), None);
    }

    #[test]
    fn test_only_save_fires_while_typing() {
        assert_eq!(
            resolve(&KeyPress::ctrl("s"), true),
            Some(Shortcut::SaveProject)
        );
        assert_eq!(resolve(&KeyPress::new("Delete"), true), None);
        assert_eq!(resolve(&KeyPress::ctrl("z"), true), None);
        assert_eq!(resolve(&KeyPress::new("Escape"), true), None);
    }
}
