//! Keyboard shortcut registry and documentation.

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, ctrl: bool, description: &'static str) -> Self {
        Self {
            key,
            ctrl,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Z").
    pub fn format(&self) -> String {
        if self.ctrl {
            format!("Ctrl+{}", self.key)
        } else {
            self.key.to_owned()
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Enter", false, "Solve the current drawing"),
            Shortcut::new("P", false, "Select the pen"),
            Shortcut::new("E", false, "Select the eraser"),
            Shortcut::new("Escape", false, "Cancel the stroke being drawn"),
            Shortcut::new("Z", true, "Undo the last stroke"),
        ]
    }
}
