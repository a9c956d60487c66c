//! Shared light/dark theme flag
//!
//! One flag per application instance, handed to every consumer through
//! the application state. Readers subscribe and see every toggle.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Cloneable handle on the shared flag. All clones observe the same value.
#[derive(Debug, Clone)]
pub struct ThemeHandle {
    sender: Arc<watch::Sender<Theme>>,
}

impl ThemeHandle {
    pub fn new(initial: Theme) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Theme {
        *self.sender.borrow()
    }

    pub fn set(&self, theme: Theme) {
        self.sender.send_replace(theme);
    }

    /// Flip the flag and return the new value
    pub fn toggle(&self) -> Theme {
        let mut next = Theme::default();
        self.sender.send_modify(|theme| {
            *theme = theme.toggled();
            next = *theme;
        });
        next
    }

    pub fn subscribe(&self) -> watch::Receiver<Theme> {
        self.sender.subscribe()
    }
}

impl Default for ThemeHandle {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}
