//! Mobile navigation menu state.

/// Whether the mobile menu panel is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// The panel carries the `hidden` attribute while closed.
    pub fn is_hidden(self) -> bool {
        !self.is_open()
    }

    /// Glyph shown on the menu toggle control.
    pub fn glyph(self) -> &'static str {
        match self {
            MenuState::Closed => "☰",
            MenuState::Open => "✕",
        }
    }
}
