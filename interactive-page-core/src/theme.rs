//! Theme toggle

/// Visual theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeState {
    #[default]
    Light,
    Dark,
}

impl ThemeState {
    /// The other theme
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Attribute value as written on the page root
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Owns the theme attribute and the toggle control's label.
///
/// The label always names the theme a click would switch *to*.
#[derive(Debug, Clone, Default)]
pub struct ThemeController {
    state: ThemeState,
}

impl ThemeController {
    pub fn new(initial: ThemeState) -> Self {
        Self { state: initial }
    }

    pub fn state(&self) -> ThemeState {
        self.state
    }

    /// Toggle control label for the current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            ThemeState::Dark => "☀️ Light Mode",
            ThemeState::Light => "🌓 Dark Mode",
        }
    }

    /// Handle a click on the toggle. Returns the new state.
    pub fn toggle(&mut self) -> ThemeState {
        self.state = self.state.flipped();
        log::debug!("theme switched to {}", self.state.as_str());
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        let theme = ThemeController::default();
        assert_eq!(theme.state(), ThemeState::Light);
        assert_eq!(theme.label(), "🌓 Dark Mode");
    }

    #[test]
    fn test_label_names_the_next_action() {
        let mut theme = ThemeController::default();
        assert_eq!(theme.toggle(), ThemeState::Dark);
        assert_eq!(theme.state().as_str(), "dark");
        assert_eq!(theme.label(), "☀️ Light Mode");
    }

    #[test]
    fn test_toggle_twice_restores_attribute_and_label() {
        let mut theme = ThemeController::new(ThemeState::Dark);
        let (state, label) = (theme.state(), theme.label());
        theme.toggle();
        theme.toggle();
        assert_eq!(theme.state(), state);
        assert_eq!(theme.label(), label);
    }
}
