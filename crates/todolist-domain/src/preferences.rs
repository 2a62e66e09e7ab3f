/// Display preferences, stored apart from the task list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
}

impl Preferences {
    /// Only the exact string `"true"` enables dark mode.
    pub fn from_stored(dark_mode: Option<&str>) -> Self {
        Self {
            dark_mode: dark_mode == Some("true"),
        }
    }

    pub fn dark_mode_value(&self) -> &'static str {
        if self.dark_mode {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggle_dark_mode(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert!(Preferences::from_stored(Some("true")).dark_mode);
        assert!(!Preferences::from_stored(Some("false")).dark_mode);
        assert!(!Preferences::from_stored(Some("TRUE")).dark_mode);
        assert!(!Preferences::from_stored(None).dark_mode);
    }

    #[test]
    fn test_toggle_and_value() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.dark_mode_value(), "false");
        assert!(prefs.toggle_dark_mode());
        assert_eq!(prefs.dark_mode_value(), "true");
    }
}
