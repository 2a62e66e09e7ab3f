use super::colors::*;
use ratatui::style::{Color, Modifier, Style};
use todolist_domain::Preferences;

/// Colors for one of the two display modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub done: Color,
    pub selected_bg: Color,
    pub popup_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            background: LIGHT_BG,
            text: LIGHT_TEXT,
            muted: LIGHT_MUTED,
            done: LIGHT_DONE,
            selected_bg: LIGHT_SELECTED_BG,
            popup_bg: LIGHT_POPUP_BG,
        }
    }

    pub fn dark() -> Self {
        Self {
            background: DARK_BG,
            text: DARK_TEXT,
            muted: DARK_MUTED,
            done: DARK_DONE,
            selected_bg: DARK_SELECTED_BG,
            popup_bg: DARK_POPUP_BG,
        }
    }

    pub fn for_preferences(preferences: Preferences) -> Self {
        if preferences.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    pub fn focused_border(&self) -> Style {
        Style::default().fg(ACCENT)
    }

    pub fn unfocused_border(&self) -> Style {
        Style::default().fg(ACCENT_SOFT)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn normal_text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn label_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn done_text(&self) -> Style {
        Style::default()
            .fg(self.done)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn selected_item(&self, selected: bool) -> Style {
        if selected {
            Style::default().bg(self.selected_bg)
        } else {
            Style::default()
        }
    }

    pub fn popup(&self) -> Style {
        Style::default().bg(self.popup_bg).fg(self.text)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(ERROR_COLOR)
    }
}
