use crate::styles;
use crate::weather::WeatherQuery;
use iced::Color;

pub const HINT: &str = "🔍 Enter city name";

pub const HINT_COLOR: Color = styles::MUTED;
pub const ACTIVE_COLOR: Color = Color::WHITE;

/// Placeholder behaviour for the city text box.
///
/// While unfocused and empty the field holds the hint text in a muted colour.
/// Focusing clears the hint; blurring an empty field restores it.
#[derive(Debug, Clone, PartialEq)]
pub struct CityField {
    content: String,
    color: Color,
    focused: bool,
}

impl Default for CityField {
    fn default() -> Self {
        Self {
            content: HINT.to_string(),
            color: HINT_COLOR,
            focused: false,
        }
    }
}

impl CityField {
    pub fn focus(&mut self) {
        self.focused = true;
        if self.content == HINT {
            self.content.clear();
            self.color = ACTIVE_COLOR;
        }
    }

    pub fn blur(&mut self) {
        self.focused = false;
        if self.content.is_empty() {
            self.content = HINT.to_string();
            self.color = HINT_COLOR;
        }
    }

    /// New text typed by the user. Typing implies focus.
    pub fn edit(&mut self, value: String) {
        self.focus();
        self.content = value;
        self.color = ACTIVE_COLOR;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// True while the unfocused field holds the hint.
    pub fn shows_hint(&self) -> bool {
        !self.focused && self.content == HINT
    }

    /// The text to put in the input widget. A resting hint is drawn as the
    /// widget's placeholder; text the user typed is always shown as typed.
    pub fn value(&self) -> &str {
        if self.shows_hint() {
            ""
        } else {
            &self.content
        }
    }

    pub fn placeholder(&self) -> &str {
        if self.is_focused() {
            ""
        } else {
            HINT
        }
    }

    /// `None` for empty, blank or hint-only content.
    pub fn query(&self) -> Option<WeatherQuery> {
        let city = self.content.trim();
        if city == HINT {
            return None;
        }
        WeatherQuery::new(city)
    }
}
