use iced::{
    theme,
    widget::{container, text_input},
    Background, Border, Color, Theme,
};

pub const WINDOW_BG: Color = Color { r: 0.071, g: 0.071, b: 0.071, a: 1.0 }; // #121212
pub const CARD_BG: Color = Color { r: 0.075, g: 0.075, b: 0.075, a: 1.0 }; // #131313
pub const CELL_BG: Color = Color { r: 0.118, g: 0.118, b: 0.118, a: 1.0 }; // #1e1e1e
pub const TITLE_BG: Color = Color { r: 0.051, g: 0.278, b: 0.631, a: 1.0 }; // #0d47a1
pub const ACCENT: Color = Color { r: 0.565, g: 0.792, b: 0.976, a: 1.0 }; // #90caf9
pub const MUTED: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 1.0 };
pub const WARNING: Color = Color { r: 1.0, g: 0.718, b: 0.302, a: 1.0 };
pub const ERROR: Color = Color { r: 0.937, g: 0.325, b: 0.314, a: 1.0 };

struct Panel {
    background: Color,
    radius: f32,
    border: Option<Color>,
}

impl container::StyleSheet for Panel {
    type Style = Theme;

    fn appearance(&self, _style: &Self::Style) -> container::Appearance {
        container::Appearance {
            text_color: Some(Color::WHITE),
            background: Some(Background::Color(self.background)),
            border: Border {
                color: self.border.unwrap_or(Color::TRANSPARENT),
                width: if self.border.is_some() { 1.0 } else { 0.0 },
                radius: self.radius.into(),
            },
            ..container::Appearance::default()
        }
    }
}

pub fn panel(background: Color) -> theme::Container {
    theme::Container::Custom(Box::new(Panel {
        background,
        radius: 0.0,
        border: None,
    }))
}

pub fn card(background: Color) -> theme::Container {
    theme::Container::Custom(Box::new(Panel {
        background,
        radius: 12.0,
        border: None,
    }))
}

pub fn outlined(background: Color, border: Color) -> theme::Container {
    theme::Container::Custom(Box::new(Panel {
        background,
        radius: 12.0,
        border: Some(border),
    }))
}

/// City field: flat dark box, value drawn in the controller's colour.
pub struct SearchField {
    pub value: Color,
}

impl text_input::StyleSheet for SearchField {
    type Style = Theme;

    fn active(&self, _style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            background: Background::Color(CELL_BG),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 6.0.into(),
            },
            icon_color: MUTED,
        }
    }

    fn focused(&self, style: &Self::Style) -> text_input::Appearance {
        text_input::Appearance {
            border: Border {
                color: ACCENT,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..self.active(style)
        }
    }

    fn placeholder_color(&self, _style: &Self::Style) -> Color {
        MUTED
    }

    fn value_color(&self, _style: &Self::Style) -> Color {
        self.value
    }

    fn disabled_color(&self, _style: &Self::Style) -> Color {
        MUTED
    }

    fn selection_color(&self, _style: &Self::Style) -> Color {
        Color { a: 0.4, ..ACCENT }
    }

    fn disabled(&self, style: &Self::Style) -> text_input::Appearance {
        self.active(style)
    }
}

pub fn search_field(value: Color) -> theme::TextInput {
    theme::TextInput::Custom(Box::new(SearchField { value }))
}
