use iced::{
    mouse,
    widget::canvas::{self, Frame, Path, Text},
    Color, Font, Point, Rectangle, Size, Theme,
};

pub const BASE_FILL: Color = Color { r: 0.0, g: 0.294, b: 0.533, a: 1.0 }; // #004b88
pub const OVERLAY_FILL: Color = Color { r: 0.0, g: 0.149, b: 0.282, a: 0.25 }; // #002648
pub const HOVER_FILL: Color = Color { r: 0.392, g: 0.71, b: 0.965, a: 1.0 }; // #64b5f6
pub const DISABLED_FILL: Color = Color { r: 0.22, g: 0.29, b: 0.36, a: 1.0 };

/// Hover state of the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

impl HoverState {
    /// Transition for a pointer that is now inside (or outside) the button.
    pub fn pointer(self, inside: bool) -> Self {
        match (self, inside) {
            (HoverState::Idle, true) => HoverState::Hovered,
            (HoverState::Hovered, false) => HoverState::Idle,
            (state, _) => state,
        }
    }
}

/// A canvas-drawn rounded button that emits `on_press` for every primary click.
pub struct ModernButton<Message> {
    label: String,
    on_press: Message,
    disabled: bool,
    radius: f32,
}

impl<Message: Clone> ModernButton<Message> {
    pub fn new(label: impl Into<String>, on_press: Message) -> Self {
        Self {
            label: label.into(),
            on_press,
            disabled: false,
            radius: 14.0,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn fill(&self, interaction: HoverState) -> Color {
        if self.disabled {
            DISABLED_FILL
        } else if interaction == HoverState::Hovered {
            HOVER_FILL
        } else {
            BASE_FILL
        }
    }

    /// Handle one event. Returns the message to publish, if any.
    pub fn handle(
        &self,
        state: &mut HoverState,
        event: &canvas::Event,
        over: bool,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            canvas::Event::Mouse(mouse::Event::CursorMoved { .. })
            | canvas::Event::Mouse(mouse::Event::CursorEntered)
            | canvas::Event::Mouse(mouse::Event::CursorLeft) => {
                *state = state.pointer(over);
                (canvas::event::Status::Ignored, None)
            }
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) if over => {
                if self.disabled {
                    (canvas::event::Status::Captured, None)
                } else {
                    (
                        canvas::event::Status::Captured,
                        Some(self.on_press.clone()),
                    )
                }
            }
            _ => (canvas::event::Status::Ignored, None),
        }
    }
}

fn rounded_rect(size: Size, radius: f32) -> Path {
    let r = radius.min(size.width / 2.0).min(size.height / 2.0);
    if r <= 0.0 {
        return Path::rectangle(Point::ORIGIN, size);
    }

    // Straight edges joined by quarter arcs, clockwise from the top left
    let (w, h) = (size.width, size.height);
    Path::new(|b| {
        b.move_to(Point::new(r, 0.0));
        b.line_to(Point::new(w - r, 0.0));
        b.arc_to(Point::new(w, 0.0), Point::new(w, r), r);
        b.line_to(Point::new(w, h - r));
        b.arc_to(Point::new(w, h), Point::new(w - r, h), r);
        b.line_to(Point::new(r, h));
        b.arc_to(Point::new(0.0, h), Point::new(0.0, h - r), r);
        b.line_to(Point::new(0.0, r));
        b.arc_to(Point::new(0.0, 0.0), Point::new(r, 0.0), r);
        b.close();
    })
}

impl<Message: Clone> canvas::Program<Message> for ModernButton<Message> {
    type State = HoverState;

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        self.handle(state, &event, cursor.is_over(bounds))
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let shape = rounded_rect(bounds.size(), self.radius);

        // Base fill, swapped for the hover colour while the pointer is inside
        frame.fill(&shape, self.fill(*state));

        // Darker overlay gives the two-tone look
        if !self.disabled {
            frame.fill(&shape, OVERLAY_FILL);
        }

        // Centered label
        frame.fill_text(Text {
            content: self.label.clone(),
            position: frame.center(),
            size: 17.0.into(),
            color: Color::WHITE,
            font: Font {
                weight: iced::font::Weight::Bold,
                ..Font::DEFAULT
            },
            horizontal_alignment: iced::alignment::Horizontal::Center,
            vertical_alignment: iced::alignment::Vertical::Center,
            line_height: iced::widget::text::LineHeight::default(),
            shaping: iced::widget::text::Shaping::Advanced,
        });

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if !self.disabled && cursor.is_over(bounds) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::Idle
        }
    }
}
