use crate::app::{Message, WeatherApp};
use crate::button::ModernButton;
use crate::components;
use crate::styles;
use iced::{
    widget::{canvas::Canvas, column, container, image, mouse_area, text_input, Space},
    Alignment, ContentFit, Element, Length,
};

pub fn view(app: &WeatherApp) -> Element<Message> {
    let mut content = column![components::title_bar()].align_items(Alignment::Center);

    // iced 0.12 cannot layer widgets, so the background image is drawn as a
    // band under the title bar.
    if let Some(handle) = &app.background {
        content = content.push(
            image(handle.clone())
                .width(Length::Fill)
                .height(Length::Fixed(120.0))
                .content_fit(ContentFit::Cover),
        );
    }

    // An open dialog takes the place of the search row until dismissed
    let search: Element<Message> = match &app.dialog {
        Some(dialog) => components::dialog_card(dialog),
        None => create_search_controls(app),
    };

    // Result container, rebuilt from the current report
    let result: Element<Message> = match &app.report {
        Some(report) => components::result_card(report),
        None => components::empty_result(),
    };

    content = content
        .push(Space::with_height(Length::Fixed(20.0)))
        .push(search)
        .push(
            container(result)
                .padding([25, 20])
                .width(Length::Fill)
                .center_x(),
        )
        .push(Space::with_height(Length::Fill)) // Push footer to the bottom
        .push(components::footer());

    // Clicks not captured by a widget land on the background and blur the field
    mouse_area(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::panel(styles::WINDOW_BG)),
    )
    .on_press(Message::BackgroundPressed)
    .into()
}

fn create_search_controls(app: &WeatherApp) -> Element<Message> {
    let city_input = text_input(app.city.placeholder(), app.city.value())
        .on_input(Message::CityChanged)
        .on_submit(Message::FetchRequested)
        .padding(12)
        .size(16)
        .width(Length::Fixed(300.0))
        .style(styles::search_field(app.city.color()));

    // Button stays disabled until the current fetch comes back
    let label = if app.loading {
        "Loading…"
    } else {
        "Get Weather"
    };
    let search_button = Canvas::new(
        ModernButton::new(label, Message::FetchRequested)
            .disabled(app.loading)
            .radius(14.0),
    )
    .width(Length::Fixed(350.0))
    .height(Length::Fixed(55.0));

    column![city_input, search_button]
        .spacing(20)
        .align_items(Alignment::Center)
        .into()
}
