use crate::app::{Dialog, DialogKind, Message};
use crate::report::{DetailCell, WeatherReport};
use crate::styles;
use iced::{
    alignment, font, theme,
    widget::{button, column, container, row, text, Space},
    Alignment, Color, Element, Font, Length,
};

const BOLD: Font = Font {
    weight: font::Weight::Bold,
    ..Font::DEFAULT
};

pub fn title_bar<'a>() -> Element<'a, Message> {
    container(
        text("🌦 Weather Now")
            .size(26)
            .font(BOLD)
            .shaping(text::Shaping::Advanced)
            .style(Color::WHITE),
    )
    .padding(14)
    .width(Length::Fill)
    .center_x()
    .style(styles::panel(styles::TITLE_BG))
    .into()
}

pub fn footer<'a>() -> Element<'a, Message> {
    container(
        text("Designed and Developed by Rayyan")
            .size(12)
            .style(Color::WHITE),
    )
    .padding(6)
    .width(Length::Fill)
    .center_x()
    .style(styles::panel(Color::BLACK))
    .into()
}

/// Shown in the result container before the first successful fetch.
pub fn empty_result<'a>() -> Element<'a, Message> {
    container(
        text("Search for a city to see current conditions")
            .size(14)
            .style(styles::MUTED),
    )
    .padding(20)
    .into()
}

pub fn result_card(report: &WeatherReport) -> Element<Message> {
    // Big temperature, then city and description
    let temperature = text(&report.temperature)
        .size(48)
        .font(BOLD)
        .style(Color::WHITE);

    let location = text(&report.location)
        .size(22)
        .font(BOLD)
        .style(styles::ACCENT);

    let description = text(&report.description)
        .size(18)
        .style(Color::WHITE);

    // Feels like / humidity / wind, one equal-width cell each
    let details = report
        .details
        .iter()
        .fold(row![].spacing(10), |row, cell| row.push(detail_cell(cell)));

    // Receive time
    let updated = text(report.updated_label())
        .size(11)
        .style(styles::MUTED);

    container(
        column![
            temperature,
            location,
            description,
            Space::with_height(Length::Fixed(10.0)),
            container(details)
                .padding(10)
                .width(Length::Fill)
                .style(styles::card(styles::CELL_BG)),
            updated,
        ]
        .spacing(6)
        .align_items(Alignment::Center),
    )
    .padding(16)
    .width(Length::Fill)
    .style(styles::card(styles::CARD_BG))
    .into()
}

fn detail_cell(cell: &DetailCell) -> Element<Message> {
    container(
        column![
            text(cell.icon).size(24).shaping(text::Shaping::Advanced),
            text(cell.label)
                .size(13)
                .font(BOLD)
                .style(styles::ACCENT),
            text(&cell.value).size(14).style(Color::WHITE),
        ]
        .spacing(2)
        .align_items(Alignment::Center),
    )
    .padding(10)
    .width(Length::FillPortion(1))
    .center_x()
    .into()
}

pub fn dialog_card(dialog: &Dialog) -> Element<Message> {
    let (icon, accent) = match dialog.kind {
        DialogKind::Warning => ("⚠", styles::WARNING),
        DialogKind::Error => ("⛔", styles::ERROR),
    };

    let heading = row![
        text(icon).size(20).shaping(text::Shaping::Advanced).style(accent),
        text(&dialog.title).size(18).font(BOLD).style(accent),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    // Dismiss
    let ok_button = button(
        text("OK")
            .size(14)
            .horizontal_alignment(alignment::Horizontal::Center),
    )
    .on_press(Message::DialogDismissed)
    .padding([6, 24])
    .style(theme::Button::Primary);

    container(
        column![
            heading,
            text(&dialog.message).size(14).style(Color::WHITE),
            ok_button,
        ]
        .spacing(12)
        .align_items(Alignment::Center),
    )
    .padding(18)
    .width(Length::Fixed(380.0))
    .style(styles::outlined(styles::CELL_BG, accent))
    .into()
}
