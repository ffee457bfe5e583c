use crate::input::CityField;
use crate::report::WeatherReport;
use crate::view;
use crate::weather::{FetchError, WeatherClient, WeatherResult};
use iced::{widget::image, Application, Command, Element, Theme};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum Message {
    CityChanged(String),
    FetchRequested,
    WeatherFetched(Result<WeatherResult, FetchError>),
    BackgroundPressed,
    DialogDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Warning,
    Error,
}

/// A blocking notice. While one is open the search controls are hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn input_error() -> Self {
        Self {
            kind: DialogKind::Warning,
            title: "Input Error".to_string(),
            message: "Please enter a city name".to_string(),
        }
    }

    pub fn fetch_error(error: &FetchError) -> Self {
        Self {
            kind: DialogKind::Error,
            title: "Error".to_string(),
            message: format!("Could not fetch weather:\n{}", error),
        }
    }
}

/// Everything the window needs, resolved before it opens.
pub struct Flags {
    pub client: WeatherClient,
    pub background: Option<PathBuf>,
}

pub struct WeatherApp {
    pub client: WeatherClient,
    pub city: CityField,
    pub report: Option<WeatherReport>,
    pub loading: bool,
    pub dialog: Option<Dialog>,
    pub background: Option<image::Handle>,
}

impl WeatherApp {
    pub fn with_flags(flags: Flags) -> Self {
        Self {
            client: flags.client,
            city: CityField::default(),
            report: None,
            loading: false,
            dialog: None,
            background: flags.background.map(image::Handle::from_path),
        }
    }

    fn request_weather(&mut self) -> Command<Message> {
        if self.loading || self.dialog.is_some() {
            return Command::none();
        }

        self.city.blur();
        let Some(query) = self.city.query() else {
            tracing::debug!("Rejected empty city input");
            self.dialog = Some(Dialog::input_error());
            return Command::none();
        };

        self.loading = true;
        let client = self.client.clone();
        Command::perform(
            async move { client.fetch_weather(&query).await },
            Message::WeatherFetched,
        )
    }
}

impl Application for WeatherApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = Flags;

    fn new(flags: Flags) -> (WeatherApp, Command<Message>) {
        (WeatherApp::with_flags(flags), Command::none())
    }

    fn title(&self) -> String {
        String::from("Weather App")
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::CityChanged(value) => {
                self.city.edit(value);
                Command::none()
            }
            Message::BackgroundPressed => {
                self.city.blur();
                Command::none()
            }
            Message::FetchRequested => self.request_weather(),
            Message::WeatherFetched(result) => {
                self.loading = false;
                match result {
                    Ok(weather) => {
                        self.report = Some(WeatherReport::from(&weather));
                    }
                    Err(error) => {
                        self.dialog = Some(Dialog::fetch_error(&error));
                    }
                }
                Command::none()
            }
            Message::DialogDismissed => {
                self.dialog = None;
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        view::view(self)
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::HINT;

    fn app() -> WeatherApp {
        let config = Config {
            api_key: Some("TEST_KEY".into()),
            api_url: "http://127.0.0.1:1/weather".into(),
            ..Config::default()
        };
        WeatherApp::with_flags(Flags {
            client: WeatherClient::new(&config).unwrap(),
            background: None,
        })
    }

    fn result(city: &str, temp: &str) -> WeatherResult {
        WeatherResult {
            city_name: city.into(),
            country_code: "FR".into(),
            temperature_c: Some(temp.parse().unwrap()),
            feels_like_c: None,
            humidity_pct: None,
            wind_speed_ms: None,
            description: "light rain".into(),
        }
    }

    #[test]
    fn empty_input_opens_warning_without_fetching() {
        let mut app = app();
        let _ = app.update(Message::FetchRequested);

        assert!(!app.loading);
        assert_eq!(app.dialog, Some(Dialog::input_error()));
        assert_eq!(app.dialog.as_ref().unwrap().kind, DialogKind::Warning);
    }

    #[test]
    fn hint_text_input_is_rejected() {
        let mut app = app();
        let _ = app.update(Message::CityChanged(HINT.to_string()));
        let _ = app.update(Message::FetchRequested);

        assert!(!app.loading);
        assert_eq!(app.dialog, Some(Dialog::input_error()));
    }

    #[test]
    fn valid_input_starts_loading() {
        let mut app = app();
        let _ = app.update(Message::CityChanged("Paris".into()));
        let _ = app.update(Message::FetchRequested);

        assert!(app.loading);
        assert_eq!(app.dialog, None);
        assert!(!app.city.is_focused());
    }

    #[test]
    fn second_request_ignored_while_loading() {
        let mut app = app();
        let _ = app.update(Message::CityChanged("Paris".into()));
        let _ = app.update(Message::FetchRequested);
        let _ = app.update(Message::CityChanged("".into()));
        let _ = app.update(Message::FetchRequested);

        assert!(app.loading);
        assert_eq!(app.dialog, None);
    }

    #[test]
    fn success_replaces_previous_report() {
        let mut app = app();
        let _ = app.update(Message::WeatherFetched(Ok(result("Paris", "18.5"))));
        let _ = app.update(Message::WeatherFetched(Ok(result("Lyon", "21"))));

        let report = app.report.as_ref().unwrap();
        assert_eq!(report.location, "Lyon, FR");
        assert_eq!(report.temperature, "21°C");
        assert_eq!(report.description, "Light rain");
        assert!(!app.loading);
    }

    #[test]
    fn provider_error_keeps_report_and_shows_message() {
        let mut app = app();
        let _ = app.update(Message::WeatherFetched(Ok(result("Paris", "18.5"))));
        let before = app.report.clone();

        let _ = app.update(Message::WeatherFetched(Err(FetchError::Provider {
            message: "city not found".into(),
        })));

        assert_eq!(app.report, before);
        let dialog = app.dialog.as_ref().unwrap();
        assert_eq!(dialog.kind, DialogKind::Error);
        assert_eq!(dialog.message, "Could not fetch weather:\ncity not found");
    }

    #[test]
    fn transport_error_text_is_shown_verbatim() {
        let mut app = app();
        let text = "error sending request for url (http://127.0.0.1:1/weather): operation timed out";
        let _ = app.update(Message::WeatherFetched(Err(FetchError::Transport(
            text.into(),
        ))));

        assert_eq!(app.report, None);
        assert_eq!(
            app.dialog.as_ref().unwrap().message,
            format!("Could not fetch weather:\n{text}")
        );
    }

    #[test]
    fn dismissing_dialog_reenables_search() {
        let mut app = app();
        let _ = app.update(Message::FetchRequested);
        let _ = app.update(Message::DialogDismissed);
        assert_eq!(app.dialog, None);

        let _ = app.update(Message::CityChanged("Oslo".into()));
        let _ = app.update(Message::FetchRequested);
        assert!(app.loading);
    }

    #[test]
    fn background_press_restores_hint() {
        let mut app = app();
        let _ = app.update(Message::CityChanged(String::new()));
        assert!(app.city.is_focused());

        let _ = app.update(Message::BackgroundPressed);
        assert!(app.city.shows_hint());
    }
}
