use std::time::{Duration, Instant};

use iced::alignment::Horizontal;
use iced::executor;
use iced::theme::{self, Theme};
use iced::time;
use iced::widget::{column, container, pick_list, row, scrollable, text, text_input};
use iced::{clipboard, Alignment, Application, Color, Command, Element, Length, Settings, Subscription};
use once_cell::sync::Lazy;
use researchdesk::{
    default_output_root, parse_research_steps, write_outputs, ResearchClient,
};

use crate::components;
use crate::config::Conf;
use crate::constants::{
    COPY_ACK_DURATION, FONT_SIZE_LABEL, FONT_SIZE_REPORT, FONT_SIZE_STATUS, FONT_SIZE_TITLE,
    SUCCESS_BANNER_DURATION, TICK_INTERVAL,
};
use crate::messages::{Message, SettingsMessage};
use crate::preferences::{Language, StyleType};
use crate::session::{RequestState, StatusLine};
use crate::settings::SettingsForm;
use crate::translations;

static TOPIC_INPUT_ID: Lazy<text_input::Id> = Lazy::new(text_input::Id::unique);

#[derive(Debug)]
pub struct ResearchDeskApp {
    config: Conf,
    topic_input: String,
    steps_input: String,
    session: RequestState,
    /// Markdown of the last successful run; empty means no report. The
    /// report pane and its copy/save actions track this field exactly.
    last_report: String,
    last_saved_dir: Option<String>,
    waiting_dots: usize,
    success_banner_until: Option<Instant>,
    copy_ack_until: Option<Instant>,
    show_settings: bool,
    settings_form: SettingsForm,
    language: Language,
    style: StyleType,
    error_message: Option<String>,
}

pub fn launch() -> iced::Result {
    ResearchDeskApp::run(Settings::default())
}

impl Application for ResearchDeskApp {
    type Executor = executor::Default;
    type Message = Message;
    type Theme = Theme;
    type Flags = ();

    fn new(_flags: Self::Flags) -> (Self, Command<Self::Message>) {
        let (config, load_error) = match Conf::load() {
            Ok(conf) => (conf, None),
            Err(err) => (Conf::default(), Some(err)),
        };

        let mut app = ResearchDeskApp {
            topic_input: config.last_topic.clone().unwrap_or_default(),
            steps_input: String::new(),
            session: RequestState::Idle,
            last_report: String::new(),
            last_saved_dir: None,
            waiting_dots: 0,
            success_banner_until: None,
            copy_ack_until: None,
            show_settings: false,
            settings_form: SettingsForm::from_conf(&config),
            language: config.language,
            style: config.theme,
            config,
            error_message: None,
        };

        if let Some(error) = load_error {
            app.show_error(format!(
                "{}: {}",
                translations::config_load_failed(app.language),
                error
            ));
        }

        (app, text_input::focus(TOPIC_INPUT_ID.clone()))
    }

    fn title(&self) -> String {
        translations::window_title(self.language).to_string()
    }

    fn theme(&self) -> Theme {
        self.style.into()
    }

    fn update(&mut self, message: Self::Message) -> Command<Self::Message> {
        match message {
            Message::TopicChanged(value) => {
                self.topic_input = value;
            }
            Message::StepsChanged(value) => {
                self.steps_input = value;
            }
            Message::SubmitPressed => {
                return self.start_request();
            }
            Message::RequestFinished(result) => self.apply_request_result(result),
            Message::Tick => self.on_tick(),
            Message::CopyReport => {
                return self.copy_report();
            }
            Message::SaveReport => self.save_report(),
            Message::ClearPressed => {
                return self.clear();
            }
            Message::ToggleSettings => {
                self.show_settings = true;
                self.reset_settings_form();
            }
            Message::Settings(message) => self.update_settings(message),
            Message::ThemeChanged(theme) => {
                self.style = theme;
                self.config.theme = theme;
                self.persist_config();
            }
            Message::LanguageChanged(language) => {
                self.language = language;
                self.config.language = language;
                self.persist_config();
            }
            Message::ClearError => {
                self.error_message = None;
            }
        }

        Command::none()
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        let has_deadline =
            self.success_banner_until.is_some() || self.copy_ack_until.is_some();
        if self.session.is_loading() || has_deadline {
            time::every(TICK_INTERVAL).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        let header = text(translations::app_title(self.language))
            .size(FONT_SIZE_TITLE)
            .horizontal_alignment(Horizontal::Center);

        let status = self.status_line();
        let status_label = text(status.text())
            .size(FONT_SIZE_STATUS)
            .style(theme::Text::Color(status.color()));

        let mut content = column![header, self.top_bar(), self.input_row(), status_label,]
            .spacing(20)
            .max_width(760.0)
            .width(Length::Fill);

        if self.has_report() {
            content = content.push(self.report_section());
        }

        if let Some(error) = &self.error_message {
            content = content.push(components::error_banner(
                error,
                translations::dismiss_button(self.language),
            ));
        }

        let base = container(content)
            .padding(24)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x()
            .center_y();

        if self.show_settings {
            components::settings_overlay(&self.settings_form, self.language)
        } else {
            base.into()
        }
    }
}

impl ResearchDeskApp {
    fn start_request(&mut self) -> Command<Message> {
        if self.session.is_loading() {
            return Command::none();
        }

        let topic = self.topic_input.trim().to_string();
        if topic.is_empty() {
            self.show_error(translations::missing_topic_error(self.language));
            return Command::none();
        }

        let steps = parse_research_steps(&self.steps_input);
        self.session = RequestState::Loading;
        self.waiting_dots = 0;
        self.error_message = None;
        self.success_banner_until = None;
        self.last_saved_dir = None;
        self.config.last_topic = Some(topic.clone());
        self.persist_config();

        let endpoint = self.config.endpoint.clone();
        let timeout = self.config.timeout;

        Command::perform(
            run_request(endpoint, timeout, topic, steps),
            Message::RequestFinished,
        )
    }

    fn can_submit(&self) -> bool {
        !self.topic_input.trim().is_empty() && !self.session.is_loading()
    }

    fn has_report(&self) -> bool {
        !self.last_report.is_empty()
    }

    fn apply_request_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(report) => {
                self.last_report = report;
                self.session = RequestState::Success;
                self.success_banner_until = Some(Instant::now() + SUCCESS_BANNER_DURATION);
            }
            Err(error) => {
                // A previously rendered report stays on screen.
                self.session = RequestState::Failure { error };
            }
        }
    }

    fn on_tick(&mut self) {
        if self.session.is_loading() {
            self.waiting_dots = (self.waiting_dots + 1) % 4;
        }

        let now = Instant::now();
        if self.success_banner_until.is_some_and(|until| now >= until) {
            self.success_banner_until = None;
        }
        if self.copy_ack_until.is_some_and(|until| now >= until) {
            self.copy_ack_until = None;
        }
    }

    fn copy_report(&mut self) -> Command<Message> {
        if !self.has_report() {
            self.show_error(translations::no_report_error(self.language));
            return Command::none();
        }

        self.copy_ack_until = Some(Instant::now() + COPY_ACK_DURATION);
        clipboard::write(self.last_report.clone())
    }

    fn save_report(&mut self) {
        if !self.has_report() {
            self.show_error(translations::no_report_error(self.language));
            return;
        }

        let topic = self
            .config
            .last_topic
            .clone()
            .unwrap_or_else(|| self.topic_input.trim().to_string());
        let steps = parse_research_steps(&self.steps_input);

        match write_outputs(&topic, steps, &self.last_report, &default_output_root()) {
            Ok(dir) => self.last_saved_dir = Some(dir),
            Err(err) => self.show_error(err.to_string()),
        }
    }

    /// Safe to invoke any number of times, including with nothing to clear.
    /// An in-flight request is not cancelled and keeps the submit trigger
    /// disabled until it settles.
    fn clear(&mut self) -> Command<Message> {
        self.topic_input.clear();
        self.steps_input.clear();
        self.last_report.clear();
        self.last_saved_dir = None;
        self.session = self.session.after_clear();
        self.success_banner_until = None;
        self.copy_ack_until = None;
        self.error_message = None;

        text_input::focus(TOPIC_INPUT_ID.clone())
    }

    fn top_bar(&self) -> Element<'_, Message> {
        row![
            pick_list(Language::ALL, Some(self.language), Message::LanguageChanged)
                .placeholder(translations::language_label(self.language)),
            pick_list(StyleType::ALL, Some(self.style), Message::ThemeChanged)
                .placeholder(translations::theme_label(self.language)),
            components::text_button(
                translations::settings_button(self.language),
                Message::ToggleSettings,
            ),
        ]
        .spacing(12)
        .align_items(Alignment::Center)
        .into()
    }

    fn input_row(&self) -> Element<'_, Message> {
        let submit_button = components::primary_button(
            translations::submit_button(self.language),
            self.can_submit(),
            Message::SubmitPressed,
        );

        row![
            text(translations::topic_label(self.language)).size(FONT_SIZE_LABEL),
            text_input(
                translations::topic_placeholder(self.language),
                &self.topic_input,
            )
            .id(TOPIC_INPUT_ID.clone())
            .on_input(Message::TopicChanged)
            .on_submit(Message::SubmitPressed)
            .padding(12)
            .size(FONT_SIZE_STATUS)
            .width(Length::Fill),
            text(translations::steps_label(self.language)).size(FONT_SIZE_LABEL),
            text_input(
                translations::steps_placeholder(self.language),
                &self.steps_input,
            )
            .on_input(Message::StepsChanged)
            .padding(12)
            .size(FONT_SIZE_STATUS)
            .width(Length::Fixed(90.0)),
            submit_button,
            components::text_button(
                translations::clear_button(self.language),
                Message::ClearPressed,
            ),
        ]
        .spacing(12)
        .align_items(Alignment::Center)
        .into()
    }

    fn report_section(&self) -> Element<'_, Message> {
        let copy_label = if self.copy_ack_until.is_some() {
            translations::copy_ack_label(self.language)
        } else {
            translations::copy_report_button(self.language)
        };

        let mut section = column![
            text(translations::report_label(self.language))
                .size(FONT_SIZE_LABEL)
                .style(theme::Text::Color(Color::from_rgb8(180, 220, 180))),
            scrollable(
                text(&self.last_report)
                    .size(FONT_SIZE_REPORT)
                    .style(theme::Text::Color(Color::from_rgb8(200, 215, 200))),
            )
            .height(Length::Fixed(320.0)),
            row![
                components::action_button(copy_label, self.has_report(), Message::CopyReport),
                components::action_button(
                    translations::save_report_button(self.language),
                    self.has_report(),
                    Message::SaveReport,
                ),
            ]
            .spacing(12)
            .align_items(Alignment::Center),
        ]
        .spacing(12);

        if let Some(dir) = &self.last_saved_dir {
            section = section.push(
                text(format!(
                    "{}: {}",
                    translations::saved_to_label(self.language),
                    dir
                ))
                .size(FONT_SIZE_LABEL)
                .style(theme::Text::Color(Color::from_rgb8(148, 163, 184))),
            );
        }

        section.into()
    }

    fn status_line(&self) -> StatusLine {
        // The success banner auto-dismisses; the report itself stays up.
        if self.session == RequestState::Success && self.success_banner_until.is_none() {
            return StatusLine::ready(self.language);
        }

        self.session.status_line(self.language, self.waiting_dots)
    }

    fn reset_settings_form(&mut self) {
        self.settings_form = SettingsForm::from_conf(&self.config);
    }

    fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    fn update_settings(&mut self, message: SettingsMessage) {
        match message {
            SettingsMessage::EndpointChanged(value) => {
                self.settings_form.set_endpoint(value);
            }
            SettingsMessage::TimeoutChanged(value) => {
                self.settings_form.set_timeout(value);
            }
            SettingsMessage::Save => {
                match self.settings_form.apply(&mut self.config, self.language) {
                    Ok(()) => {
                        self.show_settings = false;
                        self.reset_settings_form();
                        self.persist_config();
                    }
                    Err(error) => self.show_error(error),
                }
            }
            SettingsMessage::Dismiss => {
                self.show_settings = false;
                self.reset_settings_form();
            }
        }
    }

    fn persist_config(&mut self) {
        if let Err(err) = self.config.store() {
            self.show_error(format!(
                "{}: {}",
                translations::config_store_failed(self.language),
                err
            ));
        }
    }
}

// Runs on the application's tokio executor via Command::perform.
async fn run_request(
    endpoint: String,
    timeout: u64,
    topic: String,
    steps: Option<u32>,
) -> Result<String, String> {
    let client = ResearchClient::new(&endpoint, Duration::from_secs(timeout))
        .map_err(|err| err.to_string())?;

    client
        .conduct(&topic, steps)
        .await
        .map_err(|err| err.to_string())
}
