use std::time::Duration;

use iced::widget::{button, checkbox, column, container, text, text_input};
use iced::{Element, Length, Task};

use crate::core::auth;
use crate::core::validate::{FieldErrors, fields};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};

/// Pause between the success message and the dashboard transition.
const REDIRECT_DELAY: Duration = Duration::from_millis(700);

#[derive(Debug, Clone, Default)]
pub struct LoginScreen {
    email: String,
    password: String,
    errors: FieldErrors,
    success: bool,
    show_password: bool,
    /// Stamps each successful submit so a superseded redirect timer
    /// can be told apart from the live one.
    attempt: u64,
}

#[derive(Debug, Clone)]
pub enum LoginMessage {
    EmailChanged(String),
    PasswordChanged(String),
    ShowPasswordToggled(bool),
    Submit,
    RedirectElapsed(u64),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    LoggedIn,
    OpenSignup,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for LoginScreen {
    type Message = LoginMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let email_input = text_input("you@example.com", &self.email)
            .on_input(|value| ScreenMessage::ScreenMessage(LoginMessage::EmailChanged(value)))
            .padding(10);
        let password_input = text_input("********", &self.password)
            .on_input(|value| ScreenMessage::ScreenMessage(LoginMessage::PasswordChanged(value)))
            .on_submit(ScreenMessage::ScreenMessage(LoginMessage::Submit))
            .secure(!self.show_password)
            .padding(10);

        let form = column![text("Login").size(32)]
            .push(column![text("Email").size(14), email_input].spacing(4))
            .push_maybe(self.errors.get(fields::EMAIL).map(widgets::field_error))
            .push(column![text("Password").size(14), password_input].spacing(4))
            .push_maybe(self.errors.get(fields::PASSWORD).map(widgets::field_error))
            .push(
                checkbox("Show password", self.show_password).on_toggle(|value| {
                    ScreenMessage::ScreenMessage(LoginMessage::ShowPasswordToggled(value))
                }),
            )
            .push(
                button(text("Login"))
                    .on_press(ScreenMessage::ScreenMessage(LoginMessage::Submit))
                    .style(button::primary)
                    .width(Length::Fill)
                    .padding(10),
            )
            .push_maybe(
                self.success
                    .then(|| text("Login Successful!").size(14).color(widgets::success())),
            )
            .push(
                button(text("Don't have an account? Sign Up").size(13))
                    .style(button::text)
                    .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenSignup)),
            )
            .spacing(14)
            .width(Length::Fixed(360.0));

        container(widgets::dialog_panel(form))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LoginMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            LoginMessage::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            LoginMessage::ShowPasswordToggled(value) => {
                self.show_password = value;
                Task::none()
            }
            LoginMessage::Submit => {
                let stored = state.credentials.load().ok();
                self.errors = auth::check_login(&self.email, &self.password, stored.as_ref());
                if self.errors.is_empty() {
                    self.success = true;
                    self.attempt += 1;
                    let attempt = self.attempt;
                    tracing::info!("login succeeded");
                    Task::perform(tokio::time::sleep(REDIRECT_DELAY), move |_| {
                        ScreenMessage::ScreenMessage(LoginMessage::RedirectElapsed(attempt))
                    })
                } else {
                    self.success = false;
                    Task::none()
                }
            }
            LoginMessage::RedirectElapsed(attempt) => {
                // A timer from a superseded submit is a no-op.
                if attempt == self.attempt && self.success {
                    Task::done(ScreenMessage::ParentMessage(ParentMessage::LoggedIn))
                } else {
                    Task::none()
                }
            }
        }
    }
}
