use iced::widget::{button, checkbox, column, container, text, text_input};
use iced::{Element, Length, Task};

use crate::core::auth;
use crate::core::credentials::CredentialRecord;
use crate::core::validate::{FieldErrors, fields};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};

#[derive(Debug, Clone, Default)]
pub struct SignupScreen {
    name: String,
    email: String,
    password: String,
    errors: FieldErrors,
    show_password: bool,
}

#[derive(Debug, Clone)]
pub enum SignupMessage {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    ShowPasswordToggled(bool),
    Submit,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SignedUp,
    OpenLogin,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for SignupScreen {
    type Message = SignupMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let name_input = text_input("Your Name", &self.name)
            .on_input(|value| ScreenMessage::ScreenMessage(SignupMessage::NameChanged(value)))
            .padding(10);
        let email_input = text_input("you@example.com", &self.email)
            .on_input(|value| ScreenMessage::ScreenMessage(SignupMessage::EmailChanged(value)))
            .padding(10);
        let password_input = text_input("********", &self.password)
            .on_input(|value| ScreenMessage::ScreenMessage(SignupMessage::PasswordChanged(value)))
            .on_submit(ScreenMessage::ScreenMessage(SignupMessage::Submit))
            .secure(!self.show_password)
            .padding(10);

        let form = column![text("Sign Up").size(32)]
            .push(column![text("Full Name").size(14), name_input].spacing(4))
            .push_maybe(self.errors.get(fields::NAME).map(widgets::field_error))
            .push(column![text("Email").size(14), email_input].spacing(4))
            .push_maybe(self.errors.get(fields::EMAIL).map(widgets::field_error))
            .push(column![text("Password").size(14), password_input].spacing(4))
            .push_maybe(self.errors.get(fields::PASSWORD).map(widgets::field_error))
            .push(
                checkbox("Show password", self.show_password).on_toggle(|value| {
                    ScreenMessage::ScreenMessage(SignupMessage::ShowPasswordToggled(value))
                }),
            )
            .push(
                button(text("Sign Up"))
                    .on_press(ScreenMessage::ScreenMessage(SignupMessage::Submit))
                    .style(button::primary)
                    .width(Length::Fill)
                    .padding(10),
            )
            .push(
                button(text("Already have an account? Login").size(13))
                    .style(button::text)
                    .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenLogin)),
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
            SignupMessage::NameChanged(value) => {
                self.name = value;
                Task::none()
            }
            SignupMessage::EmailChanged(value) => {
                self.email = value;
                Task::none()
            }
            SignupMessage::PasswordChanged(value) => {
                self.password = value;
                Task::none()
            }
            SignupMessage::ShowPasswordToggled(value) => {
                self.show_password = value;
                Task::none()
            }
            SignupMessage::Submit => {
                self.errors = auth::check_signup(&self.name, &self.email, &self.password);
                if !self.errors.is_empty() {
                    return Task::none();
                }
                let record = CredentialRecord {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                if let Err(err) = state.credentials.save(&record) {
                    tracing::error!(%err, "failed to save the account record");
                }
                Task::done(ScreenMessage::ParentMessage(ParentMessage::SignedUp))
            }
        }
    }
}
