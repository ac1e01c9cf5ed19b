use iced::widget::{button, column, container, horizontal_space, image, row, text, text_input};
use iced::{Element, Length, Task};
use rfd::AsyncFileDialog;

use crate::core::model::{self, UserProfile};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{self, NavTarget},
};

#[derive(Debug, Clone)]
pub struct ProfileScreen {
    user: UserProfile,
    edit_open: bool,
    form: ProfileForm,
    /// Decoded picture for rendering; the encoded copy lives on the
    /// user record.
    avatar_handle: Option<image::Handle>,
}

#[derive(Debug, Clone, Default)]
struct ProfileForm {
    name: String,
    email: String,
    role: String,
    status: String,
    department: String,
    location: String,
}

#[derive(Debug, Clone)]
pub enum ProfileMessage {
    OpenEdit,
    CloseEdit,
    NameChanged(String),
    EmailChanged(String),
    RoleChanged(String),
    StatusChanged(String),
    DepartmentChanged(String),
    LocationChanged(String),
    SubmitEdit,
    UploadAvatar,
    AvatarChosen(Option<(String, Vec<u8>)>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Nav(NavTarget),
}

impl ProfileScreen {
    pub fn new() -> Self {
        Self {
            user: UserProfile {
                name: "Amina Ahmad".to_string(),
                email: "amina@example.com".to_string(),
                role: "Team Lead".to_string(),
                status: "Active".to_string(),
                department: "Design".to_string(),
                location: "Karachi, Pakistan".to_string(),
                avatar: None,
            },
            edit_open: false,
            form: ProfileForm::default(),
            avatar_handle: None,
        }
    }

    fn form_from_user(&self) -> ProfileForm {
        ProfileForm {
            name: self.user.name.clone(),
            email: self.user.email.clone(),
            role: self.user.role.clone(),
            status: self.user.status.clone(),
            department: self.user.department.clone(),
            location: self.user.location.clone(),
        }
    }
}

impl Screen for ProfileScreen {
    type Message = ProfileMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let avatar: Element<'_, ScreenMessage<Self>> = match &self.avatar_handle {
            Some(handle) => image(handle.clone())
                .width(Length::Fixed(128.0))
                .height(Length::Fixed(128.0))
                .into(),
            None => {
                let initial = self.user.name.chars().next().unwrap_or('?');
                container(text(initial.to_string()).size(44).color(iced::Color::WHITE))
                    .center_x(Length::Fixed(128.0))
                    .center_y(Length::Fixed(128.0))
                    .style(|_theme| iced::widget::container::Style {
                        background: Some(widgets::indigo().into()),
                        border: iced::border::rounded(64.0),
                        ..iced::widget::container::Style::default()
                    })
                    .into()
            }
        };

        let details = column![
            text(&self.user.name).size(22),
            text(&self.user.email).size(14).color(widgets::muted()),
            row![
                text(format!("Role: {}", self.user.role)).size(13).color(widgets::muted()),
                text(format!("Status: {}", self.user.status)).size(13).color(widgets::muted()),
            ]
            .spacing(12),
            row![
                text(format!("Department: {}", self.user.department))
                    .size(13)
                    .color(widgets::muted()),
                text(format!("Location: {}", self.user.location))
                    .size(13)
                    .color(widgets::muted()),
            ]
            .spacing(12),
            row![
                button(text("Edit Profile"))
                    .style(button::primary)
                    .on_press(ScreenMessage::ScreenMessage(ProfileMessage::OpenEdit)),
                button(text("Upload avatar"))
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(ProfileMessage::UploadAvatar)),
            ]
            .spacing(10),
        ]
        .spacing(8);

        let profile_card = widgets::card(row![avatar, details].spacing(24));

        let content = column![text("Profile").size(28), profile_card].spacing(20);

        let base = widgets::shell(NavTarget::Profile, content, |target| {
            ScreenMessage::ParentMessage(ParentMessage::Nav(target))
        });

        if self.edit_open {
            widgets::modal(
                base,
                self.edit_form(),
                ScreenMessage::ScreenMessage(ProfileMessage::CloseEdit),
            )
        } else {
            base
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProfileMessage::OpenEdit => {
                self.form = self.form_from_user();
                self.edit_open = true;
                Task::none()
            }
            ProfileMessage::CloseEdit => {
                self.edit_open = false;
                Task::none()
            }
            ProfileMessage::NameChanged(value) => {
                self.form.name = value;
                Task::none()
            }
            ProfileMessage::EmailChanged(value) => {
                self.form.email = value;
                Task::none()
            }
            ProfileMessage::RoleChanged(value) => {
                self.form.role = value;
                Task::none()
            }
            ProfileMessage::StatusChanged(value) => {
                self.form.status = value;
                Task::none()
            }
            ProfileMessage::DepartmentChanged(value) => {
                self.form.department = value;
                Task::none()
            }
            ProfileMessage::LocationChanged(value) => {
                self.form.location = value;
                Task::none()
            }
            ProfileMessage::SubmitEdit => {
                // The record is replaced wholesale; only the avatar
                // survives from the previous value.
                self.user = UserProfile {
                    name: self.form.name.clone(),
                    email: self.form.email.clone(),
                    role: self.form.role.clone(),
                    status: self.form.status.clone(),
                    department: self.form.department.clone(),
                    location: self.form.location.clone(),
                    avatar: self.user.avatar.clone(),
                };
                self.edit_open = false;
                Task::none()
            }
            ProfileMessage::UploadAvatar => Task::perform(
                async {
                    let handle = AsyncFileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                        .pick_file()
                        .await?;
                    let bytes = handle.read().await;
                    Some((handle.file_name(), bytes))
                },
                |picked| ScreenMessage::ScreenMessage(ProfileMessage::AvatarChosen(picked)),
            ),
            ProfileMessage::AvatarChosen(picked) => {
                // Each completion replaces the field outright; with two
                // racing uploads the last one wins.
                if let Some((name, bytes)) = picked {
                    self.user.avatar = Some(model::avatar_data_uri(&name, &bytes));
                    self.avatar_handle = Some(image::Handle::from_bytes(bytes));
                }
                Task::none()
            }
        }
    }
}

impl ProfileScreen {
    fn edit_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = column![
            text("Edit Profile").size(20),
            field("Name", &self.form.name, ProfileMessage::NameChanged),
            field("Email", &self.form.email, ProfileMessage::EmailChanged),
            field("Role", &self.form.role, ProfileMessage::RoleChanged),
            field("Status", &self.form.status, ProfileMessage::StatusChanged),
            field(
                "Department",
                &self.form.department,
                ProfileMessage::DepartmentChanged
            ),
            field(
                "Location",
                &self.form.location,
                ProfileMessage::LocationChanged
            ),
            row![
                horizontal_space(),
                button(text("Cancel"))
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(ProfileMessage::CloseEdit)),
                button(text("Save"))
                    .style(button::primary)
                    .on_press(ScreenMessage::ScreenMessage(ProfileMessage::SubmitEdit)),
            ]
            .spacing(10),
        ]
        .spacing(12);

        widgets::dialog_panel(form).into()
    }
}

fn field<'a>(
    label: &'static str,
    value: &'a str,
    on_input: fn(String) -> ProfileMessage,
) -> Element<'a, ScreenMessage<ProfileScreen>> {
    column![
        text(label).size(14),
        text_input("", value)
            .on_input(move |value| ScreenMessage::ScreenMessage(on_input(value)))
            .padding(8),
    ]
    .spacing(4)
    .into()
}
