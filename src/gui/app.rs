use iced::{Element, Task, Theme};

use crate::gui::{
    Message,
    screens::{Screen, ScreenData, ScreenMessage, login::LoginScreen},
    state::AppState,
};

/// Top-level application: the active screen plus the shared state.
pub struct CollabApp {
    state: AppState,
    screen: ScreenData,
}

impl CollabApp {
    pub fn new(state: AppState) -> (Self, Task<Message>) {
        (
            Self {
                state,
                screen: ScreenData::LoginPage(LoginScreen::new()),
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        "CollabSpace - Team Workspace".to_string()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_dispatch)
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen.view().map(unwrap_dispatch)
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }
}

// The dispatching screen has no parent, so its wrapper carries only the
// plain message.
fn unwrap_dispatch(wrapped: ScreenMessage<ScreenData>) -> Message {
    match wrapped {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}

pub fn run(state: AppState) -> iced::Result {
    iced::application(CollabApp::title, CollabApp::update, CollabApp::view)
        .theme(CollabApp::theme)
        .window_size((1180.0, 780.0))
        .run_with(move || CollabApp::new(state))
}
