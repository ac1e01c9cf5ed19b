pub mod dashboard;
pub mod login;
pub mod profile;
pub mod project_details;
pub mod projects;
pub mod signup;

use iced::{Element, Task};

use crate::gui::{AppState, Message, widgets::NavTarget};

use dashboard::DashboardScreen;
use login::LoginScreen;
use profile::ProfileScreen;
use project_details::ProjectDetailsScreen;
use projects::ProjectsScreen;
use signup::SignupScreen;

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone + Send;
    type ParentMessage: std::fmt::Debug + Clone + Send;
    fn view(&self) -> Element<'_, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    LoginPage(LoginScreen),
    SignupPage(SignupScreen),
    DashboardPage(DashboardScreen),
    ProjectsPage(ProjectsScreen),
    ProjectDetailsPage(ProjectDetailsScreen),
    ProfilePage(ProfileScreen),
}

/// Queues a screen replacement through the normal message loop.
fn go(next: ScreenData) -> Task<ScreenMessage<ScreenData>> {
    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(next)))
}

fn nav(target: NavTarget) -> Task<ScreenMessage<ScreenData>> {
    tracing::debug!(?target, "navigate");
    go(match target {
        NavTarget::Dashboard => ScreenData::DashboardPage(DashboardScreen::new()),
        NavTarget::Projects => ScreenData::ProjectsPage(ProjectsScreen::new()),
        NavTarget::Profile => ScreenData::ProfilePage(ProfileScreen::new()),
        NavTarget::Logout => ScreenData::LoginPage(LoginScreen::new()),
    })
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        match self {
            ScreenData::LoginPage(screen) => screen.view().map(Message::Login),
            ScreenData::SignupPage(screen) => screen.view().map(Message::Signup),
            ScreenData::DashboardPage(screen) => screen.view().map(Message::Dashboard),
            ScreenData::ProjectsPage(screen) => screen.view().map(Message::Projects),
            ScreenData::ProjectDetailsPage(screen) => screen.view().map(Message::ProjectDetails),
            ScreenData::ProfilePage(screen) => screen.view().map(Message::Profile),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (current, Message::ChangeScreen(next)) => {
                *current = next;
                Task::none()
            }
            (ScreenData::LoginPage(page), Message::Login(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Login)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    login::ParentMessage::LoggedIn => {
                        go(ScreenData::DashboardPage(DashboardScreen::new()))
                    }
                    login::ParentMessage::OpenSignup => {
                        go(ScreenData::SignupPage(SignupScreen::new()))
                    }
                },
            },
            (ScreenData::SignupPage(page), Message::Signup(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Signup)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    signup::ParentMessage::SignedUp | signup::ParentMessage::OpenLogin => {
                        go(ScreenData::LoginPage(LoginScreen::new()))
                    }
                },
            },
            (ScreenData::DashboardPage(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    dashboard::ParentMessage::Nav(target) => nav(target),
                },
            },
            (ScreenData::ProjectsPage(page), Message::Projects(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Projects)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    // The full project value travels with the transition;
                    // the detail screen never re-fetches it.
                    projects::ParentMessage::OpenProject(project) => go(
                        ScreenData::ProjectDetailsPage(ProjectDetailsScreen::new(project)),
                    ),
                    projects::ParentMessage::Back => {
                        go(ScreenData::DashboardPage(DashboardScreen::new()))
                    }
                },
            },
            (ScreenData::ProjectDetailsPage(page), Message::ProjectDetails(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::ProjectDetails)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    project_details::ParentMessage::Back => {
                        go(ScreenData::ProjectsPage(ProjectsScreen::new()))
                    }
                },
            },
            (ScreenData::ProfilePage(page), Message::Profile(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Profile)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    profile::ParentMessage::Nav(target) => nav(target),
                },
            },
            // A message addressed to a screen that has since been torn
            // down is dropped here. Stale redirect timers land on this
            // arm too.
            _ => Task::none(),
        }
    }
}
