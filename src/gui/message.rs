use crate::gui::screens::{
    ScreenData, ScreenMessage, dashboard::DashboardScreen, login::LoginScreen,
    profile::ProfileScreen, project_details::ProjectDetailsScreen, projects::ProjectsScreen,
    signup::SignupScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Login(ScreenMessage<LoginScreen>),
    Signup(ScreenMessage<SignupScreen>),
    Dashboard(ScreenMessage<DashboardScreen>),
    Projects(ScreenMessage<ProjectsScreen>),
    ProjectDetails(ScreenMessage<ProjectDetailsScreen>),
    Profile(ScreenMessage<ProfileScreen>),
    ChangeScreen(ScreenData),
}
