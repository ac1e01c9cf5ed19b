use iced::widget::{Column, button, column, horizontal_space, row, scrollable, text, text_input};
use iced::{Element, Length, Task};

use crate::core::model::{Project, ProjectStatus};
use crate::core::validate::{self, FieldErrors, fields};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};

#[derive(Debug, Clone)]
pub struct ProjectsScreen {
    projects: Vec<Project>,
    search: String,
    show_modal: bool,
    new_name: String,
    new_due: String,
    form_errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub enum ProjectsMessage {
    SearchChanged(String),
    OpenModal,
    CloseModal,
    NewNameChanged(String),
    NewDueChanged(String),
    AddProject,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    /// Carries the full project value to the detail screen.
    OpenProject(Project),
    Back,
}

impl ProjectsScreen {
    pub fn new() -> Self {
        Self {
            projects: seed_projects(),
            search: String::new(),
            show_modal: false,
            new_name: String::new(),
            new_due: String::new(),
            form_errors: FieldErrors::new(),
        }
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Website Redesign".to_string(),
            description: "Redesign website UI/UX.".to_string(),
            status: ProjectStatus::InProgress,
            members: 2,
            team: vec!["Amna".to_string(), "Ali".to_string()],
            progress: 0,
            due: "12 Feb 2025".to_string(),
        },
        Project {
            id: 2,
            name: "Mobile App UI".to_string(),
            description: "Design mobile app screens.".to_string(),
            status: ProjectStatus::Completed,
            members: 2,
            team: vec!["Sara".to_string(), "Hussnat".to_string()],
            progress: 0,
            due: "03 Jan 2025".to_string(),
        },
        Project {
            id: 3,
            name: "Marketing Dashboard".to_string(),
            description: "Create dashboard for marketing.".to_string(),
            status: ProjectStatus::Pending,
            members: 2,
            team: vec!["Ali".to_string(), "Hussnat".to_string()],
            progress: 0,
            due: "20 Feb 2025".to_string(),
        },
    ]
}

impl Screen for ProjectsScreen {
    type Message = ProjectsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            button(text("Back"))
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::Back)),
            text("Projects").size(28),
            horizontal_space(),
            button(text("New Project"))
                .style(button::primary)
                .on_press(ScreenMessage::ScreenMessage(ProjectsMessage::OpenModal)),
        ]
        .spacing(12);

        let search = text_input("Search projects...", &self.search)
            .on_input(|value| ScreenMessage::ScreenMessage(ProjectsMessage::SearchChanged(value)))
            .padding(10);

        let query = self.search.to_lowercase();
        let matching: Vec<&Project> = self
            .projects
            .iter()
            .filter(|project| project.name.to_lowercase().contains(&query))
            .collect();

        let mut cards = Column::new().spacing(12);
        if matching.is_empty() {
            cards = cards.push(text("No project found").color(widgets::muted()));
        } else {
            for project in matching {
                cards = cards.push(project_card(project));
            }
        }

        let base = column![header, search, scrollable(cards).height(Length::Fill)]
            .spacing(16)
            .padding(20);

        if self.show_modal {
            widgets::modal(
                base,
                self.add_form(),
                ScreenMessage::ScreenMessage(ProjectsMessage::CloseModal),
            )
        } else {
            base.into()
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            ProjectsMessage::SearchChanged(value) => self.search = value,
            ProjectsMessage::OpenModal => self.show_modal = true,
            ProjectsMessage::CloseModal => self.show_modal = false,
            ProjectsMessage::NewNameChanged(value) => self.new_name = value,
            ProjectsMessage::NewDueChanged(value) => self.new_due = value,
            ProjectsMessage::AddProject => {
                self.form_errors = validate::check_quick_project(&self.new_name, &self.new_due);
                if self.form_errors.is_empty() {
                    let project = Project {
                        id: self.projects.len() as i64 + 1,
                        name: self.new_name.clone(),
                        description: "No description yet.".to_string(),
                        status: ProjectStatus::Pending,
                        members: 0,
                        team: Vec::new(),
                        progress: 0,
                        due: self.new_due.clone(),
                    };
                    tracing::info!(name = %project.name, due = %project.due, "project added");
                    self.projects.push(project);
                    self.show_modal = false;
                    self.new_name.clear();
                    self.new_due.clear();
                }
            }
        }
        Task::none()
    }
}

impl ProjectsScreen {
    fn add_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = column![text("Create New Project").size(20)]
            .push(
                text_input("Project Name", &self.new_name)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(ProjectsMessage::NewNameChanged(value))
                    })
                    .padding(8),
            )
            .push(
                text_input("Due date (e.g. 12 Feb 2025)", &self.new_due)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(ProjectsMessage::NewDueChanged(value))
                    })
                    .padding(8),
            )
            .push_maybe(self.form_errors.get(fields::FORM).map(widgets::field_error))
            .push(
                button(text("Add Project"))
                    .style(button::primary)
                    .width(Length::Fill)
                    .on_press(ScreenMessage::ScreenMessage(ProjectsMessage::AddProject)),
            )
            .spacing(12);

        widgets::dialog_panel(form).into()
    }
}

fn project_card(project: &Project) -> Element<'_, ScreenMessage<ProjectsScreen>> {
    widgets::card(
        column![
            row![
                text(&project.name).size(18),
                horizontal_space(),
                widgets::badge(project.status),
            ]
            .spacing(8),
            text(format!("Due Date: {}", project.due))
                .size(13)
                .color(widgets::muted()),
            button(text("View Details"))
                .style(button::primary)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenProject(
                    project.clone(),
                ))),
        ]
        .spacing(8),
    )
    .into()
}
