use iced::widget::{Column, button, column, container, horizontal_space, progress_bar, row, scrollable, text, text_input};
use iced::{Element, Length, Task};

use crate::core::metrics;
use crate::core::model::{Project, ProjectStatus, TaskOverview};
use crate::core::validate::{self, FieldErrors, fields};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{self, NavTarget},
};

#[derive(Debug, Clone)]
pub struct DashboardScreen {
    query: String,
    projects: Vec<Project>,
    tasks: Vec<TaskOverview>,
    create_open: bool,
    form_name: String,
    form_description: String,
    form_members: String,
    form_errors: FieldErrors,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    QueryChanged(String),
    OpenCreate,
    CloseCreate,
    FormNameChanged(String),
    FormDescriptionChanged(String),
    FormMembersChanged(String),
    SubmitCreate,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Nav(NavTarget),
}

impl DashboardScreen {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            projects: seed_projects(),
            tasks: seed_tasks(),
            create_open: false,
            form_name: String::new(),
            form_description: String::new(),
            form_members: "1".to_string(),
            form_errors: FieldErrors::new(),
        }
    }
}

fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            name: "Website Redesign".to_string(),
            description: "Landing + Dashboard redesign".to_string(),
            status: ProjectStatus::Active,
            members: 4,
            team: Vec::new(),
            progress: 48,
            due: String::new(),
        },
        Project {
            id: 2,
            name: "Mobile App".to_string(),
            description: "React Native build".to_string(),
            status: ProjectStatus::Planning,
            members: 3,
            team: Vec::new(),
            progress: 12,
            due: String::new(),
        },
        Project {
            id: 3,
            name: "Marketing Campaign".to_string(),
            description: "Q4 Paid Ads".to_string(),
            status: ProjectStatus::Active,
            members: 2,
            team: Vec::new(),
            progress: 72,
            due: String::new(),
        },
    ]
}

fn seed_tasks() -> Vec<TaskOverview> {
    vec![
        TaskOverview {
            id: 1,
            title: "Design review".to_string(),
            project: "Website Redesign".to_string(),
            due: "Nov 30".to_string(),
            done: false,
        },
        TaskOverview {
            id: 2,
            title: "API spec".to_string(),
            project: "Mobile App".to_string(),
            due: "Dec 3".to_string(),
            done: true,
        },
        TaskOverview {
            id: 3,
            title: "Ad creative".to_string(),
            project: "Marketing Campaign".to_string(),
            due: "Dec 6".to_string(),
            done: false,
        },
    ]
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let topbar = row![
            text("Dashboard").size(28),
            horizontal_space(),
            text_input("Search projects, tasks, people...", &self.query)
                .on_input(|value| {
                    ScreenMessage::ScreenMessage(DashboardMessage::QueryChanged(value))
                })
                .padding(8)
                .width(Length::Fixed(320.0)),
            button(text("New"))
                .style(button::primary)
                .on_press(ScreenMessage::ScreenMessage(DashboardMessage::OpenCreate)),
        ]
        .spacing(12);

        let stats = row![
            widgets::stat_card("Projects", self.projects.len().to_string()),
            widgets::stat_card(
                "Active Tasks",
                metrics::open_task_count(&self.tasks).to_string()
            ),
            widgets::stat_card("Team Members", 12.to_string()),
        ]
        .spacing(16);

        let query = self.query.to_lowercase();
        let mut project_rows = Column::new().spacing(10);
        for project in self
            .projects
            .iter()
            .filter(|project| project.name.to_lowercase().contains(&query))
        {
            project_rows = project_rows.push(project_row(project));
        }
        let projects_card = widgets::card(
            column![text("Projects").size(18), project_rows].spacing(12),
        )
        .width(Length::FillPortion(1));

        let mut task_rows = Column::new().spacing(10);
        for task in &self.tasks {
            task_rows = task_rows.push(task_row(task));
        }
        let tasks_card = widgets::card(column![text("Tasks").size(18), task_rows].spacing(12))
            .width(Length::FillPortion(1));

        let quick_actions = widgets::card(
            column![
                text("Quick actions").size(18),
                row![
                    button(text("Create project")).style(button::primary).on_press(
                        ScreenMessage::ScreenMessage(DashboardMessage::OpenCreate)
                    ),
                    button(text("Import CSV")).style(button::secondary),
                    button(text("Generate report")).style(button::secondary),
                ]
                .spacing(10),
            ]
            .spacing(12),
        );

        let content = scrollable(
            column![
                topbar,
                stats,
                row![projects_card, tasks_card].spacing(16),
                quick_actions,
            ]
            .spacing(20),
        );

        let base = widgets::shell(NavTarget::Dashboard, content, |target| {
            ScreenMessage::ParentMessage(ParentMessage::Nav(target))
        });

        if self.create_open {
            widgets::modal(
                base,
                self.create_form(),
                ScreenMessage::ScreenMessage(DashboardMessage::CloseCreate),
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
            DashboardMessage::QueryChanged(value) => self.query = value,
            DashboardMessage::OpenCreate => self.create_open = true,
            DashboardMessage::CloseCreate => self.create_open = false,
            DashboardMessage::FormNameChanged(value) => self.form_name = value,
            DashboardMessage::FormDescriptionChanged(value) => self.form_description = value,
            DashboardMessage::FormMembersChanged(value) => self.form_members = value,
            DashboardMessage::SubmitCreate => {
                self.form_errors = validate::check_create_project(
                    &self.form_name,
                    &self.form_description,
                    &self.form_members,
                );
                if self.form_errors.is_empty() {
                    // This entry point only records the payload; the
                    // seeded list is left untouched.
                    tracing::info!(
                        name = %self.form_name,
                        members = %self.form_members,
                        "create project"
                    );
                    self.create_open = false;
                    self.form_name.clear();
                    self.form_description.clear();
                    self.form_members = "1".to_string();
                }
            }
        }
        Task::none()
    }
}

impl DashboardScreen {
    fn create_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let form = column![text("Create project").size(20)]
            .push(
                column![
                    text("Project name").size(14),
                    text_input("", &self.form_name).on_input(|value| {
                        ScreenMessage::ScreenMessage(DashboardMessage::FormNameChanged(value))
                    }).padding(8),
                ]
                .spacing(4),
            )
            .push_maybe(self.form_errors.get(fields::NAME).map(widgets::field_error))
            .push(
                column![
                    text("Short description").size(14),
                    text_input("", &self.form_description).on_input(|value| {
                        ScreenMessage::ScreenMessage(DashboardMessage::FormDescriptionChanged(
                            value,
                        ))
                    }).padding(8),
                ]
                .spacing(4),
            )
            .push_maybe(
                self.form_errors
                    .get(fields::DESCRIPTION)
                    .map(widgets::field_error),
            )
            .push(
                column![
                    text("Members").size(14),
                    text_input("1", &self.form_members).on_input(|value| {
                        ScreenMessage::ScreenMessage(DashboardMessage::FormMembersChanged(value))
                    }).padding(8).width(Length::Fixed(120.0)),
                ]
                .spacing(4),
            )
            .push_maybe(
                self.form_errors
                    .get(fields::MEMBERS)
                    .map(widgets::field_error),
            )
            .push(
                row![
                    horizontal_space(),
                    button(text("Cancel")).style(button::secondary).on_press(
                        ScreenMessage::ScreenMessage(DashboardMessage::CloseCreate)
                    ),
                    button(text("Create")).style(button::primary).on_press(
                        ScreenMessage::ScreenMessage(DashboardMessage::SubmitCreate)
                    ),
                ]
                .spacing(10),
            )
            .spacing(12);

        widgets::dialog_panel(form).into()
    }
}

fn project_row(project: &Project) -> Element<'_, ScreenMessage<DashboardScreen>> {
    let left = column![
        text(&project.name).size(15),
        text(&project.description).size(12).color(widgets::muted()),
        row![
            widgets::badge(project.status),
            text(format!("{} members", project.members))
                .size(12)
                .color(widgets::muted()),
        ]
        .spacing(8),
    ]
    .spacing(4);

    let bar_value = metrics::clamp_percent(i64::from(project.progress));
    let right = column![
        text(format!("{}%", bar_value)).size(14),
        progress_bar(0.0..=100.0, f32::from(bar_value))
            .width(Length::Fixed(120.0))
            .height(Length::Fixed(8.0)),
    ]
    .spacing(6);

    row![left, horizontal_space(), right].spacing(12).into()
}

fn task_row(task: &TaskOverview) -> Element<'_, ScreenMessage<DashboardScreen>> {
    let status = if task.done {
        text("Done").size(12).color(widgets::success())
    } else {
        text("Open").size(12).color(widgets::indigo())
    };
    row![
        column![
            text(&task.title).size(15),
            text(format!("{} • due {}", task.project, task.due))
                .size(12)
                .color(widgets::muted()),
        ]
        .spacing(4),
        horizontal_space(),
        container(status).padding(4),
    ]
    .spacing(12)
    .into()
}
