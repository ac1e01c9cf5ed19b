use iced::widget::{
    Column, button, canvas, checkbox, column, horizontal_space, pick_list, progress_bar, row,
    scrollable, text, text_input,
};
use iced::{Element, Length};
use rfd::AsyncFileDialog;
use time::OffsetDateTime;
use time::macros::date;

use crate::core::metrics::{self, DeadlineWindow};
use crate::core::model::{AttachmentInfo, Comment, Project, Task, TeamMember};
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};

#[derive(Debug, Clone)]
pub struct ProjectDetailsScreen {
    project: Project,
    username: String,
    /// Fixed share backing the progress pie.
    completed: u8,
    window: DeadlineWindow,
    team: Vec<TeamMember>,
    tasks: Vec<Task>,
    comments: Vec<Comment>,
    comment_input: String,
    files: Vec<AttachmentInfo>,
    show_task_popup: bool,
    new_task_text: String,
    assigned_to: Option<String>,
}

#[derive(Debug, Clone)]
pub enum DetailsMessage {
    ToggleTask(i64),
    OpenTaskPopup,
    CloseTaskPopup,
    TaskTextChanged(String),
    AssignTo(String),
    SaveTask,
    CommentChanged(String),
    PostComment,
    UploadFiles,
    FilesChosen(Vec<String>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Back,
}

impl ProjectDetailsScreen {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            username: "Amina".to_string(),
            completed: 65,
            window: DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 02 - 10)),
            team: seed_team(),
            tasks: seed_tasks(),
            comments: Vec::new(),
            comment_input: String::new(),
            files: Vec::new(),
            show_task_popup: false,
            new_task_text: String::new(),
            assigned_to: None,
        }
    }
}

fn seed_team() -> Vec<TeamMember> {
    [
        ("Amina", "Frontend", 80),
        ("Hussnat", "Backend", 60),
        ("Rubi", "UI/UX", 70),
        ("Fareeha", "QA", 50),
    ]
    .into_iter()
    .map(|(name, role, percent)| TeamMember {
        name: name.to_string(),
        role: role.to_string(),
        percent,
    })
    .collect()
}

fn seed_tasks() -> Vec<Task> {
    vec![
        Task {
            id: 1,
            text: "Frontend Landing Page".to_string(),
            done: false,
            assigned_to: "Amina".to_string(),
        },
        Task {
            id: 2,
            text: "Create Project API".to_string(),
            done: true,
            assigned_to: "Hussnat".to_string(),
        },
        Task {
            id: 3,
            text: "Team Dashboard UI".to_string(),
            done: false,
            assigned_to: "Rubi".to_string(),
        },
    ]
}

impl Screen for ProjectDetailsScreen {
    type Message = DetailsMessage;
    type ParentMessage = ParentMessage;

    fn view(&self) -> Element<'_, ScreenMessage<Self>> {
        let header = row![
            button(text("Back"))
                .style(button::secondary)
                .on_press(ScreenMessage::ParentMessage(ParentMessage::Back)),
            text("Project Details").size(28),
            horizontal_space(),
            text(&self.project.name).size(16).color(widgets::muted()),
            widgets::badge(self.project.status),
        ]
        .spacing(12);

        let top_grid = row![
            self.progress_card(),
            self.team_card(),
            self.deadline_card(),
        ]
        .spacing(16);

        let content = scrollable(
            column![
                header,
                top_grid,
                self.tasks_card(),
                self.files_card(),
                self.comments_card(),
            ]
            .spacing(16),
        );

        let base = column![content].padding(20);

        if self.show_task_popup {
            widgets::modal(
                base,
                self.task_form(),
                ScreenMessage::ScreenMessage(DetailsMessage::CloseTaskPopup),
            )
        } else {
            base.into()
        }
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> iced::Task<ScreenMessage<Self>> {
        match message {
            DetailsMessage::ToggleTask(id) => {
                // Rebuilt wholesale; no partially toggled list is ever
                // observable.
                self.tasks = self
                    .tasks
                    .iter()
                    .map(|task| {
                        if task.id == id {
                            Task {
                                done: !task.done,
                                ..task.clone()
                            }
                        } else {
                            task.clone()
                        }
                    })
                    .collect();
                iced::Task::none()
            }
            DetailsMessage::OpenTaskPopup => {
                self.show_task_popup = true;
                iced::Task::none()
            }
            DetailsMessage::CloseTaskPopup => {
                self.show_task_popup = false;
                iced::Task::none()
            }
            DetailsMessage::TaskTextChanged(value) => {
                self.new_task_text = value;
                iced::Task::none()
            }
            DetailsMessage::AssignTo(name) => {
                self.assigned_to = Some(name);
                iced::Task::none()
            }
            DetailsMessage::SaveTask => {
                let assignee = self.assigned_to.clone().unwrap_or_default();
                // A rejected entry leaves the popup open and its fields
                // untouched.
                if let Some(task) = Task::create(&self.new_task_text, &assignee) {
                    self.tasks.push(task);
                    self.new_task_text.clear();
                    self.assigned_to = None;
                    self.show_task_popup = false;
                }
                iced::Task::none()
            }
            DetailsMessage::CommentChanged(value) => {
                self.comment_input = value;
                iced::Task::none()
            }
            DetailsMessage::PostComment => {
                if self.comment_input.trim().is_empty() {
                    return iced::Task::none();
                }
                let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
                let time = now
                    .time()
                    .format(time::macros::format_description!(
                        "[hour]:[minute]:[second]"
                    ))
                    .unwrap_or_default();
                self.comments.push(Comment {
                    author: self.username.clone(),
                    message: self.comment_input.clone(),
                    time,
                });
                self.comment_input.clear();
                iced::Task::none()
            }
            DetailsMessage::UploadFiles => iced::Task::perform(
                async {
                    let handles = AsyncFileDialog::new().pick_files().await;
                    handles
                        .map(|handles| handles.iter().map(|handle| handle.file_name()).collect())
                        .unwrap_or_default()
                },
                |names| ScreenMessage::ScreenMessage(DetailsMessage::FilesChosen(names)),
            ),
            DetailsMessage::FilesChosen(names) => {
                // Names only; file bytes are never kept.
                self.files
                    .extend(names.into_iter().map(|name| AttachmentInfo { name }));
                iced::Task::none()
            }
        }
    }
}

impl ProjectDetailsScreen {
    fn progress_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let (done, remaining) = metrics::progress_split(i64::from(self.completed));
        widgets::card(
            column![
                text("Project Progress").size(18),
                canvas(widgets::ProgressPie { completed: done })
                    .width(Length::Fixed(160.0))
                    .height(Length::Fixed(160.0)),
                text(format!("Completed: {done}%")).color(widgets::indigo()),
                text(format!("Remaining: {remaining}%")).color(widgets::danger()),
            ]
            .spacing(10),
        )
        .width(Length::FillPortion(1))
        .into()
    }

    fn team_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut members = Column::new().spacing(10);
        for member in &self.team {
            members = members.push(widgets::progress_row(
                member.name.clone(),
                member.role.clone(),
                member.percent,
            ));
        }
        widgets::card(column![text("Team Collaboration").size(18), members].spacing(12))
            .width(Length::FillPortion(1))
            .into()
    }

    fn deadline_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let report = self.window.elapsed(OffsetDateTime::now_utc());
        let remaining_color = if report.is_overdue() {
            widgets::danger()
        } else {
            widgets::success()
        };
        let bar_color = if report.is_critical() {
            widgets::danger()
        } else {
            widgets::indigo()
        };
        let bar_value = metrics::clamp_percent(report.elapsed_percent) as f32;

        widgets::card(
            column![
                text("Deadline Overview").size(18),
                text(format!("Total Duration: {} days", report.total_days)),
                text(format!("Days Passed: {}", report.passed_days)),
                text(format!("Remaining: {} days", report.display_remaining()))
                    .color(remaining_color),
                progress_bar(0.0..=100.0, bar_value)
                    .height(Length::Fixed(12.0))
                    .style(move |_theme| iced::widget::progress_bar::Style {
                        background: widgets::track_gray().into(),
                        bar: bar_color.into(),
                        border: iced::border::rounded(6.0),
                    }),
                text(format!("{}% time elapsed", report.elapsed_percent)),
            ]
            .spacing(8),
        )
        .width(Length::FillPortion(1))
        .into()
    }

    fn tasks_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let stats = metrics::task_stats(&self.tasks);
        let stat_tiles = row![
            widgets::stat_card("Total Tasks", stats.total.to_string()),
            widgets::stat_card("Completed", stats.completed.to_string()),
            widgets::stat_card("Pending", stats.pending.to_string()),
        ]
        .spacing(12);

        let mut task_rows = Column::new().spacing(8);
        for task in &self.tasks {
            task_rows = task_rows.push(task_row(task));
        }

        widgets::card(
            column![
                row![
                    text("Tasks").size(20),
                    horizontal_space(),
                    button(text("Add Task")).style(button::primary).on_press(
                        ScreenMessage::ScreenMessage(DetailsMessage::OpenTaskPopup)
                    ),
                ],
                stat_tiles,
                task_rows,
            ]
            .spacing(12),
        )
        .into()
    }

    fn files_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut list = Column::new().spacing(6);
        for file in &self.files {
            list = list.push(text(&file.name).size(14));
        }
        widgets::card(
            column![
                text("Uploaded Files").size(20),
                button(text("Choose files"))
                    .style(button::secondary)
                    .on_press(ScreenMessage::ScreenMessage(DetailsMessage::UploadFiles)),
                list,
            ]
            .spacing(12),
        )
        .into()
    }

    fn comments_card(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut thread = Column::new().spacing(10);
        for comment in &self.comments {
            thread = thread.push(
                column![
                    text(&comment.author).size(14).color(widgets::indigo()),
                    text(&comment.message).size(14),
                    text(&comment.time).size(11).color(widgets::muted()),
                ]
                .spacing(2),
            );
        }
        let composer = row![
            text_input("Write a comment...", &self.comment_input)
                .on_input(|value| {
                    ScreenMessage::ScreenMessage(DetailsMessage::CommentChanged(value))
                })
                .on_submit(ScreenMessage::ScreenMessage(DetailsMessage::PostComment))
                .padding(10),
            button(text("Post"))
                .style(button::primary)
                .on_press(ScreenMessage::ScreenMessage(DetailsMessage::PostComment)),
        ]
        .spacing(10);

        widgets::card(column![text("Comments").size(20), thread, composer].spacing(12)).into()
    }

    fn task_form(&self) -> Element<'_, ScreenMessage<Self>> {
        let names: Vec<String> = self.team.iter().map(|member| member.name.clone()).collect();
        let form = column![text("Add New Task").size(20)]
            .push(
                text_input("Enter task name...", &self.new_task_text)
                    .on_input(|value| {
                        ScreenMessage::ScreenMessage(DetailsMessage::TaskTextChanged(value))
                    })
                    .padding(8),
            )
            .push(
                pick_list(names, self.assigned_to.clone(), |name| {
                    ScreenMessage::ScreenMessage(DetailsMessage::AssignTo(name))
                })
                .placeholder("Assign to...")
                .width(Length::Fill),
            )
            .push(
                row![
                    horizontal_space(),
                    button(text("Cancel")).style(button::secondary).on_press(
                        ScreenMessage::ScreenMessage(DetailsMessage::CloseTaskPopup)
                    ),
                    button(text("Save"))
                        .style(button::primary)
                        .on_press(ScreenMessage::ScreenMessage(DetailsMessage::SaveTask)),
                ]
                .spacing(10),
            )
            .spacing(12);

        widgets::dialog_panel(form).into()
    }
}

fn task_row(task: &Task) -> Element<'_, ScreenMessage<ProjectDetailsScreen>> {
    let title = if task.done {
        text(&task.text).size(15).color(widgets::muted())
    } else {
        text(&task.text).size(15)
    };
    row![
        checkbox("", task.done)
            .on_toggle(move |_| ScreenMessage::ScreenMessage(DetailsMessage::ToggleTask(task.id))),
        column![
            title,
            text(format!("Assigned to: {}", task.assigned_to))
                .size(12)
                .color(widgets::indigo()),
        ]
        .spacing(2),
    ]
    .spacing(10)
    .into()
}
