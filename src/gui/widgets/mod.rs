use iced::widget::{
    Container, canvas, center, column, container, horizontal_space, mouse_area, opaque,
    progress_bar, row, stack, text, vertical_space,
};
use iced::{Color, Element, Length, Point, Radians, border};

use crate::core::metrics;
use crate::core::model::ProjectStatus;

pub fn indigo() -> Color {
    Color::from_rgb8(0x4f, 0x46, 0xe5)
}

pub fn track_gray() -> Color {
    Color::from_rgb8(0xe5, 0xe7, 0xeb)
}

pub fn danger() -> Color {
    Color::from_rgb8(0xdc, 0x26, 0x26)
}

pub fn success() -> Color {
    Color::from_rgb8(0x16, 0xa3, 0x4a)
}

pub fn muted() -> Color {
    Color::from_rgb8(0x6b, 0x72, 0x80)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    Projects,
    Profile,
    Logout,
}

/// Sidebar plus main content, shared by the screens that keep the
/// workspace navigation visible. The active entry is highlighted.
pub fn shell<'a, Message: Clone + 'a>(
    active: NavTarget,
    content: impl Into<Element<'a, Message>>,
    on_nav: impl Fn(NavTarget) -> Message + 'a,
) -> Element<'a, Message> {
    let entry = |target: NavTarget, label: &'a str| {
        let style = if target == active {
            iced::widget::button::primary
        } else {
            iced::widget::button::text
        };
        iced::widget::button(text(label).size(15))
            .style(style)
            .width(Length::Fill)
            .on_press(on_nav(target))
    };

    let sidebar = column![
        text("CollabSpace").size(24).color(indigo()),
        text("Team workspace").size(12).color(muted()),
        vertical_space().height(Length::Fixed(12.0)),
        entry(NavTarget::Dashboard, "Dashboard"),
        entry(NavTarget::Projects, "Projects"),
        entry(NavTarget::Profile, "Profile"),
        vertical_space(),
        entry(NavTarget::Logout, "Logout"),
    ]
    .spacing(8)
    .padding(16);

    row![
        container(sidebar)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(container::rounded_box),
        container(content.into())
            .width(Length::FillPortion(4))
            .height(Length::Fill)
            .padding(20),
    ]
    .into()
}

/// Overlays `dialog` on `base` behind a dimmed, click-to-dismiss
/// backdrop.
pub fn modal<'a, Message: Clone + 'a>(
    base: impl Into<Element<'a, Message>>,
    dialog: impl Into<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(dialog)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.4,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_dismiss)
        )
    ]
    .into()
}

/// Rounded panel used for every card-shaped block.
pub fn card<'a, Message: 'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    container(content).padding(16).style(container::rounded_box)
}

pub fn dialog_panel<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
) -> Container<'a, Message> {
    container(content)
        .padding(24)
        .width(Length::Fixed(420.0))
        .style(container::rounded_box)
}

pub fn badge<'a, Message: 'a>(status: ProjectStatus) -> Element<'a, Message> {
    let (background, foreground) = match status {
        ProjectStatus::Completed => (
            Color::from_rgb8(0xdc, 0xfc, 0xe7),
            Color::from_rgb8(0x15, 0x80, 0x3d),
        ),
        ProjectStatus::Active | ProjectStatus::InProgress => (
            Color::from_rgb8(0xe0, 0xe7, 0xff),
            Color::from_rgb8(0x43, 0x38, 0xca),
        ),
        ProjectStatus::Pending | ProjectStatus::Planning => (
            Color::from_rgb8(0xfe, 0xf9, 0xc3),
            Color::from_rgb8(0xa1, 0x62, 0x07),
        ),
    };
    container(text(status.to_string()).size(12).color(foreground))
        .padding(4)
        .style(move |_theme| container::Style {
            background: Some(background.into()),
            border: border::rounded(8.0),
            ..container::Style::default()
        })
        .into()
}

pub fn stat_card<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    card(column![text(label).size(13).color(muted()), text(value).size(26)].spacing(4))
        .width(Length::Fill)
        .into()
}

pub fn field_error<'a, Message: 'a>(message: &'a str) -> Element<'a, Message> {
    text(message).size(13).color(danger()).into()
}

/// Label, role and percentage over a slim bar, as in the team roster.
pub fn progress_row<'a, Message: 'a>(
    label: String,
    detail: String,
    percent: u8,
) -> Element<'a, Message> {
    column![
        row![
            text(label).size(14),
            text(detail).size(14).color(indigo()),
            horizontal_space(),
            text(format!("{percent}%")).size(14),
        ]
        .spacing(6),
        progress_bar(0.0..=100.0, f32::from(percent)).height(Length::Fixed(8.0)),
    ]
    .spacing(4)
    .into()
}

/// Two-slice progress pie drawn on a canvas.
#[derive(Debug, Clone, Copy)]
pub struct ProgressPie {
    pub completed: u8,
}

impl<Message> canvas::Program<Message> for ProgressPie {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: iced::Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0;
        let (done, remaining) = metrics::progress_split(i64::from(self.completed));

        let top = -std::f32::consts::FRAC_PI_2;
        let split = top + f32::from(done) / 100.0 * std::f32::consts::TAU;
        if done > 0 {
            frame.fill(&slice(center, radius, top, split), indigo());
        }
        if remaining > 0 {
            let full = top + std::f32::consts::TAU;
            frame.fill(&slice(center, radius, split, full), track_gray());
        }
        vec![frame.into_geometry()]
    }
}

fn slice(center: Point, radius: f32, from: f32, to: f32) -> canvas::Path {
    canvas::Path::new(|builder| {
        builder.move_to(center);
        builder.arc(canvas::path::Arc {
            center,
            radius,
            start_angle: Radians(from),
            end_angle: Radians(to),
        });
        builder.close();
    })
}
