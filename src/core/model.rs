use std::fmt;

use base64::Engine as _;

use crate::core::metrics::TaskItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Planning,
    Pending,
    InProgress,
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Pending => "Pending",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// One project card. The dashboard seeds only a member headcount, the
/// list screen seeds a named roster; both live here so a full value can
/// travel to the detail screen as navigation payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    pub members: u32,
    pub team: Vec<String>,
    /// 0..=100
    pub progress: u8,
    pub due: String,
}

/// Checklist entry on the project detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub text: String,
    pub done: bool,
    pub assigned_to: String,
}

impl Task {
    /// Builds a new open entry with a millisecond-timestamp id. Blank
    /// text or a blank assignee is rejected before an id is taken.
    pub fn create(text: &str, assigned_to: &str) -> Option<Self> {
        if text.trim().is_empty() || assigned_to.trim().is_empty() {
            return None;
        }
        Some(Self {
            id: timestamp_id(),
            text: text.to_string(),
            done: false,
            assigned_to: assigned_to.to_string(),
        })
    }
}

fn timestamp_id() -> i64 {
    (time::OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// Task preview row on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskOverview {
    pub id: i64,
    pub title: String,
    pub project: String,
    pub due: String,
    pub done: bool,
}

impl TaskItem for Task {
    fn is_done(&self) -> bool {
        self.done
    }
}

impl TaskItem for TaskOverview {
    fn is_done(&self) -> bool {
        self.done
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Individual progress share, 0..=100.
    pub percent: u8,
}

/// Append-only comment thread entry; `time` is the display string
/// captured when the comment was posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub author: String,
    pub message: String,
    pub time: String,
}

/// Uploaded attachment. Only the display name is retained; file bytes
/// are never stored or transmitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: String,
    pub department: String,
    pub location: String,
    /// Inline encoded image (`data:` URI), held in memory only.
    pub avatar: Option<String>,
}

/// Encodes picked image bytes as an inline `data:` URI, sniffing the
/// mime type from the file name.
pub fn avatar_data_uri(file_name: &str, bytes: &[u8]) -> String {
    let mime = mime_guess::from_path(file_name).first_or_octet_stream();
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    format!("data:{};base64,{}", mime.essence_str(), encoded)
}
