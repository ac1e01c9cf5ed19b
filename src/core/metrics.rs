use time::{Date, Duration, OffsetDateTime};

/// Elapsed-time share of a window at which its bar renders in the
/// warning style.
pub const CRITICAL_ELAPSED_PERCENT: i64 = 80;

/// Clamps a raw percentage into the displayable 0..=100 range.
pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}

/// Two-slice dataset for the progress pie: (completed, remaining).
pub fn progress_split(completed: i64) -> (u8, u8) {
    let done = clamp_percent(completed);
    (done, 100 - done)
}

/// Completion-flag seam shared by the dashboard task previews and the
/// per-project checklists.
pub trait TaskItem {
    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
}

pub fn open_task_count<T: TaskItem>(tasks: &[T]) -> usize {
    tasks.iter().filter(|task| !task.is_done()).count()
}

pub fn task_stats<T: TaskItem>(tasks: &[T]) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.is_done()).count();
    TaskStats {
        total,
        completed,
        pending: total - completed,
    }
}

/// Fixed project window. All derived values are functions of
/// (start, end, now) and are recomputed on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineWindow {
    pub start: Date,
    pub end: Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineReport {
    pub total_days: i64,
    pub passed_days: i64,
    /// Raw remainder; negative once the window has closed.
    pub remaining_days: i64,
    pub elapsed_percent: i64,
}

impl DeadlineWindow {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    pub fn elapsed(&self, now: OffsetDateTime) -> DeadlineReport {
        let start = self.start.midnight().assume_utc();
        let end = self.end.midnight().assume_utc();
        let total_days = days_ceil(end - start);
        let passed_days = days_ceil(now - start);
        let elapsed_percent = if total_days <= 0 {
            100
        } else {
            let raw = (passed_days as f64 / total_days as f64 * 100.0).round() as i64;
            raw.min(100)
        };
        DeadlineReport {
            total_days,
            passed_days,
            remaining_days: total_days - passed_days,
            elapsed_percent,
        }
    }
}

impl DeadlineReport {
    /// Remaining days as shown to the user; never negative.
    pub fn display_remaining(&self) -> i64 {
        self.remaining_days.max(0)
    }

    pub fn is_critical(&self) -> bool {
        self.elapsed_percent >= CRITICAL_ELAPSED_PERCENT
    }

    pub fn is_overdue(&self) -> bool {
        self.remaining_days <= 0
    }
}

/// Whole days rounded up, toward positive infinity for partial days and
/// toward zero for negative spans, matching day-count arithmetic on
/// millisecond clock differences.
fn days_ceil(span: Duration) -> i64 {
    let seconds = span.whole_seconds();
    let days = seconds / 86_400;
    if seconds % 86_400 > 0 { days + 1 } else { days }
}
