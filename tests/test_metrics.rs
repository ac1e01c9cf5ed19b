//! Tests for the derived-state helpers.
//!
//! Covers:
//! - Task aggregates over both task shapes
//! - Deadline window arithmetic, including ceil rounding, the percent
//!   cap, and the critical/overdue thresholds
//! - Idempotence of the pure helpers

mod common;

use collabspace::core::metrics::{
    clamp_percent, open_task_count, progress_split, task_stats,
};
use collabspace::{DeadlineWindow, TaskOverview};
use common::*;
use time::macros::{date, datetime};

#[test]
fn test_task_stats() {
    let tasks = tasks_with(&[true, false, false]);
    let stats = task_stats(&tasks);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.pending, 2);

    assert_eq!(open_task_count(&tasks), 2);
}

#[test]
fn test_task_stats_empty() {
    let tasks = tasks_with(&[]);
    let stats = task_stats(&tasks);
    assert_eq!((stats.total, stats.completed, stats.pending), (0, 0, 0));
    assert_eq!(open_task_count(&tasks), 0);
}

#[test]
fn test_aggregates_cover_dashboard_previews_too() {
    let previews = vec![
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
    ];
    assert_eq!(open_task_count(&previews), 1);
    assert_eq!(task_stats(&previews).completed, 1);
}

#[test]
fn test_deadline_midway() {
    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 02 - 10));
    let report = window.elapsed(datetime!(2025 - 01 - 21 00:00 UTC));

    assert_eq!(report.total_days, 40);
    assert_eq!(report.passed_days, 20);
    assert_eq!(report.elapsed_percent, 50);
    assert_eq!(report.remaining_days, 20);
    assert_eq!(report.display_remaining(), 20);
    assert!(!report.is_critical());
    assert!(!report.is_overdue());
}

#[test]
fn test_deadline_partial_day_rounds_up() {
    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 02 - 10));
    let report = window.elapsed(datetime!(2025 - 01 - 21 12:00 UTC));

    assert_eq!(report.passed_days, 21);
    assert_eq!(report.elapsed_percent, 53);
    assert_eq!(report.remaining_days, 19);
}

#[test]
fn test_deadline_past_the_end() {
    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 02 - 10));
    let report = window.elapsed(datetime!(2025 - 03 - 01 00:00 UTC));

    assert_eq!(report.passed_days, 59);
    assert_eq!(report.remaining_days, -19);
    assert_eq!(report.display_remaining(), 0);
    assert_eq!(report.elapsed_percent, 100);
    assert!(report.is_critical());
    assert!(report.is_overdue());
}

#[test]
fn test_deadline_critical_threshold() {
    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 01 - 11));
    // 8 of 10 days passed
    let report = window.elapsed(datetime!(2025 - 01 - 09 00:00 UTC));
    assert_eq!(report.elapsed_percent, 80);
    assert!(report.is_critical());
    assert!(!report.is_overdue());

    let earlier = window.elapsed(datetime!(2025 - 01 - 08 00:00 UTC));
    assert_eq!(earlier.elapsed_percent, 70);
    assert!(!earlier.is_critical());
}

#[test]
fn test_deadline_empty_window() {
    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 01 - 01));
    let report = window.elapsed(datetime!(2025 - 01 - 01 00:00 UTC));
    assert_eq!(report.total_days, 0);
    assert_eq!(report.elapsed_percent, 100);
    assert!(report.is_overdue());
}

#[test]
fn test_pure_helpers_are_idempotent() {
    let tasks = tasks_with(&[true, false, true]);
    assert_eq!(task_stats(&tasks), task_stats(&tasks));
    assert_eq!(open_task_count(&tasks), open_task_count(&tasks));

    let window = DeadlineWindow::new(date!(2025 - 01 - 01), date!(2025 - 02 - 10));
    let now = datetime!(2025 - 01 - 21 00:00 UTC);
    assert_eq!(window.elapsed(now), window.elapsed(now));
}

#[test]
fn test_clamp_and_split() {
    assert_eq!(clamp_percent(-5), 0);
    assert_eq!(clamp_percent(48), 48);
    assert_eq!(clamp_percent(150), 100);

    assert_eq!(progress_split(65), (65, 35));
    assert_eq!(progress_split(0), (0, 100));
    assert_eq!(progress_split(120), (100, 0));
    assert_eq!(progress_split(-10), (0, 100));
}
