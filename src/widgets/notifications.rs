//! Notification dropdown.

use edupro_models::catalog::{NOTIFICATIONS, NotificationKind};
use std::fmt::Write;

pub fn render() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Notifications ({})", NOTIFICATIONS.len());
    for notification in &NOTIFICATIONS {
        let icon = match notification.kind {
            NotificationKind::Assignment => "✎",
            NotificationKind::Exam => "✓",
            NotificationKind::Attendance => "◷",
        };
        let _ = writeln!(out, "  {icon} {} · {}", notification.title, notification.time);
        let _ = writeln!(out, "      {}", notification.description);
    }
    out
}
