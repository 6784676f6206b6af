use edupro_models::User;
use edupro_models::catalog::{ANNOUNCEMENTS, ATTENDANCE_SUMMARY, find_major};
use std::fmt::Write;

use crate::widgets::RealTimeClock;

pub fn render(user: &User, clock: &RealTimeClock) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Welcome back, {}!", user.first_name());
    let _ = writeln!(
        out,
        "{}  {}  ({})",
        clock.time_text(),
        clock.date_text(),
        clock.zone_label()
    );
    let _ = writeln!(out);

    if let Some(major) = user.major_id.and_then(find_major) {
        let _ = writeln!(out, "Major       {} ({})", major.name, major.code);
    }
    if let Some(class_name) = &user.class_name {
        let _ = writeln!(out, "Class       {class_name}");
    }
    if !user.subjects.is_empty() {
        let _ = writeln!(out, "Subjects    {}", user.subjects.join(", "));
    }
    let _ = writeln!(out, "Attendance  {}%", ATTENDANCE_SUMMARY.present);
    let _ = writeln!(out);

    let _ = writeln!(out, "Announcements");
    for announcement in &ANNOUNCEMENTS {
        let _ = writeln!(
            out,
            "  [{:?}] {} ({})",
            announcement.category, announcement.title, announcement.date
        );
        let _ = writeln!(out, "      {}", announcement.content);
    }
    out
}
