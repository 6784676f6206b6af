use edupro_models::catalog::{EXAMS, ExamStatus, MAJORS};
use std::fmt::Write;

use super::model::ExamsScreen;

pub fn render(screen: &ExamsScreen) -> String {
    let selected = screen.selected();
    let mut out = String::new();
    let _ = writeln!(out, "Exams");
    let _ = writeln!(out);

    let tabs: Vec<String> = MAJORS
        .iter()
        .map(|major| {
            if major.id == selected.id {
                format!("[{}]", major.code)
            } else {
                major.code.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "  {}", tabs.join("  "));
    let _ = writeln!(out);

    let _ = writeln!(out, "{} · {}", selected.name, selected.description);
    let _ = writeln!(out, "Head of department: {}", selected.head_of_department);
    for subject in selected.curriculum {
        let _ = writeln!(out, "  - {subject}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Schedule");
    for exam in &EXAMS {
        let status = match exam.status {
            ExamStatus::Available => "open now",
            ExamStatus::Upcoming => "upcoming",
        };
        let _ = writeln!(out, "  {} · {} {} · {}", exam.subject, exam.date, exam.time, status);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_major_is_bracketed() {
        let mut screen = ExamsScreen::default();
        screen.select_code("AKL");
        let out = render(&screen);
        assert!(out.contains("[AKL]"));
        assert!(!out.contains("[RPL]"));
        assert!(out.contains("Siti Aminah, S.E"));
    }
}
