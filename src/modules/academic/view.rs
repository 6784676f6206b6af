use edupro_models::User;
use edupro_models::catalog::{ASSIGNMENTS, AssignmentStatus, EXTRACURRICULARS, MAJORS};
use std::fmt::Write;

pub fn render(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Academy");
    let _ = writeln!(out);

    let _ = writeln!(out, "Majors");
    for major in &MAJORS {
        let marker = if user.major_id == Some(major.id) { "*" } else { " " };
        let _ = writeln!(out, " {marker}{:<5} {}", major.code, major.name);
        let _ = writeln!(out, "        {}", major.curriculum.join(" · "));
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Assignments");
    for assignment in &ASSIGNMENTS {
        let status = match (assignment.status, assignment.score) {
            (AssignmentStatus::Graded, Some(score)) => format!("graded {score}"),
            (status, _) => format!("{status:?}").to_lowercase(),
        };
        let _ = writeln!(
            out,
            "  {} · {} · due {} · {}",
            assignment.title, assignment.subject, assignment.due_date, status
        );
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Extracurriculars");
    for club in &EXTRACURRICULARS {
        let _ = writeln!(out, "  {} ({} members)", club.name, club.members);
    }
    out
}
