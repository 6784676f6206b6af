use edupro_core::ThemeMode;
use std::fmt::Write;

pub fn render_sign_in(theme: ThemeMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "EduPro · School Portal  [{} mode]", theme.as_str());
    let _ = writeln!(out);
    let _ = writeln!(out, "Sign in to continue.");
    let _ = writeln!(out, "  login <username> <password>");
    let _ = writeln!(out);
    let _ = writeln!(out, "Demo accounts: bagus123 (student), anita_teacher (teacher), admin");
    out
}
