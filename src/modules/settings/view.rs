use edupro_core::ThemeMode;
use edupro_models::User;
use std::fmt::Write;

pub fn render(user: &User, theme: ThemeMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Settings");
    let _ = writeln!(out);
    let _ = writeln!(out, "Profile");
    let _ = writeln!(out, "  Name      {}", user.name);
    let _ = writeln!(out, "  Email     {}", user.email);
    let _ = writeln!(out, "  Role      {}", user.role);
    let _ = writeln!(out, "  ID        {}", user.badge_number());
    if let Some(status) = user.status {
        let _ = writeln!(out, "  Status    {status:?}");
    }
    let _ = writeln!(out, "  Avatar    {}", user.avatar);
    let _ = writeln!(out);
    let _ = writeln!(out, "Appearance");
    let _ = writeln!(
        out,
        "  Theme     {} (background {})",
        theme.as_str(),
        theme.background_hex()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Commands: theme <light|dark>, avatar <path>, logout");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use edupro_models::demo_accounts;

    #[test]
    fn test_shows_profile_and_theme() {
        let out = render(&demo_accounts::teacher(), ThemeMode::Dark);
        assert!(out.contains("Anita Widjaja"));
        assert!(out.contains("198804052012012001"));
        assert!(out.contains("dark (background #000000)"));
    }
}
