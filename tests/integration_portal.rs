mod common;

use common::{login_as, test_portal};
use edupro::cli::shell::{Outcome, Shell};
use edupro_core::{ScreenId, ThemeMode};

#[tokio::test]
async fn test_menu_bar_follows_role() {
    let mut portal = test_portal();
    login_as(&mut portal, "admin");
    let frame = portal.render();
    assert!(frame.contains("[Home]  Settings"));
    assert!(!frame.contains("Scan"));
}

#[tokio::test]
async fn test_exams_major_selector() {
    let mut portal = test_portal();
    login_as(&mut portal, "anita_teacher");
    assert!(portal.select_major("MM").is_err());

    portal.navigate(ScreenId::Exams).unwrap();
    let major = portal.select_major("otkp").unwrap();
    assert_eq!(major.name, "Office Management");
    assert!(portal.render().contains("[OTKP]"));
}

#[tokio::test]
async fn test_theme_shown_on_sign_in_after_logout() {
    let mut portal = test_portal();
    login_as(&mut portal, "bagus123");
    portal.set_theme(ThemeMode::Dark);
    portal.logout();
    assert!(portal.render().contains("[dark mode]"));
}

#[tokio::test]
async fn test_scripted_shell_session() {
    let mut shell = Shell::new(test_portal(), None);
    let failures = shell
        .run_script([
            "login bagus123 secret",
            "go scan",
            "scan",
            "whoami",
            "go settings",
            "theme dark",
            "logout",
        ])
        .await;

    assert_eq!(failures, 0);
    let portal = shell.portal();
    assert!(portal.current_user().is_none());
    assert_eq!(portal.state().theme.mode(), ThemeMode::Dark);
    assert_eq!(portal.device().stats().live(), 0);
}

#[tokio::test]
async fn test_avatar_upload_from_file() {
    let dir = std::env::temp_dir().join(format!("edupro-avatar-{}", uuid::Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("face.jpg");
    tokio::fs::write(&path, [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10])
        .await
        .unwrap();

    let mut shell = Shell::new(test_portal(), None);
    shell.run_line("login bagus123 pw").await.unwrap();
    let outcome = shell
        .run_line(&format!("avatar {}", path.display()))
        .await
        .unwrap();

    assert!(matches!(outcome, Outcome::Output(ref out) if out.starts_with("Avatar updated: data:image/jpeg;base64,")));
    assert!(shell.portal().current_user().unwrap().avatar.is_data_url());

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
