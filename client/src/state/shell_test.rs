use super::*;

#[test]
fn starts_closed() {
    let shell = Shell::default();
    assert!(!shell.sidebar_open());
    assert_eq!(shell.sidebar_left(), "-240px");
    assert_eq!(shell.content_margin(), "0");
    assert_eq!(shell.toggle_icon(), "fas fa-chevron-right");
}

#[test]
fn opening_shifts_content_and_notifies() {
    let mut shell = Shell::default();
    let mut notes: Vec<String> = Vec::new();
    assert!(shell.toggle_sidebar(&mut notes));
    assert_eq!(shell.sidebar_left(), "0");
    assert_eq!(shell.content_margin(), "240px");
    assert_eq!(shell.toggle_icon(), "fas fa-chevron-left");
    assert_eq!(notes, vec!["Sticker tray opened"]);
}

#[test]
fn closing_is_silent() {
    let mut shell = Shell::default();
    let mut notes: Vec<String> = Vec::new();
    shell.toggle_sidebar(&mut notes);
    assert!(!shell.toggle_sidebar(&mut notes));
    assert_eq!(notes.len(), 1);
    assert_eq!(shell.sidebar_left(), "-240px");
}

#[test]
fn onboarding_reveals_then_hides() {
    let mut shell = Shell::default();
    let mut notes: Vec<String> = Vec::new();
    assert!(shell.onboarding(OnboardingStep::Reveal, &mut notes));
    assert!(shell.sidebar_open());
    assert!(shell.onboarding(OnboardingStep::Hide, &mut notes));
    assert!(!shell.sidebar_open());
    assert_eq!(notes, vec!["Sticker tray opened"]);
}

#[test]
fn onboarding_respects_user_toggles() {
    let mut shell = Shell::default();
    let mut notes: Vec<String> = Vec::new();
    shell.toggle_sidebar(&mut notes);
    assert!(!shell.onboarding(OnboardingStep::Reveal, &mut notes));

    shell.toggle_sidebar(&mut notes);
    assert!(!shell.onboarding(OnboardingStep::Hide, &mut notes));
    assert!(!shell.sidebar_open());
}
