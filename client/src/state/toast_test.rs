use super::*;

#[test]
fn starts_hidden() {
    let toast = Toast::default();
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "");
    assert_eq!(toast.generation(), 0);
}

#[test]
fn show_then_expire_hides() {
    let mut toast = Toast::default();
    let generation = toast.show("Background updated");
    assert!(toast.is_visible());
    assert_eq!(toast.message(), "Background updated");
    assert!(toast.expire(generation));
    assert!(!toast.is_visible());
    assert_eq!(toast.message(), "Background updated");
}

#[test]
fn second_message_restarts_window() {
    let mut toast = Toast::default();
    let first = toast.show("Sticker moved");
    let second = toast.show("Notes widget opened");

    assert!(!toast.expire(first));
    assert!(toast.is_visible());
    assert_eq!(toast.message(), "Notes widget opened");
    assert!(toast.expire(second));
    assert!(!toast.is_visible());
}

#[test]
fn expire_twice_is_noop() {
    let mut toast = Toast::default();
    let generation = toast.show("x");
    assert!(toast.expire(generation));
    assert!(!toast.expire(generation));
}

#[test]
fn notifier_shows_message() {
    let mut toast = Toast::default();
    toast.notify("Sticker tray opened");
    assert!(toast.is_visible());
    assert_eq!(toast.generation(), 1);
}
