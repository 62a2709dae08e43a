// SPDX-License-Identifier: MPL-2.0
use notice_desk::config::{self, Config, GeneralConfig};
use notice_desk::i18n::fluent::I18n;
use notice_desk::notifications::{
    Dialog, DialogState, Labels, ManualClock, Manager, Message, Node, Settings, Severity,
};
use notice_desk::ui::overlay::OverlaySurface;
use tempfile::tempdir;

fn overlay_manager() -> (Manager<OverlaySurface, ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut manager = Manager::with_clock(OverlaySurface::default(), clock.clone());
    manager.init();
    (manager, clock)
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let english = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&english, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let turkish = Config {
        general: GeneralConfig {
            language: Some("tr".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&turkish, &temp_config_file_path)
        .expect("Failed to write turkish config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load turkish config from path");
    let i18n_tr = I18n::new(None, &loaded);
    assert_eq!(i18n_tr.current_locale().to_string(), "tr");
    assert_eq!(Labels::from_i18n(&i18n_tr).info, "Bilgi");
}

#[test]
fn test_cli_language_beats_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("tr".to_string()),
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_toast_lifecycle_on_overlay() {
    let (mut manager, clock) = overlay_manager();
    let id = manager
        .toast("Record saved", Severity::Success, 3000)
        .expect("overlay is mounted");

    assert_eq!(manager.surface().toast_len(), 1);
    assert!(!manager.surface().is_shown(Node::Toast(id)));

    clock.advance_ms(10);
    manager.tick();
    assert!(manager.surface().is_shown(Node::Toast(id)));

    clock.advance_ms(2990);
    manager.tick();
    assert!(!manager.surface().is_shown(Node::Toast(id)));
    assert!(manager.surface().is_displayed(Node::Toast(id)));

    clock.advance_ms(300);
    manager.tick();
    assert_eq!(manager.surface().toast_len(), 0);
}

#[test]
fn test_toasts_render_in_arrival_order() {
    let (mut manager, _) = overlay_manager();
    manager.success("first");
    manager.warning("second");
    manager.info("third");

    let messages: Vec<_> = manager.surface().toast_messages().collect();
    assert_eq!(messages, ["first", "second", "third"]);
}

#[test]
fn test_modal_on_overlay_replaces_content() {
    let (mut manager, clock) = overlay_manager();
    manager.modal("first", None, Severity::Info);
    manager.modal("second", Some("Notice"), Severity::Error);
    clock.advance_ms(10);
    manager.tick();

    let node = Node::Dialog(Dialog::Modal);
    assert!(manager.surface().is_displayed(node));
    assert!(manager.surface().is_shown(node));
    let content = manager
        .surface()
        .dialog_content(Dialog::Modal)
        .expect("modal content");
    assert_eq!(content.message, "second");
    assert_eq!(content.title.as_deref(), Some("Notice"));

    manager.handle_message(&Message::Backdrop(Dialog::Modal));
    clock.advance_ms(300);
    manager.tick();
    assert!(!manager.surface().is_displayed(node));
    assert_eq!(manager.modal_state(), DialogState::Closed);
}

#[tokio::test]
async fn test_confirmation_resolves_through_overlay_buttons() {
    let (mut manager, _) = overlay_manager();

    let accepted = manager.confirm("Delete ACME Ltd.?", None, Severity::Warning);
    manager.handle_message(&Message::Confirm);
    assert!(accepted.await);

    let declined = manager.confirm("Delete Globex?", None, Severity::Warning);
    manager.handle_message(&Message::Escape);
    assert!(!declined.await);
}

#[tokio::test]
async fn test_superseded_confirmation_resolves_false() {
    let (mut manager, _) = overlay_manager();

    let first = manager.confirm("first?", None, Severity::Warning);
    let second = manager.confirm("second?", None, Severity::Warning);
    assert!(!first.await);

    manager.accept_confirm();
    assert!(second.await);
}

#[test]
fn test_settings_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut saved = Config::default();
    saved.toasts.success_ms = Some(0);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to save config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let (mut manager, clock) = overlay_manager();
    manager.set_settings(Settings::from(&loaded));
    manager.success("stays");

    clock.advance_ms(60_000);
    manager.tick();
    assert_eq!(manager.toast_count(), 1);
}
