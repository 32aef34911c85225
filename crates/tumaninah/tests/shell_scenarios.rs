//! The home shell driven through the headless harness.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use tumaninah::panels::{HERO_TITLE, TAGLINE, TITLE};
use tumaninah::{sections, AdhkarCard, HomeShell, PrayerLocation, ShellConfig, ShellMessage};
use tumaninah_core::{Context, Key, Widget};
use tumaninah_test::Harness;
use tumaninah_widgets::{TabChanged, TabId};

const MORNING_DHIKR: &str = "أصبحنا وأصبح الملك لله";
const EVENING_DHIKR: &str = "أمسينا وأمسى الملك لله";

fn started(config: ShellConfig) -> Harness<HomeShell> {
    let delay = config.splash_delay_ms;
    let mut harness = Harness::new(HomeShell::new(config));
    harness.root_mut().advance(delay);
    harness.render();
    harness
}

fn recorded(harness: &mut Harness<HomeShell>) -> Arc<Mutex<Vec<TabId>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    harness
        .root_mut()
        .on_tab_change(move |tab| sink.lock().unwrap().push(tab.clone()));
    seen
}

#[test]
fn test_splash_shown_once_then_dismissed() {
    let mut harness = Harness::new(HomeShell::new(ShellConfig::default()));
    assert!(harness.root().show_splash());
    harness
        .assert_exists("#splash")
        .assert_not_exists("#nav")
        .assert_painted(TITLE)
        .assert_painted(TAGLINE)
        .assert_not_painted(HERO_TITLE);

    harness.root_mut().advance(1999);
    harness.render();
    assert!(harness.root().show_splash());

    harness.root_mut().advance(1);
    harness.render();
    assert!(!harness.root().show_splash());
    harness
        .assert_not_exists("#splash")
        .assert_exists("#nav-home")
        .assert_painted(HERO_TITLE)
        .assert_not_painted(TAGLINE);

    harness.root_mut().advance(60_000);
    harness.render();
    assert!(!harness.root().show_splash());
    assert_eq!(harness.root().pending_timers(), 0);
}

#[test]
fn test_clicks_ignored_during_splash() {
    let mut harness = Harness::new(HomeShell::new(ShellConfig::default()));
    harness.click_at(tumaninah_core::Point::new(640.0, 360.0));
    assert!(harness.take_messages::<TabChanged>().is_empty());
    assert_eq!(harness.root().active_tab(), "home");
}

#[test]
fn test_navigation_sequence_notifies_every_activation() {
    let mut harness = started(ShellConfig::default());
    let seen = recorded(&mut harness);

    harness.click("#nav-adhkar-list");
    assert_eq!(harness.root().active_tab(), "adhkar-list");
    harness.assert_exists("#adhkar-panel");

    harness.root_mut().dispatch(ShellMessage::Activate(sections::TASBIH.into()));
    harness.render();
    harness.root_mut().dispatch(ShellMessage::Activate(sections::TASBIH.into()));
    harness.render();

    assert_eq!(harness.root().active_tab(), "tasbih");
    harness
        .assert_exists("#tasbih-panel")
        .assert_not_exists("#adhkar-panel");
    assert_eq!(
        *seen.lock().unwrap(),
        vec![
            TabId::from("adhkar-list"),
            TabId::from("tasbih"),
            TabId::from("tasbih")
        ]
    );
}

#[test]
fn test_reclicking_active_trigger_notifies_again() {
    let mut harness = started(ShellConfig::default());
    let seen = recorded(&mut harness);

    harness.click("#nav-home");
    harness.click("#nav-home");
    assert_eq!(seen.lock().unwrap().len(), 2);
    assert_eq!(harness.root().active_tab(), "home");

    let bubbled = harness.take_messages::<TabChanged>();
    assert_eq!(bubbled.len(), 2);
    assert!(bubbled.iter().all(|msg| msg.tab_id == "home"));
}

#[test]
fn test_tasbih_card_switches_directly() {
    let mut harness = started(ShellConfig::default());
    harness.click("#card-tasbih");
    assert_eq!(harness.root().active_tab(), "tasbih");
    assert_eq!(harness.root().pending_timers(), 0);
    harness.assert_exists("#tasbih-count");
}

#[test]
fn test_coming_soon_card_does_nothing() {
    let mut harness = started(ShellConfig::default());
    let seen = recorded(&mut harness);
    harness.click("#card-soon");
    assert_eq!(harness.root().active_tab(), "home");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_card_opens_after_settle_delay_and_scrolls_to_top() {
    let mut harness = started(ShellConfig::default());
    harness.click("#card-morning");
    assert_eq!(harness.root().active_tab(), "adhkar-list");
    assert!(harness.root().registry().is_registered(AdhkarCard::Morning));
    harness.assert_not_painted(MORNING_DHIKR);

    harness.root_mut().scroll_by(120.0);
    harness.root_mut().advance(99);
    harness.render();
    harness.assert_not_painted(MORNING_DHIKR);
    assert_eq!(harness.root().scroll_offset(), 120.0);

    harness.root_mut().advance(1);
    harness.render();
    harness
        .assert_painted(MORNING_DHIKR)
        .assert_not_painted(EVENING_DHIKR);
    assert_eq!(harness.root().scroll_offset(), 0.0);
    assert_eq!(
        harness
            .query("#adhkar-card-morning")
            .and_then(|card| card.accessible_selected()),
        Some(true)
    );
}

#[test]
fn test_card_skipped_when_shell_torn_down_during_delay() {
    let mut harness = started(ShellConfig::default());
    harness.click("#card-evening");
    assert_eq!(harness.root().pending_timers(), 1);

    harness.unmount();
    assert!(harness.root().is_torn_down());
    assert_eq!(harness.root().pending_timers(), 0);
    assert!(!harness.root().registry().is_registered(AdhkarCard::Evening));

    harness.root_mut().advance(100);
    harness.render();
    assert!(harness.paint().is_empty());
    assert_eq!(harness.root().active_tab(), "adhkar-list");
}

#[test]
fn test_card_skipped_when_panel_unmounted_during_delay() {
    let mut harness = started(ShellConfig::default());
    harness.click("#card-morning");
    harness.root_mut().scroll_by(50.0);
    harness.root_mut().advance(50);

    harness.click("#nav-home");
    assert!(!harness.root().registry().is_registered(AdhkarCard::Morning));

    harness.root_mut().advance(50);
    harness.render();
    assert_eq!(harness.root().active_tab(), "home");
    assert_eq!(harness.root().scroll_offset(), 50.0);

    harness.click("#nav-adhkar-list");
    harness.assert_not_painted(MORNING_DHIKR);
}

#[test]
fn test_opened_card_collapses_after_leaving_the_list() {
    let mut harness = started(ShellConfig::default());
    harness.root_mut().open_card(AdhkarCard::Morning);
    harness.root_mut().advance(100);
    harness.render();
    harness.assert_painted(MORNING_DHIKR);

    harness.root_mut().dispatch(ShellMessage::Activate(sections::HOME.into()));
    harness.render();
    assert!(!harness.root().registry().is_registered(AdhkarCard::Morning));

    harness
        .root_mut()
        .dispatch(ShellMessage::Activate(sections::ADHKAR_LIST.into()));
    harness.render();
    harness
        .assert_exists("#adhkar-card-morning")
        .assert_not_painted(MORNING_DHIKR);
    assert_eq!(
        harness
            .query("#adhkar-card-morning")
            .and_then(|card| card.accessible_selected()),
        Some(false)
    );
}

#[test]
fn test_keyboard_activation() {
    let mut harness = started(ShellConfig::default());
    harness.focus("#nav-calendar").press_key(Key::Enter);
    assert_eq!(harness.root().active_tab(), "calendar");
    harness.assert_exists("#calendar-panel");
}

#[test]
fn test_floating_chat_on_every_tab() {
    let mut harness = started(ShellConfig::default());
    for tab in sections::ALL {
        harness.root_mut().dispatch(ShellMessage::Activate(tab.into()));
        harness.render();
        harness.assert_exists("#floating-chat");
    }
}

#[test]
fn test_unknown_tab_shows_no_panel() {
    let mut harness = started(ShellConfig::default());
    harness.root_mut().dispatch(ShellMessage::Activate("settings".into()));
    harness.render();
    assert_eq!(harness.root().active_tab(), "settings");
    harness
        .assert_exists("#nav")
        .assert_exists("#floating-chat")
        .assert_not_exists("#home-panel")
        .assert_not_painted(HERO_TITLE);
}

#[test]
fn test_prayer_location_from_config() {
    let config = ShellConfig {
        initial_tab: sections::PRAYER_TIMES.to_string(),
        prayer_location: PrayerLocation {
            country: "SA".into(),
            city: "Makkah".into(),
        },
        ..ShellConfig::default()
    };
    let harness = started(config);
    harness
        .assert_text("#prayer-location", "Makkah, SA")
        .assert_painted("Makkah, SA");
}

#[test]
fn test_initial_tab_and_delays_from_yaml() {
    let config =
        ShellConfig::from_yaml("initial_tab: about\nsplash_delay_ms: 500\nsettle_delay_ms: 30\n")
            .unwrap();
    let mut harness = Harness::new(HomeShell::new(config));
    harness.root_mut().advance(500);
    harness.render();
    assert_eq!(harness.root().active_tab(), "about");
    harness.assert_exists("#about-panel");

    harness.root_mut().open_card(AdhkarCard::Evening);
    harness.root_mut().advance(30);
    harness.render();
    harness.assert_painted(EVENING_DHIKR);
}

proptest! {
    #[test]
    fn prop_scope_and_registry_follow_active_tab(
        picks in prop::collection::vec(0..sections::ALL.len(), 1..12)
    ) {
        let mut shell = HomeShell::new(ShellConfig::default());
        shell.mount(&Context::new());
        shell.advance(2000);

        for pick in picks {
            let tab = sections::ALL[pick];
            shell.dispatch(ShellMessage::Activate(tab.into()));
            prop_assert_eq!(shell.active_tab(), tab);
            prop_assert_eq!(shell.scope().read(), tab);
            prop_assert_eq!(
                shell.registry().is_registered(AdhkarCard::Morning),
                tab == sections::ADHKAR_LIST
            );
        }
    }
}
