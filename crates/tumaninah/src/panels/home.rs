//! Landing panel: hero text and navigation cards.

use super::card::NavCard;
use crate::registry::AdhkarCard;
use crate::sections;
use crate::state::ShellMessage;
use tumaninah_core::AccessibleRole;
use tumaninah_widgets::{Column, Label, Row, TabId};

/// Hero heading.
pub const HERO_TITLE: &str = "مرحباً بك في تطبيق طمأنينة";
/// Hero text under the heading.
pub const HERO_TEXT: &str = "رفيقك اليومي للأذكار والتسبيح ومواقيت الصلاة";

/// Build the home panel.
#[must_use]
pub fn home() -> Column {
    let mut cards = Row::new().gap(16.0).with_test_id("home-cards");
    for (card, icon) in AdhkarCard::ALL.into_iter().zip(["☀", "🌙"]) {
        cards = cards.child(
            NavCard::new(icon, card.title(), ShellMessage::OpenCard(card))
                .with_test_id(format!("card-{}", card.key())),
        );
    }
    let cards = cards
        .child(
            NavCard::new(
                "📿",
                "المسبحة",
                ShellMessage::Activate(TabId::from(sections::TASBIH)),
            )
            .with_test_id("card-tasbih"),
        )
        .child(NavCard::disabled("⏳", "قريباً").with_test_id("card-soon"));

    Column::new()
        .gap(16.0)
        .padding(24.0)
        .role(AccessibleRole::Region)
        .with_test_id("home-panel")
        .child(Label::heading(HERO_TITLE))
        .child(Label::new(HERO_TEXT))
        .child(cards)
        .child(Label::new("📿 0").font_size(20.0).with_test_id("tasbih-preview"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumaninah_core::{Point, Rect, Widget};

    fn card_message(panel: &mut Column, index: usize) -> Option<ShellMessage> {
        let center: Point = panel.children()[2].children()[index].bounds().center();
        panel
            .event(&tumaninah_core::Event::click(center))
            .and_then(|msg| msg.downcast::<ShellMessage>().ok())
            .map(|msg| *msg)
    }

    #[test]
    fn test_cards_post_their_messages() {
        let mut panel = home();
        panel.layout(Rect::new(0.0, 0.0, 1280.0, 720.0));

        assert_eq!(
            card_message(&mut panel, 0),
            Some(ShellMessage::OpenCard(AdhkarCard::Morning))
        );
        assert_eq!(
            card_message(&mut panel, 1),
            Some(ShellMessage::OpenCard(AdhkarCard::Evening))
        );
        assert_eq!(
            card_message(&mut panel, 2),
            Some(ShellMessage::Activate(TabId::from("tasbih")))
        );
        assert_eq!(card_message(&mut panel, 3), None);
    }

    #[test]
    fn test_hero_is_first() {
        let panel = home();
        assert_eq!(panel.children()[0].accessible_name(), Some(HERO_TITLE));
        assert_eq!(panel.children()[0].accessible_role(), AccessibleRole::Heading);
    }
}
