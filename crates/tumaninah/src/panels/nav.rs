//! Navigation bar of tab triggers.

use crate::sections;
use tumaninah_core::AccessibleRole;
use tumaninah_widgets::{Label, Row, TabsList, TabsTrigger};

/// Triggers shown directly in the bar.
pub const PRIMARY: [(&str, &str); 5] = [
    (sections::HOME, "الرئيسية"),
    (sections::ADHKAR_LIST, "الأذكار"),
    (sections::PRAYER_TIMES, "مواقيت الصلاة"),
    (sections::CALENDAR, "التقويم"),
    (sections::SHARE, "نشر"),
];

/// Triggers grouped under "more".
pub const MORE: [(&str, &str); 2] = [
    (sections::DASHBOARD, "الإحصائيات"),
    (sections::ABOUT, "عن التطبيق"),
];

fn trigger(id: &str, label: &str) -> TabsTrigger {
    TabsTrigger::new(id, label).test_id(format!("nav-{id}"))
}

/// Build the navigation bar. Must be mounted inside a `Tabs` root.
#[must_use]
pub fn nav_bar() -> TabsList {
    let mut more = Row::new()
        .gap(4.0)
        .role(AccessibleRole::Menu)
        .with_test_id("nav-more")
        .child(Label::new("المزيد"));
    for (id, label) in MORE {
        more = more.child(trigger(id, label));
    }

    let mut list = TabsList::new()
        .test_id("nav")
        .accessible_name("التنقل الرئيسي");
    for (id, label) in PRIMARY {
        list = list.child(trigger(id, label));
    }
    list.child(more)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tumaninah_core::Widget;

    #[test]
    fn test_every_section_but_tasbih_has_a_trigger() {
        let ids: Vec<&str> = PRIMARY.iter().chain(MORE.iter()).map(|(id, _)| *id).collect();
        for section in sections::ALL {
            assert_eq!(ids.contains(&section), section != sections::TASBIH, "{section}");
        }
    }

    #[test]
    fn test_more_group_is_a_menu() {
        let bar = nav_bar();
        let more = &bar.children()[PRIMARY.len()];
        assert_eq!(more.accessible_role(), AccessibleRole::Menu);
        assert_eq!(more.children().len(), MORE.len() + 1);
        assert_eq!(Widget::accessible_name(&bar), Some("التنقل الرئيسي"));
    }
}
