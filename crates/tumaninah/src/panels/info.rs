//! Self-contained panels that only present content.

use crate::config::PrayerLocation;
use tumaninah_core::AccessibleRole;
use tumaninah_widgets::{Column, Label};

fn panel(test_id: &str, title: &str) -> Column {
    Column::new()
        .gap(12.0)
        .padding(24.0)
        .role(AccessibleRole::Region)
        .with_test_id(test_id)
        .child(Label::heading(title))
}

/// Dhikr counter.
#[must_use]
pub fn tasbih() -> Column {
    panel("tasbih-panel", "المسبحة الإلكترونية")
        .child(Label::new("سبحان الله").font_size(28.0))
        .child(Label::new("0 / 33").with_test_id("tasbih-count"))
}

/// Prayer times for `location`.
#[must_use]
pub fn prayer_times(location: &PrayerLocation) -> Column {
    panel("prayer-times-panel", "مواقيت الصلاة").child(
        Label::new(format!("{}, {}", location.city, location.country))
            .with_test_id("prayer-location"),
    )
}

/// Hijri calendar.
#[must_use]
pub fn calendar() -> Column {
    panel("calendar-panel", "التقويم الهجري")
}

/// Share page.
#[must_use]
pub fn share() -> Column {
    panel("share-panel", "شارك التطبيق").child(Label::new("انشر الخير مع من تحب"))
}

/// Usage statistics.
#[must_use]
pub fn dashboard() -> Column {
    panel("dashboard-panel", "الإحصائيات")
}

/// About the app.
#[must_use]
pub fn about() -> Column {
    panel("about-panel", "عن التطبيق").child(Label::new("طمأنينة: رفيقك في رحلة التقرب إلى الله"))
}
