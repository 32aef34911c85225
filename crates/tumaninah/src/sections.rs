//! Tab identifiers of the shell.

/// Landing page with hero text and navigation cards.
pub const HOME: &str = "home";
/// Morning/evening adhkar lists.
pub const ADHKAR_LIST: &str = "adhkar-list";
/// Dhikr counter.
pub const TASBIH: &str = "tasbih";
/// Prayer times for the configured location.
pub const PRAYER_TIMES: &str = "prayer-times";
/// Hijri calendar.
pub const CALENDAR: &str = "calendar";
/// Share page.
pub const SHARE: &str = "share";
/// Usage statistics.
pub const DASHBOARD: &str = "dashboard";
/// About the app.
pub const ABOUT: &str = "about";

/// Every section, in navigation order.
pub const ALL: [&str; 8] = [
    HOME,
    ADHKAR_LIST,
    TASBIH,
    PRAYER_TIMES,
    CALENDAR,
    SHARE,
    DASHBOARD,
    ABOUT,
];

/// Check whether `id` names a section.
#[must_use]
pub fn is_known(id: &str) -> bool {
    ALL.contains(&id)
}
