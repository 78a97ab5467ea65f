//! thin wrappers over the few window apis the pages touch

use chrono::{DateTime, Local, NaiveDate, Utc};
use leptos::prelude::window;
use shared::calendar;

/// path the site was opened with, e.g. `/admin`
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}

pub fn scroll_to_top() {
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

/// blocking yes / no prompt; a blocked dialog counts as "no"
pub fn confirm(question: &str) -> bool {
    window().confirm_with_message(question).unwrap_or(false)
}

pub fn open_in_new_tab(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        log::error!("could not open {url}: {err:?}");
    }
}

/// open the calendar template for a diagnostic session
pub fn schedule_meeting(service: Option<&str>) {
    open_in_new_tab(&calendar::meeting_link(service, &Local::now()));
}

/// calendar day of a stored timestamp in the reader's timezone
pub fn local_day(at: DateTime<Utc>) -> NaiveDate {
    at.with_timezone(&Local).date_naive()
}
