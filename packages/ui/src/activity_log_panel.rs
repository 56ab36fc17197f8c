use dioxus::prelude::*;

use crate::activity_log::{use_activity_log, LogFilter, LogLevel};
use crate::components::{Button, ButtonVariant};
use crate::icons::FaListUl;
use crate::Icon;

const ACTIVITY_LOG_CSS: Asset = asset!("/assets/activity_log.css");

fn level_tag(level: LogLevel) -> (&'static str, &'static str) {
    match level {
        LogLevel::Error => ("log-row error", "ERR"),
        LogLevel::Warning => ("log-row warning", "WARN"),
        LogLevel::Success => ("log-row success", "OK"),
        LogLevel::Info => ("log-row info", "INFO"),
    }
}

/// Dashboard activity (fetches, exports, deletes), filterable by outcome.
///
/// Rendered only while the log is toggled visible.
#[component]
pub fn ActivityLogPanel() -> Element {
    let mut log = use_activity_log();
    let mut filter = use_signal(LogFilter::default);

    if !log.read().visible {
        return rsx! {};
    }

    let current = log.read();
    let counts = LogFilter::ALL.map(|f| (f, f.label(), current.count(f)));
    let rows: Vec<_> = current
        .filtered(filter())
        .map(|entry| {
            let (class, tag) = level_tag(entry.level);
            (class, tag, entry.clone())
        })
        .collect();
    drop(current);

    rsx! {
        document::Stylesheet { href: ACTIVITY_LOG_CSS }

        aside {
            class: "activity-log",
            nav {
                class: "activity-log-filters",
                for (option, label, count) in counts {
                    button {
                        key: "{label}",
                        class: if filter() == option { "log-filter active" } else { "log-filter" },
                        onclick: move |_| filter.set(option),
                        "{label} ({count})"
                    }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Remove every entry",
                    onclick: move |_| log.write().entries.clear(),
                    "Clear"
                }
            }
            ol {
                class: "activity-log-rows",
                if rows.is_empty() {
                    li { class: "log-row empty", "No matching activity." }
                }
                for (n, (class, tag, entry)) in rows.into_iter().enumerate() {
                    li {
                        key: "{n}",
                        class,
                        time { "{entry.timestamp}" }
                        b { "{tag}" }
                        span { "{entry.message}" }
                    }
                }
            }
        }
    }
}

/// Header button showing the log; turns red once something failed.
#[component]
pub fn ActivityLogToggle() -> Element {
    let mut log = use_activity_log();
    let problems = log.read().count(LogFilter::Problems);
    let visible = log.read().visible;

    rsx! {
        Button {
            variant: if problems > 0 { ButtonVariant::Destructive } else { ButtonVariant::Outline },
            title: if visible { "Hide activity" } else { "Show activity" },
            onclick: move |_| {
                let mut state = log.write();
                state.visible = !state.visible;
            },
            Icon { icon: FaListUl, width: 14, height: 14 }
            if problems > 0 {
                " Activity ({problems})"
            } else {
                " Activity"
            }
        }
    }
}
