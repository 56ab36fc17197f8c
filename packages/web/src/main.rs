use dioxus::prelude::*;

use store::DashboardConfig;
use ui::{ActivityLog, Backend, DashboardView};

fn main() {
    // Browsers have no config file or environment; the locale comes from
    // navigator.language unless configured.
    dioxus::LaunchBuilder::new()
        .with_context(DashboardConfig::default())
        .launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context::<DashboardConfig>();
    use_context_provider(|| Backend::from_config(&config));
    use_context_provider(|| Signal::new(ActivityLog::default()));

    rsx! {
        document::Stylesheet { href: ui::DASHBOARD_CSS }
        DashboardView {}
    }
}
