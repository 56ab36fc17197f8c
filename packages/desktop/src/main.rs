use dioxus::prelude::*;

use store::DashboardConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{ActivityLog, Backend, DashboardView};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,desktop=debug,ui=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DashboardConfig::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("{e}; using default configuration");
            DashboardConfig::default()
        }
    };
    tracing::info!("admin API base URL: {}", config.api.base_url);

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
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
