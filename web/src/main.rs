use api::{ApiClient, ApiConfig};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Dashboard, Survey};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Survey {},
    #[route("/dashboard")]
    Dashboard {},
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn nav_survey(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Survey {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            survey: nav_survey,
            dashboard: nav_dashboard,
        });
    }

    use_context_provider(|| {
        let config = ApiConfig::default();
        tracing::info!(
            submit = %config.submit_origin,
            dashboard = %config.dashboard_origin,
            "backend origins"
        );
        ApiClient::new(config)
    });

    // Survey answers must outlive the language re-key below.
    ui::survey::use_survey_provider();

    // AppNavbar writes here on language selection; pages subscribe to re-render.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Style { "{MAIN_CSS_INLINE}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
