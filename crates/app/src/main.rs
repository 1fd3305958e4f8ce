use dioxus::prelude::*;
use shared_types::AppConfig;

mod auth;
mod breakpoint;
mod components;
mod data;
mod format_helpers;
mod lifetime;
mod routes;
mod token_store;

use auth::{use_auth_check, AuthState};
use routes::Route;

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();
        tracing::info!(
            office = %config.office.name,
            legal_assistant = config.features.legal_assistant,
            messaging = config.features.messaging,
            "office config loaded"
        );
        server::health::record_start_time();

        let router = dioxus::server::router(App)
            .merge(server::rest::rest_router()?)
            .layer(server::telemetry::http_trace_layer())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Office config once per load; a failed fetch falls back to defaults
    // with the optional pages hidden.
    let config_resource =
        use_server_future(move || async move { server::api::get_app_config().await })?;

    let loaded = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(AppConfig::default()))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "loading office config failed");
            AppConfig::default()
        });

    let mut config = use_context_provider(|| Signal::new(loaded.clone()));
    if *config.peek() != loaded {
        config.set(loaded);
    }

    use_context_provider(AuthState::new);
    use_auth_check();

    rsx! {
        shared_ui::theme::ThemeSeed {}
        shared_ui::ToastProvider {
            SuspenseBoundary {
                fallback: |_| rsx! {
                    div { class: "auth-guard-loading",
                        p { "جارٍ التحميل..." }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
