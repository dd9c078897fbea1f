//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use std::sync::Arc;

        use axum::{extract::Request, middleware::Next};
        use backend::{api::search::{SchemeSearchService, install_search_service}, config::BackendConfig, server_extra::search_routes};
        use dioxus::server::axum;

        let config = BackendConfig::from_env()?;
        dioxus::logger::tracing::info!("starting scheme search with {:?}", config);
        let service = Arc::new(SchemeSearchService::from_config(&config)?);
        install_search_service(service.clone())?;

        Ok(dioxus::server::router(App)
            .merge(search_routes(service))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    dioxus::logger::tracing::debug!("Request: {} {}", request.method(), request.uri().path());
                    let res = next.run(request).await;
                    dioxus::logger::tracing::debug!("Response: {}", res.status());
                    res
                },
            )))
    });
}
