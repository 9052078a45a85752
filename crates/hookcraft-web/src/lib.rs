//! hookcraft-web - Web frontend for hookcraft using Leptos + Axum

#![recursion_limit = "1024"]

pub mod api;
pub mod app;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, AppState};

#[cfg(feature = "ssr")]
mod server {
    use crate::router::{create_router, AppState};
    use anyhow::{Context, Result};
    use hookcraft_core::{AppConfig, HttpTransport};
    use std::net::SocketAddr;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(config: &AppConfig) -> Result<()> {
        let upstream = HttpTransport::new(
            config.actor_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
        .context("Failed to create actor transport")?;

        let router = create_router(AppState {
            upstream: Arc::new(upstream),
            dist_dir: config.dist_dir.clone(),
        });

        let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(%addr, upstream = %config.actor_url, "Web server listening");
        println!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}

#[cfg(feature = "ssr")]
pub use server::run;
