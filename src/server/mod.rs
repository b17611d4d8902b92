use axum::extract::DefaultBodyLimit;
use axum::response::Redirect;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Settings;
use crate::db;
use crate::tools::{Context, Result};

mod accounts;
mod admin;
mod articles;
mod html;
mod http_error;

#[derive(Clone)]
pub struct AppState
{
	pub settings: Arc<Settings>,
}

#[derive(Serialize,Clone)]
pub struct Info
{
	version:String,
	pub db_version:String,
	pub media_root:String,
}

pub async fn server_info(settings:&Settings) -> Result<Info>
{
	Ok(Info {
		version:format!("{} v{}",env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
		db_version:db::version().await?,
		media_root:settings.media.root.to_string_lossy().into(),
	})
}

/// build the complete application router
pub async fn app(settings:Settings) -> Result<Router>
{
	tokio::fs::create_dir_all(&settings.media.root).await
		.context(format!("creating media root {}",settings.media.root.display()))?;
	let info = server_info(&settings).await?;
	let state = AppState {settings:Arc::new(settings)};

	let router = Router::new()
		.route("/", get(||async {Redirect::to("/articles/")}))
		.route("/api/info", get(move || {
			let info = info.clone();
			async move {Json(info)}
		}))
		.nest("/admin", admin::router())
		.nest("/articles", articles::router())
		.nest("/accounts", accounts::router())
		.nest_service(state.settings.media.url.as_str(), ServeDir::new(&state.settings.media.root))
		.layer(DefaultBodyLimit::max(state.settings.limits.upload_sizelimit.as_u64() as usize))
		.layer(TraceLayer::new_for_http())
		.with_state(state);
	Ok(router)
}

pub async fn serve(listener:TcpListener, settings:Settings) -> Result<()>
{
	let media_root = settings.media.root.clone();
	let app = app(settings).await?;

	tracing::info!("listening on http://{}", listener.local_addr()?);
	tracing::info!("database is {}",db::version().await?);
	tracing::info!("media files are served from {}",media_root.display());

	axum::serve(listener,app.into_make_service())
		.with_graceful_shutdown(shutdown_signal())
		.await.map_err(|e|e.into())
}

async fn shutdown_signal() {
	let ctrl_c = async {
		signal::ctrl_c()
			.await
			.expect("failed to install Ctrl+C handler");
		eprintln!("Got CTRL+C trying graceful shutdown");
	};

	#[cfg(unix)]
		let terminate = async {
		signal::unix::signal(signal::unix::SignalKind::terminate())
			.expect("failed to install signal handler")
			.recv()
			.await;
		eprintln!("Got termination signal trying graceful shutdown");
	};

	#[cfg(not(unix))]
		let terminate = std::future::pending::<()>();

	tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
