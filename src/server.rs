use axum::{
    routing::{get, post},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::analyze_handler;
use crate::auth::handlers::{login_handler, signup_handler};
use crate::config::AppConfig;
use crate::error::AppResult;
use crate::oauth::handlers::{callback_handler, login_handler as oauth_login_handler, logout_handler};
use crate::oauth::{GoogleProvider, IdentityProvider};
use crate::pages::{index_handler, page_handler};
use crate::session::SessionStore;
use crate::users::{connect_user_store, UserRepository};

pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub sessions: SessionStore,
    pub identity: Option<Arc<dyn IdentityProvider>>,
    pub redirect_uri: String,
    pub pages_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl AppState {
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        let users = connect_user_store(&config.database_url).await?;

        let identity: Option<Arc<dyn IdentityProvider>> = match &config.google {
            Some(credentials) => Some(Arc::new(GoogleProvider::new(credentials.clone())?)),
            None => {
                tracing::warn!("GOOGLE_CLIENT_ID not set; Google login is disabled");
                None
            }
        };

        Ok(Self {
            users,
            sessions: SessionStore::new(),
            identity,
            redirect_uri: config.oauth_redirect_uri(),
            pages_dir: config.pages_dir.clone(),
            static_dir: config.static_dir.clone(),
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/analyze-url/", post(analyze_handler))
        .route("/signup/", post(signup_handler))
        .route("/token", post(login_handler))
        .route("/login", get(oauth_login_handler))
        .route("/auth/callback", get(callback_handler))
        .route("/logout", get(logout_handler))
        .route("/:page", get(page_handler))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let state = Arc::new(AppState::from_config(&config).await?);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, app).await?;
    Ok(())
}
