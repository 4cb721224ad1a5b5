use axum::{routing::get, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod auth;
mod config;
mod database;
mod error;
mod handlers;
mod middleware;
mod policy;
mod services;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Initialize configuration (this loads the config singleton)
    let config = crate::config::config();
    tracing::info!("Starting Relay API in {:?} mode", config.environment);

    // Session tokens cannot be signed or verified without a secret;
    // there is no point accepting traffic.
    if config.security.jwt_secret.is_empty() {
        tracing::error!("JWT_SECRET is not set - refusing to start");
        std::process::exit(1);
    }

    // Apply schema before accepting traffic. A missing database is not
    // fatal here: /health reports degraded and the pool retries lazily.
    if let Err(e) = database::DatabaseManager::migrate().await {
        tracing::error!("database migration failed: {}", e);
    }

    let app = app();

    // Allow tests or deployments to override port via env
    let port = std::env::var("RELAY_API_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Relay API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app() -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Public user and channel routes
        .merge(user_public_routes())
        .merge(channel_public_routes())
        // Session-gated routes
        .merge(user_session_routes())
        .merge(channel_session_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn user_public_routes() -> Router {
    use axum::routing::post;
    use handlers::public::users;

    Router::new()
        .route("/users/signup", post(users::signup))
        .route("/users/login", post(users::login))
        .route("/users", get(users::user_get))
}

fn channel_public_routes() -> Router {
    use handlers::public::channels;

    Router::new().route("/channels/:id", get(channels::channel_get))
}

fn user_session_routes() -> Router {
    use axum::routing::{delete, post};
    use handlers::protected::users;

    Router::new()
        .route("/users/logout", post(users::logout))
        .route("/users", delete(users::user_delete))
        .route_layer(axum::middleware::from_fn(middleware::session_auth_middleware))
}

fn channel_session_routes() -> Router {
    use axum::routing::{delete, post, put};
    use handlers::protected::channels;

    Router::new()
        .route("/channels", post(channels::channel_create).get(channels::channel_list))
        .route("/channels/:id", put(channels::channel_update).delete(channels::channel_delete))
        .route_layer(axum::middleware::from_fn(middleware::session_auth_middleware))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Relay API",
            "version": version,
            "description": "User and channel management REST API built with Rust (Axum)",
            "endpoints": {
                "home": "/ (public)",
                "signup": "POST /users/signup (public)",
                "login": "POST /users/login (public - session acquisition)",
                "logout": "POST /users/logout (session)",
                "users": "GET /users?email=... (public), DELETE /users (session)",
                "channels": "POST /channels, GET /channels (session)",
                "channel": "GET /channels/:id (public), PUT/DELETE /channels/:id (session)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match crate::database::manager::DatabaseManager::health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
