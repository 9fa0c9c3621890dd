use axum::{
    http::{header, Method, StatusCode},
    routing::{any, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    handlers::{
        auth::pc35_auth,
        health::livez,
        package_check::{pc185_webservice, pc35_webservice},
        pc269::{get_assets, post_asset, post_daily_report, post_wells_test},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, config: &Config) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        // PC269 production reporting
        .route("/PC269_GetAssets", get(get_assets))
        .route("/PC269_PostAsset", post(post_asset))
        .route("/PC269_PostDailyReport/{asset_id}", post(post_daily_report))
        .route("/PC269_PostWellstest/{dailyreport_id}", post(post_wells_test))
        // Package checks
        .route("/PC35_Auth", get(pc35_auth))
        .route("/PC35_Webservice", any(pc35_webservice))
        .route("/PC185_Webservice", any(pc185_webservice))
        .layer(cors);

    Router::new()
        .route("/livez", get(livez))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout(),
        ))
        .with_state(state)
}
