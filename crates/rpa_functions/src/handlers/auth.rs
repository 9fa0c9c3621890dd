use rpa_functions_core::package_check::responses;

/// GET /api/PC35_Auth - lets a robot confirm its credentials reach the service.
///
/// Key checks happen in front of the service; reaching this handler is the success.
#[axum::debug_handler]
pub async fn pc35_auth() -> &'static str {
    tracing::info!("PC35 authentication probe");
    responses::AUTH_SUCCESS
}
