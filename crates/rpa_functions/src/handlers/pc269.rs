//! PC269 handlers for assets, daily reports and well tests.
//!
//! Bodies are read as raw bytes and deserialized in the handler so that a
//! malformed body surfaces through [`AppError`] like any other failure.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};

use rpa_functions_core::assets::{
    Asset, DailyReport, NewAsset, NewDailyReport, NewWellsTest, WellsTest,
};

use crate::{handlers::AppError, state::AppState};

/// GET /api/PC269_GetAssets - every asset ordered by name.
pub async fn get_assets(State(state): State<AppState>) -> Result<Json<Vec<Asset>>, AppError> {
    tracing::info!("Listing assets");

    let assets = state.asset_repo.list_assets_by_name().await?;

    Ok(Json(assets))
}

/// POST /api/PC269_PostAsset
pub async fn post_asset(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Asset>, AppError> {
    tracing::info!("Creating asset");

    let request: NewAsset = serde_json::from_slice(&body)?;
    let asset = state.asset_repo.create_asset(&request).await?;

    tracing::debug!(asset_id = asset.asset_id, "Asset created");
    Ok(Json(asset))
}

/// POST /api/PC269_PostDailyReport/{asset_id}
///
/// The parent asset comes from the path, whatever the body says.
pub async fn post_daily_report(
    State(state): State<AppState>,
    Path(asset_id): Path<i64>,
    body: Bytes,
) -> Result<Json<DailyReport>, AppError> {
    tracing::info!(asset_id, "Creating daily report");

    let request = serde_json::from_slice::<NewDailyReport>(&body)?.for_asset(asset_id);
    let report = state.daily_report_repo.create_daily_report(&request).await?;

    Ok(Json(report))
}

/// POST /api/PC269_PostWellstest/{dailyreport_id}
pub async fn post_wells_test(
    State(state): State<AppState>,
    Path(dailyreport_id): Path<i64>,
    body: Bytes,
) -> Result<Json<WellsTest>, AppError> {
    tracing::info!(dailyreport_id, "Creating well test");

    let request = serde_json::from_slice::<NewWellsTest>(&body)?.for_daily_report(dailyreport_id);
    let test = state.wells_test_repo.create_wells_test(&request).await?;

    Ok(Json(test))
}
