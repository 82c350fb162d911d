// src/handlers/dashboard.rs
use std::sync::Arc;

use chrono::Utc;
use log::info;
use warp::Rejection;

use crate::services::aggregator::DashboardService;

/// GET /api/v1/dashboard — recompute every indicator and return the
/// payload. The refresh timestamp belongs to the request that triggered
/// it, so it is stamped here rather than inside the aggregator.
///
/// This endpoint never rejects: outages degrade to fallback values inside
/// the aggregator and the page always renders.
pub async fn get_dashboard(svc: Arc<DashboardService>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request to get dashboard data");

    let mut dashboard = svc.update_all_data().await;
    dashboard.last_updated = Some(Utc::now());

    Ok(warp::reply::json(&dashboard))
}
