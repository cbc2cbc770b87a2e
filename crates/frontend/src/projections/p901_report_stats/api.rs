use contracts::projections::p901_report_stats::dto::StatsResponse;
use gloo_net::http::Request;

/// Aggregate record counts for the sidebar panel.
pub async fn fetch_stats() -> Result<StatsResponse, String> {
    let response = Request::get("/api/stats")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: StatsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
