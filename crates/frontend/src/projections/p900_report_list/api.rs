use contracts::projections::p900_report_list::dto::ReportListResponse;
use gloo_net::http::Request;

use super::query::ReportListQuery;

/// Fetch one page of the grouped report listing.
pub async fn list_reports(query: &ReportListQuery) -> Result<ReportListResponse, String> {
    let url = format!("/api/reports?{}", query.to_query_string());

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ReportListResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Distinct reporter names for the filter dropdown.
pub async fn list_reporters() -> Result<Vec<String>, String> {
    fetch_names("/api/reporters").await
}

/// Distinct client names for the filter dropdown.
pub async fn list_clients() -> Result<Vec<String>, String> {
    fetch_names("/api/clients").await
}

/// Distinct product names for the filter dropdown.
pub async fn list_products() -> Result<Vec<String>, String> {
    fetch_names("/api/products").await
}

async fn fetch_names(url: &str) -> Result<Vec<String>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let names: Vec<String> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(names)
}
