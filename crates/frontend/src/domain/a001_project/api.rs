use contracts::domain::a001_project::dto::{
    MailDeleteResponse, ProjectRecord, ProjectUpdateRequest, ProjectUpdateResponse,
};
use gloo_net::http::Request;

/// All project records extracted from one report mail, ordered by id.
pub async fn fetch_mail_detail(mail_id: &str) -> Result<Vec<ProjectRecord>, String> {
    let url = format!("/api/mail_detail/{}", mail_id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let records: Vec<ProjectRecord> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(records)
}

/// All project records for a client name, regardless of the listing filters.
pub async fn fetch_client_projects(name: &str) -> Result<Vec<ProjectRecord>, String> {
    fetch_projects_by_name("/api/client_projects", name).await
}

/// All project records for a product name, regardless of the listing filters.
pub async fn fetch_product_projects(name: &str) -> Result<Vec<ProjectRecord>, String> {
    fetch_projects_by_name("/api/product_projects", name).await
}

async fn fetch_projects_by_name(base: &str, name: &str) -> Result<Vec<ProjectRecord>, String> {
    let url = format!("{}/{}", base, urlencoding::encode(name));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let records: Vec<ProjectRecord> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(records)
}

/// Fetch a single project record for editing.
pub async fn fetch_project(id: i64) -> Result<ProjectRecord, String> {
    let url = format!("/api/project/{}", id);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let record: ProjectRecord = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(record)
}

/// Full-replace update of a project record.
pub async fn update_project(
    id: i64,
    request: &ProjectUpdateRequest,
) -> Result<ProjectUpdateResponse, String> {
    let url = format!("/api/project/{}", id);

    let response = Request::put(&url)
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ProjectUpdateResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Delete every project record belonging to one report mail.
pub async fn delete_mail_projects(mail_id: &str) -> Result<MailDeleteResponse, String> {
    let url = format!("/api/delete_mail_projects/{}", mail_id);

    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: MailDeleteResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
