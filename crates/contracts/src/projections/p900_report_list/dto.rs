use serde::{Deserialize, Serialize};

/// One row of the grouped report listing.
///
/// A row is an aggregated view over every project record that shares a
/// `mail_id`: `clients` and `products` are delimiter-joined name lists
/// (`products` may be joined with either an ASCII comma or the ideographic
/// comma `、`), `report_date` and `reporter` are the group minimums.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub mail_id: String,
    pub report_date: Option<String>,
    pub reporter: Option<String>,
    #[serde(default)]
    pub report_count: u32,
    pub clients: Option<String>,
    pub products: Option<String>,
    #[serde(default)]
    pub all_content: Option<String>,
}

/// Response of `GET /api/reports`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportRow>,
    pub total_count: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_listing_payload() {
        let json = r#"{
            "reports": [{
                "mail_id": "m1",
                "report_date": "2024-03-01",
                "reporter": "Tanaka",
                "report_count": 2,
                "clients": "Acme, Beta",
                "products": "X、Y",
                "all_content": null
            }],
            "total_count": 1,
            "page": 1,
            "per_page": 10,
            "has_more": false
        }"#;
        let resp: ReportListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_count, 1);
        assert_eq!(resp.reports.len(), 1);
        let row = &resp.reports[0];
        assert_eq!(row.mail_id, "m1");
        assert_eq!(row.reporter.as_deref(), Some("Tanaka"));
        assert_eq!(row.clients.as_deref(), Some("Acme, Beta"));
        assert_eq!(row.products.as_deref(), Some("X、Y"));
    }

    #[test]
    fn group_concat_fields_may_be_null() {
        let json = r#"{
            "reports": [{
                "mail_id": "m2",
                "report_date": null,
                "reporter": null,
                "clients": null,
                "products": null
            }],
            "total_count": 1
        }"#;
        let resp: ReportListResponse = serde_json::from_str(json).unwrap();
        let row = &resp.reports[0];
        assert!(row.clients.is_none());
        assert_eq!(row.report_count, 0);
        assert!(!resp.has_more);
    }
}
