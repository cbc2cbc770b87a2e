use serde::{Deserialize, Serialize};

/// One client/product engagement entry, the finest-grained editable unit.
///
/// Many records share a `mail_id` when they were extracted from the same
/// submitted report mail. All text columns are nullable in the store, so
/// they arrive as `Option` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: i64,
    pub mail_id: Option<String>,
    pub report_date: Option<String>,
    pub reporter: Option<String>,
    pub client_name: Option<String>,
    pub client_department: Option<String>,
    pub client_person: Option<String>,
    pub employee_name: Option<String>,
    pub product_name: Option<String>,
    pub content: Option<String>,
}

/// Full-replace payload for `PUT /api/project/{id}`.
///
/// Always carries all eight editable fields, never a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectUpdateRequest {
    pub report_date: String,
    pub reporter: String,
    pub client_name: String,
    pub client_department: String,
    pub client_person: String,
    pub employee_name: String,
    pub product_name: String,
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectUpdateResponse {
    pub success: bool,
}

/// Response of `DELETE /api/delete_mail_projects/{mail_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailDeleteResponse {
    pub success: bool,
    #[serde(default)]
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_record_tolerates_null_text_fields() {
        let json = r#"{
            "id": 42,
            "mail_id": "m1",
            "report_date": "2024-03-01",
            "reporter": null,
            "client_name": "Acme",
            "client_department": null,
            "client_person": null,
            "employee_name": null,
            "product_name": "X",
            "content": null
        }"#;
        let record: ProjectRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 42);
        assert_eq!(record.mail_id.as_deref(), Some("m1"));
        assert!(record.reporter.is_none());
        assert_eq!(record.product_name.as_deref(), Some("X"));
    }

    #[test]
    fn update_request_serializes_all_eight_fields() {
        let req = ProjectUpdateRequest {
            content: "updated".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "report_date",
            "reporter",
            "client_name",
            "client_department",
            "client_person",
            "employee_name",
            "product_name",
            "content",
        ] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj.len(), 8);
    }
}
