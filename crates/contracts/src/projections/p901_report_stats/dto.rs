use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReporterCount {
    pub reporter: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCount {
    pub client: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    pub count: u64,
}

/// Response of `GET /api/stats`: aggregate record counts by reporter,
/// client and month, plus the overall total.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatsResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub by_reporter: Vec<ReporterCount>,
    #[serde(default)]
    pub by_client: Vec<ClientCount>,
    #[serde(default)]
    pub by_month: Vec<MonthCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_stats_payload() {
        let json = r#"{
            "total": 120,
            "by_reporter": [{"reporter": "Tanaka", "count": 40}],
            "by_client": [{"client": "Acme", "count": 12}],
            "by_month": [{"month": "2024-03", "count": 30}]
        }"#;
        let stats: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total, 120);
        assert_eq!(stats.by_reporter[0].reporter, "Tanaka");
        assert_eq!(stats.by_client[0].count, 12);
        assert_eq!(stats.by_month[0].month, "2024-03");
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let stats: StatsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.by_reporter.is_empty());
        assert!(stats.by_month.is_empty());
    }
}
