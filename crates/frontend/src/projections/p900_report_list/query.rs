//! Pure mapping from the filter form to `/api/reports` query parameters.

use serde::Serialize;

/// Fixed page size of the report listing.
pub const PER_PAGE: usize = 10;

/// Current values of the filter form. Rebuilt into a query on every load;
/// never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub reporter: String,
    pub client: String,
    pub product: String,
    pub date_from: String,
    pub date_to: String,
    pub search: String,
}

/// Query parameters for `GET /api/reports`. Blank filter fields are omitted
/// from the query string entirely, `per_page` is always pinned.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: usize,
    pub per_page: usize,
}

impl ReportListQuery {
    pub fn new(filters: &ReportFilters, page: usize) -> Self {
        Self {
            reporter: non_blank(&filters.reporter),
            client: non_blank(&filters.client),
            product: non_blank(&filters.product),
            date_from: non_blank(&filters.date_from),
            date_to: non_blank(&filters.date_to),
            search: non_blank(&filters.search),
            page,
            per_page: PER_PAGE,
        }
    }

    pub fn to_query_string(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filters_produce_only_paging_params() {
        let query = ReportListQuery::new(&ReportFilters::default(), 1);
        assert_eq!(query.to_query_string(), "page=1&per_page=10");
    }

    #[test]
    fn blank_fields_are_omitted() {
        let filters = ReportFilters {
            reporter: "Tanaka".to_string(),
            client: "   ".to_string(),
            date_from: "2024-03-01".to_string(),
            ..Default::default()
        };
        let qs = ReportListQuery::new(&filters, 2).to_query_string();
        assert_eq!(qs, "reporter=Tanaka&date_from=2024-03-01&page=2&per_page=10");
    }

    #[test]
    fn per_page_is_always_pinned() {
        for page in [1, 7, 42] {
            let query = ReportListQuery::new(&ReportFilters::default(), page);
            assert_eq!(query.page, page);
            assert_eq!(query.per_page, PER_PAGE);
        }
    }

    #[test]
    fn filter_values_are_trimmed() {
        let filters = ReportFilters {
            search: "  firmware  ".to_string(),
            ..Default::default()
        };
        let query = ReportListQuery::new(&filters, 1);
        assert_eq!(query.search.as_deref(), Some("firmware"));
    }
}
