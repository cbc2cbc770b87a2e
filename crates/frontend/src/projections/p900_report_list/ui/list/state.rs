use leptos::prelude::*;

use crate::projections::p900_report_list::query::ReportFilters;

/// Filter form values plus the current page of the listing.
#[derive(Clone, Debug)]
pub struct ReportListState {
    pub filters: ReportFilters,
    pub page: usize,
}

impl Default for ReportListState {
    fn default() -> Self {
        Self {
            filters: ReportFilters::default(),
            page: 1,
        }
    }
}

pub fn create_state() -> RwSignal<ReportListState> {
    RwSignal::new(ReportListState::default())
}
