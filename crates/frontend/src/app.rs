use leptos::prelude::*;

use crate::domain::a001_project::ui::{EditModalService, ProjectEditHost};
use crate::projections::p900_report_list::selection::SelectionService;
use crate::projections::p900_report_list::ui::list::ReportList;
use crate::projections::p900_report_list::ui::projects_panel::{
    CrossFilterProjectsPanel, CrossFilterService,
};
use crate::projections::p900_report_list::ui::selected::SelectedReportsPanel;
use crate::projections::p901_report_stats::ui::StatsPanel;

#[component]
pub fn App() -> impl IntoView {
    // Shared services for the whole page. Each is mutated only from event
    // handlers on the main context, so no locking is involved.
    provide_context(SelectionService::new());
    provide_context(CrossFilterService::new());
    provide_context(EditModalService::new());

    // Bumped by components that need the listing refetched (bulk delete).
    let reload = RwSignal::new(0u64);

    view! {
        <div class="app">
            <header class="app__header">
                <h1>"週報管理システム"</h1>
            </header>
            <div class="app__layout">
                <main class="app__main">
                    <ReportList reload=reload />
                    <SelectedReportsPanel reload=reload />
                    <CrossFilterProjectsPanel />
                </main>
                <aside class="app__sidebar">
                    <StatsPanel />
                </aside>
            </div>
            <ProjectEditHost />
        </div>
    }
}
