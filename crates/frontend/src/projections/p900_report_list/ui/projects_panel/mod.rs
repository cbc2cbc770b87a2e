use contracts::domain::a001_project::dto::ProjectRecord;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_project::api;
use crate::domain::a001_project::ui::summary::ProjectSummary;
use crate::shared::icons::icon;

/// Which kind of name a cross-filter panel was opened for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CrossFilterKind {
    Client,
    Product,
}

/// Contents of the cross-filter panel: every project record associated with
/// one clicked name, independent of the listing's current filters and page.
#[derive(Clone, Debug)]
pub struct CrossFilterPanel {
    pub kind: CrossFilterKind,
    pub name: String,
    pub projects: Vec<ProjectRecord>,
    pub error: Option<String>,
}

/// At most one panel is shown; a new click fully replaces its content.
#[derive(Clone, Copy)]
pub struct CrossFilterService {
    pub panel: RwSignal<Option<CrossFilterPanel>>,
}

impl CrossFilterService {
    pub fn new() -> Self {
        Self {
            panel: RwSignal::new(None),
        }
    }

    pub fn show_client(&self, name: String) {
        self.show(CrossFilterKind::Client, name);
    }

    pub fn show_product(&self, name: String) {
        self.show(CrossFilterKind::Product, name);
    }

    pub fn close(&self) {
        self.panel.set(None);
    }

    fn show(&self, kind: CrossFilterKind, name: String) {
        let this = *self;
        spawn_local(async move {
            let result = match kind {
                CrossFilterKind::Client => api::fetch_client_projects(&name).await,
                CrossFilterKind::Product => api::fetch_product_projects(&name).await,
            };
            let panel = match result {
                Ok(projects) => CrossFilterPanel {
                    kind,
                    name,
                    projects,
                    error: None,
                },
                Err(e) => {
                    log::error!("Failed to load projects for {}: {}", name, e);
                    CrossFilterPanel {
                        kind,
                        name,
                        projects: Vec::new(),
                        error: Some(format!("案件の読み込みに失敗しました: {}", e)),
                    }
                }
            };
            this.panel.set(Some(panel));
        });
    }
}

#[component]
pub fn CrossFilterProjectsPanel() -> impl IntoView {
    let cross_filter =
        use_context::<CrossFilterService>().expect("CrossFilterService not found in context");

    view! {
        {move || cross_filter.panel.get().map(|panel| {
            let title = format!("{}の案件一覧 ({}件)", panel.name, panel.projects.len());
            let kind_class = match panel.kind {
                CrossFilterKind::Client => "projects-panel projects-panel--client",
                CrossFilterKind::Product => "projects-panel projects-panel--product",
            };

            let body = if let Some(message) = panel.error {
                view! { <div class="error">{message}</div> }.into_any()
            } else if panel.projects.is_empty() {
                view! { <div class="info-note">"該当する案件がありません"</div> }.into_any()
            } else {
                panel.projects.into_iter().map(|project| {
                    view! {
                        <div class="card card--compact">
                            <div class="card__body">
                                <ProjectSummary record=project show_date=true />
                            </div>
                        </div>
                    }
                }).collect_view().into_any()
            };

            view! {
                <section class=kind_class>
                    <div class="projects-panel__header">
                        <h3>{title}</h3>
                        <button class="button button--icon" on:click=move |_| cross_filter.close()>
                            {icon("x")}
                        </button>
                    </div>
                    <div class="projects-panel__container">{body}</div>
                </section>
            }
        })}
    }
}
