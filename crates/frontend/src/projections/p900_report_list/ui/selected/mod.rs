use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_project::api;
use crate::domain::a001_project::ui::summary::ProjectSummary;
use crate::projections::p900_report_list::selection::SelectionService;
use crate::shared::date_utils::format_date;
use crate::shared::dialog;
use crate::shared::icons::icon;

/// The pinned-mail area: one card per selected report group, in the order
/// the detail fetches resolved. Hidden entirely while nothing is selected.
#[component]
pub fn SelectedReportsPanel(reload: RwSignal<u64>) -> impl IntoView {
    let selection =
        use_context::<SelectionService>().expect("SelectionService not found in context");

    // Confirmation is built from a fresh detail fetch so the prompt shows
    // the current record count, not the one cached in the panel. A failure
    // at either step leaves selection, panel and listing untouched.
    let delete_mail = move |mail_id: String| {
        spawn_local(async move {
            let records = match api::fetch_mail_detail(&mail_id).await {
                Ok(records) => records,
                Err(e) => {
                    log::error!("Failed to load mail detail {}: {}", mail_id, e);
                    dialog::alert(&format!("削除処理でエラーが発生しました: {}", e));
                    return;
                }
            };
            if records.is_empty() {
                return;
            }

            let date = format_date(records[0].report_date.as_deref().unwrap_or(""));
            let message = format!(
                "このメール（{}）の全案件 {} 件を削除しますか？",
                date,
                records.len()
            );
            if !dialog::confirm(&message) {
                return;
            }

            match api::delete_mail_projects(&mail_id).await {
                Ok(_) => {
                    dialog::alert("全案件を削除しました");
                    selection.deselect(&mail_id);
                    reload.update(|n| *n += 1);
                }
                Err(e) => {
                    log::error!("Failed to delete mail {}: {}", mail_id, e);
                    dialog::alert(&format!("削除処理でエラーが発生しました: {}", e));
                }
            }
        });
    };

    view! {
        <section
            class="selected-reports"
            style:display={move || if selection.count() > 0 { "block" } else { "none" }}
        >
            <div class="selected-reports__header">
                <h3>"選択中の週報"</h3>
                <span class="selected-reports__count">
                    {move || format!("{} 件選択中", selection.count())}
                </span>
            </div>
            <div class="selected-reports__container">
                {move || selection.panels.get().into_iter().map(|panel| {
                    let mail_id_delete = panel.mail_id.clone();
                    let mail_id_close = panel.mail_id.clone();

                    let (header_date, header_reporter) = panel
                        .records
                        .first()
                        .map(|r| {
                            (
                                format_date(r.report_date.as_deref().unwrap_or("")),
                                r.reporter.clone().unwrap_or_else(|| "-".to_string()),
                            )
                        })
                        .unwrap_or_else(|| ("-".to_string(), "-".to_string()));

                    view! {
                        <div class="card">
                            <div class="card__header">
                                <h4>{format!("{} - {}", header_date, header_reporter)}</h4>
                                <div class="card__actions">
                                    <button
                                        class="button button--danger button--small"
                                        title="このメールの全案件を削除"
                                        on:click=move |_| delete_mail(mail_id_delete.clone())
                                    >
                                        {icon("trash")}
                                        "削除"
                                    </button>
                                    <button
                                        class="button button--icon"
                                        on:click=move |_| selection.deselect(&mail_id_close)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            </div>
                            <div class="card__body">
                                {panel.records.into_iter().enumerate().map(|(index, record)| {
                                    view! {
                                        {(index > 0).then(|| view! { <hr/> })}
                                        <ProjectSummary record=record />
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}
