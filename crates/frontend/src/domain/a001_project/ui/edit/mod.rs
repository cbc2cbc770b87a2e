use contracts::domain::a001_project::dto::{ProjectRecord, ProjectUpdateRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::EditModalService;
use crate::domain::a001_project::api;
use crate::shared::components::modal::Modal;
use crate::shared::dialog;

/// Edit dialog for one project record.
///
/// Saving always sends a full eight-field replace, never a partial patch,
/// and forwards the values as typed without client-side validation. After
/// a successful save the listing and panels stay stale until the next
/// reload.
#[component]
pub fn ProjectEditForm(project_id: i64) -> impl IntoView {
    let edit_modal =
        use_context::<EditModalService>().expect("EditModalService not found in context");

    let form = RwSignal::new(ProjectUpdateRequest::default());
    let (loaded, set_loaded) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_project(project_id).await {
                Ok(record) => {
                    form.set(form_from_record(&record));
                    set_loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load project {}: {}", project_id, e);
                    dialog::alert("データの読み込みに失敗しました");
                    edit_modal.close();
                }
            }
        });
    });

    let save = move || {
        let request = form.get_untracked();
        spawn_local(async move {
            match api::update_project(project_id, &request).await {
                Ok(_) => {
                    dialog::alert("データを保存しました");
                    edit_modal.close();
                }
                Err(e) => {
                    // dialog stays open so nothing typed is lost
                    log::error!("Failed to save project {}: {}", project_id, e);
                    dialog::alert(&format!("データの保存に失敗しました: {}", e));
                }
            }
        });
    };

    view! {
        <Modal
            title=format!("案件データ修正 (ID:{})", project_id)
            on_close=Callback::new(move |_| edit_modal.close())
        >
            {move || {
                if !loaded.get() {
                    return view! { <div class="info-note">"読み込み中..."</div> }.into_any();
                }
                view! {
                    <form class="edit-form" on:submit=move |ev| ev.prevent_default()>
                        <div class="edit-form__grid">
                            <div class="edit-form__field">
                                <label>"報告日"</label>
                                <input
                                    type="date"
                                    prop:value=move || form.get().report_date
                                    on:input=move |ev| form.update(|f| f.report_date = event_target_value(&ev))
                                />
                            </div>
                            <div class="edit-form__field">
                                <label>"報告者"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().reporter
                                    on:input=move |ev| form.update(|f| f.reporter = event_target_value(&ev))
                                />
                            </div>
                            <div class="edit-form__field">
                                <label>"客先名"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().client_name
                                    on:input=move |ev| form.update(|f| f.client_name = event_target_value(&ev))
                                />
                            </div>
                            <div class="edit-form__field">
                                <label>"客先部署"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().client_department
                                    on:input=move |ev| form.update(|f| f.client_department = event_target_value(&ev))
                                />
                            </div>
                            <div class="edit-form__field">
                                <label>"客先担当者"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().client_person
                                    on:input=move |ev| form.update(|f| f.client_person = event_target_value(&ev))
                                />
                            </div>
                            <div class="edit-form__field">
                                <label>"同行社員"</label>
                                <input
                                    type="text"
                                    prop:value=move || form.get().employee_name
                                    on:input=move |ev| form.update(|f| f.employee_name = event_target_value(&ev))
                                />
                            </div>
                        </div>
                        <div class="edit-form__field">
                            <label>"製品名"</label>
                            <input
                                type="text"
                                prop:value=move || form.get().product_name
                                on:input=move |ev| form.update(|f| f.product_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="edit-form__field">
                            <label>"案件内容"</label>
                            <textarea
                                rows="8"
                                prop:value=move || form.get().content
                                on:input=move |ev| form.update(|f| f.content = event_target_value(&ev))
                            ></textarea>
                        </div>
                        <div class="edit-form__actions">
                            <button class="button button--primary" on:click=move |_| save()>
                                "保存"
                            </button>
                            <button
                                class="button button--secondary"
                                on:click=move |_| edit_modal.close()
                            >
                                "キャンセル"
                            </button>
                        </div>
                    </form>
                }.into_any()
            }}
        </Modal>
    }
}

/// Seed the form with the record's current values; absent fields edit as
/// empty strings and are written back as such.
fn form_from_record(record: &ProjectRecord) -> ProjectUpdateRequest {
    ProjectUpdateRequest {
        report_date: record.report_date.clone().unwrap_or_default(),
        reporter: record.reporter.clone().unwrap_or_default(),
        client_name: record.client_name.clone().unwrap_or_default(),
        client_department: record.client_department.clone().unwrap_or_default(),
        client_person: record.client_person.clone().unwrap_or_default(),
        employee_name: record.employee_name.clone().unwrap_or_default(),
        product_name: record.product_name.clone().unwrap_or_default(),
        content: record.content.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_mirrors_record_fields() {
        let record = ProjectRecord {
            id: 7,
            mail_id: Some("m7".to_string()),
            report_date: Some("2024-03-01".to_string()),
            reporter: Some("Tanaka".to_string()),
            client_name: None,
            client_department: Some("開発部".to_string()),
            client_person: None,
            employee_name: None,
            product_name: Some("X".to_string()),
            content: Some("継続案件".to_string()),
        };
        let form = form_from_record(&record);
        assert_eq!(form.report_date, "2024-03-01");
        assert_eq!(form.client_name, "");
        assert_eq!(form.client_department, "開発部");
        assert_eq!(form.content, "継続案件");
    }
}
