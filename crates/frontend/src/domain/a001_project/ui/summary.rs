use contracts::domain::a001_project::dto::ProjectRecord;
use leptos::prelude::*;

use super::EditModalService;
use crate::shared::date_utils::format_date;

/// Compact rendering of one project record, shared by the pinned-mail cards
/// and the cross-filter panels. Every summary exposes the edit trigger.
#[component]
pub fn ProjectSummary(
    record: ProjectRecord,
    /// Show the record's own date and reporter line (the pinned-mail card
    /// already carries them in its header)
    #[prop(optional)]
    show_date: bool,
) -> impl IntoView {
    let edit_modal =
        use_context::<EditModalService>().expect("EditModalService not found in context");

    let id = record.id;
    let date_line = show_date.then(|| {
        let date = format_date(record.report_date.as_deref().unwrap_or(""));
        let reporter = record
            .reporter
            .clone()
            .unwrap_or_else(|| "-".to_string());
        view! {
            <div class="project-summary__date">
                <strong>{date}</strong>
                " "
                <span class="text-muted">{reporter}</span>
            </div>
        }
    });

    let client = client_line(&record);
    let employee = record.employee_name.clone().filter(|s| !s.is_empty());
    let product = record.product_name.clone().filter(|s| !s.is_empty());
    let content = record.content.clone().filter(|s| !s.is_empty());

    view! {
        <div class="project-summary">
            {date_line}
            <div class="project-summary__row">
                <div class="project-summary__fields">
                    <div><strong>"客先: "</strong>{client}</div>
                    {employee.map(|name| view! { <div><strong>"同行社員: "</strong>{name}</div> })}
                    {product.map(|name| view! { <div><strong>"製品名: "</strong>{name}</div> })}
                </div>
                <div class="project-summary__actions">
                    <button
                        class="button button--small"
                        title="データベース修正"
                        on:click=move |_| edit_modal.open(id)
                    >
                        {format!("ID:{}", id)}
                    </button>
                </div>
            </div>
            {content.map(|text| view! {
                <div class="project-summary__content" style="white-space: pre-wrap;">
                    <strong>"内容:"</strong>
                    <div>{text}</div>
                </div>
            })}
        </div>
    }
}

/// "客先名(部署):担当者", skipping the parts that are absent.
fn client_line(record: &ProjectRecord) -> String {
    let mut line = record
        .client_name
        .clone()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "-".to_string());
    if let Some(department) = record.client_department.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!("({})", department));
    }
    if let Some(person) = record.client_person.as_deref().filter(|s| !s.is_empty()) {
        line.push_str(&format!(":{}", person));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        ProjectRecord {
            id: 1,
            mail_id: Some("m1".to_string()),
            report_date: Some("2024-03-01".to_string()),
            reporter: Some("Tanaka".to_string()),
            client_name: Some("Acme".to_string()),
            client_department: Some("開発部".to_string()),
            client_person: Some("佐藤".to_string()),
            employee_name: None,
            product_name: None,
            content: None,
        }
    }

    #[test]
    fn full_client_line() {
        assert_eq!(client_line(&record()), "Acme(開発部):佐藤");
    }

    #[test]
    fn absent_parts_are_skipped() {
        let mut r = record();
        r.client_department = None;
        r.client_person = Some("".to_string());
        assert_eq!(client_line(&r), "Acme");

        r.client_name = None;
        assert_eq!(client_line(&r), "-");
    }
}
