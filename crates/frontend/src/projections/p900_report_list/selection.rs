//! Tracks which report mails are pinned into the side panel.

use contracts::domain::a001_project::dto::ProjectRecord;
use leptos::prelude::*;
use std::collections::HashSet;

use crate::domain::a001_project::api;

/// One pinned mail group with its fetched detail records.
#[derive(Clone, Debug)]
pub struct MailPanel {
    pub mail_id: String,
    pub records: Vec<ProjectRecord>,
}

/// Selection state shared between the listing table and the side panel.
///
/// Membership in `selected` drives the row checkboxes and the counter;
/// `panels` holds the fetched detail cards in the order their fetches
/// resolved. A detail response that arrives after its mail was deselected
/// is dropped, so a panel never outlives its selection entry. The reverse
/// does not hold: when a detail fetch fails the selection entry stays and
/// only the panel is missing.
#[derive(Clone, Copy)]
pub struct SelectionService {
    pub selected: RwSignal<HashSet<String>>,
    pub panels: RwSignal<Vec<MailPanel>>,
}

impl SelectionService {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(HashSet::new()),
            panels: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_selected(&self, mail_id: &str) -> bool {
        self.selected.with(|s| s.contains(mail_id))
    }

    pub fn count(&self) -> usize {
        self.selected.with(|s| s.len())
    }

    /// Pin a mail group and fetch its detail records. Re-selecting an
    /// already pinned group refreshes its panel.
    pub fn select(&self, mail_id: String) {
        self.selected.update(|s| {
            s.insert(mail_id.clone());
        });

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_mail_detail(&mail_id).await {
                Ok(records) => this.attach_panel(mail_id, records),
                Err(e) => {
                    // The checkbox keeps its state; only the panel is missing.
                    log::error!("Failed to load mail detail {}: {}", mail_id, e);
                }
            }
        });
    }

    /// Unpin a mail group and drop its panel.
    pub fn deselect(&self, mail_id: &str) {
        self.selected.update(|s| {
            s.remove(mail_id);
        });
        self.panels
            .update(|panels| remove_panel(panels, mail_id));
    }

    fn attach_panel(&self, mail_id: String, records: Vec<ProjectRecord>) {
        if records.is_empty() {
            return;
        }
        // Deselected while the fetch was in flight
        if !self.selected.with_untracked(|s| s.contains(&mail_id)) {
            return;
        }
        self.panels
            .update(|panels| replace_panel(panels, MailPanel { mail_id, records }));
    }
}

/// Append a panel, replacing any previous panel for the same mail id so a
/// re-selected group is never duplicated.
fn replace_panel(panels: &mut Vec<MailPanel>, panel: MailPanel) {
    panels.retain(|p| p.mail_id != panel.mail_id);
    panels.push(panel);
}

fn remove_panel(panels: &mut Vec<MailPanel>, mail_id: &str) {
    panels.retain(|p| p.mail_id != mail_id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64) -> ProjectRecord {
        ProjectRecord {
            id,
            mail_id: Some(format!("m{}", id)),
            report_date: Some("2024-03-01".to_string()),
            reporter: None,
            client_name: None,
            client_department: None,
            client_person: None,
            employee_name: None,
            product_name: None,
            content: None,
        }
    }

    fn panel(mail_id: &str, ids: &[i64]) -> MailPanel {
        MailPanel {
            mail_id: mail_id.to_string(),
            records: ids.iter().copied().map(record).collect(),
        }
    }

    #[test]
    fn panels_keep_resolution_order() {
        let mut panels = Vec::new();
        replace_panel(&mut panels, panel("m2", &[1]));
        replace_panel(&mut panels, panel("m1", &[2]));
        let order: Vec<_> = panels.iter().map(|p| p.mail_id.as_str()).collect();
        assert_eq!(order, ["m2", "m1"]);
    }

    #[test]
    fn reattaching_replaces_instead_of_duplicating() {
        let mut panels = Vec::new();
        replace_panel(&mut panels, panel("m1", &[1]));
        replace_panel(&mut panels, panel("m2", &[2]));
        replace_panel(&mut panels, panel("m1", &[1, 3]));
        assert_eq!(panels.len(), 2);
        // the refreshed panel moves to the end, as its fetch resolved last
        assert_eq!(panels[1].mail_id, "m1");
        assert_eq!(panels[1].records.len(), 2);
    }

    #[test]
    fn removing_is_idempotent() {
        let mut panels = vec![panel("m1", &[1])];
        remove_panel(&mut panels, "m1");
        remove_panel(&mut panels, "m1");
        assert!(panels.is_empty());
    }
}
