pub mod edit;
pub mod summary;

use leptos::prelude::*;

use self::edit::ProjectEditForm;

/// Opens the project edit dialog from anywhere a record id is shown.
#[derive(Clone, Copy)]
pub struct EditModalService {
    editing: RwSignal<Option<i64>>,
}

impl EditModalService {
    pub fn new() -> Self {
        Self {
            editing: RwSignal::new(None),
        }
    }

    pub fn open(&self, project_id: i64) {
        self.editing.set(Some(project_id));
    }

    pub fn close(&self) {
        self.editing.set(None);
    }

    pub fn current(&self) -> Option<i64> {
        self.editing.get()
    }
}

/// Mounts the edit dialog while a record is being edited.
#[component]
pub fn ProjectEditHost() -> impl IntoView {
    let edit_modal =
        use_context::<EditModalService>().expect("EditModalService not found in context");

    view! {
        {move || edit_modal.current().map(|id| view! { <ProjectEditForm project_id=id /> })}
    }
}
