pub mod list;
pub mod projects_panel;
pub mod selected;
