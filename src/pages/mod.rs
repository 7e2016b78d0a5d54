mod dashboard;
mod editor;

pub use dashboard::DashboardPage;
pub use editor::EditorPage;
