pub mod autosave_indicator;
pub mod blog_item;
pub mod navbar;
pub mod rich_text;
pub mod toaster;
pub mod toolbar;
pub mod ui;

pub(crate) use autosave_indicator::AutoSaveIndicator;
pub(crate) use blog_item::BlogItem;
pub use navbar::Navbar;
pub(crate) use rich_text::{RichTextEditor, RichTextSurface};
pub use toaster::Toaster;
pub(crate) use toolbar::Toolbar;
