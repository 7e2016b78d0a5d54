use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-white rounded-lg shadow-sm"}
    clx! {ItemCard, div, "bg-white rounded-lg shadow-sm p-4 hover:shadow-md transition-shadow cursor-pointer"}
    clx! {SectionTitle, h2, "text-2xl font-bold text-gray-900 mb-4"}
    clx! {ItemGrid, div, "grid gap-4 md:grid-cols-2 lg:grid-cols-3"}
}

#[allow(unused_imports)]
pub use components::*;
