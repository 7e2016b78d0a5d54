use crate::components::ui::{ItemGrid, SectionTitle, Spinner};
use crate::components::BlogItem;
use crate::models::Blog;
use crate::state::{AppContext, BlogList};
use leptos::prelude::*;

#[component]
fn BlogSection(
    title: &'static str,
    empty_text: &'static str,
    #[prop(into)] blogs: Signal<Vec<Blog>>,
    list: BlogList,
) -> impl IntoView {
    view! {
        <section class="mb-12" data-section=title>
            <SectionTitle>{title}</SectionTitle>
            <Show
                when=move || !blogs.with(|b| b.is_empty())
                fallback=move || view! { <p class="text-gray-500">{empty_text}</p> }
            >
                <ItemGrid>
                    <For
                        each=move || blogs.get()
                        key=|b| (b.id.clone(), b.updated_at.clone())
                        let:blog
                    >
                        <BlogItem blog=blog list=list />
                    </For>
                </ItemGrid>
            </Show>
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let list = BlogList::new();

    list.fetch(app_state.0.api_client.clone(), app_state.0.toasts);

    let sections = Memo::new(move |_| list.partitioned());
    let drafts = Signal::derive(move || sections.with(|(d, _)| d.clone()));
    let published = Signal::derive(move || sections.with(|(_, p)| p.clone()));

    view! {
        <div class="mx-auto max-w-7xl px-4 py-8 sm:px-6 lg:px-8">
            <Show
                when=move || !list.loading.get()
                fallback=|| view! {
                    <div class="flex h-64 items-center justify-center">
                        <Spinner class="size-8 text-blue-600" />
                    </div>
                }
            >
                <BlogSection
                    title="Drafts"
                    empty_text="No drafts yet"
                    blogs=drafts
                    list=list
                />
                <BlogSection
                    title="Published"
                    empty_text="No published posts yet"
                    blogs=published
                    list=list
                />
            </Show>
        </div>
    }
}
