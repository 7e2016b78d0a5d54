use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="bg-white shadow-sm">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex h-16 items-center justify-between">
                    <A href="/dashboard" attr:class="text-xl font-bold text-gray-900">
                        "Blog Editor"
                    </A>
                    <A
                        href="/editor"
                        attr:class="inline-flex items-center gap-2 rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700"
                    >
                        "New Post"
                    </A>
                </div>
            </div>
        </nav>
    }
}
