use crate::components::{Navbar, Toaster};
use crate::pages::{DashboardPage, EditorPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50">
                <Navbar />
                <main>
                    <Routes fallback=|| view! { <div class="px-4 py-8 text-sm text-gray-500">"Not found"</div> }>
                        <Route path=path!("") view=|| view! { <Redirect path="/dashboard" /> } />
                        <Route path=path!("dashboard") view=DashboardPage />
                        <Route path=path!("editor") view=EditorPage />
                        <Route path=path!("editor/:id") view=EditorPage />
                    </Routes>
                </main>
                <Toaster />
            </div>
        </Router>
    }
}
