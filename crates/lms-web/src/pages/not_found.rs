//! 404 Not Found page

use leptos::*;

/// 404 Not Found page component
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Page Not Found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <a href="/" class="btn btn-primary">"Return to Dashboard"</a>
        </div>
    }
}

/// Generic failure screen shown by the top-level fallback boundary
#[component]
pub fn SomethingWentWrong() -> impl IntoView {
    view! {
        <div class="card">
            <h2>"Something went wrong"</h2>
            <p>"An unexpected error occurred. Please try again."</p>
            <a href="/" class="btn btn-primary">"Return to Dashboard"</a>
        </div>
    }
}
