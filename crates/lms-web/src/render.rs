//! Server-side rendering of Leptos page components

use axum::response::Html;
use leptos::IntoView;

/// Render a page component into a full HTML document.
///
/// The page `title` must be a static, trusted string.
pub fn page<F, N>(title: &str, component: F) -> Html<String>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let rendered = leptos::ssr::render_to_string(component);
    let body: &str = &rendered;
    Html(format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head>\
         <meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <title>{title} - LMS Admin</title>\
         <link rel=\"stylesheet\" href=\"/assets/app.css\"/>\
         </head><body>{body}</body></html>"
    ))
}

/// Render a page that refreshes to `target` after `seconds`, used after a
/// successful course save, which navigates to the list after a short delay.
pub fn page_with_refresh<F, N>(title: &str, target: &str, seconds: u32, component: F) -> Html<String>
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    let rendered = leptos::ssr::render_to_string(component);
    let body: &str = &rendered;
    Html(format!(
        "<!DOCTYPE html>\
         <html lang=\"en\"><head>\
         <meta charset=\"utf-8\"/>\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\
         <meta http-equiv=\"refresh\" content=\"{seconds};url={target}\"/>\
         <title>{title} - LMS Admin</title>\
         <link rel=\"stylesheet\" href=\"/assets/app.css\"/>\
         </head><body>{body}</body></html>"
    ))
}
