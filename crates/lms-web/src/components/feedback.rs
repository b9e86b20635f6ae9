//! Inline feedback components: banners and status badges

use leptos::*;

/// Error/success banner shown above page content
#[component]
pub fn Banner(
    /// "error" or "success"
    kind: String,
    /// Message text
    message: String,
) -> impl IntoView {
    let class = format!("banner banner-{kind}");
    view! { <div class=class>{message}</div> }
}

/// Active/inactive pill
#[component]
pub fn StatusBadge(
    /// The entity's active flag
    active: bool,
) -> impl IntoView {
    let (class, label) = if active {
        ("badge badge-active", "Active")
    } else {
        ("badge badge-inactive", "Inactive")
    };
    view! { <span class=class>{label}</span> }
}
