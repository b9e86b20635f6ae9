//! Settings page: own profile and theme

use crate::components::Banner;
use leptos::*;
use lms_core::types::UserProfile;

/// Settings page component
#[component]
pub fn SettingsPage(
    /// Freshly fetched profile of the logged-in user
    profile: UserProfile,
    /// Result of the last profile update: ("success" | "error", message)
    status: Option<(String, String)>,
    /// Current theme ("light" | "dark")
    theme: String,
) -> impl IntoView {
    let welcome = format!("Welcome, {}", profile.full_name());
    let first_name = profile.first_name;
    let last_name = profile.last_name;
    let email = profile.email;
    let phone = profile.phone.unwrap_or_default();
    let avatar = profile.avatar.unwrap_or_default();
    let role = profile.role.to_string();
    let next_theme = if theme == "dark" { "light" } else { "dark" };
    let theme_label = format!("Current theme: {theme}");
    let theme_button = if theme == "dark" { "Switch to light" } else { "Switch to dark" };

    view! {
        <h1>"Settings"</h1>
        <div class="card">
            <h3>{welcome}</h3>
            <p class="muted">{role}</p>
        </div>
        {status.map(|(kind, message)| view! { <Banner kind=kind message=message/> })}
        <form method="post" action="/settings/profile" class="card">
            <h3>"Profile"</h3>
            <div class="form-field">
                <label>"First Name"</label>
                <input type="text" name="first_name" value=first_name required=true/>
            </div>
            <div class="form-field">
                <label>"Last Name"</label>
                <input type="text" name="last_name" value=last_name required=true/>
            </div>
            <div class="form-field">
                <label>"Email"</label>
                <input type="email" name="email" value=email required=true/>
            </div>
            <div class="form-field">
                <label>"Phone"</label>
                <input type="text" name="phone" value=phone/>
            </div>
            <div class="form-field">
                <label>"Avatar URL"</label>
                <input type="text" name="avatar" value=avatar/>
            </div>
            <button class="btn btn-primary" type="submit">"Save Changes"</button>
        </form>
        <div class="card">
            <h3>"Appearance"</h3>
            <p class="muted">{theme_label}</p>
            <form method="post" action="/settings/theme">
                <input type="hidden" name="theme" value=next_theme/>
                <button class="btn" type="submit">{theme_button}</button>
            </form>
        </div>
    }
}
