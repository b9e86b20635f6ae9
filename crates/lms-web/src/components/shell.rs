//! Application shell: theme wrapper, sidebar navigation, content column

use leptos::*;

const NAV_LINKS: [(&str, &str); 10] = [
    ("/", "Dashboard"),
    ("/instructors", "Instructors"),
    ("/students", "Students"),
    ("/courses", "Courses"),
    ("/enrollments", "Enrollments"),
    ("/tickets", "Tickets"),
    ("/contacts", "Contacts"),
    ("/reports/revenue", "Revenue"),
    ("/activity", "Activity"),
    ("/settings", "Settings"),
];

/// Page shell wrapping every authenticated view
#[component]
pub fn Shell(
    /// Theme class suffix: "light" or "dark"
    theme: String,
    /// Path of the active navigation entry
    active: String,
    /// Display name of the logged-in user
    user_name: Option<String>,
    /// Page content
    children: Children,
) -> impl IntoView {
    let wrapper_class = format!("app theme-{theme}");
    view! {
        <div class=wrapper_class>
            <Sidebar active=active user_name=user_name theme=theme/>
            <div class="content">{children()}</div>
        </div>
    }
}

/// Sidebar with navigation, the theme toggle, and logout
#[component]
fn Sidebar(active: String, user_name: Option<String>, theme: String) -> impl IntoView {
    let next_theme = if theme == "dark" { "light" } else { "dark" };
    let theme_label = if theme == "dark" { "Light mode" } else { "Dark mode" };

    view! {
        <aside class="sidebar">
            <div class="logo">"LMS Admin"</div>
            {user_name.map(|name| view! { <p class="muted">{name}</p> })}
            <nav>
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let class = if active == *href { "nav-link active" } else { "nav-link" };
                        view! { <a class=class href=*href>{*label}</a> }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <form method="post" action="/settings/theme">
                <input type="hidden" name="theme" value=next_theme/>
                <button class="btn" type="submit">{theme_label}</button>
            </form>
            <form method="post" action="/logout">
                <button class="btn" type="submit">"Log out"</button>
            </form>
        </aside>
    }
}
