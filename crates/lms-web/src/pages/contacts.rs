//! Contact-form submissions page

use crate::components::Banner;
use leptos::*;
use lms_core::types::Contact;

/// Contact submissions page component (read-only)
#[component]
pub fn ContactsPage(
    /// Filtered contact rows
    items: Vec<Contact>,
    /// Applied filter query
    query: String,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
) -> impl IntoView {
    let has_items = !items.is_empty();

    view! {
        <div class="page-header">
            <h1>"Contact Submissions"</h1>
        </div>
        <form method="get" action="/contacts">
            <input
                class="search-input"
                type="text"
                name="q"
                value=query
                placeholder="Search by name, email, subject, or type"
            />
        </form>
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None if !has_items => view! { <p class="muted">"No contacts found."</p> }.into_view(),
            None => {
                let rows = items
                    .into_iter()
                    .map(|contact| {
                        let name = contact.name;
                        let email = contact.email;
                        let subject = contact.subject;
                        let body = contact.query;
                        let kind = contact.kind;
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{email}</td>
                                <td>{subject}</td>
                                <td>{body}</td>
                                <td>{kind}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Subject"</th>
                                <th>"Query"</th>
                                <th>"Type"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_view()
            }
        }}
    }
}
