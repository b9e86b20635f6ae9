//! Enrollments (memberships) page

use crate::components::Banner;
use leptos::*;
use lms_core::types::Enrollment;

/// All-enrollments page component
#[component]
pub fn EnrollmentsPage(
    /// Filtered enrollment rows
    items: Vec<Enrollment>,
    /// Applied filter query
    query: String,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
) -> impl IntoView {
    let has_items = !items.is_empty();

    view! {
        <div class="page-header">
            <h1>"All Enrollments"</h1>
        </div>
        <form method="get" action="/enrollments">
            <input
                class="search-input"
                type="text"
                name="q"
                value=query
                placeholder="Search by name, email, or course..."
            />
        </form>
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None if !has_items => view! { <p class="muted">"No enrollments found."</p> }.into_view(),
            None => {
                let rows = items
                    .into_iter()
                    .map(|enrollment| {
                        let student = enrollment.student_name;
                        let email = enrollment.student_email;
                        let course = enrollment.course_title;
                        view! {
                            <tr>
                                <td>{student}</td>
                                <td>{email}</td>
                                <td>{course}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Student"</th>
                                <th>"Email"</th>
                                <th>"Course"</th>
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
