//! Manage-students page: filterable roster, enroll modal, detail modal

use super::{format_time, list_href, or_na};
use crate::components::{Banner, StatusBadge};
use leptos::*;
use lms_core::types::Student;
use lms_state::form::StudentForm;

/// Manage-students page component
#[component]
#[allow(clippy::too_many_lines)]
pub fn StudentsPage(
    /// Filtered roster rows
    items: Vec<Student>,
    /// Applied filter query
    query: String,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
    /// Toggle failure banner
    banner: Option<String>,
    /// Entity whose detail modal is open
    selected: Option<Student>,
    /// Enroll form to render in the modal (values survive a failed submit)
    form: Option<StudentForm>,
) -> impl IntoView {
    let close_href = list_href("/students", &query, None);
    let search_query = query.clone();
    let empty_message = if query.trim().is_empty() {
        "No students found."
    } else {
        "No students found matching your search."
    };
    let has_items = !items.is_empty();

    view! {
        <div class="page-header">
            <h1>"Manage Students"</h1>
            <a class="btn btn-primary" href="/students?modal=enroll">"Enroll Student"</a>
        </div>
        <form method="get" action="/students">
            <input
                class="search-input"
                type="text"
                name="q"
                value=search_query
                placeholder="Search by name or email"
            />
        </form>
        {banner.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None if !has_items => view! { <p class="muted">{empty_message}</p> }.into_view(),
            None => {
                let rows = items
                    .into_iter()
                    .map(|student| {
                        let detail_href = list_href("/students", &query, Some(&student.id));
                        let toggle = toggle_form(&student, &query);
                        let name = student.full_name();
                        let email = student.email;
                        let education = or_na(student.education);
                        let occupation = or_na(student.occupation);
                        let active = student.is_active;
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{email}</td>
                                <td>{education}</td>
                                <td>{occupation}</td>
                                <td><StatusBadge active=active/></td>
                                <td>
                                    <a class="btn" href=detail_href>"More"</a>
                                    {toggle}
                                </td>
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
                                <th>"Education"</th>
                                <th>"Occupation"</th>
                                <th>"Status"</th>
                                <th>"Action"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                }
                .into_view()
            }
        }}
        {selected.map(|student| {
            let close = close_href.clone();
            student_detail(student, &query, close)
        })}
        {form.map(enroll_modal)}
    }
}

fn toggle_form(student: &Student, query: &str) -> impl IntoView + use<> {
    let action = format!("/students/{}/toggle", student.id);
    let next = (!student.is_active).to_string();
    let label = if student.is_active { "Deactivate" } else { "Activate" };
    let query = query.to_string();
    view! {
        <form method="post" action=action style="display:inline">
            <input type="hidden" name="active" value=next/>
            <input type="hidden" name="q" value=query/>
            <button class="btn" type="submit">{label}</button>
        </form>
    }
}

fn student_detail(student: Student, query: &str, close_href: String) -> impl IntoView {
    let title = format!("{} Details", student.full_name());
    let toggle = toggle_form(&student, query);
    let first_name = student.first_name;
    let last_name = student.last_name;
    let email = student.email;
    let phone = or_na(student.phone);
    let education = or_na(student.education);
    let occupation = or_na(student.occupation);
    let skills = if student.skills.is_empty() {
        "N/A".to_string()
    } else {
        student.skills.join(", ")
    };
    let interests = if student.interests.is_empty() {
        "N/A".to_string()
    } else {
        student.interests.join(", ")
    };
    let active = student.is_active;
    let created_at = format_time(student.created_at);
    let updated_at = format_time(student.updated_at);
    let last_login = format_time(student.last_login);

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{title}</h2>
                <div class="detail-row"><strong>"First Name:"</strong><span>{first_name}</span></div>
                <div class="detail-row"><strong>"Last Name:"</strong><span>{last_name}</span></div>
                <div class="detail-row"><strong>"Email:"</strong><span>{email}</span></div>
                <div class="detail-row"><strong>"Phone:"</strong><span>{phone}</span></div>
                <div class="detail-row"><strong>"Education:"</strong><span>{education}</span></div>
                <div class="detail-row"><strong>"Occupation:"</strong><span>{occupation}</span></div>
                <div class="detail-row"><strong>"Skills:"</strong><span>{skills}</span></div>
                <div class="detail-row"><strong>"Interests:"</strong><span>{interests}</span></div>
                <div class="detail-row"><strong>"Status:"</strong><StatusBadge active=active/></div>
                <div class="detail-row"><strong>"Created At:"</strong><span>{created_at}</span></div>
                <div class="detail-row"><strong>"Updated At:"</strong><span>{updated_at}</span></div>
                <div class="detail-row"><strong>"Last Login:"</strong><span>{last_login}</span></div>
                {toggle}
                <a class="btn" href=close_href>"Close"</a>
            </div>
        </div>
    }
}

fn enroll_modal(form: StudentForm) -> impl IntoView {
    let error = form.status.error().map(ToString::to_string);
    let submitting = form.status.submitting();
    let skills = form.skills.rows().join(", ");
    let interests = form.interests.rows().join(", ");
    let first_name = form.first_name;
    let last_name = form.last_name;
    let email = form.email;
    let phone = form.phone;
    let education = form.education;
    let occupation = form.occupation;
    let active_value = form.is_active.to_string();

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Enroll New Student"</h2>
                {error.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
                <form method="post" action="/students">
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
                        <label>"Password"</label>
                        <input
                            type="password"
                            name="password"
                            placeholder="Enter password (min 6 characters)"
                            required=true
                        />
                    </div>
                    <div class="form-field">
                        <label>"Phone"</label>
                        <input type="text" name="phone" value=phone placeholder="Optional"/>
                    </div>
                    <div class="form-field">
                        <label>"Education"</label>
                        <input type="text" name="education" value=education placeholder="Optional"/>
                    </div>
                    <div class="form-field">
                        <label>"Occupation"</label>
                        <input type="text" name="occupation" value=occupation placeholder="Optional"/>
                    </div>
                    <div class="form-field">
                        <label>"Skills (comma-separated)"</label>
                        <input type="text" name="skills" value=skills placeholder="e.g., Python, SQL"/>
                    </div>
                    <div class="form-field">
                        <label>"Interests (comma-separated)"</label>
                        <input
                            type="text"
                            name="interests"
                            value=interests
                            placeholder="e.g., Machine Learning"
                        />
                    </div>
                    <div class="form-field">
                        <label>"Active Status"</label>
                        <select name="is_active">
                            <option value="true" selected={active_value == "true"}>"Active"</option>
                            <option value="false" selected={active_value == "false"}>"Inactive"</option>
                        </select>
                    </div>
                    <a class="btn" href="/students">"Cancel"</a>
                    <button class="btn btn-primary" type="submit" disabled=submitting>
                        "Enroll"
                    </button>
                </form>
            </div>
        </div>
    }
}
