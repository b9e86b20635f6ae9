//! Manage-instructors page: filterable roster, enroll modal, detail modal

use super::{format_time, list_href, or_na};
use crate::components::{Banner, StatusBadge};
use leptos::*;
use lms_core::types::Instructor;
use lms_state::form::InstructorForm;

/// Manage-instructors page component
#[component]
#[allow(clippy::too_many_lines)]
pub fn InstructorsPage(
    /// Filtered roster rows
    items: Vec<Instructor>,
    /// Applied filter query
    query: String,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
    /// Toggle failure banner
    banner: Option<String>,
    /// Entity whose detail modal is open
    selected: Option<Instructor>,
    /// Enroll form to render in the modal (values survive a failed submit)
    form: Option<InstructorForm>,
) -> impl IntoView {
    let close_href = list_href("/instructors", &query, None);
    let search_query = query.clone();
    let empty_message = if query.trim().is_empty() {
        "No instructors found."
    } else {
        "No instructors found matching your search."
    };
    let has_items = !items.is_empty();

    view! {
        <div class="page-header">
            <h1>"Manage Instructors"</h1>
            <a class="btn btn-primary" href="/instructors?modal=enroll">"Enroll Instructor"</a>
        </div>
        <form method="get" action="/instructors">
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
                    .map(|instructor| {
                        let detail_href =
                            list_href("/instructors", &query, Some(&instructor.id));
                        let toggle = toggle_form(&instructor, &query);
                        let name = instructor.full_name();
                        let email = instructor.email;
                        let phone = or_na(instructor.phone);
                        let expertise = instructor.expertise.join(", ");
                        let courses = instructor.total_courses;
                        let active = instructor.is_active;
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{email}</td>
                                <td>{phone}</td>
                                <td>{expertise}</td>
                                <td>{courses}</td>
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
                                <th>"Phone"</th>
                                <th>"Expertise"</th>
                                <th>"Courses"</th>
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
        {selected.map(|instructor| {
            let close = close_href.clone();
            instructor_detail(instructor, &query, close)
        })}
        {form.map(enroll_modal)}
    }
}

/// Toggle form for one row; the control is disabled while that row's toggle
/// is in flight (single-request rendering means it never renders disabled
/// here, but the contract lives in the controller)
fn toggle_form(instructor: &Instructor, query: &str) -> impl IntoView + use<> {
    let action = format!("/instructors/{}/toggle", instructor.id);
    let next = (!instructor.is_active).to_string();
    let label = if instructor.is_active { "Deactivate" } else { "Activate" };
    let query = query.to_string();
    view! {
        <form method="post" action=action style="display:inline">
            <input type="hidden" name="active" value=next/>
            <input type="hidden" name="q" value=query/>
            <button class="btn" type="submit">{label}</button>
        </form>
    }
}

/// Detail modal: the entity's full field set. Closing discards the
/// selection without side effects.
fn instructor_detail(instructor: Instructor, query: &str, close_href: String) -> impl IntoView {
    let title = format!("{} Details", instructor.full_name());
    let toggle = toggle_form(&instructor, query);
    let first_name = instructor.first_name;
    let last_name = instructor.last_name;
    let email = instructor.email;
    let phone = or_na(instructor.phone);
    let avatar = or_na(instructor.avatar);
    let expertise = if instructor.expertise.is_empty() {
        "N/A".to_string()
    } else {
        instructor.expertise.join(", ")
    };
    let total_courses = instructor.total_courses;
    let bio = or_na(instructor.bio);
    let linkedin = or_na(instructor.social_links.linkedin);
    let twitter = or_na(instructor.social_links.twitter);
    let active = instructor.is_active;
    let verified = if instructor.is_verified { "Yes" } else { "No" };
    let rating = format!("{:.1}", instructor.rating);
    let total_students = instructor.total_students;
    let earnings = format!("${:.2}", instructor.earnings);
    let approved = if instructor.approved { "Yes" } else { "No" };
    let created_at = format_time(instructor.created_at);
    let updated_at = format_time(instructor.updated_at);
    let last_login = format_time(instructor.last_login);

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{title}</h2>
                <div class="detail-row"><strong>"First Name:"</strong><span>{first_name}</span></div>
                <div class="detail-row"><strong>"Last Name:"</strong><span>{last_name}</span></div>
                <div class="detail-row"><strong>"Email:"</strong><span>{email}</span></div>
                <div class="detail-row"><strong>"Phone:"</strong><span>{phone}</span></div>
                <div class="detail-row"><strong>"Avatar:"</strong><span>{avatar}</span></div>
                <div class="detail-row"><strong>"Expertise:"</strong><span>{expertise}</span></div>
                <div class="detail-row"><strong>"Total Courses:"</strong><span>{total_courses}</span></div>
                <div class="detail-row"><strong>"Bio:"</strong><span>{bio}</span></div>
                <div class="detail-row"><strong>"LinkedIn:"</strong><span>{linkedin}</span></div>
                <div class="detail-row"><strong>"Twitter:"</strong><span>{twitter}</span></div>
                <div class="detail-row"><strong>"Status:"</strong><StatusBadge active=active/></div>
                <div class="detail-row"><strong>"Verified:"</strong><span>{verified}</span></div>
                <div class="detail-row"><strong>"Rating:"</strong><span>{rating}</span></div>
                <div class="detail-row"><strong>"Total Students:"</strong><span>{total_students}</span></div>
                <div class="detail-row"><strong>"Earnings:"</strong><span>{earnings}</span></div>
                <div class="detail-row"><strong>"Approved:"</strong><span>{approved}</span></div>
                <div class="detail-row"><strong>"Created At:"</strong><span>{created_at}</span></div>
                <div class="detail-row"><strong>"Updated At:"</strong><span>{updated_at}</span></div>
                <div class="detail-row"><strong>"Last Login:"</strong><span>{last_login}</span></div>
                {toggle}
                <a class="btn" href=close_href>"Close"</a>
            </div>
        </div>
    }
}

/// Enroll-instructor modal; a failed submit re-renders it with the entered
/// values and the inline error.
fn enroll_modal(form: InstructorForm) -> impl IntoView {
    let error = form.status.error().map(ToString::to_string);
    let expertise = form.expertise.rows().join(", ");
    let submitting = form.status.submitting();
    let first_name = form.first_name;
    let last_name = form.last_name;
    let email = form.email;
    let phone = form.phone;
    let avatar = form.avatar;
    let bio = form.bio;
    let linkedin = form.linkedin;
    let twitter = form.twitter;
    let active_value = form.is_active.to_string();

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>"Enroll New Instructor"</h2>
                {error.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
                <form method="post" action="/instructors">
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
                        <label>"Avatar URL"</label>
                        <input type="text" name="avatar" value=avatar placeholder="Optional image URL"/>
                    </div>
                    <div class="form-field">
                        <label>"Expertise (comma-separated)"</label>
                        <input
                            type="text"
                            name="expertise"
                            value=expertise
                            placeholder="e.g., JavaScript, React"
                        />
                    </div>
                    <div class="form-field">
                        <label>"Bio"</label>
                        <textarea name="bio" rows="3">{bio}</textarea>
                    </div>
                    <div class="form-field">
                        <label>"LinkedIn URL"</label>
                        <input type="text" name="linkedin" value=linkedin placeholder="Optional"/>
                    </div>
                    <div class="form-field">
                        <label>"Twitter URL"</label>
                        <input type="text" name="twitter" value=twitter placeholder="Optional"/>
                    </div>
                    <div class="form-field">
                        <label>"Active Status"</label>
                        <select name="is_active">
                            <option value="true" selected={active_value == "true"}>"Active"</option>
                            <option value="false" selected={active_value == "false"}>"Inactive"</option>
                        </select>
                    </div>
                    <a class="btn" href="/instructors">"Cancel"</a>
                    <button class="btn btn-primary" type="submit" disabled=submitting>
                        "Enroll"
                    </button>
                </form>
            </div>
        </div>
    }
}
