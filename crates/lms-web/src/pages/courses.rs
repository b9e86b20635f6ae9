//! Course catalog and course forms

use crate::components::Banner;
use leptos::*;
use lms_core::types::Course;
use lms_state::form::CourseForm;

/// One instructor's shelf of courses
#[derive(Debug, Clone)]
pub struct InstructorShelf {
    /// Instructor display name
    pub instructor: String,
    /// Courses taught by that instructor
    pub courses: Vec<Course>,
}

/// Catalog page: courses grouped per instructor
#[component]
pub fn CoursesPage(
    /// One shelf per instructor
    shelves: Vec<InstructorShelf>,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>"Manage Courses"</h1>
            <a class="btn btn-primary" href="/courses/new">"Create Course"</a>
        </div>
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None => shelves
                .into_iter()
                .map(|shelf| {
                    let instructor = shelf.instructor;
                    let empty = shelf.courses.is_empty();
                    let cards = shelf
                        .courses
                        .into_iter()
                        .map(course_card)
                        .collect::<Vec<_>>();
                    view! {
                        <div class="card">
                            <h3>{instructor}</h3>
                            {empty.then(|| view! {
                                <p class="muted">"No courses found for this instructor"</p>
                            })}
                            <div class="card-grid">{cards}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()
                .into_view(),
        }}
    }
}

fn course_card(course: Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    let title = course.title.clone();
    let description = course
        .description
        .clone()
        .unwrap_or_else(|| "No description available".to_string());
    let sale = format!("${:.2}", course.sale_price());
    let list_price = course
        .discount_price
        .is_some()
        .then(|| format!("${:.2}", course.price));
    let students = format!("{} Students", course.total_students);
    let rating = format!("Rating {:.1}", course.rating);
    let status = course.status.to_string();

    view! {
        <div class="card">
            <a href=href><h4>{title}</h4></a>
            <p class="muted">{description}</p>
            <div class="detail-row">
                <span>{sale}</span>
                {list_price.map(|price| view! { <s class="muted">{price}</s> })}
                <span class="badge badge-active">{status}</span>
            </div>
            <div class="detail-row">
                <span class="muted">{students}</span>
                <span class="muted">{rating}</span>
            </div>
        </div>
    }
}

/// Create-course page; a failed submit re-renders with the entered values
/// and the inline message.
#[component]
#[allow(clippy::too_many_lines)]
pub fn CourseNewPage(
    /// Form values to render
    form: CourseForm,
    /// Instructors to choose from: (id, display label)
    instructor_options: Vec<(String, String)>,
    /// Failure loading the instructor choices
    instructor_error: Option<String>,
) -> impl IntoView {
    let error = form.status.error().map(ToString::to_string);
    let submitting = form.status.submitting();
    let title = form.title;
    let subtitle = form.subtitle;
    let description = form.description;
    let category = form.category;
    let sub_category = form.sub_category;
    let language = form.language;
    let level = form.level;
    let duration = form.duration;
    let price = form.price;
    let discount_price = form.discount_price;
    let selected_instructor = form.instructor_id;
    let prerequisites = form.prerequisites.rows().join("\n");
    let learning_outcomes = form.learning_outcomes.rows().join("\n");

    let instructor_field = instructor_error.map_or_else(
        || {
            let options = instructor_options
                .into_iter()
                .map(|(id, label)| {
                    let chosen = id == selected_instructor;
                    view! { <option value=id selected=chosen>{label}</option> }
                })
                .collect::<Vec<_>>();
            view! {
                <select name="instructor_id">
                    <option value="">"Select Instructor"</option>
                    {options}
                </select>
            }
            .into_view()
        },
        |message| view! { <p class="banner banner-error">{message}</p> }.into_view(),
    );

    view! {
        <h1>"Create Course"</h1>
        {error.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
        <form method="post" action="/courses" class="card">
            <div class="form-field">
                <label>"Course Title"</label>
                <input type="text" name="title" value=title placeholder="e.g., React"/>
            </div>
            <div class="form-field">
                <label>"Course Subtitle"</label>
                <input
                    type="text"
                    name="subtitle"
                    value=subtitle
                    placeholder="e.g., Build complex applications with React"
                />
            </div>
            <div class="form-field">
                <label>"Course Description"</label>
                <textarea name="description" rows="4">{description}</textarea>
            </div>
            <div class="form-field">
                <label>"Category"</label>
                <input type="text" name="category" value=category placeholder="e.g., Web Development"/>
            </div>
            <div class="form-field">
                <label>"Subcategory"</label>
                <input type="text" name="sub_category" value=sub_category placeholder="e.g., React"/>
            </div>
            <div class="form-field">
                <label>"Instructor"</label>
                {instructor_field}
            </div>
            <div class="form-field">
                <label>"Language"</label>
                <select name="language">
                    <option value="English" selected={language == "English"}>"English"</option>
                    <option value="Hindi" selected={language == "Hindi"}>"Hindi"</option>
                    <option value="Spanish" selected={language == "Spanish"}>"Spanish"</option>
                </select>
            </div>
            <div class="form-field">
                <label>"Level"</label>
                <select name="level">
                    <option value="" selected={level.is_empty()}>"Select Level"</option>
                    <option value="beginner" selected={level == "beginner"}>"Beginner"</option>
                    <option value="intermediate" selected={level == "intermediate"}>"Intermediate"</option>
                    <option value="advanced" selected={level == "advanced"}>"Advanced"</option>
                </select>
            </div>
            <div class="form-field">
                <label>"Duration (hrs)"</label>
                <input type="number" name="duration" value=duration min="0" step="0.1"/>
            </div>
            <div class="form-field">
                <label>"Price"</label>
                <input type="number" name="price" value=price min="0" step="0.01"/>
            </div>
            <div class="form-field">
                <label>"Discount Price"</label>
                <input type="number" name="discount_price" value=discount_price min="0" step="0.01"/>
            </div>
            <div class="form-field">
                <label>"Prerequisites (one per line)"</label>
                <textarea name="prerequisites" rows="3">{prerequisites}</textarea>
            </div>
            <div class="form-field">
                <label>"Learning Outcomes (one per line)"</label>
                <textarea name="learning_outcomes" rows="3">{learning_outcomes}</textarea>
            </div>
            <a class="btn" href="/courses">"Cancel"</a>
            <button class="btn btn-primary" type="submit" disabled=submitting>"Save"</button>
        </form>
    }
}

/// Saved confirmation shown before the delayed navigation back to the list
#[component]
pub fn CourseSavedPage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="banner banner-success">"Course saved successfully!"</div>
            <p class="muted">"Returning to the course list..."</p>
            <a class="btn" href="/courses">"Back to Courses"</a>
        </div>
    }
}

/// Course editor: details form, status, media uploads, delete
#[component]
#[allow(clippy::too_many_lines)]
pub fn CourseEditorPage(
    /// The course being edited
    course: Course,
    /// Transient action notice: ("success" | "error", message)
    notice: Option<(String, String)>,
) -> impl IntoView {
    let update_action = format!("/courses/{}", course.id);
    let delete_action = format!("/courses/{}/delete", course.id);
    let thumbnail_action = format!("/courses/{}/thumbnail", course.id);
    let promo_action = format!("/courses/{}/promo-video", course.id);
    let title = course.title;
    let subtitle = course.subtitle.unwrap_or_default();
    let description = course.description.unwrap_or_default();
    let category = course.category;
    let sub_category = course.sub_category.unwrap_or_default();
    let level = course.level.map(|level| level.to_string()).unwrap_or_default();
    let status = course.status.to_string();
    let thumbnail = course.thumbnail.unwrap_or_else(|| "No thumbnail".to_string());
    let promo_video = course.promo_video.unwrap_or_else(|| "No promo video".to_string());

    view! {
        <h1>"Course Editor"</h1>
        {notice.map(|(kind, message)| view! { <Banner kind=kind message=message/> })}
        <form method="post" action=update_action class="card">
            <h3>"Details"</h3>
            <div class="form-field">
                <label>"Title"</label>
                <input type="text" name="title" value=title/>
            </div>
            <div class="form-field">
                <label>"Subtitle"</label>
                <input type="text" name="subtitle" value=subtitle/>
            </div>
            <div class="form-field">
                <label>"Description"</label>
                <textarea name="description" rows="4">{description}</textarea>
            </div>
            <div class="form-field">
                <label>"Category"</label>
                <input type="text" name="category" value=category/>
            </div>
            <div class="form-field">
                <label>"Subcategory"</label>
                <input type="text" name="sub_category" value=sub_category/>
            </div>
            <div class="form-field">
                <label>"Level"</label>
                <select name="level">
                    <option value="" selected={level.is_empty()}>"Unset"</option>
                    <option value="beginner" selected={level == "beginner"}>"Beginner"</option>
                    <option value="intermediate" selected={level == "intermediate"}>"Intermediate"</option>
                    <option value="advanced" selected={level == "advanced"}>"Advanced"</option>
                </select>
            </div>
            <div class="form-field">
                <label>"Status"</label>
                <select name="status">
                    <option value="draft" selected={status == "draft"}>"Draft"</option>
                    <option value="published" selected={status == "published"}>"Published"</option>
                    <option value="archived" selected={status == "archived"}>"Archived"</option>
                </select>
            </div>
            <button class="btn btn-primary" type="submit">"Update Course"</button>
        </form>
        <div class="card">
            <h3>"Media"</h3>
            <p class="muted">{thumbnail}</p>
            <form method="post" action=thumbnail_action enctype="multipart/form-data">
                <input type="file" name="thumbnail" accept="image/*"/>
                <button class="btn" type="submit">"Upload Thumbnail"</button>
            </form>
            <p class="muted">{promo_video}</p>
            <form method="post" action=promo_action enctype="multipart/form-data">
                <input type="file" name="promoVideo" accept="video/*"/>
                <button class="btn" type="submit">"Upload Promo Video"</button>
            </form>
        </div>
        <div class="card">
            <h3>"Danger Zone"</h3>
            <form method="post" action=delete_action>
                <button class="btn btn-danger" type="submit">"Delete Course"</button>
            </form>
        </div>
        <a class="btn" href="/courses">"Back to Courses"</a>
    }
}
