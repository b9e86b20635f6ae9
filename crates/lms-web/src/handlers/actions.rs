//! Action handlers: form submissions that mutate backend state
//!
//! Every mutation follows write-then-reflect: the backend answers first, and
//! only then does local/rendered state change (usually via a redirect back
//! to the list, which re-reads the server's truth).

use super::{
    Outcome, classify, login_redirect, redirect_with, shell_page, shell_page_with_refresh,
    token_or_login,
};
use crate::pages::courses::{CourseNewPage, CourseSavedPage};
use crate::pages::instructors::InstructorsPage;
use crate::pages::login::LoginPage;
use crate::pages::students::StudentsPage;
use crate::render;
use crate::state::AppState;
use axum::extract::{Multipart, Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use leptos::view;
use lms_core::types::{CourseLevel, CourseStatus, CourseUpdate, ProfileUpdate};
use lms_core::utils::split_csv;
use lms_state::form::{CourseForm, InstructorForm, RowField, StudentForm, friendly_error};
use lms_state::storage::{Theme, store_theme};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Login form body
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Sign in. Failure re-renders the login view with the outcome's message;
/// the session store never throws.
pub async fn login(
    State(state): State<Arc<AppState>>,
    axum::Form(body): axum::Form<LoginBody>,
) -> Response {
    let outcome = state.session.login(&body.email, &body.password).await;
    if outcome.success {
        return Redirect::to("/").into_response();
    }

    let email = body.email;
    render::page("Login", move || {
        view! { <LoginPage error=outcome.message email=email/> }
    })
    .into_response()
}

/// Sign out: local-only, idempotent.
pub async fn logout(State(state): State<Arc<AppState>>) -> Response {
    state.session.logout();
    Redirect::to("/login").into_response()
}

/// Enroll-instructor form body
#[derive(Debug, Deserialize)]
pub struct InstructorBody {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Password
    #[serde(default)]
    pub password: String,
    /// Phone
    #[serde(default)]
    pub phone: String,
    /// Avatar URL
    #[serde(default)]
    pub avatar: String,
    /// Comma-separated expertise
    #[serde(default)]
    pub expertise: String,
    /// Biography
    #[serde(default)]
    pub bio: String,
    /// LinkedIn URL
    #[serde(default)]
    pub linkedin: String,
    /// Twitter URL
    #[serde(default)]
    pub twitter: String,
    /// "true" or "false"
    #[serde(default)]
    pub is_active: String,
}

impl InstructorBody {
    fn into_form(self) -> InstructorForm {
        InstructorForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone: self.phone,
            avatar: self.avatar,
            expertise: RowField::from_rows(split_csv(&self.expertise)),
            bio: self.bio,
            linkedin: self.linkedin,
            twitter: self.twitter,
            is_active: self.is_active != "false",
            status: lms_state::form::FormStatus::default(),
        }
    }
}

/// Create an instructor account.
///
/// A validation failure never reaches the network: the modal re-renders
/// with the entered values and the inline message.
pub async fn create_instructor(
    State(state): State<Arc<AppState>>,
    axum::Form(body): axum::Form<InstructorBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut form = body.into_form();
    form.status.begin_submit();
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(message) => {
            form.status.fail(message);
            return instructor_modal_page(&state, form);
        }
    };

    match state.client.create_instructor(&token, &payload).await {
        Ok(created) => {
            info!("enrolled instructor {}", created.id);
            form.status.succeed();
            Redirect::to("/instructors").into_response()
        }
        Err(err) if err.is_unauthorized() => {
            state.session.invalidate();
            login_redirect()
        }
        Err(err) => {
            form.status.fail(friendly_error(&err));
            instructor_modal_page(&state, form)
        }
    }
}

fn instructor_modal_page(state: &AppState, form: InstructorForm) -> Response {
    shell_page(state, "Manage Instructors", "/instructors", move || {
        view! {
            <InstructorsPage
                items=Vec::new()
                query=String::new()
                fetch_error=None
                banner=None
                selected=None
                form=Some(form)
            />
        }
    })
}

/// Enroll-student form body
#[derive(Debug, Deserialize)]
pub struct StudentBody {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Password
    #[serde(default)]
    pub password: String,
    /// Phone
    #[serde(default)]
    pub phone: String,
    /// Education
    #[serde(default)]
    pub education: String,
    /// Occupation
    #[serde(default)]
    pub occupation: String,
    /// Comma-separated skills
    #[serde(default)]
    pub skills: String,
    /// Comma-separated interests
    #[serde(default)]
    pub interests: String,
    /// "true" or "false"
    #[serde(default)]
    pub is_active: String,
}

impl StudentBody {
    fn into_form(self) -> StudentForm {
        StudentForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            password: self.password,
            phone: self.phone,
            education: self.education,
            occupation: self.occupation,
            skills: RowField::from_rows(split_csv(&self.skills)),
            interests: RowField::from_rows(split_csv(&self.interests)),
            is_active: self.is_active != "false",
            status: lms_state::form::FormStatus::default(),
        }
    }
}

/// Create a student account (same contract as instructors).
pub async fn create_student(
    State(state): State<Arc<AppState>>,
    axum::Form(body): axum::Form<StudentBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut form = body.into_form();
    form.status.begin_submit();
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(message) => {
            form.status.fail(message);
            return student_modal_page(&state, form);
        }
    };

    match state.client.create_student(&token, &payload).await {
        Ok(created) => {
            info!("enrolled student {}", created.id);
            form.status.succeed();
            Redirect::to("/students").into_response()
        }
        Err(err) if err.is_unauthorized() => {
            state.session.invalidate();
            login_redirect()
        }
        Err(err) => {
            form.status.fail(friendly_error(&err));
            student_modal_page(&state, form)
        }
    }
}

fn student_modal_page(state: &AppState, form: StudentForm) -> Response {
    shell_page(state, "Manage Students", "/students", move || {
        view! {
            <StudentsPage
                items=Vec::new()
                query=String::new()
                fetch_error=None
                banner=None
                selected=None
                form=Some(form)
            />
        }
    })
}

/// Toggle form body
#[derive(Debug, Deserialize)]
pub struct ToggleBody {
    /// Requested new active flag ("true"/"false")
    pub active: String,
    /// Filter query to restore after the redirect
    #[serde(default)]
    pub q: String,
}

/// Flip an instructor's active flag.
pub async fn toggle_instructor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    axum::Form(body): axum::Form<ToggleBody>,
) -> Response {
    toggle_account(&state, &id, &body, UserKind::Instructor).await
}

/// Flip a student's active flag.
pub async fn toggle_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    axum::Form(body): axum::Form<ToggleBody>,
) -> Response {
    toggle_account(&state, &id, &body, UserKind::Student).await
}

enum UserKind {
    Instructor,
    Student,
}

impl UserKind {
    const fn base(&self) -> &'static str {
        match self {
            Self::Instructor => "/instructors",
            Self::Student => "/students",
        }
    }
}

/// Shared toggle flow. The server's confirmed value is what the redirected
/// list re-reads; on failure nothing is mutated and the error rides along
/// as the banner.
async fn toggle_account(
    state: &AppState,
    id: &str,
    body: &ToggleBody,
    kind: UserKind,
) -> Response {
    let token = match token_or_login(state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let requested = body.active == "true";
    let result = match kind {
        UserKind::Instructor => {
            state
                .client
                .toggle_instructor_active(&token, id, requested)
                .await
        }
        UserKind::Student => {
            state
                .client
                .toggle_student_active(&token, id, requested)
                .await
        }
    };

    match classify(result, &state.session) {
        Outcome::Ok(confirmed) => {
            info!("toggled {id} to {confirmed}");
            redirect_with(kind.base(), &[("q", &body.q)])
        }
        Outcome::Err(message) => {
            let banner = format!("Error toggling status: {message}");
            redirect_with(kind.base(), &[("q", &body.q), ("error", &banner)])
        }
        Outcome::SignedOut => login_redirect(),
    }
}

/// Create-course form body
#[derive(Debug, Deserialize)]
pub struct CourseBody {
    /// Title
    #[serde(default)]
    pub title: String,
    /// Subtitle
    #[serde(default)]
    pub subtitle: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Category
    #[serde(default)]
    pub category: String,
    /// Subcategory
    #[serde(default)]
    pub sub_category: String,
    /// Language
    #[serde(default)]
    pub language: String,
    /// Instructor identifier
    #[serde(default)]
    pub instructor_id: String,
    /// Level
    #[serde(default)]
    pub level: String,
    /// Duration (hours)
    #[serde(default)]
    pub duration: String,
    /// Price
    #[serde(default)]
    pub price: String,
    /// Discount price
    #[serde(default)]
    pub discount_price: String,
    /// Prerequisites, one per line
    #[serde(default)]
    pub prerequisites: String,
    /// Learning outcomes, one per line
    #[serde(default)]
    pub learning_outcomes: String,
}

impl CourseBody {
    fn into_form(self) -> CourseForm {
        CourseForm {
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            category: self.category,
            sub_category: self.sub_category,
            language: self.language,
            instructor_id: self.instructor_id,
            level: self.level,
            duration: self.duration,
            price: self.price,
            discount_price: self.discount_price,
            prerequisites: rows_from_lines(&self.prerequisites),
            learning_outcomes: rows_from_lines(&self.learning_outcomes),
            status: lms_state::form::FormStatus::default(),
        }
    }
}

/// Rebuild a row field from a one-entry-per-line textarea, through the same
/// append/edit path the interactive reducer uses.
fn rows_from_lines(text: &str) -> RowField {
    let mut rows = RowField::new();
    for (index, line) in text.lines().enumerate() {
        rows.add_row();
        rows.set_row(index, line);
    }
    rows
}

/// Create a course. Success renders a confirmation that navigates back to
/// the course list after a short delay.
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    axum::Form(body): axum::Form<CourseBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut form = body.into_form();
    form.status.begin_submit();
    let payload = match form.validate() {
        Ok(payload) => payload,
        Err(message) => {
            form.status.fail(message);
            return course_form_page(&state, form);
        }
    };

    let result = state.client.create_course(&token, &payload).await;
    match result {
        Ok(created) => {
            info!("created course {}", created.id);
            form.status.succeed();
            shell_page_with_refresh(&state, "Course Saved", "/courses", "/courses", 2, || {
                view! { <CourseSavedPage/> }
            })
        }
        Err(err) if err.is_unauthorized() => {
            state.session.invalidate();
            login_redirect()
        }
        Err(err) => {
            form.status.fail(friendly_error(&err));
            course_form_page(&state, form)
        }
    }
}

fn course_form_page(state: &AppState, form: CourseForm) -> Response {
    shell_page(state, "Create Course", "/courses", move || {
        view! {
            <CourseNewPage form=form instructor_options=Vec::new() instructor_error=None/>
        }
    })
}

/// Course-update form body
#[derive(Debug, Deserialize)]
pub struct CourseUpdateBody {
    /// Title
    #[serde(default)]
    pub title: String,
    /// Subtitle
    #[serde(default)]
    pub subtitle: String,
    /// Description
    #[serde(default)]
    pub description: String,
    /// Category
    #[serde(default)]
    pub category: String,
    /// Subcategory
    #[serde(default)]
    pub sub_category: String,
    /// Level
    #[serde(default)]
    pub level: String,
    /// Publication status
    #[serde(default)]
    pub status: String,
}

/// Update a course's details.
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    axum::Form(body): axum::Form<CourseUpdateBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let editor = format!("/courses/{id}");
    if body.title.trim().is_empty() {
        return redirect_with(&editor, &[("notice", "Course title is required."), ("kind", "error")]);
    }

    let level = match body.level.as_str() {
        "beginner" => Some(CourseLevel::Beginner),
        "intermediate" => Some(CourseLevel::Intermediate),
        "advanced" => Some(CourseLevel::Advanced),
        _ => None,
    };
    let status = match body.status.as_str() {
        "published" => Some(CourseStatus::Published),
        "archived" => Some(CourseStatus::Archived),
        "draft" => Some(CourseStatus::Draft),
        _ => None,
    };
    let update = CourseUpdate {
        title: Some(body.title),
        subtitle: Some(body.subtitle),
        description: Some(body.description),
        category: Some(body.category),
        sub_category: Some(body.sub_category),
        level,
        status,
    };

    match classify(
        state.client.update_course(&token, &id, &update).await,
        &state.session,
    ) {
        Outcome::Ok(_) => redirect_with(
            &editor,
            &[("notice", "Course details updated successfully!"), ("kind", "success")],
        ),
        Outcome::Err(_) => redirect_with(
            &editor,
            &[("notice", "Failed to update course details."), ("kind", "error")],
        ),
        Outcome::SignedOut => login_redirect(),
    }
}

/// Delete a course, then leave its (now dangling) editor for the list.
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    match classify(state.client.delete_course(&token, &id).await, &state.session) {
        Outcome::Ok(()) => {
            info!("deleted course {id}");
            Redirect::to("/courses").into_response()
        }
        Outcome::Err(_) => redirect_with(
            &format!("/courses/{id}"),
            &[("notice", "Failed to delete course."), ("kind", "error")],
        ),
        Outcome::SignedOut => login_redirect(),
    }
}

/// Upload a course thumbnail (multipart field `thumbnail`).
pub async fn upload_thumbnail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    upload_media(&state, &id, multipart, MediaKind::Thumbnail).await
}

/// Upload a course promo video (multipart field `promoVideo`).
pub async fn upload_promo_video(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Response {
    upload_media(&state, &id, multipart, MediaKind::PromoVideo).await
}

enum MediaKind {
    Thumbnail,
    PromoVideo,
}

impl MediaKind {
    const fn field(&self) -> &'static str {
        match self {
            Self::Thumbnail => "thumbnail",
            Self::PromoVideo => "promoVideo",
        }
    }

    const fn missing_message(&self) -> &'static str {
        match self {
            Self::Thumbnail => "Please select a thumbnail file.",
            Self::PromoVideo => "Please select a promo video file.",
        }
    }

    const fn failed_message(&self) -> &'static str {
        match self {
            Self::Thumbnail => "Failed to upload thumbnail.",
            Self::PromoVideo => "Failed to upload promo video.",
        }
    }

    const fn success_message(&self) -> &'static str {
        match self {
            Self::Thumbnail => "Thumbnail uploaded successfully!",
            Self::PromoVideo => "Promo video uploaded successfully!",
        }
    }
}

async fn upload_media(
    state: &AppState,
    id: &str,
    mut multipart: Multipart,
    kind: MediaKind,
) -> Response {
    let token = match token_or_login(state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };
    let editor = format!("/courses/{id}");

    let mut file: Option<(String, String, Vec<u8>)> = None;
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some(kind.field()) {
            let file_name = field
                .file_name()
                .unwrap_or("upload.bin")
                .to_string();
            let content_type = field
                .content_type()
                .unwrap_or("application/octet-stream")
                .to_string();
            if let Ok(data) = field.bytes().await {
                if !data.is_empty() {
                    file = Some((file_name, content_type, data.to_vec()));
                }
            }
            break;
        }
    }

    let Some((file_name, content_type, data)) = file else {
        return redirect_with(&editor, &[("notice", kind.missing_message()), ("kind", "error")]);
    };

    let result = match kind {
        MediaKind::Thumbnail => {
            state
                .client
                .upload_course_thumbnail(&token, id, &file_name, &content_type, data)
                .await
        }
        MediaKind::PromoVideo => {
            state
                .client
                .upload_course_promo_video(&token, id, &file_name, &content_type, data)
                .await
        }
    };

    match classify(result, &state.session) {
        Outcome::Ok(()) => {
            redirect_with(&editor, &[("notice", kind.success_message()), ("kind", "success")])
        }
        Outcome::Err(_) => {
            redirect_with(&editor, &[("notice", kind.failed_message()), ("kind", "error")])
        }
        Outcome::SignedOut => login_redirect(),
    }
}

/// Resolve-ticket form body
#[derive(Debug, Deserialize)]
pub struct ResolveBody {
    /// Resolution message
    #[serde(default)]
    pub resolution: String,
}

/// Resolve a support ticket with a resolution message.
pub async fn resolve_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    axum::Form(body): axum::Form<ResolveBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    match classify(
        state.client.resolve_ticket(&token, &id, &body.resolution).await,
        &state.session,
    ) {
        Outcome::Ok(()) => {
            info!("resolved ticket {id}");
            Redirect::to("/tickets").into_response()
        }
        Outcome::Err(_) => redirect_with(
            "/tickets",
            &[("error", "Failed to resolve ticket. Please try again later.")],
        ),
        Outcome::SignedOut => login_redirect(),
    }
}

/// Profile-update form body
#[derive(Debug, Deserialize)]
pub struct ProfileBody {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email
    #[serde(default)]
    pub email: String,
    /// Phone
    #[serde(default)]
    pub phone: String,
    /// Avatar URL
    #[serde(default)]
    pub avatar: String,
}

/// Update the logged-in admin's own profile.
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    axum::Form(body): axum::Form<ProfileBody>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let update = ProfileUpdate {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
        phone: (!body.phone.trim().is_empty()).then(|| body.phone.trim().to_string()),
        avatar: (!body.avatar.trim().is_empty()).then(|| body.avatar.trim().to_string()),
    };

    match classify(
        state.client.update_profile(&token, &update).await,
        &state.session,
    ) {
        Outcome::Ok(_) => redirect_with(
            "/settings",
            &[("notice", "Profile updated successfully!"), ("kind", "success")],
        ),
        Outcome::Err(message) => {
            let notice = format!("Error: {message}");
            redirect_with("/settings", &[("notice", &notice), ("kind", "error")])
        }
        Outcome::SignedOut => login_redirect(),
    }
}

/// Theme form body
#[derive(Debug, Deserialize)]
pub struct ThemeBody {
    /// "light" or "dark"
    #[serde(default)]
    pub theme: String,
}

/// Persist the theme preference and bounce back to the referring page.
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    axum::Form(body): axum::Form<ThemeBody>,
) -> Response {
    let theme = Theme::parse(Some(&body.theme));
    store_theme(state.prefs.as_ref(), theme);

    let back = headers
        .get(axum::http::header::REFERER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("/");
    Redirect::to(back).into_response()
}
