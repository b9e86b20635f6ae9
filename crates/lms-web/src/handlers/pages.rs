//! Page handlers: fetch through the client, drive the controllers, render
//!
//! Each handler walks a fresh controller through the mounted-page
//! lifecycle (begin the fetch, resolve it, apply filter and selection) and
//! renders from whatever state the controller landed in.

use super::{Outcome, classify, login_redirect, shell_page, token_or_login};
use crate::pages::courses::{CourseEditorPage, CourseNewPage, CoursesPage, InstructorShelf};
use crate::pages::reports::{ActivityPage, ActivityRow, RevenuePage};
use crate::pages::{
    contacts::ContactsPage, dashboard::DashboardPage, enrollments::EnrollmentsPage, format_time,
    instructors::InstructorsPage, login::LoginPage, not_found::NotFound, settings::SettingsPage,
    students::StudentsPage, tickets::TicketsPage,
};
use crate::render;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use chrono::{Datelike, Utc};
use leptos::view;
use lms_core::types::{RevenueReport, Ticket, Timeframe, UserProfile};
use lms_state::ResourceListController;
use lms_state::form::{CourseForm, InstructorForm, StudentForm};
use lms_state::list::{FILTER_DEBOUNCE, ListState};
use lms_state::reports::{ReportController, ReportState};
use serde::Deserialize;
use std::sync::Arc;
use std::time::Instant;

/// Query parameters shared by the list pages
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Filter text
    #[serde(default)]
    pub q: Option<String>,
    /// Identifier of the entity whose detail/resolve modal is open
    #[serde(default)]
    pub selected: Option<String>,
    /// Which modal to open ("enroll")
    #[serde(default)]
    pub modal: Option<String>,
    /// Action error carried through a redirect
    #[serde(default)]
    pub error: Option<String>,
}

/// Query parameters of the revenue report
#[derive(Debug, Default, Deserialize)]
pub struct RevenueQuery {
    /// Aggregation granularity
    #[serde(default)]
    pub timeframe: Option<String>,
}

/// Transient notice carried through a redirect
#[derive(Debug, Default, Deserialize)]
pub struct NoticeQuery {
    /// Message text
    #[serde(default)]
    pub notice: Option<String>,
    /// "success" or "error"
    #[serde(default)]
    pub kind: Option<String>,
}

impl NoticeQuery {
    fn into_pair(self) -> Option<(String, String)> {
        self.notice
            .map(|notice| (self.kind.unwrap_or_else(|| "error".to_string()), notice))
    }
}

/// Login page; an authenticated admin is sent straight to the dashboard.
pub async fn login(State(state): State<Arc<AppState>>) -> Response {
    if state.session.snapshot().authenticated {
        return Redirect::to("/").into_response();
    }
    render::page("Login", || view! { <LoginPage error=None email=String::new()/> })
        .into_response()
}

/// Dashboard: headline numbers plus the six newest accounts.
pub async fn dashboard(State(state): State<Arc<AppState>>) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let instructors = classify(
        state.client.list_instructors(&token, Some(6)).await,
        &state.session,
    );
    let students = classify(
        state.client.list_students(&token, Some(6)).await,
        &state.session,
    );
    let revenue = classify(
        state.client.revenue(&token, Timeframe::Day).await,
        &state.session,
    );
    let enrollments = classify(state.client.total_enrollments(&token).await, &state.session);

    match (instructors, students, revenue, enrollments) {
        (Outcome::SignedOut, ..)
        | (_, Outcome::SignedOut, ..)
        | (_, _, Outcome::SignedOut, _)
        | (_, _, _, Outcome::SignedOut) => login_redirect(),
        (
            Outcome::Ok(instructors),
            Outcome::Ok(students),
            Outcome::Ok(revenue),
            Outcome::Ok(enrollments),
        ) => shell_page(&state, "Dashboard", "/", move || {
            view! {
                <DashboardPage
                    total_revenue=revenue.total_revenue
                    total_enrollments=enrollments.total_enrollments
                    instructors=instructors
                    students=students
                />
            }
        }),
        _ => shell_page(&state, "Dashboard", "/", || {
            view! {
                <div class="banner banner-error">"Something went wrong fetching data."</div>
            }
        }),
    }
}

/// Manage-instructors page.
pub async fn instructors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut controller = ResourceListController::new();
    let ticket = controller.begin_fetch();
    match classify(
        state.client.list_instructors(&token, None).await,
        &state.session,
    ) {
        Outcome::Ok(items) => controller.resolve_ok(ticket, items),
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    let filter = query.q.unwrap_or_default();
    controller.set_query(filter.clone());
    if let Some(id) = &query.selected {
        controller.select(id);
    }

    let items = controller.filtered().into_iter().cloned().collect::<Vec<_>>();
    let selected = controller.selected().cloned();
    let fetch_error = match controller.state() {
        ListState::Errored(message) => Some(message.clone()),
        _ => None,
    };
    let form = (query.modal.as_deref() == Some("enroll")).then(|| InstructorForm {
        is_active: true,
        ..InstructorForm::default()
    });

    shell_page(&state, "Manage Instructors", "/instructors", move || {
        view! {
            <InstructorsPage
                items=items
                query=filter
                fetch_error=fetch_error
                banner=query.error
                selected=selected
                form=form
            />
        }
    })
}

/// Manage-students page.
pub async fn students(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut controller = ResourceListController::new();
    let ticket = controller.begin_fetch();
    match classify(
        state.client.list_students(&token, None).await,
        &state.session,
    ) {
        Outcome::Ok(items) => controller.resolve_ok(ticket, items),
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    let filter = query.q.unwrap_or_default();
    controller.set_query(filter.clone());
    if let Some(id) = &query.selected {
        controller.select(id);
    }

    let items = controller.filtered().into_iter().cloned().collect::<Vec<_>>();
    let selected = controller.selected().cloned();
    let fetch_error = match controller.state() {
        ListState::Errored(message) => Some(message.clone()),
        _ => None,
    };
    let form = (query.modal.as_deref() == Some("enroll")).then(|| StudentForm {
        is_active: true,
        ..StudentForm::default()
    });

    shell_page(&state, "Manage Students", "/students", move || {
        view! {
            <StudentsPage
                items=items
                query=filter
                fetch_error=fetch_error
                banner=query.error
                selected=selected
                form=form
            />
        }
    })
}

/// Course catalog grouped by instructor.
pub async fn courses(State(state): State<Arc<AppState>>) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let instructors = match classify(
        state.client.list_instructors(&token, None).await,
        &state.session,
    ) {
        Outcome::Ok(instructors) => instructors,
        Outcome::Err(message) => {
            return shell_page(&state, "Manage Courses", "/courses", move || {
                view! { <CoursesPage shelves=Vec::new() fetch_error=Some(message)/> }
            });
        }
        Outcome::SignedOut => return login_redirect(),
    };

    let mut shelves = Vec::with_capacity(instructors.len());
    for instructor in instructors {
        match classify(
            state.client.instructor_courses(&token, &instructor.id).await,
            &state.session,
        ) {
            Outcome::Ok(courses) => shelves.push(InstructorShelf {
                instructor: instructor.full_name(),
                courses,
            }),
            // One instructor's shelf failing should not blank the catalog
            Outcome::Err(_) => shelves.push(InstructorShelf {
                instructor: instructor.full_name(),
                courses: Vec::new(),
            }),
            Outcome::SignedOut => return login_redirect(),
        }
    }

    shell_page(&state, "Manage Courses", "/courses", move || {
        view! { <CoursesPage shelves=shelves fetch_error=None/> }
    })
}

/// Create-course page.
pub async fn course_new(State(state): State<Arc<AppState>>) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let (options, instructor_error) = match classify(
        state.client.list_instructors(&token, None).await,
        &state.session,
    ) {
        Outcome::Ok(instructors) => (instructor_options_from(instructors), None),
        Outcome::Err(_) => (
            Vec::new(),
            Some("Failed to fetch instructors. Please try again.".to_string()),
        ),
        Outcome::SignedOut => return login_redirect(),
    };

    let form = CourseForm {
        language: "English".to_string(),
        ..CourseForm::default()
    };

    shell_page(&state, "Create Course", "/courses", move || {
        view! {
            <CourseNewPage form=form instructor_options=options instructor_error=instructor_error/>
        }
    })
}

/// Course editor page.
pub async fn course_editor(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(notice): Query<NoticeQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    match classify(state.client.get_course(&token, &id).await, &state.session) {
        Outcome::Ok(course) => {
            let pair = notice.into_pair();
            shell_page(&state, "Course Editor", "/courses", move || {
                view! { <CourseEditorPage course=course notice=pair/> }
            })
        }
        Outcome::Err(message) => shell_page(&state, "Course Editor", "/courses", move || {
            view! { <div class="banner banner-error">{message}</div> }
        }),
        Outcome::SignedOut => login_redirect(),
    }
}

/// All-enrollments page (the one debounced list).
pub async fn enrollments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut controller = ResourceListController::debounced(FILTER_DEBOUNCE);
    let ticket = controller.begin_fetch();
    match classify(state.client.enrollments(&token).await, &state.session) {
        Outcome::Ok(items) => controller.resolve_ok(ticket, items),
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    // A submitted query has, by definition, already been idle for the
    // debounce interval.
    let filter = query.q.unwrap_or_default();
    let now = Instant::now();
    controller.set_query_at(filter.clone(), now - FILTER_DEBOUNCE);
    controller.flush_query(now);

    let items = controller.filtered().into_iter().cloned().collect::<Vec<_>>();
    let fetch_error = match controller.state() {
        ListState::Errored(message) => Some(message.clone()),
        _ => None,
    };

    shell_page(&state, "All Enrollments", "/enrollments", move || {
        view! { <EnrollmentsPage items=items query=filter fetch_error=fetch_error/> }
    })
}

/// Support tickets for the current month.
pub async fn tickets(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let today = Utc::now().date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let mut controller: ResourceListController<Ticket> = ResourceListController::new();
    let ticket = controller.begin_fetch();
    let mut total = 0;
    match classify(
        state
            .client
            .list_tickets(&token, Some((month_start, today)))
            .await,
        &state.session,
    ) {
        Outcome::Ok(page) => {
            total = page.total;
            controller.resolve_ok(ticket, page.tickets);
        }
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    let filter = query.q.unwrap_or_default();
    controller.set_query(filter.clone());
    if let Some(id) = &query.selected {
        controller.select(id);
    }

    let items = controller.filtered().into_iter().cloned().collect::<Vec<_>>();
    let resolving = controller.selected().cloned();
    let fetch_error = match controller.state() {
        ListState::Errored(message) => Some(message.clone()),
        _ => None,
    };

    shell_page(&state, "Support Tickets", "/tickets", move || {
        view! {
            <TicketsPage
                items=items
                total=total
                query=filter
                fetch_error=fetch_error
                banner=query.error
                resolving=resolving
            />
        }
    })
}

/// Contact-form submissions.
pub async fn contacts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let mut controller = ResourceListController::new();
    let ticket = controller.begin_fetch();
    match classify(state.client.contacts(&token).await, &state.session) {
        Outcome::Ok(items) => controller.resolve_ok(ticket, items),
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    let filter = query.q.unwrap_or_default();
    controller.set_query(filter.clone());

    let items = controller.filtered().into_iter().cloned().collect::<Vec<_>>();
    let fetch_error = match controller.state() {
        ListState::Errored(message) => Some(message.clone()),
        _ => None,
    };

    shell_page(&state, "Contact Submissions", "/contacts", move || {
        view! { <ContactsPage items=items query=filter fetch_error=fetch_error/> }
    })
}

/// Revenue report; the timeframe selector triggers a new fetch.
pub async fn revenue(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RevenueQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let timeframe = query
        .timeframe
        .as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(Timeframe::Day);

    let mut controller: ReportController<RevenueReport> = ReportController::new();
    let ticket = controller.set_timeframe(timeframe);
    match classify(state.client.revenue(&token, timeframe).await, &state.session) {
        Outcome::Ok(report) => controller.resolve_ok(ticket, report),
        Outcome::Err(message) => controller.resolve_err(ticket, message),
        Outcome::SignedOut => return login_redirect(),
    }

    let selected = controller.timeframe().as_str().to_string();
    let (total, points, fetch_error) = match controller.state() {
        ReportState::Loaded(report) => (report.total_revenue, report.breakdown.clone(), None),
        ReportState::Errored(message) => (0.0, Vec::new(), Some(message.clone())),
        ReportState::Idle | ReportState::Loading => (0.0, Vec::new(), None),
    };

    shell_page(&state, "Revenue Report", "/reports/revenue", move || {
        view! {
            <RevenuePage
                timeframe=selected
                total_revenue=total
                points=points
                fetch_error=fetch_error
            />
        }
    })
}

/// Combined instructor/student activity page.
pub async fn activity(State(state): State<Arc<AppState>>) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let instructors = match classify(
        state.client.instructor_activity(&token, 5).await,
        &state.session,
    ) {
        Outcome::Ok(entries) => entries,
        Outcome::Err(message) => return activity_error(&state, message),
        Outcome::SignedOut => return login_redirect(),
    };
    let students = match classify(
        state.client.student_activity(&token, 5).await,
        &state.session,
    ) {
        Outcome::Ok(entries) => entries,
        Outcome::Err(message) => return activity_error(&state, message),
        Outcome::SignedOut => return login_redirect(),
    };

    let instructor_rows = instructors
        .into_iter()
        .map(|entry| ActivityRow {
            name: entry.instructor.full_name(),
            email: entry.instructor.email.unwrap_or_default(),
            detail: entry.title,
            when: format_time(entry.created_at),
        })
        .collect::<Vec<_>>();
    let student_rows = students
        .into_iter()
        .map(|entry| ActivityRow {
            name: entry.student.full_name(),
            email: entry.student.email.unwrap_or_default(),
            detail: entry
                .course
                .map_or_else(|| "No Course Assigned".to_string(), |course| course.title),
            when: format_time(entry.created_at),
        })
        .collect::<Vec<_>>();

    shell_page(&state, "Track Activities", "/activity", move || {
        view! {
            <ActivityPage instructors=instructor_rows students=student_rows fetch_error=None/>
        }
    })
}

fn activity_error(state: &AppState, message: String) -> Response {
    shell_page(state, "Track Activities", "/activity", move || {
        view! { <ActivityPage instructors=Vec::new() students=Vec::new() fetch_error=Some(message)/> }
    })
}

/// Settings page: a fresh profile fetch plus the theme control.
pub async fn settings(
    State(state): State<Arc<AppState>>,
    Query(notice): Query<NoticeQuery>,
) -> Response {
    let token = match token_or_login(&state) {
        Ok(token) => token,
        Err(redirect) => return redirect,
    };

    let profile: UserProfile = match classify(state.client.me(&token).await, &state.session) {
        Outcome::Ok(profile) => profile,
        Outcome::Err(message) => {
            return shell_page(&state, "Settings", "/settings", move || {
                view! { <div class="banner banner-error">{message}</div> }
            });
        }
        Outcome::SignedOut => return login_redirect(),
    };

    let theme = state.theme().as_str().to_string();
    let status = notice.into_pair();
    shell_page(&state, "Settings", "/settings", move || {
        view! { <SettingsPage profile=profile status=status theme=theme/> }
    })
}

/// Fallback 404 page.
pub async fn not_found() -> Response {
    (
        axum::http::StatusCode::NOT_FOUND,
        render::page("Not Found", || view! { <NotFound/> }),
    )
        .into_response()
}

/// Build the instructor `<select>` options: "First Last (id)".
pub(crate) fn instructor_options_from(
    instructors: Vec<lms_core::types::Instructor>,
) -> Vec<(String, String)> {
    instructors
        .into_iter()
        .map(|instructor| {
            let label = format!("{} ({})", instructor.full_name(), instructor.id);
            (instructor.id, label)
        })
        .collect()
}
