//! Dashboard page: headline numbers plus the newest accounts

use super::or_na;
use crate::components::StatusBadge;
use leptos::*;
use lms_core::types::{Instructor, Student};

/// Dashboard page component
#[component]
pub fn DashboardPage(
    /// Platform-wide revenue total
    total_revenue: f64,
    /// Platform-wide enrollment total
    total_enrollments: u64,
    /// Six newest instructors
    instructors: Vec<Instructor>,
    /// Six newest students
    students: Vec<Student>,
) -> impl IntoView {
    let revenue = format!("${total_revenue:.2}");
    let enrollments = total_enrollments.to_string();

    view! {
        <h1>"Dashboard"</h1>
        <div class="card-grid">
            <div class="card">
                <p class="muted">"Total Revenue"</p>
                <p class="stat-value">{revenue}</p>
                <a href="/reports/revenue">"Revenue Report"</a>
            </div>
            <div class="card">
                <p class="muted">"Total Enrollments"</p>
                <p class="stat-value">{enrollments}</p>
                <a href="/enrollments">"All Enrollments"</a>
            </div>
        </div>
        <div class="card-grid">
            <div class="card">
                <h3>"Instructors"</h3>
                {instructors
                    .into_iter()
                    .map(|instructor| {
                        let name = instructor.full_name();
                        let email = instructor.email;
                        let active = instructor.is_active;
                        view! {
                            <div class="detail-row">
                                <span>{name}</span>
                                <span class="muted">{email}</span>
                                <StatusBadge active=active/>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a class="btn" href="/instructors">"Manage Instructors"</a>
            </div>
            <div class="card">
                <h3>"Students"</h3>
                {students
                    .into_iter()
                    .map(|student| {
                        let name = student.full_name();
                        let email = student.email;
                        let occupation = or_na(student.occupation);
                        view! {
                            <div class="detail-row">
                                <span>{name}</span>
                                <span class="muted">{email}</span>
                                <span class="muted">{occupation}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a class="btn" href="/students">"Manage Students"</a>
            </div>
        </div>
    }
}
