//! Reporting pages: revenue and activity
//!
//! Purely presentational over server-aggregated data; changing the
//! timeframe is a new fetch, never a local recompute.

use crate::components::Banner;
use leptos::*;
use lms_core::types::RevenuePoint;

/// One row of the activity tables, already flattened for display
#[derive(Debug, Clone)]
pub struct ActivityRow {
    /// Actor display name
    pub name: String,
    /// Actor email
    pub email: String,
    /// Course title (or a placeholder)
    pub detail: String,
    /// When the activity happened
    pub when: String,
}

/// Revenue report page
#[component]
pub fn RevenuePage(
    /// Selected timeframe ("day" | "month" | "year")
    timeframe: String,
    /// Platform-wide revenue total
    total_revenue: f64,
    /// Server-aggregated buckets
    points: Vec<RevenuePoint>,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
) -> impl IntoView {
    let total = format!("${total_revenue:.2}");
    let selector = ["day", "month", "year"]
        .into_iter()
        .map(|option| {
            let href = format!("/reports/revenue?timeframe={option}");
            let class = if option == timeframe { "btn btn-primary" } else { "btn" };
            view! { <a class=class href=href>{option}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page-header">
            <h1>"Revenue Report"</h1>
            <div>{selector}</div>
        </div>
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None => {
                let rows = points
                    .into_iter()
                    .map(|point| {
                        let period = point.period;
                        let amount = format!("${:.2}", point.amount);
                        view! {
                            <tr>
                                <td>{period}</td>
                                <td>{amount}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>();
                view! {
                    <div class="card">
                        <p class="muted">"Total Revenue"</p>
                        <p class="stat-value">{total}</p>
                    </div>
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Period"</th>
                                <th>"Amount"</th>
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

/// Combined recent-activity page
#[component]
pub fn ActivityPage(
    /// Recent instructor activity, newest first
    instructors: Vec<ActivityRow>,
    /// Recent student activity, newest first
    students: Vec<ActivityRow>,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
) -> impl IntoView {
    view! {
        <h1>"Track Activities"</h1>
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None => view! {
                <div class="card">
                    <h3>"Instructor Activity"</h3>
                    <ActivityTable rows=instructors detail_heading="Course".to_string()/>
                </div>
                <div class="card">
                    <h3>"Student Activity"</h3>
                    <ActivityTable rows=students detail_heading="Assignment".to_string()/>
                </div>
            }
            .into_view(),
        }}
    }
}

/// Shared activity table
#[component]
fn ActivityTable(rows: Vec<ActivityRow>, detail_heading: String) -> impl IntoView {
    let body = rows
        .into_iter()
        .map(|row| {
            let name = row.name;
            let email = row.email;
            let detail = row.detail;
            let when = row.when;
            view! {
                <tr>
                    <td>{name}</td>
                    <td>{email}</td>
                    <td>{detail}</td>
                    <td>{when}</td>
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
                    <th>{detail_heading}</th>
                    <th>"When"</th>
                </tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
