//! Support tickets page

use super::list_href;
use crate::components::Banner;
use leptos::*;
use lms_core::types::{Ticket, TicketStatus};

/// Ticket list page with the resolve modal
#[component]
pub fn TicketsPage(
    /// Filtered ticket rows for the current month
    items: Vec<Ticket>,
    /// Backend's total ticket count
    total: u64,
    /// Applied filter query
    query: String,
    /// Fetch failure; terminal for this view until it is reopened
    fetch_error: Option<String>,
    /// Action failure banner (resolve/download)
    banner: Option<String>,
    /// Ticket whose resolve modal is open
    resolving: Option<Ticket>,
) -> impl IntoView {
    let subtitle = format!("{total} tickets this month");
    let close_href = list_href("/tickets", &query, None);
    let search_query = query.clone();
    let has_items = !items.is_empty();

    view! {
        <div class="page-header">
            <h1>"Support Tickets"</h1>
            <span class="muted">{subtitle}</span>
        </div>
        <form method="get" action="/tickets">
            <input
                class="search-input"
                type="text"
                name="q"
                value=search_query
                placeholder="Search by name, category, or status"
            />
        </form>
        {banner.map(|message| view! { <Banner kind="error".to_string() message=message/> })}
        {match fetch_error {
            Some(message) => view! { <Banner kind="error".to_string() message=message/> }.into_view(),
            None if !has_items => view! { <p class="muted">"No tickets found."</p> }.into_view(),
            None => {
                let rows = items
                    .into_iter()
                    .map(|ticket| {
                        let resolve_href = list_href("/tickets", &query, Some(&ticket.id));
                        let download_href = format!("/tickets/{}/download", ticket.id);
                        let name = ticket.user_name();
                        let category = ticket.category.clone();
                        let open = ticket.status == TicketStatus::Open;
                        let status = ticket.status.to_string();
                        let badge = if open { "badge badge-open" } else { "badge badge-resolved" };
                        view! {
                            <tr>
                                <td>{name}</td>
                                <td>{category}</td>
                                <td><span class=badge>{status}</span></td>
                                <td>
                                    {open.then(|| view! {
                                        <a class="btn" href=resolve_href>"Resolve"</a>
                                    })}
                                    <a class="btn" href=download_href>"Download PDF"</a>
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
                                <th>"Category"</th>
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
        {resolving.map(|ticket| resolve_modal(&ticket, close_href))}
    }
}

/// Resolve modal: a resolution message is required by the backend
fn resolve_modal(ticket: &Ticket, close_href: String) -> impl IntoView + use<> {
    let action = format!("/tickets/{}/resolve", ticket.id);
    let title = format!("Resolve ticket from {}", ticket.user_name());

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{title}</h2>
                <form method="post" action=action>
                    <div class="form-field">
                        <label>"Resolution"</label>
                        <textarea
                            name="resolution"
                            rows="4"
                            placeholder="Describe how the ticket was resolved"
                            required=true
                        ></textarea>
                    </div>
                    <a class="btn" href=close_href>"Cancel"</a>
                    <button class="btn btn-primary" type="submit">"Resolve"</button>
                </form>
            </div>
        </div>
    }
}
