//! The resource list controller: fetch, filter, detail selection, toggles
//!
//! Every management page (instructors, students, enrollments, tickets,
//! contacts) instantiates this controller over its entity type. The state
//! machine is `Idle → Loading → {Loaded, Errored}`; `Loaded` only re-enters
//! `Loading` through an explicit new fetch. Responses carry the fetch ticket
//! they answer, so a superseded fetch's response is discarded instead of
//! clobbering newer state.

use lms_core::types::{Contact, Course, Enrollment, Instructor, Student, Ticket};
use lms_core::utils::matches_query;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::debug;

/// Quiet interval for debounced list filters
pub const FILTER_DEBOUNCE: Duration = Duration::from_millis(300);

/// Entities addressable by their backend identifier
pub trait Keyed {
    /// The backend identifier
    fn key(&self) -> &str;
}

/// Entities searchable by the client-side text filter
pub trait Searchable {
    /// The strings the filter matches against
    fn search_haystacks(&self) -> Vec<String>;
}

/// Entities with an active/inactive flag the console can flip
pub trait ActiveToggle: Keyed {
    /// Current active flag
    fn is_active(&self) -> bool;
    /// Overwrite the active flag with the server-confirmed value
    fn set_active(&mut self, active: bool);
}

impl Keyed for Instructor {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Instructor {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.full_name(), self.email.clone()]
    }
}

impl ActiveToggle for Instructor {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Keyed for Student {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Student {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.full_name(), self.email.clone()]
    }
}

impl ActiveToggle for Student {
    fn is_active(&self) -> bool {
        self.is_active
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

impl Keyed for Enrollment {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Enrollment {
    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.student_name.clone(),
            self.student_email.clone(),
            self.course_title.clone(),
        ]
    }
}

impl Keyed for Ticket {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Ticket {
    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.user_name(),
            self.category.clone(),
            self.status.to_string(),
        ]
    }
}

impl Keyed for Contact {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Contact {
    fn search_haystacks(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.email.clone(),
            self.subject.clone(),
            self.query.clone(),
            self.kind.clone(),
        ]
    }
}

impl Keyed for Course {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Searchable for Course {
    fn search_haystacks(&self) -> Vec<String> {
        vec![self.title.clone(), self.category.clone()]
    }
}

/// Lifecycle of one fetched collection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListState<T> {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// A fetch is in flight; no data operations are permitted
    Loading,
    /// The collection is available
    Loaded(Vec<T>),
    /// The fetch failed; terminal until an explicit new fetch
    Errored(String),
}

impl<T> ListState<T> {
    /// The loaded collection, if any
    #[must_use]
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::Loaded(items) => Some(items),
            _ => None,
        }
    }
}

/// Ticket identifying one fetch; responses carrying a stale ticket are
/// discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(pub(crate) u64);

/// Generic list controller (see module docs)
#[derive(Debug)]
pub struct ResourceListController<T> {
    state: ListState<T>,
    generation: u64,
    query: String,
    pending_query: Option<(String, Instant)>,
    debounce: Option<Duration>,
    selected: Option<String>,
    toggling: HashSet<String>,
    banner_error: Option<String>,
}

impl<T> Default for ResourceListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ResourceListController<T> {
    /// Create a controller whose filter applies on every keystroke
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ListState::Idle,
            generation: 0,
            query: String::new(),
            pending_query: None,
            debounce: None,
            selected: None,
            toggling: HashSet::new(),
            banner_error: None,
        }
    }

    /// Create a controller whose filter waits for a quiet interval
    /// (the enrollments list debounces by [`FILTER_DEBOUNCE`])
    #[must_use]
    pub fn debounced(interval: Duration) -> Self {
        Self {
            debounce: Some(interval),
            ..Self::new()
        }
    }

    /// Current list state
    #[must_use]
    pub const fn state(&self) -> &ListState<T> {
        &self.state
    }

    /// Current (applied) filter query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Most recent toggle failure, surfaced as a page banner
    #[must_use]
    pub fn banner_error(&self) -> Option<&str> {
        self.banner_error.as_deref()
    }

    /// Start a fetch: transitions to `Loading` and invalidates every ticket
    /// issued before this one.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state = ListState::Loading;
        FetchTicket(self.generation)
    }

    /// Deliver a successful fetch. A stale ticket is discarded.
    pub fn resolve_ok(&mut self, ticket: FetchTicket, items: Vec<T>) {
        if ticket.0 != self.generation {
            debug!("discarding stale fetch response ({} != {})", ticket.0, self.generation);
            return;
        }
        self.state = ListState::Loaded(items);
    }

    /// Deliver a failed fetch. A stale ticket is discarded.
    pub fn resolve_err(&mut self, ticket: FetchTicket, message: impl Into<String>) {
        if ticket.0 != self.generation {
            return;
        }
        self.state = ListState::Errored(message.into());
    }

    /// Apply a filter query immediately (the default for every list except
    /// enrollments).
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.pending_query = None;
    }

    /// Record a keystroke at `now`. Without a debounce interval the query
    /// applies immediately; with one, it sits pending until a quiet interval
    /// elapses (each keystroke restarts the clock).
    pub fn set_query_at(&mut self, query: impl Into<String>, now: Instant) {
        if self.debounce.is_some() {
            self.pending_query = Some((query.into(), now));
        } else {
            self.set_query(query);
        }
    }

    /// Apply the pending query if its quiet interval has elapsed by `now`.
    /// Returns whether the applied query changed.
    pub fn flush_query(&mut self, now: Instant) -> bool {
        let Some(interval) = self.debounce else {
            return false;
        };
        match self.pending_query.take() {
            Some((query, at)) if now.duration_since(at) >= interval => {
                let changed = query != self.query;
                self.query = query;
                changed
            }
            other => {
                self.pending_query = other;
                false
            }
        }
    }
}

impl<T: Searchable> ResourceListController<T> {
    /// The loaded collection filtered by the applied query: entities where
    /// at least one designated field contains the query as a
    /// case-insensitive substring. Never touches the network.
    #[must_use]
    pub fn filtered(&self) -> Vec<&T> {
        self.state.items().map_or_else(Vec::new, |items| {
            items
                .iter()
                .filter(|item| {
                    item.search_haystacks()
                        .iter()
                        .any(|haystack| matches_query(haystack, &self.query))
                })
                .collect()
        })
    }
}

impl<T: Keyed> ResourceListController<T> {
    /// Open the detail view for the entity with this identifier. Unknown
    /// identifiers leave the selection closed.
    pub fn select(&mut self, id: &str) {
        let exists = self
            .state
            .items()
            .is_some_and(|items| items.iter().any(|item| item.key() == id));
        self.selected = exists.then(|| id.to_string());
    }

    /// Close the detail view; discards the selection with no side effects.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The currently selected entity, if the detail view is open.
    #[must_use]
    pub fn selected(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.state
            .items()?
            .iter()
            .find(|item| item.key() == id)
    }

    /// Reflect a successful create: the new entity goes to the front.
    pub fn prepend(&mut self, item: T) {
        if let ListState::Loaded(items) = &mut self.state {
            items.insert(0, item);
        }
    }

    /// Reflect a successful update: replace the server-confirmed record.
    pub fn replace(&mut self, item: T) {
        if let ListState::Loaded(items) = &mut self.state {
            if let Some(slot) = items.iter_mut().find(|existing| existing.key() == item.key()) {
                *slot = item;
            }
        }
    }

    /// Reflect a successful delete; clears the selection if it pointed at
    /// the removed entity.
    pub fn remove(&mut self, id: &str) {
        if let ListState::Loaded(items) = &mut self.state {
            items.retain(|item| item.key() != id);
        }
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }
}

impl<T: ActiveToggle> ResourceListController<T> {
    /// Whether the toggle control for this entity is currently disabled.
    #[must_use]
    pub fn is_toggling(&self, id: &str) -> bool {
        self.toggling.contains(id)
    }

    /// Arm a status toggle for one entity. Returns `false`, meaning the caller
    /// must not issue a request, while a toggle for the *same* entity is in
    /// flight; toggles on distinct entities proceed concurrently.
    pub fn begin_toggle(&mut self, id: &str) -> bool {
        if self.toggling.contains(id) || self.state.items().is_none() {
            return false;
        }
        self.banner_error = None;
        self.toggling.insert(id.to_string())
    }

    /// Deliver a successful toggle: the entity takes the server-confirmed
    /// value (never the locally requested one), and its control re-enables.
    /// An open detail view over the same entity sees the update too.
    pub fn resolve_toggle(&mut self, id: &str, confirmed_active: bool) {
        if let ListState::Loaded(items) = &mut self.state {
            if let Some(item) = items.iter_mut().find(|item| item.key() == id) {
                item.set_active(confirmed_active);
            }
        }
        self.toggling.remove(id);
    }

    /// Deliver a failed toggle: no local mutation, control re-enables, and
    /// the error is surfaced.
    pub fn fail_toggle(&mut self, id: &str, message: impl Into<String>) {
        self.toggling.remove(id);
        self.banner_error = Some(message.into());
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: String,
        title: String,
        active: bool,
    }

    fn row(id: &str, title: &str) -> Row {
        Row {
            id: id.to_string(),
            title: title.to_string(),
            active: false,
        }
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    impl Searchable for Row {
        fn search_haystacks(&self) -> Vec<String> {
            vec![self.title.clone()]
        }
    }

    impl ActiveToggle for Row {
        fn is_active(&self) -> bool {
            self.active
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }
    }

    fn loaded(items: Vec<Row>) -> ResourceListController<Row> {
        let mut controller = ResourceListController::new();
        let ticket = controller.begin_fetch();
        controller.resolve_ok(ticket, items);
        controller
    }

    #[test]
    fn test_state_machine_happy_path() {
        let mut controller: ResourceListController<Row> = ResourceListController::new();
        assert_eq!(controller.state(), &ListState::Idle);

        let ticket = controller.begin_fetch();
        assert_eq!(controller.state(), &ListState::Loading);

        controller.resolve_ok(ticket, vec![row("1", "Web Dev")]);
        assert!(matches!(controller.state(), ListState::Loaded(items) if items.len() == 1));
    }

    #[test]
    fn test_errored_is_terminal_until_explicit_refetch() {
        let mut controller: ResourceListController<Row> = ResourceListController::new();
        let ticket = controller.begin_fetch();
        controller.resolve_err(ticket, "Failed to fetch instructors");
        assert_eq!(
            controller.state(),
            &ListState::Errored("Failed to fetch instructors".to_string())
        );

        // Only a new fetch leaves the errored state.
        let ticket = controller.begin_fetch();
        assert_eq!(controller.state(), &ListState::Loading);
        controller.resolve_ok(ticket, vec![]);
        assert!(matches!(controller.state(), ListState::Loaded(_)));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut controller: ResourceListController<Row> = ResourceListController::new();

        let stale = controller.begin_fetch();
        let fresh = controller.begin_fetch();

        // The fresh response lands first...
        controller.resolve_ok(fresh, vec![row("2", "fresh")]);
        // ...and the stale one must not clobber it, whatever it carries.
        controller.resolve_ok(stale, vec![row("1", "stale")]);
        controller.resolve_err(stale, "stale failure");

        let items = controller.state().items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "fresh");
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let mut controller = loaded(vec![row("1", "Web Dev"), row("2", "Data Science")]);

        controller.set_query("data");
        let filtered = controller.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "2");

        controller.set_query("E");
        assert_eq!(controller.filtered().len(), 2);

        controller.set_query("quantum");
        assert!(controller.filtered().is_empty());
    }

    #[test]
    fn test_empty_query_returns_full_collection() {
        let mut controller = loaded(vec![row("1", "Web Dev"), row("2", "Data Science")]);
        controller.set_query("");
        assert_eq!(controller.filtered().len(), 2);
    }

    #[test]
    fn test_debounced_query_waits_for_quiet_interval() {
        let mut controller: ResourceListController<Row> =
            ResourceListController::debounced(FILTER_DEBOUNCE);
        let ticket = controller.begin_fetch();
        controller.resolve_ok(ticket, vec![row("1", "Web Dev"), row("2", "Data Science")]);

        let start = Instant::now();
        controller.set_query_at("da", start);

        // Too soon: the pending query must not be applied yet.
        assert!(!controller.flush_query(start + Duration::from_millis(100)));
        assert_eq!(controller.query(), "");

        // A later keystroke restarts the clock.
        controller.set_query_at("data", start + Duration::from_millis(200));
        assert!(!controller.flush_query(start + Duration::from_millis(400)));

        // Quiet for 300ms: now it applies.
        assert!(controller.flush_query(start + Duration::from_millis(501)));
        assert_eq!(controller.query(), "data");
        assert_eq!(controller.filtered().len(), 1);
    }

    #[test]
    fn test_undebounced_set_query_at_applies_immediately() {
        let mut controller = loaded(vec![row("1", "Web Dev")]);
        controller.set_query_at("web", Instant::now());
        assert_eq!(controller.query(), "web");
    }

    #[test]
    fn test_selection_lifecycle() {
        let mut controller = loaded(vec![row("1", "Web Dev"), row("2", "Data Science")]);

        controller.select("2");
        assert_eq!(controller.selected().unwrap().title, "Data Science");

        // Closing discards the selection with no side effects.
        controller.clear_selection();
        assert!(controller.selected().is_none());
        assert_eq!(controller.state().items().unwrap().len(), 2);

        // Selecting an unknown id leaves the detail view closed.
        controller.select("missing");
        assert!(controller.selected().is_none());
    }

    #[test]
    fn test_toggle_guard_is_per_identifier() {
        let mut controller = loaded(vec![row("1", "a"), row("2", "b")]);

        assert!(controller.begin_toggle("1"));
        // Same entity: refused while in flight.
        assert!(!controller.begin_toggle("1"));
        assert!(controller.is_toggling("1"));
        // Different entity: allowed concurrently.
        assert!(controller.begin_toggle("2"));

        controller.resolve_toggle("1", true);
        assert!(!controller.is_toggling("1"));
        assert!(controller.is_toggling("2"));
    }

    #[test]
    fn test_toggle_applies_server_value_not_requested_value() {
        let mut controller = loaded(vec![row("1", "a")]);
        controller.select("1");

        assert!(controller.begin_toggle("1"));
        // The caller asked for `true`, but the server said `false`:
        // the server is authoritative.
        controller.resolve_toggle("1", false);

        assert!(!controller.state().items().unwrap()[0].active);
        // The open detail view reflects the confirmed value too.
        assert!(!controller.selected().unwrap().active);
        assert!(!controller.is_toggling("1"));
    }

    #[test]
    fn test_failed_toggle_mutates_nothing() {
        let mut controller = loaded(vec![row("1", "a")]);

        assert!(controller.begin_toggle("1"));
        controller.fail_toggle("1", "Error toggling instructor status");

        assert!(!controller.state().items().unwrap()[0].active);
        assert!(!controller.is_toggling("1"));
        assert_eq!(
            controller.banner_error(),
            Some("Error toggling instructor status")
        );

        // The next successful toggle clears the banner.
        assert!(controller.begin_toggle("1"));
        assert!(controller.banner_error().is_none());
    }

    #[test]
    fn test_write_then_reflect_mutations() {
        let mut controller = loaded(vec![row("1", "a"), row("2", "b")]);

        controller.prepend(row("3", "c"));
        assert_eq!(controller.state().items().unwrap()[0].id, "3");

        controller.replace(Row {
            id: "2".to_string(),
            title: "b (updated)".to_string(),
            active: true,
        });
        assert_eq!(controller.state().items().unwrap()[2].title, "b (updated)");

        controller.select("2");
        controller.remove("2");
        assert_eq!(controller.state().items().unwrap().len(), 2);
        // Deleting the viewed entity closes its detail view.
        assert!(controller.selected().is_none());
    }

    #[test]
    fn test_instructor_search_fields() {
        let instructor: Instructor = serde_json::from_value(serde_json::json!({
            "_id": "665f1a2b3c4d5e6f78901234",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com"
        }))
        .unwrap();

        let haystacks = instructor.search_haystacks();
        assert!(haystacks.contains(&"Ada Lovelace".to_string()));
        assert!(haystacks.contains(&"ada@example.com".to_string()));
    }
}
