//! Wire-level data model for the LMS backend
//!
//! These types mirror the backend's JSON exactly: camelCase field names,
//! `_id` identifiers, and a `{success, message, data}` envelope around every
//! payload (the contacts endpoint, which returns a bare array, is the one
//! exception and is handled at the client layer).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Backend entity identifier: a 24-character hexadecimal string
pub type EntityId = String;

/// Standard response envelope used by every backend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded
    #[serde(default)]
    pub success: bool,

    /// Optional human-readable message (set on most failures)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// The payload, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Total collection size, set by some list endpoints
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

/// Platform role of a user account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Platform administrator
    Admin,
    /// Course instructor
    Instructor,
    /// Enrolled student
    Student,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Instructor => write!(f, "instructor"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// Identity of the logged-in user, as returned by `GET /auth/me`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Platform role
    pub role: Role,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Payload of a successful `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    /// Bearer token to attach to subsequent requests
    pub token: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    pub email: String,
    /// Platform role
    pub role: Role,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

impl LoginData {
    /// Split off the identity part, leaving the token to the session store.
    #[must_use]
    pub fn into_profile(self) -> (String, UserProfile) {
        let Self {
            token,
            first_name,
            last_name,
            email,
            role,
            avatar,
        } = self;
        (
            token,
            UserProfile {
                first_name,
                last_name,
                email,
                role,
                avatar,
                phone: None,
            },
        )
    }
}

/// Social profile links attached to an instructor
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLinks {
    /// LinkedIn profile URL
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Twitter profile URL
    #[serde(default)]
    pub twitter: Option<String>,
}

/// Instructor account managed by the admin console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Areas of expertise
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Short biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Social profile links
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Whether the account is active
    #[serde(default)]
    pub is_active: bool,
    /// Number of courses taught
    #[serde(default)]
    pub total_courses: u32,
    /// Whether the account email is verified
    #[serde(default)]
    pub is_verified: bool,
    /// Average course rating
    #[serde(default)]
    pub rating: f64,
    /// Number of students across all courses
    #[serde(default)]
    pub total_students: u32,
    /// Lifetime earnings
    #[serde(default)]
    pub earnings: f64,
    /// Whether the account passed admin approval
    #[serde(default)]
    pub approved: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Last login timestamp
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Instructor {
    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Student account managed by the admin console
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Highest education
    #[serde(default)]
    pub education: Option<String>,
    /// Current occupation
    #[serde(default)]
    pub occupation: Option<String>,
    /// Declared skills
    #[serde(default)]
    pub skills: Vec<String>,
    /// Declared interests
    #[serde(default)]
    pub interests: Vec<String>,
    /// Whether the account is active
    #[serde(default)]
    pub is_active: bool,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Last login timestamp
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
}

impl Student {
    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Course difficulty level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    /// Entry level
    Beginner,
    /// Some prior knowledge assumed
    Intermediate,
    /// Experienced audience
    Advanced,
}

impl std::fmt::Display for CourseLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// Course publication status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    /// Not yet visible to students
    #[default]
    Draft,
    /// Visible and purchasable
    Published,
    /// Retired from the catalog
    Archived,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Published => write!(f, "published"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// Course record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// Course title
    #[serde(default)]
    pub title: String,
    /// Subtitle shown under the title
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Long description
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the teaching instructor
    #[serde(default)]
    pub instructor_id: Option<EntityId>,
    /// Primary category
    #[serde(default)]
    pub category: String,
    /// Secondary category
    #[serde(default)]
    pub sub_category: Option<String>,
    /// Teaching language
    #[serde(default)]
    pub language: String,
    /// Difficulty level
    #[serde(default)]
    pub level: Option<CourseLevel>,
    /// Duration in hours
    #[serde(default)]
    pub duration: f64,
    /// List price
    #[serde(default)]
    pub price: f64,
    /// Discounted price, when a promotion is running
    #[serde(default)]
    pub discount_price: Option<f64>,
    /// Prerequisites, one entry per line item
    #[serde(default)]
    pub prerequisites: Vec<String>,
    /// Learning outcomes, one entry per line item
    #[serde(default)]
    pub learning_outcomes: Vec<String>,
    /// Publication status
    #[serde(default)]
    pub status: CourseStatus,
    /// Thumbnail image URL
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Promotional video URL
    #[serde(default)]
    pub promo_video: Option<String>,
    /// Number of enrolled students
    #[serde(default)]
    pub total_students: u32,
    /// Average rating
    #[serde(default)]
    pub rating: f64,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Course {
    /// The price a buyer actually pays right now.
    #[must_use]
    pub fn sale_price(&self) -> f64 {
        self.discount_price.unwrap_or(self.price)
    }
}

/// User embedded in a support ticket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TicketUser {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
}

/// Support ticket lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    /// Awaiting a resolution
    Open,
    /// Closed with a resolution message
    Resolved,
    /// Status value this console does not recognize
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Resolved => write!(f, "Resolved"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Support ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// User who filed the ticket
    pub user: TicketUser,
    /// Ticket category
    #[serde(default)]
    pub category: String,
    /// Lifecycle status
    pub status: TicketStatus,
    /// Resolution message, present once resolved
    #[serde(default)]
    pub resolution: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Full name of the filing user
    #[must_use]
    pub fn user_name(&self) -> String {
        format!("{} {}", self.user.first_name, self.user.last_name)
    }
}

/// Contact-form submission
///
/// The contacts endpoint predates the response envelope and returns a bare
/// JSON array of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// Submitter name
    #[serde(default)]
    pub name: String,
    /// Submitter email
    #[serde(default)]
    pub email: String,
    /// Subject line
    #[serde(default)]
    pub subject: String,
    /// Free-form query text
    #[serde(default)]
    pub query: String,
    /// Submission type (general, billing, ...)
    #[serde(default, rename = "type")]
    pub kind: String,
}

/// Enrollment row from the enrollments analytics endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// Identifier of the enrolled student
    #[serde(default)]
    pub student_id: Option<EntityId>,
    /// Display name of the enrolled student
    #[serde(default)]
    pub student_name: String,
    /// Email of the enrolled student
    #[serde(default)]
    pub student_email: String,
    /// Title of the purchased course
    #[serde(default)]
    pub course_title: String,
}

/// Aggregation granularity for the revenue report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    /// Group by calendar day
    #[default]
    Day,
    /// Group by calendar month
    Month,
    /// Group by calendar year
    Year,
}

impl Timeframe {
    /// Wire representation, also used as the query-string value
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl std::fmt::Display for Timeframe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(crate::Error::Validation {
                field: "timeframe".to_string(),
                message: format!("unknown timeframe: {other}"),
            }),
        }
    }
}

/// One aggregated revenue bucket
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    /// Bucket label (a day, month, or year, per the requested timeframe)
    pub period: String,
    /// Revenue within the bucket
    pub amount: f64,
}

/// Revenue report payload
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    /// Total revenue across the platform
    #[serde(default)]
    pub total_revenue: f64,
    /// Server-aggregated buckets for the requested timeframe
    #[serde(default)]
    pub breakdown: Vec<RevenuePoint>,
}

/// Total-enrollments payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentTotals {
    /// Number of enrollments across the platform
    #[serde(default)]
    pub total_enrollments: u64,
}

/// Minimal actor reference embedded in activity entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActorRef {
    /// First name
    #[serde(default)]
    pub first_name: String,
    /// Last name
    #[serde(default)]
    pub last_name: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
}

impl ActorRef {
    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Minimal course reference embedded in activity entries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRef {
    /// Course title
    #[serde(default)]
    pub title: String,
}

/// Recent instructor activity entry (a course they touched)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorActivity {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// Title of the course involved
    #[serde(default)]
    pub title: String,
    /// The acting instructor
    pub instructor: ActorRef,
    /// When the activity happened
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Recent student activity entry (an enrollment or submission)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentActivity {
    /// Backend identifier
    #[serde(rename = "_id")]
    pub id: EntityId,
    /// The acting student
    pub student: ActorRef,
    /// Course involved, if any
    #[serde(default)]
    pub course: Option<CourseRef>,
    /// When the activity happened
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create payload for `POST /admin/users/instructors`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructor {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    #[validate(email)]
    pub email: String,
    /// Initial password
    #[validate(length(min = 6))]
    pub password: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL (backend default applied when empty)
    pub avatar: String,
    /// Areas of expertise
    #[serde(default)]
    pub expertise: Vec<String>,
    /// Short biography
    #[serde(default)]
    pub bio: Option<String>,
    /// Social profile links
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Whether the account starts active
    pub is_active: bool,
    /// Fixed role discriminator
    pub role: Role,
    /// Admin-created accounts are pre-verified
    pub is_verified: bool,
}

/// Create payload for `POST /admin/users/students`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    #[validate(email)]
    pub email: String,
    /// Initial password
    #[validate(length(min = 6))]
    pub password: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Highest education
    #[serde(default)]
    pub education: Option<String>,
    /// Current occupation
    #[serde(default)]
    pub occupation: Option<String>,
    /// Declared skills
    #[serde(default)]
    pub skills: Vec<String>,
    /// Declared interests
    #[serde(default)]
    pub interests: Vec<String>,
    /// Whether the account starts active
    pub is_active: bool,
    /// Fixed role discriminator
    pub role: Role,
    /// Admin-created accounts are pre-verified
    pub is_verified: bool,
}

/// Create payload for `POST /admin/courses`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    /// Course title
    pub title: String,
    /// Subtitle shown under the title
    pub subtitle: String,
    /// Long description
    pub description: String,
    /// Identifier of the teaching instructor
    pub instructor_id: EntityId,
    /// Primary category
    pub category: String,
    /// Secondary category
    pub sub_category: String,
    /// Teaching language
    pub language: String,
    /// Difficulty level
    #[serde(default)]
    pub level: Option<CourseLevel>,
    /// Duration in hours
    pub duration: f64,
    /// List price
    pub price: f64,
    /// Discounted price
    pub discount_price: f64,
    /// Prerequisites; empty rows are dropped before submission
    pub prerequisites: Vec<String>,
    /// Learning outcomes; empty rows are dropped before submission
    pub learning_outcomes: Vec<String>,
}

/// Update payload for `PUT /admin/courses/{id}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New primary category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// New secondary category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// New difficulty level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<CourseLevel>,
    /// New publication status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CourseStatus>,
}

/// Update payload for `PUT /auth/updatedetails`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Email address
    #[validate(email)]
    pub email: String,
    /// Phone number
    #[serde(default)]
    pub phone: Option<String>,
    /// Avatar image URL
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Payload of the toggle-active endpoints
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleActive {
    /// The new active flag (request: requested value; response: server value)
    pub is_active: bool,
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
#[allow(clippy::uninlined_format_args, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_envelope_success_roundtrip() {
        let json = r#"{"success":true,"data":{"totalRevenue":1234.5}}"#;
        let envelope: ApiEnvelope<RevenueReport> = serde_json::from_str(json).unwrap();

        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert_eq!(envelope.data.unwrap().total_revenue, 1234.5);
    }

    #[test]
    fn test_envelope_failure_carries_message() {
        let json = r#"{"success":false,"message":"Unauthorized: Invalid credentials"}"#;
        let envelope: ApiEnvelope<LoginData> = serde_json::from_str(json).unwrap();

        assert!(!envelope.success);
        assert_eq!(
            envelope.message.as_deref(),
            Some("Unauthorized: Invalid credentials")
        );
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_instructor_wire_shape() {
        let json = r#"{
            "_id": "665f1a2b3c4d5e6f78901234",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "expertise": ["Mathematics", "Computing"],
            "socialLinks": {"linkedin": "https://linkedin.example/ada"},
            "isActive": true,
            "totalCourses": 3,
            "isVerified": true,
            "rating": 4.8,
            "totalStudents": 120,
            "earnings": 999.5,
            "approved": true,
            "createdAt": "2025-05-01T10:00:00Z"
        }"#;

        let instructor: Instructor = serde_json::from_str(json).unwrap();

        assert_eq!(instructor.id, "665f1a2b3c4d5e6f78901234");
        assert_eq!(instructor.full_name(), "Ada Lovelace");
        assert_eq!(instructor.expertise.len(), 2);
        assert_eq!(
            instructor.social_links.linkedin.as_deref(),
            Some("https://linkedin.example/ada")
        );
        assert!(instructor.is_active);
        assert!(instructor.last_login.is_none());

        // Serialization must keep the backend's field names
        let back = serde_json::to_value(&instructor).unwrap();
        assert_eq!(back["_id"], "665f1a2b3c4d5e6f78901234");
        assert_eq!(back["firstName"], "Ada");
        assert_eq!(back["totalCourses"], 3);
    }

    #[test]
    fn test_student_defaults_are_liberal() {
        let json = r#"{"_id": "665f1a2b3c4d5e6f78901234", "firstName": "Sam"}"#;
        let student: Student = serde_json::from_str(json).unwrap();

        assert_eq!(student.full_name(), "Sam ");
        assert!(student.skills.is_empty());
        assert!(student.interests.is_empty());
        assert!(!student.is_active);
    }

    #[test]
    fn test_course_sale_price() {
        let json = r#"{
            "_id": "0123456789abcdef01234567",
            "title": "Rust for the Web",
            "category": "Programming",
            "language": "English",
            "price": 129.99,
            "discountPrice": 99.99,
            "status": "published"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();

        assert_eq!(course.status, CourseStatus::Published);
        assert_eq!(course.sale_price(), 99.99);

        let no_discount = Course {
            discount_price: None,
            ..course
        };
        assert_eq!(no_discount.sale_price(), 129.99);
    }

    #[test]
    fn test_ticket_status_parsing() {
        let ticket: Ticket = serde_json::from_str(
            r#"{
                "_id": "0123456789abcdef01234567",
                "user": {"firstName": "Kai", "lastName": "Watts"},
                "category": "billing",
                "status": "open"
            }"#,
        )
        .unwrap();

        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.user_name(), "Kai Watts");
        assert_eq!(ticket.status.to_string(), "Open");

        // Unknown statuses must not fail the whole list fetch
        let odd: TicketStatus = serde_json::from_str(r#""escalated""#).unwrap();
        assert_eq!(odd, TicketStatus::Unknown);
    }

    #[test]
    fn test_contact_type_field() {
        let contact: Contact = serde_json::from_str(
            r#"{
                "_id": "0123456789abcdef01234567",
                "name": "Pat",
                "email": "pat@example.com",
                "subject": "Refund",
                "query": "Please refund my course",
                "type": "billing"
            }"#,
        )
        .unwrap();

        assert_eq!(contact.kind, "billing");
    }

    #[test]
    fn test_timeframe_roundtrip() {
        for (text, timeframe) in [
            ("day", Timeframe::Day),
            ("month", Timeframe::Month),
            ("year", Timeframe::Year),
        ] {
            assert_eq!(text.parse::<Timeframe>().unwrap(), timeframe);
            assert_eq!(timeframe.as_str(), text);
        }

        assert!("week".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_login_data_into_profile() {
        let data = LoginData {
            token: "tok-123".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            role: Role::Admin,
            avatar: None,
        };

        let (token, profile) = data.into_profile();
        assert_eq!(token, "tok-123");
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(profile.role, Role::Admin);
    }

    #[test]
    fn test_new_instructor_validation() {
        use validator::Validate;

        let mut payload = NewInstructor {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            phone: None,
            avatar: "default_avatar.jpg".to_string(),
            expertise: vec![],
            bio: None,
            social_links: SocialLinks::default(),
            is_active: true,
            role: Role::Instructor,
            is_verified: true,
        };
        assert!(payload.validate().is_ok());

        payload.email = "not-an-email".to_string();
        assert!(payload.validate().is_err());

        payload.email = "ada@example.com".to_string();
        payload.password = "abc".to_string();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_course_update_skips_unset_fields() {
        let update = CourseUpdate {
            title: Some("New title".to_string()),
            ..CourseUpdate::default()
        };

        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"New title"}"#);
    }

    #[test]
    fn test_toggle_active_wire_shape() {
        let toggle = ToggleActive { is_active: true };
        assert_eq!(serde_json::to_string(&toggle).unwrap(), r#"{"isActive":true}"#);
    }
}
