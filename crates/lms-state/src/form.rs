//! Create/update form controllers
//!
//! Validation happens entirely client-side before any network call; a form
//! that fails validation never issues a request. Multi-valued fields are an
//! explicit ordered-row reducer (append / edit-by-index / remove-by-index),
//! and empty rows are dropped at submission time so a freshly added blank
//! row survives editing.

use lms_core::Error;
use lms_core::types::{
    CourseLevel, NewCourse, NewInstructor, NewStudent, Role, SocialLinks,
};
use lms_core::utils::is_object_id;

/// Validation message for the password rule
pub const PASSWORD_MESSAGE: &str =
    "Password is required and must be at least 6 characters long";

/// Validation message for missing required course fields
pub const COURSE_REQUIRED_MESSAGE: &str =
    "Please fill in Title, Category, Language, and Instructor.";

/// Validation message for negative numeric course fields
pub const COURSE_NEGATIVE_MESSAGE: &str =
    "Price, discount price, and duration cannot be negative.";

/// Validation message for non-numeric course fields
pub const COURSE_NUMERIC_MESSAGE: &str =
    "Price, discount price, and duration must be numeric.";

/// Validation message for a malformed instructor reference
pub const COURSE_INSTRUCTOR_ID_MESSAGE: &str =
    "Selected Instructor ID must be a valid 24-character hex string.";

/// Rewrite a submission failure into the message shown inline in the form.
///
/// Conflicts on a unique email get the friendlier wording; everything else
/// surfaces the backend's message verbatim (or the generic transport text).
#[must_use]
pub fn friendly_error(err: &Error) -> String {
    match err {
        Error::Conflict { .. } => "This email is already registered".to_string(),
        other => {
            let message = other.user_message();
            if matches!(other, Error::Api { .. }) && message.to_lowercase().contains("email") {
                "This email is already registered".to_string()
            } else {
                message
            }
        }
    }
}

/// Ordered sequence of string rows with index-addressed editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowField {
    rows: Vec<String>,
}

impl RowField {
    /// Empty field
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Field seeded with existing rows (edit flows)
    #[must_use]
    pub fn from_rows(rows: Vec<String>) -> Self {
        Self { rows }
    }

    /// Append an empty row for the user to type into
    pub fn add_row(&mut self) {
        self.rows.push(String::new());
    }

    /// Edit the row at `index`; out-of-range indexes are ignored
    pub fn set_row(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            *row = value.into();
        }
    }

    /// Remove the row at `index`; out-of-range indexes are ignored
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }

    /// All rows as edited, blank ones included
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Submission values: trimmed rows with empties dropped
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.trim())
            .filter(|row| !row.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

/// In-flight/error bookkeeping shared by every form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    submitting: bool,
    error: Option<String>,
}

impl FormStatus {
    /// Arm a submission. Returns `false` while one is already in flight;
    /// the submit control is disabled for the duration.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// Record a failed submission; the form stays filled and retryable.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    /// Record a successful submission.
    pub fn succeed(&mut self) {
        self.submitting = false;
        self.error = None;
    }

    /// A relevant input changed: the stale error disappears.
    pub fn touch(&mut self) {
        self.error = None;
    }

    /// Whether a submission is in flight
    #[must_use]
    pub const fn submitting(&self) -> bool {
        self.submitting
    }

    /// The current inline error, if any
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Enroll-instructor form
#[derive(Debug, Clone, Default)]
pub struct InstructorForm {
    /// First name (required)
    pub first_name: String,
    /// Last name (required)
    pub last_name: String,
    /// Email (required)
    pub email: String,
    /// Initial password (min 6 characters)
    pub password: String,
    /// Phone (optional)
    pub phone: String,
    /// Avatar URL (optional; backend default applied when empty)
    pub avatar: String,
    /// Areas of expertise
    pub expertise: RowField,
    /// Biography (optional)
    pub bio: String,
    /// LinkedIn URL (optional)
    pub linkedin: String,
    /// Twitter URL (optional)
    pub twitter: String,
    /// Whether the account starts active
    pub is_active: bool,
    /// Submission bookkeeping
    pub status: FormStatus,
}

impl InstructorForm {
    /// Validate and build the create payload. On `Err` the caller must not
    /// issue a network request.
    ///
    /// # Errors
    ///
    /// Returns the inline validation message.
    pub fn validate(&self) -> Result<NewInstructor, String> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err("First name, last name, and email are required".to_string());
        }
        if self.password.len() < 6 {
            return Err(PASSWORD_MESSAGE.to_string());
        }

        Ok(NewInstructor {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: optional(&self.phone),
            avatar: if self.avatar.trim().is_empty() {
                "default_avatar.jpg".to_string()
            } else {
                self.avatar.trim().to_string()
            },
            expertise: self.expertise.values(),
            bio: optional(&self.bio),
            social_links: SocialLinks {
                linkedin: optional(&self.linkedin),
                twitter: optional(&self.twitter),
            },
            is_active: self.is_active,
            role: Role::Instructor,
            is_verified: true,
        })
    }
}

/// Enroll-student form
#[derive(Debug, Clone, Default)]
pub struct StudentForm {
    /// First name (required)
    pub first_name: String,
    /// Last name (required)
    pub last_name: String,
    /// Email (required)
    pub email: String,
    /// Initial password (min 6 characters)
    pub password: String,
    /// Phone (optional)
    pub phone: String,
    /// Highest education (optional)
    pub education: String,
    /// Occupation (optional)
    pub occupation: String,
    /// Declared skills
    pub skills: RowField,
    /// Declared interests
    pub interests: RowField,
    /// Whether the account starts active
    pub is_active: bool,
    /// Submission bookkeeping
    pub status: FormStatus,
}

impl StudentForm {
    /// Validate and build the create payload. On `Err` the caller must not
    /// issue a network request.
    ///
    /// # Errors
    ///
    /// Returns the inline validation message.
    pub fn validate(&self) -> Result<NewStudent, String> {
        if self.first_name.trim().is_empty()
            || self.last_name.trim().is_empty()
            || self.email.trim().is_empty()
        {
            return Err("First name, last name, and email are required".to_string());
        }
        if self.password.len() < 6 {
            return Err(PASSWORD_MESSAGE.to_string());
        }

        Ok(NewStudent {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            phone: optional(&self.phone),
            education: optional(&self.education),
            occupation: optional(&self.occupation),
            skills: self.skills.values(),
            interests: self.interests.values(),
            is_active: self.is_active,
            role: Role::Student,
            is_verified: true,
        })
    }
}

/// Create-course form
///
/// Numeric fields are kept as entered text until validation, mirroring the
/// way form inputs arrive; an empty numeric field submits as zero.
#[derive(Debug, Clone, Default)]
pub struct CourseForm {
    /// Course title (required)
    pub title: String,
    /// Subtitle
    pub subtitle: String,
    /// Description
    pub description: String,
    /// Primary category (required)
    pub category: String,
    /// Secondary category
    pub sub_category: String,
    /// Teaching language (required)
    pub language: String,
    /// Teaching instructor's identifier (required, 24-hex)
    pub instructor_id: String,
    /// Difficulty level (empty = unset)
    pub level: String,
    /// Duration in hours, as entered
    pub duration: String,
    /// List price, as entered
    pub price: String,
    /// Discount price, as entered
    pub discount_price: String,
    /// Prerequisite rows
    pub prerequisites: RowField,
    /// Learning-outcome rows
    pub learning_outcomes: RowField,
    /// Submission bookkeeping
    pub status: FormStatus,
}

impl CourseForm {
    /// Validate and build the create payload. On `Err` the caller must not
    /// issue a network request.
    ///
    /// # Errors
    ///
    /// Returns the inline validation message.
    pub fn validate(&self) -> Result<NewCourse, String> {
        if self.title.trim().is_empty()
            || self.category.trim().is_empty()
            || self.language.trim().is_empty()
            || self.instructor_id.trim().is_empty()
        {
            return Err(COURSE_REQUIRED_MESSAGE.to_string());
        }

        let duration = numeric(&self.duration)?;
        let price = numeric(&self.price)?;
        let discount_price = numeric(&self.discount_price)?;
        if duration < 0.0 || price < 0.0 || discount_price < 0.0 {
            return Err(COURSE_NEGATIVE_MESSAGE.to_string());
        }

        if !is_object_id(self.instructor_id.trim()) {
            return Err(COURSE_INSTRUCTOR_ID_MESSAGE.to_string());
        }

        let level = match self.level.trim() {
            "" => None,
            "beginner" => Some(CourseLevel::Beginner),
            "intermediate" => Some(CourseLevel::Intermediate),
            "advanced" => Some(CourseLevel::Advanced),
            other => return Err(format!("Unknown course level: {other}")),
        };

        Ok(NewCourse {
            title: self.title.trim().to_string(),
            subtitle: self.subtitle.trim().to_string(),
            description: self.description.trim().to_string(),
            instructor_id: self.instructor_id.trim().to_string(),
            category: self.category.trim().to_string(),
            sub_category: self.sub_category.trim().to_string(),
            language: self.language.trim().to_string(),
            level,
            duration,
            price,
            discount_price,
            prerequisites: self.prerequisites.values(),
            learning_outcomes: self.learning_outcomes.values(),
        })
    }
}

/// Parse a numeric form field; empty means zero, garbage is an error.
fn numeric(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }
    input
        .parse::<f64>()
        .map_err(|_| COURSE_NUMERIC_MESSAGE.to_string())
}

fn optional(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn valid_instructor_form() -> InstructorForm {
        InstructorForm {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            is_active: true,
            ..InstructorForm::default()
        }
    }

    fn valid_course_form() -> CourseForm {
        CourseForm {
            title: "Rust for the Web".to_string(),
            category: "Programming".to_string(),
            language: "English".to_string(),
            instructor_id: "665f1a2b3c4d5e6f78901234".to_string(),
            duration: "15".to_string(),
            price: "129.99".to_string(),
            discount_price: "99.99".to_string(),
            ..CourseForm::default()
        }
    }

    #[test]
    fn test_row_field_reducer_preserves_edits_and_order() {
        let mut rows = RowField::new();

        // Add a row, edit it by index, then remove a *different* row:
        // the edited value and remaining order must survive.
        rows.add_row();
        rows.add_row();
        rows.add_row();
        rows.set_row(1, "Basic JavaScript");
        rows.set_row(2, "Git");
        rows.remove_row(0);

        assert_eq!(rows.rows(), ["Basic JavaScript", "Git"]);
        assert_eq!(rows.values(), vec!["Basic JavaScript", "Git"]);
    }

    #[test]
    fn test_row_field_blank_rows_survive_editing_but_not_submission() {
        let mut rows = RowField::from_rows(vec!["Ownership".to_string()]);
        rows.add_row(); // freshly added blank row stays visible...

        assert_eq!(rows.rows().len(), 2);
        // ...but is filtered out of the submitted values.
        assert_eq!(rows.values(), vec!["Ownership"]);
    }

    #[test]
    fn test_row_field_out_of_range_is_ignored() {
        let mut rows = RowField::from_rows(vec!["a".to_string()]);
        rows.set_row(5, "x");
        rows.remove_row(5);
        assert_eq!(rows.rows(), ["a"]);
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("12345")]
    fn test_short_password_blocks_submission(#[case] password: &str) {
        let form = InstructorForm {
            password: password.to_string(),
            ..valid_instructor_form()
        };

        assert_eq!(form.validate().unwrap_err(), PASSWORD_MESSAGE);
    }

    #[test]
    fn test_instructor_payload_defaults() {
        let payload = valid_instructor_form().validate().unwrap();

        assert_eq!(payload.avatar, "default_avatar.jpg");
        assert_eq!(payload.role, Role::Instructor);
        assert!(payload.is_verified);
        assert!(payload.phone.is_none());
    }

    #[test]
    fn test_student_form_collects_row_fields() {
        let mut form = StudentForm {
            first_name: "Sam".to_string(),
            last_name: "Park".to_string(),
            email: "sam@example.com".to_string(),
            password: "secret1".to_string(),
            ..StudentForm::default()
        };
        form.skills = RowField::from_rows(vec!["Python".to_string(), " ".to_string()]);
        form.interests.add_row();
        form.interests.set_row(0, "Machine Learning");

        let payload = form.validate().unwrap();
        assert_eq!(payload.skills, vec!["Python"]);
        assert_eq!(payload.interests, vec!["Machine Learning"]);
        assert_eq!(payload.role, Role::Student);
    }

    #[test]
    fn test_course_required_fields() {
        let form = CourseForm {
            category: String::new(),
            ..valid_course_form()
        };
        assert_eq!(form.validate().unwrap_err(), COURSE_REQUIRED_MESSAGE);
    }

    #[rstest]
    #[case("-1", "129.99", "0")]
    #[case("15", "-0.01", "0")]
    #[case("15", "129.99", "-5")]
    fn test_negative_numbers_block_submission(
        #[case] duration: &str,
        #[case] price: &str,
        #[case] discount: &str,
    ) {
        let form = CourseForm {
            duration: duration.to_string(),
            price: price.to_string(),
            discount_price: discount.to_string(),
            ..valid_course_form()
        };
        assert_eq!(form.validate().unwrap_err(), COURSE_NEGATIVE_MESSAGE);
    }

    #[test]
    fn test_non_numeric_price_blocks_submission() {
        let form = CourseForm {
            price: "free".to_string(),
            ..valid_course_form()
        };
        assert_eq!(form.validate().unwrap_err(), COURSE_NUMERIC_MESSAGE);
    }

    #[test]
    fn test_empty_numeric_fields_submit_as_zero() {
        let form = CourseForm {
            duration: String::new(),
            price: String::new(),
            discount_price: String::new(),
            ..valid_course_form()
        };

        let payload = form.validate().unwrap();
        assert_eq!(payload.duration, 0.0);
        assert_eq!(payload.price, 0.0);
    }

    #[rstest]
    #[case("not-hex")]
    #[case("665f1a2b3c4d5e6f7890123")] // 23 chars
    #[case("665f1a2b3c4d5e6f789012345")] // 25 chars
    fn test_malformed_instructor_id_blocks_submission(#[case] id: &str) {
        let form = CourseForm {
            instructor_id: id.to_string(),
            ..valid_course_form()
        };
        assert_eq!(form.validate().unwrap_err(), COURSE_INSTRUCTOR_ID_MESSAGE);
    }

    #[test]
    fn test_course_payload_drops_blank_rows() {
        let mut form = valid_course_form();
        form.prerequisites.add_row();
        form.prerequisites.set_row(0, "Basic JavaScript");
        form.prerequisites.add_row(); // left blank
        form.learning_outcomes = RowField::from_rows(vec![
            "Build scalable apps".to_string(),
            String::new(),
        ]);

        let payload = form.validate().unwrap();
        assert_eq!(payload.prerequisites, vec!["Basic JavaScript"]);
        assert_eq!(payload.learning_outcomes, vec!["Build scalable apps"]);
        assert_eq!(payload.level, None);
    }

    #[test]
    fn test_form_status_gates_double_submission() {
        let mut status = FormStatus::default();

        assert!(status.begin_submit());
        assert!(status.submitting());
        // Submission is disabled while in flight.
        assert!(!status.begin_submit());

        status.fail("Server error: Try again.");
        assert!(!status.submitting());
        assert_eq!(status.error(), Some("Server error: Try again."));

        // Editing an input clears the stale error; retry is available.
        status.touch();
        assert!(status.error().is_none());
        assert!(status.begin_submit());
        status.succeed();
        assert!(!status.submitting());
    }

    #[test]
    fn test_friendly_error_rewrites_conflicts() {
        let conflict = Error::Conflict {
            message: "duplicate key".to_string(),
        };
        assert_eq!(friendly_error(&conflict), "This email is already registered");

        let email_api = Error::Api {
            status: 400,
            message: "A user with this email already exists".to_string(),
        };
        assert_eq!(friendly_error(&email_api), "This email is already registered");

        let other = Error::Api {
            status: 500,
            message: "Internal server error".to_string(),
        };
        assert_eq!(friendly_error(&other), "Internal server error");

        let network = Error::Network("refused".to_string());
        assert_eq!(
            friendly_error(&network),
            "Network error: Unable to connect to the server"
        );
    }
}
