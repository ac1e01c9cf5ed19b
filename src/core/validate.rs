use std::collections::BTreeMap;

/// Field keys used across the app's forms.
pub mod fields {
    pub const NAME: &str = "name";
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const DESCRIPTION: &str = "description";
    pub const MEMBERS: &str = "members";
    /// Whole-form message slot used by the project list's add dialog.
    pub const FORM: &str = "form";
}

/// Per-field validation messages for one form submission. Empty means
/// the submission is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

/// Create-project rule used by the dashboard modal. `members` arrives as
/// the raw text of the number input; anything that does not parse to an
/// integer of at least 1 is rejected.
pub fn check_create_project(name: &str, description: &str, members: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.trim().chars().count() < 3 {
        errors.set(fields::NAME, "Project name must be at least 3 characters");
    }
    if description.trim().chars().count() < 5 {
        errors.set(fields::DESCRIPTION, "Short description required");
    }
    match members.trim().parse::<i64>() {
        Ok(n) if n >= 1 => {}
        _ => errors.set(fields::MEMBERS, "Members must be 1 or more"),
    }
    errors
}

/// The lighter rule used by the project list's add dialog. Both fields
/// just have to be non-empty, and failure is a single whole-form
/// message rather than per-field ones. Kept separate from
/// [`check_create_project`]; the two entry points enforce different
/// minimums.
pub fn check_quick_project(name: &str, due: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if name.is_empty() || due.is_empty() {
        errors.set(fields::FORM, "Please fill all fields");
    }
    errors
}
