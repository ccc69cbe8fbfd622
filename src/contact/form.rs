use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum trimmed length of a message, in UTF-16 code units (what a
/// browser reports as the string's length).
pub const MESSAGE_MIN_LEN: usize = 10;

// Deliberately loose: one `@`, then a dot somewhere after it, no whitespace.
// U+FEFF is excluded alongside `\s`, matching the browser's notion of whitespace.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$")
        .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Human-readable name used in labels and error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Message => "Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Checks every field independently and collects all failures.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::ALL {
            if let Some(err) = check_field(field, self.get(field)) {
                errors.set(field, err);
            }
        }
        errors
    }
}

// `str::trim` plus the byte order mark, which browsers also strip.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn check_field(field: Field, value: &str) -> Option<ValidationError> {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        return Some(ValidationError::Required(field));
    }
    match field {
        // the pattern sees the raw value, surrounding whitespace included
        Field::Email if !EMAIL_PATTERN.is_match(value) => Some(ValidationError::InvalidEmail),
        Field::Message if trimmed.encode_utf16().count() < MESSAGE_MIN_LEN => {
            Some(ValidationError::MessageTooShort {
                min: MESSAGE_MIN_LEN,
            })
        }
        _ => None,
    }
}

/// A single field's validation failure. The display text is what gets shown
/// beneath the input.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    Required(Field),
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Message must be at least {min} characters")]
    MessageTooShort { min: usize },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    name: Option<ValidationError>,
    email: Option<ValidationError>,
    phone: Option<ValidationError>,
    message: Option<ValidationError>,
}

impl FieldErrors {
    fn slot(&mut self, field: Field) -> &mut Option<ValidationError> {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        match field {
            Field::Name => self.name.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Phone => self.phone.as_ref(),
            Field::Message => self.message.as_ref(),
        }
    }

    pub fn set(&mut self, field: Field, err: ValidationError) {
        *self.slot(field) = Some(err);
    }

    /// Removes the error for `field`, returning whether one was present.
    pub fn clear(&mut self, field: Field) -> bool {
        self.slot(field).take().is_some()
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|e| (f, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FormFields {
        FormFields {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "555".to_string(),
            message: "Hello there, testing.".to_string(),
        }
    }

    #[test]
    fn test_valid_fields_have_no_errors() {
        let errors = valid_fields().validate();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
    }

    #[test]
    fn test_each_empty_field_reports_exactly_itself() {
        for field in Field::ALL {
            let mut fields = valid_fields();
            fields.set(field, String::new());
            let errors = fields.validate();

            assert_eq!(errors.len(), 1, "expected one error for {field}");
            assert_eq!(errors.get(field), Some(&ValidationError::Required(field)));
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_empty() {
        let mut fields = valid_fields();
        fields.name = "   \t".to_string();
        fields.phone = "\n".to_string();
        let errors = fields.validate();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(Field::Name).map(|e| e.to_string()).as_deref(),
            Some("Name is required")
        );
        assert_eq!(
            errors.get(Field::Phone).map(|e| e.to_string()).as_deref(),
            Some("Phone number is required")
        );
    }

    #[test]
    fn test_required_messages_use_field_labels() {
        let errors = FormFields::default().validate();
        let messages: Vec<String> = errors.iter().map(|(_, e)| e.to_string()).collect();
        assert_eq!(
            messages,
            [
                "Name is required",
                "Email is required",
                "Phone number is required",
                "Message is required",
            ]
        );
    }

    #[test]
    fn test_byte_order_mark_counts_as_whitespace() {
        let mut fields = valid_fields();
        fields.name = "\u{FEFF}".to_string();
        fields.phone = " \u{FEFF}\t".to_string();
        fields.message = "\u{FEFF}".to_string();
        fields.email = "\u{FEFF}jo@x.com".to_string();
        let errors = fields.validate();

        assert_eq!(errors.get(Field::Name), Some(&ValidationError::Required(Field::Name)));
        assert_eq!(errors.get(Field::Phone), Some(&ValidationError::Required(Field::Phone)));
        assert_eq!(
            errors.get(Field::Message),
            Some(&ValidationError::Required(Field::Message))
        );
        assert_eq!(errors.get(Field::Email), Some(&ValidationError::InvalidEmail));

        fields.email = "\u{FEFF}".to_string();
        assert_eq!(
            fields.validate().get(Field::Email),
            Some(&ValidationError::Required(Field::Email))
        );

        // stripped from the ends before counting
        fields = valid_fields();
        fields.message = "\u{FEFF}123456789\u{FEFF}".to_string();
        assert!(fields.validate().get(Field::Message).is_some());
    }

    #[test]
    fn test_all_fields_checked_without_short_circuit() {
        let errors = FormFields::default().validate();
        assert_eq!(errors.len(), 4);
        let reported: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(reported, Field::ALL.to_vec());
    }

    #[test]
    fn test_message_length_boundary() {
        let mut fields = valid_fields();

        fields.message = "123456789".to_string();
        let errors = fields.validate();
        assert_eq!(
            errors.get(Field::Message),
            Some(&ValidationError::MessageTooShort { min: 10 })
        );
        assert_eq!(
            errors.get(Field::Message).unwrap().to_string(),
            "Message must be at least 10 characters"
        );

        fields.message = "1234567890".to_string();
        assert!(fields.validate().is_empty());

        // surrounding whitespace does not count toward the length
        fields.message = "   123456789   ".to_string();
        assert!(fields.validate().get(Field::Message).is_some());
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        let mut fields = valid_fields();
        // 9 units, 18 bytes
        fields.message = "ééééééééé".to_string();
        assert!(fields.validate().get(Field::Message).is_some());

        fields.message = "éééééééééé".to_string();
        assert!(fields.validate().is_empty());

        // astral-plane characters are two units each
        fields.message = "😀😀😀😀".to_string();
        assert_eq!(
            fields.validate().get(Field::Message),
            Some(&ValidationError::MessageTooShort { min: 10 })
        );

        fields.message = "😀😀😀😀😀".to_string();
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn test_email_rules() {
        let mut fields = valid_fields();

        fields.email = "a@b.c".to_string();
        assert!(fields.validate().is_empty());

        fields.email = "abc".to_string();
        assert_eq!(
            fields.validate().get(Field::Email),
            Some(&ValidationError::InvalidEmail)
        );

        fields.email = String::new();
        assert_eq!(
            fields.validate().get(Field::Email),
            Some(&ValidationError::Required(Field::Email))
        );

        for bad in ["a@b", "a b@c.d", "@b.c", "a@.c", "a@b.", "a@@b.c"] {
            fields.email = bad.to_string();
            assert!(
                fields.validate().get(Field::Email).is_some(),
                "{bad} should be rejected"
            );
        }

        // loose on purpose: extra dots are fine
        fields.email = "first.last@mail.example.co.uk".to_string();
        assert!(fields.validate().is_empty());
    }

    #[test]
    fn test_email_pattern_sees_untrimmed_value() {
        let mut fields = valid_fields();
        fields.email = " jo@x.com".to_string();
        assert_eq!(
            fields.validate().get(Field::Email),
            Some(&ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn test_field_errors_clear() {
        let mut errors = FormFields::default().validate();
        assert!(errors.clear(Field::Email));
        assert!(!errors.clear(Field::Email));
        assert_eq!(errors.len(), 3);
        errors.clear_all();
        assert!(errors.is_empty());
    }

    #[test]
    fn test_form_fields_clear() {
        let mut fields = valid_fields();
        assert_ne!(fields, FormFields::default());
        fields.clear();
        assert_eq!(fields, FormFields::default());
    }
}
