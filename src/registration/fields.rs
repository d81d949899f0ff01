use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Phone,
}

impl FieldName {
    /// Key used in the form body.
    pub fn key(self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Missing(FieldName),
    #[error("email is not a valid email address")]
    MalformedEmail,
    #[error("phone is not a valid phone number")]
    MalformedPhone,
}

impl FieldError {
    /// Italian notice shown under the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            FieldError::Missing(FieldName::Name) => "Inserisci nome e cognome.",
            FieldError::Missing(FieldName::Email) => "Inserisci la tua email.",
            FieldError::Missing(FieldName::Phone) => "Inserisci il tuo numero di telefono.",
            FieldError::MalformedEmail => "Inserisci un indirizzo email valido.",
            FieldError::MalformedPhone => "Inserisci un numero di telefono valido.",
        }
    }
}

/// Values typed into the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl RegistrationFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
        }
    }

    pub fn with(mut self, field: FieldName, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Phone => self.phone = value,
        }
        self
    }

    /// Presence and shape checks. They mirror what the browser enforces from
    /// the inputs' attributes, so a form the browser lets through is never
    /// refused here: `required` plus [`NAME_PATTERN`] on the name,
    /// `type="email"` (value trimmed, then [`EMAIL_PATTERN`]), and
    /// `pattern`/`minlength`/`maxlength` on the phone, which is not trimmed.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.name.is_empty() || !NAME_RE.is_match(&self.name) {
            return Err(FieldError::Missing(FieldName::Name));
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FieldError::Missing(FieldName::Email));
        }
        if self.phone.is_empty() {
            return Err(FieldError::Missing(FieldName::Phone));
        }
        if !EMAIL_RE.is_match(email) {
            return Err(FieldError::MalformedEmail);
        }
        let length = self.phone.chars().count();
        if !PHONE_RE.is_match(&self.phone) || !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&length) {
            return Err(FieldError::MalformedPhone);
        }
        Ok(())
    }

    /// `name=..&email=..&phone=..`, values percent-escaped.
    pub fn to_urlencoded(&self) -> String {
        [FieldName::Name, FieldName::Email, FieldName::Phone]
            .iter()
            .map(|field| format!("{}={}", field.key(), urlencoding::encode(self.get(*field))))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Name input `pattern`: anything with a non-blank character.
pub const NAME_PATTERN: &str = r".*\S.*";

/// The address shape browsers check for `type="email"`.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*";

/// Phone input `pattern`: digits and the usual separators, at least one digit.
pub const PHONE_PATTERN: &str = r"[ \(\)+\-]*[0-9][0-9 \(\)+\-]*";
pub const PHONE_MIN_LEN: usize = 6;
pub const PHONE_MAX_LEN: usize = 20;

/// HTML `pattern` attributes match the whole value.
fn whole_value(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("field patterns are valid regexes")
}

static NAME_RE: Lazy<Regex> = Lazy::new(|| whole_value(NAME_PATTERN));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| whole_value(EMAIL_PATTERN));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| whole_value(PHONE_PATTERN));

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> RegistrationFields {
        RegistrationFields::default()
            .with(FieldName::Name, "Mario Rossi")
            .with(FieldName::Email, "mario@example.it")
            .with(FieldName::Phone, "1234567890")
    }

    #[test]
    fn typed_values_are_reflected_back() {
        let fields = filled();
        assert_eq!(fields.get(FieldName::Name), "Mario Rossi");
        assert_eq!(fields.get(FieldName::Phone), "1234567890");
        assert_eq!(fields.name, "Mario Rossi");
        assert_eq!(fields.phone, "1234567890");
    }

    #[test]
    fn complete_fields_pass_the_gate() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn each_field_is_required() {
        assert_eq!(
            filled().with(FieldName::Name, "  ").validate(),
            Err(FieldError::Missing(FieldName::Name))
        );
        assert_eq!(
            filled().with(FieldName::Email, "").validate(),
            Err(FieldError::Missing(FieldName::Email))
        );
        assert_eq!(
            filled().with(FieldName::Phone, "").validate(),
            Err(FieldError::Missing(FieldName::Phone))
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["mario", "mario@", "@example.it", "ma rio@example.it", "a@b@c"] {
            assert_eq!(
                filled().with(FieldName::Email, email).validate(),
                Err(FieldError::MalformedEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn rejects_malformed_phone() {
        for phone in ["12ab5678", "123", "-----------", "+39 ".repeat(10).as_str()] {
            assert_eq!(
                filled().with(FieldName::Phone, phone).validate(),
                Err(FieldError::MalformedPhone),
                "{phone}"
            );
        }
        assert_eq!(filled().with(FieldName::Phone, "(02) 123-4567").validate(), Ok(()));
    }

    #[test]
    fn encodes_body_as_form_urlencoded() {
        let fields = filled().with(FieldName::Email, "mario+webinar@example.it");
        assert_eq!(
            fields.to_urlencoded(),
            "name=Mario%20Rossi&email=mario%2Bwebinar%40example.it&phone=1234567890"
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(FieldError::Missing(FieldName::Phone).to_string(), "phone is required");
        assert_eq!(FieldError::MalformedEmail.to_string(), "email is not a valid email address");
    }

    /// Constraint validation as the browser runs it on the rendered inputs.
    fn browser_accepts(fields: &RegistrationFields) -> bool {
        let attr = |pattern: &str, value: &str| {
            Regex::new(&format!("^(?:{})$", pattern)).unwrap().is_match(value)
        };
        let email = fields.email.trim();
        let phone_len = fields.phone.encode_utf16().count();
        !fields.name.is_empty()
            && attr(NAME_PATTERN, &fields.name)
            && !email.is_empty()
            && attr(EMAIL_PATTERN, email)
            && !fields.phone.is_empty()
            && attr(PHONE_PATTERN, &fields.phone)
            && (PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&phone_len)
    }

    #[test]
    fn browser_and_rust_checks_agree() {
        let cases = [
            filled(),
            filled().with(FieldName::Phone, "------"),
            filled().with(FieldName::Phone, "(((+)))"),
            filled().with(FieldName::Phone, "      "),
            filled().with(FieldName::Phone, " 333 1234567 "),
            filled().with(FieldName::Phone, "+39 (02) 1234-5678"),
            filled().with(FieldName::Phone, "12345"),
            filled().with(FieldName::Phone, "123456789012345678901"),
            filled().with(FieldName::Name, "   "),
            filled().with(FieldName::Name, " Mario "),
            filled().with(FieldName::Email, "  mario@example.it  "),
            filled().with(FieldName::Email, "   "),
            filled().with(FieldName::Email, "mario@localhost"),
            filled().with(FieldName::Email, "mario@example..it"),
        ];
        for fields in cases {
            assert_eq!(browser_accepts(&fields), fields.validate().is_ok(), "{fields:?}");
        }
    }

    #[test]
    fn blank_values_the_browser_blocks_are_rejected() {
        assert_eq!(
            filled().with(FieldName::Phone, "      ").validate(),
            Err(FieldError::MalformedPhone)
        );
        assert_eq!(
            filled().with(FieldName::Phone, "(((+)))").validate(),
            Err(FieldError::MalformedPhone)
        );
        assert_eq!(
            filled().with(FieldName::Email, "   ").validate(),
            Err(FieldError::Missing(FieldName::Email))
        );
        assert_eq!(filled().with(FieldName::Phone, " 333 1234567 ").validate(), Ok(()));
    }

    #[test]
    fn every_rejection_has_an_italian_notice() {
        let errors = [
            FieldError::Missing(FieldName::Name),
            FieldError::Missing(FieldName::Email),
            FieldError::Missing(FieldName::Phone),
            FieldError::MalformedEmail,
            FieldError::MalformedPhone,
        ];
        for e in errors {
            assert!(e.user_message().starts_with("Inserisci"), "{e}");
        }
    }
}
