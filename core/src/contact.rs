pub const MAX_MESSAGE_LENGTH: usize = 300;

const EMAIL_REQUIRED: &str = "Please enter your email address.";
const EMAIL_ILLEGAL_CHARS: &str = "Remove special characters from your email address.";
const EMAIL_BAD_SHAPE: &str = "Please enter a valid email address.";
const MESSAGE_REQUIRED: &str = "Please enter a message before submitting.";
const MESSAGE_ILLEGAL_CHARS: &str = "Please remove special characters from your message.";

// Empty string = field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactValidation {
    pub email: String,
    pub message: String,
}

impl ContactValidation {
    pub fn is_ok(&self) -> bool {
        self.email.is_empty() && self.message.is_empty()
    }
}

// First matching rule wins per field. The character-set check treats
// whitespace as legal, so a spaced email only trips the shape rule after it.
pub fn validate_contact(email: &str, message: &str) -> ContactValidation {
    let mut validation = ContactValidation::default();

    let email = email.trim();
    if email.is_empty() {
        validation.email = EMAIL_REQUIRED.to_string();
    } else if has_illegal_chars(email) {
        validation.email = EMAIL_ILLEGAL_CHARS.to_string();
    } else if !matches_email_shape(email) {
        validation.email = EMAIL_BAD_SHAPE.to_string();
    }

    if message.trim().is_empty() {
        validation.message = MESSAGE_REQUIRED.to_string();
    } else if has_illegal_chars(message) {
        validation.message = MESSAGE_ILLEGAL_CHARS.to_string();
    } else if message.chars().count() > MAX_MESSAGE_LENGTH {
        validation.message =
            format!("Please keep your message within {MAX_MESSAGE_LENGTH} characters.");
    }

    validation
}

pub fn has_illegal_chars(text: &str) -> bool {
    text.chars().any(|ch| {
        !(ch.is_ascii_alphanumeric() || ch.is_whitespace() || matches!(ch, '@' | '.' | '_' | '-'))
    })
}

// local@domain.tld: one @, no whitespace, an interior dot in the domain.
pub fn matches_email_shape(text: &str) -> bool {
    if text.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = text.splitn(3, '@');
    let local = parts.next().unwrap_or("");
    let Some(domain) = parts.next() else {
        return false;
    };
    if parts.next().is_some() || local.is_empty() || domain.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + ch.len_utf8() < domain.len())
}
