use std::sync::LazyLock;

use regex::Regex;
use registra_models::registration::{RegistrationDraft, RegistrationField};
use registra_shared_contracts::validation::{
    RegistrationValidationError, RegistrationValidationService,
};
use registra_utils::trace_instrument;

pub static WHATSAPP_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{10,15}$").unwrap());

/// ECMAScript whitespace, which is what the browser form trims and what `\s`
/// matches there. Unlike Unicode `White_Space` it includes U+FEFF and excludes
/// U+0085.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\f\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});

fn is_blank(value: &str) -> bool {
    value
        .chars()
        .all(|c| c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}'))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RegistrationValidationServiceImpl;

impl RegistrationValidationService for RegistrationValidationServiceImpl {
    #[trace_instrument(skip(self, draft))]
    fn validate(&self, draft: &RegistrationDraft) -> Result<(), RegistrationValidationError> {
        if RegistrationField::REQUIRED
            .into_iter()
            .any(|field| is_blank(draft.get(field)))
        {
            return Err(RegistrationValidationError::MissingRequiredField);
        }

        // checked as stored, surrounding whitespace is a format error
        if !WHATSAPP_NUMBER_REGEX.is_match(&draft.whatsapp_number) {
            return Err(RegistrationValidationError::InvalidPhoneFormat);
        }

        if !EMAIL_REGEX.is_match(&draft.email) {
            return Err(RegistrationValidationError::InvalidEmailFormat);
        }

        Ok(())
    }
}
