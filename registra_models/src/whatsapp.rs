use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

pub static WHATSAPP_TARGET_NUMBER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{6,15}$").unwrap());

/// Phone number (international format, digits only) of the account that
/// receives submitted registrations.
#[nutype(
    sanitize(trim),
    validate(regex = WHATSAPP_TARGET_NUMBER_REGEX),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Deref,
        TryFrom,
        AsRef,
        Display,
        Serialize,
        Deserialize
    )
)]
pub struct WhatsAppTargetNumber(String);
