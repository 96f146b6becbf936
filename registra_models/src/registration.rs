use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::service::ServiceOptions;

/// The values currently entered into the registration form.
///
/// All fields are free-form while editing. Nothing is enforced until the
/// draft is submitted and validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub address: String,
    pub whatsapp_number: String,
    pub email: String,
    pub service: String,
}

impl RegistrationDraft {
    /// Create an empty draft with the default service option preselected.
    pub fn new(services: &ServiceOptions) -> Self {
        Self {
            service: services.default_option().to_string(),
            ..Default::default()
        }
    }

    pub fn get(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Address => &self.address,
            RegistrationField::WhatsAppNumber => &self.whatsapp_number,
            RegistrationField::Email => &self.email,
            RegistrationField::Service => &self.service,
        }
    }

    /// Replace the value of exactly one field.
    pub fn set_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        let slot = match field {
            RegistrationField::Name => &mut self.name,
            RegistrationField::Address => &mut self.address,
            RegistrationField::WhatsAppNumber => &mut self.whatsapp_number,
            RegistrationField::Email => &mut self.email,
            RegistrationField::Service => &mut self.service,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationField {
    Name,
    Address,
    WhatsAppNumber,
    Email,
    Service,
}

impl RegistrationField {
    /// All fields in form order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::Address,
        Self::WhatsAppNumber,
        Self::Email,
        Self::Service,
    ];

    /// Fields that must not be blank on submission.
    pub const REQUIRED: [Self; 4] = [Self::Name, Self::Address, Self::WhatsAppNumber, Self::Email];

    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Address => "address",
            Self::WhatsAppNumber => "whatsappNumber",
            Self::Email => "email",
            Self::Service => "service",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Nama Lengkap",
            Self::Address => "Alamat Lengkap",
            Self::WhatsAppNumber => "Nomor WhatsApp Aktif",
            Self::Email => "Alamat Email",
            Self::Service => "Pilih Layanan",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::Name => Some("Contoh: Budi Santoso"),
            Self::Address => {
                Some("Contoh: Jl. Merdeka No. 10, Jakarta Pusat, DKI Jakarta, 10110")
            }
            Self::WhatsAppNumber => Some("Contoh: 081234567890"),
            Self::Email => Some("Contoh: budi.santoso@example.com"),
            Self::Service => None,
        }
    }

    pub fn is_required(self) -> bool {
        self != Self::Service
    }

    pub fn is_multiline(self) -> bool {
        self == Self::Address
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field {0:?}.")]
pub struct UnknownRegistrationField(pub String);

impl FromStr for RegistrationField {
    type Err = UnknownRegistrationField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            "whatsappnumber" | "whatsapp" | "phone" | "wa" => Ok(Self::WhatsAppNumber),
            "email" => Ok(Self::Email),
            "service" => Ok(Self::Service),
            _ => Err(UnknownRegistrationField(s.into())),
        }
    }
}
