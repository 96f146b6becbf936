use registra_models::registration::RegistrationDraft;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RegistrationValidationService: Send + Sync + 'static {
    /// Check a draft before it is submitted.
    ///
    /// The checks run in a fixed order and only the first failure is
    /// reported:
    /// 1. name, address, WhatsApp number and email must not be blank
    /// 2. the WhatsApp number must consist of 10 to 15 digits
    /// 3. the email address must look like `local@domain.tld`
    ///
    /// The selected service is never checked.
    fn validate(&self, draft: &RegistrationDraft) -> Result<(), RegistrationValidationError>;
}

/// The reason a draft was rejected. The message is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationValidationError {
    #[error("Harap isi semua kolom yang wajib diisi.")]
    MissingRequiredField,
    #[error("Format nomor WhatsApp tidak valid. Harap masukkan hanya angka, 10-15 digit.")]
    InvalidPhoneFormat,
    #[error("Format alamat email tidak valid.")]
    InvalidEmailFormat,
}

#[cfg(feature = "mock")]
impl MockRegistrationValidationService {
    pub fn with_validate(
        mut self,
        draft: RegistrationDraft,
        result: Result<(), RegistrationValidationError>,
    ) -> Self {
        self.expect_validate()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| result);
        self
    }
}
