use registra_models::registration::RegistrationDraft;
use registra_shared_contracts::validation::RegistrationValidationError;
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RegistrationFeatureService: Send + Sync + 'static {
    /// Submit a registration.
    ///
    /// Validates the draft, composes the WhatsApp message and opens the
    /// prefilled chat link. Returns the link that was dispatched. The draft
    /// itself is never modified.
    fn submit(&self, draft: &RegistrationDraft) -> Result<String, RegistrationSubmitError>;
}

#[derive(Debug, Error)]
pub enum RegistrationSubmitError {
    #[error(transparent)]
    Validation(#[from] RegistrationValidationError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockRegistrationFeatureService {
    pub fn with_submit(
        mut self,
        draft: RegistrationDraft,
        result: Result<String, RegistrationSubmitError>,
    ) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| result);
        self
    }
}
