use std::sync::Arc;

use registra_core_registration_contracts::{RegistrationFeatureService, RegistrationSubmitError};
use registra_models::{
    registration::{RegistrationDraft, RegistrationField},
    service::{ServiceOption, ServiceOptions},
};
use registra_shared_contracts::validation::RegistrationValidationError;
use thiserror::Error;

/// State of one registration form session: the draft being edited and the
/// validation error currently on display.
///
/// The draft is kept after a successful submission, so submitting again
/// dispatches the same registration.
#[derive(Debug)]
pub struct RegistrationForm<Registration> {
    registration: Registration,
    services: Arc<ServiceOptions>,
    draft: RegistrationDraft,
    error: Option<RegistrationValidationError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown service option {0:?}.")]
pub struct UnknownServiceOption(pub String);

impl<Registration> RegistrationForm<Registration>
where
    Registration: RegistrationFeatureService,
{
    pub fn new(registration: Registration, services: Arc<ServiceOptions>) -> Self {
        Self {
            registration,
            draft: RegistrationDraft::new(&services),
            services,
            error: None,
        }
    }

    pub fn draft(&self) -> &RegistrationDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<RegistrationValidationError> {
        self.error
    }

    pub fn services(&self) -> &ServiceOptions {
        &self.services
    }

    /// Replace the value of one field.
    ///
    /// Text fields accept any value. The service field only accepts a
    /// configured option, see [`Self::select_service`].
    pub fn set_field(
        &mut self,
        field: RegistrationField,
        value: impl Into<String>,
    ) -> Result<(), UnknownServiceOption> {
        match field {
            RegistrationField::Service => {
                let choice: String = value.into();
                self.select_service(&choice).map(|_| ())
            }
            _ => {
                self.draft.set_field(field, value);
                Ok(())
            }
        }
    }

    /// Select a service by its text or 1-based position. Unknown choices
    /// leave the draft untouched.
    pub fn select_service(&mut self, choice: &str) -> Result<ServiceOption, UnknownServiceOption> {
        let option = self
            .services
            .find(choice)
            .cloned()
            .ok_or_else(|| UnknownServiceOption(choice.into()))?;
        self.draft.set_field(RegistrationField::Service, option.as_str());
        Ok(option)
    }

    /// Submit the current draft.
    ///
    /// The previous error is cleared first and replaced by the new
    /// validation error, if any.
    pub fn submit(&mut self) -> Result<String, RegistrationSubmitError> {
        self.error = None;

        let result = self.registration.submit(&self.draft);
        if let Err(RegistrationSubmitError::Validation(err)) = &result {
            self.error = Some(*err);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;
    use registra_core_registration_contracts::MockRegistrationFeatureService;
    use registra_demo::{
        registration::{BUDI, EMPTY},
        SERVICE_OPTIONS,
    };
    use registra_utils::assert_matches;

    use super::*;

    const LINK: &str = "https://wa.me/6281200000000?text=message";

    fn make_sut(
        registration: MockRegistrationFeatureService,
    ) -> RegistrationForm<MockRegistrationFeatureService> {
        RegistrationForm::new(registration, Arc::new(SERVICE_OPTIONS.clone()))
    }

    fn fill(sut: &mut RegistrationForm<MockRegistrationFeatureService>, draft: &RegistrationDraft) {
        for field in RegistrationField::ALL {
            sut.set_field(field, draft.get(field)).unwrap();
        }
    }

    #[test]
    fn new_form() {
        let sut = make_sut(MockRegistrationFeatureService::new());
        assert_eq!(sut.draft(), &*EMPTY);
        assert_eq!(sut.error(), None);
    }

    #[test]
    fn set_field() {
        // Arrange
        let mut sut = make_sut(MockRegistrationFeatureService::new());

        // Act
        sut.set_field(RegistrationField::Name, "Budi Santoso").unwrap();
        sut.set_field(RegistrationField::Email, "budi@").unwrap();

        // Assert
        assert_eq!(
            sut.draft(),
            &RegistrationDraft {
                name: "Budi Santoso".into(),
                email: "budi@".into(),
                ..EMPTY.clone()
            }
        );
    }

    #[test]
    fn select_service() {
        // Arrange
        let mut sut = make_sut(MockRegistrationFeatureService::new());

        // Act
        let by_position = sut.select_service("3").unwrap();
        let by_name = sut.select_service("Pendirian Yayasan").unwrap();

        // Assert
        assert_eq!(by_position.as_str(), "Pendirian CV");
        assert_eq!(by_name.as_str(), "Pendirian Yayasan");
        assert_eq!(sut.draft().service, "Pendirian Yayasan");
    }

    #[test]
    fn select_unknown_service() {
        // Arrange
        let mut sut = make_sut(MockRegistrationFeatureService::new());

        // Act
        let result = sut.select_service("Perubahan Akta");

        // Assert
        assert_eq!(result, Err(UnknownServiceOption("Perubahan Akta".into())));
        assert_eq!(sut.draft().service, "Pendirian PT");
    }

    #[test]
    fn set_service_field_checks_options() {
        // Arrange
        let mut sut = make_sut(MockRegistrationFeatureService::new());

        // Act
        let known = sut.set_field(RegistrationField::Service, "Pendirian CV");
        let after_known = sut.draft().service.clone();
        let unknown = sut.set_field(RegistrationField::Service, "Perubahan Akta");

        // Assert
        assert_eq!(known, Ok(()));
        assert_eq!(after_known, "Pendirian CV");
        assert_eq!(unknown, Err(UnknownServiceOption("Perubahan Akta".into())));
        assert_eq!(sut.draft().service, "Pendirian CV");
    }

    #[test]
    fn submit_ok_keeps_draft() {
        // Arrange
        let mut registration = MockRegistrationFeatureService::new();
        registration
            .expect_submit()
            .times(2)
            .with(mockall::predicate::eq(BUDI.clone()))
            .returning(|_| Ok(LINK.into()));
        let mut sut = make_sut(registration);
        fill(&mut sut, &BUDI);

        // Act
        let first = sut.submit();
        let second = sut.submit();

        // Assert
        assert_eq!(first.unwrap(), LINK);
        assert_eq!(second.unwrap(), LINK);
        assert_eq!(sut.draft(), &*BUDI);
        assert_eq!(sut.error(), None);
    }

    #[test]
    fn submit_invalid_shows_error() {
        // Arrange
        let registration = MockRegistrationFeatureService::new().with_submit(
            EMPTY.clone(),
            Err(RegistrationValidationError::MissingRequiredField.into()),
        );
        let mut sut = make_sut(registration);

        // Act
        let result = sut.submit();

        // Assert
        assert_matches!(
            result,
            Err(RegistrationSubmitError::Validation(
                RegistrationValidationError::MissingRequiredField
            ))
        );
        assert_eq!(
            sut.error(),
            Some(RegistrationValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn submit_replaces_previous_error() {
        // Arrange
        let invalid_phone = RegistrationDraft {
            whatsapp_number: "12345".into(),
            ..BUDI.clone()
        };
        let mut registration = MockRegistrationFeatureService::new();
        registration
            .expect_submit()
            .once()
            .with(mockall::predicate::eq(EMPTY.clone()))
            .return_once(|_| Err(RegistrationValidationError::MissingRequiredField.into()));
        registration
            .expect_submit()
            .once()
            .with(mockall::predicate::eq(invalid_phone.clone()))
            .return_once(|_| Err(RegistrationValidationError::InvalidPhoneFormat.into()));
        let mut sut = make_sut(registration);

        // Act
        let _ = sut.submit();
        fill(&mut sut, &invalid_phone);
        let _ = sut.submit();

        // Assert
        assert_eq!(
            sut.error(),
            Some(RegistrationValidationError::InvalidPhoneFormat)
        );
    }

    #[test]
    fn submit_valid_clears_error() {
        // Arrange
        let mut registration = MockRegistrationFeatureService::new();
        registration
            .expect_submit()
            .once()
            .with(mockall::predicate::eq(EMPTY.clone()))
            .return_once(|_| Err(RegistrationValidationError::MissingRequiredField.into()));
        registration
            .expect_submit()
            .once()
            .with(mockall::predicate::eq(BUDI.clone()))
            .return_once(|_| Ok(LINK.into()));
        let mut sut = make_sut(registration);

        // Act
        let _ = sut.submit();
        let error_before = sut.error();
        fill(&mut sut, &BUDI);
        let result = sut.submit();

        // Assert
        assert_eq!(
            error_before,
            Some(RegistrationValidationError::MissingRequiredField)
        );
        assert_eq!(result.unwrap(), LINK);
        assert_eq!(sut.error(), None);
    }

    #[test]
    fn editing_keeps_error_until_next_submit() {
        // Arrange
        let registration = MockRegistrationFeatureService::new().with_submit(
            EMPTY.clone(),
            Err(RegistrationValidationError::MissingRequiredField.into()),
        );
        let mut sut = make_sut(registration);
        let _ = sut.submit();

        // Act
        sut.set_field(RegistrationField::Name, "Budi Santoso").unwrap();

        // Assert
        assert_eq!(
            sut.error(),
            Some(RegistrationValidationError::MissingRequiredField)
        );
    }

    #[test]
    fn submit_other_error_shows_nothing() {
        // Arrange
        let mut registration = MockRegistrationFeatureService::new();
        registration
            .expect_submit()
            .once()
            .return_once(|_| Err(anyhow!("template missing").into()));
        let mut sut = make_sut(registration);

        // Act
        let result = sut.submit();

        // Assert
        assert_matches!(result, Err(RegistrationSubmitError::Other(_)));
        assert_eq!(sut.error(), None);
    }
}
