use registra_models::registration::RegistrationDraft;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait RegistrationMessageService: Send + Sync + 'static {
    /// Render a draft into the text of the outgoing WhatsApp message.
    ///
    /// Field values are inserted untrimmed. Only the message as a whole is
    /// stripped of surrounding whitespace.
    fn compose(&self, draft: &RegistrationDraft) -> anyhow::Result<String>;
}

#[cfg(feature = "mock")]
impl MockRegistrationMessageService {
    pub fn with_compose(mut self, draft: RegistrationDraft, message: String) -> Self {
        self.expect_compose()
            .once()
            .with(mockall::predicate::eq(draft))
            .return_once(move |_| Ok(message));
        self
    }
}
