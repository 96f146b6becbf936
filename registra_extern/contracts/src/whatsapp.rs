#[cfg_attr(feature = "mock", mockall::automock)]
pub trait WhatsAppApiService: Send + Sync + 'static {
    /// Build a click-to-chat link that opens a conversation with the
    /// configured recipient, prefilled with the given message.
    fn chat_link(&self, message: &str) -> String;
}

#[cfg(feature = "mock")]
impl MockWhatsAppApiService {
    pub fn with_chat_link(mut self, message: String, result: String) -> Self {
        self.expect_chat_link()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| result);
        self
    }
}
