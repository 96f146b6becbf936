#[cfg_attr(feature = "mock", mockall::automock)]
pub trait LinkOpenerService: Send + Sync + 'static {
    /// Open the link in a new, unlinked browsing context.
    ///
    /// Fire and forget: the caller is never told whether the link was
    /// actually opened.
    fn open(&self, link: &str);
}

#[cfg(feature = "mock")]
impl MockLinkOpenerService {
    pub fn with_open(mut self, link: String) -> Self {
        self.expect_open()
            .once()
            .with(mockall::predicate::eq(link))
            .return_once(|_| ());
        self
    }

    pub fn with_open_times(mut self, link: String, times: usize) -> Self {
        self.expect_open()
            .times(times)
            .with(mockall::predicate::eq(link))
            .returning(|_| ());
        self
    }
}
