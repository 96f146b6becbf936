use std::sync::Arc;

use anyhow::{ensure, Context};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use registra_extern_contracts::whatsapp::WhatsAppApiService;
use registra_models::whatsapp::WhatsAppTargetNumber;
use registra_utils::trace_instrument;
use url::Url;

/// https://faq.whatsapp.com/5913398998672934
const CHAT_ENDPOINT: &str = "https://wa.me/";

/// Everything except the characters `encodeURIComponent` leaves alone.
/// Space becomes `%20`, never `+`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone)]
pub struct WhatsAppApiServiceImpl {
    config: WhatsAppApiServiceConfig,
}

impl WhatsAppApiServiceImpl {
    pub fn new(config: WhatsAppApiServiceConfig) -> Self {
        Self { config }
    }
}

#[derive(Debug, Clone)]
pub struct WhatsAppApiServiceConfig {
    chat_url: Arc<Url>,
}

impl WhatsAppApiServiceConfig {
    pub fn new(
        target_number: &WhatsAppTargetNumber,
        chat_endpoint_override: Option<Url>,
    ) -> anyhow::Result<Self> {
        let mut chat_endpoint = match chat_endpoint_override {
            Some(url) => url,
            None => CHAT_ENDPOINT.parse()?,
        };

        ensure!(
            chat_endpoint.query().is_none() && chat_endpoint.fragment().is_none(),
            "WhatsApp chat endpoint {chat_endpoint} must not have a query or fragment"
        );

        // the target number is appended as the last path segment
        if !chat_endpoint.path().ends_with('/') {
            let path = format!("{}/", chat_endpoint.path());
            chat_endpoint.set_path(&path);
        }

        let chat_url = chat_endpoint
            .join(target_number.as_str())
            .context("Failed to build WhatsApp chat URL")?;

        Ok(Self {
            chat_url: chat_url.into(),
        })
    }
}

impl WhatsAppApiService for WhatsAppApiServiceImpl {
    #[trace_instrument(skip(self, message))]
    fn chat_link(&self, message: &str) -> String {
        // `Url::set_query` would escape `'`, so the query is appended as is
        format!(
            "{}?text={}",
            self.config.chat_url,
            utf8_percent_encode(message, URI_COMPONENT)
        )
    }
}
