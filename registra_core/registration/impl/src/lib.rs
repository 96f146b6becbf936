use registra_core_registration_contracts::{RegistrationFeatureService, RegistrationSubmitError};
use registra_extern_contracts::{link::LinkOpenerService, whatsapp::WhatsAppApiService};
use registra_models::registration::RegistrationDraft;
use registra_shared_contracts::{
    message::RegistrationMessageService, validation::RegistrationValidationService,
};
use registra_utils::trace_instrument;
use tracing::{debug, info};

pub mod form;

#[derive(Debug, Clone)]
pub struct RegistrationFeatureServiceImpl<Validation, Message, WhatsAppApi, LinkOpener> {
    validation: Validation,
    message: Message,
    whatsapp_api: WhatsAppApi,
    link_opener: LinkOpener,
}

impl<Validation, Message, WhatsAppApi, LinkOpener>
    RegistrationFeatureServiceImpl<Validation, Message, WhatsAppApi, LinkOpener>
{
    pub fn new(
        validation: Validation,
        message: Message,
        whatsapp_api: WhatsAppApi,
        link_opener: LinkOpener,
    ) -> Self {
        Self {
            validation,
            message,
            whatsapp_api,
            link_opener,
        }
    }
}

impl<Validation, Message, WhatsAppApi, LinkOpener> RegistrationFeatureService
    for RegistrationFeatureServiceImpl<Validation, Message, WhatsAppApi, LinkOpener>
where
    Validation: RegistrationValidationService,
    Message: RegistrationMessageService,
    WhatsAppApi: WhatsAppApiService,
    LinkOpener: LinkOpenerService,
{
    #[trace_instrument(skip(self, draft))]
    fn submit(&self, draft: &RegistrationDraft) -> Result<String, RegistrationSubmitError> {
        if let Err(err) = self.validation.validate(draft) {
            debug!(?err, "Registration rejected");
            return Err(err.into());
        }

        let message = self.message.compose(draft)?;
        let link = self.whatsapp_api.chat_link(&message);

        info!(service = %draft.service, "Dispatching registration");
        self.link_opener.open(&link);

        Ok(link)
    }
}
