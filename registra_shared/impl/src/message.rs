use registra_models::registration::RegistrationDraft;
use registra_shared_contracts::message::RegistrationMessageService;
use registra_templates_contracts::{RegistrationMessageTemplate, TemplateService};
use registra_utils::trace_instrument;

#[derive(Debug, Clone)]
pub struct RegistrationMessageServiceImpl<Template> {
    template: Template,
}

impl<Template> RegistrationMessageServiceImpl<Template> {
    pub fn new(template: Template) -> Self {
        Self { template }
    }
}

impl<Template> RegistrationMessageService for RegistrationMessageServiceImpl<Template>
where
    Template: TemplateService,
{
    #[trace_instrument(skip(self, draft))]
    fn compose(&self, draft: &RegistrationDraft) -> anyhow::Result<String> {
        let template = RegistrationMessageTemplate {
            name: draft.name.clone(),
            address: draft.address.clone(),
            whatsapp_number: draft.whatsapp_number.clone(),
            email: draft.email.clone(),
            service: draft.service.clone(),
        };

        let message = self.template.render(&template)?;

        Ok(message.trim().into())
    }
}
