use std::sync::Arc;

use registra_config::{Config, DispatchMode};
use registra_core_registration_impl::form::RegistrationForm;
use registra_extern_impl::{
    link::{LinkOpenerServiceConfig, LinkOpenerServiceImpl},
    whatsapp::{WhatsAppApiServiceConfig, WhatsAppApiServiceImpl},
};
use registra_models::service::ServiceOptions;
use registra_shared_impl::{
    message::RegistrationMessageServiceImpl, validation::RegistrationValidationServiceImpl,
};
use registra_templates_impl::TemplateServiceImpl;
use types::{RegistrationFeature, RegistrationFormSession};

pub mod types;

/// Service configuration derived once from the loaded [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigProvider {
    services: Arc<ServiceOptions>,
    whatsapp_api_service_config: WhatsAppApiServiceConfig,
    link_opener_service_config: LinkOpenerServiceConfig,
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let services = Arc::new(config.registration.services.clone());

        // Extern
        let whatsapp_api_service_config = WhatsAppApiServiceConfig::new(
            &config.whatsapp.target_number,
            config.whatsapp.endpoint_override.clone(),
        )?;

        let link_opener_service_config = match config.dispatch.mode {
            DispatchMode::Browser => LinkOpenerServiceConfig::Browser,
            DispatchMode::Print => LinkOpenerServiceConfig::Print,
        };

        Ok(Self {
            services,
            whatsapp_api_service_config,
            link_opener_service_config,
        })
    }

    pub fn services(&self) -> Arc<ServiceOptions> {
        Arc::clone(&self.services)
    }
}

/// Builds the service graph.
#[derive(Debug, Clone)]
pub struct Provider {
    config: ConfigProvider,
}

impl Provider {
    pub fn new(config: ConfigProvider) -> Self {
        Self { config }
    }

    pub fn registration_feature(&self) -> anyhow::Result<RegistrationFeature> {
        let template = TemplateServiceImpl::new()?;

        Ok(RegistrationFeature::new(
            RegistrationValidationServiceImpl,
            RegistrationMessageServiceImpl::new(template),
            WhatsAppApiServiceImpl::new(self.config.whatsapp_api_service_config.clone()),
            LinkOpenerServiceImpl::new(self.config.link_opener_service_config),
        ))
    }

    pub fn registration_form(&self) -> anyhow::Result<RegistrationFormSession> {
        Ok(RegistrationForm::new(
            self.registration_feature()?,
            self.config.services(),
        ))
    }
}
