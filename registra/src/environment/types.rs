use registra_core_registration_impl::{form::RegistrationForm, RegistrationFeatureServiceImpl};
use registra_extern_impl::{link::LinkOpenerServiceImpl, whatsapp::WhatsAppApiServiceImpl};
use registra_shared_impl::{
    message::RegistrationMessageServiceImpl, validation::RegistrationValidationServiceImpl,
};
use registra_templates_impl::TemplateServiceImpl;

// Template
pub type Template = TemplateServiceImpl;

// Extern
pub type WhatsAppApi = WhatsAppApiServiceImpl;
pub type LinkOpener = LinkOpenerServiceImpl;

// Shared
pub type RegistrationValidation = RegistrationValidationServiceImpl;
pub type RegistrationMessage = RegistrationMessageServiceImpl<Template>;

// Core
pub type RegistrationFeature =
    RegistrationFeatureServiceImpl<RegistrationValidation, RegistrationMessage, WhatsAppApi, LinkOpener>;
pub type RegistrationFormSession = RegistrationForm<RegistrationFeature>;
