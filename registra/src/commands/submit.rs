use anyhow::anyhow;
use clap::Args;
use registra_config::{Config, DispatchMode};
use registra_core_registration_contracts::RegistrationSubmitError;
use registra_models::registration::RegistrationField;
use tracing::info;

use crate::environment::{ConfigProvider, Provider};

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Nama Lengkap
    #[arg(long)]
    name: String,
    /// Alamat Lengkap
    #[arg(long)]
    address: String,
    /// Nomor WhatsApp Aktif (10-15 digits)
    #[arg(long, visible_alias = "whatsapp")]
    whatsapp_number: String,
    /// Alamat Email
    #[arg(long)]
    email: String,
    /// Service option, given by its text or 1-based position [default: first option]
    #[arg(long)]
    service: Option<String>,
    /// Print the chat link instead of opening it in the browser
    #[arg(long)]
    print: bool,
}

impl SubmitCommand {
    pub fn invoke(self, mut config: Config) -> anyhow::Result<()> {
        if self.print {
            config.dispatch.mode = DispatchMode::Print;
        }

        let provider = Provider::new(ConfigProvider::new(&config)?);
        let mut form = provider.registration_form()?;

        form.set_field(RegistrationField::Name, self.name)?;
        form.set_field(RegistrationField::Address, self.address)?;
        form.set_field(RegistrationField::WhatsAppNumber, self.whatsapp_number)?;
        form.set_field(RegistrationField::Email, self.email)?;
        if let Some(service) = self.service {
            form.set_field(RegistrationField::Service, service)?;
        }

        match form.submit() {
            Ok(_) => {
                info!("Registration submitted");
                Ok(())
            }
            Err(RegistrationSubmitError::Validation(err)) => Err(anyhow!(err)),
            Err(RegistrationSubmitError::Other(err)) => {
                Err(err.context("Failed to submit registration"))
            }
        }
    }
}
