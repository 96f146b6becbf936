use std::io::{BufRead, Write};

use registra_config::Config;
use registra_core_registration_contracts::{RegistrationFeatureService, RegistrationSubmitError};
use registra_core_registration_impl::form::RegistrationForm;
use registra_models::{
    registration::RegistrationField, FORM_SUBMIT_LABEL, FORM_SUBTITLE, FORM_TITLE,
};
use tracing::error;

use crate::environment::{ConfigProvider, Provider};

const HELP: &str = "\
Commands:
  name <value>        set Nama Lengkap
  address <value>     set Alamat Lengkap (write \\n for a line break)
  whatsapp <value>    set Nomor WhatsApp Aktif
  email <value>       set Alamat Email
  service <choice>    select a service by number or name
  services            list the available services
  show                show the current form
  submit              validate and send the form via WhatsApp
  help                show this help
  quit                leave the form";

pub fn invoke(config: Config) -> anyhow::Result<()> {
    let provider = Provider::new(ConfigProvider::new(&config)?);
    let mut form = provider.registration_form()?;

    run(&mut form, std::io::stdin().lock(), std::io::stdout().lock())
}

/// Drive a form session, reading one command per line until `quit` or end of
/// input.
pub fn run<Registration>(
    form: &mut RegistrationForm<Registration>,
    input: impl BufRead,
    mut output: impl Write,
) -> anyhow::Result<()>
where
    Registration: RegistrationFeatureService,
{
    writeln!(output, "{FORM_TITLE}\n{FORM_SUBTITLE}\n\n{HELP}")?;

    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(output)?;
            break;
        };

        let line = line.trim_end_matches(['\r', '\n']);
        let (command, value) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => writeln!(output, "{HELP}")?,
            "show" => show(form, &mut output)?,
            "services" => list_services(form, &mut output)?,
            "submit" => match form.submit() {
                Ok(_) => {}
                Err(RegistrationSubmitError::Validation(err)) => writeln!(output, "! {err}")?,
                Err(RegistrationSubmitError::Other(err)) => {
                    error!("Failed to submit registration: {err:#}");
                    writeln!(output, "! Failed to submit the form.")?;
                }
            },
            command => match command.parse::<RegistrationField>() {
                Ok(RegistrationField::Service) => match form.select_service(value) {
                    Ok(option) => {
                        writeln!(output, "{}: {option}", RegistrationField::Service.label())?
                    }
                    Err(err) => writeln!(output, "{err}")?,
                },
                Ok(field) => {
                    let value = if field.is_multiline() {
                        value.replace("\\n", "\n")
                    } else {
                        value.into()
                    };
                    form.set_field(field, value)?;
                }
                Err(err) => writeln!(output, "{err} Type `help` for a list of commands.")?,
            },
        }
    }

    Ok(())
}

fn show<Registration>(
    form: &RegistrationForm<Registration>,
    output: &mut impl Write,
) -> anyhow::Result<()>
where
    Registration: RegistrationFeatureService,
{
    let draft = form.draft();
    for field in RegistrationField::ALL {
        let value = draft.get(field);
        let hint = match field.placeholder() {
            Some(placeholder) if value.is_empty() => format!("({placeholder})"),
            _ => value.replace('\n', "\n    "),
        };
        writeln!(output, "{}:\n    {hint}", field.label())?;
    }

    if let Some(err) = form.error() {
        writeln!(output, "! {err}")?;
    }

    writeln!(output, "[{FORM_SUBMIT_LABEL}: submit]")?;
    Ok(())
}

fn list_services<Registration>(
    form: &RegistrationForm<Registration>,
    output: &mut impl Write,
) -> anyhow::Result<()>
where
    Registration: RegistrationFeatureService,
{
    let selected = &form.draft().service;
    for (idx, option) in form.services().iter().enumerate() {
        let marker = if option.as_str() == selected { '*' } else { ' ' };
        writeln!(output, "{marker} {}. {option}", idx + 1)?;
    }
    Ok(())
}
