use std::sync::LazyLock;

use registra_models::{
    service::{ServiceOption, ServiceOptions},
    whatsapp::WhatsAppTargetNumber,
};

pub mod registration;

pub static SERVICE_OPTIONS: LazyLock<ServiceOptions> = LazyLock::new(|| {
    let options = [
        "Pendirian PT",
        "Pendirian PT Perorangan",
        "Pendirian CV",
        "Pendirian Yayasan",
    ]
    .into_iter()
    .map(|option| ServiceOption::try_new(option).unwrap())
    .collect();

    ServiceOptions::try_new(options).unwrap()
});

pub static TARGET_NUMBER: LazyLock<WhatsAppTargetNumber> =
    LazyLock::new(|| WhatsAppTargetNumber::try_new("6281200000000").unwrap());
