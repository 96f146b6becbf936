use std::sync::LazyLock;

use registra_models::registration::RegistrationDraft;

/// A draft that passes validation, using the default service option.
pub static BUDI: LazyLock<RegistrationDraft> = LazyLock::new(|| RegistrationDraft {
    name: "Budi Santoso".into(),
    address: "Jl. Merdeka 10".into(),
    whatsapp_number: "081234567890".into(),
    email: "budi@example.com".into(),
    service: "Pendirian PT".into(),
});

/// The composed message for [`BUDI`].
pub const BUDI_MESSAGE: &str = "*Form Pendaftaran Badan Usaha*

*Nama Lengkap:*
Budi Santoso

*Alamat Lengkap:*
Jl. Merdeka 10

*Nomor WhatsApp Aktif:*
081234567890

*Alamat Email:*
budi@example.com

*Jenis Layanan:*
Pendirian PT";

/// The percent encoded form of [`BUDI_MESSAGE`].
pub const BUDI_MESSAGE_ENCODED: &str = "*Form%20Pendaftaran%20Badan%20Usaha*%0A%0A\
*Nama%20Lengkap%3A*%0ABudi%20Santoso%0A%0A\
*Alamat%20Lengkap%3A*%0AJl.%20Merdeka%2010%0A%0A\
*Nomor%20WhatsApp%20Aktif%3A*%0A081234567890%0A%0A\
*Alamat%20Email%3A*%0Abudi%40example.com%0A%0A\
*Jenis%20Layanan%3A*%0APendirian%20PT";

/// A draft where every field is blank.
pub static EMPTY: LazyLock<RegistrationDraft> = LazyLock::new(|| RegistrationDraft {
    service: "Pendirian PT".into(),
    ..Default::default()
});
