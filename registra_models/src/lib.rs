pub mod registration;
pub mod service;
pub mod whatsapp;

/// Headline of the registration form.
pub const FORM_TITLE: &str = "Form Registrasi";

/// Text shown below the form headline.
pub const FORM_SUBTITLE: &str =
    "Isi data di bawah ini untuk memulai proses pendirian badan usaha Anda.";

/// Label of the submit action.
pub const FORM_SUBMIT_LABEL: &str = "Kirim Form via WhatsApp";
