pub mod link;
pub mod whatsapp;
