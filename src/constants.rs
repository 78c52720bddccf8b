//! Application constants and branding

pub const APP_NAME: &str = "Sprout Travel";
pub const APP_TITLE: &str = "StingoTech Sprout Travel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CONTACT_EMAIL: &str = "Pesterpestingo@gmail.com";
pub const FOOTER_BRAND: &str = "StingoTech Sprout";
pub const FOOTER_CREDIT: &str = "Design by Pestingo";
pub const EMPTY_LIST_MESSAGE: &str =
    "No travel plans found. Start planning your next adventure!";
