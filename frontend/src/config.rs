use log::Level;

pub const BRAND_NAME: &str = "Admox Media";

/// Window scroll offset past which the nav bar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

const DEFAULT_INSTAGRAM_URL: &str = "https://www.instagram.com/admox.media?igsh=MXV5emtmMWdzczhwaw==";
const DEFAULT_CONTACT_EMAIL: &str = "admoxmedia@gmail.com";
const DEFAULT_CONTACT_PHONE: &str = "9335196258";

pub const INSTAGRAM_HANDLE: &str = "@admox.media";

// Overridable at build time, e.g. `ADMOX_CONTACT_EMAIL=hi@example.com trunk build`
pub fn instagram_url() -> &'static str {
    option_env!("ADMOX_INSTAGRAM_URL").unwrap_or(DEFAULT_INSTAGRAM_URL)
}

pub fn contact_email() -> &'static str {
    option_env!("ADMOX_CONTACT_EMAIL").unwrap_or(DEFAULT_CONTACT_EMAIL)
}

pub fn contact_phone() -> &'static str {
    option_env!("ADMOX_CONTACT_PHONE").unwrap_or(DEFAULT_CONTACT_PHONE)
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
