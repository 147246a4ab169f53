use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Engines log attach/detach and skipped roles while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Contact details and action timings for the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub phone_display: &'static str,
    pub phone_uri: &'static str,
    pub social_handle: &'static str,
    pub social_url: &'static str,
    pub swiggy_url: &'static str,
    pub zomato_url: &'static str,
    pub call_delay_ms: u32,
    pub social_delay_ms: u32,
    pub delivery_delay_ms: u32,
    pub reveal_delay_ms: u32,
    pub welcome_delay_ms: u32,
}

pub const SITE: SiteConfig = SiteConfig {
    name: "Hangout Milkshakes & Waffles",
    phone_display: "+91 86880 23266",
    phone_uri: "tel:+918688023266",
    social_handle: "@hangoutworld",
    social_url: "https://instagram.com/hangoutworld",
    swiggy_url: "https://www.swiggy.com/city/hyderabad/hangout-milkshakes-and-waffles-beside-nexa-showroom-chayamina-enclave-kukatpally-rest943995",
    zomato_url: "https://www.zomato.com/hyderabad/hangout-3-kukatpally",
    call_delay_ms: 1000,
    social_delay_ms: 1200,
    delivery_delay_ms: 1500,
    reveal_delay_ms: 200,
    welcome_delay_ms: 1000,
};
