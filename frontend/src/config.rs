
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const BETA_ENDPOINT: &str = "/api/beta";
pub const NEWSLETTER_ENDPOINT: &str = "/api/newsletter";

pub const COMMUNITY_URL: &str = "https://discord.gg/st3-beta";

/// How long the newsletter success state stays up before the form clears.
pub const NEWSLETTER_RESET_MS: u32 = 3_000;
