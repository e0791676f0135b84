use chrono::DateTime;

pub const NAME: &str = "Devensh Sain";
pub const TAGLINE: &str =
    "Creative Developer & Designer crafting digital experiences that inspire and engage";
pub const EMAIL: &str = "hello@devensh.dev";
pub const GITHUB: &str = "https://github.com/devenshsain";
pub const LINKEDIN: &str = "https://linkedin.com/in/devenshsain";
pub const RESUME: &str = "/resume.pdf";
pub const LOCATION: &str = "Jaipur, India";

/// RFC 3339 timestamp stamped by build.rs.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

/// Human readable build date, or the raw value if it isn't RFC 3339.
pub fn format_build_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %e, %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
