//! Network constants for the Klout SDK.

/// Default REST API base URL for Klout v2.
pub const DEFAULT_API_URL: &str = "http://api.klout.com/v2/";

/// Environment variable holding the API key (read by `KloutClient::from_env`).
pub const API_KEY_ENV: &str = "KLOUT_API_KEY";

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "KLOUT_API_URL";
