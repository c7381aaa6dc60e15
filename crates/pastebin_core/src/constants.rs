//! Shared constants used across pastebin crates.

/// Version segment prefixed to every API path (`/v1/...`).
pub const API_VERSION: u32 = 1;

/// Default base URL of the backend API.
pub const DEFAULT_API_URL: &str = "http://localhost:5454";

/// Default base URL of the document CDN.
pub const DEFAULT_CDN_URL: &str = "http://localhost:5455";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the JSON part carried by multipart requests and responses.
pub const PAYLOAD_PART_NAME: &str = "payload";

/// Minimum number of digits in a paste or document snowflake.
pub const SNOWFLAKE_MIN_DIGITS: usize = 10;
