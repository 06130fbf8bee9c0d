use std::time::Duration;

/// Base URL of the research service when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8080";

pub const CONDUCT_PATH: &str = "/api/research/conduct";
pub const HEALTH_PATH: &str = "/api/research/health";

/// Research runs can take a long time; the service is given five minutes
/// before the request is abandoned.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub const REPORT_FILE_NAME: &str = "research_report.md";
pub const REPORT_PAGE_NAME: &str = "research_report.html";
pub const METADATA_FILE_NAME: &str = "research_metadata.json";
