#[derive(Clone, Debug)]
pub struct Args {
    /// Free-text research topic submitted to the service
    pub topic: String,

    /// Optional bound on the research loop depth; omitted from the request when None
    pub research_steps: Option<u32>,

    /// Base URL of the research service
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout: u64,
}
