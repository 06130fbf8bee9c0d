pub mod args;
pub mod cli;
mod client;
mod constants;
mod render;
mod reporting;

pub use args::Args;
pub use client::{
    parse_research_steps, BoxError, ConductRequest, ResearchClient, ResearchError, ServiceHealth,
};
pub use constants::{DEFAULT_ENDPOINT, REPORT_FILE_NAME, REQUEST_TIMEOUT};
pub use render::{fallback_page, render_fragment, render_report_page};
pub use reporting::{default_output_root, write_outputs};

use std::time::Duration;

/// Runs one research request end to end: submit the topic, render the
/// returned markdown, and write the report artifacts. Returns the output
/// directory.
pub async fn run(args: Args) -> Result<String, BoxError> {
    let client = ResearchClient::new(&args.endpoint, Duration::from_secs(args.timeout))?;

    eprintln!("[*] Submitting research request");
    eprintln!("    - Topic: {}", args.topic);
    match args.research_steps {
        Some(steps) => eprintln!("    - Research steps: {}", steps),
        None => eprintln!("    - Research steps: service default"),
    }
    eprintln!("    - Endpoint: {}", client.endpoint());
    eprintln!("    - Timeout: {}s", args.timeout);

    let report = client.conduct(&args.topic, args.research_steps).await?;

    let output_dir = reporting::write_outputs(
        &args.topic,
        args.research_steps,
        &report,
        &reporting::default_output_root(),
    )?;

    eprintln!(
        "[*] Research complete. Report in: {} ({} chars)",
        output_dir,
        report.len()
    );

    Ok(output_dir)
}
