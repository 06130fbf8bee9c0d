use researchdesk::cli::ResearchDeskCLI;
use researchdesk::BoxError;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    ResearchDeskCLI::run().await
}
