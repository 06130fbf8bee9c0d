use clap::{Parser, Subcommand};
use colored::*;

use crate::{run, Args, BoxError, ResearchClient, DEFAULT_ENDPOINT, REQUEST_TIMEOUT};

// ============================================================================
// TERMINAL DESIGN
// ============================================================================

const RESEARCHDESK_LOGO: &str = r#"
    ____                               __    ____            __
   / __ \___  ________  ____ ________ / /_  / __ \___  _____/ /__
  / /_/ / _ \/ ___/ _ \/ __ `/ ___/ //__ \/ / / / _ \/ ___/ //_/
 / _, _/  __(__  )  __/ /_/ / /  / /_/ / / /_/ /  __(__  ) ,<
/_/ |_|\___/____/\___/\__,_/_/   \___/_/ /_____/\___/____/_/|_|
"#;

const TAGLINE: &str = "Deep Research Reports from Your Terminal";
const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// CLI STRUCTURE
// ============================================================================

#[derive(Parser)]
#[command(name = "researchdesk")]
#[command(version = VERSION)]
#[command(about = "Client for the deep research service", long_about = None)]
#[command(disable_help_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show help information
    #[arg(short = 'h', long = "help")]
    help: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a research topic and save the rendered report
    #[command(visible_alias = "run")]
    Research {
        /// Free-text research topic
        #[arg(short, long)]
        topic: String,

        /// Optional bound on research iterations (positive integer)
        #[arg(short, long)]
        steps: Option<u32>,

        /// Base URL of the research service
        #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = REQUEST_TIMEOUT.as_secs())]
        timeout: u64,
    },

    /// Check the research service health endpoint
    Health {
        /// Base URL of the research service
        #[arg(short, long, default_value = DEFAULT_ENDPOINT)]
        endpoint: String,
    },

    /// Show version information
    Version,
}

// ============================================================================
// TERMINAL UI
// ============================================================================

struct TerminalUI;

impl TerminalUI {
    fn show_intro() {
        println!("{}", RESEARCHDESK_LOGO.bright_cyan().bold());
        println!("{}", "═".repeat(70).bright_black());
        println!("{:^70}", TAGLINE.bright_white().bold());
        println!(
            "{:^70}",
            format!("v{} • Powered by Rust 🦀", VERSION).bright_black()
        );
        println!("{}", "═".repeat(70).bright_black());
        println!();
    }

    fn show_help() {
        Self::show_intro();

        println!("{}", "USAGE:".bright_white().bold());
        println!("  researchdesk <COMMAND> [OPTIONS]");
        println!();

        println!("{}", "COMMANDS:".bright_white().bold());
        Self::print_command("research", "run", "Submit a topic and save the report");
        Self::print_command("health", "", "Check the research service health");
        Self::print_command("version", "", "Show version information");
        println!();

        println!("{}", "EXAMPLES:".bright_white().bold());
        println!("  {} Research a topic with default depth", "→".bright_green());
        println!(
            "    {}",
            "researchdesk research --topic \"rust async runtimes\"".bright_yellow()
        );
        println!();
        println!("  {} Bound the research loop to three steps", "→".bright_green());
        println!(
            "    {}",
            "researchdesk research -t \"zero-copy parsing\" -s 3".bright_yellow()
        );
        println!();
        println!("  {} Point at a remote service", "→".bright_green());
        println!(
            "    {}",
            "researchdesk health --endpoint https://research.example.com".bright_yellow()
        );
        println!();
    }

    fn print_command(name: &str, alias: &str, description: &str) {
        let alias_str = if alias.is_empty() {
            "".to_string()
        } else {
            format!(" ({})", alias).bright_black().to_string()
        };

        println!(
            "  {}{:<20} {}",
            name.bright_cyan().bold(),
            alias_str,
            description
        );
    }

    fn print_section(title: &str) {
        println!();
        println!("{}", format!("┌─ {} ", title).bright_white().bold());
        println!("{}", "│".bright_black());
    }

    fn print_section_end() {
        println!("{}", "└─".bright_black());
    }

    fn print_success(message: &str) {
        println!("  {} {}", "✓".bright_green().bold(), message.bright_white());
    }

    fn print_error(message: &str) {
        eprintln!("  {} {}", "✗".bright_red().bold(), message.bright_red());
    }

    fn print_info(message: &str) {
        println!("  {} {}", "ℹ".bright_blue(), message);
    }
}

// ============================================================================
// CLI EXECUTION
// ============================================================================

pub struct ResearchDeskCLI;

impl ResearchDeskCLI {
    pub async fn run() -> Result<(), BoxError> {
        let cli = Cli::parse();

        if cli.help {
            TerminalUI::show_help();
            return Ok(());
        }

        TerminalUI::show_intro();

        match cli.command {
            None => {
                TerminalUI::show_help();
            }
            Some(Commands::Research {
                topic,
                steps,
                endpoint,
                timeout,
            }) => {
                Self::cmd_research(topic, steps, endpoint, timeout).await?;
            }
            Some(Commands::Health { endpoint }) => {
                Self::cmd_health(endpoint).await?;
            }
            Some(Commands::Version) => {
                Self::cmd_version();
            }
        }

        Ok(())
    }

    async fn cmd_research(
        topic: String,
        steps: Option<u32>,
        endpoint: String,
        timeout: u64,
    ) -> Result<(), BoxError> {
        TerminalUI::print_section("RESEARCH REQUEST");

        TerminalUI::print_info(&format!("Topic: {}", topic));
        match steps {
            Some(steps) => TerminalUI::print_info(&format!("Research steps: {}", steps)),
            None => TerminalUI::print_info("Research steps: service default"),
        }
        TerminalUI::print_info(&format!("Endpoint: {}", endpoint));
        TerminalUI::print_info(&format!("Timeout: {}s", timeout));

        let args = Args {
            topic,
            research_steps: steps,
            endpoint,
            timeout,
        };

        match run(args).await {
            Ok(output_dir) => {
                TerminalUI::print_success(&format!("Report saved: {}", output_dir));
                TerminalUI::print_info("Open research_report.html in a browser to read it");
            }
            Err(err) => {
                TerminalUI::print_error(&format!("Research failed: {}", err));
                return Err(err);
            }
        }

        TerminalUI::print_section_end();

        Ok(())
    }

    async fn cmd_health(endpoint: String) -> Result<(), BoxError> {
        TerminalUI::print_section("SERVICE HEALTH");

        let client = ResearchClient::new(&endpoint, std::time::Duration::from_secs(10))?;
        match client.health().await {
            Ok(health) => {
                TerminalUI::print_success(&format!("Status: {}", health.status));
                if let Some(provider) = health.provider {
                    TerminalUI::print_info(&format!("Provider: {}", provider));
                }
                if let Some(model) = health.model {
                    TerminalUI::print_info(&format!("Model: {}", model));
                }
                if let Some(keys) = health.api_key_status {
                    TerminalUI::print_info(&format!("API key: {}", keys));
                }
            }
            Err(err) => {
                TerminalUI::print_error(&format!("Health check failed: {}", err));
                return Err(Box::new(err));
            }
        }

        TerminalUI::print_section_end();

        Ok(())
    }

    fn cmd_version() {
        println!("{} v{}", "ResearchDesk".bright_cyan().bold(), VERSION);
        println!("Rust client for the deep research service");
    }
}
