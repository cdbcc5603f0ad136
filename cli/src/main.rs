use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mem_core::config::{DEFAULT_BASE_URL, ENV_API_KEY, ENV_BASE_URL, ENV_TIMEOUT_SECS};
use mem_core::{ClientConfig, CreateMem, MemClient, MemResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_MEM: &str = "# Test Title\n#PyMem #Test\nHere is some text";
const SAMPLE_APPEND: &str = "More text in Mem!";

#[derive(Parser)]
#[command(name = "mem")]
#[command(about = "Create and append mems on mem.ai")]
#[command(version)]
struct Cli {
    /// API root to talk to
    #[arg(long, global = true, env = ENV_BASE_URL, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Whole-request timeout in seconds (none by default)
    #[arg(long, global = true, env = ENV_TIMEOUT_SECS)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create a sample mem and append a line to it
    Demo,
    /// Create a mem; its id is appended to it afterwards
    Create {
        /// Mem content, mem.ai markdown allowed
        content: String,

        /// Mark the mem as already read
        #[arg(long)]
        read: bool,

        /// Archive the mem right away
        #[arg(long)]
        archived: bool,
    },
    /// Append content to an existing mem
    Append {
        mem_id: String,
        content: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut client = MemClient::from_config(config(&cli)?);

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => {
            let created = client.create_mem(&CreateMem::new(SAMPLE_MEM))?;
            if report(&created) {
                client.append_to_mem(created.mem_id(), SAMPLE_APPEND)?;
            }
        }
        Command::Create {
            content,
            read,
            archived,
        } => {
            let input = CreateMem::new(content).read(read).archived(archived);
            report(&client.create_mem(&input)?);
        }
        Command::Append { mem_id, content } => {
            report(&client.append_to_mem(&mem_id, &content)?);
        }
    }
    Ok(())
}

fn config(cli: &Cli) -> Result<ClientConfig> {
    let api_key = match std::env::var(ENV_API_KEY) {
        Ok(key) if !key.trim().is_empty() => key,
        _ => rpassword::prompt_password("Input Mem API Key: ").context("reading API key")?,
    };
    let mut config = ClientConfig::new(api_key).with_base_url(cli.base_url.clone());
    if let Some(secs) = cli.timeout_secs.filter(|s| *s > 0) {
        config = config.with_timeout(Duration::from_secs(secs));
    }
    Ok(config)
}

/// Print the outcome; returns whether the call succeeded.
fn report(result: &MemResult) -> bool {
    if result.is_success() {
        println!("MemID: {}", result.mem_id());
        println!("MemURL: {}", result.mem_url());
        true
    } else {
        println!("Request Error ({}): {}", result.status_code(), result.error_message());
        false
    }
}
