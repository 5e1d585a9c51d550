mod error;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use error::Error;
use pwned_client::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, PwnedClient};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwned-check")]
#[command(about = "Check passwords and domains against Have I Been Pwned")]
struct Args {
    /// Base URL of the breach API
    #[arg(long, env = "PWNED_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// User agent sent with every request
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether a password appears in a known breach
    Password {
        /// Read the password from the first line of stdin
        #[arg(long)]
        stdin: bool,

        password: Option<String>,
    },
    /// List every known breach
    Breaches,
    /// List breaches affecting a domain
    Domain { name: String },
}

fn main() -> Result<ExitCode, Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::default().base_url(args.base_url).user_agent(args.user_agent);
    if let Some(secs) = args.timeout_secs {
        config = config.timeout(Duration::from_secs(secs));
    }
    let client = PwnedClient::from_config(config)?;
    tracing::debug!(base_url = %client.base_url(), "client ready");

    let mut out = io::stdout().lock();
    match args.command {
        Command::Password { stdin, password } => {
            let password = read_password(stdin, password)?;
            match client.compromised_count(&password)? {
                Some(count) => {
                    writeln!(out, "compromised (seen {count} times)")?;
                    return Ok(ExitCode::FAILURE);
                }
                None => writeln!(out, "not found")?,
            }
        }
        Command::Breaches => {
            for line in client.breaches()? {
                writeln!(out, "{line}")?;
            }
        }
        Command::Domain { name } => match client.breaches_by_domain(&name) {
            Ok(lines) => {
                for line in lines {
                    writeln!(out, "{line}")?;
                }
            }
            Err(e) if e.is_not_found() => writeln!(out, "no breaches recorded for {name}")?,
            Err(e) => return Err(e.into()),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn read_password(stdin: bool, password: Option<String>) -> Result<String, Error> {
    match (stdin, password) {
        (true, Some(_)) => Err(Error::InvalidArgs),
        (false, Some(password)) => Ok(password),
        (false, None) => Err(Error::MissingPassword),
        (true, None) => {
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            let password = line.trim_end_matches(['\r', '\n']);
            if password.is_empty() {
                return Err(Error::MissingPassword);
            }
            Ok(password.to_string())
        }
    }
}
