use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand};
use forsale_domain::CliOverrides;
use std::process::ExitCode;
use tracing::error;

mod bootstrap;
mod commands;
mod exit;
mod output;

#[derive(Parser, Debug)]
#[command(name = "fs-check")]
#[command(version)]
#[command(about = "Check and generate _for-sale DNS TXT records")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// DNS server to query (repeatable; `ip` or `ip:port`)
    #[arg(short = 's', long = "server", value_name = "ADDR", global = true)]
    servers: Vec<String>,

    /// Per-exchange timeout in seconds
    #[arg(short = 't', long, value_name = "SECS", global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Machine-readable JSON output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up and validate the _for-sale TXT records of a domain
    Check {
        /// Domain to check, e.g. example.com
        domain: String,
    },
    /// Print zone-file lines for new _for-sale records
    Generate(GenerateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Domain the records are for
    domain: String,

    /// Add a record carrying only the version tag
    #[arg(long)]
    bare: bool,

    /// Asking price, e.g. USD750
    #[arg(long, value_name = "PRICE")]
    fval: Vec<String>,

    /// Contact or sales URI
    #[arg(long, value_name = "URI")]
    furi: Vec<String>,

    /// Free text
    #[arg(long, value_name = "TEXT")]
    ftxt: Vec<String>,

    /// Opaque for-sale code
    #[arg(long, value_name = "CODE")]
    fcod: Vec<String>,
}

impl From<GenerateArgs> for commands::GenerateRequest {
    fn from(args: GenerateArgs) -> Self {
        Self {
            domain: args.domain,
            bare: args.bare,
            fval: args.fval,
            furi: args.furi,
            ftxt: args.ftxt,
            fcod: args.fcod,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(exit::FAILURE),
            };
        }
    };

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %e, "fs-check failed");
            eprintln!("Error: {e:#}");
            ExitCode::from(exit::FAILURE)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<u8> {
    let cli_overrides = CliOverrides {
        servers: cli.servers,
        timeout_secs: cli.timeout,
        log_level: cli.log_level,
        json: cli.json,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    match cli.command {
        Command::Check { domain } => commands::check(&config, &domain).await,
        Command::Generate(args) => commands::generate(&config, args.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check_with_global_flags() {
        let cli = Cli::try_parse_from([
            "fs-check",
            "check",
            "example.com",
            "--json",
            "-s",
            "9.9.9.9",
            "--server",
            "1.1.1.1:53",
            "--timeout",
            "2",
        ])
        .unwrap();

        assert!(cli.json);
        assert_eq!(cli.servers, vec!["9.9.9.9", "1.1.1.1:53"]);
        assert_eq!(cli.timeout, Some(2));
        assert!(matches!(cli.command, Command::Check { ref domain } if domain == "example.com"));
    }

    #[test]
    fn test_parse_generate_repeated_values() {
        let cli = Cli::try_parse_from([
            "fs-check",
            "generate",
            "example.com",
            "--fval",
            "USD750",
            "--furi",
            "https://example.com/buy",
            "--fval",
            "EUR700",
        ])
        .unwrap();

        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.fval, vec!["USD750", "EUR700"]);
        assert_eq!(args.furi, vec!["https://example.com/buy"]);
        assert!(!args.bare);
    }

    #[test]
    fn test_missing_domain_is_usage_error() {
        let err = Cli::try_parse_from(["fs-check", "check"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }
}
