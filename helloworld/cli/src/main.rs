//! Say hello!
//!
//! Prints `Hello, <name>!` to stdout, bold and colored when stdout is an
//! interactive terminal and plain text otherwise.

use std::io::Write;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use color_eyre::eyre::{eyre, WrapErr};
use helloworld::Greeting;
use helloworld::terminal::{StyleMode, Terminal};

/// Say hello!
#[derive(Parser, Debug)]
#[command(name = "helloworld")]
#[command(author, version, about = "Say hello!")]
#[command(after_help = "\
ENVIRONMENT:
  NO_COLOR        disable styling when set to a non-empty value
  CLICOLOR_FORCE  force styling when set to anything but 0
  RUST_LOG        enable diagnostic logging on stderr (e.g. RUST_LOG=debug)
")]
struct Args {
    /// Who to greet (defaults to "World")
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// When to style the output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Output the greeting as JSON
    #[arg(long)]
    json: bool,

    /// Generate shell completions and exit.
    ///
    /// Outputs a completion script for the given shell
    /// (bash, zsh, fish, elvish, powershell) to stdout.
    #[arg(long, value_name = "SHELL")]
    completions: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for StyleMode {
    fn from(choice: ColorChoice) -> StyleMode {
        match choice {
            ColorChoice::Auto => StyleMode::Auto,
            ColorChoice::Always => StyleMode::Always,
            ColorChoice::Never => StyleMode::Never,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Setup logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();

    if let Some(ref shell_arg) = args.completions {
        return handle_completions(shell_arg);
    }

    let greeting = Greeting::new(args.name.as_deref());

    let output = if args.json {
        serde_json::to_string_pretty(&greeting)?
    } else {
        greeting.styled(&Terminal::with_mode(args.color.into()))
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).wrap_err("failed to write greeting to stdout")?;
    stdout.flush()?;

    Ok(())
}

/// Generates a static completion script for `shell_arg`.
fn handle_completions(shell_arg: &str) -> color_eyre::Result<()> {
    let shell: Shell = shell_arg.parse().map_err(|_| {
        eyre!(
            "Unknown shell: {}. Supported shells: bash, zsh, fish, elvish, powershell",
            shell_arg
        )
    })?;

    tracing::debug!(%shell, "Generating completions");
    clap_complete::generate(shell, &mut Args::command(), "helloworld", &mut std::io::stdout());

    Ok(())
}
