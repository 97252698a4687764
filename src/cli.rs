//! The command line interface for the program.
use crate::allocation::AllocationPolicy;
use crate::command::dispatch;
use crate::log;
use crate::model::Model;
use crate::settings::Settings;
use ::log::info;
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// The message printed when an interactive session starts
const WELCOME_MSG: &str = "Welcome to the Hotel Management System!

Type 'Help' to see all available commands. Type an empty line to exit.";

/// The message printed when an interactive session ends
const EXIT_MSG: &str = "Exiting. Thank you for using the Hotel Management System.";

/// The prompt printed before each command is read
const PROMPT: &str = "> ";

/// The command line interface for the program.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// The data files a session runs against
#[derive(Args)]
pub struct DataOpts {
    /// Path to the hotels JSON file
    #[arg(long)]
    pub hotels: PathBuf,
    /// Path to the bookings JSON file
    #[arg(short, long)]
    pub bookings: PathBuf,
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session against the given data files.
    Run {
        /// The data files to query
        #[command(flatten)]
        opts: DataOpts,
    },
    /// Evaluate a single command and print its reply.
    Exec {
        /// The data files to query
        #[command(flatten)]
        opts: DataOpts,
        /// The command to evaluate, e.g. "Availability(H1, 20240901, SGL)"
        command: String,
    },
    /// Load and validate the data files, then exit.
    Validate {
        /// The data files to validate
        #[command(flatten)]
        opts: DataOpts,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Run { opts } => handle_run_command(&opts, None),
            Self::Exec { opts, command } => handle_exec_command(&opts, &command, None),
            Self::Validate { opts } => handle_validate_command(&opts, None),
        }
    }
}

/// Parse CLI arguments and start hotelman
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ hotelman --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load the settings, initialise logging and read the session snapshot.
fn load_session(opts: &DataOpts, settings: Option<Settings>) -> Result<(Model, AllocationPolicy)> {
    // Load program settings, if not provided
    let settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // Initialise program logger (a no-op if something already has)
    log::init(Some(&settings.log_level)).context("Failed to initialise logging.")?;

    let model = Model::from_paths(&opts.hotels, &opts.bookings)?;
    info!(
        "Loaded {} hotels and {} bookings",
        model.hotels.len(),
        model.bookings.len()
    );

    Ok((model, settings.allocation_policy()))
}

/// Handle the `run` command.
pub fn handle_run_command(opts: &DataOpts, settings: Option<Settings>) -> Result<()> {
    let (model, policy) = load_session(opts, settings)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&model, &policy, stdin.lock(), stdout.lock())
}

/// Handle the `exec` command.
pub fn handle_exec_command(
    opts: &DataOpts,
    command: &str,
    settings: Option<Settings>,
) -> Result<()> {
    let (model, policy) = load_session(opts, settings)?;
    println!("{}", dispatch(&model, &policy, command));

    Ok(())
}

/// Handle the `validate` command.
pub fn handle_validate_command(opts: &DataOpts, settings: Option<Settings>) -> Result<()> {
    load_session(opts, settings)?;
    info!("Data validation successful!");

    Ok(())
}

/// The interactive read-evaluate-print loop.
///
/// One command per line; every reply is a single message. An empty line (or end of input)
/// ends the session. Command failures are printed as replies and never end the session.
pub fn run_session<R: BufRead, W: Write>(
    model: &Model,
    policy: &AllocationPolicy,
    mut input: R,
    mut output: W,
) -> Result<()> {
    writeln!(output, "{WELCOME_MSG}")?;

    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        let bytes_read = input.read_line(&mut line)?;
        if bytes_read == 0 || line.trim().is_empty() {
            writeln!(output, "{EXIT_MSG}")?;
            break;
        }

        writeln!(output, "{}", dispatch(model, policy, line.trim()))?;
    }

    Ok(())
}
