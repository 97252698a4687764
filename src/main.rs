//! Provides the main entry point to the program.
use human_panic::setup_panic;

fn main() -> anyhow::Result<()> {
    setup_panic!();
    hotelman::cli::run_cli()
}
