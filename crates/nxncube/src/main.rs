//! Command-line NxNxN cube simulator.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install()?;
    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args)
}
