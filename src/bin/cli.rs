// src/bin/cli.rs
use f1_live::cli;

fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
