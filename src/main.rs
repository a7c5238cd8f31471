mod app;
mod connectivity;
mod numbers;

use clap::Parser;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = app::Cli::parse();
    app::run_app(cli)?;
    Ok(())
}
