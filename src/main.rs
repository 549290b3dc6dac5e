use std::error::Error;

use airoom::{Cli, run};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    run(cli).await
}
