use std::io;

use anyhow::Result;
use tracing::info;

use gambit_cli::Controller;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("gambit starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller = Controller::new(stdin.lock(), stdout.lock());
    controller.run()?;
    Ok(())
}
