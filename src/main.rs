use anyhow::Result;
use clap::Parser;

use edit_assist::cli::CliArgs;

fn main() -> Result<()> {
    edit_assist::tracing::init();

    let replay = CliArgs::parse().into_replay()?;
    let session = replay.run();

    print!("{}", session.text());
    if replay.show_cursor {
        eprintln!("cursor: {}", session.cursor());
    }
    Ok(())
}
