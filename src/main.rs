use std::env;
use std::io;

use anyhow::{bail, Context};

use chess_rules::board::Color;
use chess_rules::session::console::Console;
use chess_rules::session::{Session, SessionConfig};

fn parse_args() -> anyhow::Result<SessionConfig> {
    let mut config = SessionConfig::default();
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--black-first" => config.first_to_move = Color::Black,
            "--no-board" => config.echo_board = false,
            "--layout" => {
                let layout = args.next().context("--layout needs a value")?;
                config.layout = Some(layout);
            }
            other => bail!(
                "unknown argument '{other}'\nusage: chess_rules [--black-first] [--no-board] [--layout <rows>]"
            ),
        }
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let config = parse_args()?;
    let session = Session::new(config).context("cannot start the game")?;
    let mut console = Console::new(session);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console.run(stdin.lock(), &mut stdout)?;
    Ok(())
}
