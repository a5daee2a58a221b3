use std::{
    fs::File,
    io::{self, BufReader, Cursor, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use chess_translator::{setup, GameLog, Translator, UserInterface};

#[derive(Parser, Debug)]
#[command(author, version, about = "Replays or plays chess from notation directives", long_about = None)]
struct Args {
    /// Directive file to translate. Without one the session starts
    /// interactively from the standard position.
    input: Option<PathBuf>,

    /// Write the game log to this file instead of stdout
    #[arg(short, long)]
    log: Option<PathBuf>,

    /// Placement file used for interactive sessions started without input
    #[arg(long)]
    setup: Option<PathBuf>,

    /// Stop after the input file instead of continuing interactively
    #[arg(long)]
    batch: bool,

    /// Increase diagnostic output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level))
        .init();

    match &args.log {
        Some(path) => run(&args, GameLog::create(path)?),
        None => run(&args, GameLog::stdout()?),
    }
}

fn run<W: Write>(args: &Args, log: GameLog<W>) -> Result<()> {
    let mut translator = Translator::new(log);

    let input = match &args.input {
        Some(path) => match File::open(path) {
            Ok(file) => {
                translator
                    .log()
                    .write_line(&format!("Process: Successfully opened file [{}]", path.display()))?;
                Some(file)
            }
            Err(err) => {
                warn!("cannot open {}: {err}", path.display());
                translator.log().write_line(
                    "Error: There was a problem with the file you entered. Reverting to Interaction Mode.",
                )?;
                None
            }
        },
        None => {
            translator
                .log()
                .write_line("Process: You entered no filepath. The program will now revert to Interaction Mode.")?;
            None
        }
    };

    let interactive = match input {
        Some(file) => {
            translator.translate_reader(BufReader::new(file))?;
            !args.batch
        }
        None => {
            match &args.setup {
                Some(path) => {
                    let file = File::open(path)
                        .with_context(|| format!("cannot open setup file {}", path.display()))?;
                    translator.load_setup(BufReader::new(file))?;
                }
                None => translator.load_setup(Cursor::new(setup::STANDARD))?,
            }
            true
        }
    };

    if interactive {
        let stdin = io::stdin();
        let mut ui = UserInterface::new(stdin.lock(), io::stdout());
        translator.run_interactive(&mut ui)?;
    } else {
        translator.write_board()?;
    }

    translator.shutdown()?;
    info!("session finished with {} pieces on the board", translator.board().piece_count());
    Ok(())
}
