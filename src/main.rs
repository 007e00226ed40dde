// Terminal Sokoban. Keys are rebindable with --bindings, see --print-bindings for the defaults.
// Level files use '#' wall, '@' player, '$' box, '.' goal, ' ' floor.
// On screen a box on a goal shows as '*' and the player on a goal as '+'.

use clap::Parser;
use log::info;
use sokoban_rules::config::KeyBindings;
use sokoban_rules::console_interface::{
    TerminalInput, TerminalView, cleanup_terminal, setup_terminal,
};
use sokoban_rules::core::{DEFAULT_LEVEL, Game, Level, parse_level};
use sokoban_rules::input::InputDispatcher;
use sokoban_rules::runner::run_game;
use std::path::{Path, PathBuf};

/// Push every box onto a goal.
#[derive(Parser, Debug)]
#[command(name = "sokoban", author, version, about, long_about = None)]
struct Args {
    /// Level file to play (default: built-in level)
    #[arg(short, long)]
    level: Option<PathBuf>,

    /// JSON file with key bindings
    #[arg(short, long)]
    bindings: Option<PathBuf>,

    /// Print the key bindings in use as JSON and exit
    #[arg(long)]
    print_bindings: bool,
}

fn load_level(path: &Path) -> Result<Level, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)
        .map_err(|err| format!("could not read {}: {err}", path.display()))?;
    Ok(parse_level(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    colog::init();
    let args = Args::parse();

    let bindings = match &args.bindings {
        Some(path) => KeyBindings::load(path)?,
        None => KeyBindings::default(),
    };
    if args.print_bindings {
        println!("{}", bindings.to_json_pretty()?);
        return Ok(());
    }
    let dispatcher = InputDispatcher::new(&bindings)?;

    let level = match &args.level {
        Some(path) => load_level(path)?,
        None => parse_level(DEFAULT_LEVEL)?,
    };
    info!(
        "loaded {}x{} level with {} boxes and {} goals",
        level.width(),
        level.height(),
        level.boxes().len(),
        level.goal_count()
    );

    let mut game = Game::new(level);
    let mut view = TerminalView::new(setup_terminal()?, &bindings);
    let mut input = TerminalInput::new(dispatcher);

    // Nothing may log above debug level while the alternate screen is up.
    let result = run_game(&mut game, &mut view, &mut input);
    cleanup_terminal()?;
    let summary = result?;

    info!("{summary}");
    println!("{summary}");
    Ok(())
}
