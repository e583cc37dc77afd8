use std::io::{self, stdout, Stdout};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use duly::app::App;
use duly::config::Config;
use duly::{dlog, Result};

/// duly - personal task tracker for the terminal
#[derive(Parser, Debug)]
#[command(name = "duly")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    DULY_DEBUG=1    Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.duly/duly.log)
    #[arg(short = 'd', long)]
    pub debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    duly::log::init_with_debug(cli.debug);

    if cli.debug {
        dlog!("duly starting (debug mode enabled)");
    } else {
        dlog!("duly starting");
    }

    let config = Config::load()?;

    let mut terminal = setup_terminal()?;
    let result = App::run(&mut terminal, config);
    restore_terminal(&mut terminal)?;

    if let Err(ref e) = result {
        eprintln!("duly: {}", e);
    }
    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(disable_raw_mode()?)
}
