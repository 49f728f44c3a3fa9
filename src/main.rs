// sortty: step through sorting and searching algorithms in the terminal

use std::io::{self, Write};
use std::time::Instant;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::algorithms::{Algorithm, Mode};
use sortty::cli::Cli;
use sortty::logging;
use sortty::player::Speed;
use sortty::session::{Session, SessionConfig};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.list {
        list_algorithms()?;
        return Ok(());
    }

    if cli.print || cli.log_file.is_some() {
        logging::init(cli.log_file.as_deref())?;
    }

    let config = SessionConfig {
        algorithm: cli.algorithm,
        size: cli.size,
        values: cli.values.clone(),
        target: cli.target,
        keep_absent: cli.keep_absent,
        seed: cli.seed,
        speed: Speed::new(cli.speed),
        ..SessionConfig::default()
    };

    let mut session = match Session::new(config, Instant::now()) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.print {
        if let Some(notice) = session.take_notice() {
            eprintln!("{}", notice);
        }
        print_sequence(&session)?;
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    Ok(())
}

fn list_algorithms() -> io::Result<()> {
    let mut out = io::stdout().lock();
    for mode in [Mode::Sort, Mode::Search] {
        writeln!(out, "{}:", mode)?;
        for algorithm in Algorithm::of_mode(mode) {
            writeln!(out, "  {:<15} {}", algorithm.id(), algorithm.label())?;
        }
    }
    Ok(())
}

/// Dump the whole step sequence, one step per line
fn print_sequence(session: &Session) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let algorithm = session.algorithm();

    writeln!(out, "{} on {:?}", algorithm.label(), session.values())?;
    if algorithm.mode() == Mode::Search {
        if let Some(target) = session.target() {
            writeln!(out, "target {}", target)?;
        }
    }

    let sequence = session.sequence();
    for step in sequence {
        writeln!(out, "{}", step)?;
    }

    let last = sequence.len().saturating_sub(1);
    let analytics = sortty::player::Analytics::scan(sequence.steps(), last, Default::default());
    writeln!(
        out,
        "{} steps, {} comparisons, {} swaps",
        analytics.total, analytics.comparisons, analytics.swaps
    )?;
    Ok(())
}
