mod app;
mod domain;
mod input;
mod notifications;
mod storage;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Write};
use storage::{
    get_pomo_dir, init_local_pomo, read_backup_file, write_backup_file, Backup, JsonFileStorage,
    MemoryStorage, Storage,
};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A terminal Pomodoro timer with task tracking and session statistics", long_about = None)]
struct Cli {
    /// Run without touching disk; nothing is loaded or saved
    #[arg(long)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .pomo directory in the current directory
    Init,
    /// Export statistics and tasks to a backup file
    Export {
        /// Output file path. Defaults to pomo-backup-YYYY-MM-DD.json
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Import statistics and tasks from a backup file, replacing current data
    Import {
        /// Backup file to import
        file: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let pomo_dir = init_local_pomo()?;
            println!("Initialized pomo directory: {}", pomo_dir.display());
            println!();
            println!("Pomo will now use this local directory for storage.");
            println!("Run 'pomo' to start a session.");
            Ok(())
        }
        Some(Commands::Export { output }) => {
            let storage = JsonFileStorage::open_default()?;
            let backup = Backup::export(&storage)?;

            let path = output.unwrap_or_else(Backup::default_file_name);
            write_backup_file(&path, &backup)?;
            println!("Exported backup: {path}");
            Ok(())
        }
        Some(Commands::Import { file, yes }) => {
            let backup = read_backup_file(&file)?;

            if !yes && !confirm_import(&backup)? {
                println!("Import cancelled.");
                return Ok(());
            }

            let mut storage = JsonFileStorage::open_default()?;
            backup.import(&mut storage)?;
            println!("Imported backup from {file}");
            Ok(())
        }
        None => run_tui(cli.ephemeral),
    }
}

/// Ask on stdin before overwriting local data with a backup
fn confirm_import(backup: &Backup) -> Result<bool> {
    println!("Backup taken {}.", backup.export_date);
    if backup.stats.is_some() {
        println!("  - replaces statistics");
    }
    if backup.todos.is_some() {
        println!("  - replaces tasks");
    }
    print!("Overwrite current data? [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

fn run_tui(ephemeral: bool) -> Result<()> {
    let storage: Box<dyn Storage> = if ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        let pomo_dir = get_pomo_dir()?;
        eprintln!("Using pomo directory: {}", pomo_dir.display());
        Box::new(JsonFileStorage::open_default()?)
    };

    let mut app = AppState::new(storage);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Apply any countdown seconds that elapsed since the last pass
        app.advance_countdown();
    }
}
