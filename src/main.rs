mod config;
mod todo;
mod tui;

use anyhow::Result;
use clap::{Command, CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};
use config::{Config, ConfigError};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use todo::models::seed_todos;
use tui::{app::App, ui};

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "A TUI todo list with route-based filtering")]
struct Cli {
    #[arg(long, help = "Start location path, e.g. /active (overrides the configured start_route)")]
    location: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Configuration management")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    #[command(about = "Generate shell completion scripts")]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (currently only 'start_route' is supported)")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Get a configuration value")]
    Get {
        #[arg(help = "Configuration key")]
        key: String,
    },
    #[command(about = "List all configuration values")]
    List,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = handle_config_command(action) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            print_completions(shell, &mut cmd);
        }
        None => {
            if let Err(e) = run_main_app(cli.location) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn handle_config_command(action: ConfigAction) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Set { key, value } => {
            if key != "start_route" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'start_route' is supported.", key);
                std::process::exit(1);
            }

            let mut config = match Config::load() {
                Ok(config) => config,
                Err(ConfigError::ConfigNotFound) => Config::default(),
                Err(e) => return Err(e),
            };

            config.set_start_route(value);
            config.save()?;
            println!("Configuration saved successfully.");
        }
        ConfigAction::Get { key } => {
            if key != "start_route" {
                eprintln!("Error: Unknown configuration key '{}'. Only 'start_route' is supported.", key);
                std::process::exit(1);
            }

            let config = Config::load()?;
            println!("{}", config.start_route);
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("start_route = {}", config.start_route);
        }
    }
    Ok(())
}

fn run_main_app(location: Option<String>) -> Result<()> {
    // The --location flag wins; otherwise the configured start route, with
    // a missing config falling back to the root.
    let location = match location {
        Some(location) => location,
        None => match Config::load() {
            Ok(config) => config.start_route,
            Err(ConfigError::ConfigNotFound) => Config::default().start_route,
            Err(e) => return Err(anyhow::anyhow!("Configuration error: {}", e)),
        },
    };

    let mut app = App::new(seed_todos(), &location);

    run_tui(&mut app)?;

    Ok(())
}

fn run_tui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key_event(key)?;
            if app.should_quit {
                break;
            }
        }
    }
    Ok(())
}

fn print_completions<G: Generator>(generator: G, cmd: &mut Command) {
    generate(generator, cmd, cmd.get_name().to_string(), &mut io::stdout());
}
