use clap::Parser;
use myshell::config::{self, Config};
use myshell::eval::ExecContext;
use myshell::fs::LocalFs;
use myshell::Shell;
use rustyline::error::ReadlineError;
use rustyline::{CompletionType, Editor};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod completer;

/// myshell - Interactive filesystem shell
#[derive(Parser, Debug)]
#[command(name = "myshell", version, about)]
struct Args {
    /// Config file path
    #[arg(short, long, env = "MYSHELL_CONFIG")]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match args.config {
        Some(path) => config::load_from_file(std::path::Path::new(&path))?,
        None => config::load().unwrap_or_else(|_| Config::default()),
    };

    init_logging(&config);

    let cwd = std::env::current_dir()?;
    let mut shell = Shell::new(Box::new(LocalFs), cwd);

    run_repl(&mut shell, &config)
}

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(config.logging.directive()))
        .init();
}

fn run_repl(shell: &mut Shell, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    use completer::ShellHelper;

    let rl_config = rustyline::Config::builder()
        .completion_type(CompletionType::List)
        .max_history_size(config.history.max_entries)?
        .history_ignore_dups(true)?
        .history_ignore_space(true)
        .build();

    let cwd = Arc::new(RwLock::new(shell.cwd.clone()));

    let mut rl: Editor<ShellHelper, rustyline::history::DefaultHistory> =
        Editor::with_config(rl_config)?;
    rl.set_helper(Some(ShellHelper::new(cwd.clone())));

    let history_path = history_path(config);
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    let mut ctx = ExecContext::default();

    loop {
        {
            let mut cwd_guard = cwd.write().unwrap_or_else(std::sync::PoisonError::into_inner);
            cwd_guard.clone_from(&shell.cwd);
        }

        match rl.readline(&config.prompt) {
            Ok(line) => {
                // The exact line, untrimmed, ends the session.
                if line == "exit" {
                    break;
                }
                if line.trim().is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line.trim());

                if let Err(e) = shell.execute(&line, &mut ctx) {
                    eprintln!("myshell: {e}");
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("exit");
                break;
            }
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }

    Ok(())
}

fn history_path(config: &Config) -> Option<PathBuf> {
    if !config.history.enabled || config.history.file.is_empty() {
        return None;
    }
    let path = match config.history.file.strip_prefix("~/") {
        Some(stripped) => dirs::home_dir()?.join(stripped),
        None => PathBuf::from(&config.history.file),
    };
    Some(path)
}
