//! Line-oriented board adapter.
//!
//! # Responsibility
//! - Read board commands from stdin and drive `projboard_core`.
//! - Render the active and finished lists from two category views.
//!
//! Logging is enabled when `PROJBOARD_LOG_DIR` holds an absolute path;
//! `PROJBOARD_LOG_LEVEL` overrides the build-mode default level.

use projboard_core::{
    default_log_level, init_logging, BoardContext, CategoryView, MoveOutcome, ProjectDraft,
    ProjectStatus,
};
use std::io::{self, BufRead, Write};
use uuid::Uuid;

const HELP: &str = "commands:
  add <title> | <description> | <people>
  finish <id>
  activate <id>
  list
  version
  help
  quit";

#[derive(Debug, PartialEq)]
enum Command {
    Add {
        title: String,
        description: String,
        people: String,
    },
    Move {
        id: Uuid,
        status: ProjectStatus,
    },
    List,
    Version,
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
    let rest = rest.trim();

    match verb {
        "add" => {
            let parts: Vec<&str> = rest.split('|').collect();
            let [title, description, people] = parts.as_slice() else {
                return Err("usage: add <title> | <description> | <people>".to_string());
            };
            Ok(Command::Add {
                title: title.trim().to_string(),
                description: description.trim().to_string(),
                people: people.trim().to_string(),
            })
        }
        "finish" | "activate" => {
            let id = Uuid::parse_str(rest).map_err(|err| format!("invalid id `{rest}`: {err}"))?;
            let status = if verb == "finish" {
                ProjectStatus::Finished
            } else {
                ProjectStatus::Active
            };
            Ok(Command::Move { id, status })
        }
        "list" => Ok(Command::List),
        "version" => Ok(Command::Version),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command `{other}`; try `help`")),
    }
}

fn render(out: &mut impl Write, views: &[&CategoryView]) -> io::Result<()> {
    for view in views {
        writeln!(out, "{} projects ({}):", view.status().as_str(), view.len())?;
        for project in view.items() {
            writeln!(
                out,
                "  {}  {} - {} ({} people)",
                project.id(),
                project.title(),
                project.description(),
                project.people()
            )?;
        }
    }
    Ok(())
}

fn setup_logging() {
    let Ok(log_dir) = std::env::var("PROJBOARD_LOG_DIR") else {
        return;
    };
    let level =
        std::env::var("PROJBOARD_LOG_LEVEL").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

fn run() -> io::Result<()> {
    setup_logging();

    let mut context = BoardContext::new();
    let active = CategoryView::new(ProjectStatus::Active);
    let finished = CategoryView::new(ProjectStatus::Finished);
    active.attach(context.store());
    finished.attach(context.store());

    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    writeln!(out, "{HELP}")?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };

        match command {
            Command::Add {
                title,
                description,
                people,
            } => {
                let draft = ProjectDraft::from_form(&title, &description, &people);
                match context.board().submit(&draft) {
                    Ok(id) => writeln!(out, "added {id}")?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Command::Move { id, status } => match context.board().move_project(id, status) {
                MoveOutcome::Moved => render(&mut out, &[&active, &finished])?,
                MoveOutcome::Unchanged => writeln!(out, "already {}", status.as_str())?,
                MoveOutcome::NotFound => writeln!(out, "no project {id}")?,
            },
            Command::List => render(&mut out, &[&active, &finished])?,
            Command::Version => writeln!(
                out,
                "projboard_core ping={} version={}",
                projboard_core::ping(),
                projboard_core::core_version()
            )?,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
    }

    log::info!(
        "event=board_exit module=cli status=ok projects={}",
        context.store().len()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("projboard: {err}");
        std::process::exit(1);
    }
}
