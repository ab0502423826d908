//! A command-line front-end to the corkboard task list.
//!
//! Every run is one user action (list, add, show, edit, status change or
//! removal) against a JSON-file store, mirroring the one-operation-at-a-time
//! behaviour of the screens this drives.

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use corkboard::screens::{AddScreen, DetailScreen, EditScreen, ListScreen};
use corkboard::{Error, FileStore, SortKey, Task, TaskRepository, TaskStatus};

#[derive(Parser)]
#[command(name = "corkboard", version, about = "A local task list")]
struct Cli {
    /// Path of the backing store file
    #[arg(long, default_value = "corkboard.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every task
    List {
        /// Sort by "date" or "status"
        #[arg(long, default_value = "date")]
        by: String,
    },
    /// Create a task
    Add {
        title: String,
        description: String,
        location: String,
        /// Defaults to today (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        /// Defaults to the current time (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Show one task in full
    Show { id: String },
    /// Change the status of a task
    Status {
        id: String,
        /// One of In-progress, Completed or Cancelled
        status: TaskStatus,
    },
    /// Edit fields of a task (unmentioned fields are kept)
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Delete a task
    Rm {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let store = match FileStore::open(&cli.store) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };
    let mut repository = TaskRepository::new(store);

    if let Err(err) = run(cli.command, &mut repository).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run(command: Command, repository: &mut TaskRepository<FileStore>) -> Result<(), Error> {
    match command {
        Command::List { by } => {
            let mut list = ListScreen::new();
            list.set_sort_option(parse_sort_key(&by));
            list.refresh(repository).await?;

            let tasks = list.sorted_tasks();
            if tasks.is_empty() {
                println!("No tasks.");
            }
            for task in &tasks {
                print_task_line(task);
            }
        }

        Command::Add { title, description, location, date, time } => {
            let now = chrono::Local::now();
            let date = date.unwrap_or_else(|| now.format("%Y-%m-%d").to_string());
            let time = time.unwrap_or_else(|| now.format("%H:%M").to_string());

            let mut add = AddScreen::new();
            add.form_mut().set_title(title);
            add.form_mut().set_description(description);
            add.form_mut().set_date(date);
            add.form_mut().set_time(time);
            add.form_mut().set_location(location);

            let id = add.form().id().clone();
            add.submit(repository).await?;
            println!("Task added ({})", id);
        }

        Command::Show { id } => match find_task(repository, &id).await? {
            None => println!("No task with id {}", id),
            Some(task) => print_task_full(&task),
        },

        Command::Status { id, status } => match find_task(repository, &id).await? {
            None => println!("No task with id {}", id),
            Some(task) => {
                let mut detail = DetailScreen::new(task);
                detail.set_status(status, repository).await?;
                print_task_line(detail.task());
            }
        },

        Command::Edit { id, title, description, date, time, location } => {
            match find_task(repository, &id).await? {
                None => println!("No task with id {}", id),
                Some(task) => {
                    let mut edit = EditScreen::new(&task);
                    if let Some(title) = title {
                        edit.form_mut().set_title(title);
                    }
                    if let Some(description) = description {
                        edit.form_mut().set_description(description);
                    }
                    if let Some(date) = date {
                        edit.form_mut().set_date(date);
                    }
                    if let Some(time) = time {
                        edit.form_mut().set_time(time);
                    }
                    if let Some(location) = location {
                        edit.form_mut().set_location(location);
                    }
                    edit.submit(repository).await?;
                    println!("Task {} updated", id);
                }
            }
        }

        Command::Rm { id, yes } => match find_task(repository, &id).await? {
            None => println!("No task with id {}", id),
            Some(task) => {
                if yes || confirm(&format!("Delete {:?}? [y/N] ", task.title())) {
                    DetailScreen::new(task).remove(repository).await?;
                    println!("Task {} removed", id);
                } else {
                    println!("Kept.");
                }
            }
        },
    }

    Ok(())
}

fn parse_sort_key(by: &str) -> SortKey {
    match by {
        "status" => SortKey::Status,
        "date" => SortKey::Date,
        other => {
            log::warn!("Unknown sort key {:?}, sorting by date", other);
            SortKey::Date
        }
    }
}

async fn find_task(
    repository: &TaskRepository<FileStore>,
    id: &str,
) -> Result<Option<Task>, Error> {
    let tasks = repository.list_all().await?;
    Ok(tasks.into_iter().find(|task| task.id().as_str() == id))
}

fn print_task_line(task: &Task) {
    let symbol = match task.status() {
        TaskStatus::Unset => " ",
        TaskStatus::InProgress => "~",
        TaskStatus::Completed => "✓",
        TaskStatus::Cancelled => "✗",
    };
    println!(
        "  {} {}\t{} {}\t@{}\t({})",
        symbol,
        task.title(),
        task.date(),
        task.time(),
        task.location(),
        task.id()
    );
}

fn print_task_full(task: &Task) {
    println!("Title:       {}", task.title());
    println!("Description: {}", task.description());
    println!("Date:        {}", task.date());
    println!("Time:        {}", task.time());
    println!("Location:    {}", task.location());
    println!("Status:      {}", task.status());
    println!("Id:          {}", task.id());
}

/// Ask the user before going ahead with a deletion
fn confirm(prompt: &str) -> bool {
    let mut out = stdout();
    if out.write_all(prompt.as_bytes()).is_err() {
        return false;
    }
    let _ = out.flush();

    let mut answer = String::new();
    if stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim(), "y" | "Y" | "yes")
}
