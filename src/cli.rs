use std::{
    env,
    io::{self, Write},
    process::{Command, Stdio},
};

use anyhow::Context;

use smart_scheduler::{
    api::{EventsApi, HttpEventsClient},
    calendar::{sort_chronologically, CategoryFilter, Event},
    storage::Config,
    ui::event_card::{format_date, format_time},
};

pub const USAGE: &str = "Usage: smart-scheduler [--api-url URL] [--list [--category Work|Personal|Other]]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Interactive,
    List(CategoryFilter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub mode: CliMode,
    pub api_url: Option<String>,
}

pub fn parse_cli_mode() -> Result<CliOptions, String> {
    parse_args(env::args().skip(1))
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliOptions, String> {
    let mut list = false;
    let mut filter = CategoryFilter::All;
    let mut api_url = None;
    let mut args = args.peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--list" => {
                list = true;
            }
            "--category" => {
                let name = args.next().ok_or("--category requires a value")?;
                filter = CategoryFilter::parse(&name)
                    .ok_or_else(|| format!("Invalid category '{}'. Use Work, Personal or Other.", name))?;
            }
            "--api-url" => {
                let url = args.next().ok_or("--api-url requires a value")?;
                api_url = Some(url);
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    let mode = if list { CliMode::List(filter) } else { CliMode::Interactive };
    Ok(CliOptions { mode, api_url })
}

pub async fn run_list_mode(config: &Config, filter: CategoryFilter) -> anyhow::Result<()> {
    let client = HttpEventsClient::new().with_base_url(config.api.base_url.clone());

    let mut events = client
        .fetch_events()
        .await
        .with_context(|| format!("Could not reach {}", client.base_url()))?;

    events.retain(|event| filter.matches(event.category));
    sort_chronologically(&mut events);

    let agenda = format_agenda_text(&events, filter);
    display_with_pager(&agenda).context("Failed to display agenda")
}

fn format_agenda_text(events: &[Event], filter: CategoryFilter) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Upcoming Events ({}) – {}", events.len(), filter.label()));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", build_agenda_line(event)));
        }
    }

    lines.join("\n")
}

fn build_agenda_line(event: &Event) -> String {
    let mut line = format!(
        "{:<13} {:>8}  {} [{}]",
        format_date(&event.date),
        format_time(&event.time),
        event.title,
        event.category
    );
    if event.is_archived() {
        line.push_str(" (archived)");
    }
    if let Some(notes) = &event.notes
        && !notes.is_empty()
    {
        line.push_str(&format!(" – {}", notes));
    }
    line
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            let _ = child.wait();
        }
        Err(_) => {
            println!("{text}");
        }
    }

    Ok(())
}
