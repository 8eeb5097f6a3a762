//! Terminal frontend for the list-synchronization client.
//!
//! # Overview
//! Supplies the three collaborators the core expects from its host: a render
//! surface (numbered rows on stdout, an error line on stderr), an input
//! surface (line commands with trimmed input and a cancellable retitle
//! prompt), and an HTTP executor (ureq). The collection URL comes from the
//! `LIST_URL` environment variable and defaults to the reference deployment.

use std::io::{self, BufRead, Write};

use listsync_core::{
    Command, HttpMethod, HttpRequest, HttpResponse, Item, ItemId, ListSync, RenderSurface,
};

const DEFAULT_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Renders rows as a numbered list on stdout; errors go to stderr. A
/// terminal cannot retract printed lines, so "clearing" rows starts a fresh
/// block and clearing the error banner is a no-op.
struct TerminalSurface {
    next_row: usize,
}

impl TerminalSurface {
    fn new() -> Self {
        Self { next_row: 1 }
    }
}

impl RenderSurface for TerminalSurface {
    fn clear_rows(&mut self) {
        self.next_row = 1;
        println!();
    }

    fn append_row(&mut self, item: &Item) {
        println!("{:>2}. {}", self.next_row, item.title);
        self.next_row += 1;
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("Error: {message}");
    }

    fn clear_error(&mut self) {}
}

/// Execute an `HttpRequest` over the network and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses come back as data for the core to interpret.
fn execute(agent: &ureq::Agent, req: HttpRequest) -> Result<HttpResponse, ureq::Error> {
    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call()?,
        (HttpMethod::Delete, _) => agent.delete(&req.path).call()?,
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())?
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty()?,
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())?
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty()?,
    };

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Build, execute, and reconcile one command. Transport failures and remote
/// errors both land on the error banner; the cache only changes on success.
fn dispatch(
    sync: &mut ListSync,
    agent: &ureq::Agent,
    surface: &mut TerminalSurface,
    command: Command,
) {
    let request = match sync.request(&command) {
        Ok(request) => request,
        Err(err) => {
            surface.show_error(&err.to_string());
            return;
        }
    };
    match execute(agent, request) {
        Ok(response) => {
            sync.sync(&command, response, surface);
        }
        Err(err) => surface.show_error(&err.to_string()),
    }
}

/// Resolve a 1-based display row to the item's id and current title.
fn item_at(sync: &ListSync, row: &str) -> Option<(ItemId, String)> {
    let n: usize = row.trim().parse().ok()?;
    let item = sync.state().items().get(n.checked_sub(1)?)?;
    Some((item.id.clone(), item.title.clone()))
}

/// Print `prompt`, then read one line, trimmed. `None` on EOF.
fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

fn main() {
    let base_url = std::env::var("LIST_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut sync = ListSync::new(&base_url);
    let mut surface = TerminalSurface::new();

    println!("syncing against {base_url}");
    dispatch(&mut sync, &agent, &mut surface, Command::Load);

    while let Some(line) = prompt_line("> ") {
        let (verb, rest) = line.split_once(' ').unwrap_or((line.as_str(), ""));
        match verb {
            "" => {}
            "quit" | "exit" => break,
            "list" => dispatch(&mut sync, &agent, &mut surface, Command::Load),
            "add" => {
                let title = rest.trim();
                if title.is_empty() {
                    println!("usage: add <title>");
                } else {
                    dispatch(&mut sync, &agent, &mut surface, Command::Create(title.to_string()));
                }
            }
            "edit" => match item_at(&sync, rest) {
                Some((id, current)) => {
                    match prompt_line(&format!("new title [{current}]: ")) {
                        Some(title) if !title.is_empty() => {
                            dispatch(&mut sync, &agent, &mut surface, Command::Update(id, title));
                        }
                        // Empty line or EOF: cancelled, nothing is sent.
                        _ => {}
                    }
                }
                None => println!("no such row"),
            },
            "del" | "delete" => match item_at(&sync, rest) {
                Some((id, _)) => dispatch(&mut sync, &agent, &mut surface, Command::Delete(id)),
                None => println!("no such row"),
            },
            _ => println!("commands: list, add <title>, edit <row>, del <row>, quit"),
        }
    }
}
