//! Full synchronization lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every command over
//! real HTTP using ureq, checking the state the component converges to after
//! each reconciliation.

use std::sync::Arc;

use listsync_core::{
    Command, HttpMethod, HttpRequest, HttpResponse, Item, ItemId, ListSync, RenderSurface,
};
use mock_server::Store;
use tokio::sync::RwLock;

/// Execute an `HttpRequest` using ureq and return an `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
fn execute(req: HttpRequest) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (req.method, req.body) {
        (HttpMethod::Get, _) => agent.get(&req.path).call(),
        (HttpMethod::Delete, _) => agent.delete(&req.path).call(),
        (HttpMethod::Post, Some(body)) => {
            agent.post(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Post, None) => agent.post(&req.path).send_empty(),
        (HttpMethod::Put, Some(body)) => {
            agent.put(&req.path).content_type("application/json").send(body.as_bytes())
        }
        (HttpMethod::Put, None) => agent.put(&req.path).send_empty(),
    }
    .expect("HTTP transport error");

    let status = response.status().as_u16();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers: Vec::new(),
        body,
    }
}

/// Spawn the mock server with the given store on a random port and return
/// the collection URL.
fn start_server(store: Store) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, Arc::new(RwLock::new(store))).await
        })
        .unwrap();
    });

    format!("http://{addr}/posts")
}

#[derive(Default)]
struct RecordingSurface {
    rows: Vec<String>,
    errors: Vec<String>,
}

impl RenderSurface for RecordingSurface {
    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn append_row(&mut self, item: &Item) {
        self.rows.push(item.title.clone());
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }

    fn clear_error(&mut self) {}
}

/// Build, execute, and reconcile one command.
fn run_command(sync: &mut ListSync, surface: &mut RecordingSurface, command: Command) -> bool {
    let request = sync.request(&command).unwrap();
    let response = execute(request);
    sync.sync(&command, response, surface)
}

#[test]
fn sync_lifecycle() {
    let base_url = start_server(Store::default());
    let mut sync = ListSync::new(&base_url);
    let mut surface = RecordingSurface::default();

    // Step 1: load — collection starts empty.
    assert!(run_command(&mut sync, &mut surface, Command::Load));
    assert!(sync.state().is_empty());
    assert!(surface.rows.is_empty());

    // Step 2: create an item; the server assigns its id.
    assert!(run_command(
        &mut sync,
        &mut surface,
        Command::Create("Buy milk".to_string())
    ));
    assert_eq!(surface.rows, vec!["Buy milk"]);
    assert_eq!(sync.state().len(), 1);
    let id = sync.state().items()[0].id.clone();
    assert_eq!(id, ItemId::Int(1));

    // Step 3: the created item survives a reload.
    assert!(run_command(&mut sync, &mut surface, Command::Load));
    assert_eq!(surface.rows, vec!["Buy milk"]);

    // Step 4: retitle it.
    assert!(run_command(
        &mut sync,
        &mut surface,
        Command::Update(id.clone(), "Buy oat milk".to_string())
    ));
    assert_eq!(surface.rows, vec!["Buy oat milk"]);

    // Step 5: updating an id the server no longer knows surfaces an error
    // and leaves the cache alone.
    assert!(!run_command(
        &mut sync,
        &mut surface,
        Command::Update(ItemId::Int(999), "nope".to_string())
    ));
    assert_eq!(surface.rows, vec!["Buy oat milk"]);
    assert_eq!(surface.errors, vec!["HTTP error, status: 404"]);

    // Step 6: delete it.
    assert!(run_command(&mut sync, &mut surface, Command::Delete(id.clone())));
    assert!(sync.state().is_empty());
    assert!(surface.rows.is_empty());

    // Step 7: deleting again fails with the fixed description.
    assert!(!run_command(&mut sync, &mut surface, Command::Delete(id)));
    assert_eq!(surface.errors.last().unwrap(), "Delete request failed");

    // Step 8: the collection is empty again.
    assert!(run_command(&mut sync, &mut surface, Command::Load));
    assert!(sync.state().is_empty());
}

#[test]
fn load_caps_a_seeded_collection_at_five() {
    let base_url = start_server(Store::seeded(8));
    let mut sync = ListSync::new(&base_url);
    let mut surface = RecordingSurface::default();

    assert!(run_command(&mut sync, &mut surface, Command::Load));
    assert_eq!(
        surface.rows,
        vec!["Post 1", "Post 2", "Post 3", "Post 4", "Post 5"]
    );

    // Deleting one of the five leaves the rest in order.
    let id = sync.state().items()[2].id.clone();
    assert!(run_command(&mut sync, &mut surface, Command::Delete(id)));
    assert_eq!(surface.rows, vec!["Post 1", "Post 2", "Post 4", "Post 5"]);

    // Remote fields the client does not model are still carried.
    let first = &sync.state().items()[0];
    assert_eq!(first.extra["body"], "Body of post 1");
    assert_eq!(first.extra["userId"], 1);
}
