//! The list-synchronization component: commands, reconciliation, rendering.
//!
//! # Design
//! `ListSync` owns the local cache and the client. A user action becomes a
//! [`Command`]; [`ListSync::request`] produces the outbound request, the host
//! executes it, and [`ListSync::apply`] reconciles the response into the
//! cache. [`ListSync::sync`] wraps `apply` with the display side: re-render
//! on success, error banner on failure. Errors stop at that boundary — they
//! are reported to the surface, never propagated.
//!
//! Each command is single-shot: no retry, no in-flight tracking, no
//! cancellation, no sequencing token. When two calls overlap, whichever
//! response is applied last wins.

use crate::client::ItemClient;
use crate::error::RemoteError;
use crate::http::{HttpRequest, HttpResponse};
use crate::state::ListState;
use crate::types::{CreateItem, Item, ItemId, UpdateItem};

/// A user-initiated operation against the remote collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch the collection and replace the local cache wholesale.
    Load,
    /// Create an item with the given title; the server assigns its id.
    Create(String),
    /// Retitle the item with the given id.
    Update(ItemId, String),
    /// Delete the item with the given id.
    Delete(ItemId),
}

/// Display collaborator driven by [`render`] and [`ListSync::sync`].
///
/// The core calls these; hosts own the implementation (DOM rows, terminal
/// lines, a recording buffer in tests).
pub trait RenderSurface {
    /// Drop all displayed rows; the next `append_row` calls rebuild them.
    fn clear_rows(&mut self);

    /// Append one display row for `item`.
    fn append_row(&mut self, item: &Item);

    /// Show the error banner with the given text.
    fn show_error(&mut self, message: &str);

    /// Hide the error banner, if one is showing.
    fn clear_error(&mut self);
}

/// Project the whole state onto the surface, fully replacing prior rows.
///
/// Pure with respect to the state: rendering twice in a row produces the
/// same rows both times.
pub fn render(state: &ListState, surface: &mut dyn RenderSurface) {
    surface.clear_rows();
    for item in state.items() {
        surface.append_row(item);
    }
}

/// Local cache plus the four request/response operations that keep it
/// reconciled against the remote collection.
#[derive(Debug, Clone)]
pub struct ListSync {
    client: ItemClient,
    state: ListState,
}

impl ListSync {
    /// A new component with an empty cache, bound to the collection at
    /// `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: ItemClient::new(base_url),
            state: ListState::new(),
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Build the outbound request for `command`. The host executes it and
    /// feeds the response back through [`apply`](Self::apply) or
    /// [`sync`](Self::sync).
    pub fn request(&self, command: &Command) -> Result<HttpRequest, RemoteError> {
        match command {
            Command::Load => Ok(self.client.build_load()),
            Command::Create(title) => self.client.build_create(&CreateItem {
                title: title.clone(),
            }),
            Command::Update(id, title) => self.client.build_update(
                id,
                &UpdateItem {
                    title: title.clone(),
                },
            ),
            Command::Delete(id) => Ok(self.client.build_delete(id)),
        }
    }

    /// Reconcile the response to `command` into the cache.
    ///
    /// On success the cache reflects the server's answer and the caller
    /// should re-render. On failure the cache is untouched: no operation
    /// mutates locally before the remote confirms, so there is nothing to
    /// roll back.
    ///
    /// An update or delete whose id is no longer present locally (a stale
    /// row racing a completed load) discards the response without error.
    pub fn apply(&mut self, command: &Command, response: HttpResponse) -> Result<(), RemoteError> {
        match command {
            Command::Load => {
                let items = self.client.parse_load(response)?;
                self.state.replace(items);
            }
            Command::Create(_) => {
                let created = self.client.parse_create(response)?;
                self.state.push(created);
            }
            Command::Update(id, _) => {
                // The server's returned title wins over the requested one.
                let updated = self.client.parse_update(response)?;
                self.state.set_title(id, &updated.title);
            }
            Command::Delete(id) => {
                self.client.parse_delete(response)?;
                self.state.remove(id);
            }
        }
        Ok(())
    }

    /// Run one full reconciliation against the surface: apply the response,
    /// then re-render the rows or show the error banner. Returns whether the
    /// response was applied.
    pub fn sync(
        &mut self,
        command: &Command,
        response: HttpResponse,
        surface: &mut dyn RenderSurface,
    ) -> bool {
        match self.apply(command, response) {
            Ok(()) => {
                surface.clear_error();
                render(&self.state, surface);
                true
            }
            Err(err) => {
                surface.show_error(&err.to_string());
                false
            }
        }
    }
}
