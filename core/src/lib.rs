//! Deterministic list-synchronization client for a remote REST collection.
//!
//! # Overview
//! `ListSync` keeps an ordered in-memory cache of items (the rows currently
//! on screen) reconciled against a remote collection resource through four
//! operations: load, create, update, delete. The crate builds `HttpRequest`
//! values and applies `HttpResponse` values without touching the network
//! (host-does-IO pattern). The caller executes the actual HTTP round-trip,
//! making every state transition deterministic and testable.
//!
//! # Design
//! - `ListSync` owns all mutable state: one `ListState`, nothing ambient.
//! - Operations are a `Command` enum dispatched through a `request` / `apply`
//!   pair, so the I/O boundary sits between two plain function calls.
//! - No operation mutates local state before the remote confirms; a failed
//!   call leaves the cache exactly as it was.
//! - Rendering is a pure full-replacement projection through the
//!   `RenderSurface` trait; hosts own the actual display.

pub mod client;
pub mod error;
pub mod http;
pub mod state;
pub mod sync;
pub mod types;

pub use client::ItemClient;
pub use error::RemoteError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use state::{ListState, MAX_ITEMS};
pub use sync::{render, Command, ListSync, RenderSurface};
pub use types::{CreateItem, Item, ItemId, UpdateItem};
