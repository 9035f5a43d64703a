//! Deferred asynchronous computation.
//!
//! - [`Task`]: a lazily started, re-runnable async computation with a race
//!   combinator
//!
//! Tasks run on tokio: delays use `tokio::time::sleep` and racing uses
//! `tokio::select!`, so they must be awaited inside a tokio runtime.

mod task;

pub use task::Task;
