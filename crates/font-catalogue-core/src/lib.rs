//! Core systems for Font Catalogue.
//!
//! This crate provides the building blocks shared by the catalogue crates:
//!
//! - **Signal/Slot System**: Synchronous change notification for models
//! - **Errors**: The recoverable error type used by sources and settings
//! - **Logging**: Tracing target names for filtering catalogue output
//!
//! # Signal/Slot Example
//!
//! ```
//! use font_catalogue_core::Signal;
//!
//! let rows_changed = Signal::<usize>::new();
//!
//! let conn_id = rows_changed.connect(|count| {
//!     println!("Row count is now {}", count);
//! });
//!
//! rows_changed.emit(3);
//! rows_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{CatalogueError, Result, SignalError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
