//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain logic with port interfaces to implement
//! the widget's workflows.
//!
//! Use cases:
//! - `OrderingSession`: Browse menu, build the order, check out

pub mod ordering_session;

pub use ordering_session::{OrderingSession, SessionCommand, SessionError, Stage};
