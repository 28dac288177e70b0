//! # State Module
//!
//! Application state for the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐        ┌──────────────────────────────────┐      │
//! │  │   ConfigState    │───────►│          BillSession             │      │
//! │  │                  │ builds │                                  │      │
//! │  │  locale          │        │  amount_text, BillState,         │      │
//! │  │  symbol override │        │  PeopleSelector, totals,         │      │
//! │  │  default tip     │        │  Box<dyn CurrencyFormatter>      │      │
//! │  │  default people  │        │                                  │      │
//! │  └──────────────────┘        └──────────────────────────────────┘      │
//! │                                                                         │
//! │  Single-threaded: the command loop owns the session and applies one    │
//! │  command at a time, so no locking is needed.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bill;
mod config;

pub use bill::{BillSession, BillSummary};
pub use config::{ConfigError, ConfigState};
