//! # Core Application Logic
//!
//! The calendar engine and navigation rules of remcal.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Date / YearStructure │
//!                    │  • EventIndex           │
//!                    │  • Grid (month layout)  │
//!                    │  • App + update()       │
//!                    │                         │
//!                    │  No terminal. No I/O    │
//!                    │  except via traits.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                 ┌──────────────┴──────────────┐
//!                 ▼                             ▼
//!          ┌────────────┐                ┌────────────┐
//!          │    TUI     │                │   remind   │
//!          │  Adapter   │                │ subprocess │
//!          │ (ratatui)  │                │  + editor  │
//!          └────────────┘                └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`date`]: calendar arithmetic and the always-valid `Date`
//! - [`year`]: days-per-month table of the focus year
//! - [`event`]: `Event` and the date-keyed `EventIndex`
//! - [`grid`]: the 6×7 month grid view model
//! - [`state`]: the `App` struct — all loop state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: config file and override resolution

pub mod action;
pub mod config;
pub mod date;
pub mod event;
pub mod grid;
pub mod state;
pub mod year;
