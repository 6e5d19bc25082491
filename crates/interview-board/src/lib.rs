//! Interview schedule board: stores interview slots for candidates, rejects clashing
//! slots, keeps the board sorted, and refreshes candidate snapshots after registry edits.

pub mod board;
pub mod config;
pub mod error;
pub mod import;
pub mod registry;
pub mod storage;
pub mod telemetry;
pub mod unique_list;
