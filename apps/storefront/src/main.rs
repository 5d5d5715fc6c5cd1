//! # LuxSite Storefront Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        LuxSite Storefront                               │
//! │                                                                         │
//! │  stdin ──► lib.rs (session loop) ──► commands.rs ──► luxsite-core      │
//! │                                           │                             │
//! │  stdout ◄──────────── JSON replies ◄──────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The setup lives in lib.rs so it can be tested without a process.

use std::process::ExitCode;

fn main() -> ExitCode {
    match luxsite_storefront::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "storefront stopped");
            ExitCode::FAILURE
        }
    }
}
