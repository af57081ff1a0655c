// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod clock;
mod command;
mod error;
mod ledger;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use clock::{Clock, FixedClock, SystemClock};
pub use command::Command;
pub use error::CoreError;
pub use ledger::{Ledger, Outcome, Transition};
