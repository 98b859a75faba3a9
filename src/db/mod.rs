//! Database layer.
//!
//! SQLite persistence for the shift log. `db` owns connection bootstrap and
//! the database file location; `shifts` is the entity repository the command
//! layer talks to.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dashtrack::db::shifts::Shifts;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut shifts = Shifts::new()?;
//! let all = shifts.fetch_all()?;
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod shifts;
