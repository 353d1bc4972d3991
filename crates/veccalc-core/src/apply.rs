//! Command dispatch
//!
//! `apply()` is the single entry point for executing a parsed command
//! against the store. A returned `Err` is a reportable per-command failure:
//! the surrounding loop prints it and keeps the session alive. The store is
//! mutated only by `set`, and only through `VarStore::set`, so name
//! validation and constant protection are never bypassed.

use tracing::trace;

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Component, Vector};
use crate::store::VarStore;

/// Execute one command, returning the line to print on success
///
/// # Errors
/// Propagates every command-level failure (`UnknownVariable`,
/// `InvalidComponentKey`, `ParseError`, `InvalidName`) for the dispatch
/// boundary to report.
pub fn apply(store: &mut VarStore, command: Command) -> Result<String> {
    trace!(?command, "dispatch");

    match command {
        Command::Get { name, selector } => {
            let vector = store.get(&name)?;
            let mut parts = Vec::new();
            for key in selector.chars() {
                let component = Component::resolve_char(key)?;
                parts.push(vector.component(component).to_string());
            }
            Ok(format!("<{}>", parts.join(", ")))
        }

        Command::Set { name, components } => {
            let [i, j, k] = &components;
            let vector = Vector::parse(i, j, k)?;
            let line = format!("{} => <{}>", name, vector.to_storable());
            store.set(&name, vector)?;
            Ok(line)
        }

        Command::Add { names } => {
            let mut resultant = Vector::zero();
            for name in &names {
                resultant = &resultant + store.get(name)?;
            }
            Ok(format!("Resultant => <{}>", resultant.to_storable()))
        }
    }
}
