//! Command inventory for the interpreter
//!
//! A raw input line arrives as a keyword plus argument words. `Command::parse`
//! validates arity, applies defaults, and produces a typed command; `apply()`
//! executes it. Keeping the inventory a closed enum means the dispatch match
//! is checked exhaustively at compile time.

use crate::errors::{Result, VecCalcError};
use crate::rules::arity;

/// Component text used when `set` omits trailing components
const DEFAULT_COMPONENT: &str = "0.0";

/// Selector used when `get` is called without one
const DEFAULT_SELECTOR: &str = "ijk";

/// One fully-validated interpreter command
///
/// Every constructed value is structurally complete: arity has been
/// checked and defaults filled in, so `apply()` only deals in semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print selected components of a named vector
    Get { name: String, selector: String },

    /// Bind a name to a freshly constructed vector
    Set {
        name: String,
        components: [String; 3],
    },

    /// Fold the named vectors into a sum, starting from the zero vector
    Add { names: Vec<String> },
}

impl Command {
    /// Parse a keyword and its argument words into a command
    ///
    /// Arity contracts: `get` takes 1 or 2 arguments, `set` takes 1, 3 or 4,
    /// `add` takes 2 or more.
    ///
    /// # Errors
    /// Returns `UnknownCommand` for an unrecognized keyword and `ArityError`
    /// when the argument count is outside the keyword's accepted set/range.
    pub fn parse(keyword: &str, args: &[&str]) -> Result<Self> {
        match keyword {
            "get" => {
                arity::count_in_set(keyword, args.len(), &[1, 2])?;
                Ok(Command::Get {
                    name: args[0].to_string(),
                    selector: args
                        .get(1)
                        .copied()
                        .unwrap_or(DEFAULT_SELECTOR)
                        .to_string(),
                })
            }

            "set" => {
                arity::count_in_set(keyword, args.len(), &[1, 3, 4])?;
                let component = |idx: usize| {
                    args.get(idx)
                        .copied()
                        .unwrap_or(DEFAULT_COMPONENT)
                        .to_string()
                };
                Ok(Command::Set {
                    name: args[0].to_string(),
                    components: [component(1), component(2), component(3)],
                })
            }

            "add" => {
                arity::count_in_range(keyword, args.len(), 2, None)?;
                Ok(Command::Add {
                    names: args.iter().map(|arg| arg.to_string()).collect(),
                })
            }

            _ => Err(VecCalcError::UnknownCommand {
                keyword: keyword.to_string(),
            }),
        }
    }
}
