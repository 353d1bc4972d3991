use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::errors::{Result, VecCalcError};
use crate::model::Vector;

/// Characters that can never appear in a variable name
///
/// Names share a lexical namespace with a future arithmetic-expression
/// grammar, so operator and bracket characters are rejected up front.
const RESERVED_NAME_CHARS: &str = "+-*/%&|^!~<>=()[]{}";

/// In-memory table of named vectors with a flat-file snapshot
///
/// Owns the session's bindings exclusively: the persisted file is read once
/// at session start (`load`) and written once at session end (`store`).
/// Constants share the lookup namespace with variables but are checked
/// first and never persisted. Single-threaded use only (no interior
/// locking) - there is exactly one reader/writer per process lifetime.
#[derive(Debug, Clone)]
pub struct VarStore {
    /// Protected bindings, seeded at construction
    constants: BTreeMap<String, Vector>,
    /// User bindings; BTreeMap keeps the persisted file diffable
    vars: BTreeMap<String, Vector>,
}

impl Default for VarStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VarStore {
    /// Create a store seeded with the immutable constants
    ///
    /// `i`, `j`, `k` are the unit vectors; `_` is a zero-vector scratch
    /// binding.
    pub fn new() -> Self {
        let mut constants = BTreeMap::new();
        constants.insert("i".to_string(), Vector::unit_i());
        constants.insert("j".to_string(), Vector::unit_j());
        constants.insert("k".to_string(), Vector::unit_k());
        constants.insert("_".to_string(), Vector::zero());

        Self {
            constants,
            vars: BTreeMap::new(),
        }
    }

    /// Look up a name, constants first
    ///
    /// # Errors
    /// Returns `UnknownVariable` if the name is neither a constant nor a
    /// variable.
    pub fn get(&self, name: &str) -> Result<&Vector> {
        if let Some(vector) = self.constants.get(name) {
            return Ok(vector);
        }

        self.vars
            .get(name)
            .ok_or_else(|| VecCalcError::UnknownVariable {
                name: name.to_string(),
            })
    }

    /// Insert or replace a binding (full replacement, not partial update)
    ///
    /// # Errors
    /// Returns `InvalidName` if `name` collides with a constant or contains
    /// a reserved operator character.
    pub fn set(&mut self, name: &str, vector: Vector) -> Result<()> {
        self.validate_name(name)?;
        self.vars.insert(name.to_string(), vector);
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<()> {
        if self.constants.contains_key(name) {
            return Err(VecCalcError::InvalidName {
                name: name.to_string(),
                reason: "is a constant. Cannot set it.".to_string(),
            });
        }

        if name.chars().any(|c| RESERVED_NAME_CHARS.contains(c)) {
            return Err(VecCalcError::InvalidName {
                name: name.to_string(),
                reason: "contains invalid characters.".to_string(),
            });
        }

        Ok(())
    }

    /// Number of user variables (constants excluded)
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// True when no user variables are bound
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate user variables in stable (name) order
    pub fn variables(&self) -> impl Iterator<Item = (&str, &Vector)> {
        self.vars.iter().map(|(name, vector)| (name.as_str(), vector))
    }

    /// Replace the in-memory table with the persisted snapshot
    ///
    /// A missing file is not an error: an empty file is created and the
    /// table stays empty. Every line must split into exactly four
    /// whitespace-separated tokens (`<name> <i> <j> <k>`); bindings are
    /// installed through `set`, so loaded names get the same validation as
    /// typed ones.
    ///
    /// # Errors
    /// `MalformedStoreLine` for a line with other than four tokens,
    /// `ParseError` for an undecodable component, `InvalidName` for a line
    /// naming a constant, `Io` for any other filesystem failure. All of
    /// these abort the load; the in-memory state cannot be trusted after a
    /// partial read.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.vars.clear();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                fs::write(path, "")?;
                debug!(path = %path.display(), "variables file missing, created empty");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        for line in content.lines() {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() != 4 {
                return Err(VecCalcError::MalformedStoreLine {
                    line: line.to_string(),
                });
            }

            let vector = Vector::parse(tokens[1], tokens[2], tokens[3])?;
            self.set(tokens[0], vector)?;
        }

        debug!(count = self.vars.len(), path = %path.display(), "variables loaded");
        Ok(())
    }

    /// Write the full table (constants excluded) to the persisted file
    ///
    /// One line per variable, stable order, no trailing blank line.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be written.
    pub fn store(&self, path: &Path) -> Result<()> {
        let mut out = String::new();
        for (name, vector) in &self.vars {
            out.push_str(name);
            out.push(' ');
            out.push_str(&vector.to_storable());
            out.push('\n');
        }

        fs::write(path, out)?;
        debug!(count = self.vars.len(), path = %path.display(), "variables stored");
        Ok(())
    }
}
