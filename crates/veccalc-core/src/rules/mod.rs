//! Reusable validation rules shared by all commands

pub mod arity;
