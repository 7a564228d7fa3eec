// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Core types shared across the Snag workspace.
//!
//! This crate owns the three surfaces every other component builds on:
//!
//! - [`SyntaxNode`]/[`Element`] - the parsed-syntax interchange format the
//!   parser collaborator hands to the engine (whitequark-parser style tagged
//!   nodes), plus a reader for its textual s-expression form.
//! - [`SnagError`] - the engine-wide error taxonomy.
//! - [`Warning`] - the immutable smell warning record the engine emits.

pub mod error;
pub mod sexp;
pub mod syntax;
pub mod warning;

pub use error::{Result, SnagError};
pub use sexp::{SexpError, parse_sexp};
pub use syntax::{Element, SyntaxNode};
pub use warning::{ParamMap, Warning};
