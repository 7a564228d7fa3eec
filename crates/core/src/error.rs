// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The engine-wide error taxonomy.
//!
//! File-local failures (`Syntax`, `UnknownNodeRole`, `DetectorFailure`) are
//! converted into pseudo-warnings by the examiner so batch analyses never
//! abort on one bad file. `BadConfiguration` is fatal to the run and
//! propagates to the caller.

use crate::sexp::SexpError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnagError {
    /// The source could not be read into a syntax tree.
    #[error("syntax error: {0}")]
    Syntax(#[from] SexpError),

    /// A node tag outside the closed role set. Fatal to the offending file,
    /// not to the run.
    #[error("unknown node role `{tag}`")]
    UnknownNodeRole { tag: String, line: Option<usize> },

    /// Configuration could not be interpreted.
    #[error("bad configuration: {0}")]
    BadConfiguration(String),

    /// A detector raised while examining a context. Other detectors continue.
    #[error("detector `{detector}` failed in `{context}`")]
    DetectorFailure {
        detector: String,
        context: String,
        #[source]
        cause: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, SnagError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_carries_tag() {
        let err = SnagError::UnknownNodeRole {
            tag: "wibble".into(),
            line: Some(3),
        };
        assert_eq!(err.to_string(), "unknown node role `wibble`");
    }

    #[test]
    fn detector_failure_chains_cause() {
        let err = SnagError::DetectorFailure {
            detector: "TooManyStatements".into(),
            context: "C#go".into(),
            cause: anyhow::anyhow!("threshold missing"),
        };
        let chained = format!("{err}: {}", std::error::Error::source(&err).unwrap());
        assert!(chained.contains("threshold missing"));
    }
}
