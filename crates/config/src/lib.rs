// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Layered smell configuration.
//!
//! Configuration arrives as already-parsed YAML values (reading files and
//! walking directories belongs to the caller). Layers merge in increasing
//! precedence - detector defaults, project-wide settings, per-directory
//! settings, then context-local comment directives - with scalars
//! overwriting and sequences concatenating. The result of a lookup is a
//! [`ResolvedDetectorConfig`]: the effective answer for one (detector,
//! context) pair.

mod configuration;
mod directives;
mod merge;
mod patterns;
mod resolver;

pub use configuration::{
    ConfigMap, ENABLED_KEY, EXCEPTIONS_KEY, EXCLUDE_KEY, SmellsConfiguration,
};
pub use directives::{Directives, parse_directives};
pub use merge::merge_into;
pub use patterns::ContextPattern;
pub use resolver::{ConfigResolver, ResolvedDetectorConfig};
