// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The detector framework and the built-in battery.
//!
//! A detector is a plug-in: it advertises stable `smell_class` /
//! `smell_subclass` identifiers and the context kinds it can apply to, takes
//! its effective configuration from the resolver, and examines one context
//! at a time. Detectors live in an explicit [`DetectorRegistry`] handed to
//! the examiner - there is no process-wide detector list - and the
//! [`dispatch`] loop visits contexts in pre-order, applying detectors in
//! registration order, so output is deterministic.

mod detector;
mod dispatcher;
mod registry;
mod scan;
pub mod smells;

pub use detector::{DetectorContext, SmellDetector, context_kinds};
pub use dispatcher::{DispatchTrace, Strategy, dispatch};
pub use registry::DetectorRegistry;
