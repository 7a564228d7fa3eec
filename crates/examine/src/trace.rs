// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Per-run statistics, returned as data.
//!
//! The engine never logs; callers wanting progress output render these
//! counters themselves.

use snag_detectors::DispatchTrace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanTrace {
    pub contexts: usize,
    pub detectors: usize,
    pub examined: usize,
    pub skipped_disabled: usize,
    pub skipped_excluded: usize,
    pub suppressed: usize,
    pub failures: usize,
    pub warnings: usize,
}

impl ScanTrace {
    pub(crate) fn from_dispatch(dispatch: DispatchTrace, warnings: usize) -> Self {
        Self {
            contexts: dispatch.contexts,
            detectors: dispatch.detectors,
            examined: dispatch.examined,
            skipped_disabled: dispatch.skipped_disabled,
            skipped_excluded: dispatch.skipped_excluded,
            suppressed: dispatch.suppressed,
            failures: dispatch.failures,
            warnings,
        }
    }

    /// One line suitable for a reporter's footer.
    pub fn summary(&self) -> String {
        format!(
            "{} contexts, {} detectors, {} examinations: {} warnings ({} suppressed, {} failures)",
            self.contexts,
            self.detectors,
            self.examined,
            self.warnings,
            self.suppressed,
            self.failures
        )
    }
}
