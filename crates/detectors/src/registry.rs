// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The explicit detector registry.
//!
//! Registration order is dispatch order, so a registry fully determines the
//! warning sequence for a given tree and configuration.

use crate::detector::SmellDetector;
use crate::smells;

pub struct DetectorRegistry {
    detectors: Vec<Box<dyn SmellDetector>>,
}

impl DetectorRegistry {
    /// A registry with no detectors; register your own.
    pub fn empty() -> Self {
        Self {
            detectors: Vec::new(),
        }
    }

    pub fn register(&mut self, detector: Box<dyn SmellDetector>) {
        self.detectors.push(detector);
    }

    pub fn detectors(&self) -> &[Box<dyn SmellDetector>] {
        &self.detectors
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }
}

impl Default for DetectorRegistry {
    /// The built-in battery, in alphabetical order.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(smells::Attribute));
        registry.register(Box::new(smells::BooleanParameter));
        registry.register(Box::new(smells::ClassVariable));
        registry.register(Box::new(smells::ControlParameter));
        registry.register(Box::new(smells::IrresponsibleModule));
        registry.register(Box::new(smells::LongParameterList));
        registry.register(Box::new(smells::LongYieldList));
        registry.register(Box::new(smells::ModuleInitialize));
        registry.register(Box::new(smells::NestedIterators));
        registry.register(Box::new(smells::NilCheck));
        registry.register(Box::new(smells::TooManyInstanceVariables));
        registry.register(Box::new(smells::TooManyMethods));
        registry.register(Box::new(smells::TooManyStatements));
        registry.register(Box::new(smells::UncommunicativeMethodName));
        registry.register(Box::new(smells::UncommunicativeModuleName));
        registry.register(Box::new(smells::UncommunicativeParameterName));
        registry.register(Box::new(smells::UncommunicativeVariableName));
        registry.register(Box::new(smells::UnusedParameters));
        registry.register(Box::new(smells::UtilityFunction));
        registry
    }
}
