// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! The built-in detector battery.
//!
//! Each detector is an independent plug-in with its own defaults and
//! configuration keys. The set is open: anything implementing
//! [`SmellDetector`](crate::SmellDetector) can join a registry alongside
//! these.

mod attribute;
mod boolean_parameter;
mod class_variable;
mod control_parameter;
mod irresponsible_module;
mod long_parameter_list;
mod long_yield_list;
mod module_initialize;
mod name_checks;
mod nested_iterators;
mod nil_check;
mod too_many_instance_variables;
mod too_many_methods;
mod too_many_statements;
mod uncommunicative_method_name;
mod uncommunicative_module_name;
mod uncommunicative_parameter_name;
mod uncommunicative_variable_name;
mod unused_parameters;
mod utility_function;

pub use attribute::Attribute;
pub use boolean_parameter::BooleanParameter;
pub use class_variable::ClassVariable;
pub use control_parameter::ControlParameter;
pub use irresponsible_module::IrresponsibleModule;
pub use long_parameter_list::LongParameterList;
pub use long_yield_list::LongYieldList;
pub use module_initialize::ModuleInitialize;
pub use nested_iterators::NestedIterators;
pub use nil_check::NilCheck;
pub use too_many_instance_variables::TooManyInstanceVariables;
pub use too_many_methods::TooManyMethods;
pub use too_many_statements::TooManyStatements;
pub use uncommunicative_method_name::UncommunicativeMethodName;
pub use uncommunicative_module_name::UncommunicativeModuleName;
pub use uncommunicative_parameter_name::UncommunicativeParameterName;
pub use uncommunicative_variable_name::UncommunicativeVariableName;
pub use unused_parameters::UnusedParameters;
pub use utility_function::UtilityFunction;
