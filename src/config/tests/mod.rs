//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Layer builders
//! - `precedence`: Layer precedence tests
//! - `operation_mode`: Operation mode determination tests
//! - `validation`: Configuration consistency validation tests

mod helpers;
