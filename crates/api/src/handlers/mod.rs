//! Route handlers — one module per resource.
//!
//! Each handler is a straight-line sequence: validate, resolve references,
//! run one repository call, map the result to a response.

pub mod departments;
pub mod employees;
