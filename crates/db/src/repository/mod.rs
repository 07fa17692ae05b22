//! Repository functions — one function per database operation.
//!
//! Every function takes a `&DbPool` and returns a `Result<T, DbError>`.
//! No business logic, no HTTP types — pure parameterized SQL.

pub mod departments;
pub mod employees;
