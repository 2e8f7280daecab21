//! Business logic layer.
//!
//! Services orchestrate repositories and enforce the application's rules.
//! Controllers call into services with domain parameter types and receive
//! domain models back; no DTOs or entity models cross this boundary.

pub mod auth;
pub mod punishment;
pub mod salary;
pub mod user;
pub mod wallet;

#[cfg(test)]
mod test;
