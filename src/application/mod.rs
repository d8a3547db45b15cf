//! Application layer
//!
//! Use cases that orchestrate the account service and token issuer to serve
//! one client request each.

pub mod accounts;
