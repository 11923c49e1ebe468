//! tunables-admin - inspect and override a running process's tunables
//!
//! A process hosts any number of tunable collections, each identified by a
//! string id. `PUT /admin/tunables/{id}` merges typed values into one;
//! `DELETE /admin/tunables/{id}` removes the named values from it.

pub mod admin;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod tunable;
