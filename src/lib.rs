//! cms-sync: publish local markdown writings to a GraphQL CMS
//!
//! The pipeline is a sequential batch loop: collect candidate paths,
//! classify each against local disk and live CMS state, build the mutation
//! variables from YAML front matter, and send one authenticated GraphQL
//! request per file. Per-file failures are logged and never abort the batch.

pub mod classify;
pub mod collect;
pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod gql;

#[cfg(test)]
pub(crate) mod testutil;
