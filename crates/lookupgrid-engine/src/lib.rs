//! lookupgrid_engine - Cell store, lookup graph and chain resolution.

pub mod engine;
