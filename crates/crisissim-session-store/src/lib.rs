//! CrisisSim session storage.
//!
//! Sessions live only for the lifetime of the process; a restart drops them.

pub mod in_memory;

pub use in_memory::InMemorySessionStore;
