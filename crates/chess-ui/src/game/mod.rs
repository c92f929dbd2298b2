//! Game state ownership.

pub mod holder;

pub use holder::GameHolder;
