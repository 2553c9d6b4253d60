//! Storage adapters.

mod in_memory_presentation_store;

pub use in_memory_presentation_store::InMemoryPresentationStore;
