//! Application services sitting between the HTTP routes and the agent/store.

pub mod history;
pub mod research;

pub use history::HistoryService;
pub use research::ResearchService;
