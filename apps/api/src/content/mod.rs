// Content API: prompt table, text heuristics, generation orchestration and handlers.
// All model calls go through llm_client::TextGenerator.

pub mod generator;
pub mod handlers;
pub mod heuristics;
pub mod models;
pub mod prompts;
