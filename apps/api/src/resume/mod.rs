// Résumé analysis: PDF text extraction, one completion call, profile shaping.
// All model calls go through llm_client, no direct provider calls here.

pub mod analyzer;
pub mod extract;
pub mod handlers;
pub mod prompts;
