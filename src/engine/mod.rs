pub mod demo;
pub mod orchestrator;
pub mod rendered;
pub mod script_mining;
pub mod static_html;
pub mod validation;

pub use orchestrator::ExtractionPipeline;
