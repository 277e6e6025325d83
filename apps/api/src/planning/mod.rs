// Study plan generation: timeframe parsing, template lookup, day-by-day
// layout, and assembly with curated resources.

pub mod assembler;
pub mod generator;
pub mod handlers;
pub mod templates;
pub mod timeframe;
