// * The Refinery: turns raw candidate URLs and markup into clean media items.
// * classifier decides content vs chrome, collector dedups and names files,
// * selectors holds the DOM cascades shared by the rendered and static tiers.

pub mod classifier;
pub mod collector;
pub mod selectors;

pub use classifier::{classify, MediaContext, SourceHint};
pub use collector::MediaCollector;
