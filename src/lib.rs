pub mod config;
pub mod diff;
pub mod lint;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod render;
pub mod section;
pub mod sync;
pub mod writer;
