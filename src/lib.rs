// Reusable library API — the CLI is a thin presentation layer over this
pub mod candidate_list;
pub mod cell;
pub mod errors;
pub mod frame;
pub mod grid;
pub mod log;
pub mod normalize;
pub mod placer;
pub mod puzzle;
pub mod solution;
