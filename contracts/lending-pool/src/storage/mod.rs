pub mod core;
pub mod pools;
pub mod positions;
