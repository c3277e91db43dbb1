pub mod errors;
pub mod raw_triplet;
pub mod riff;
pub mod scalars;
