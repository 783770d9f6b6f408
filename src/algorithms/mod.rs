pub mod evaluate;
pub mod path;
pub mod presence;
pub mod regions;
pub mod scoring;
pub mod smoothing;
pub mod weighting;
