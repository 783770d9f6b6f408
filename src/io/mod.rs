//! File formats for the alignment pipeline: term dictionaries, CSV score
//! matrices and manual story-to-trace mappings.

pub mod dictionary;
pub mod mapping;
pub mod matrix_csv;
