pub mod dictionary;
pub mod error;
pub mod matrix;
pub mod region;
pub mod vector;
