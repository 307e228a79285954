pub mod entropy;
pub mod info;
pub mod spectrum;
