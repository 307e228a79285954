pub mod consts;
pub mod entropy;
pub mod error;
pub mod frame;
pub mod gray;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod signature;
pub mod spectrum;
