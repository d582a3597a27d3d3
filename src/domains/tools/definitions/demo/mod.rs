pub mod echo;
pub mod timestamp;

pub use echo::{EchoParams, EchoTool};
pub use timestamp::{GetTimestampParams, GetTimestampTool};
