mod byte_sink;
mod error;
mod number;
mod options;
mod policy;
mod slice;
mod stats;
mod text_sink;
mod utf8;

pub use byte_sink::ByteSink;
pub use error::{Error, Result};
pub use number::Number;
pub use options::SinkOptions;
pub use policy::*;
pub use slice::clamp_range;
pub use stats::{HeapCounter, BUF_SINK};
pub use text_sink::TextSink;
pub use utf8::encode_code_point;
