pub mod types;

pub use types::{CodecError, ExpandError, ExpandResult};
