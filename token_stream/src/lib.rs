//! An ordered, mutable sequence of tokens that can be searched, spliced
//! and reassembled without going back to the source text.
mod cursor;
pub mod raw;
mod search;
mod token_stream;

pub use crate::raw::RawToken;
pub use crate::token_stream::TokenStream;
