pub mod punctuation;
pub mod token;

pub use punctuation::*;
pub use token::*;
