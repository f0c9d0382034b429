mod token_stream;
mod token;
mod classifier;

pub use token_stream::TokenStream;
pub use token::{
    Token,
    Category,
    Keyword,
    Noun,
};
pub use classifier::analyse;
