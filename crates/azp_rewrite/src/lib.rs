pub mod attribution;
pub mod chunk;
pub mod classify;
pub mod normalize;
pub mod openai;
pub mod pipeline;
pub mod prompt;

pub use classify::{classify, Classification};
pub use openai::OpenAiChatModel;
pub use pipeline::Rewriter;

pub mod prelude {
    pub use super::{classify, Classification, OpenAiChatModel, Rewriter};
    pub use azp_core::{ChatModel, Error, Result, RewriteResult, SourceArticle};
}
