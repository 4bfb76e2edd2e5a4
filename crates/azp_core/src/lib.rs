pub mod error;
pub mod model;
pub mod types;

pub use error::Error;
pub use model::ChatModel;
pub use types::{RewriteResult, SourceArticle};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::{ChatModel, Error, Result, RewriteResult, SourceArticle};
}
