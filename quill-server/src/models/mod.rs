pub mod article;

pub use article::{CreateArticleRequest, ListParams};
