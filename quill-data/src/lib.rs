//! Article and user storage for the Quill blog service.
//!
//! The HTTP layer only sees the [`ArticleRepository`] and [`UserRepository`]
//! traits; [`MemoryStore`] is the process-lifetime implementation behind them.

pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod seed;

pub use error::DataError;
pub use memory::MemoryStore;
pub use models::{Article, ArticlePatch, ArticleState, NewArticle, NewUser, User};
pub use repository::{ArticleRepository, UserRepository};
