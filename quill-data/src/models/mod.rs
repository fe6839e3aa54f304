mod article;
mod user;

pub use article::{Article, ArticlePatch, ArticleState, NewArticle};
pub use user::{NewUser, User};
