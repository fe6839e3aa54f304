use chrono::{DateTime, Utc};
use garde::Validate;
use serde::{Deserialize, Deserializer, Serialize};

/// A blog post as stored and as returned to clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub category: String,
    pub image_url: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The two states an article moves between through `published`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArticleState {
    Draft,
    Published,
}

impl Article {
    pub fn state(&self) -> ArticleState {
        if self.published {
            ArticleState::Published
        } else {
            ArticleState::Draft
        }
    }

    /// Overlay the fields present in `patch`; everything else is kept.
    pub(crate) fn apply(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = normalize_image_url(image_url);
        }
        if let Some(published) = patch.published {
            self.published = published;
        }
    }
}

/// Data needed to create an article.
#[derive(Clone, Debug, PartialEq, Validate)]
pub struct NewArticle {
    #[garde(length(min = 1))]
    pub title: String,
    #[garde(length(min = 1))]
    pub content: String,
    #[garde(length(min = 1))]
    pub excerpt: String,
    #[garde(length(min = 1))]
    pub category: String,
    #[garde(skip)]
    pub image_url: Option<String>,
    #[garde(skip)]
    pub published: bool,
}

impl NewArticle {
    /// A draft without an image.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        excerpt: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            excerpt: excerpt.into(),
            category: category.into(),
            image_url: None,
            published: false,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub(crate) fn into_article(self, id: String, now: DateTime<Utc>) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            category: self.category,
            image_url: self.image_url.and_then(|url| normalize_image_url(Some(url))),
            published: self.published,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update: only the fields that are `Some` are applied.
///
/// `image_url` is tri-state on the wire: absent keeps the current value,
/// `null` clears it, a string replaces it.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticlePatch {
    #[garde(length(min = 1))]
    #[serde(default)]
    pub title: Option<String>,
    #[garde(length(min = 1))]
    #[serde(default)]
    pub content: Option<String>,
    #[garde(length(min = 1))]
    #[serde(default)]
    pub excerpt: Option<String>,
    #[garde(length(min = 1))]
    #[serde(default)]
    pub category: Option<String>,
    #[garde(skip)]
    #[serde(default, deserialize_with = "present")]
    pub image_url: Option<Option<String>>,
    #[garde(skip)]
    #[serde(default)]
    pub published: Option<bool>,
}

impl ArticlePatch {
    pub fn publish(published: bool) -> Self {
        Self {
            published: Some(published),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Marks a field that appeared in the payload, even as `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn normalize_image_url(url: Option<String>) -> Option<String> {
    url.filter(|u| !u.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::validation::validate;

    #[test]
    fn patch_distinguishes_absent_null_and_value() {
        let absent: ArticlePatch = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.image_url, None);
        assert!(absent.is_empty());

        let cleared: ArticlePatch = serde_json::from_str(r#"{"imageUrl":null}"#).unwrap();
        assert_eq!(cleared.image_url, Some(None));

        let set: ArticlePatch =
            serde_json::from_str(r#"{"imageUrl":"https://img.example/a.png"}"#).unwrap();
        assert_eq!(set.image_url, Some(Some("https://img.example/a.png".into())));
    }

    #[test]
    fn patch_rules_apply_only_to_present_fields() {
        assert!(validate(&ArticlePatch::default()).is_ok());

        let blank_title = ArticlePatch {
            title: Some(String::new()),
            ..ArticlePatch::default()
        };
        let errors = validate(&blank_title).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }

    #[test]
    fn new_article_requires_text_fields() {
        let errors = validate(&NewArticle::new("", "", "C", "Tech")).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(errors.len(), 2);
        assert!(fields.contains(&"title"));
        assert!(fields.contains(&"content"));
    }

    #[test]
    fn serializes_camel_case_with_null_image() {
        let now = Utc::now();
        let article = NewArticle::new("A", "B", "C", "Tech").into_article("x".into(), now);
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["imageUrl"], serde_json::Value::Null);
        assert_eq!(json["published"], false);
        assert!(json["createdAt"].is_string());
        assert_eq!(json["createdAt"], json["updatedAt"]);
    }

    #[test]
    fn empty_image_url_is_unset() {
        let article = NewArticle::new("A", "B", "C", "Tech")
            .with_image_url("  ")
            .into_article("x".into(), Utc::now());
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn state_follows_published_flag() {
        let mut article = NewArticle::new("A", "B", "C", "Tech").into_article("x".into(), Utc::now());
        assert_eq!(article.state(), ArticleState::Draft);
        article.apply(ArticlePatch::publish(true));
        assert_eq!(article.state(), ArticleState::Published);
        assert_eq!(article.title, "A");
    }
}
