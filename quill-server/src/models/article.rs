use garde::Validate;
use quill_data::NewArticle;
use serde::Deserialize;

/// Body of `POST /api/articles`.
///
/// Text fields are optional at the serde level so a missing field is
/// reported as a field error instead of a parse failure.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleRequest {
    #[garde(required, length(min = 1))]
    pub title: Option<String>,
    #[garde(required, length(min = 1))]
    pub content: Option<String>,
    #[garde(required, length(min = 1))]
    pub excerpt: Option<String>,
    #[garde(required, length(min = 1))]
    pub category: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub image_url: Option<String>,
    #[garde(skip)]
    #[serde(default)]
    pub published: Option<bool>,
}

impl CreateArticleRequest {
    pub fn into_new_article(self) -> NewArticle {
        NewArticle {
            title: self.title.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            excerpt: self.excerpt.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            image_url: self.image_url,
            published: self.published.unwrap_or(false),
        }
    }
}

/// Query string of `GET /api/articles`.
///
/// Read from raw pairs so a repeated `published` key is not a rejection.
#[derive(Debug, Default)]
pub struct ListParams {
    published: Vec<String>,
}

impl ListParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let published = pairs
            .into_iter()
            .filter(|(key, _)| key == "published")
            .map(|(_, value)| value)
            .collect();
        Self { published }
    }

    /// Only a single `published=true` narrows the listing.
    pub fn published_only(&self) -> bool {
        matches!(self.published.as_slice(), [only] if only == "true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::validation::validate;

    #[test]
    fn missing_fields_are_reported_by_name() {
        let req: CreateArticleRequest = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        let errors = validate(&req).unwrap_err();
        let mut fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        fields.sort();
        assert_eq!(fields, ["category", "content", "excerpt"]);
    }

    #[test]
    fn null_published_means_draft() {
        let req: CreateArticleRequest = serde_json::from_str(
            r#"{"title":"A","content":"B","excerpt":"C","category":"Tech","published":null}"#,
        )
        .unwrap();
        assert!(validate(&req).is_ok());
        let article = req.into_new_article();
        assert!(!article.published);
        assert_eq!(article.image_url, None);
    }

    #[test]
    fn only_literal_true_filters() {
        let params = |pairs: &[(&str, &str)]| {
            ListParams::from_pairs(
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            )
        };
        assert!(params(&[("published", "true")]).published_only());
        assert!(params(&[("page", "2"), ("published", "true")]).published_only());
        assert!(!params(&[("published", "TRUE")]).published_only());
        assert!(!params(&[("published", "1")]).published_only());
        assert!(!params(&[("published", "false")]).published_only());
        assert!(!params(&[]).published_only());
    }

    #[test]
    fn repeated_published_key_lists_everything() {
        let params = ListParams::from_pairs(vec![
            ("published".into(), "true".into()),
            ("published".into(), "true".into()),
        ]);
        assert!(!params.published_only());
    }
}
