//! News entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A news article shown on the public site once published.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct News {
    /// Unique article identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text (HTML produced by the admin editor).
    pub content: String,
    /// Hosted image URL.
    pub image: Option<String>,
    /// Whether the article is visible on the public site.
    pub is_published: bool,
    /// Publication timestamp used for ordering.
    pub published_at: DateTime<Utc>,
    /// When the article was created.
    pub created_at: DateTime<Utc>,
    /// When the article was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an article. The image is already hosted.
#[derive(Debug, Clone)]
pub struct CreateNews {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Hosted image URL.
    pub image: Option<String>,
    /// Initial publication state.
    pub is_published: bool,
}

impl CreateNews {
    /// Materialize the row that will be stored.
    pub fn into_news(self) -> News {
        let now = Utc::now();
        News {
            id: Uuid::new_v4(),
            title: self.title,
            content: self.content,
            image: self.image,
            is_published: self.is_published,
            published_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields to merge into an existing article. `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateNews {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New hosted image URL.
    pub image: Option<String>,
    /// New publication state.
    pub is_published: Option<bool>,
}

impl UpdateNews {
    /// Apply the changes to an in-memory copy of the article.
    pub fn apply_to(&self, news: &mut News) {
        if let Some(title) = &self.title {
            news.title = title.clone();
        }
        if let Some(content) = &self.content {
            news.content = content.clone();
        }
        if let Some(image) = &self.image {
            news.image = Some(image.clone());
        }
        if let Some(is_published) = self.is_published {
            news.is_published = is_published;
        }
        news.updated_at = Utc::now();
    }
}
