//! News listing, editing, and publication.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use clubsite_core::error::AppError;
use clubsite_core::result::AppResult;
use clubsite_core::types::pagination::{PageRequest, PageResponse};
use clubsite_database::NewsStore;
use clubsite_entity::news::{CreateNews, News, UpdateNews};

use crate::context::RequestContext;
use crate::media::MediaService;

/// Data for a new article. `image` may be a `data:` URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsInput {
    /// Headline. Required.
    pub title: String,
    /// Body text. Required.
    pub content: String,
    /// Image as a `data:` URL or an already hosted URL.
    pub image: Option<String>,
    /// Publish immediately.
    pub is_published: bool,
}

/// Changes to an article. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsPatch {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New image as a `data:` URL or hosted URL.
    pub image: Option<String>,
    /// New publication state.
    pub is_published: Option<bool>,
}

impl NewsPatch {
    fn is_publication_toggle(&self) -> bool {
        self.is_published.is_some()
            && self.title.is_none()
            && self.content.is_none()
            && self.image.is_none()
    }
}

/// Handles news articles.
#[derive(Clone)]
pub struct NewsService {
    news: Arc<dyn NewsStore>,
    media: MediaService,
}

impl std::fmt::Debug for NewsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsService").finish_non_exhaustive()
    }
}

impl NewsService {
    /// Creates a new news service.
    pub fn new(news: Arc<dyn NewsStore>, media: MediaService) -> Self {
        Self { news, media }
    }

    /// Newest-first page of articles, optionally filtered by publication state.
    pub async fn list(
        &self,
        published: Option<bool>,
        page: PageRequest,
    ) -> AppResult<PageResponse<News>> {
        self.news.list(published, page).await
    }

    /// Total number of articles.
    pub async fn count(&self) -> AppResult<u64> {
        self.news.count(None).await
    }

    /// Fetch one article.
    pub async fn get(&self, id: Uuid) -> AppResult<News> {
        self.news
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("News not found"))
    }

    /// Create an article, uploading its image first.
    pub async fn create(&self, ctx: &RequestContext, input: NewsInput) -> AppResult<News> {
        if input.title.trim().is_empty() || input.content.trim().is_empty() {
            return Err(AppError::validation("Title and content are required"));
        }

        let image = self.media.resolve(input.image).await?;
        let news = self
            .news
            .create(CreateNews {
                title: input.title,
                content: input.content,
                image,
                is_published: input.is_published,
            })
            .await?;

        info!(news_id = %news.id, actor = %ctx.username, "News created");
        Ok(news)
    }

    /// Update an article.
    ///
    /// A patch holding only `is_published` toggles publication. Any other
    /// patch must carry a non-empty title or content.
    pub async fn update(&self, ctx: &RequestContext, id: Uuid, patch: NewsPatch) -> AppResult<News> {
        let existing = self.get(id).await?;

        let changes = if patch.is_publication_toggle() {
            UpdateNews {
                is_published: patch.is_published,
                ..UpdateNews::default()
            }
        } else {
            let has_title = patch.title.as_deref().is_some_and(|t| !t.trim().is_empty());
            let has_content = patch.content.as_deref().is_some_and(|c| !c.trim().is_empty());
            if !has_title && !has_content {
                return Err(AppError::validation("Title or content is required"));
            }
            UpdateNews {
                title: patch.title.filter(|t| !t.trim().is_empty()),
                content: patch.content.filter(|c| !c.trim().is_empty()),
                image: self.media.resolve(patch.image).await?,
                is_published: patch.is_published,
            }
        };
        let replaces_image = changes.image.is_some() && changes.image != existing.image;

        let updated = self
            .news
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::not_found("News not found"))?;

        if replaces_image {
            self.media.discard(existing.image.as_deref()).await;
        }
        info!(news_id = %id, actor = %ctx.username, "News updated");
        Ok(updated)
    }

    /// Set the publication state of several articles. Returns how many matched.
    pub async fn set_published(
        &self,
        ctx: &RequestContext,
        ids: &[Uuid],
        is_published: bool,
    ) -> AppResult<u64> {
        if ids.is_empty() {
            return Err(AppError::validation("At least one news id is required"));
        }
        let modified = self.news.set_published(ids, is_published).await?;
        info!(
            requested = ids.len(),
            modified,
            is_published,
            actor = %ctx.username,
            "News publication updated"
        );
        Ok(modified)
    }

    /// Delete an article and its hosted image.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let existing = self.get(id).await?;
        if !self.news.delete(id).await? {
            return Err(AppError::not_found("News not found"));
        }
        self.media.discard(existing.image.as_deref()).await;
        info!(news_id = %id, actor = %ctx.username, "News deleted");
        Ok(())
    }
}
