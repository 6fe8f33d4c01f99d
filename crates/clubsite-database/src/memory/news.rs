//! In-memory news store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use clubsite_core::result::AppResult;
use clubsite_core::types::pagination::{PageRequest, PageResponse};
use clubsite_entity::news::{CreateNews, News, UpdateNews};

use crate::store::NewsStore;

/// Articles keyed by id.
#[derive(Debug, Default)]
pub struct MemoryNewsStore {
    items: RwLock<HashMap<Uuid, News>>,
}

impl MemoryNewsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NewsStore for MemoryNewsStore {
    async fn list(
        &self,
        published: Option<bool>,
        page: PageRequest,
    ) -> AppResult<PageResponse<News>> {
        let items = self.items.read().await;
        let mut matching: Vec<News> = items
            .values()
            .filter(|n| published.is_none_or(|p| n.is_published == p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        let total = matching.len() as u64;
        let page_items = matching
            .into_iter()
            .skip(usize::try_from(page.offset()).unwrap_or(usize::MAX))
            .take(page.limit as usize)
            .collect();
        Ok(PageResponse::new(page_items, page, total))
    }

    async fn count(&self, published: Option<bool>) -> AppResult<u64> {
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|n| published.is_none_or(|p| n.is_published == p))
            .count() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<News>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn create(&self, data: CreateNews) -> AppResult<News> {
        let news = data.into_news();
        self.items.write().await.insert(news.id, news.clone());
        Ok(news)
    }

    async fn update(&self, id: Uuid, data: UpdateNews) -> AppResult<Option<News>> {
        let mut items = self.items.write().await;
        Ok(items.get_mut(&id).map(|news| {
            data.apply_to(news);
            news.clone()
        }))
    }

    async fn set_published(&self, ids: &[Uuid], is_published: bool) -> AppResult<u64> {
        let mut items = self.items.write().await;
        let now = Utc::now();
        let mut matched = 0;
        for id in ids {
            if let Some(news) = items.get_mut(id) {
                news.is_published = is_published;
                news.updated_at = now;
                matched += 1;
            }
        }
        Ok(matched)
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn article(title: &str, is_published: bool) -> CreateNews {
        CreateNews {
            title: title.to_string(),
            content: "<p>body</p>".to_string(),
            image: None,
            is_published,
        }
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filters_drafts() {
        let store = MemoryNewsStore::new();
        let older = store.create(article("older", true)).await.unwrap();
        store.create(article("draft", false)).await.unwrap();
        let newer = store.create(article("newer", true)).await.unwrap();
        {
            let mut items = store.items.write().await;
            items.get_mut(&older.id).unwrap().published_at = Utc::now() - Duration::days(2);
        }

        let page = store.list(Some(true), PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].id, newer.id);
        assert_eq!(page.items[1].id, older.id);

        assert_eq!(store.count(None).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_pagination_slices_results() {
        let store = MemoryNewsStore::new();
        for i in 0..7 {
            store.create(article(&format!("n{i}"), true)).await.unwrap();
        }
        let page = store
            .list(Some(true), PageRequest::from_query(Some(2), Some(6)))
            .await
            .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_set_published_counts_only_existing_ids() {
        let store = MemoryNewsStore::new();
        let a = store.create(article("a", false)).await.unwrap();
        let b = store.create(article("b", false)).await.unwrap();

        let matched = store
            .set_published(&[a.id, b.id, Uuid::new_v4()], true)
            .await
            .unwrap();
        assert_eq!(matched, 2);
        assert_eq!(store.count(Some(true)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_article() {
        let store = MemoryNewsStore::new();
        let missing = Uuid::new_v4();
        assert!(store.update(missing, UpdateNews::default()).await.unwrap().is_none());
        assert!(!store.delete(missing).await.unwrap());
    }
}
