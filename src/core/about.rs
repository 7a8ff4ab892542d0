use crate::core::render::{AnimationCue, RenderItem, SectionLayout, VisualAttrs};
use crate::domain::model::{sort_profiles, ProfileEntry};
use crate::domain::ports::ContentFetch;
use crate::utils::error::Result;

pub const ABOUTS_QUERY: &str = r#"*[_type == "abouts"]"#;

/// About 區塊控制器：掛載時抓取 profile 記錄並依 order 升冪排序
pub struct AboutSection<F: ContentFetch> {
    fetcher: F,
    layout: SectionLayout,
    entries: Vec<ProfileEntry>,
}

impl<F: ContentFetch> AboutSection<F> {
    pub fn new(fetcher: F, layout: SectionLayout) -> Self {
        Self {
            fetcher,
            layout,
            entries: Vec::new(),
        }
    }

    /// 查詢失敗時保留先前狀態（首次掛載即空清單），不重試也不顯示錯誤
    pub async fn mount(&mut self) {
        match fetch_profiles(&self.fetcher).await {
            Ok(entries) => {
                tracing::debug!("About section populated with {} entries", entries.len());
                self.entries = entries;
            }
            Err(e) => {
                tracing::warn!("About fetch failed, keeping previous state: {}", e);
            }
        }
    }

    pub fn entries(&self) -> &[ProfileEntry] {
        &self.entries
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// 每次呼叫重新產生渲染清單；沒有自然主鍵，以 title+索引組合 key。
    /// 清單只讀不重排，位置索引在此是穩定的。
    pub fn items(&self) -> Vec<RenderItem> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| RenderItem {
                key: format!("{}{}", entry.title, index),
                label: entry.title.clone(),
                steady: VisualAttrs::STEADY,
                color: None,
                enter: AnimationCue::viewport_enter(),
                hover: Some(AnimationCue::hover_scale(1.1)),
                click: None,
            })
            .collect()
    }
}

async fn fetch_profiles<F: ContentFetch>(fetcher: &F) -> Result<Vec<ProfileEntry>> {
    let raw = fetcher.fetch(ABOUTS_QUERY).await?;
    let mut entries = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<ProfileEntry>, _>>()?;

    // 不依賴服務端回傳順序
    sort_profiles(&mut entries);
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::StyleToken;
    use crate::utils::error::ContentError;
    use async_trait::async_trait;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockFetch {
        responses: Arc<Mutex<Vec<Result<Vec<serde_json::Value>>>>>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl MockFetch {
        fn new(response: Result<Vec<serde_json::Value>>) -> Self {
            Self {
                responses: Arc::new(Mutex::new(vec![response])),
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn query_count(&self) -> usize {
            self.queries.lock().await.len()
        }
    }

    #[async_trait]
    impl ContentFetch for MockFetch {
        async fn fetch(&self, query: &str) -> Result<Vec<serde_json::Value>> {
            self.queries.lock().await.push(query.to_string());
            self.responses
                .lock()
                .await
                .pop()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    fn layout() -> SectionLayout {
        SectionLayout::new("about", StyleToken::WhiteBg)
    }

    #[tokio::test]
    async fn test_mount_orders_entries_ascending() {
        let fetch = MockFetch::new(Ok(vec![
            serde_json::json!({"title": "Second", "description": "b", "imgUrl": "image-b-1x1-png", "order": 2}),
            serde_json::json!({"title": "First", "description": "a", "imgUrl": "image-a-1x1-png", "order": 1}),
        ]));
        let mut section = AboutSection::new(fetch.clone(), layout());

        section.mount().await;

        assert_eq!(fetch.query_count().await, 1);
        assert_eq!(section.entries().len(), 2);
        assert_eq!(section.entries()[0].title, "First");
        assert_eq!(section.entries()[1].title, "Second");
    }

    #[tokio::test]
    async fn test_mount_failure_leaves_state_empty() {
        let fetch = MockFetch::new(Err(ContentError::ResponseError {
            message: "boom".to_string(),
        }));
        let mut section = AboutSection::new(fetch, layout());

        section.mount().await;

        assert!(section.entries().is_empty());
        assert!(section.items().is_empty());
    }

    #[test]
    fn test_items_keyed_by_title_and_index() {
        tokio_test::block_on(async {
            let fetch = MockFetch::new(Ok(vec![
                serde_json::json!({"title": "Bio", "description": "a", "imgUrl": "image-a-1x1-png", "order": 1}),
                serde_json::json!({"title": "Bio", "description": "b", "imgUrl": "image-b-1x1-png", "order": 2}),
            ]));
            let mut section = AboutSection::new(fetch, layout());

            section.mount().await;
            let items = section.items();

            assert_eq!(items.len(), 2);
            assert_eq!(items[0].key, "Bio0");
            assert_eq!(items[1].key, "Bio1");
            assert!(items[0].hover.is_some());
            assert!(items[0].click.is_none());
        });
    }
}
