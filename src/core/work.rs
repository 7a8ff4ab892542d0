use crate::core::render::{
    AnimationCue, ClickAction, RenderItem, SectionLayout, VisualAttrs,
};
use crate::domain::model::{category_universe, ProjectEntry, ALL_CATEGORY};
use crate::domain::ports::ContentFetch;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// usedSkills 在查詢內展開，專案記錄一次取齊
pub const WORKS_QUERY: &str = r#"*[_type == "works"]{..., usedSkills[]->}"#;

pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterPhase {
    Idle,
    Transitioning,
}

#[derive(Debug)]
struct WorkState {
    items: Vec<Arc<ProjectEntry>>,
    visible: Vec<Arc<ProjectEntry>>,
    categories: Vec<String>,
    active_filter: String,
    phase: FilterPhase,
    card_attrs: VisualAttrs,
}

impl Default for WorkState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            visible: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
            active_filter: ALL_CATEGORY.to_string(),
            phase: FilterPhase::Idle,
            card_attrs: VisualAttrs::STEADY,
        }
    }
}

/// 詳情彈窗：開關狀態加上目前項目的共享參照。
/// 關閉只清除可見性，參照可保留（關閉時不渲染，無害）。
#[derive(Debug, Default)]
pub struct DetailOverlay {
    open: bool,
    current: Option<Arc<ProjectEntry>>,
}

impl DetailOverlay {
    pub fn open(&mut self, item: Arc<ProjectEntry>) {
        self.current = Some(item);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current(&self) -> Option<&Arc<ProjectEntry>> {
        self.current.as_ref()
    }
}

/// Work 區塊控制器：單次聯結查詢取得專案，分類過濾純客戶端進行。
///
/// 過濾是兩段式過場：先套退出提示，固定延遲後重算可見清單。
/// 計時器彼此獨立且不可取消；快速連續選擇時，最後排程的計時器
/// 的重算結果最終生效（沿用既有行為，候選修正記錄於 DESIGN.md）。
pub struct WorkSection<F: ContentFetch> {
    fetcher: F,
    layout: SectionLayout,
    transition_delay: Duration,
    state: Arc<Mutex<WorkState>>,
    overlay: Mutex<DetailOverlay>,
}

impl<F: ContentFetch> WorkSection<F> {
    pub fn new(fetcher: F, layout: SectionLayout) -> Self {
        Self::with_transition_delay(fetcher, layout, DEFAULT_TRANSITION_DELAY)
    }

    pub fn with_transition_delay(fetcher: F, layout: SectionLayout, delay: Duration) -> Self {
        Self {
            fetcher,
            layout,
            transition_delay: delay,
            state: Arc::new(Mutex::new(WorkState::default())),
            overlay: Mutex::new(DetailOverlay::default()),
        }
    }

    pub async fn mount(&self) {
        match fetch_projects(&self.fetcher).await {
            Ok(items) => {
                let items: Vec<Arc<ProjectEntry>> =
                    items.into_iter().map(Arc::new).collect();
                let categories = category_universe(items.iter().map(|i| i.as_ref()));
                tracing::debug!(
                    "Work section populated: {} items, {} categories",
                    items.len(),
                    categories.len()
                );

                let mut state = self.state.lock().await;
                state.categories = categories;
                state.visible = items.clone();
                state.items = items;
                state.active_filter = ALL_CATEGORY.to_string();
                state.phase = FilterPhase::Idle;
                state.card_attrs = VisualAttrs::STEADY;
            }
            Err(e) => {
                tracing::warn!("Work fetch failed, keeping previous state: {}", e);
            }
        }
    }

    /// 選擇分類：立即切換 active_filter 並套退出提示，
    /// 排程一個獨立計時器在延遲後重算可見清單（每次選擇恰重算一次）。
    pub async fn select_category(&self, category: &str) {
        {
            let mut state = self.state.lock().await;
            state.active_filter = category.to_string();
            state.phase = FilterPhase::Transitioning;
            state.card_attrs = VisualAttrs::EXIT;
        }

        let state = Arc::clone(&self.state);
        let category = category.to_string();
        let delay = self.transition_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut state = state.lock().await;
            state.visible = if category == ALL_CATEGORY {
                state.items.clone()
            } else {
                state
                    .items
                    .iter()
                    .filter(|item| item.tags.iter().any(|t| t == &category))
                    .cloned()
                    .collect()
            };
            state.card_attrs = VisualAttrs::STEADY;
            state.phase = FilterPhase::Idle;
        });
    }

    pub async fn active_filter(&self) -> String {
        self.state.lock().await.active_filter.clone()
    }

    pub async fn phase(&self) -> FilterPhase {
        self.state.lock().await.phase
    }

    pub async fn card_attrs(&self) -> VisualAttrs {
        self.state.lock().await.card_attrs
    }

    pub async fn categories(&self) -> Vec<String> {
        self.state.lock().await.categories.clone()
    }

    pub async fn visible_items(&self) -> Vec<Arc<ProjectEntry>> {
        self.state.lock().await.visible.clone()
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub async fn open_detail(&self, item: Arc<ProjectEntry>) {
        self.overlay.lock().await.open(item);
    }

    pub async fn close_detail(&self) {
        self.overlay.lock().await.close();
    }

    pub async fn is_detail_open(&self) -> bool {
        self.overlay.lock().await.is_open()
    }

    pub async fn current_detail(&self) -> Option<Arc<ProjectEntry>> {
        self.overlay.lock().await.current().cloned()
    }

    /// 專案卡片渲染清單：沒有自然主鍵，以位置索引組合 key；
    /// 點擊以共享參照開啟詳情彈窗。
    pub async fn items(&self) -> Vec<RenderItem> {
        let state = self.state.lock().await;
        state
            .visible
            .iter()
            .enumerate()
            .map(|(index, item)| RenderItem {
                key: format!("work-item-{}", index),
                label: item.title.clone(),
                steady: state.card_attrs,
                color: None,
                enter: AnimationCue::viewport_enter(),
                hover: None,
                click: Some(ClickAction::OpenDetail(Arc::clone(item))),
            })
            .collect()
    }
}

async fn fetch_projects<F: ContentFetch>(fetcher: &F) -> Result<Vec<ProjectEntry>> {
    let raw = fetcher.fetch(WORKS_QUERY).await?;
    let entries = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<ProjectEntry>, _>>()?;

    for entry in &entries {
        if entry.tags.is_empty() {
            // 資料不變量：每個專案至少屬於一個分類
            tracing::warn!("Project '{}' has no tags, only visible under All", entry.title);
        }
    }
    Ok(entries)
}
