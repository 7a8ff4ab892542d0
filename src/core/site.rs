use crate::core::about::AboutSection;
use crate::core::render::{SectionLayout, StyleToken};
use crate::core::skills::SkillsSection;
use crate::core::work::WorkSection;
use crate::domain::ports::ContentFetch;
use std::time::Duration;

/// 三個區塊的組合根。各區塊持有自己的 fetcher 複本與獨立視圖狀態，
/// 掛載互不相依，單一區塊失敗不影響其他區塊。
pub struct Portfolio<F: ContentFetch + Clone> {
    pub about: AboutSection<F>,
    pub skills: SkillsSection<F>,
    pub work: WorkSection<F>,
}

impl<F: ContentFetch + Clone> Portfolio<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_transition_delay(fetcher, crate::core::work::DEFAULT_TRANSITION_DELAY)
    }

    pub fn with_transition_delay(fetcher: F, transition_delay: Duration) -> Self {
        Self {
            about: AboutSection::new(
                fetcher.clone(),
                SectionLayout::new("about", StyleToken::WhiteBg),
            ),
            skills: SkillsSection::new(
                fetcher.clone(),
                SectionLayout::new("skills", StyleToken::WhiteBg),
            ),
            work: WorkSection::with_transition_delay(
                fetcher,
                SectionLayout::new("work", StyleToken::PrimaryBg),
                transition_delay,
            ),
        }
    }

    pub async fn mount_all(&mut self) {
        tracing::info!("Mounting portfolio sections");
        tokio::join!(self.about.mount(), self.skills.mount(), self.work.mount());
        let work_items = self.work.visible_items().await.len();
        tracing::info!(
            "Sections mounted: {} profiles, {} skills, {} work items",
            self.about.entries().len(),
            self.skills.skills().len(),
            work_items
        );
    }
}
