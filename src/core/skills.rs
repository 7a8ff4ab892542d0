use crate::core::render::{AnimationCue, RenderItem, SectionLayout, VisualAttrs};
use crate::domain::model::{
    sort_experience, sort_skill_groups, sort_skills, ExperienceEntry, Skill, SkillGroup,
};
use crate::domain::ports::ContentFetch;
use crate::utils::error::Result;

pub const SKILL_GROUPS_QUERY: &str = r#"*[_type == "skillGroups"]"#;
pub const SKILLS_QUERY: &str = r#"*[_type == "skills"]"#;
/// works 在查詢內嵌入展開，單次往返取回完整經歷記錄（避免 N+1）
pub const EXPERIENCE_QUERY: &str = r#"*[_type == "experience"]{..., works[]->}"#;

/// Skills 區塊控制器：三個查詢並行發出，各自寫入獨立狀態槽，
/// 完成順序不影響結果。
pub struct SkillsSection<F: ContentFetch> {
    fetcher: F,
    layout: SectionLayout,
    skill_groups: Vec<SkillGroup>,
    skills: Vec<Skill>,
    experiences: Vec<ExperienceEntry>,
}

impl<F: ContentFetch> SkillsSection<F> {
    pub fn new(fetcher: F, layout: SectionLayout) -> Self {
        Self {
            fetcher,
            layout,
            skill_groups: Vec::new(),
            skills: Vec::new(),
            experiences: Vec::new(),
        }
    }

    pub async fn mount(&mut self) {
        let (groups, skills, experiences) = tokio::join!(
            fetch_skill_groups(&self.fetcher),
            fetch_skills(&self.fetcher),
            fetch_experience(&self.fetcher),
        );

        match groups {
            Ok(groups) => self.skill_groups = groups,
            Err(e) => tracing::warn!("Skill group fetch failed, keeping previous state: {}", e),
        }
        match skills {
            Ok(skills) => self.skills = skills,
            Err(e) => tracing::warn!("Skill fetch failed, keeping previous state: {}", e),
        }
        match experiences {
            Ok(experiences) => self.experiences = experiences,
            Err(e) => tracing::warn!("Experience fetch failed, keeping previous state: {}", e),
        }

        tracing::debug!(
            "Skills section populated: {} groups, {} skills, {} experiences",
            self.skill_groups.len(),
            self.skills.len(),
            self.experiences.len()
        );
    }

    pub fn skill_groups(&self) -> &[SkillGroup] {
        &self.skill_groups
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    pub fn experiences(&self) -> &[ExperienceEntry] {
        &self.experiences
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    /// 某個群組底下的 skills，維持整體排序
    pub fn skills_in_group<'a>(&'a self, group: &'a SkillGroup) -> impl Iterator<Item = &'a Skill> {
        self.skills.iter().filter(move |s| s.in_group(group))
    }

    pub fn skill_items(&self) -> Vec<RenderItem> {
        self.skills
            .iter()
            .map(|skill| RenderItem {
                key: format!("app__skills-{}", skill.name),
                label: skill.name.clone(),
                steady: VisualAttrs::STEADY,
                color: Some(skill.bg_color.clone()),
                enter: AnimationCue::viewport_enter(),
                hover: None,
                click: None,
            })
            .collect()
    }

    pub fn experience_items(&self) -> Vec<RenderItem> {
        self.experiences
            .iter()
            .map(|experience| RenderItem {
                key: format!("app__experience{}", experience.date),
                label: experience
                    .formatted_date
                    .clone()
                    .unwrap_or_else(|| experience.date.to_string()),
                steady: VisualAttrs::STEADY,
                color: None,
                enter: AnimationCue::viewport_enter(),
                hover: None,
                click: None,
            })
            .collect()
    }
}

async fn fetch_skill_groups<F: ContentFetch>(fetcher: &F) -> Result<Vec<SkillGroup>> {
    let raw = fetcher.fetch(SKILL_GROUPS_QUERY).await?;
    let mut groups = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<SkillGroup>, _>>()?;
    sort_skill_groups(&mut groups);
    Ok(groups)
}

async fn fetch_skills<F: ContentFetch>(fetcher: &F) -> Result<Vec<Skill>> {
    let raw = fetcher.fetch(SKILLS_QUERY).await?;
    let mut skills = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<Skill>, _>>()?;

    sort_skills(&mut skills);
    // 衍生欄位在填充時算一次
    for skill in &mut skills {
        skill.level_percent = Skill::compute_level_percent(skill.level);
    }
    Ok(skills)
}

async fn fetch_experience<F: ContentFetch>(fetcher: &F) -> Result<Vec<ExperienceEntry>> {
    let raw = fetcher.fetch(EXPERIENCE_QUERY).await?;
    let mut entries = raw
        .into_iter()
        .map(serde_json::from_value)
        .collect::<std::result::Result<Vec<ExperienceEntry>, _>>()?;

    sort_experience(&mut entries);
    // formatted_date 計算在淺拷貝上，不動來源記錄
    Ok(entries.iter().map(|e| e.with_formatted_date()).collect())
}
