use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// CMS 資產參照，例如 "image-abc123-400x300-png"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 指向另一個文件的參照（CMS 的 _ref 欄位）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "_ref")]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileEntry {
    pub title: String,
    pub description: String,
    #[serde(rename = "imgUrl")]
    pub image: ImageRef,
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub order: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub icon: ImageRef,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    #[serde(rename = "skillGroup")]
    pub skill_group: Option<Reference>,
    /// level 換算的百分比，填充狀態時計算一次，不在每次渲染時重算
    #[serde(skip_deserializing, default)]
    pub level_percent: f32,
}

impl Skill {
    pub fn compute_level_percent(level: u8) -> f32 {
        (level as f32 / 5.0) * 100.0
    }

    pub fn in_group(&self, group: &SkillGroup) -> bool {
        self.skill_group
            .as_ref()
            .map(|r| r.id == group.id)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub works: Vec<WorkRecord>,
    /// 年-月格式的衍生欄位，只在填充狀態時於淺拷貝上計算，不回寫來源記錄
    #[serde(skip_deserializing, default)]
    pub formatted_date: Option<String>,
}

impl ExperienceEntry {
    pub fn with_formatted_date(&self) -> ExperienceEntry {
        let mut entry = self.clone();
        entry.formatted_date = Some(self.date.format("%Y-%m").to_string());
        entry
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    #[serde(rename = "_key")]
    pub key: String,
    pub name: String,
    pub company: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    #[serde(rename = "imgUrl")]
    pub image: ImageRef,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 合成分類，永遠存在於分類全集中
pub const ALL_CATEGORY: &str = "All";

pub fn sort_profiles(entries: &mut [ProfileEntry]) {
    entries.sort_by_key(|e| e.order);
}

pub fn sort_skill_groups(groups: &mut [SkillGroup]) {
    groups.sort_by_key(|g| g.order);
}

/// level 降冪，同分以名稱首字元的 code point 升冪
pub fn sort_skills(skills: &mut [Skill]) {
    skills.sort_by(|a, b| {
        b.level
            .cmp(&a.level)
            .then_with(|| first_char(&a.name).cmp(&first_char(&b.name)))
    });
}

fn first_char(name: &str) -> char {
    name.chars().next().unwrap_or('\0')
}

pub fn sort_experience(entries: &mut [ExperienceEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// 分類全集：所有 tag 的聯集加上合成的 "All"。
/// 只在初次填充時計算一次，"All" 在最前，其餘依首次出現順序。
pub fn category_universe<'a, I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a ProjectEntry>,
{
    let mut categories = vec![ALL_CATEGORY.to_string()];
    let mut seen: HashSet<&str> = HashSet::new();
    seen.insert(ALL_CATEGORY);

    for item in items {
        for tag in &item.tags {
            if seen.insert(tag) {
                categories.push(tag.clone());
            }
        }
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(title: &str, order: i64) -> ProfileEntry {
        ProfileEntry {
            title: title.to_string(),
            description: String::new(),
            image: ImageRef("image-a-1x1-png".to_string()),
            order,
        }
    }

    fn skill(name: &str, level: u8) -> Skill {
        Skill {
            name: name.to_string(),
            level,
            icon: ImageRef("image-a-1x1-png".to_string()),
            bg_color: "#fff".to_string(),
            skill_group: None,
            level_percent: 0.0,
        }
    }

    fn project(title: &str, tags: &[&str]) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            description: String::new(),
            image: ImageRef("image-a-1x1-png".to_string()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_profiles_sorted_ascending_by_order() {
        let mut entries = vec![profile("c", 3), profile("a", 1), profile("b", 2)];
        sort_profiles(&mut entries);

        for pair in entries.windows(2) {
            assert!(pair[0].order <= pair[1].order);
        }
        assert_eq!(entries[0].title, "a");
        assert_eq!(entries[2].title, "c");
    }

    #[test]
    fn test_skills_sorted_by_level_then_first_char() {
        let mut skills = vec![
            skill("Rust", 3),
            skill("Go", 5),
            skill("C", 3),
            skill("Zig", 1),
        ];
        sort_skills(&mut skills);

        let names: Vec<&str> = skills.iter().map(|s| s.name.as_str()).collect();
        // Level 5 first, then the two level-3 skills tie-broken by 'C' < 'R'
        assert_eq!(names, vec!["Go", "C", "Rust", "Zig"]);
    }

    #[test]
    fn test_experience_sorted_descending_by_date() {
        let mut entries = vec![
            ExperienceEntry {
                date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
                works: vec![],
                formatted_date: None,
            },
            ExperienceEntry {
                date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
                works: vec![],
                formatted_date: None,
            },
        ];
        sort_experience(&mut entries);

        assert!(entries[0].date >= entries[1].date);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
    }

    #[test]
    fn test_formatted_date_is_year_month() {
        let entry = ExperienceEntry {
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            works: vec![],
            formatted_date: None,
        };

        let formatted = entry.with_formatted_date();
        assert_eq!(formatted.formatted_date.as_deref(), Some("2023-06"));
        // Source entry is untouched
        assert!(entry.formatted_date.is_none());
    }

    #[test]
    fn test_level_percent() {
        assert_eq!(Skill::compute_level_percent(5), 100.0);
        assert_eq!(Skill::compute_level_percent(3), 60.0);
        assert_eq!(Skill::compute_level_percent(0), 0.0);
    }

    #[test]
    fn test_category_universe_is_tag_union_plus_all() {
        let items = vec![
            project("one", &["A"]),
            project("two", &["B"]),
            project("three", &["A", "B"]),
        ];

        let categories = category_universe(&items);
        assert_eq!(categories, vec!["All", "A", "B"]);

        // Item order must not change the set
        let reversed: Vec<ProjectEntry> = items.iter().rev().cloned().collect();
        let mut a = category_universe(&reversed);
        let mut b = categories.clone();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn test_category_universe_does_not_duplicate_all() {
        let items = vec![project("one", &["All", "A"])];
        let categories = category_universe(&items);
        assert_eq!(categories, vec!["All", "A"]);
    }

    #[test]
    fn test_skill_group_membership() {
        let group = SkillGroup {
            id: "g1".to_string(),
            name: "Backend".to_string(),
            order: 1,
        };
        let mut s = skill("Rust", 5);
        assert!(!s.in_group(&group));

        s.skill_group = Some(Reference {
            id: "g1".to_string(),
        });
        assert!(s.in_group(&group));
    }
}
