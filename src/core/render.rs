use crate::domain::model::ProjectEntry;
use std::sync::Arc;

/// 渲染層消費的視覺屬性組。管線只描述目標值，不執行動畫。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualAttrs {
    pub opacity: f32,
    pub y_offset: f32,
    pub scale: f32,
}

impl VisualAttrs {
    /// 靜止狀態：完全可見、無位移
    pub const STEADY: VisualAttrs = VisualAttrs {
        opacity: 1.0,
        y_offset: 0.0,
        scale: 1.0,
    };

    /// 過場退出狀態：透明、往下位移 100
    pub const EXIT: VisualAttrs = VisualAttrs {
        opacity: 0.0,
        y_offset: 100.0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Mount,
    ViewportVisible,
    Hover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    Tween,
    EaseOut,
}

/// 宣告式動畫提示：目標屬性加觸發條件與時長。
/// 執行時機由渲染層決定，管線本身唯一的計時是過濾的過場延遲。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCue {
    pub target: VisualAttrs,
    pub trigger: Trigger,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl AnimationCue {
    pub fn viewport_enter() -> AnimationCue {
        AnimationCue {
            target: VisualAttrs::STEADY,
            trigger: Trigger::ViewportVisible,
            duration_ms: 500,
            easing: Easing::Tween,
        }
    }

    pub fn hover_scale(scale: f32) -> AnimationCue {
        AnimationCue {
            target: VisualAttrs {
                scale,
                ..VisualAttrs::STEADY
            },
            trigger: Trigger::Hover,
            duration_ms: 500,
            easing: Easing::Tween,
        }
    }
}

#[derive(Debug, Clone)]
pub enum ClickAction {
    /// 開啟詳情彈窗，以共享參照傳遞所選項目（不複製實體）
    OpenDetail(Arc<ProjectEntry>),
}

/// 單一可視項目的渲染契約。key 必須在一次渲染內穩定且唯一。
#[derive(Debug, Clone)]
pub struct RenderItem {
    pub key: String,
    pub label: String,
    pub steady: VisualAttrs,
    pub color: Option<String>,
    pub enter: AnimationCue,
    pub hover: Option<AnimationCue>,
    pub click: Option<ClickAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    PrimaryBg,
    WhiteBg,
}

impl StyleToken {
    pub fn class_name(&self) -> &'static str {
        match self {
            StyleToken::PrimaryBg => "app__primarybg",
            StyleToken::WhiteBg => "app__whitebg",
        }
    }
}

/// 區塊的版面描述，由呼叫端顯式傳入，取代巢狀包裝組合
#[derive(Debug, Clone)]
pub struct SectionLayout {
    pub nav_id: String,
    pub background: StyleToken,
}

impl SectionLayout {
    pub fn new(nav_id: &str, background: StyleToken) -> Self {
        Self {
            nav_id: nav_id.to_string(),
            background,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steady_and_exit_attrs() {
        assert_eq!(VisualAttrs::STEADY.opacity, 1.0);
        assert_eq!(VisualAttrs::STEADY.y_offset, 0.0);
        assert_eq!(VisualAttrs::EXIT.opacity, 0.0);
        assert_eq!(VisualAttrs::EXIT.y_offset, 100.0);
    }

    #[test]
    fn test_viewport_enter_cue_targets_steady() {
        let cue = AnimationCue::viewport_enter();
        assert_eq!(cue.target, VisualAttrs::STEADY);
        assert_eq!(cue.trigger, Trigger::ViewportVisible);
    }

    #[test]
    fn test_style_token_class_names() {
        assert_eq!(StyleToken::PrimaryBg.class_name(), "app__primarybg");
        assert_eq!(StyleToken::WhiteBg.class_name(), "app__whitebg");
    }
}
