//! Cosmetic behaviour with no effect on form data: hover lifts, task dimming,
//! post buttons and the stubs that only log what the user meant to do.

use serde::Serialize;

/// Cards that lift on hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverCard {
    Team,
    Feature,
}

impl HoverCard {
    pub fn class(self) -> &'static str {
        match self {
            HoverCard::Team => "team-card",
            HoverCard::Feature => "feature-card",
        }
    }

    pub fn lift_px(self) -> u32 {
        match self {
            HoverCard::Team => 6,
            HoverCard::Feature => 8,
        }
    }

    /// Inline transform for the last pointer event; `None` before the first one.
    pub fn transform(self, hovered: Option<bool>) -> Option<String> {
        hovered.map(|over| {
            if over {
                format!("transform: translateY(-{}px);", self.lift_px())
            } else {
                "transform: translateY(0);".to_string()
            }
        })
    }
}

pub fn task_opacity(done: bool) -> &'static str {
    if done { "0.6" } else { "1" }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Like,
    Comment,
    Share,
}

impl PostAction {
    /// Matches on the button caption, which may carry an emoji prefix.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.contains("Like") {
            Some(PostAction::Like)
        } else if label.contains("Comment") {
            Some(PostAction::Comment)
        } else if label.contains("Share") {
            Some(PostAction::Share)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostAction::Like => "👍 Like",
            PostAction::Comment => "💬 Comment",
            PostAction::Share => "↗ Share",
        }
    }

    /// Alert text for actions that are not built yet.
    pub fn coming_soon(self) -> Option<&'static str> {
        match self {
            PostAction::Like => None,
            PostAction::Comment => Some("Comment feature coming soon!"),
            PostAction::Share => Some("Share feature coming soon!"),
        }
    }
}

pub const LIKED_LABEL: &str = "👍 Liked";

/// Previous/next arrows and bare page numbers count as pagination buttons.
pub fn is_pagination_label(label: &str) -> bool {
    label.contains('←')
        || label.contains('→')
        || (!label.is_empty() && label.chars().all(|c| c.is_ascii_digit()))
}

pub fn normalize_search(term: &str) -> String {
    term.to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_transform_tracks_pointer() {
        assert_eq!(HoverCard::Team.transform(None), None);
        assert_eq!(
            HoverCard::Team.transform(Some(true)).as_deref(),
            Some("transform: translateY(-6px);")
        );
        assert_eq!(
            HoverCard::Feature.transform(Some(true)).as_deref(),
            Some("transform: translateY(-8px);")
        );
        assert_eq!(
            HoverCard::Feature.transform(Some(false)).as_deref(),
            Some("transform: translateY(0);")
        );
    }

    #[test]
    fn post_actions_parse_from_captions() {
        assert_eq!(PostAction::from_label(" 👍 Like "), Some(PostAction::Like));
        assert_eq!(PostAction::from_label(LIKED_LABEL), Some(PostAction::Like));
        assert_eq!(PostAction::from_label("💬 Comment"), Some(PostAction::Comment));
        assert_eq!(PostAction::from_label("Share"), Some(PostAction::Share));
        assert_eq!(PostAction::from_label("Bookmark"), None);
    }

    #[test]
    fn only_like_is_implemented() {
        assert!(PostAction::Like.coming_soon().is_none());
        assert!(PostAction::Share.coming_soon().is_some());
    }

    #[test]
    fn pagination_labels() {
        assert!(is_pagination_label("← Prev"));
        assert!(is_pagination_label("Next →"));
        assert!(is_pagination_label("12"));
        assert!(!is_pagination_label(""));
        assert!(!is_pagination_label("Load More"));
        assert!(!is_pagination_label("1a"));
    }

    #[test]
    fn task_dims_when_done() {
        assert_eq!(task_opacity(true), "0.6");
        assert_eq!(task_opacity(false), "1");
    }
}
