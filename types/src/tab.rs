//! Panel routing.

use serde::{Deserialize, Serialize};

/// Which panel is on screen. Pure routing state: switching tabs has no
/// effect on any panel's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Chat,
    Images,
    Documents,
    Profile,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Chat, Self::Images, Self::Documents, Self::Profile];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Images => "Images",
            Self::Documents => "Documents",
            Self::Profile => "Profile",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Chat => 0,
            Self::Images => 1,
            Self::Documents => 2,
            Self::Profile => 3,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Chat => Self::Images,
            Self::Images => Self::Documents,
            Self::Documents => Self::Profile,
            Self::Profile => Self::Chat,
        }
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Chat => Self::Profile,
            Self::Images => Self::Chat,
            Self::Documents => Self::Images,
            Self::Profile => Self::Documents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Tab;

    #[test]
    fn cycling_visits_every_tab() {
        let mut tab = Tab::Chat;
        for expected in [Tab::Images, Tab::Documents, Tab::Profile, Tab::Chat] {
            tab = tab.next();
            assert_eq!(tab, expected);
        }
        assert_eq!(Tab::Chat.previous(), Tab::Profile);
    }
}
