//! # Category Registry
//!
//! The fixed set of ranking criteria and the static metadata that goes with
//! each one. `Category` is a closed enum and `descriptor()` is an exhaustive
//! match, so adding a category is a compile error until every table covers it.
//!
//! ```text
//! Category   fetch key        label      stat
//! ─────────  ───────────────  ─────────  ─────────────────────────
//! Top        rating           Rating     bayesian score, 2 decimals
//! Favourite  favourite        Follows    follow count, compact (1.5K)
//! New        latestArrivals   Comments   (none)
//! ```

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::format::{format_count, format_score};
use crate::core::item::Item;

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum,
)]
pub enum Category {
    #[default]
    Top,
    Favourite,
    New,
}

impl Category {
    /// Every category, in the order sources are evaluated and tabs are shown.
    pub const ALL: [Category; 3] = [Category::Top, Category::Favourite, Category::New];

    /// Registry key, as used in config files and selection requests.
    pub fn key(self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::Favourite => "Favourite",
            Category::New => "New",
        }
    }

    /// Key passed to the fetch collaborator.
    pub fn fetch_key(self) -> &'static str {
        match self {
            Category::Top => "rating",
            Category::Favourite => "favourite",
            Category::New => "latestArrivals",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::Top => 0,
            Category::Favourite => 1,
            Category::New => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn descriptor(self) -> &'static CategoryDescriptor {
        match self {
            Category::Top => &TOP,
            Category::Favourite => &FAVOURITE,
            Category::New => &NEW,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A category key that is not in the registry.
///
/// The selectable set is closed, so this only shows up at string boundaries
/// (config files, env vars). It indicates a mismatch and must not be
/// swallowed by falling back to a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidCategoryError(pub String);

impl fmt::Display for InvalidCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown category '{}' (expected one of: Top, Favourite, New)",
            self.0
        )
    }
}

impl std::error::Error for InvalidCategoryError {}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    /// Accepts registry keys, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InvalidCategoryError(s.to_string()))
    }
}

/// Presentation color for a category. Adapters map these to concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorToken {
    Yellow,
    Rose,
    Cyan,
}

/// Presentation icon for a category. Adapters map these to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconToken {
    Trophy,
    Star,
    Heart,
    UserPlus,
    Flame,
    MessageCircle,
}

/// How the per-item stat is derived for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatKind {
    /// Bayesian score with two decimals.
    Score,
    /// Follow count through `format_count`.
    Follows,
    /// No per-item stat is shown.
    Hidden,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub label: &'static str,
    pub stat: StatKind,
    pub color: ColorToken,
    pub title_icon: IconToken,
    pub stat_icon: IconToken,
}

impl CategoryDescriptor {
    pub fn key(&self) -> &'static str {
        self.category.key()
    }

    /// Derives the display stat for an item. Missing rating fields fall back
    /// to zero; categories with a hidden stat return `None`.
    pub fn stat_value(&self, item: &Item) -> Option<String> {
        match self.stat {
            StatKind::Score => Some(format_score(item.rating.bayesian_score)),
            StatKind::Follows => Some(format_count(item.rating.follow_count.unwrap_or(0))),
            StatKind::Hidden => None,
        }
    }
}

static TOP: CategoryDescriptor = CategoryDescriptor {
    category: Category::Top,
    title: "Top Ranked",
    subtitle: "Highest Rated Series",
    label: "Rating",
    stat: StatKind::Score,
    color: ColorToken::Yellow,
    title_icon: IconToken::Trophy,
    stat_icon: IconToken::Star,
};

static FAVOURITE: CategoryDescriptor = CategoryDescriptor {
    category: Category::Favourite,
    title: "Fan Favorites",
    subtitle: "Most Loved Series",
    label: "Follows",
    stat: StatKind::Follows,
    color: ColorToken::Rose,
    title_icon: IconToken::Heart,
    stat_icon: IconToken::UserPlus,
};

// Labelled "Comments" upstream, but there is no comment metric to show.
static NEW: CategoryDescriptor = CategoryDescriptor {
    category: Category::New,
    title: "New Arrivals",
    subtitle: "Recently Added Mangas",
    label: "Comments",
    stat: StatKind::Hidden,
    color: ColorToken::Cyan,
    title_icon: IconToken::Flame,
    stat_icon: IconToken::MessageCircle,
};
