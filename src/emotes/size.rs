//! Emote size selection.
//!
//! Translates the configured size category into the size codes each
//! provider's CDN understands. 7TV and BetterTTV share one scheme
//! (`1x`/`2x`/`3x`), FrankerFaceZ uses its own (`1`/`2`/`4`).

use std::fmt;

/// User-facing coarse size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SizeCategory {
    Small,
    Medium,
    #[default]
    Large,
}

impl SizeCategory {
    /// Parse a category name. Only the exact lowercase names are recognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider-specific size codes for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeCodes {
    /// Code used in 7TV and BetterTTV CDN paths.
    pub generic: &'static str,
    /// Code used in FrankerFaceZ CDN paths.
    pub ffz: &'static str,
}

impl SizeCodes {
    pub fn for_size(category: SizeCategory) -> Self {
        match category {
            SizeCategory::Small => Self { generic: "1x", ffz: "1" },
            SizeCategory::Medium => Self { generic: "2x", ffz: "2" },
            SizeCategory::Large => Self { generic: "3x", ffz: "4" },
        }
    }

    /// Map a raw category name to size codes.
    ///
    /// Absent or unrecognized names fall back to the `large` codes.
    pub fn for_category(name: Option<&str>) -> Self {
        let category = name
            .and_then(SizeCategory::from_name)
            .unwrap_or(SizeCategory::Large);
        Self::for_size(category)
    }
}

impl Default for SizeCodes {
    fn default() -> Self {
        Self::for_size(SizeCategory::Large)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_categories() {
        assert_eq!(
            SizeCodes::for_category(Some("small")),
            SizeCodes { generic: "1x", ffz: "1" }
        );
        assert_eq!(
            SizeCodes::for_category(Some("medium")),
            SizeCodes { generic: "2x", ffz: "2" }
        );
        assert_eq!(
            SizeCodes::for_category(Some("large")),
            SizeCodes { generic: "3x", ffz: "4" }
        );
    }

    #[test]
    fn test_unknown_category_falls_back_to_large() {
        let large = SizeCodes::for_category(Some("large"));
        assert_eq!(SizeCodes::for_category(Some("huge")), large);
        assert_eq!(SizeCodes::for_category(Some("")), large);
        assert_eq!(SizeCodes::for_category(None), large);
    }

    #[test]
    fn test_category_names_match_exactly() {
        assert_eq!(SizeCategory::from_name("small"), Some(SizeCategory::Small));
        assert_eq!(SizeCategory::from_name("Small"), None);
        assert_eq!(SizeCategory::from_name(" medium "), None);
        assert_eq!(SizeCategory::from_name("xl"), None);

        let large = SizeCodes::for_category(Some("large"));
        assert_eq!(SizeCodes::for_category(Some("Small")), large);
        assert_eq!(SizeCodes::for_category(Some("MEDIUM")), large);
    }

    #[test]
    fn test_default_is_large() {
        assert_eq!(SizeCategory::default(), SizeCategory::Large);
        assert_eq!(SizeCodes::default(), SizeCodes::for_size(SizeCategory::Large));
    }
}
