//! Heading hierarchy rules.
//!
//! A document's headings are checked in a single forward pass. Each heading is
//! compared only against the heading immediately before it, so a level that is
//! skipped once is reported once and never re-flagged later in the document.

use pagescan_document::Heading;
use serde::Serialize;

/// A hierarchy violation found at one heading.
///
/// `position` is the 1-based index of the offending heading in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HierarchyIssue {
    /// The document's first heading is not an `h1`.
    FirstNotH1 {
        /// 1-based heading position (always 1).
        position: usize,
        /// The offending heading.
        heading: Heading,
    },
    /// A heading is more than one level deeper than the heading before it.
    SkippedLevels {
        /// 1-based heading position.
        position: usize,
        /// The offending heading.
        heading: Heading,
        /// Level of the preceding heading, 0 when there is none.
        previous_level: u8,
        /// Level of the offending heading.
        current_level: u8,
        /// Every level strictly between `previous_level` and `current_level`.
        skipped_levels: Vec<u8>,
    },
}

impl HierarchyIssue {
    /// The 1-based position of the offending heading.
    pub fn position(&self) -> usize {
        match self {
            Self::FirstNotH1 { position, .. } | Self::SkippedLevels { position, .. } => *position,
        }
    }

    /// The offending heading.
    pub fn heading(&self) -> &Heading {
        match self {
            Self::FirstNotH1 { heading, .. } | Self::SkippedLevels { heading, .. } => heading,
        }
    }

    /// Machine name of the issue kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FirstNotH1 { .. } => "first_not_h1",
            Self::SkippedLevels { .. } => "skipped_levels",
        }
    }

    /// One-line human-readable description.
    pub fn description(&self) -> String {
        match self {
            Self::FirstNotH1 { heading, .. } => {
                format!("First heading is {}, should be h1", heading.tag)
            }
            Self::SkippedLevels {
                heading,
                previous_level,
                skipped_levels,
                ..
            } => {
                let missing: Vec<String> = skipped_levels.iter().map(|l| format!("h{l}")).collect();
                format!(
                    "Skipped from h{previous_level} to {}, missing levels: {}",
                    heading.tag,
                    missing.join(", ")
                )
            }
        }
    }
}

/// Outcome of checking one heading sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HierarchyCheck {
    /// Issues in detection order.
    pub issues: Vec<HierarchyIssue>,
}

impl HierarchyCheck {
    /// True when no issue was found, including for an empty sequence.
    pub fn is_proper(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates a heading sequence.
///
/// The first heading must be an `h1`, and no heading may be more than one level
/// deeper than the heading right before it. Both rules can fire on the same
/// heading. Going shallower by any amount is always allowed.
pub fn check_hierarchy(headings: &[Heading]) -> HierarchyCheck {
    let mut issues = Vec::new();
    let mut previous_level = 0u8;

    for (i, heading) in headings.iter().enumerate() {
        let current_level = heading.level;
        let position = i + 1;

        if i == 0 && current_level != 1 {
            issues.push(HierarchyIssue::FirstNotH1 {
                position,
                heading: heading.clone(),
            });
        }

        if current_level > previous_level + 1 {
            issues.push(HierarchyIssue::SkippedLevels {
                position,
                heading: heading.clone(),
                previous_level,
                current_level,
                skipped_levels: (previous_level + 1..current_level).collect(),
            });
        }

        previous_level = current_level;
    }

    HierarchyCheck { issues }
}
