//! Fixed attribute facets shown in the filter sidebar and the per-group
//! selection sets that drive attribute filtering.

use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use serde::Serialize;

use crate::CoreError;

/// One of the eight attribute facets. Each has a fixed option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeGroup {
    IdealFor,
    Occasion,
    Work,
    Fabric,
    Segment,
    SuitableFor,
    RawMaterials,
    Pattern,
}

impl AttributeGroup {
    /// All groups, in sidebar order.
    pub const ALL: [AttributeGroup; 8] = [
        AttributeGroup::IdealFor,
        AttributeGroup::Occasion,
        AttributeGroup::Work,
        AttributeGroup::Fabric,
        AttributeGroup::Segment,
        AttributeGroup::SuitableFor,
        AttributeGroup::RawMaterials,
        AttributeGroup::Pattern,
    ];

    /// Display label, e.g. `"IDEAL FOR"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AttributeGroup::IdealFor => "IDEAL FOR",
            AttributeGroup::Occasion => "OCCASION",
            AttributeGroup::Work => "WORK",
            AttributeGroup::Fabric => "FABRIC",
            AttributeGroup::Segment => "SEGMENT",
            AttributeGroup::SuitableFor => "SUITABLE FOR",
            AttributeGroup::RawMaterials => "RAW MATERIALS",
            AttributeGroup::Pattern => "PATTERN",
        }
    }

    #[must_use]
    pub fn options(self) -> &'static [&'static str] {
        match self {
            AttributeGroup::IdealFor => &["Men", "Women", "Baby & Kids"],
            AttributeGroup::Occasion => &["Party", "Casual", "Formal"],
            AttributeGroup::Work => &["Office", "Remote", "Field"],
            AttributeGroup::Fabric => &["Cotton", "Wool", "Silk"],
            AttributeGroup::Segment => &["Premium", "Budget"],
            AttributeGroup::SuitableFor => &["Summer", "Winter"],
            AttributeGroup::RawMaterials => &["Organic", "Synthetic"],
            AttributeGroup::Pattern => &["Solid", "Striped", "Checked"],
        }
    }

    /// Resolves free text to one of this group's option labels (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownAttributeOption`] if no option matches.
    pub fn resolve_option(self, option: &str) -> Result<&'static str, CoreError> {
        let wanted = option.trim();
        self.options()
            .iter()
            .copied()
            .find(|o| o.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownAttributeOption {
                group: self.label().to_string(),
                option: option.to_string(),
            })
    }
}

impl std::fmt::Display for AttributeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display label (`"IDEAL FOR"`) or a slug (`"ideal-for"`,
/// `"ideal_for"`), case-insensitively.
impl FromStr for AttributeGroup {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ").to_ascii_uppercase();
        AttributeGroup::ALL
            .into_iter()
            .find(|g| g.label() == normalized)
            .ok_or_else(|| CoreError::UnknownAttributeGroup(s.to_string()))
    }
}

/// Parses a `GROUP:Option` selector such as `"fabric:cotton"`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidAttributeSelector`] when the colon is missing,
/// or the group/option errors from [`AttributeGroup::from_str`] and
/// [`AttributeGroup::resolve_option`].
pub fn parse_selector(selector: &str) -> Result<(AttributeGroup, &'static str), CoreError> {
    let (group, option) = selector
        .split_once(':')
        .ok_or_else(|| CoreError::InvalidAttributeSelector(selector.to_string()))?;
    let group: AttributeGroup = group.parse()?;
    let option = group.resolve_option(option)?;
    Ok((group, option))
}

/// Current selection set for every attribute group. Groups with no entry
/// (or an empty set) impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupSelections {
    selected: BTreeMap<AttributeGroup, BTreeSet<&'static str>>,
}

impl GroupSelections {
    /// Adds (`included = true`) or removes a single option.
    pub fn toggle(&mut self, group: AttributeGroup, option: &'static str, included: bool) {
        debug_assert!(
            group.options().contains(&option),
            "{option} is not an option of {group}"
        );
        if included {
            self.selected.entry(group).or_default().insert(option);
        } else if let Some(set) = self.selected.get_mut(&group) {
            set.remove(option);
        }
    }

    /// Selects every option of `group`.
    pub fn select_all(&mut self, group: AttributeGroup) {
        self.selected
            .insert(group, group.options().iter().copied().collect());
    }

    pub fn clear_group(&mut self, group: AttributeGroup) {
        self.selected.remove(&group);
    }

    /// Selected options of `group`, in option-list order.
    #[must_use]
    pub fn selected(&self, group: AttributeGroup) -> Vec<&'static str> {
        let Some(set) = self.selected.get(&group) else {
            return Vec::new();
        };
        group
            .options()
            .iter()
            .copied()
            .filter(|o| set.contains(o))
            .collect()
    }

    #[must_use]
    pub fn is_selected(&self, group: AttributeGroup, option: &str) -> bool {
        self.selected
            .get(&group)
            .is_some_and(|set| set.contains(option))
    }

    /// Groups with at least one selected option, paired with their selections.
    pub fn active(&self) -> impl Iterator<Item = (AttributeGroup, &BTreeSet<&'static str>)> {
        self.selected
            .iter()
            .filter(|(_, set)| !set.is_empty())
            .map(|(group, set)| (*group, set))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }
}
