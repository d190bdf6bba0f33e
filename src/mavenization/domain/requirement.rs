use super::{BundleId, VersionRange};
use std::collections::HashMap;

/// One raw requirement specification as reported by the graph provider.
///
/// Several specifications may exist between the same two bundles (one per
/// imported package plus a `Require-Bundle` entry, for example).
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementSpec {
    pub to: BundleId,
    pub optional: bool,
    pub range: VersionRange,
}

impl RequirementSpec {
    pub fn new(to: BundleId, optional: bool, range: VersionRange) -> Self {
        Self {
            to,
            optional,
            range,
        }
    }
}

/// Collapsed requirement edge between two bundles
#[derive(Debug, Clone, PartialEq)]
pub struct Requirement {
    pub from: BundleId,
    pub to: BundleId,
    pub optional: bool,
    pub range: VersionRange,
}

impl Requirement {
    /// Collapses raw specifications into one requirement per target bundle.
    ///
    /// Ranges intersect; the edge stays optional only while every contributing
    /// specification is optional. Targets keep first-seen order, so the result
    /// depends on the provider's iteration order.
    pub fn collapse(from: &BundleId, specs: Vec<RequirementSpec>) -> Vec<Requirement> {
        let mut collapsed: Vec<Requirement> = Vec::new();
        let mut index: HashMap<BundleId, usize> = HashMap::new();

        for spec in specs {
            match index.get(&spec.to) {
                Some(&position) => {
                    let existing = &mut collapsed[position];
                    existing.optional = existing.optional && spec.optional;
                    existing.range = existing.range.intersect(&spec.range);
                }
                None => {
                    index.insert(spec.to.clone(), collapsed.len());
                    collapsed.push(Requirement {
                        from: from.clone(),
                        to: spec.to,
                        optional: spec.optional,
                        range: spec.range,
                    });
                }
            }
        }

        collapsed
    }

    pub fn is_self_edge(&self) -> bool {
        self.from == self.to
    }
}
