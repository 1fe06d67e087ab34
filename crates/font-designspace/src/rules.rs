//! Subset substitution rules to a region selection.
//!
//! Per condition, against the selection value of its axis:
//! - pinned axis inside the condition: the condition always holds and is dropped
//! - pinned axis outside the condition: the whole conditionset is false
//! - kept range inside the condition: always holds, dropped
//! - kept range overlapping the condition: narrowed to the overlap
//! - kept range disjoint from the condition: the whole conditionset is false
//!
//! A rule survives when at least one conditionset does.

use log::debug;

use crate::{
    document::{Condition, Rule, condition_set_from},
    types::{ConditionSet, RegionSelection, Selection},
};

/// Subset `rules` so they stay correct inside the selected region.
///
/// Rule order and conditionset order are preserved; substitutions are copied.
pub fn subset_rules(rules: &[Rule], selection: &RegionSelection) -> Vec<Rule> {
    rules
        .iter()
        .filter_map(|rule| {
            let condition_sets: Vec<Vec<Condition>> = rule
                .condition_sets
                .iter()
                .filter_map(|conditions| {
                    subset_condition_set(&condition_set_from(conditions), selection)
                })
                .collect();
            if condition_sets.is_empty() {
                debug!("dropping rule '{}': no conditionset applies", rule.name);
                return None;
            }
            Some(Rule {
                name: rule.name.clone(),
                condition_sets,
                subs: rule.subs.clone(),
            })
        })
        .collect()
}

/// The conditions still needed inside the selection, or `None` when the
/// conditionset can never hold there.
fn subset_condition_set(
    condition_set: &ConditionSet,
    selection: &RegionSelection,
) -> Option<Vec<Condition>> {
    let mut conditions = Vec::new();
    for (name, selected) in selection {
        let Some(range) = condition_set.get(name) else {
            continue;
        };
        match selected {
            Selection::Point(value) => {
                if !range.contains(*value) {
                    return None;
                }
            }
            Selection::Range(selected) => {
                if range.contains_range(selected) {
                    continue;
                }
                let overlap = range.intersection(selected)?;
                conditions.push(Condition::from_range(name, overlap));
            }
        }
    }
    Some(conditions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Range;

    fn selection() -> RegionSelection {
        let mut selection = RegionSelection::new();
        selection.insert(
            "Weight".into(),
            Selection::Range(Range::new(84.0, 133.0)),
        );
        selection.insert("Italic".into(), Selection::Point(0.0));
        selection
    }

    fn rule(condition_sets: Vec<Vec<Condition>>) -> Rule {
        Rule {
            name: "test".into(),
            condition_sets,
            subs: vec![("dollar".into(), "dollar.alt".into())],
        }
    }

    #[test]
    fn pinned_axis_inside_condition_drops_it() {
        let rules = [rule(vec![vec![Condition::new("Italic", Some(0.0), Some(0.5))]])];
        let subset = subset_rules(&rules, &selection());
        assert_eq!(subset.len(), 1);
        assert_eq!(subset[0].condition_sets, vec![Vec::<Condition>::new()]);
        assert_eq!(subset[0].subs, rules[0].subs);
    }

    #[test]
    fn pinned_axis_outside_condition_discards_set() {
        let rules = [rule(vec![
            vec![Condition::new("Italic", Some(0.5), Some(1.0))],
            vec![Condition::new("Weight", Some(100.0), None)],
        ])];
        let subset = subset_rules(&rules, &selection());
        assert_eq!(
            subset[0].condition_sets,
            vec![vec![Condition::new("Weight", Some(100.0), Some(133.0))]]
        );
    }

    #[test]
    fn covered_range_drops_condition() {
        let rules = [rule(vec![vec![
            Condition::new("Weight", Some(50.0), Some(200.0)),
            Condition::new("Italic", None, Some(0.0)),
        ]])];
        let subset = subset_rules(&rules, &selection());
        assert_eq!(subset[0].condition_sets, vec![Vec::<Condition>::new()]);
    }

    #[test]
    fn overlapping_range_is_narrowed() {
        let rules = [rule(vec![vec![Condition::new("Weight", None, Some(100.0))]])];
        let subset = subset_rules(&rules, &selection());
        assert_eq!(
            subset[0].condition_sets,
            vec![vec![Condition::new("Weight", Some(84.0), Some(100.0))]]
        );
    }

    #[test]
    fn rule_without_surviving_sets_is_dropped() {
        let rules = [
            rule(vec![vec![Condition::new("Weight", Some(150.0), Some(200.0))]]),
            rule(vec![vec![Condition::new("Italic", Some(1.0), Some(1.0))]]),
        ];
        assert!(subset_rules(&rules, &selection()).is_empty());
    }

    #[test]
    fn rule_on_other_axes_is_kept_unconstrained() {
        let rules = [rule(vec![
            vec![Condition::new("Optical Size", Some(20.0), Some(60.0))],
            vec![Condition::new("Grade", None, Some(0.0))],
        ])];
        let subset = subset_rules(&rules, &selection());
        assert_eq!(
            subset[0].condition_sets,
            vec![Vec::<Condition>::new(), Vec::new()]
        );
    }

    #[test]
    fn subsetting_is_idempotent() {
        let rules = [
            rule(vec![
                vec![Condition::new("Weight", Some(100.0), Some(500.0))],
                vec![
                    Condition::new("Weight", None, Some(90.0)),
                    Condition::new("Italic", Some(0.0), None),
                ],
            ]),
            rule(vec![vec![Condition::new("Italic", Some(1.0), None)]]),
        ];
        let once = subset_rules(&rules, &selection());
        let twice = subset_rules(&once, &selection());
        assert_eq!(once, twice);
        assert_eq!(once.len(), 1);
    }
}
