//! Region selection for one virtual font.
//!
//! A virtual font keeps some axes as (possibly narrowed) ranges and pins the
//! rest to single values. Axes it does not mention are pinned at their default.

use indexmap::IndexMap;
use log::debug;

use crate::{
    axis::{Axis, AxisKind},
    document::{AxisSubset, DesignSpace, VariableFont},
    error::{Error, Result},
    types::{Range, RegionSelection, Selection},
};

/// The axes of a virtual font, split into kept and pinned ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetAxes {
    /// Reduced copies of the axes kept as ranges, keyed by axis name
    pub ranged: IndexMap<String, Axis>,
    /// Pinned axes and their user value, keyed by axis name
    pub pinned: IndexMap<String, f64>,
}

impl SubsetAxes {
    /// Split the document axes according to the virtual font's subsets.
    pub fn from_variable_font(doc: &DesignSpace, vf: &VariableFont) -> Result<Self> {
        let mut ranged = IndexMap::new();
        let mut pinned = IndexMap::new();

        for subset in &vf.axis_subsets {
            let axis = doc
                .axis(subset.name())
                .ok_or_else(|| Error::UnknownAxis(subset.name().to_string()))?;
            match subset {
                AxisSubset::Range {
                    user_minimum,
                    user_default,
                    user_maximum,
                    ..
                } => {
                    let reduced = reduce_axis(axis, *user_minimum, *user_default, *user_maximum)?;
                    ranged.insert(axis.name.clone(), reduced);
                }
                AxisSubset::Value { user_value, .. } => {
                    pinned.insert(axis.name.clone(), *user_value);
                }
            }
        }

        for axis in &doc.axes {
            if !ranged.contains_key(&axis.name) && !pinned.contains_key(&axis.name) {
                debug!(
                    "{}: pinning unmentioned axis '{}' at {}",
                    vf.output_name(),
                    axis.name,
                    axis.default()
                );
                pinned.insert(axis.name.clone(), axis.default());
            }
        }

        Ok(Self { ranged, pinned })
    }

    /// Build the selection: kept axes become design-space ranges, pinned axes
    /// keep their value as given.
    pub fn region_selection(&self) -> RegionSelection {
        region_selection_from(&self.ranged, &self.pinned)
    }
}

/// Combine kept and pinned axes into a [`RegionSelection`].
pub fn region_selection_from(
    ranged: &IndexMap<String, Axis>,
    pinned: &IndexMap<String, f64>,
) -> RegionSelection {
    let mut selection = RegionSelection::new();
    for (name, axis) in ranged {
        let range = Range::new(
            axis.map_forward(axis.minimum()),
            axis.map_forward(axis.maximum()),
        );
        selection.insert(name.clone(), Selection::Range(range));
    }
    for (name, value) in pinned {
        selection.insert(name.clone(), Selection::Point(*value));
    }
    selection
}

/// Restrict `axis` to a user-space window.
///
/// The reduced axis keeps the tag, names and labels, drops the ordering rank,
/// and keeps only the mapping control points inside the window. Its default
/// is clamped into the reduced range.
fn reduce_axis(
    axis: &Axis,
    minimum: Option<f64>,
    default: Option<f64>,
    maximum: Option<f64>,
) -> Result<Axis> {
    let window = Range::from_bounds(minimum, maximum);
    let bounds = window
        .intersection(&Range::new(axis.minimum(), axis.maximum()))
        .ok_or_else(|| Error::EmptyAxisSubset {
            axis: axis.name.clone(),
        })?;
    let default = default
        .unwrap_or(axis.default())
        .clamp(bounds.start, bounds.end);

    let map = axis
        .map()
        .iter()
        .copied()
        .filter(|(user, _)| window.contains(*user))
        .collect();

    Ok(Axis {
        tag: axis.tag,
        name: axis.name.clone(),
        label_names: axis.label_names.clone(),
        hidden: axis.hidden,
        ordering: None,
        labels: axis.labels.clone(),
        kind: AxisKind::Continuous {
            minimum: bounds.start,
            default,
            maximum: bounds.end,
            map,
        },
    })
}
