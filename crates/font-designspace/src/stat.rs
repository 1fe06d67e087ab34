//! Axis and location records for an external STAT table compiler.

use font_types::Tag;
use indexmap::IndexMap;
use read_fonts::tables::stat::AxisValueTableFlags;

use crate::{
    axis::{AxisLabel, LabelValue},
    document::{DesignSpace, LocationLabel},
    error::Result,
    stat_names::{DEFAULT_LANGUAGE, LocalisedNames},
};

/// Value fields of one STAT axis value, by format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// Format 1
    Single { value: f64 },
    /// Format 2
    Range {
        nominal: f64,
        minimum: f64,
        maximum: f64,
    },
    /// Format 3
    Linked { value: f64, linked: f64 },
}

impl StatValue {
    /// The STAT axis value table format number.
    pub const fn format(&self) -> u16 {
        match self {
            StatValue::Single { .. } => 1,
            StatValue::Range { .. } => 2,
            StatValue::Linked { .. } => 3,
        }
    }
}

/// One axis label as a STAT axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatAxisValue {
    pub name: LocalisedNames,
    pub value: StatValue,
    pub flags: AxisValueTableFlags,
}

/// One design axis record with its axis values.
#[derive(Debug, Clone, PartialEq)]
pub struct StatAxis {
    pub tag: Tag,
    pub name: LocalisedNames,
    pub ordering: u16,
    pub values: Vec<StatAxisValue>,
}

/// A free-standing location label as a format 4 axis value.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLocation {
    pub name: LocalisedNames,
    /// User-space value per axis tag
    pub location: IndexMap<Tag, f64>,
    pub flags: AxisValueTableFlags,
}

fn localised(name: &str, label_names: &IndexMap<String, String>) -> LocalisedNames {
    let mut names = LocalisedNames::new();
    names.insert(DEFAULT_LANGUAGE.to_string(), name.to_string());
    names.extend(label_names.iter().map(|(k, v)| (k.clone(), v.clone())));
    names
}

fn flags(older_sibling: bool, elidable: bool) -> AxisValueTableFlags {
    let mut flags = AxisValueTableFlags::empty();
    if older_sibling {
        flags |= AxisValueTableFlags::OLDER_SIBLING_FONT_ATTRIBUTE;
    }
    if elidable {
        flags |= AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME;
    }
    flags
}

fn axis_value(label: &AxisLabel) -> StatAxisValue {
    let value = match label.value {
        LabelValue::Single(value) => StatValue::Single { value },
        LabelValue::Range {
            nominal,
            minimum,
            maximum,
        } => StatValue::Range {
            nominal,
            minimum,
            maximum,
        },
        LabelValue::Linked { value, linked } => StatValue::Linked { value, linked },
    };
    StatAxisValue {
        name: localised(&label.name, &label.label_names),
        value,
        flags: flags(label.older_sibling, label.elidable),
    }
}

/// Axis records in document order.
///
/// Without explicit ordering ranks, an axis is ranked by its position.
pub fn stat_axes(doc: &DesignSpace) -> Result<Vec<StatAxis>> {
    // Fails on a mix of ranked and unranked axes.
    doc.axes_in_stat_order()?;
    Ok(doc
        .axes
        .iter()
        .enumerate()
        .map(|(index, axis)| StatAxis {
            tag: axis.tag,
            name: localised(&axis.name, &axis.label_names),
            ordering: axis.ordering.unwrap_or(index as u16),
            values: axis.labels.iter().map(axis_value).collect(),
        })
        .collect())
}

fn stat_location(doc: &DesignSpace, label: &LocationLabel) -> StatLocation {
    let location = label
        .full_user_location(doc)
        .into_iter()
        .filter_map(|(name, value)| doc.axis(&name).map(|axis| (axis.tag, value)))
        .collect();
    StatLocation {
        name: localised(&label.name, &label.label_names),
        location,
        flags: flags(label.older_sibling, label.elidable),
    }
}

/// Location records, one per free-standing location label.
pub fn stat_locations(doc: &DesignSpace) -> Vec<StatLocation> {
    doc.location_labels.iter().map(|label| stat_location(doc, label)).collect()
}
