//! Designspace document model.
//!
//! Documents are assumed to come from an external reader; this module only
//! holds the object graph and the lookups the conversion needs.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::{
    axis::Axis,
    error::{Error, Result},
    types::{ConditionSet, Location, Range},
};

/// Custom metadata attached to a document or virtual font.
pub type Lib = IndexMap<String, LibValue>;

/// A property-list value stored in a [`Lib`].
#[derive(Debug, Clone, PartialEq)]
pub enum LibValue {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<LibValue>),
    Dict(IndexMap<String, LibValue>),
}

impl From<&str> for LibValue {
    fn from(value: &str) -> Self {
        LibValue::String(value.to_string())
    }
}

/// A master in the designspace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub filename: Option<String>,
    pub path: Option<PathBuf>,
    pub name: Option<String>,
    /// Design-space location
    pub location: Location,
    pub layer_name: Option<String>,
    pub family_name: Option<String>,
    pub localised_family_name: IndexMap<String, String>,
    pub style_name: Option<String>,
    pub mute_kerning: bool,
    pub mute_info: bool,
    pub muted_glyph_names: Vec<String>,
}

impl Source {
    /// Create a source at the given design location.
    pub fn new(filename: &str, location: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        Self {
            filename: Some(filename.to_string()),
            location: location
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..Self::default()
        }
    }

    /// Set the family name.
    pub fn with_family_name(mut self, name: &str) -> Self {
        self.family_name = Some(name.to_string());
        self
    }

    /// Set the style name.
    pub fn with_style_name(mut self, name: &str) -> Self {
        self.style_name = Some(name.to_string());
        self
    }
}

/// A named instance in the designspace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Instance {
    pub filename: Option<String>,
    pub path: Option<PathBuf>,
    pub name: Option<String>,
    /// Design-space location
    pub design_location: Location,
    /// User-space values for axes missing from `design_location`
    pub user_location: Location,
    /// Name of a [`LocationLabel`] giving this instance's location
    pub location_label: Option<String>,
    pub family_name: Option<String>,
    pub style_name: Option<String>,
    pub postscript_font_name: Option<String>,
    pub style_map_family_name: Option<String>,
    pub style_map_style_name: Option<String>,
    pub localised_family_name: IndexMap<String, String>,
    pub localised_style_name: IndexMap<String, String>,
    pub localised_style_map_family_name: IndexMap<String, String>,
    pub localised_style_map_style_name: IndexMap<String, String>,
    pub lib: Lib,
}

impl Instance {
    /// Create an instance at the given design location.
    pub fn new(filename: &str, location: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        Self {
            filename: Some(filename.to_string()),
            design_location: location
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..Self::default()
        }
    }

    /// Create an instance positioned by a location label.
    pub fn at_label(filename: &str, label: &str) -> Self {
        Self {
            filename: Some(filename.to_string()),
            location_label: Some(label.to_string()),
            ..Self::default()
        }
    }

    pub fn with_style_name(mut self, name: &str) -> Self {
        self.style_name = Some(name.to_string());
        self
    }

    /// A name identifying the instance in error messages.
    pub fn identity(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.filename.clone())
            .or_else(|| self.style_name.clone())
            .unwrap_or_else(|| format!("{:?}", self.design_location))
    }

    /// The complete user-space location of this instance.
    ///
    /// A location label wins. Otherwise each axis takes its design value mapped
    /// backward, else its user value, else the axis default.
    pub fn full_user_location(&self, doc: &DesignSpace) -> Result<Location> {
        if let Some(name) = &self.location_label {
            let label = doc
                .location_label(name)
                .ok_or_else(|| Error::UnknownLocationLabel(name.clone()))?;
            return Ok(label.full_user_location(doc));
        }
        Ok(doc
            .axes
            .iter()
            .map(|axis| {
                let value = match (
                    self.design_location.get(&axis.name),
                    self.user_location.get(&axis.name),
                ) {
                    (Some(design), _) => axis.map_backward(*design),
                    (None, Some(user)) => *user,
                    (None, None) => axis.default(),
                };
                (axis.name.clone(), value)
            })
            .collect())
    }
}

/// A free-standing named location (a STAT format 4 axis value).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationLabel {
    pub name: String,
    pub label_names: IndexMap<String, String>,
    /// User-space location; missing axes sit at their default
    pub user_location: Location,
    pub elidable: bool,
    pub older_sibling: bool,
}

impl LocationLabel {
    pub fn new(name: &str, location: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        Self {
            name: name.to_string(),
            user_location: location
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            ..Self::default()
        }
    }

    /// The label's user location with every document axis filled in.
    pub fn full_user_location(&self, doc: &DesignSpace) -> Location {
        doc.axes
            .iter()
            .map(|axis| {
                let value = self
                    .user_location
                    .get(&axis.name)
                    .copied()
                    .unwrap_or(axis.default());
                (axis.name.clone(), value)
            })
            .collect()
    }
}

/// One condition of a rule, on one axis. Missing bounds are open.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub name: String,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
}

impl Condition {
    pub fn new(name: &str, minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            minimum,
            maximum,
        }
    }

    /// A condition spanning `range`; infinite ends become open bounds.
    pub fn from_range(name: &str, range: Range) -> Self {
        let bound = |value: f64| value.is_finite().then_some(value);
        Self::new(name, bound(range.start), bound(range.end))
    }

    pub fn range(&self) -> Range {
        Range::from_bounds(self.minimum, self.maximum)
    }
}

/// A conditional glyph substitution rule.
///
/// The rule applies when any of its conditionsets matches; a conditionset
/// matches when all of its conditions hold.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub name: String,
    pub condition_sets: Vec<Vec<Condition>>,
    /// `(from, to)` glyph name pairs, passed through untouched
    pub subs: Vec<(String, String)>,
}

impl Rule {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_condition_set(mut self, conditions: Vec<Condition>) -> Self {
        self.condition_sets.push(conditions);
        self
    }

    pub fn with_sub(mut self, from: &str, to: &str) -> Self {
        self.subs.push((from.to_string(), to.to_string()));
        self
    }
}

/// Collapse a list of conditions into a [`ConditionSet`].
///
/// A later condition on the same axis replaces an earlier one.
pub fn condition_set_from(conditions: &[Condition]) -> ConditionSet {
    conditions
        .iter()
        .map(|condition| (condition.name.clone(), condition.range()))
        .collect()
}

/// How a virtual font uses one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisSubset {
    /// Keep the axis, optionally narrowed (user space).
    Range {
        name: String,
        user_minimum: Option<f64>,
        user_default: Option<f64>,
        user_maximum: Option<f64>,
    },
    /// Pin the axis to one user value.
    Value { name: String, user_value: f64 },
}

impl AxisSubset {
    /// Keep the whole axis.
    pub fn range(name: &str) -> Self {
        AxisSubset::Range {
            name: name.to_string(),
            user_minimum: None,
            user_default: None,
            user_maximum: None,
        }
    }

    /// Keep part of the axis.
    pub fn narrowed(name: &str, minimum: f64, default: Option<f64>, maximum: f64) -> Self {
        AxisSubset::Range {
            name: name.to_string(),
            user_minimum: Some(minimum),
            user_default: default,
            user_maximum: Some(maximum),
        }
    }

    pub fn value(name: &str, user_value: f64) -> Self {
        AxisSubset::Value {
            name: name.to_string(),
            user_value,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AxisSubset::Range { name, .. } | AxisSubset::Value { name, .. } => name,
        }
    }
}

/// A variable font to be built from part of the designspace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableFont {
    pub name: String,
    pub filename: Option<String>,
    pub axis_subsets: Vec<AxisSubset>,
    pub lib: Lib,
}

impl VariableFont {
    pub fn new(filename: &str, axis_subsets: Vec<AxisSubset>) -> Self {
        Self {
            name: filename
                .rsplit_once('.')
                .map_or(filename, |(stem, _)| stem)
                .to_string(),
            filename: Some(filename.to_string()),
            axis_subsets,
            lib: Lib::new(),
        }
    }

    /// The key under which the derived document is returned.
    pub fn output_name(&self) -> &str {
        self.filename.as_deref().unwrap_or(&self.name)
    }
}

/// A designspace document.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignSpace {
    pub format_version: String,
    pub axes: Vec<Axis>,
    pub sources: Vec<Source>,
    pub instances: Vec<Instance>,
    pub rules: Vec<Rule>,
    pub rules_processing_last: bool,
    pub location_labels: Vec<LocationLabel>,
    pub variable_fonts: Vec<VariableFont>,
    pub elided_fallback_name: Option<String>,
    pub lib: Lib,
}

impl Default for DesignSpace {
    fn default() -> Self {
        Self {
            format_version: "5.0".to_string(),
            axes: Vec::new(),
            sources: Vec::new(),
            instances: Vec::new(),
            rules: Vec::new(),
            rules_processing_last: false,
            location_labels: Vec::new(),
            variable_fonts: Vec::new(),
            elided_fallback_name: None,
            lib: Lib::new(),
        }
    }
}

impl DesignSpace {
    /// Create a new designspace with the given axes and sources.
    pub fn new(axes: Vec<Axis>, sources: Vec<Source>) -> Self {
        Self {
            axes,
            sources,
            ..Self::default()
        }
    }

    pub fn with_instances(mut self, instances: Vec<Instance>) -> Self {
        self.instances = instances;
        self
    }

    pub fn with_rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_variable_fonts(mut self, variable_fonts: Vec<VariableFont>) -> Self {
        self.variable_fonts = variable_fonts;
        self
    }

    pub fn with_location_labels(mut self, labels: Vec<LocationLabel>) -> Self {
        self.location_labels = labels;
        self
    }

    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    pub fn axis_names(&self) -> Vec<String> {
        self.axes.iter().map(|axis| axis.name.clone()).collect()
    }

    pub fn location_label(&self, name: &str) -> Option<&LocationLabel> {
        self.location_labels.iter().find(|label| label.name == name)
    }

    /// The default location in user space.
    pub fn default_user_location(&self) -> Location {
        self.axes
            .iter()
            .map(|axis| (axis.name.clone(), axis.default()))
            .collect()
    }

    /// The default location in design space.
    pub fn default_design_location(&self) -> Location {
        self.axes
            .iter()
            .map(|axis| (axis.name.clone(), axis.map_forward(axis.default())))
            .collect()
    }

    /// Find the source sitting at the default location.
    ///
    /// Axes missing from a source's location count as being at their default.
    pub fn default_source(&self) -> Option<&Source> {
        let default = self.default_design_location();
        self.sources.iter().find(|source| {
            default
                .iter()
                .all(|(name, value)| source.location.get(name).is_none_or(|v| v == value))
        })
    }

    /// The free-standing label whose full location equals `user_location`.
    pub fn label_for_user_location(&self, user_location: &Location) -> Option<&LocationLabel> {
        self.location_labels
            .iter()
            .find(|label| label.full_user_location(self) == *user_location)
    }

    /// Axes in STAT order.
    ///
    /// When every axis declares an ordering rank they are sorted by it; when
    /// none do, declaration order is used. A mix is an error.
    pub fn axes_in_stat_order(&self) -> Result<Vec<&Axis>> {
        let ordered = self
            .axes
            .iter()
            .filter(|axis| axis.ordering.is_some())
            .count();
        if ordered == 0 {
            return Ok(self.axes.iter().collect());
        }
        if ordered != self.axes.len() {
            return Err(Error::InconsistentAxisOrdering);
        }
        let mut axes: Vec<&Axis> = self.axes.iter().collect();
        axes.sort_by_key(|axis| axis.ordering);
        Ok(axes)
    }
}
