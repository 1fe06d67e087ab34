//! Axes, axis labels and user/design space mapping.

use font_types::Tag;
use indexmap::IndexMap;

use crate::{
    error::{Error, Result},
    types::Stops,
};

/// Parse a four-character axis tag.
pub fn parse_tag(tag: &str) -> Result<Tag> {
    if tag.len() != 4 {
        return Err(Error::InvalidAxisTag(tag.to_string()));
    }
    Tag::new_checked(tag.as_bytes()).map_err(|_| Error::InvalidAxisTag(tag.to_string()))
}

/// The value shape of an axis label.
///
/// Each variant corresponds to one STAT axis value format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelValue {
    /// A single user value (format 1).
    Single(f64),
    /// A nominal value covering a user range (format 2).
    Range {
        nominal: f64,
        minimum: f64,
        maximum: f64,
    },
    /// A value linked to another, e.g. Regular to Bold (format 3).
    Linked { value: f64, linked: f64 },
}

/// A named position (or span) on one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    /// English name.
    pub name: String,
    /// Localised names keyed by language tag.
    pub label_names: IndexMap<String, String>,
    pub value: LabelValue,
    pub elidable: bool,
    pub older_sibling: bool,
}

impl AxisLabel {
    pub fn new(name: &str, value: f64) -> Self {
        Self::with_value(name, LabelValue::Single(value))
    }

    pub fn range(name: &str, minimum: f64, nominal: f64, maximum: f64) -> Self {
        Self::with_value(
            name,
            LabelValue::Range {
                nominal,
                minimum,
                maximum,
            },
        )
    }

    pub fn linked(name: &str, value: f64, linked: f64) -> Self {
        Self::with_value(name, LabelValue::Linked { value, linked })
    }

    fn with_value(name: &str, value: LabelValue) -> Self {
        Self {
            name: name.to_string(),
            label_names: IndexMap::new(),
            value,
            elidable: false,
            older_sibling: false,
        }
    }

    /// Mark the label as elidable.
    pub fn elidable(mut self) -> Self {
        self.elidable = true;
        self
    }

    /// Mark the label as an older sibling.
    pub fn older_sibling(mut self) -> Self {
        self.older_sibling = true;
        self
    }

    /// Add a localised name.
    pub fn with_localised(mut self, language: &str, name: &str) -> Self {
        self.label_names.insert(language.to_string(), name.to_string());
        self
    }

    /// The anchor (nominal) user value.
    pub fn user_value(&self) -> f64 {
        match self.value {
            LabelValue::Single(value) => value,
            LabelValue::Range { nominal, .. } => nominal,
            LabelValue::Linked { value, .. } => value,
        }
    }

    pub fn linked_user_value(&self) -> Option<f64> {
        match self.value {
            LabelValue::Linked { linked, .. } => Some(linked),
            _ => None,
        }
    }

    /// Whether this label names the given user value, either exactly or
    /// through its declared range.
    pub fn matches(&self, user_value: f64) -> bool {
        match self.value {
            LabelValue::Range {
                nominal,
                minimum,
                maximum,
            } => {
                nominal == user_value || (minimum <= user_value && user_value <= maximum)
            }
            _ => self.user_value() == user_value,
        }
    }

    /// The name in `language`, falling back to English.
    pub fn name_in(&self, language: &str) -> &str {
        self.label_names
            .get(language)
            .map(String::as_str)
            .unwrap_or(&self.name)
    }
}

/// Continuous or discrete axis data.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisKind {
    Continuous {
        minimum: f64,
        default: f64,
        maximum: f64,
        /// `(user, design)` control points. Empty means identity.
        map: Vec<(f64, f64)>,
    },
    Discrete {
        values: Stops,
        default: f64,
    },
}

/// A designspace axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    /// Four-character axis tag (e.g., "wght", "ital")
    pub tag: Tag,
    /// Axis name, used as the key in locations
    pub name: String,
    /// Localised axis names keyed by language tag
    pub label_names: IndexMap<String, String>,
    pub hidden: bool,
    /// Explicit STAT ordering rank
    pub ordering: Option<u16>,
    pub labels: Vec<AxisLabel>,
    pub kind: AxisKind,
}

impl Axis {
    /// Create a continuous axis with an identity mapping.
    pub fn continuous(tag: Tag, name: &str, minimum: f64, default: f64, maximum: f64) -> Self {
        Self::with_kind(
            tag,
            name,
            AxisKind::Continuous {
                minimum,
                default,
                maximum,
                map: Vec::new(),
            },
        )
    }

    /// Create a discrete axis.
    pub fn discrete(
        tag: Tag,
        name: &str,
        values: impl IntoIterator<Item = f64>,
        default: f64,
    ) -> Self {
        Self::with_kind(
            tag,
            name,
            AxisKind::Discrete {
                values: Stops::new(values),
                default,
            },
        )
    }

    fn with_kind(tag: Tag, name: &str, kind: AxisKind) -> Self {
        Self {
            tag,
            name: name.to_string(),
            label_names: IndexMap::new(),
            hidden: false,
            ordering: None,
            labels: Vec::new(),
            kind,
        }
    }

    /// Set the `(user, design)` mapping. Ignored for discrete axes.
    pub fn with_map(mut self, points: impl IntoIterator<Item = (f64, f64)>) -> Self {
        if let AxisKind::Continuous { map, .. } = &mut self.kind {
            *map = points.into_iter().collect();
        }
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = AxisLabel>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    pub fn with_ordering(mut self, ordering: u16) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn with_localised(mut self, language: &str, name: &str) -> Self {
        self.label_names.insert(language.to_string(), name.to_string());
        self
    }

    pub fn is_discrete(&self) -> bool {
        matches!(self.kind, AxisKind::Discrete { .. })
    }

    /// Default user value.
    pub fn default(&self) -> f64 {
        match &self.kind {
            AxisKind::Continuous { default, .. } | AxisKind::Discrete { default, .. } => *default,
        }
    }

    /// Minimum user value.
    pub fn minimum(&self) -> f64 {
        match &self.kind {
            AxisKind::Continuous { minimum, .. } => *minimum,
            AxisKind::Discrete { values, default } => values.iter().fold(*default, f64::min),
        }
    }

    /// Maximum user value.
    pub fn maximum(&self) -> f64 {
        match &self.kind {
            AxisKind::Continuous { maximum, .. } => *maximum,
            AxisKind::Discrete { values, default } => values.iter().fold(*default, f64::max),
        }
    }

    /// The `(user, design)` control points; always empty for discrete axes.
    pub fn map(&self) -> &[(f64, f64)] {
        match &self.kind {
            AxisKind::Continuous { map, .. } => map,
            AxisKind::Discrete { .. } => &[],
        }
    }

    /// Map a user value to design space.
    pub fn map_forward(&self, user_value: f64) -> f64 {
        piecewise_linear_map(user_value, self.map().iter().copied())
    }

    /// Map a design value back to user space.
    pub fn map_backward(&self, design_value: f64) -> f64 {
        piecewise_linear_map(
            design_value,
            self.map().iter().map(|&(user, design)| (design, user)),
        )
    }

    /// The first label naming `user_value`.
    pub fn label_for(&self, user_value: f64) -> Option<&AxisLabel> {
        self.labels.iter().find(|label| label.matches(user_value))
    }
}

/// Interpolate `value` through `(input, output)` control points.
///
/// Outside the span of the control points the nearest segment end is shifted
/// by the same offset, so infinite inputs stay infinite.
fn piecewise_linear_map(value: f64, points: impl Iterator<Item = (f64, f64)>) -> f64 {
    let mut points: Vec<(f64, f64)> = points.collect();
    if points.is_empty() {
        return value;
    }
    points.sort_by(|a, b| a.0.total_cmp(&b.0));

    if let Some(&(_, output)) = points.iter().find(|(input, _)| *input == value) {
        return output;
    }

    let (first_in, first_out) = points[0];
    if value < first_in {
        return value + first_out - first_in;
    }
    let (last_in, last_out) = points[points.len() - 1];
    if value > last_in {
        return value + last_out - last_in;
    }

    for pair in points.windows(2) {
        let ((a_in, a_out), (b_in, b_out)) = (pair[0], pair[1]);
        if a_in < value && value < b_in {
            return a_out + (b_out - a_out) * (value - a_in) / (b_in - a_in);
        }
    }
    value
}
