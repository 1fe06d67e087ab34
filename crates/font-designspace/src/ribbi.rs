//! Regular / Italic / Bold / Bold Italic style linking.
//!
//! Style linking comes from linked axis labels: a weight label at 400 linked
//! to 700 makes 700 the bold of 400, an upright label at 0 linked to 1 makes
//! 1 the italic of 0.

use std::fmt;

use font_types::Tag;
use log::debug;

use crate::{axis::Axis, document::DesignSpace, types::Location};

const WEIGHT_TAG: Tag = Tag::new(b"wght");
const ITALIC_TAGS: [Tag; 2] = [Tag::new(b"ital"), Tag::new(b"slnt")];
const REGULAR_WEIGHT: f64 = 400.0;
const UPRIGHT: f64 = 0.0;

/// One of the four legacy style-map classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RibbiStyle {
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl RibbiStyle {
    pub const fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => RibbiStyle::Regular,
            (true, false) => RibbiStyle::Bold,
            (false, true) => RibbiStyle::Italic,
            (true, true) => RibbiStyle::BoldItalic,
        }
    }

    /// The `styleMapStyleName` spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            RibbiStyle::Regular => "regular",
            RibbiStyle::Bold => "bold",
            RibbiStyle::Italic => "italic",
            RibbiStyle::BoldItalic => "bold italic",
        }
    }
}

impl fmt::Display for RibbiStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `(anchor, linked)` user values of the linked labels of one axis.
#[derive(Debug, Clone, PartialEq)]
struct StyleLinks {
    axis: String,
    links: Vec<(f64, f64)>,
}

impl StyleLinks {
    fn of(axis: &Axis) -> Self {
        let links = axis
            .labels
            .iter()
            .filter_map(|label| {
                label
                    .linked_user_value()
                    .map(|linked| (label.user_value(), linked))
            })
            .collect();
        Self { axis: axis.name.clone(), links }
    }

    /// If `location` sits on a linked value, the anchor it links back to.
    fn anchor_for(&self, location: &Location) -> Option<f64> {
        let value = location.get(&self.axis)?;
        self.links
            .iter()
            .find(|(_, linked)| linked == value)
            .map(|(anchor, _)| *anchor)
    }
}

/// Style-map classification for one document.
///
/// Two views of the same links. [`get`](Self::get) answers for the four
/// design-space locations built around the default location and knows
/// nothing of other axes. [`classify`](Self::classify) works on any user
/// location: only the linked values on the weight and italic axes matter, so
/// a Caption Bold relinks to Caption Regular and a Caption ExtraLight is the
/// regular of its own group. Name derivation uses `classify`.
#[derive(Debug, Clone, PartialEq)]
pub struct RibbiMapping {
    /// Exact design-space locations of the four linked styles
    entries: Vec<(Location, RibbiStyle)>,
    weight: Option<StyleLinks>,
    italic: Option<StyleLinks>,
}

impl RibbiMapping {
    /// Scan the weight and italic (or slant) axes of `doc` for linked labels.
    pub fn new(doc: &DesignSpace) -> Self {
        let weight_axis = doc.axes.iter().find(|axis| axis.tag == WEIGHT_TAG);
        let italic_axis = ITALIC_TAGS
            .iter()
            .find_map(|tag| doc.axes.iter().find(|axis| axis.tag == *tag));

        let mut regular = doc.default_design_location();
        let mut bold = None;
        let mut italic = None;

        if let Some(axis) = weight_axis
            && let Some(linked) = linked_value_at(axis, REGULAR_WEIGHT)
        {
            regular.insert(axis.name.clone(), axis.map_forward(REGULAR_WEIGHT));
            bold = Some((axis, axis.map_forward(linked)));
        }
        if let Some(axis) = italic_axis
            && let Some(linked) = linked_value_at(axis, UPRIGHT)
        {
            regular.insert(axis.name.clone(), axis.map_forward(UPRIGHT));
            italic = Some((axis, axis.map_forward(linked)));
        }

        let mut entries = Vec::new();
        if bold.is_some() || italic.is_some() {
            entries.push((regular.clone(), RibbiStyle::Regular));
        }
        if let Some((axis, value)) = bold {
            let mut location = regular.clone();
            location.insert(axis.name.clone(), value);
            entries.push((location, RibbiStyle::Bold));
        }
        if let Some((axis, value)) = italic {
            let mut location = regular.clone();
            location.insert(axis.name.clone(), value);
            entries.push((location, RibbiStyle::Italic));
        }
        if let (Some((bold_axis, bold_value)), Some((italic_axis, italic_value))) =
            (bold, italic)
        {
            let mut location = regular;
            location.insert(bold_axis.name.clone(), bold_value);
            location.insert(italic_axis.name.clone(), italic_value);
            entries.push((location, RibbiStyle::BoldItalic));
        }
        debug!("found {} style-linked locations", entries.len());

        Self {
            entries,
            weight: weight_axis.map(StyleLinks::of),
            italic: italic_axis.map(StyleLinks::of),
        }
    }

    /// The style of an exact design-space location, if it is one of the
    /// linked locations.
    pub fn get(&self, design_location: &Location) -> Option<RibbiStyle> {
        self.entries
            .iter()
            .find(|(location, _)| location == design_location)
            .map(|(_, style)| *style)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Location, RibbiStyle)> {
        self.entries.iter().map(|(location, style)| (location, *style))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Classify a user location relative to its own style-link group.
    ///
    /// Returns the style and the user location of the group's regular: a
    /// location on a linked weight value is bold and its regular sits on the
    /// anchor value; likewise for italic. Every other location is the regular
    /// of its own group.
    pub fn classify(&self, user_location: &Location) -> (RibbiStyle, Location) {
        let mut regular = user_location.clone();
        let mut relink = |links: &Option<StyleLinks>| {
            let links = links.as_ref()?;
            let anchor = links.anchor_for(user_location)?;
            regular.insert(links.axis.clone(), anchor);
            Some(())
        };
        let bold = relink(&self.weight).is_some();
        let italic = relink(&self.italic).is_some();
        (RibbiStyle::from_flags(bold, italic), regular)
    }
}

/// The linked value of the label anchored at `user_value`.
fn linked_value_at(axis: &Axis, user_value: f64) -> Option<f64> {
    axis.labels
        .iter()
        .find(|label| label.user_value() == user_value)
        .and_then(|label| label.linked_user_value())
}
