//! # Font Designspace
//!
//! Split a multi-axis version 5 designspace into one version 4 document per
//! declared variable font, and derive STAT-based instance names.
//!
//! This crate provides functionality similar to fontTools designspaceLib's
//! `convert5to4`, `statNames` and `stat` helpers. Reading and writing the
//! document format is left to the caller.
//!
//! ## Example
//!
//! ```
//! use font_designspace::{
//!     Axis, AxisSubset, DesignSpace, Diagnostics, Source, VariableFont, convert_5_to_4,
//! };
//! use font_types::Tag;
//!
//! let doc = DesignSpace::new(
//!     vec![
//!         Axis::continuous(Tag::new(b"wght"), "Weight", 100.0, 400.0, 900.0),
//!         Axis::continuous(Tag::new(b"wdth"), "Width", 75.0, 100.0, 100.0),
//!     ],
//!     vec![
//!         Source::new("Regular.ufo", [("Weight", 400.0), ("Width", 100.0)]),
//!         Source::new("Bold.ufo", [("Weight", 900.0), ("Width", 100.0)]),
//!         Source::new("Condensed.ufo", [("Weight", 400.0), ("Width", 75.0)]),
//!     ],
//! )
//! .with_variable_fonts(vec![VariableFont::new(
//!     "Test_Wght.ttf",
//!     vec![AxisSubset::range("Weight")],
//! )]);
//!
//! let documents = convert_5_to_4(&doc, &mut Diagnostics::new()).unwrap();
//! let wght = &documents["Test_Wght.ttf"];
//! assert_eq!(wght.axes.len(), 1);
//! assert_eq!(wght.sources.len(), 2);
//! ```

mod axis;
mod convert;
mod diagnostics;
mod document;
mod error;
mod ribbi;
mod rules;
mod selection;
mod stat;
mod stat_names;
mod types;

pub use axis::{Axis, AxisKind, AxisLabel, LabelValue, parse_tag};
pub use convert::{
    DERIVED_FORMAT_VERSION, VariableFontDocuments, convert_5_to_4, convert_5_to_4_parallel,
    convert_variable_font, filter_location,
};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use document::{
    AxisSubset, Condition, DesignSpace, Instance, Lib, LibValue, LocationLabel, Rule, Source,
    VariableFont, condition_set_from,
};
pub use error::{Error, Result};
pub use ribbi::{RibbiMapping, RibbiStyle};
pub use rules::subset_rules;
pub use selection::{SubsetAxes, region_selection_from};
pub use stat::{StatAxis, StatAxisValue, StatLocation, StatValue, stat_axes, stat_locations};
pub use stat_names::{DEFAULT_LANGUAGE, LocalisedNames, StatNameDeriver, StatNames, stat_names};
pub use types::{
    ConditionSet, Location, Range, Region, RegionSelection, RegionValue, Selection, Stops,
    in_region, location_in_selection,
};

impl DesignSpace {
    /// Convert this document into one document per variable font.
    pub fn convert_5_to_4(&self, diagnostics: &mut Diagnostics) -> Result<VariableFontDocuments> {
        convert_5_to_4(self, diagnostics)
    }

    /// The style-link mapping of this document.
    pub fn ribbi_mapping(&self) -> RibbiMapping {
        RibbiMapping::new(self)
    }
}
