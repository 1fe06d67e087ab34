//! Family, style, PostScript and style-map names from STAT labels.

use indexmap::IndexMap;

use crate::{
    diagnostics::{Diagnostic, Diagnostics},
    document::{DesignSpace, Instance},
    error::{Error, Result},
    ribbi::{RibbiMapping, RibbiStyle},
    types::Location,
};

/// Language tag used for the unlocalised names.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Names keyed by language tag.
pub type LocalisedNames = IndexMap<String, String>;

/// Names derived for one location.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatNames {
    pub family_names: LocalisedNames,
    pub style_names: LocalisedNames,
    pub postscript_font_name: Option<String>,
    pub style_map_family_names: LocalisedNames,
    pub style_map_style_name: Option<RibbiStyle>,
}

impl StatNames {
    pub fn family_name(&self) -> Option<&str> {
        self.family_names.get(DEFAULT_LANGUAGE).map(String::as_str)
    }

    pub fn style_name(&self) -> Option<&str> {
        self.style_names.get(DEFAULT_LANGUAGE).map(String::as_str)
    }

    pub fn style_map_family_name(&self) -> Option<&str> {
        self.style_map_family_names
            .get(DEFAULT_LANGUAGE)
            .map(String::as_str)
    }
}

/// Derives [`StatNames`] for locations of one document.
///
/// The style-link mapping is computed once and shared by every lookup.
#[derive(Debug, Clone)]
pub struct StatNameDeriver<'a> {
    doc: &'a DesignSpace,
    ribbi: RibbiMapping,
}

impl<'a> StatNameDeriver<'a> {
    pub fn new(doc: &'a DesignSpace) -> Self {
        Self {
            doc,
            ribbi: RibbiMapping::new(doc),
        }
    }

    pub fn ribbi(&self) -> &RibbiMapping {
        &self.ribbi
    }

    /// Names for an instance. The instance's own style name is used when no
    /// style name can be inferred from the labels.
    pub fn instance_names(
        &self,
        instance: &Instance,
        diagnostics: &mut Diagnostics,
    ) -> Result<StatNames> {
        let location = instance.full_user_location(self.doc)?;
        self.names(
            &location,
            instance.style_name.as_deref(),
            &instance.identity(),
            diagnostics,
        )
    }

    /// Names for a complete user location.
    pub fn location_names(
        &self,
        user_location: &Location,
        diagnostics: &mut Diagnostics,
    ) -> Result<StatNames> {
        self.names(
            user_location,
            None,
            &format!("{user_location:?}"),
            diagnostics,
        )
    }

    fn names(
        &self,
        user_location: &Location,
        style_override: Option<&str>,
        identity: &str,
        diagnostics: &mut Diagnostics,
    ) -> Result<StatNames> {
        let family_names = self.family_names(diagnostics);

        let mut style_names = self.style_names(user_location)?;
        if style_names
            .get(DEFAULT_LANGUAGE)
            .is_none_or(String::is_empty)
        {
            let Some(style) = style_override else {
                return Err(Error::UnresolvableStyleName {
                    instance: identity.to_string(),
                });
            };
            style_names.insert(DEFAULT_LANGUAGE.to_string(), style.to_string());
        }

        let postscript_font_name = match (
            family_names.get(DEFAULT_LANGUAGE),
            style_names.get(DEFAULT_LANGUAGE),
        ) {
            (Some(family), Some(style)) => Some(format!("{family}-{style}").replace(' ', "")),
            _ => None,
        };

        let (style, regular_location) = self.ribbi.classify(user_location);
        let style_map_style_name = (!self.ribbi.is_empty()).then_some(style);

        let regular_style_names = if regular_location == *user_location {
            None
        } else {
            Some(self.style_names(&regular_location)?)
        };
        let style_map_names = regular_style_names.as_ref().unwrap_or(&style_names);
        let english_style = style_names
            .get(DEFAULT_LANGUAGE)
            .map_or("", String::as_str);
        let style_map_family_names = family_names
            .iter()
            .map(|(language, family)| {
                let style = style_map_names
                    .get(language)
                    .map_or(english_style, String::as_str);
                (
                    language.clone(),
                    format!("{family} {style}").trim().to_string(),
                )
            })
            .collect();

        Ok(StatNames {
            family_names,
            style_names,
            postscript_font_name,
            style_map_family_names,
            style_map_style_name,
        })
    }

    /// Family names of the default source, or none with a diagnostic.
    fn family_names(&self, diagnostics: &mut Diagnostics) -> LocalisedNames {
        let Some(source) = self.doc.default_source() else {
            diagnostics.push(Diagnostic::MissingDefaultSource);
            return LocalisedNames::new();
        };
        let Some(family) = &source.family_name else {
            let name = source
                .name
                .clone()
                .or_else(|| source.filename.clone())
                .unwrap_or_default();
            diagnostics.push(Diagnostic::DefaultSourceWithoutFamilyName { source: name });
            return LocalisedNames::new();
        };
        let mut names = LocalisedNames::new();
        names.insert(DEFAULT_LANGUAGE.to_string(), family.clone());
        names.extend(
            source
                .localised_family_name
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        names
    }

    /// Style names from a matching location label, else from axis labels.
    ///
    /// May return an empty English name when every matched label is elidable
    /// and the document has no elided fallback name.
    fn style_names(&self, user_location: &Location) -> Result<LocalisedNames> {
        let mut names = LocalisedNames::new();

        if let Some(label) = self.doc.label_for_user_location(user_location) {
            names.insert(DEFAULT_LANGUAGE.to_string(), label.name.clone());
            names.extend(
                label
                    .label_names
                    .iter()
                    .map(|(k, v)| (k.clone(), v.clone())),
            );
            return Ok(names);
        }

        let axes = self.doc.axes_in_stat_order()?;
        if axes.len() != user_location.len()
            || axes
                .iter()
                .any(|axis| !user_location.contains_key(&axis.name))
        {
            return Err(Error::SchemaMismatch {
                context: "style name lookup".to_string(),
                expected: self.doc.axis_names(),
                found: user_location.keys().cloned().collect(),
            });
        }

        let labels = axes
            .iter()
            .map(|axis| {
                let value = user_location[&axis.name];
                axis.label_for(value).ok_or_else(|| Error::MissingAxisLabel {
                    axis: axis.name.clone(),
                    value,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut languages = vec![DEFAULT_LANGUAGE];
        for language in labels.iter().flat_map(|label| label.label_names.keys()) {
            if !languages.contains(&language.as_str()) {
                languages.push(language);
            }
        }

        for language in languages {
            let mut style = labels
                .iter()
                .filter(|label| !label.elidable)
                .map(|label| label.name_in(language))
                .collect::<Vec<_>>()
                .join(" ");
            if style.is_empty()
                && let Some(fallback) = &self.doc.elided_fallback_name
            {
                style = fallback.clone();
            }
            names.insert(language.to_string(), style);
        }
        Ok(names)
    }
}

/// Derive the names of a user location in `doc`.
pub fn stat_names(
    doc: &DesignSpace,
    user_location: &Location,
    diagnostics: &mut Diagnostics,
) -> Result<StatNames> {
    StatNameDeriver::new(doc).location_names(user_location, diagnostics)
}

impl Instance {
    /// Derive this instance's names from the document's STAT labels.
    pub fn stat_names(
        &self,
        doc: &DesignSpace,
        diagnostics: &mut Diagnostics,
    ) -> Result<StatNames> {
        StatNameDeriver::new(doc).instance_names(self, diagnostics)
    }
}
