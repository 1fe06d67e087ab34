//! Split a version 5 designspace into one version 4 document per variable font.

use indexmap::IndexMap;
use log::{debug, info};
use rayon::prelude::*;

use crate::{
    axis::Axis,
    diagnostics::Diagnostics,
    document::{DesignSpace, Instance, Source, VariableFont},
    error::Result,
    rules::subset_rules,
    selection::SubsetAxes,
    stat_names::{LocalisedNames, StatNameDeriver},
    types::{Location, location_in_selection},
};

/// Format version written on derived documents.
pub const DERIVED_FORMAT_VERSION: &str = "4.1";

/// Derived documents keyed by variable font filename, in declaration order.
pub type VariableFontDocuments = IndexMap<String, DesignSpace>;

/// Convert every variable font of `doc` into its own document.
///
/// Fails before converting anything if the axes mix ranked and unranked STAT
/// ordering.
pub fn convert_5_to_4(
    doc: &DesignSpace,
    diagnostics: &mut Diagnostics,
) -> Result<VariableFontDocuments> {
    doc.axes_in_stat_order()?;
    info!("Converting {} variable fonts", doc.variable_fonts.len());

    let deriver = StatNameDeriver::new(doc);
    doc.variable_fonts
        .iter()
        .map(|vf| {
            let derived = convert_variable_font(doc, vf, &deriver, diagnostics)?;
            Ok((vf.output_name().to_string(), derived))
        })
        .collect()
}

/// Like [`convert_5_to_4`], converting the variable fonts in parallel.
///
/// Diagnostics are collected per variable font and appended in declaration
/// order.
pub fn convert_5_to_4_parallel(
    doc: &DesignSpace,
    diagnostics: &mut Diagnostics,
) -> Result<VariableFontDocuments> {
    doc.axes_in_stat_order()?;
    info!(
        "Converting {} variable fonts in parallel",
        doc.variable_fonts.len()
    );

    let deriver = StatNameDeriver::new(doc);
    let results: Vec<_> = doc
        .variable_fonts
        .par_iter()
        .map(|vf| {
            let mut local = Diagnostics::new();
            let derived = convert_variable_font(doc, vf, &deriver, &mut local);
            (vf.output_name().to_string(), derived, local)
        })
        .collect();

    let mut documents = VariableFontDocuments::new();
    for (name, derived, local) in results {
        diagnostics.extend(local);
        documents.insert(name, derived?);
    }
    Ok(documents)
}

/// Build the document of one variable font.
pub fn convert_variable_font(
    doc: &DesignSpace,
    vf: &VariableFont,
    deriver: &StatNameDeriver<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<DesignSpace> {
    let axes = SubsetAxes::from_variable_font(doc, vf)?;
    let selection = axes.region_selection();

    let sources: Vec<Source> = doc
        .sources
        .iter()
        .filter(|source| location_in_selection(&source.location, &selection))
        .map(|source| Source {
            location: filter_location(&axes.ranged, &source.location),
            ..source.clone()
        })
        .collect();

    let mut instances = Vec::new();
    for instance in &doc.instances {
        if !location_in_selection(&instance.design_location, &selection) {
            continue;
        }
        instances.push(derive_instance(
            instance,
            &axes.ranged,
            deriver,
            diagnostics,
        )?);
    }

    let rules = subset_rules(&doc.rules, &selection);
    debug!(
        "{}: {} axes, {} sources, {} instances, {} rules",
        vf.output_name(),
        axes.ranged.len(),
        sources.len(),
        instances.len(),
        rules.len()
    );

    let mut lib = doc.lib.clone();
    lib.extend(vf.lib.iter().map(|(k, v)| (k.clone(), v.clone())));

    Ok(DesignSpace {
        format_version: DERIVED_FORMAT_VERSION.to_string(),
        axes: axes.ranged.into_values().collect(),
        sources,
        instances,
        rules,
        rules_processing_last: doc.rules_processing_last,
        location_labels: Vec::new(),
        variable_fonts: Vec::new(),
        elided_fallback_name: None,
        lib,
    })
}

/// Copy an instance into a derived document, filling in missing names.
fn derive_instance(
    instance: &Instance,
    ranged: &IndexMap<String, Axis>,
    deriver: &StatNameDeriver<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Instance> {
    let names = deriver.instance_names(instance, diagnostics)?;
    let or_names = |own: &LocalisedNames, derived: LocalisedNames| {
        if own.is_empty() {
            derived
        } else {
            own.clone()
        }
    };
    let or_name = |own: &Option<String>, derived: Option<&str>| {
        own.clone().or_else(|| derived.map(str::to_string))
    };

    Ok(Instance {
        filename: instance.filename.clone(),
        path: instance.path.clone(),
        name: instance.name.clone(),
        design_location: filter_location(ranged, &instance.design_location),
        user_location: filter_location(ranged, &instance.user_location),
        location_label: None,
        family_name: or_name(&instance.family_name, names.family_name()),
        style_name: or_name(&instance.style_name, names.style_name()),
        postscript_font_name: or_name(
            &instance.postscript_font_name,
            names.postscript_font_name.as_deref(),
        ),
        style_map_family_name: or_name(
            &instance.style_map_family_name,
            names.style_map_family_name(),
        ),
        style_map_style_name: or_name(
            &instance.style_map_style_name,
            names.style_map_style_name.map(|style| style.as_str()),
        ),
        localised_family_name: or_names(&instance.localised_family_name, names.family_names),
        localised_style_name: or_names(&instance.localised_style_name, names.style_names),
        localised_style_map_family_name: or_names(
            &instance.localised_style_map_family_name,
            names.style_map_family_names,
        ),
        localised_style_map_style_name: instance.localised_style_map_style_name.clone(),
        lib: instance.lib.clone(),
    })
}

/// Keep only the axes that remain real axes in the derived document.
pub fn filter_location(ranged: &IndexMap<String, Axis>, location: &Location) -> Location {
    location
        .iter()
        .filter(|(name, _)| ranged.contains_key(*name))
        .map(|(name, value)| (name.clone(), *value))
        .collect()
}
