//! Designspace fixtures modelled on the Aktiv Grotesk and Source Serif 4
//! documents.

#![allow(dead_code)]

use font_designspace::{
    Axis, AxisLabel, AxisSubset, Condition, DesignSpace, Instance, LibValue, Location, Rule, Source,
    VariableFont,
};
use font_types::Tag;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn location(values: &[(&str, f64)]) -> Location {
    values
        .iter()
        .map(|(name, value)| (name.to_string(), *value))
        .collect()
}

fn aktiv_source(filename: &str, weight: f64, width: f64, italic: f64) -> Source {
    let mut source = Source::new(
        filename,
        [("Weight", weight), ("Width", width), ("Italic", italic)],
    );
    source.family_name = Some("Aktiv Grotesk".to_string());
    source
}

fn aktiv_instance(filename: &str, weight: f64, width: f64, italic: f64) -> Instance {
    Instance::new(
        filename,
        [("Weight", weight), ("Width", width), ("Italic", italic)],
    )
}

fn serif_source(filename: &str, optical_size: f64, weight: f64, italic: f64) -> Source {
    Source::new(
        filename,
        [
            ("Optical size", optical_size),
            ("Weight", weight),
            ("Italic", italic),
        ],
    )
}

fn serif_instance(filename: &str, optical_size: f64, weight: f64, italic: f64) -> Instance {
    Instance::new(
        filename,
        [
            ("Optical size", optical_size),
            ("Weight", weight),
            ("Italic", italic),
        ],
    )
}

/// Three axes with explicit STAT ordering, a mapped weight axis and
/// style-linked Regular/Bold and Upright/Italic labels.
pub fn aktiv() -> DesignSpace {
    let axes = vec![
        Axis::continuous(Tag::new(b"wght"), "Weight", 100.0, 400.0, 900.0)
            .with_map([
                (100.0, 22.0),
                (200.0, 38.0),
                (300.0, 57.0),
                (400.0, 84.0),
                (500.0, 98.0),
                (600.0, 115.0),
                (700.0, 133.0),
                (800.0, 158.0),
                (900.0, 185.0),
            ])
            .with_ordering(1)
            .with_labels([
                AxisLabel::new("Hair", 100.0),
                AxisLabel::new("Thin", 200.0),
                AxisLabel::new("Light", 300.0),
                AxisLabel::linked("Regular", 400.0, 700.0).elidable(),
                AxisLabel::new("Medium", 500.0),
                AxisLabel::new("SemiBold", 600.0),
                AxisLabel::new("Bold", 700.0),
                AxisLabel::new("XBold", 800.0),
                AxisLabel::new("Black", 900.0),
            ]),
        Axis::continuous(Tag::new(b"wdth"), "Width", 75.0, 100.0, 125.0)
            .with_ordering(0)
            .with_labels([
                AxisLabel::new("Cd", 75.0),
                AxisLabel::new("Normal", 100.0).elidable(),
                AxisLabel::new("Ex", 125.0),
            ]),
        Axis::continuous(Tag::new(b"ital"), "Italic", 0.0, 0.0, 1.0)
            .with_ordering(2)
            .with_labels([
                AxisLabel::linked("Upright", 0.0, 1.0).elidable(),
                AxisLabel::new("Italic", 1.0),
            ]),
    ];

    let sources = vec![
        aktiv_source("AktivGrotesk_Hair.ufo", 22.0, 100.0, 0.0),
        aktiv_source("AktivGrotesk_Regular.ufo", 84.0, 100.0, 0.0),
        aktiv_source("AktivGrotesk_Black.ufo", 185.0, 100.0, 0.0),
        aktiv_source("AktivGrotesk_Cd_Regular.ufo", 84.0, 75.0, 0.0),
        aktiv_source("AktivGrotesk_Ex_Regular.ufo", 84.0, 125.0, 0.0),
        aktiv_source("AktivGrotesk_HairItalic.ufo", 22.0, 100.0, 1.0),
        aktiv_source("AktivGrotesk_Italic.ufo", 84.0, 100.0, 1.0),
        aktiv_source("AktivGrotesk_BlackItalic.ufo", 185.0, 100.0, 1.0),
    ];

    let instances = vec![
        aktiv_instance("AktivGrotesk-Regular.ttf", 84.0, 100.0, 0.0),
        aktiv_instance("AktivGrotesk-Bold.ttf", 133.0, 100.0, 0.0),
        aktiv_instance("AktivGrotesk-Italic.ttf", 84.0, 100.0, 1.0),
        aktiv_instance("AktivGrotesk-BoldItalic.ttf", 133.0, 100.0, 1.0),
        aktiv_instance("AktivGrotesk-CdLight.ttf", 57.0, 75.0, 0.0),
        aktiv_instance("AktivGrotesk-ExBlackItalic.ttf", 185.0, 125.0, 1.0),
    ];

    let rules = vec![
        Rule::new("BRACKET.ITALIC")
            .with_condition_set(vec![Condition::new("Italic", Some(0.5), Some(1.0))])
            .with_sub("a", "a.italic"),
        Rule::new("BRACKET.HEAVY")
            .with_condition_set(vec![
                Condition::new("Weight", Some(120.0), None),
                Condition::new("Width", None, Some(100.0)),
            ])
            .with_sub("dollar", "dollar.nostroke"),
    ];

    let variable_fonts = vec![
        VariableFont::new(
            "AktivGroteskVF_WghtWdthItal.ttf",
            vec![
                AxisSubset::range("Weight"),
                AxisSubset::range("Width"),
                AxisSubset::range("Italic"),
            ],
        ),
        VariableFont::new(
            "AktivGroteskVF_WghtWdth.ttf",
            vec![AxisSubset::range("Weight"), AxisSubset::range("Width")],
        ),
        VariableFont::new("AktivGroteskVF_Wght.ttf", vec![AxisSubset::range("Weight")]),
        VariableFont::new(
            "AktivGroteskVF_Italics_WghtWdth.ttf",
            vec![
                AxisSubset::range("Weight"),
                AxisSubset::range("Width"),
                AxisSubset::value("Italic", 1.0),
            ],
        ),
        VariableFont::new(
            "AktivGroteskVF_Italics_Wght.ttf",
            vec![AxisSubset::range("Weight"), AxisSubset::value("Italic", 1.0)],
        ),
    ];

    let mut doc = DesignSpace::new(axes, sources)
        .with_instances(instances)
        .with_rules(rules)
        .with_variable_fonts(variable_fonts);
    doc.elided_fallback_name = Some("Regular".to_string());
    doc.lib
        .insert("com.example.vendor".to_string(), LibValue::from("Dalton Maag"));
    doc.lib
        .insert("com.example.hinting".to_string(), LibValue::Boolean(false));
    doc.variable_fonts[0]
        .lib
        .insert("com.example.hinting".to_string(), LibValue::Boolean(true));
    doc
}

/// Optical size, weight and a discrete italic axis, with the default at
/// Caption ExtraLight.
pub fn source_serif() -> DesignSpace {
    let axes = vec![
        Axis::continuous(Tag::new(b"opsz"), "Optical size", 8.0, 8.0, 60.0).with_labels([
            AxisLabel::range("Caption", 6.0, 8.0, 11.0),
            AxisLabel::range("Text", 11.0, 16.0, 23.0).elidable(),
            AxisLabel::range("Subhead", 23.0, 30.0, 40.0),
            AxisLabel::range("Display", 40.0, 60.0, 60.0),
        ]),
        Axis::continuous(Tag::new(b"wght"), "Weight", 200.0, 200.0, 900.0)
            .with_map([
                (200.0, 0.0),
                (300.0, 100.0),
                (400.0, 368.0),
                (600.0, 600.0),
                (700.0, 824.0),
                (900.0, 1000.0),
            ])
            .with_labels([
                AxisLabel::new("ExtraLight", 200.0),
                AxisLabel::new("Light", 300.0),
                AxisLabel::linked("Regular", 400.0, 700.0).elidable(),
                AxisLabel::new("Semibold", 600.0),
                AxisLabel::new("Bold", 700.0),
                AxisLabel::new("Black", 900.0),
            ]),
        Axis::discrete(Tag::new(b"ital"), "Italic", [0.0, 1.0], 0.0).with_labels([
            AxisLabel::linked("Roman", 0.0, 1.0).elidable(),
            AxisLabel::new("Italic", 1.0),
        ]),
    ];

    let sources = vec![
        serif_source("SourceSerif4-CaptionExtraLight.ufo", 8.0, 0.0, 0.0)
            .with_family_name("Source Serif 4"),
        serif_source("SourceSerif4-CaptionBlack.ufo", 8.0, 1000.0, 0.0),
        serif_source("SourceSerif4-DisplayExtraLight.ufo", 60.0, 0.0, 0.0),
        serif_source("SourceSerif4-CaptionExtraLightIt.ufo", 8.0, 0.0, 1.0),
    ];

    let instances = vec![
        serif_instance("SourceSerif4-CaptionExtraLight.otf", 8.0, 0.0, 0.0),
        serif_instance("SourceSerif4-Bold.otf", 16.0, 824.0, 0.0),
        serif_instance("SourceSerif4-DisplayBoldIt.otf", 60.0, 824.0, 1.0),
    ];

    let variable_fonts = vec![
        VariableFont::new(
            "SourceSerif4Variable-Roman.otf",
            vec![
                AxisSubset::range("Optical size"),
                AxisSubset::range("Weight"),
                AxisSubset::value("Italic", 0.0),
            ],
        ),
        VariableFont::new(
            "SourceSerif4Variable-Italic.otf",
            vec![
                AxisSubset::range("Optical size"),
                AxisSubset::range("Weight"),
                AxisSubset::value("Italic", 1.0),
            ],
        ),
    ];

    DesignSpace::new(axes, sources)
        .with_instances(instances)
        .with_variable_fonts(variable_fonts)
}
