use std::fmt;

use crate::{
    icon::{Canvas, IconDefinition, PathRecord},
    Error,
};

/// SVG markup of a single icon.
///
/// The label is written as given, no escaping takes place.
#[derive(Debug, Clone, Copy)]
pub struct SvgDocument<'a> {
    pub name: &'a str,
    pub canvas: &'a Canvas,
    pub paths: &'a [PathRecord],
}

impl fmt::Display for SvgDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Canvas {
            width,
            height,
            viewport_width,
            viewport_height,
        } = self.canvas;

        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {viewport_width} {viewport_height}" fill="none" aria-label="{}">"#,
            self.name
        )?;
        for path in self.paths {
            writeln!(
                f,
                r#"  <path d="{}" fill="{}" fill-rule="evenodd"/>"#,
                path.commands,
                path.fill.hex()
            )?;
        }
        writeln!(f, "</svg>")
    }
}

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '.' | '_' | '-' => c,
            _ => '_',
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIcon {
    pub file_name: String,
    pub markup: String,
}

#[derive(Debug, Default)]
pub struct SvgRenderer;

impl crate::pipe::Pipe for SvgRenderer {
    type Input = IconDefinition;

    type Output = RenderedIcon;

    type Error = Error;

    fn process(&mut self, icon: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        let markup = SvgDocument {
            name: &icon.name,
            canvas: &icon.canvas,
            paths: &icon.paths,
        }
        .to_string();

        trace!(paths = icon.paths.len(), "rendered {}", icon.property_name);
        Ok(Some(RenderedIcon {
            file_name: format!("{}.svg", sanitize_file_name(&icon.property_name)),
            markup,
        }))
    }
}

#[cfg(test)]
fn back_icon() -> IconDefinition {
    use crate::icon::Color;

    IconDefinition {
        property_name: "Back".to_string(),
        name: "Back".to_string(),
        canvas: Canvas::FALLBACK,
        paths: vec![
            PathRecord {
                commands: "M 10 20 L 30 40 Z".to_string(),
                fill: Color::Black,
            },
            PathRecord {
                commands: "M 1 2 H 3".to_string(),
                fill: Color::White,
            },
        ],
    }
}

#[test]
fn render_markup() {
    let icon = back_icon();
    let markup = SvgDocument {
        name: &icon.name,
        canvas: &icon.canvas,
        paths: &icon.paths,
    }
    .to_string();

    assert_eq!(
        markup,
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="26" height="26" viewBox="0 0 26 26" fill="none" aria-label="Back">"#,
            "\n",
            r##"  <path d="M 10 20 L 30 40 Z" fill="#000000" fill-rule="evenodd"/>"##,
            "\n",
            r##"  <path d="M 1 2 H 3" fill="#ffffff" fill-rule="evenodd"/>"##,
            "\n</svg>\n",
        )
    );
}

#[test]
fn rendered_markup_is_valid_svg() {
    use svg::node::element::tag::Type;
    use svg::parser::Event;

    let icon = back_icon();
    let markup = SvgDocument {
        name: &icon.name,
        canvas: &icon.canvas,
        paths: &icon.paths,
    }
    .to_string();

    let mut paths = vec![];
    for event in svg::read(&markup).unwrap() {
        match event {
            Event::Tag("svg", Type::Start, attrs) => {
                assert_eq!(&*attrs["viewBox"], "0 0 26 26");
                assert_eq!(&*attrs["aria-label"], "Back");
                assert_eq!(&*attrs["fill"], "none");
            }
            Event::Tag("path", Type::Empty, attrs) => {
                assert_eq!(&*attrs["fill-rule"], "evenodd");
                paths.push((attrs["d"].to_string(), attrs["fill"].to_string()));
            }
            _ => {}
        }
    }
    assert_eq!(
        paths,
        vec![
            ("M 10 20 L 30 40 Z".to_string(), "#000000".to_string()),
            ("M 1 2 H 3".to_string(), "#ffffff".to_string()),
        ]
    );
}

#[test]
fn label_is_not_escaped() {
    let markup = SvgDocument {
        name: "a \"b\" & c",
        canvas: &Canvas::FALLBACK,
        paths: &[],
    }
    .to_string();
    assert!(markup.contains(r#"aria-label="a "b" & c">"#));
    assert!(markup.ends_with("\">\n</svg>\n"));
}

#[test]
fn sanitize() {
    assert_eq!(sanitize_file_name("My Icon/Name"), "My_Icon_Name");
    assert_eq!(sanitize_file_name("ok-1.2_x"), "ok-1.2_x");
    assert_eq!(sanitize_file_name("Ünï"), "_n_");
}

#[test]
fn renderer_names_file_after_property() {
    use crate::pipe::Pipe;

    let mut icon = back_icon();
    icon.property_name = "Arrow Back".to_string();
    let rendered = SvgRenderer.process(icon).unwrap().unwrap();
    assert_eq!(rendered.file_name, "Arrow_Back.svg");
    assert!(rendered.markup.starts_with("<svg "));
}
