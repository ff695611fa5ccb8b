use super::{
    commands::convert_path_commands,
    parse::{builder_invocation, fill_color, path_block, property_name, search, search_all},
    ExtractError,
};
use crate::{
    icon::{Canvas, Color, IconDefinition, PathRecord},
    pipe::Pipe,
    Error,
};

/// Drawing data of the first builder found in a source file.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub name: String,
    pub canvas: Canvas,
    pub paths: Vec<PathRecord>,
}

pub fn extract_icon(source: &str) -> Result<Extraction, ExtractError> {
    let (_, builder) = search(source, builder_invocation).ok_or(ExtractError::MissingBuilder)?;

    let [width, height, viewport_width, viewport_height] = builder.geometry;
    debug!(
        name = builder.name,
        width, height, viewport_width, viewport_height, "builder geometry ignored, using fallback canvas"
    );

    let paths: Vec<_> = search_all(source, path_block)
        .filter_map(|body| {
            let commands = convert_path_commands(body);
            if commands.is_empty() {
                trace!("dropping path block without drawing commands");
                return None;
            }
            Some(PathRecord {
                commands,
                fill: file_fill(source),
            })
        })
        .collect();

    if builder.name.is_empty() {
        return Err(ExtractError::EmptyName);
    }
    if paths.is_empty() {
        return Err(ExtractError::NoPaths);
    }

    Ok(Extraction {
        name: builder.name.to_string(),
        canvas: Canvas::FALLBACK,
        paths,
    })
}

/// The first fill declared anywhere in `source` applies to every block.
fn file_fill(source: &str) -> Color {
    search(source, fill_color).map_or(Color::default(), |(_, name)| Color::from_name(name))
}

/// Reads an [`IconDefinition`] out of a source file.
///
/// Sources without a `val <namespace>.<group>.<Name>:` property are not icons
/// and yield nothing.
#[derive(Debug)]
pub struct IconReader {
    namespace: String,
}

impl IconReader {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Pipe for IconReader {
    type Input = String;
    type Output = IconDefinition;

    type Error = Error;

    fn process(&mut self, source: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        let Some((_, property)) = search(&source, |s| property_name(s, &self.namespace)) else {
            return Ok(None);
        };

        let Extraction {
            name,
            canvas,
            paths,
        } = extract_icon(&source)?;

        Ok(Some(IconDefinition {
            property_name: property.to_string(),
            name,
            canvas,
            paths,
        }))
    }
}

#[cfg(test)]
const BACK: &str = r#"package top.yukonga.miuix.kmp.icon.icons.useful

val MiuixIcons.Useful.Back: ImageVector
    get() {
        if (_back != null) return _back!!
        _back = ImageVector.Builder("Back", 26.0f.dp, 26.0f.dp, 26.0f, 26.0f).apply {
            path(
                fill = SolidColor(Color.White),
                pathFillType = PathFillType.EvenOdd
            ) {
                moveTo(10f, 20f)
                lineTo(30f, 40f)
                close()
            }
            path(
                fill = SolidColor(Color.Black),
                pathFillType = PathFillType.EvenOdd
            ) {
                moveTo(1f, 2f)
                curveTo(1f, 2f, 3f, 4f, 5f, 6f)
            }
            path(fill = SolidColor(Color.Black)) {
                arcTo(1f, 1f, 0f, false, true, 2f, 2f)
            }
        }.build()
        return _back!!
    }

private var _back: ImageVector? = null
"#;

#[test]
fn extract_back_icon() {
    let extraction = extract_icon(BACK).unwrap();
    assert_eq!(extraction.name, "Back");
    assert_eq!(extraction.canvas, Canvas::FALLBACK);
    assert_eq!(
        extraction.paths,
        vec![
            PathRecord {
                commands: "M 10 20 L 30 40 Z".to_string(),
                fill: Color::White,
            },
            // the first fill of the file wins for every block
            PathRecord {
                commands: "M 1 2 C 1 2 3 4 5 6".to_string(),
                fill: Color::White,
            },
        ]
    );
}

#[test]
fn extraction_failures() {
    assert!(matches!(
        extract_icon("val MiuixIcons.Useful.Back: ImageVector"),
        Err(ExtractError::MissingBuilder)
    ));
    assert!(matches!(
        extract_icon(r#"ImageVector.Builder("Back", 1f, 1f, 1f, 1f) path() { arcTo() }"#),
        Err(ExtractError::NoPaths)
    ));
    assert!(matches!(
        extract_icon(r#"ImageVector.Builder("", 1f, 1f, 1f, 1f) path() { close() }"#),
        Err(ExtractError::EmptyName)
    ));
}

#[test]
fn unknown_fill_falls_back_to_black() {
    let source = r#"ImageVector.Builder("Dot", 1f, 1f, 1f, 1f)
        path(fill = SolidColor(Color.Red)) { close() }"#;
    let extraction = extract_icon(source).unwrap();
    assert_eq!(extraction.paths[0].fill, Color::Black);
}

#[test]
fn reader_skips_non_icons() {
    let mut reader = IconReader::new("MiuixIcons");
    assert!(matches!(reader.process("fun main() {}".to_string()), Ok(None)));

    let icon = reader.process(BACK.to_string()).unwrap().unwrap();
    assert_eq!(icon.property_name, "Back");
    assert_eq!(icon.name, "Back");
    assert_eq!(icon.paths.len(), 2);

    assert!(matches!(
        reader.process("val MiuixIcons.Useful.Back: ImageVector".to_string()),
        Err(Error::Extract(ExtractError::MissingBuilder))
    ));
}
