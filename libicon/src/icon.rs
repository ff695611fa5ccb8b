/// Solid fill colors understood by the extractor.
///
/// Only the two named colors are recognized, anything else falls back to
/// [`Color::Black`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Color {
    #[default]
    Black,
    White,
}

impl Color {
    pub fn from_name(name: &str) -> Self {
        match name {
            "White" => Color::White,
            _ => Color::Black,
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Black => "#000000",
            Color::White => "#ffffff",
        }
    }
}

/// Size and viewport of the emitted document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl Canvas {
    /// Builder geometry is not read from source, every icon gets this canvas.
    pub const FALLBACK: Canvas = Canvas {
        width: 26.0,
        height: 26.0,
        viewport_width: 26.0,
        viewport_height: 26.0,
    };
}

impl Default for Canvas {
    fn default() -> Self {
        Self::FALLBACK
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathRecord {
    /// Space separated `M`/`L`/`C`/`V`/`H`/`Z` tokens, never empty.
    pub commands: String,
    pub fill: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconDefinition {
    /// Identifier of the `val` property, used for the output file name.
    pub property_name: String,
    /// Name given to the builder, used as the accessible label.
    pub name: String,
    pub canvas: Canvas,
    pub paths: Vec<PathRecord>,
}

#[test]
fn color_names() {
    assert_eq!(Color::from_name("White").hex(), "#ffffff");
    assert_eq!(Color::from_name("Black").hex(), "#000000");
    assert_eq!(Color::from_name("Red"), Color::Black);
    assert_eq!(Color::default().hex(), "#000000");
}
