use crate::{
    measure::TextMeasurer,
    style::FontSpec,
    BreakError, Pt,
};
use id_arena::{Arena, Id};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::path::Path;

/// A parsed font face. Fonts can be TTF or OTF fonts; only horizontal
/// advances and vertical metrics are read, there is no shaping or kerning.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, BreakError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Read and parse a font file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Font, BreakError> {
        let bytes = std::fs::read(path)?;
        Font::load(bytes)
    }

    /// Obtain the family name of the font, if the face has a unicode one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    fn scaling(&self, size: Pt) -> Pt {
        size / self.face.as_face_ref().units_per_em() as f32
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given font size
    pub fn ascent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().ascender() as f32
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the given font size.
    /// Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().descender() as f32
    }

    /// Calculate the leading (extra space between lines) for the given font size
    pub fn leading(&self, size: Pt) -> Pt {
        self.scaling(size) * self.face.as_face_ref().line_gap() as f32
    }

    /// Calculate the default line height of the font for the given size. The returned value is
    /// how much to vertically offset a second row of text below a first row of text.
    pub fn line_height(&self, size: Pt) -> Pt {
        self.leading(size) + self.ascent(size) - self.descent(size)
    }

    /// Whether the face declares a bold (700+) weight
    pub fn is_bold(&self) -> bool {
        self.face.as_face_ref().weight().to_number() >= 700
    }

    pub fn is_italic(&self) -> bool {
        self.face.as_face_ref().is_italic()
    }

    pub fn glyph_id(&self, ch: char) -> Option<u16> {
        self.face.as_face_ref().glyph_index(ch).map(|i| i.0)
    }

    pub fn replacement_glyph_id(&self) -> Option<u16> {
        self.face.as_face_ref().glyph_index('\u{FFFD}').map(|i| i.0)
    }

    /// Calculate the width of a given string of text given the font size. Characters
    /// the face has no glyph for are measured as the replacement character, or as `?`
    /// when the face lacks that too.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let scaling = self.scaling(size);
        let fallback = self.replacement_glyph_id().or_else(|| self.glyph_id('?'));
        text.chars()
            .filter_map(|ch| self.glyph_id(ch).or(fallback))
            .map(|gid| {
                scaling
                    * self
                        .face
                        .as_face_ref()
                        .glyph_hor_advance(GlyphId(gid))
                        .unwrap_or_default() as f32
            })
            .sum()
    }
}

/// A single face measures everything in itself, whatever family or emphasis
/// the spec asks for
impl TextMeasurer for Font {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        self.width_of_text(text, font.size)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct FaceKey {
    family: String,
    bold: bool,
    italic: bool,
}

/// A collection of faces that measures each run in the face matching its
/// family and emphasis.
///
/// Lookup prefers an exact family/bold/italic match, then any face of the same
/// family, then the first face added.
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    keys: Vec<(FaceKey, Id<Font>)>,
}

impl FontBook {
    /// Add a face, registering it under the family name and emphasis the face
    /// declares about itself
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        let family = font.family().unwrap_or_default();
        let (bold, italic) = (font.is_bold(), font.is_italic());
        self.add_font_as(font, family, bold, italic)
    }

    /// Add a face under an explicit family name and emphasis, e.g. to alias a
    /// face that is missing its name table
    pub fn add_font_as<S: Into<String>>(
        &mut self,
        font: Font,
        family: S,
        bold: bool,
        italic: bool,
    ) -> Id<Font> {
        let id = self.fonts.alloc(font);
        let key = FaceKey {
            family: family.into(),
            bold,
            italic,
        };
        log::debug!(
            "registered face {:?} (bold: {}, italic: {}) as {}",
            key.family,
            key.bold,
            key.italic,
            id.index()
        );
        self.keys.push((key, id));
        id
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Find the face used to measure runs set in `spec`
    pub fn face_for(&self, spec: &FontSpec) -> Option<Id<Font>> {
        let same_family = |key: &FaceKey| key.family.eq_ignore_ascii_case(&spec.family);
        self.keys
            .iter()
            .find(|(key, _)| same_family(key) && key.bold == spec.bold && key.italic == spec.italic)
            .or_else(|| self.keys.iter().find(|(key, _)| same_family(key)))
            .or_else(|| self.keys.first())
            .map(|&(_, id)| id)
    }
}

impl TextMeasurer for FontBook {
    fn measure(&self, text: &str, font: &FontSpec) -> Pt {
        match self.face_for(font) {
            Some(id) => self.fonts[id].width_of_text(text, font.size),
            None => {
                log::warn!("no faces registered, measuring {text:?} as zero width");
                Pt(0.0)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const MONO: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

    fn mono() -> Font {
        Font::load(MONO.to_vec()).expect("bundled font parses")
    }

    #[test]
    fn reads_face_names_and_metrics() {
        let font = Font::open(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/DejaVuSansMono.ttf"))
            .expect("can open bundled font");
        assert_eq!(font.family().as_deref(), Some("DejaVu Sans Mono"));
        assert!(!font.is_bold());
        assert!(!font.is_italic());

        let size = Pt(10.0);
        assert!(font.ascent(size) > Pt(0.0));
        assert!(font.descent(size) < Pt(0.0));
        assert!(font.line_height(size) > size);
    }

    #[test]
    fn width_sums_glyph_advances() {
        let font = mono();
        // every glyph advances 1233 units at 2048 units per em
        assert_eq!(font.width_of_text("a", Pt(2048.0)), Pt(1233.0));
        assert_eq!(font.width_of_text("abc", Pt(2048.0)), Pt(3699.0));
        assert_eq!(font.width_of_text("", Pt(2048.0)), Pt(0.0));

        let spec = FontSpec::new("anything", Pt(2048.0));
        assert_eq!(font.measure("abc", &spec), Pt(3699.0));
    }

    #[test]
    fn missing_glyphs_measure_as_replacement() {
        let font = mono();
        assert_eq!(font.glyph_id('\u{4E00}'), None);
        assert!(font.replacement_glyph_id().is_some());

        let size = Pt(12.0);
        let missing = font.width_of_text("\u{4E00}", size);
        assert!(missing > Pt(0.0));
        assert_eq!(missing, font.width_of_text("\u{FFFD}", size));
    }

    #[test]
    fn faces_register_under_their_own_name() {
        let mut book = FontBook::default();
        let id = book.add_font(mono());
        let spec = FontSpec::new("DejaVu Sans Mono", Pt(2048.0));
        assert_eq!(book.face_for(&spec), Some(id));
        assert_eq!(book.measure("ab", &spec), Pt(2466.0));
    }

    #[test]
    fn face_lookup_prefers_exact_then_family_then_first() {
        let mut book = FontBook::default();
        let serif = book.add_font_as(mono(), "Serif", false, true);
        let regular = book.add_font_as(mono(), "Mono", false, false);
        let bold = book.add_font_as(mono(), "Mono", true, false);

        let spec = FontSpec::new("mono", Pt(10.0));
        assert_eq!(book.face_for(&spec), Some(regular));
        assert_eq!(book.face_for(&spec.with_emphasis(true, false)), Some(bold));
        // no italic Mono, so the first Mono face
        assert_eq!(book.face_for(&spec.with_emphasis(false, true)), Some(regular));
        // unknown family, so the first face of all
        assert_eq!(book.face_for(&FontSpec::new("Sans", Pt(10.0))), Some(serif));
    }

    #[test]
    fn garbage_bytes_fail_to_parse() {
        let result = Font::load(b"definitely not a font".to_vec());
        assert!(matches!(result, Err(BreakError::FaceParsing(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Font::open("/nonexistent/font/path.ttf");
        assert!(matches!(result, Err(BreakError::Io(_))));
    }

    #[test]
    fn empty_book_measures_nothing() {
        let book = FontBook::default();
        assert!(book.is_empty());
        let spec = FontSpec::new("serif", Pt(12.0));
        assert_eq!(book.face_for(&spec), None);
        assert_eq!(book.measure("hello", &spec), Pt(0.0));
    }
}
