//! Pixel-budget pagination of poem text.
//!
//! Wrapping is measured through [`TextMeasurer`], which the rendering side
//! supplies so that the lines produced here are exactly what fits on the
//! panel. Every page repeats the title, so the title block (wrapped title
//! lines plus a gap) is charged against every page's vertical budget.

use alloc::{string::String, vec::Vec};
use core::mem;

use crate::{content::PoemRecord, text_policy::sanitize_for_bitmap};

/// Pixel measurement for a font at an integer scale.
pub trait TextMeasurer {
    fn text_width(&self, text: &str, scale: u8) -> u32;
    fn glyph_height(&self, scale: u8) -> u32;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn text_width(&self, text: &str, scale: u8) -> u32 {
        (**self).text_width(text, scale)
    }

    fn glyph_height(&self, scale: u8) -> u32 {
        (**self).glyph_height(scale)
    }
}

/// Fixed-cell font metrics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MonospaceMetrics {
    pub char_width: u32,
    pub char_height: u32,
    pub char_spacing: u32,
}

impl MonospaceMetrics {
    pub const fn new(char_width: u32, char_height: u32, char_spacing: u32) -> Self {
        Self {
            char_width,
            char_height,
            char_spacing,
        }
    }
}

impl TextMeasurer for MonospaceMetrics {
    fn text_width(&self, text: &str, scale: u8) -> u32 {
        let count = text.chars().count() as u32;
        if count == 0 {
            return 0;
        }
        let unscaled = count * self.char_width + (count - 1) * self.char_spacing;
        unscaled * u32::from(scale.max(1))
    }

    fn glyph_height(&self, scale: u8) -> u32 {
        self.char_height * u32::from(scale.max(1))
    }
}

/// Session-wide layout budget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LayoutConfig {
    pub page_width: u32,
    pub page_height: u32,
    /// Applied on all four sides.
    pub margin_px: u32,
    pub line_spacing_px: u32,
    /// Title scale as a multiple of `body_scale`.
    pub title_scale: u8,
    pub body_scale: u8,
    pub title_gap_px: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 480,
            page_height: 480,
            margin_px: 10,
            line_spacing_px: 2,
            title_scale: 2,
            body_scale: 2,
            title_gap_px: 8,
        }
    }
}

impl LayoutConfig {
    pub fn usable_width(&self) -> u32 {
        self.page_width.saturating_sub(self.margin_px.saturating_mul(2))
    }

    pub fn usable_height(&self) -> u32 {
        self.page_height.saturating_sub(self.margin_px.saturating_mul(2))
    }

    pub fn body_pixel_scale(&self) -> u8 {
        self.body_scale.max(1)
    }

    pub fn title_pixel_scale(&self) -> u8 {
        self.body_pixel_scale().saturating_mul(self.title_scale.max(1))
    }

    pub fn line_height<M: TextMeasurer + ?Sized>(&self, scale: u8, measurer: &M) -> u32 {
        (measurer.glyph_height(scale) + self.line_spacing_px).max(1)
    }

    pub fn title_block_height<M: TextMeasurer + ?Sized>(&self, title_lines: usize, measurer: &M) -> u32 {
        title_lines as u32 * self.line_height(self.title_pixel_scale(), measurer) + self.title_gap_px
    }

    /// Vertical space a page with `body_lines` lines occupies below the top margin.
    pub fn page_height_for<M: TextMeasurer + ?Sized>(
        &self,
        title_lines: usize,
        body_lines: usize,
        measurer: &M,
    ) -> u32 {
        self.title_block_height(title_lines, measurer)
            + body_lines as u32 * self.line_height(self.body_pixel_scale(), measurer)
    }

    /// Body lines that fit under the title block, never less than one.
    pub fn lines_per_page<M: TextMeasurer + ?Sized>(&self, title_lines: usize, measurer: &M) -> usize {
        let budget = self
            .usable_height()
            .saturating_sub(self.title_block_height(title_lines, measurer));
        let per_page = budget / self.line_height(self.body_pixel_scale(), measurer);
        (per_page as usize).max(1)
    }
}

/// One screenful of body text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Page {
    pub lines: Vec<String>,
    /// The title block is drawn above the lines and charged to this page.
    pub title_reserved: bool,
}

/// Wrapped title plus the body split into pages. Never empty.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageSet {
    title_lines: Vec<String>,
    pages: Vec<Page>,
}

impl PageSet {
    pub fn title_lines(&self) -> &[String] {
        &self.title_lines
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Every body line across all pages, in order.
    pub fn body_lines(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(String::as_str))
    }
}

/// Word-wrap `text` against `max_width` pixels.
///
/// Explicit newlines always break; a blank line becomes an empty entry.
/// Words wider than `max_width` are split by character, and the remainder
/// continues the current line. Empty input gives no lines.
pub fn wrap_text<M: TextMeasurer + ?Sized>(
    text: &str,
    max_width: u32,
    scale: u8,
    measurer: &M,
) -> Vec<String> {
    let mut out = Vec::new();
    if text.is_empty() {
        return out;
    }

    for raw in text.split('\n') {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        wrap_line(raw, max_width, scale, measurer, &mut out);
    }
    out
}

fn wrap_line<M: TextMeasurer + ?Sized>(
    raw: &str,
    max_width: u32,
    scale: u8,
    measurer: &M,
    out: &mut Vec<String>,
) {
    let mut current = String::new();

    for word in raw.split_whitespace() {
        let mark = current.len();
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        if measurer.text_width(&current, scale) <= max_width {
            continue;
        }

        current.truncate(mark);
        if !current.is_empty() {
            out.push(mem::take(&mut current));
        }

        if measurer.text_width(word, scale) <= max_width {
            current.push_str(word);
            continue;
        }

        for ch in word.chars() {
            let mark = current.len();
            current.push(ch);
            if mark == 0 || measurer.text_width(&current, scale) <= max_width {
                continue;
            }
            current.truncate(mark);
            out.push(mem::take(&mut current));
            current.push(ch);
        }
    }

    out.push(current);
}

/// Sanitize, wrap and split `record` into pages.
pub fn paginate<M: TextMeasurer + ?Sized>(
    record: &PoemRecord,
    layout: &LayoutConfig,
    measurer: &M,
) -> PageSet {
    let width = layout.usable_width();
    let title = sanitize_for_bitmap(&record.title);
    let body = sanitize_for_bitmap(&record.body);

    let title_lines = wrap_text(&title, width, layout.title_pixel_scale(), measurer);
    let body_lines = wrap_text(&body, width, layout.body_pixel_scale(), measurer);
    // An empty title still holds its band.
    let per_page = layout.lines_per_page(title_lines.len().max(1), measurer);

    let mut pages: Vec<Page> = body_lines
        .chunks(per_page)
        .map(|chunk| Page {
            lines: chunk.to_vec(),
            title_reserved: true,
        })
        .collect();
    if pages.is_empty() {
        pages.push(Page {
            lines: Vec::new(),
            title_reserved: true,
        });
    }

    PageSet { title_lines, pages }
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use proptest::prelude::*;

    use super::*;
    use crate::content::poem_id;

    const CELL: MonospaceMetrics = MonospaceMetrics::new(6, 10, 0);

    fn record(title: &str, body: &str) -> PoemRecord {
        PoemRecord {
            id: poem_id("p").unwrap(),
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    fn one_line_layout() -> LayoutConfig {
        // title line 12 + body line 12, plus 5px slack that cannot hold a second line
        LayoutConfig {
            page_width: 480,
            page_height: 20 + 12 + 12 + 5,
            margin_px: 10,
            line_spacing_px: 2,
            title_scale: 1,
            body_scale: 1,
            title_gap_px: 0,
        }
    }

    #[test]
    fn words_wrap_at_width() {
        assert_eq!(
            wrap_text("one two three", 42, 1, &CELL),
            vec!["one two".to_string(), "three".to_string()]
        );
    }

    #[test]
    fn long_word_falls_back_to_characters_and_remainder_continues() {
        assert_eq!(
            wrap_text("abcdefghijkl mn", 30, 1, &CELL),
            vec!["abcde".to_string(), "fghij".to_string(), "kl mn".to_string()]
        );
    }

    #[test]
    fn blank_and_trailing_lines_are_preserved() {
        assert_eq!(
            wrap_text("a\n\nb\n", 480, 1, &CELL),
            vec![
                "a".to_string(),
                String::new(),
                "b".to_string(),
                String::new()
            ]
        );
        assert!(wrap_text("", 480, 1, &CELL).is_empty());
    }

    #[test]
    fn scale_multiplies_measurement() {
        assert_eq!(CELL.text_width("abc", 2), 36);
        assert_eq!(CELL.glyph_height(3), 30);
        assert_eq!(MonospaceMetrics::new(5, 8, 1).text_width("abc", 1), 17);
    }

    #[test]
    fn blank_line_takes_its_own_page() {
        let pages = paginate(&record("T", "line1\n\nline2"), &one_line_layout(), &CELL);

        assert_eq!(pages.len(), 3);
        assert_eq!(pages.page(1).unwrap().lines, vec![String::new()]);
    }

    #[test]
    fn empty_body_gives_single_title_page() {
        let pages = paginate(&record("Untitled", ""), &LayoutConfig::default(), &CELL);

        assert_eq!(pages.len(), 1);
        assert!(pages.page(0).unwrap().lines.is_empty());
        assert!(pages.page(0).unwrap().title_reserved);
        assert_eq!(pages.title_lines(), ["Untitled".to_string()]);
    }

    #[test]
    fn empty_title_keeps_its_band() {
        let body = vec!["x"; 40].join("\n");
        let untitled = paginate(&record("", &body), &LayoutConfig::default(), &CELL);
        let titled = paginate(&record("T", &body), &LayoutConfig::default(), &CELL);

        assert!(untitled.title_lines().is_empty());
        assert_eq!(untitled.page(0).unwrap().lines.len(), 18);
        assert_eq!(untitled.len(), titled.len());
    }

    #[test]
    fn default_layout_budget() {
        let layout = LayoutConfig::default();
        // usable 460; title line 10*4+2 = 42, gap 8; body line 10*2+2 = 22
        assert_eq!(layout.usable_height(), 460);
        assert_eq!(layout.title_block_height(1, &CELL), 50);
        assert_eq!(layout.lines_per_page(1, &CELL), 18);
    }

    #[test]
    fn oversized_title_still_places_one_body_line_per_page() {
        let layout = LayoutConfig {
            page_height: 60,
            ..LayoutConfig::default()
        };
        let pages = paginate(&record("A very long title indeed", "x\ny\nz"), &layout, &CELL);

        assert_eq!(pages.len(), 3);
    }

    #[test]
    fn text_is_sanitized_before_wrapping() {
        let pages = paginate(
            &record("\u{201C}Hope\u{201D}", "a \u{2014} b"),
            &LayoutConfig::default(),
            &CELL,
        );

        assert_eq!(pages.title_lines(), ["\"Hope\"".to_string()]);
        assert_eq!(pages.body_lines().collect::<Vec<_>>(), vec!["a - b"]);
    }

    proptest! {
        #[test]
        fn pages_cover_wrapped_lines_and_fit(
            title in "[A-Za-z ]{0,40}",
            body in "[a-z \n]{0,600}",
            height in 120u32..600,
            spacing in 0u32..6,
        ) {
            let layout = LayoutConfig {
                page_height: height,
                line_spacing_px: spacing,
                ..LayoutConfig::default()
            };
            let set = paginate(&record(&title, &body), &layout, &CELL);
            let wrapped = wrap_text(&body, layout.usable_width(), layout.body_pixel_scale(), &CELL);

            prop_assert!(!set.is_empty());
            let flattened: Vec<&str> = set.body_lines().collect();
            let expected: Vec<&str> = wrapped.iter().map(String::as_str).collect();
            prop_assert_eq!(flattened, expected);

            let fits_one = layout.page_height_for(set.title_lines().len(), 1, &CELL)
                <= layout.usable_height();
            for page in set.pages() {
                if fits_one {
                    prop_assert!(
                        layout.page_height_for(set.title_lines().len(), page.lines.len(), &CELL)
                            <= layout.usable_height()
                    );
                } else {
                    prop_assert!(page.lines.len() <= 1);
                }
            }
        }
    }
}
