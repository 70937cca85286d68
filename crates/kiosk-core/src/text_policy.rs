//! Text folding for the panel's 8-bit bitmap font.

use alloc::{borrow::Cow, string::String};

/// Substitute used for anything the bitmap font cannot draw.
pub const REPLACEMENT: char = '?';

/// Fold typographic punctuation to ASCII and replace unprintable characters.
///
/// Newlines are kept, tabs become a space and carriage returns are dropped.
/// Text that is already plain ASCII is returned borrowed.
pub fn sanitize_for_bitmap(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_drawable) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match fold(ch) {
            Folded::Keep => out.push(ch),
            Folded::Char(replacement) => out.push(replacement),
            Folded::Str(replacement) => out.push_str(replacement),
            Folded::Drop => {}
        }
    }
    Cow::Owned(out)
}

enum Folded {
    Keep,
    Char(char),
    Str(&'static str),
    Drop,
}

fn is_drawable(ch: char) -> bool {
    ch == '\n' || (' '..='~').contains(&ch)
}

fn fold(ch: char) -> Folded {
    match ch {
        _ if is_drawable(ch) => Folded::Keep,
        '\u{2013}' | '\u{2014}' | '\u{2212}' => Folded::Char('-'),
        '\u{201C}' | '\u{201D}' | '\u{201E}' => Folded::Char('"'),
        '\u{2018}' | '\u{2019}' => Folded::Char('\''),
        '\u{2026}' => Folded::Str("..."),
        '\u{00A0}' | '\t' => Folded::Char(' '),
        '\r' => Folded::Drop,
        _ => Folded::Char(REPLACEMENT),
    }
}
