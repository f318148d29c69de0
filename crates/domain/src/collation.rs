//! Collation for the Persian labels of the catalog.
//!
//! Strings are compared letter by letter on the Persian alphabet order. Arabic
//! letter forms are folded onto their Persian counterparts, Persian and
//! Arabic-Indic digits onto ASCII digits, and joiners, tatweel and diacritics
//! are ignored. Whitespace sorts before symbols, symbols before digits, digits
//! before Latin letters and Latin letters before Persian letters.
//!
//! Strings that are equal on this primary level are ordered by their letter
//! variants (e.g. `ا` before `آ`, lower case before upper case) and finally by
//! code points, so that `compare` is a total order.

use std::cmp::Ordering;

const ALPHABET: [char; 32] = [
    'ا', 'ب', 'پ', 'ت', 'ث', 'ج', 'چ', 'ح', 'خ', 'د', 'ذ', 'ر', 'ز', 'ژ', 'س', 'ش', 'ص', 'ض', 'ط',
    'ظ', 'ع', 'غ', 'ف', 'ق', 'ک', 'گ', 'ل', 'م', 'ن', 'و', 'ه', 'ی',
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Primary {
    Space,
    Symbol(char),
    Digit(u32),
    Latin(char),
    Hamza,
    Persian(usize),
    Other(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Element {
    primary: Primary,
    secondary: u8,
}

#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let a_elements = elements(a);
    let b_elements = elements(b);

    a_elements
        .iter()
        .map(|e| e.primary)
        .cmp(b_elements.iter().map(|e| e.primary))
        .then_with(|| {
            a_elements
                .iter()
                .map(|e| e.secondary)
                .cmp(b_elements.iter().map(|e| e.secondary))
        })
        .then_with(|| a.cmp(b))
}

fn elements(text: &str) -> Vec<Element> {
    text.chars().filter_map(element).collect()
}

fn element(c: char) -> Option<Element> {
    if is_ignorable(c) {
        return None;
    }

    let (primary, secondary) = if c.is_whitespace() {
        (Primary::Space, 0)
    } else if let Some((digit, secondary)) = digit(c) {
        (Primary::Digit(digit), secondary)
    } else if let Some((letter, secondary)) = fold_arabic(c) {
        if letter == 'ء' {
            (Primary::Hamza, secondary)
        } else {
            match ALPHABET.iter().position(|l| *l == letter) {
                Some(rank) => (Primary::Persian(rank), secondary),
                None => (Primary::Other(c), 0),
            }
        }
    } else if c.is_alphabetic() && !is_arabic_block(c) {
        let lower = c.to_lowercase().next().unwrap_or(c);
        (Primary::Latin(lower), u8::from(lower != c))
    } else if c.is_ascii_punctuation() || (!c.is_alphanumeric() && !is_arabic_block(c)) {
        (Primary::Symbol(c), 0)
    } else {
        (Primary::Other(c), 0)
    };

    Some(Element {
        primary,
        secondary,
    })
}

fn is_ignorable(c: char) -> bool {
    matches!(c,
        '\u{200C}' | '\u{200D}' | '\u{0640}' | '\u{064B}'..='\u{065F}' | '\u{0670}'
    )
}

fn is_arabic_block(c: char) -> bool {
    matches!(c, '\u{0600}'..='\u{06FF}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}')
}

fn digit(c: char) -> Option<(u32, u8)> {
    match c {
        '0'..='9' => Some((u32::from(c) - u32::from('0'), 0)),
        '۰'..='۹' => Some((u32::from(c) - u32::from('۰'), 1)),
        '٠'..='٩' => Some((u32::from(c) - u32::from('٠'), 2)),
        _ => None,
    }
}

/// Maps a letter onto its Persian base letter and a variant rank.
fn fold_arabic(c: char) -> Option<(char, u8)> {
    match c {
        'آ' => Some(('ا', 1)),
        'أ' => Some(('ا', 2)),
        'إ' => Some(('ا', 3)),
        'ٱ' => Some(('ا', 4)),
        'ي' => Some(('ی', 1)),
        'ى' => Some(('ی', 2)),
        'ئ' => Some(('ی', 3)),
        'ك' => Some(('ک', 1)),
        'ة' => Some(('ه', 1)),
        'ۀ' => Some(('ه', 2)),
        'ؤ' => Some(('و', 1)),
        'ء' => Some(('ء', 0)),
        _ if ALPHABET.contains(&c) => Some((c, 0)),
        _ => None,
    }
}
