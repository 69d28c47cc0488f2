//! Character classes and light text normalization.

use std::sync::LazyLock;

use regex::Regex;

/// Common CJK punctuation kept by [`clean_text`].
const CHINESE_PUNCT: &[char] = &[
    '\u{b7}', '\u{d7}', '\u{2014}', '\u{2018}', '\u{2019}', '\u{201c}', '\u{201d}', '\u{2026}',
    '\u{3001}', '\u{3002}', '\u{300a}', '\u{300b}', '\u{300e}', '\u{300f}', '\u{3010}',
    '\u{3011}', '\u{ff01}', '\u{ff08}', '\u{ff09}', '\u{ff0c}', '\u{ff1a}', '\u{ff1b}',
    '\u{ff1f}',
];

/// Whether `c` is a CJK ideograph.
pub fn is_chinese_char(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2B73F}'
        | '\u{2B740}'..='\u{2B81F}'
        | '\u{2B820}'..='\u{2CEAF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{2F800}'..='\u{2FA1F}'
    )
}

pub fn is_chinese_punct(c: char) -> bool {
    CHINESE_PUNCT.contains(&c)
}

/// Whether `text` contains at least one CJK ideograph.
pub fn has_chinese(text: &str) -> bool {
    text.chars().any(is_chinese_char)
}

/// Keep CJK text, CJK punctuation, ASCII letters, digits and punctuation.
///
/// Whitespace survives only between ASCII words; all other whitespace is
/// dropped, since it carries no meaning in Chinese text.
pub fn clean_text(text: &str) -> String {
    let chars: Vec<char> = text.trim().chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    for (i, &c) in chars.iter().enumerate() {
        if c.is_whitespace() {
            let next = chars.get(i + 1).copied();
            let keep = prev.is_some_and(|p| p.is_ascii_alphabetic() || p.is_ascii_punctuation())
                && next.is_some_and(|n| n.is_ascii_alphabetic());
            if keep {
                out.push(' ');
            }
            continue;
        }
        if is_chinese_char(c)
            || is_chinese_punct(c)
            || c.is_ascii_alphanumeric()
            || c.is_ascii_punctuation()
        {
            out.push(c);
            prev = Some(c);
        }
    }
    out
}

/// Sentence terminators, including runs of them.
static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[。！？!?；;…\r\n]+").unwrap());

/// Split text on sentence terminators, keeping pieces that contain Chinese.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| has_chinese(s))
        .map(str::to_string)
        .collect()
}
