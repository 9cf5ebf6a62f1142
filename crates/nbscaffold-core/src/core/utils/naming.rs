//! Deterministic, filesystem-safe names derived from human-readable titles.
//!
//! Every name in a scaffolded tree comes from the same tokenizer, so directory slugs
//! and section file stems never disagree about which characters survive:
//!
//! 1. the title is split on whitespace;
//! 2. each token keeps only word characters (Unicode alphanumerics and `_`) and `-`,
//!    with runs of `-` collapsed and `-` trimmed from both ends;
//! 3. empty tokens are dropped.
//!
//! All functions here are total: unrecognized characters are dropped, never rejected.

const SECTION_PREFIX: &str = "Section";
const NOTEBOOK_EXTENSION: &str = "ipynb";

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn push_filtered(token: &mut String, c: char) {
    if is_word_char(c) {
        token.push(c);
    } else if c == '-' && !token.is_empty() && !token.ends_with('-') {
        token.push('-');
    }
}

fn clean_token(raw: &str, lowercase: bool) -> String {
    let mut token = String::with_capacity(raw.len());
    for c in raw.chars() {
        // Lowercasing happens before filtering so that multi-char lowercase forms
        // (e.g. 'İ' -> "i\u{307}") are filtered too, keeping slugify idempotent.
        if lowercase {
            c.to_lowercase().for_each(|lc| push_filtered(&mut token, lc));
        } else {
            push_filtered(&mut token, c);
        }
    }
    while token.ends_with('-') {
        token.pop();
    }
    token
}

fn tokens(text: &str, lowercase: bool) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(move |raw| clean_token(raw, lowercase))
        .filter(|t| !t.is_empty())
}

/// Lowercase, hyphen-separated slug.
///
/// ```
/// use nbscaffold::core::utils::naming::slugify;
///
/// assert_eq!(slugify("Spin One-Half"), "spin-one-half");
/// assert_eq!(slugify("What are the base states of the world?"), "what-are-the-base-states-of-the-world");
/// assert_eq!(slugify("!!!"), "");
/// ```
pub fn slugify(text: &str) -> String {
    tokens(text, true).collect::<Vec<_>>().join("-")
}

/// Case-preserving, underscore-separated stem used in section file names.
pub fn section_stem(title: &str) -> String {
    tokens(title, false).collect::<Vec<_>>().join("_")
}

pub fn volume_dir_name(number: u32, slug: &str) -> String {
    format!("volume-{}-{}", number, slug)
}

pub fn chapter_dir_name(number: u32, title: &str) -> String {
    format!("ch{:02}-{}", number, slugify(title))
}

/// `Section_<chapter>-<index>_<stem>.ipynb`, with `index` 1-based within the chapter.
pub fn section_file_name(chapter: u32, index: usize, title: &str) -> String {
    format!(
        "{}_{}-{}_{}.{}",
        SECTION_PREFIX,
        chapter,
        index,
        section_stem(title),
        NOTEBOOK_EXTENSION
    )
}
