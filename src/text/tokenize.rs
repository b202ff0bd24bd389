//! Sentence and word tokenization.
//!
//! Sentences are split on terminal punctuation with an abbreviation check, so
//! `Mr. Smith` or `the U.S. economy` stay in one sentence. Words follow
//! Penn-Treebank conventions: punctuation becomes its own token, contractions
//! are split (`don't` -> `do`, `n't`) and only the sentence-final period is
//! detached from its word. Punctuation tokens are real tokens and count towards
//! every per-token statistic.

use once_cell::sync::Lazy;
use regex::Regex;

/// Lowercase abbreviations (without their trailing period) that do not end
/// a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "ft", "vs", "etc", "inc", "ltd",
    "co", "corp", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov",
    "dec", "no", "vol", "fig", "approx", "dept", "est", "gen", "gov", "sen", "rep", "rev", "capt",
    "col", "lt", "sgt", "cf", "al",
];

static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([.!?]+)(["'\)\]’”»]*)(\s+)"#).unwrap());

/// Ordered Treebank substitution passes. Each one pads a match with spaces
/// so the final whitespace split yields the tokens.
static TREEBANK_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // starting quotes
        (r"([«“‘„])", " ${1} "),
        (r#"^\s*""#, " `` "),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'')"#, "${1} `` "),
        // punctuation
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^\.])(\.)([\]\)}>"'”’»]*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
        // brackets
        (r"[\]\[\(\)\{\}<>]", " ${0} "),
        (r"--", " -- "),
        // ending quotes
        (r"([»”])", " ${1} "),
        (r#"""#, " '' "),
        (r"(\S)('')", "${1} ${2} "),
        // contractions, straight and typographic apostrophes
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
        (r"([^’ ])(’[sSmMdD]) ", "${1} ${2} "),
        (r"([^’ ])(’ll|’LL|’re|’RE|’ve|’VE|n’t|N’T) ", "${1} ${2} "),
        // a typographic apostrophe left before a non-letter is a closing quote
        (r"’([^\p{L}])", " ’ ${1}"),
    ]
    .into_iter()
    .map(|(pattern, replacement)| (Regex::new(pattern).unwrap(), replacement))
    .collect()
});

/// Split `text` into sentences.
///
/// A newline alone never ends a sentence; trailing text without a terminator
/// is returned as the last sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;

    for caps in SENTENCE_END.captures_iter(text) {
        let (Some(whole), Some(terminator), Some(spacing)) = (caps.get(0), caps.get(1), caps.get(3))
        else {
            continue;
        };
        if whole.start() < start {
            continue;
        }
        let next_char = text[whole.end()..].chars().next();
        if !is_boundary(&text[start..whole.start()], terminator.as_str(), next_char) {
            continue;
        }

        let sentence = text[start..spacing.start()].trim();
        if !sentence.is_empty() {
            out.push(sentence);
        }
        start = whole.end();
    }

    let rest = text[start..].trim();
    if !rest.is_empty() {
        out.push(rest);
    }
    out
}

fn is_boundary(before: &str, terminator: &str, next_char: Option<char>) -> bool {
    if terminator.contains(['!', '?']) || terminator.len() > 1 {
        return true;
    }

    let word = before
        .rsplit(char::is_whitespace)
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());
    if word.is_empty() {
        return true;
    }

    let lower = word.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return false;
    }

    // Initials (`J. Smith`) never end a sentence; dotted abbreviations
    // (`U.S.`, `e.g.`) only do when the next word is capitalised. The pronoun
    // `I` and lowercase letters are ordinary words.
    let is_initial =
        word.chars().count() == 1 && word.chars().all(char::is_uppercase) && word != "I";
    if is_initial || word.contains('.') {
        return next_char.is_some_and(char::is_uppercase) && !is_initial;
    }

    true
}

/// Tokenize one sentence with the Treebank passes.
pub fn words_in_sentence(sentence: &str) -> Vec<String> {
    let mut padded = format!(" {sentence} ");
    for (re, replacement) in TREEBANK_RULES.iter() {
        padded = re.replace_all(&padded, *replacement).into_owned();
    }
    padded.split_whitespace().map(str::to_string).collect()
}

/// Tokenize `text` into words, sentence by sentence.
pub fn words(text: &str) -> Vec<String> {
    sentences(text)
        .into_iter()
        .flat_map(words_in_sentence)
        .collect()
}

/// Sentences and words of one text, tokenized together.
#[derive(Debug, Clone, Default)]
pub struct Tokenized {
    pub sentence_count: usize,
    pub words: Vec<String>,
}

impl Tokenized {
    pub fn new(text: &str) -> Self {
        let sentences = sentences(text);
        let words = sentences
            .iter()
            .flat_map(|s| words_in_sentence(s))
            .collect();
        Self {
            sentence_count: sentences.len(),
            words,
        }
    }
}
