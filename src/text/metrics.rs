//! Readability and sentiment metrics for one article's text.
//!
//! [`analyze`] is a pure function: no I/O, no logging. A text with no word
//! tokens yields all-zero metrics instead of dividing by zero.

use once_cell::sync::Lazy;
use regex::Regex;

use super::sentiment;
use super::tokenize::{Tokenized, words};
use crate::lexicon::SentimentLexicons;
use crate::models::TextMetrics;

const VOWELS: &str = "aeiou";
const POLARITY_EPSILON: f64 = 0.000_001;

static PERSONAL_PRONOUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(I|we|my|ours|us)\b").unwrap());

fn vowel_count(token: &str) -> usize {
    token.chars().filter(|c| VOWELS.contains(*c)).count()
}

fn is_complex(token: &str) -> bool {
    vowel_count(token) > 2
}

/// (P - N) / (P + N + epsilon), always within [-1, 1].
pub fn polarity_score(positive: usize, negative: usize) -> f64 {
    (positive as f64 - negative as f64) / ((positive + negative) as f64 + POLARITY_EPSILON)
}

pub fn fog_index(avg_sentence_length: f64, percentage_complex_words: f64) -> f64 {
    0.4 * (avg_sentence_length + percentage_complex_words)
}

pub fn personal_pronouns(text: &str) -> usize {
    PERSONAL_PRONOUNS.find_iter(text).count()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Compute every metric for `text`.
pub fn analyze(text: &str, lexicons: &SentimentLexicons) -> TextMetrics {
    let tokens = Tokenized::new(text);
    let lowered = words(&text.to_lowercase());

    let positive_score = lexicons.positive.count_matches(&lowered);
    let negative_score = lexicons.negative.count_matches(&lowered);

    let word_count = tokens.words.len();
    let complex_word_count = tokens.words.iter().filter(|w| is_complex(w)).count();
    let vowels: usize = tokens.words.iter().map(|w| vowel_count(w)).sum();
    let chars: usize = tokens.words.iter().map(|w| w.chars().count()).sum();

    let avg_sentence_length = ratio(word_count, tokens.sentence_count);
    let percentage_complex_words = 100.0 * ratio(complex_word_count, word_count);

    TextMetrics {
        positive_score,
        negative_score,
        polarity_score: polarity_score(positive_score, negative_score),
        subjectivity_score: sentiment::subjectivity(&lowered),
        avg_sentence_length,
        percentage_complex_words,
        fog_index: fog_index(avg_sentence_length, percentage_complex_words),
        avg_words_per_sentence: avg_sentence_length,
        complex_word_count,
        word_count,
        syllable_per_word: ratio(vowels, word_count),
        personal_pronouns: personal_pronouns(text),
        avg_word_length: ratio(chars, word_count),
    }
}
