//! Lexicon-based subjectivity model.
//!
//! Each known adjective carries a subjectivity in `[0, 1]` and an intensity.
//! An intensifier directly before a known word scales that word's
//! subjectivity; anywhere else it is scored as a word of its own. The text's
//! subjectivity is the mean over every scored word.

use std::collections::HashMap;

use once_cell::sync::Lazy;

#[derive(Debug, Clone, Copy)]
struct Entry {
    subjectivity: f64,
    intensity: f64,
}

impl Entry {
    fn is_intensifier(&self) -> bool {
        self.intensity > 1.0
    }
}

// (word, subjectivity, intensity)
const ENTRIES: &[(&str, f64, f64)] = &[
    ("absurd", 1.0, 1.0),
    ("amazing", 0.9, 1.0),
    ("angry", 1.0, 1.0),
    ("annoying", 0.9, 1.0),
    ("awesome", 1.0, 1.0),
    ("awful", 1.0, 1.0),
    ("bad", 0.67, 1.0),
    ("beautiful", 1.0, 1.0),
    ("best", 0.3, 1.0),
    ("better", 0.5, 1.0),
    ("big", 0.1, 1.0),
    ("boring", 1.0, 1.0),
    ("brilliant", 1.0, 1.0),
    ("cheap", 0.7, 1.0),
    ("clear", 0.38, 1.0),
    ("clever", 0.75, 1.0),
    ("common", 0.5, 1.0),
    ("complete", 0.4, 1.0),
    ("crazy", 0.9, 1.0),
    ("critical", 0.8, 1.0),
    ("cruel", 1.0, 1.0),
    ("current", 0.4, 1.0),
    ("dangerous", 0.9, 1.0),
    ("dark", 0.4, 1.0),
    ("dead", 0.4, 1.0),
    ("difficult", 1.0, 1.0),
    ("dirty", 0.8, 1.0),
    ("disappointing", 0.7, 1.0),
    ("easy", 0.83, 1.0),
    ("effective", 0.8, 1.0),
    ("enormous", 0.75, 1.0),
    ("entire", 0.62, 1.0),
    ("evil", 1.0, 1.0),
    ("excellent", 1.0, 1.0),
    ("exciting", 0.8, 1.0),
    ("extraordinary", 0.75, 1.0),
    ("fair", 0.9, 1.0),
    ("fake", 1.0, 1.0),
    ("false", 0.6, 1.0),
    ("famous", 1.0, 1.0),
    ("fantastic", 0.9, 1.0),
    ("fine", 0.5, 1.0),
    ("foolish", 0.8, 1.0),
    ("fresh", 0.5, 1.0),
    ("full", 0.55, 1.0),
    ("funny", 1.0, 1.0),
    ("glad", 1.0, 1.0),
    ("good", 0.6, 1.0),
    ("great", 0.75, 1.0),
    ("happy", 1.0, 1.0),
    ("hard", 0.54, 1.0),
    ("harmful", 0.9, 1.0),
    ("healthy", 0.5, 1.0),
    ("helpful", 0.9, 1.0),
    ("high", 0.54, 1.0),
    ("honest", 0.9, 1.0),
    ("horrible", 1.0, 1.0),
    ("huge", 0.9, 1.0),
    ("important", 1.0, 1.0),
    ("impossible", 1.0, 1.0),
    ("impressive", 1.0, 1.0),
    ("incredible", 0.9, 1.0),
    ("interesting", 0.5, 1.0),
    ("large", 0.43, 1.0),
    ("late", 0.6, 1.0),
    ("lazy", 1.0, 1.0),
    ("likely", 1.0, 1.0),
    ("little", 0.5, 1.0),
    ("long", 0.4, 1.0),
    ("lovely", 0.75, 1.0),
    ("low", 0.3, 1.0),
    ("lucky", 1.0, 1.0),
    ("major", 0.5, 1.0),
    ("mean", 0.69, 1.0),
    ("modern", 0.3, 1.0),
    ("much", 0.2, 1.0),
    ("nasty", 1.0, 1.0),
    ("natural", 0.4, 1.0),
    ("necessary", 1.0, 1.0),
    ("negative", 0.4, 1.0),
    ("new", 0.45, 1.0),
    ("nice", 1.0, 1.0),
    ("obvious", 0.5, 1.0),
    ("old", 0.2, 1.0),
    ("perfect", 1.0, 1.0),
    ("pleasant", 0.97, 1.0),
    ("poor", 0.6, 1.0),
    ("popular", 0.8, 1.0),
    ("positive", 0.55, 1.0),
    ("possible", 1.0, 1.0),
    ("powerful", 1.0, 1.0),
    ("pretty", 1.0, 1.0),
    ("proud", 1.0, 1.0),
    ("rare", 0.9, 1.0),
    ("ready", 0.5, 1.0),
    ("real", 0.3, 1.0),
    ("recent", 0.25, 1.0),
    ("rich", 0.62, 1.0),
    ("ridiculous", 1.0, 1.0),
    ("right", 0.54, 1.0),
    ("sad", 1.0, 1.0),
    ("safe", 0.5, 1.0),
    ("serious", 0.67, 1.0),
    ("severe", 1.0, 1.0),
    ("significant", 0.88, 1.0),
    ("simple", 0.36, 1.0),
    ("slow", 0.39, 1.0),
    ("small", 0.4, 1.0),
    ("smart", 0.64, 1.0),
    ("special", 0.57, 1.0),
    ("strange", 0.15, 1.0),
    ("strong", 0.73, 1.0),
    ("stupid", 1.0, 1.0),
    ("successful", 0.95, 1.0),
    ("sure", 0.89, 1.0),
    ("terrible", 1.0, 1.0),
    ("true", 0.65, 1.0),
    ("ugly", 1.0, 1.0),
    ("unfair", 0.9, 1.0),
    ("unhappy", 0.9, 1.0),
    ("unusual", 0.7, 1.0),
    ("useful", 0.0, 1.0),
    ("useless", 0.2, 1.0),
    ("weak", 0.62, 1.0),
    ("weird", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("worse", 0.6, 1.0),
    ("worst", 1.0, 1.0),
    ("wrong", 0.9, 1.0),
    // intensifiers
    ("extremely", 1.0, 1.5),
    ("highly", 0.54, 1.4),
    ("incredibly", 0.9, 1.5),
    ("quite", 1.0, 1.1),
    ("really", 0.2, 1.3),
    ("so", 0.0, 1.3),
    ("too", 0.0, 1.3),
    ("totally", 0.75, 1.3),
    ("very", 0.3, 1.3),
];

static LEXICON: Lazy<HashMap<&'static str, Entry>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(word, subjectivity, intensity)| {
            (
                word,
                Entry {
                    subjectivity,
                    intensity,
                },
            )
        })
        .collect()
});

/// Subjectivity of every lexicon word in `tokens` (already lowercased).
///
/// An intensifier directly followed by a lexicon word scales that word and
/// is not scored itself. Followed by anything else, or by nothing, it is
/// scored with its own subjectivity.
pub fn assessments(tokens: &[String]) -> Vec<f64> {
    let mut out = Vec::new();
    let mut pending: Option<Entry> = None;

    for token in tokens {
        let Some(entry) = LEXICON.get(token.as_str()).copied() else {
            out.extend(pending.take().map(|p| p.subjectivity));
            continue;
        };

        if entry.is_intensifier() {
            out.extend(pending.replace(entry).map(|p| p.subjectivity));
            continue;
        }

        let intensity = pending.take().map_or(1.0, |p| p.intensity);
        out.push((entry.subjectivity * intensity).clamp(0.0, 1.0));
    }

    out.extend(pending.map(|p| p.subjectivity));
    out
}

/// Mean subjectivity over every assessed word, 0.0 when none matched.
pub fn subjectivity(tokens: &[String]) -> f64 {
    let scored = assessments(tokens);
    if scored.is_empty() {
        return 0.0;
    }
    let total: f64 = scored.iter().sum();
    (total / scored.len() as f64).clamp(0.0, 1.0)
}
