//! First-name based gender inference.
//!
//! The personnel roster carries no gender column, so the importer guesses
//! from the first name using two fixed lookup sets plus a suffix heuristic.
//! The checks form a strict priority chain - female set, male set,
//! ends-with-`a` heuristic, then the default - and the ordering must not
//! change, or re-runs would produce different profiles.
//!
//! The guess is lossy and culture-specific; callers should surface the
//! inferred value for review (the CLI dry-run does this) rather than
//! trusting it silently.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

/// Inferred or declared gender of an imported user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    /// Single-letter code stored in the profile table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    /// Parses an explicit `M`/`F` code (case-insensitive), e.g. from an
    /// optional override column in the source file.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" | "m" => Some(Gender::Male),
            "F" | "f" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Honorific/initial tokens dropped before picking the first name.
const DROPPED_TOKENS: [&str; 5] = ["b.", "ch.", "j.", "c.", "n."];

/// Known female first names, accent-folded and lowercased.
static FEMALE_FIRST_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "sonia",
        "jennifer",
        "valeska",
        "nicole",
        "emily",
        "fernanda",
        "rosa",
        "karen",
        "francisca",
        "millaray",
        "javiera",
        "valeria",
        "stephania",
        "madelaine",
        "paulina",
        "paula",
        "yanara",
        "karla",
        "tania",
        "belen",
        "antonella",
        "daniela",
        "alejandra",
    ])
});

/// Known male first names, accent-folded and lowercased.
static MALE_FIRST_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "osman",
        "mario",
        "juan",
        "eduardo",
        "baldomero",
        "andre",
        "luis",
        "fernando",
        "hans",
        "angelo",
        "matias",
        "samuel",
        "sebastian",
        "javier",
        "victor",
        "cristian",
        "joy",
        "christian",
        "felipe",
        "hernan",
        "jhon",
        "jorge",
        "gonzalo",
        "nicolas",
        "alexander",
        "esteban",
        "brayan",
        "carlos",
        "irian",
        "andres",
        "jordan",
        "jose",
        "miguel",
        "rolando",
        "julio",
        "paulo",
        "jesus",
        "martin",
        "manuel",
        "vicente",
        "gabriel",
        "wladimir",
        "ignacio",
        "joseph",
        "thomas",
    ])
});

/// Folds accented vowels and `ñ` to their plain Latin equivalents.
fn fold_accents(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Extracts the normalized first name from a full name.
///
/// Lowercases, splits on whitespace, drops honorific/initial tokens
/// (falling back to the raw token list when everything was dropped),
/// then accent-folds the first remaining token.
pub fn first_name(full_name: &str) -> String {
    let lowered = full_name.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    let cleaned: Vec<&str> = tokens
        .iter()
        .copied()
        .filter(|t| !DROPPED_TOKENS.contains(t))
        .collect();

    let picked = if cleaned.is_empty() { &tokens } else { &cleaned };
    fold_accents(picked.first().copied().unwrap_or(""))
}

/// Infers a gender from the first name of `full_name`.
///
/// Priority chain: female set, male set, ends-with-`a` (length > 2)
/// heuristic, default [`Gender::Male`].
pub fn infer_gender(full_name: &str) -> Gender {
    let first = first_name(full_name);

    if FEMALE_FIRST_NAMES.contains(first.as_str()) {
        return Gender::Female;
    }
    if MALE_FIRST_NAMES.contains(first.as_str()) {
        return Gender::Male;
    }

    if first.ends_with('a') && first.chars().count() > 2 {
        return Gender::Female;
    }

    Gender::Male
}
