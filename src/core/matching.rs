use crate::core::synonyms::are_synonyms;

/// Minimum word length (exclusive) considered by the token-overlap heuristic
const MIN_TOKEN_LEN: usize = 3;

/// How strongly a user skill matches an archetype keyword
///
/// Variants are ordered by strength so the best match is simply the max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    None,
    TokenOverlap,
    Partial,
    Synonym,
    Exact,
}

impl MatchTier {
    #[inline]
    pub fn strength(&self) -> f64 {
        match self {
            MatchTier::Exact => 1.0,
            MatchTier::Synonym => 0.9,
            MatchTier::Partial => 0.8,
            MatchTier::TokenOverlap => 0.7,
            MatchTier::None => 0.0,
        }
    }
}

/// Outcome of matching a whole skill list against one archetype
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SkillMatchSummary {
    /// Normalised skill sub-score in [0, 1]
    pub score: f64,
    pub exact_matches: usize,
    pub synonym_matches: usize,
}

/// Classify a single skill/keyword pair. Both terms must already be lowercase.
///
/// Tiers are tested in order: exact, substring, synonym cluster, token overlap.
pub fn match_terms(skill: &str, keyword: &str) -> MatchTier {
    if skill == keyword {
        return MatchTier::Exact;
    }
    if keyword.contains(skill) || skill.contains(keyword) {
        return MatchTier::Partial;
    }
    if are_synonyms(skill, keyword) {
        return MatchTier::Synonym;
    }
    if tokens_overlap(skill, keyword) {
        return MatchTier::TokenOverlap;
    }
    MatchTier::None
}

/// Best tier of a skill across all keywords of an archetype
pub fn best_match(skill: &str, keywords: &[String]) -> MatchTier {
    keywords
        .iter()
        .map(|keyword| match_terms(skill, keyword))
        .max()
        .unwrap_or(MatchTier::None)
}

/// Score a skill list against archetype keywords
///
/// Each skill contributes only its best strength. The sum is divided by the
/// skill count (floored at 1) and capped at 1.0.
pub fn summarize_skills(skills: &[String], keywords: &[String]) -> SkillMatchSummary {
    let mut total = 0.0;
    let mut exact_matches = 0;
    let mut synonym_matches = 0;

    for skill in skills {
        let tier = best_match(skill, keywords);
        match tier {
            MatchTier::Exact => exact_matches += 1,
            MatchTier::Synonym => synonym_matches += 1,
            _ => {}
        }
        total += tier.strength();
    }

    let divisor = skills.len().max(1) as f64;

    SkillMatchSummary {
        score: (total / divisor).min(1.0),
        exact_matches,
        synonym_matches,
    }
}

fn split_words(term: &str) -> impl Iterator<Item = &str> {
    term.split(|c: char| c.is_whitespace() || c == '-' || c == '&')
        .filter(|w| !w.is_empty())
}

/// True if a word longer than three characters in either term is contained
/// in some word of the other term
fn tokens_overlap(a: &str, b: &str) -> bool {
    let a_words: Vec<&str> = split_words(a).collect();
    let b_words: Vec<&str> = split_words(b).collect();

    let contained_in = |words: &[&str], others: &[&str]| {
        words
            .iter()
            .filter(|w| w.chars().count() > MIN_TOKEN_LEN)
            .any(|w| others.iter().any(|o| o.contains(*w)))
    };

    contained_in(&a_words, &b_words) || contained_in(&b_words, &a_words)
}
