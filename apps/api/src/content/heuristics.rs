//! Text heuristics: word/sentence splitting, syllable estimation, Flesch readability,
//! keyword and hashtag derivation, and the canned CTA list.
//!
//! Everything here is pure and deterministic. No LLM calls.

use std::collections::HashSet;

/// Appended to each base keyword to widen the SEO keyword list.
const KEYWORD_MODIFIERS: &[&str] = &["guide", "tips", "best", "2025", "how to"];

/// Tokens shorter than this (in characters) are dropped from keyword derivation.
const MIN_KEYWORD_LEN: usize = 3;

pub const DEFAULT_MAX_KEYWORDS: usize = 8;
pub const DEFAULT_MAX_HASHTAGS: usize = 6;

const CTA_PHRASES: &[&str] = &[
    "Learn more",
    "Get started today",
    "Download the guide",
    "Sign up now",
    "Join the community",
    "Contact us for a demo",
];

/// Splits text into words: newlines become spaces, split on spaces, blank tokens dropped.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(['\n', ' '])
        .filter(|w| !w.trim().is_empty())
        .collect()
}

/// Splits text into sentences on `.`, `!` and `?`.
///
/// The terminator stays attached to its sentence. Trailing text without a terminator
/// becomes a final sentence. If nothing is collected, the whole trimmed text is
/// returned as the single sentence.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        current.push(ch);
        if matches!(ch, '.' | '!' | '?') {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    if sentences.is_empty() {
        sentences.push(text.trim().to_string());
    }
    sentences
}

/// Naive syllable estimate: counts vowel groups, drops a silent trailing `e`, floors at 1.
pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    let mut count = 0;
    let mut prev_is_vowel = false;

    for ch in word.chars() {
        let is_vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_is_vowel {
            count += 1;
        }
        prev_is_vowel = is_vowel;
    }

    if word.ends_with('e') && count > 1 {
        count -= 1;
    }
    count.max(1)
}

/// Flesch Reading Ease, clamped to `[0, 100]` and rounded to 2 decimals.
/// Higher is easier to read. Returns 0.0 for text with no words.
pub fn readability_score(text: &str) -> f64 {
    let words = split_words(text);
    let sentences = split_sentences(text);
    if words.is_empty() || sentences.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = sentences.len() as f64;
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let score = 206.835
        - 1.015 * (word_count / sentence_count)
        - 84.6 * (syllables as f64 / word_count);

    (score.clamp(0.0, 100.0) * 100.0).round() / 100.0
}

/// Derives SEO keyword suggestions from a topic string.
///
/// Base keywords come from the topic (split on spaces and commas, lower-cased, short
/// tokens dropped, first-seen order). Each base keyword is then combined with every
/// modifier. The result is deduplicated and capped at `max_keywords`.
pub fn seo_keywords(topic: &str, max_keywords: usize) -> Vec<String> {
    let mut base: Vec<String> = Vec::new();
    for part in topic.split([' ', ',']) {
        let part = part.trim().to_lowercase();
        if part.chars().count() < MIN_KEYWORD_LEN || base.contains(&part) {
            continue;
        }
        base.push(part);
    }

    let augmented = base.iter().cloned().chain(base.iter().flat_map(|kw| {
        KEYWORD_MODIFIERS
            .iter()
            .map(move |modifier| format!("{kw} {modifier}"))
    }));

    let mut seen = HashSet::new();
    augmented
        .filter(|kw| seen.insert(kw.clone()))
        .take(max_keywords)
        .collect()
}

/// Derives `#`-prefixed hashtags from a topic. Tags never contain spaces.
pub fn hashtags(topic: &str, max_tags: usize) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for keyword in seo_keywords(topic, max_tags * 2) {
        let tag = keyword.replace(' ', "");
        if !tag.is_empty() && !tags.contains(&tag) {
            tags.push(tag);
        }
        if tags.len() >= max_tags {
            break;
        }
    }
    tags.into_iter().map(|tag| format!("#{tag}")).collect()
}

/// Fixed set of reusable call-to-action phrases.
pub fn cta_phrases() -> Vec<String> {
    CTA_PHRASES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_normalizes_newlines_and_drops_blanks() {
        let words = split_words("Hello  world\nfrom\n\nRust ");
        assert_eq!(words, vec!["Hello", "world", "from", "Rust"]);
    }

    #[test]
    fn test_split_words_empty() {
        assert!(split_words("").is_empty());
        assert!(split_words("   \n  ").is_empty());
    }

    #[test]
    fn test_split_sentences_three_terminators() {
        let sentences = split_sentences("Hello. World! How are you?");
        assert_eq!(sentences, vec!["Hello.", "World!", "How are you?"]);
    }

    #[test]
    fn test_split_sentences_keeps_trailing_fragment() {
        let sentences = split_sentences("First one. and a tail");
        assert_eq!(sentences, vec!["First one.", "and a tail"]);
    }

    #[test]
    fn test_split_sentences_without_terminator_is_single_sentence() {
        let sentences = split_sentences("  no punctuation here  ");
        assert_eq!(sentences, vec!["no punctuation here"]);
    }

    #[test]
    fn test_split_sentences_each_terminator_closes_a_sentence() {
        let sentences = split_sentences("Wait... what?!");
        assert_eq!(sentences, vec!["Wait.", ".", ".", "what?", "!"]);
    }

    #[test]
    fn test_syllables_basic_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("Readability"), 5);
    }

    #[test]
    fn test_syllables_silent_e() {
        assert_eq!(count_syllables("cake"), 1);
        assert_eq!(count_syllables("table"), 1);
        // single vowel group ending in e stays at 1
        assert_eq!(count_syllables("the"), 1);
    }

    #[test]
    fn test_syllables_floor_at_one() {
        assert_eq!(count_syllables("bcd"), 1);
        assert_eq!(count_syllables(""), 1);
        assert_eq!(count_syllables("123"), 1);
    }

    #[test]
    fn test_readability_zero_for_empty_and_whitespace() {
        assert_eq!(readability_score(""), 0.0);
        assert_eq!(readability_score("   \n\t "), 0.0);
    }

    #[test]
    fn test_readability_simple_text_clamps_to_100() {
        // 6 one-syllable words in one sentence scores above 100 before clamping
        assert_eq!(readability_score("The cat sat on the mat."), 100.0);
    }

    #[test]
    fn test_readability_dense_text_clamps_to_zero() {
        let text = "Institutionalization internationalization characterization \
            electroencephalography immunohistochemistry \
            telecommunications infrastructure";
        assert_eq!(readability_score(text), 0.0);
    }

    #[test]
    fn test_readability_mid_range_value() {
        // 9 words, 1 sentence, 15 syllables:
        // 206.835 - 1.015 * 9 - 84.6 * (15 / 9) = 56.7
        let text = "Writing clear content helps readers understand the main idea.";
        assert_eq!(readability_score(text), 56.7);
    }

    #[test]
    fn test_readability_always_in_range() {
        let samples = [
            "a",
            "Hi!",
            "Supercalifragilisticexpialidocious.",
            "One. Two. Three. Four. Five.",
            "This sentence has quite a few words but no terminator at all so it runs on",
            "?!.",
        ];
        for sample in samples {
            let score = readability_score(sample);
            assert!((0.0..=100.0).contains(&score), "{sample:?} scored {score}");
        }
    }

    #[test]
    fn test_readability_is_deterministic() {
        let text = "Rust gives you control. It also gives you safety!";
        assert_eq!(readability_score(text), readability_score(text));
    }

    #[test]
    fn test_seo_keywords_cats_dogs() {
        let keywords = seo_keywords("cats, dogs", DEFAULT_MAX_KEYWORDS);
        assert!(keywords.contains(&"cats".to_string()));
        assert!(keywords.contains(&"dogs".to_string()));
        assert!(keywords.contains(&"cats guide".to_string()));
        assert_eq!(keywords.len(), DEFAULT_MAX_KEYWORDS);
        assert_eq!(&keywords[..3], &["cats", "dogs", "cats guide"]);
    }

    #[test]
    fn test_seo_keywords_drop_short_tokens_and_dedupe() {
        let keywords = seo_keywords("AI in the Cloud, cloud ops", 20);
        assert!(!keywords.iter().any(|k| k == "ai" || k == "in"));
        assert_eq!(keywords.iter().filter(|k| *k == "cloud").count(), 1);
        assert_eq!(&keywords[..3], &["the", "cloud", "ops"]);
        // 3 base keywords + 5 modifiers each
        assert_eq!(keywords.len(), 18);
    }

    #[test]
    fn test_seo_keywords_respects_max() {
        for max in [0, 1, 3, 8] {
            assert!(seo_keywords("rust async tokio runtime", max).len() <= max);
        }
    }

    #[test]
    fn test_seo_keywords_empty_topic() {
        assert!(seo_keywords("", DEFAULT_MAX_KEYWORDS).is_empty());
        assert!(seo_keywords("a, b, of", DEFAULT_MAX_KEYWORDS).is_empty());
    }

    #[test]
    fn test_seo_keywords_is_deterministic() {
        let topic = "Remote work productivity";
        assert_eq!(seo_keywords(topic, 8), seo_keywords(topic, 8));
    }

    #[test]
    fn test_hashtags_prefixed_and_spaceless() {
        let tags = hashtags("cats, dogs", DEFAULT_MAX_HASHTAGS);
        assert_eq!(tags.len(), DEFAULT_MAX_HASHTAGS);
        for tag in &tags {
            assert!(tag.starts_with('#'), "{tag} missing #");
            assert!(!tag.contains(' '), "{tag} contains a space");
        }
        assert_eq!(
            tags,
            vec!["#cats", "#dogs", "#catsguide", "#catstips", "#catsbest", "#cats2025"]
        );
    }

    #[test]
    fn test_hashtags_strip_modifier_spaces() {
        let tags = hashtags("python", 10);
        assert!(tags.contains(&"#pythonhowto".to_string()));
    }

    #[test]
    fn test_hashtags_empty_topic() {
        assert!(hashtags("", DEFAULT_MAX_HASHTAGS).is_empty());
    }

    #[test]
    fn test_cta_phrases_fixed_list() {
        let ctas = cta_phrases();
        assert_eq!(ctas.len(), 6);
        assert_eq!(ctas[0], "Learn more");
        assert_eq!(ctas[5], "Contact us for a demo");
    }
}
