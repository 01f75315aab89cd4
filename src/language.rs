//! Script-based language detection for bilingual replies
//!
//! Classifies an utterance as English or Hindi by counting Devanagari
//! characters. This is a heuristic over a fixed code point set, not
//! grammatical analysis; it needs no external language-ID crates.

/// Reply language for localized knowledge entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
}

/// Devanagari code points recognized by the detector: letters (including
/// nukta forms), dependent vowel signs, anusvara/visarga/candrabindu,
/// danda punctuation, and digits
const DEVANAGARI_CHARS: &str = "अआइईउऊएऐओऔकखगघङचछजझञटठडढणतथदधनपफबभमयरलवशषसहक़ख़ग़ज़ड़ढ़फ़य़ृॄॅॆेैॉॊोौ्ँंःॐ।॥०१२३४५६७८९";

/// Fraction of recognized characters above which an utterance is Hindi
const HINDI_THRESHOLD: f64 = 0.3;

/// Detect the language of an utterance
///
/// Strictly more than 30% Devanagari characters classifies the text as
/// Hindi; everything else, including empty input, is English.
#[must_use]
pub fn detect(text: &str) -> Language {
    let total = text.chars().count();
    if total == 0 {
        return Language::English;
    }

    let devanagari = text
        .chars()
        .filter(|c| DEVANAGARI_CHARS.contains(*c))
        .count();

    #[allow(clippy::cast_precision_loss)]
    let ratio = devanagari as f64 / total as f64;

    if ratio > HINDI_THRESHOLD {
        Language::Hindi
    } else {
        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_ascii_is_english() {
        assert_eq!(detect("What are the symptoms of malaria?"), Language::English);
    }

    #[test]
    fn pure_devanagari_is_hindi() {
        assert_eq!(detect("मलेरिया"), Language::Hindi);
        assert_eq!(detect("मुझे जानकारी चाहिए"), Language::Hindi);
    }

    #[test]
    fn empty_input_is_english() {
        assert_eq!(detect(""), Language::English);
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        // 100 characters total: 30 Devanagari stays English, 31 flips to Hindi
        let thirty = "क".repeat(30) + &"a".repeat(70);
        assert_eq!(thirty.chars().count(), 100);
        assert_eq!(detect(&thirty), Language::English);

        let thirty_one = "क".repeat(31) + &"a".repeat(69);
        assert_eq!(thirty_one.chars().count(), 100);
        assert_eq!(detect(&thirty_one), Language::Hindi);
    }

    #[test]
    fn ten_char_boundary() {
        assert_eq!(detect("कखग1234567"), Language::English); // 3 of 10
        assert_eq!(detect("कखगघ123456"), Language::Hindi); // 4 of 10
    }

    #[test]
    fn mixed_text_with_mostly_latin_is_english() {
        assert_eq!(detect("tell me about डेंगू please, in detail"), Language::English);
    }

    #[test]
    fn devanagari_digits_and_danda_count_as_hindi() {
        assert_eq!(detect("१२३।"), Language::Hindi);
    }
}
