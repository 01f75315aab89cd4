//! Language-aware knowledge lookup
//!
//! One generic resolver serves all four knowledge categories. Each category
//! carries its own alias table, prompt texts, and slice of the knowledge
//! base; the lookup itself is a pure function of (category, slot value,
//! utterance, knowledge base).

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::LazyLock;

use crate::knowledge::{KnowledgeBase, KnowledgeStore, LocalizedText, VaccineEntry};
use crate::language::{self, Language};

/// Knowledge category behind a dialogue action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Disease prevention tips
    PreventiveTips,
    /// Disease symptom descriptions
    Symptoms,
    /// Vaccine schedule and importance
    VaccinationSchedule,
    /// Location-based outbreak alerts
    OutbreakAlert,
}

/// Script and spelling variants of disease names
static DISEASE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("मलेरिया", "malaria"),
        ("malaria", "malaria"),
        ("डेंगू", "dengue"),
        ("dengue", "dengue"),
        ("टीबी", "tuberculosis"),
        ("tb", "tuberculosis"),
        ("tuberculosis", "tuberculosis"),
        ("डायबिटीज", "diabetes"),
        ("diabetes", "diabetes"),
    ])
});

/// Script and spelling variants of vaccine names
static VACCINE_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("पोलियो", "polio"),
        ("polio", "polio"),
        ("खसरा", "measles"),
        ("measles", "measles"),
        ("हेपेटाइटिस", "hepatitis"),
        ("hepatitis", "hepatitis"),
        ("bcg", "bcg"),
    ])
});

/// Script and case variants of location names
static LOCATION_ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("दिल्ली", "Delhi"),
        ("delhi", "Delhi"),
        ("मुंबई", "Mumbai"),
        ("mumbai", "Mumbai"),
        ("लखनऊ", "Lucknow"),
        ("lucknow", "Lucknow"),
    ])
});

impl Category {
    fn aliases(self) -> &'static HashMap<&'static str, &'static str> {
        match self {
            Self::PreventiveTips | Self::Symptoms => &DISEASE_ALIASES,
            Self::VaccinationSchedule => &VACCINE_ALIASES,
            Self::OutbreakAlert => &LOCATION_ALIASES,
        }
    }

    /// Canonical lookup key for a raw slot value
    ///
    /// Lowercases the input and consults the category's alias table. An
    /// unrecognized value is returned lowercased so forward-compatible
    /// knowledge entries still resolve; unmatched locations keep the user's
    /// casing because they are echoed verbatim in the reply.
    #[must_use]
    pub fn normalize(self, raw: &str) -> String {
        let lowered = raw.to_lowercase();
        if let Some(key) = self.aliases().get(lowered.as_str()) {
            return (*key).to_string();
        }
        match self {
            Self::OutbreakAlert => raw.to_string(),
            _ => lowered,
        }
    }

    /// Fixed "please specify" prompt for an absent or unknown slot value
    #[must_use]
    pub fn prompt(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::PreventiveTips | Self::Symptoms, Language::English) => {
                "Please specify a disease name. For example: malaria, dengue, tuberculosis, diabetes"
            }
            (Self::PreventiveTips | Self::Symptoms, Language::Hindi) => {
                "कृपया कोई विशिष्ट बीमारी का नाम बताएं। जैसे: मलेरिया, डेंगू, टीबी, डायबिटीज"
            }
            (Self::VaccinationSchedule, Language::English) => {
                "Please specify a vaccine name. For example: polio, measles, hepatitis, BCG"
            }
            (Self::VaccinationSchedule, Language::Hindi) => {
                "कृपया कोई विशिष्ट टीके का नाम बताएं। जैसे: पोलियो, खसरा, हेपेटाइटिस, BCG"
            }
            // Outbreak lookups never prompt; a missing location gets the digest
            (Self::OutbreakAlert, _) => "",
        }
    }

    /// Fixed apology used when the knowledge base cannot be loaded
    #[must_use]
    pub fn apology(self) -> &'static str {
        match self {
            Self::PreventiveTips | Self::Symptoms => "Sorry, I couldn't access the knowledge base.",
            Self::VaccinationSchedule => "Sorry, I couldn't access vaccination information.",
            Self::OutbreakAlert => "Sorry, I couldn't access outbreak information.",
        }
    }
}

/// Resolve a category lookup into a user-facing reply
///
/// Pure with respect to the loaded knowledge base: the same inputs always
/// produce the same reply. The reply language follows the utterance, with
/// per-entry fallback to the other language when a field is blank.
#[must_use]
pub fn resolve(
    kb: &KnowledgeBase,
    category: Category,
    slot: Option<&str>,
    utterance: &str,
) -> String {
    let lang = language::detect(utterance);

    let Some(raw) = slot.map(str::trim).filter(|s| !s.is_empty()) else {
        return match category {
            Category::OutbreakAlert => outbreak_digest(kb, lang),
            _ => category.prompt(lang).to_string(),
        };
    };

    let key = category.normalize(raw);

    match category {
        Category::PreventiveTips => localized(kb.faq.preventive_tips.get(&key), lang)
            .unwrap_or_else(|| category.prompt(lang).to_string()),
        Category::Symptoms => localized(kb.faq.symptoms.get(&key), lang)
            .unwrap_or_else(|| category.prompt(lang).to_string()),
        Category::VaccinationSchedule => kb
            .vaccination
            .vaccines
            .get(&key)
            .and_then(|entry| vaccine_reply(entry, lang))
            .unwrap_or_else(|| category.prompt(lang).to_string()),
        Category::OutbreakAlert => match kb.outbreaks.current_outbreaks.get(&key) {
            Some(entry) => entry
                .message
                .for_language(lang)
                .unwrap_or_default()
                .to_string(),
            // Unmatched locations are reported back verbatim
            None => outbreak_miss(kb, raw, lang),
        },
    }
}

fn localized(entry: Option<&LocalizedText>, lang: Language) -> Option<String> {
    entry?.for_language(lang).map(String::from)
}

/// Schedule and importance, localized independently and joined with a
/// blank line, schedule first
fn vaccine_reply(entry: &VaccineEntry, lang: Language) -> Option<String> {
    let parts: Vec<&str> = [
        entry.schedule.for_language(lang),
        entry.importance.for_language(lang),
    ]
    .into_iter()
    .flatten()
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n\n"))
    }
}

/// "No outbreak reported" acknowledgement plus the general advisory
fn outbreak_miss(kb: &KnowledgeBase, location: &str, lang: Language) -> String {
    let advisory = kb
        .outbreaks
        .general_advisory
        .for_language(lang)
        .unwrap_or_default();

    match lang {
        Language::Hindi => {
            format!("वर्तमान में {location} में कोई विशिष्ट प्रकोप की रिपोर्ट नहीं है।\n\n{advisory}")
        }
        Language::English => {
            format!("No specific outbreak reported in {location} currently.\n\n{advisory}")
        }
    }
}

/// One line per recorded outbreak, in file order, then the advisory
fn outbreak_digest(kb: &KnowledgeBase, lang: Language) -> String {
    let mut message = match lang {
        Language::Hindi => String::from("वर्तमान प्रकोप की स्थिति:\n\n"),
        Language::English => String::from("Current outbreak status:\n\n"),
    };

    for (location, entry) in &kb.outbreaks.current_outbreaks {
        let _ = writeln!(message, "📍 {location}: {}", entry.disease);
    }

    if let Some(advisory) = kb.outbreaks.general_advisory.for_language(lang) {
        let _ = write!(message, "\n{advisory}");
    }

    message
}

/// Resolver over a load-once knowledge store
///
/// Converts knowledge base load failures into fixed apology replies so the
/// dialogue framework always receives a normal response and the
/// conversation continues on the next turn.
#[derive(Debug)]
pub struct Resolver {
    store: KnowledgeStore,
}

impl Resolver {
    /// Create a resolver backed by the given store
    #[must_use]
    pub fn new(store: KnowledgeStore) -> Self {
        Self { store }
    }

    /// Reply text for one dialogue turn
    #[must_use]
    pub fn reply(&self, category: Category, slot: Option<&str>, utterance: &str) -> String {
        match self.store.get() {
            Ok(kb) => resolve(kb, category, slot, utterance),
            Err(e) => {
                tracing::error!(?category, error = %e, "knowledge base unavailable");
                category.apology().to_string()
            }
        }
    }
}
