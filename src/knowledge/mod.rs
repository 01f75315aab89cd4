//! Knowledge base data model and loading
//!
//! Three JSON documents make up the knowledge base:
//! - `healthcare_faq.json`: preventive tips and symptoms per disease
//! - `vaccination_schedule.json`: schedule and importance per vaccine
//! - `outbreak_alerts.json`: active outbreaks per location plus a general
//!   advisory
//!
//! Every entry carries independently localized English/Hindi text. The
//! whole structure is immutable once loaded.

mod store;

pub use store::KnowledgeStore;

use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::{Error, Result};

/// FAQ document file name (preventive tips + symptoms)
pub const FAQ_FILE: &str = "healthcare_faq.json";

/// Vaccination schedule document file name
pub const VACCINATION_FILE: &str = "vaccination_schedule.json";

/// Outbreak alerts document file name
pub const OUTBREAK_FILE: &str = "outbreak_alerts.json";

/// A text entry localized in English and Hindi
///
/// At least one field is expected to be populated; consumers fall back to
/// the other language when the preferred one is missing or blank.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LocalizedText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hindi: Option<String>,
}

impl LocalizedText {
    /// Text in the preferred language, falling back to the other language
    /// when the preferred field is absent or blank
    #[must_use]
    pub fn for_language(&self, language: Language) -> Option<&str> {
        let (preferred, fallback) = match language {
            Language::Hindi => (&self.hindi, &self.english),
            Language::English => (&self.english, &self.hindi),
        };
        non_blank(preferred).or_else(|| non_blank(fallback))
    }
}

fn non_blank(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}

/// Healthcare FAQ document: disease key to localized text, per category
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthcareFaq {
    #[serde(default)]
    pub preventive_tips: IndexMap<String, LocalizedText>,

    #[serde(default)]
    pub symptoms: IndexMap<String, LocalizedText>,
}

/// Vaccination schedule document
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VaccinationSchedule {
    #[serde(default)]
    pub vaccines: IndexMap<String, VaccineEntry>,
}

/// Schedule and importance for one vaccine, each localized independently
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VaccineEntry {
    #[serde(default)]
    pub schedule: LocalizedText,

    #[serde(default)]
    pub importance: LocalizedText,
}

/// Outbreak alerts document
///
/// `current_outbreaks` preserves file order; the no-location digest lists
/// outbreaks in exactly this order.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutbreakAlerts {
    #[serde(default)]
    pub current_outbreaks: IndexMap<String, OutbreakEntry>,

    #[serde(default)]
    pub general_advisory: LocalizedText,
}

/// One recorded outbreak: the disease and a localized alert message
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OutbreakEntry {
    pub disease: String,

    #[serde(default)]
    pub message: LocalizedText,
}

/// The full in-memory knowledge base, read-only after load
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub faq: HealthcareFaq,
    pub vaccination: VaccinationSchedule,
    pub outbreaks: OutbreakAlerts,
}

impl KnowledgeBase {
    /// Load all three knowledge documents from a directory
    ///
    /// # Errors
    ///
    /// Returns [`Error::KnowledgeUnavailable`] if any file is missing,
    /// unreadable, or malformed
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            faq: load_document(dir, FAQ_FILE)?,
            vaccination: load_document(dir, VACCINATION_FILE)?,
            outbreaks: load_document(dir, OUTBREAK_FILE)?,
        })
    }
}

/// Read and parse a single knowledge document
fn load_document<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
    let path = dir.join(name);

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| Error::KnowledgeUnavailable(format!("{}: {e}", path.display())))?;

    serde_json::from_str(&contents)
        .map_err(|e| Error::KnowledgeUnavailable(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn text(english: Option<&str>, hindi: Option<&str>) -> LocalizedText {
        LocalizedText {
            english: english.map(String::from),
            hindi: hindi.map(String::from),
        }
    }

    #[test]
    fn preferred_language_wins() {
        let entry = text(Some("Drink water"), Some("पानी पिएं"));
        assert_eq!(entry.for_language(Language::English), Some("Drink water"));
        assert_eq!(entry.for_language(Language::Hindi), Some("पानी पिएं"));
    }

    #[test]
    fn falls_back_when_preferred_is_missing() {
        let entry = text(Some("Drink water"), None);
        assert_eq!(entry.for_language(Language::Hindi), Some("Drink water"));

        let entry = text(None, Some("पानी पिएं"));
        assert_eq!(entry.for_language(Language::English), Some("पानी पिएं"));
    }

    #[test]
    fn falls_back_when_preferred_is_blank() {
        let entry = text(Some("  "), Some("पानी पिएं"));
        assert_eq!(entry.for_language(Language::English), Some("पानी पिएं"));
    }

    #[test]
    fn both_missing_yields_none() {
        let entry = LocalizedText::default();
        assert_eq!(entry.for_language(Language::English), None);
    }

    #[test]
    fn outbreaks_preserve_file_order() {
        let json = r#"{
            "current_outbreaks": {
                "Delhi": {"disease": "dengue"},
                "Mumbai": {"disease": "malaria"},
                "Lucknow": {"disease": "chikungunya"}
            },
            "general_advisory": {"english": "Stay safe"}
        }"#;

        let alerts: OutbreakAlerts = serde_json::from_str(json).unwrap();
        let order: Vec<&str> = alerts.current_outbreaks.keys().map(String::as_str).collect();
        assert_eq!(order, ["Delhi", "Mumbai", "Lucknow"]);
    }

    #[test]
    fn load_reports_missing_directory() {
        let err = KnowledgeBase::load(Path::new("/nonexistent/kb")).unwrap_err();
        assert!(matches!(err, Error::KnowledgeUnavailable(_)));
    }

    #[test]
    fn load_reports_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let mut file = std::fs::File::create(dir.path().join(FAQ_FILE)).unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = KnowledgeBase::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::KnowledgeUnavailable(_)));
    }
}
