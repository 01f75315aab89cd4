//! Dialogue action glue: tracker, dispatcher, events, and the action table
//!
//! The dialogue framework sends a tracker snapshot per invocation and
//! expects events plus bot messages back. Each registered action is pure
//! configuration: a name bound to a knowledge category and the slot it
//! reads. Slot persistence stays with the framework; actions only echo the
//! slot value back unchanged.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolver::{Category, Resolver};

/// Latest user message from the tracker payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: String,
}

/// Conversation state snapshot sent by the dialogue framework
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: String,

    #[serde(default)]
    pub slots: HashMap<String, Value>,

    #[serde(default)]
    pub latest_message: LatestMessage,
}

impl Tracker {
    /// String value of a slot; missing, null, and blank all read as absent
    #[must_use]
    pub fn slot_str(&self, name: &str) -> Option<&str> {
        self.slots
            .get(name)?
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Event returned to the framework for persistence
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// Set (or re-affirm) a slot value
    Slot { name: String, value: Value },
}

/// A single bot response message
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotMessage {
    pub text: String,
}

/// Collects bot messages emitted while an action runs
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a text message for the user
    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage { text: text.into() });
    }

    /// Consume the dispatcher, yielding the collected messages in order
    #[must_use]
    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

/// One registered action: a name bound to a knowledge category and a slot
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeAction {
    pub name: &'static str,
    pub category: Category,
    pub slot: &'static str,
}

/// All registered actions, one per knowledge category
pub const ACTIONS: &[KnowledgeAction] = &[
    KnowledgeAction {
        name: "action_provide_preventive_tips",
        category: Category::PreventiveTips,
        slot: "disease",
    },
    KnowledgeAction {
        name: "action_provide_symptoms_info",
        category: Category::Symptoms,
        slot: "disease",
    },
    KnowledgeAction {
        name: "action_provide_vaccination_schedule",
        category: Category::VaccinationSchedule,
        slot: "vaccine",
    },
    KnowledgeAction {
        name: "action_check_outbreak_alert",
        category: Category::OutbreakAlert,
        slot: "location",
    },
];

/// Look up a registered action by name
#[must_use]
pub fn find_action(name: &str) -> Option<&'static KnowledgeAction> {
    ACTIONS.iter().find(|action| action.name == name)
}

impl KnowledgeAction {
    /// Run the action: resolve a reply and echo the slot back unchanged
    pub fn run(
        &self,
        resolver: &Resolver,
        tracker: &Tracker,
        dispatcher: &mut CollectingDispatcher,
    ) -> Vec<Event> {
        let slot_value = tracker.slot_str(self.slot);
        let reply = resolver.reply(self.category, slot_value, &tracker.latest_message.text);
        dispatcher.utter_message(reply);

        // The framework owns slot state; the value goes back as received
        let value = tracker.slots.get(self.slot).cloned().unwrap_or(Value::Null);
        vec![Event::Slot {
            name: self.slot.to_string(),
            value,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn all_action_names_are_registered() {
        for name in [
            "action_provide_preventive_tips",
            "action_provide_symptoms_info",
            "action_provide_vaccination_schedule",
            "action_check_outbreak_alert",
        ] {
            assert!(find_action(name).is_some(), "missing action {name}");
        }
        assert!(find_action("action_unknown").is_none());
    }

    #[test]
    fn tracker_slot_reads() {
        let tracker: Tracker = serde_json::from_value(json!({
            "sender_id": "user-1",
            "slots": {
                "disease": "dengue",
                "vaccine": null,
                "location": "  "
            },
            "latest_message": { "text": "What about dengue?" }
        }))
        .unwrap();

        assert_eq!(tracker.slot_str("disease"), Some("dengue"));
        assert_eq!(tracker.slot_str("vaccine"), None);
        assert_eq!(tracker.slot_str("location"), None);
        assert_eq!(tracker.slot_str("nonexistent"), None);
    }

    #[test]
    fn slot_event_serializes_in_wire_format() {
        let event = Event::Slot {
            name: "disease".to_string(),
            value: json!("malaria"),
        };
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({ "event": "slot", "name": "disease", "value": "malaria" })
        );
    }

    #[test]
    fn action_echoes_missing_slot_as_null() {
        use crate::knowledge::KnowledgeStore;

        let resolver = Resolver::new(KnowledgeStore::new("/nonexistent/kb"));
        let action = find_action("action_provide_preventive_tips").unwrap();
        let tracker = Tracker::default();
        let mut dispatcher = CollectingDispatcher::new();

        let events = action.run(&resolver, &tracker, &mut dispatcher);

        assert!(matches!(
            events.as_slice(),
            [Event::Slot { name, value }] if name == "disease" && value.is_null()
        ));
        // Even without a knowledge base the user gets a normal reply
        let messages = dispatcher.into_messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].text, "Sorry, I couldn't access the knowledge base.");
    }
}
