//! Arogya Actions - bilingual healthcare knowledge actions
//!
//! This library implements the custom actions behind a Hindi/English
//! healthcare assistant: given a slot value (disease, vaccine, or location)
//! and the user's latest message, it looks up a matching entry in a static
//! JSON knowledge base and replies in the language the user wrote in.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              Dialogue framework (NLU,               │
//! │         slot filling, policy, transport)            │
//! └────────────────────┬────────────────────────────────┘
//!                      │ POST /webhook (tracker snapshot)
//! ┌────────────────────▼────────────────────────────────┐
//! │                 Action server                        │
//! │   Action table  │  Dispatcher  │  Slot events       │
//! └────────────────────┬────────────────────────────────┘
//!                      │
//! ┌────────────────────▼────────────────────────────────┐
//! │              Knowledge resolver                      │
//! │   Language detect │ Alias tables │ Localized lookup │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The resolver is a pure function of (category, slot value, utterance,
//! knowledge base); the knowledge base is loaded at most once per process
//! and read-only afterwards.

pub mod action;
pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod language;
pub mod resolver;

pub use action::{ACTIONS, CollectingDispatcher, Event, KnowledgeAction, Tracker};
pub use config::Config;
pub use error::{Error, Result};
pub use knowledge::{KnowledgeBase, KnowledgeStore, LocalizedText};
pub use language::{Language, detect};
pub use resolver::{Category, Resolver, resolve};
