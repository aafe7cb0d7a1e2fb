/*!
 * Mock capability implementations for testing.
 *
 * This module provides mocks that simulate different behaviors:
 * - `MockLookup::person()` / `MockLookup::place()` - fixed classification
 * - `MockLookup::no_signal()` - never finds anything
 * - `MockLookup::failing()` - always errors
 * - `ScriptedEntityTagger` - classifies tokens from a fixed person set
 */

use async_trait::async_trait;
use std::collections::HashSet;

use crate::capabilities::{EntityClass, EntityTagger, LexicalClass, LexicalLookup};
use crate::errors::CapabilityError;

/// Behavior mode for the mock lexical lookup
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockLookupBehavior {
    /// Always signals person
    Person,
    /// Always signals place/organization
    Place,
    /// Never finds a usable signal
    NoSignal,
    /// Always fails with an error
    Failing,
}

/// Mock lexical lookup for testing speaker classification
#[derive(Debug, Clone)]
pub struct MockLookup {
    behavior: MockLookupBehavior,
}

impl MockLookup {
    /// Create a mock with the specified behavior
    pub fn new(behavior: MockLookupBehavior) -> Self {
        MockLookup { behavior }
    }

    /// Mock that always classifies terms as a person
    pub fn person() -> Self {
        Self::new(MockLookupBehavior::Person)
    }

    /// Mock that always classifies terms as a place
    pub fn place() -> Self {
        Self::new(MockLookupBehavior::Place)
    }

    /// Mock that never finds a usable signal
    pub fn no_signal() -> Self {
        Self::new(MockLookupBehavior::NoSignal)
    }

    /// Mock that always fails
    pub fn failing() -> Self {
        Self::new(MockLookupBehavior::Failing)
    }
}

#[async_trait]
impl LexicalLookup for MockLookup {
    async fn classify_term(&self, _term: &str) -> Result<Option<LexicalClass>, CapabilityError> {
        match self.behavior {
            MockLookupBehavior::Person => Ok(Some(LexicalClass::Person)),
            MockLookupBehavior::Place => Ok(Some(LexicalClass::Place)),
            MockLookupBehavior::NoSignal => Ok(None),
            MockLookupBehavior::Failing => Err(CapabilityError::RequestFailed(
                "Simulated lookup failure".to_string(),
            )),
        }
    }
}

/// Entity tagger driven by an explicit set of person tokens
#[derive(Debug, Clone, Default)]
pub struct ScriptedEntityTagger {
    persons: HashSet<String>,
}

impl ScriptedEntityTagger {
    /// Create a tagger that classifies the given tokens as PERSON
    pub fn with_persons(persons: impl IntoIterator<Item = impl Into<String>>) -> Self {
        ScriptedEntityTagger {
            persons: persons.into_iter().map(Into::into).collect(),
        }
    }
}

impl EntityTagger for ScriptedEntityTagger {
    fn tag_entities(&self, tokens: &[String]) -> Vec<(String, EntityClass)> {
        tokens
            .iter()
            .map(|token| {
                let class = if self.persons.contains(token) {
                    EntityClass::Person
                } else {
                    EntityClass::Other
                };
                (token.clone(), class)
            })
            .collect()
    }
}
