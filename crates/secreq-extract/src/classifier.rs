//! # Axis Classifier
//!
//! Assigns the two secondary axes to a requirement text. Each axis is
//! resolved independently by the taxonomy's priority-ordered keyword
//! lookup, falling back to the axis default, so classification is total.

use secreq_core::{InformationState, MeasureType, Taxonomy};

/// Information state and measure type for one requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisAssignment {
    /// Resolved information state.
    pub info_state: InformationState,
    /// Resolved measure type.
    pub measure_type: MeasureType,
}

/// Classifies requirement text on the secondary axes.
#[derive(Debug, Clone, Copy)]
pub struct AxisClassifier<'t> {
    taxonomy: &'t Taxonomy,
}

impl<'t> AxisClassifier<'t> {
    /// A classifier over `taxonomy`.
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self { taxonomy }
    }

    /// Classify `text`. Never fails: unmatched axes take
    /// [`InformationState::DEFAULT`] and [`MeasureType::DEFAULT`].
    pub fn classify(&self, text: &str) -> AxisAssignment {
        AxisAssignment {
            info_state: self
                .taxonomy
                .lookup_info_state(text)
                .unwrap_or(InformationState::DEFAULT),
            measure_type: self
                .taxonomy
                .lookup_measure_type(text)
                .unwrap_or(MeasureType::DEFAULT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn scenario_a_defaults_to_processing_technology() {
        let taxonomy = Taxonomy::builtin();
        let classifier = AxisClassifier::new(&taxonomy);
        let got = classifier.classify("Implement AES-256 encryption for all patient data");
        assert_eq!(got.info_state, InformationState::Processing);
        assert_eq!(got.measure_type, MeasureType::Technology);
    }

    #[test]
    fn storage_and_policy_keywords() {
        let taxonomy = Taxonomy::builtin();
        let classifier = AxisClassifier::new(&taxonomy);
        let got = classifier.classify("Store credentials according to the password policy");
        assert_eq!(got.info_state, InformationState::Storage);
        assert_eq!(got.measure_type, MeasureType::Policy);
    }

    #[test]
    fn priority_order_wins_over_text_order() {
        let taxonomy = Taxonomy::builtin();
        let classifier = AxisClassifier::new(&taxonomy);
        // "transmit" appears first in the text but processing has priority.
        let got = classifier.classify("Transmit results after you analyze them");
        assert_eq!(got.info_state, InformationState::Processing);
    }

    #[test]
    fn training_measure() {
        let taxonomy = Taxonomy::builtin();
        let classifier = AxisClassifier::new(&taxonomy);
        let got = classifier.classify("Clinicians complete annual certification");
        assert_eq!(got.measure_type, MeasureType::Training);
    }

    #[test]
    fn empty_taxonomy_always_defaults() {
        let taxonomy = Taxonomy::from_def(&Default::default()).unwrap();
        let classifier = AxisClassifier::new(&taxonomy);
        let got = classifier.classify("transmit data over the network per policy");
        assert_eq!(got.info_state, InformationState::DEFAULT);
        assert_eq!(got.measure_type, MeasureType::DEFAULT);
    }

    proptest! {
        #[test]
        fn classification_is_total(text in "\\PC{0,80}") {
            let taxonomy = Taxonomy::builtin();
            let got = AxisClassifier::new(&taxonomy).classify(&text);
            prop_assert_ne!(got.info_state, InformationState::All);
        }
    }
}
