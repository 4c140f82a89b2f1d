//! Keyed pairing of primary records with secondaries sharing a reference.

use crate::model::{PairResult, ProbeRecord};

/// Match each primary record (in input order) to the secondary record
/// sharing its reference.
///
/// Zero candidates leave the secondary empty; exactly one candidate pairs;
/// two or more mark the result ambiguous and pair nothing — ambiguity
/// indicates a data-authoring problem upstream and is never resolved by
/// taking the first candidate. Empty primaries yield an empty result.
pub fn pair(primaries: &[ProbeRecord], secondaries: &[ProbeRecord]) -> Vec<PairResult> {
    primaries
        .iter()
        .map(|primary| {
            let candidates: Vec<&ProbeRecord> = secondaries
                .iter()
                .filter(|s| s.reference == primary.reference)
                .collect();

            match candidates.as_slice() {
                [] => PairResult {
                    primary: primary.clone(),
                    secondary: None,
                    ambiguous: false,
                },
                [only] => PairResult {
                    primary: primary.clone(),
                    secondary: Some((*only).clone()),
                    ambiguous: false,
                },
                many => {
                    log::warn!(
                        "ambiguous pairing for '{}': {} {} records share reference {}",
                        primary.reference_name,
                        many.len(),
                        many[0].kind,
                        primary.reference
                    );
                    PairResult {
                        primary: primary.clone(),
                        secondary: None,
                        ambiguous: true,
                    }
                }
            }
        })
        .collect()
}
