use crate::core::{Payload, Section, Semester};

/// Pure assembly of the per-semester webhook payload. Field values are taken
/// verbatim from what the cache reader parsed; nothing is re-derived here.
pub fn build(semester: Semester, sections: Vec<Section>) -> Payload {
    Payload { semester, sections }
}
