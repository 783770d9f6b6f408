use crate::core::region::MappingRegion;

/// Precision/recall comparison of an automatic path against the
/// human-supplied ground truth.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Total story steps compared.
    pub story_steps: usize,
    /// Story steps whose automatic region overlaps the ground-truth region.
    pub matching_steps: usize,
    /// `found / selected` — overlap length over automatic length.
    pub precision: f64,
    /// `found / relevant` — overlap length over ground-truth length.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f_measure: f64,
}

impl EvaluationReport {
    pub fn precision_pct(&self) -> u32 {
        (self.precision * 100.0).round() as u32
    }

    pub fn recall_pct(&self) -> u32 {
        (self.recall * 100.0).round() as u32
    }

    pub fn f_measure_pct(&self) -> u32 {
        (self.f_measure * 100.0).round() as u32
    }
}

/// Compare the ground-truth path against the automatic path, step by step.
///
/// Only steps whose regions overlap contribute: the overlap length counts as
/// found, the automatic region's length as selected, the ground-truth
/// region's length as relevant. Ratios with a zero denominator are defined
/// as 0 rather than NaN.
pub fn evaluate(original: &[MappingRegion], automatic: &[MappingRegion]) -> EvaluationReport {
    assert_eq!(
        original.len(),
        automatic.len(),
        "path length mismatch between ground truth and automatic regions"
    );

    let mut matching_steps = 0;
    let mut found = 0.0;
    let mut selected = 0.0;
    let mut relevant = 0.0;

    for (orig, auto) in original.iter().zip(automatic) {
        let overlap = auto.intersection(orig).length();
        if overlap > 0 {
            matching_steps += 1;
            found += overlap as f64;
            selected += auto.length() as f64;
            relevant += orig.length() as f64;
        }
    }

    let precision = ratio(found, selected);
    let recall = ratio(found, relevant);
    let f_measure = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    EvaluationReport {
        story_steps: original.len(),
        matching_steps,
        precision,
        recall,
        f_measure,
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}
