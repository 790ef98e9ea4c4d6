//! Binary classification metrics
//!
//! Computes the figures reported after a batch classification run: confusion
//! matrix (raw and normalized per actual class), precision, recall, F1,
//! accuracy, the ROC curve with its area and the precision-recall curve with
//! its average precision. Undefined ratios (for example
//! precision without any positive prediction) are reported as `0.0`.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

/// Errors raised by metric computations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("no samples to evaluate")]
    Empty,

    #[error("length mismatch: {labels} labels for {predictions} predictions")]
    LengthMismatch { labels: usize, predictions: usize },

    #[error("ROC curve needs both positive and negative samples")]
    SingleClass,

    #[error("precision-recall curve needs at least one positive sample")]
    NoPositiveSamples,

    #[error("score at index {0} is not a finite number")]
    InvalidScore(usize),
}

pub type Result<T> = std::result::Result<T, MetricsError>;

/// One ground-truth label with the score the classifier gave the positive class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredLabel {
    pub label: bool,
    pub score: f64,
}

/// 2x2 confusion matrix of a binary classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    pub true_negative: u64,
    pub false_positive: u64,
    pub false_negative: u64,
    pub true_positive: u64,
}

impl ConfusionMatrix {
    /// Counts outcomes of paired actual / predicted labels
    pub fn from_labels(actual: &[bool], predicted: &[bool]) -> Result<Self> {
        if actual.len() != predicted.len() {
            return Err(MetricsError::LengthMismatch {
                labels: actual.len(),
                predictions: predicted.len(),
            });
        }
        if actual.is_empty() {
            return Err(MetricsError::Empty);
        }

        let mut matrix = Self::default();
        for (&truth, &guess) in actual.iter().zip(predicted) {
            match (truth, guess) {
                (false, false) => matrix.true_negative += 1,
                (false, true) => matrix.false_positive += 1,
                (true, false) => matrix.false_negative += 1,
                (true, true) => matrix.true_positive += 1,
            }
        }
        Ok(matrix)
    }

    pub fn total(&self) -> u64 {
        self.true_negative + self.false_positive + self.false_negative + self.true_positive
    }

    /// Rows normalized by actual class: `[[tn, fp], [fn, tp]]`
    ///
    /// A row without samples stays at zero.
    pub fn normalized(&self) -> [[f64; 2]; 2] {
        let negatives = self.true_negative + self.false_positive;
        let positives = self.false_negative + self.true_positive;
        [
            [
                ratio(self.true_negative, negatives),
                ratio(self.false_positive, negatives),
            ],
            [
                ratio(self.false_negative, positives),
                ratio(self.true_positive, positives),
            ],
        ]
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_positive)
    }

    pub fn recall(&self) -> f64 {
        ratio(self.true_positive, self.true_positive + self.false_negative)
    }

    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positive + self.true_negative, self.total())
    }
}

fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// One point of a ROC curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// Scores greater than or equal to this value are predicted positive
    pub threshold: f64,
    pub false_positive_rate: f64,
    pub true_positive_rate: f64,
}

/// Cumulative counts at one distinct score, walking from the highest score down
#[derive(Debug, Clone, Copy)]
struct RankStep {
    threshold: f64,
    true_positive: u64,
    false_positive: u64,
}

/// Samples ranked by decreasing score, with the number of positives and negatives
struct Ranking {
    steps: Vec<RankStep>,
    positives: u64,
    negatives: u64,
}

fn rank(samples: &[ScoredLabel]) -> Result<Ranking> {
    if samples.is_empty() {
        return Err(MetricsError::Empty);
    }
    if let Some(index) = samples.iter().position(|s| !s.score.is_finite()) {
        return Err(MetricsError::InvalidScore(index));
    }

    let positives = samples.iter().filter(|s| s.label).count() as u64;
    let negatives = samples.len() as u64 - positives;

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let mut steps = Vec::new();
    let (mut tp, mut fp) = (0u64, 0u64);

    for (i, sample) in sorted.iter().enumerate() {
        if sample.label {
            tp += 1;
        } else {
            fp += 1;
        }

        // Tied scores collapse into one step
        let last_of_score = sorted
            .get(i + 1)
            .is_none_or(|next| next.score != sample.score);
        if last_of_score {
            steps.push(RankStep {
                threshold: sample.score,
                true_positive: tp,
                false_positive: fp,
            });
        }
    }

    Ok(Ranking {
        steps,
        positives,
        negatives,
    })
}

/// Computes the ROC curve, one point per distinct score
///
/// The curve starts at `(0, 0)` with an infinite threshold and ends at `(1, 1)`.
pub fn roc_curve(samples: &[ScoredLabel]) -> Result<Vec<RocPoint>> {
    let ranking = rank(samples)?;
    if ranking.positives == 0 || ranking.negatives == 0 {
        return Err(MetricsError::SingleClass);
    }

    let start = RocPoint {
        threshold: f64::INFINITY,
        false_positive_rate: 0.0,
        true_positive_rate: 0.0,
    };
    let points = std::iter::once(start)
        .chain(ranking.steps.iter().map(|step| RocPoint {
            threshold: step.threshold,
            false_positive_rate: ratio(step.false_positive, ranking.negatives),
            true_positive_rate: ratio(step.true_positive, ranking.positives),
        }))
        .collect();

    Ok(points)
}

/// One point of a precision-recall curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrPoint {
    /// Scores greater than or equal to this value are predicted positive
    pub threshold: f64,
    pub precision: f64,
    pub recall: f64,
}

/// Computes the precision-recall curve, one point per distinct score
///
/// Points go from the highest threshold to the lowest, so recall never
/// decreases. The curve starts at recall `0`, precision `1` with an infinite
/// threshold. Negatives are optional, positives are not.
pub fn pr_curve(samples: &[ScoredLabel]) -> Result<Vec<PrPoint>> {
    let ranking = rank(samples)?;
    if ranking.positives == 0 {
        return Err(MetricsError::NoPositiveSamples);
    }

    let start = PrPoint {
        threshold: f64::INFINITY,
        precision: 1.0,
        recall: 0.0,
    };
    let points = std::iter::once(start)
        .chain(ranking.steps.iter().map(|step| PrPoint {
            threshold: step.threshold,
            precision: ratio(
                step.true_positive,
                step.true_positive + step.false_positive,
            ),
            recall: ratio(step.true_positive, ranking.positives),
        }))
        .collect();

    Ok(points)
}

/// Average precision: precision at each point weighted by the recall gained there
///
/// Step-wise sum without interpolation, `sum((R[n] - R[n-1]) * P[n])`.
pub fn average_precision(points: &[PrPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| (pair[1].recall - pair[0].recall) * pair[1].precision)
        .sum()
}

/// Area under a curve by the trapezoidal rule over the false positive rate
pub fn auc(points: &[RocPoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            (b.false_positive_rate - a.false_positive_rate)
                * (a.true_positive_rate + b.true_positive_rate)
                / 2.0
        })
        .sum()
}

/// Summary printed after a batch classification run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub threshold: f64,
    pub confusion: ConfusionMatrix,
    pub normalized: [[f64; 2]; 2],
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub accuracy: f64,
    /// `None` when the samples hold a single class
    pub roc_auc: Option<f64>,
    /// `None` when the samples hold no positive
    pub average_precision: Option<f64>,
    /// Empty when the samples hold no positive
    pub pr_curve: Vec<PrPoint>,
}

/// Evaluates scored samples, predicting positive when `score >= threshold`
pub fn evaluate(samples: &[ScoredLabel], threshold: f64) -> Result<EvaluationReport> {
    let actual: Vec<bool> = samples.iter().map(|s| s.label).collect();
    let predicted: Vec<bool> = samples.iter().map(|s| s.score >= threshold).collect();
    let confusion = ConfusionMatrix::from_labels(&actual, &predicted)?;

    let roc_auc = match roc_curve(samples) {
        Ok(points) => Some(auc(&points)),
        Err(MetricsError::SingleClass) => None,
        Err(e) => return Err(e),
    };

    let pr_points = match pr_curve(samples) {
        Ok(points) => points,
        Err(MetricsError::NoPositiveSamples) => Vec::new(),
        Err(e) => return Err(e),
    };
    let ap = (!pr_points.is_empty()).then(|| average_precision(&pr_points));

    Ok(EvaluationReport {
        threshold,
        confusion,
        normalized: confusion.normalized(),
        precision: confusion.precision(),
        recall: confusion.recall(),
        f1: confusion.f1(),
        accuracy: confusion.accuracy(),
        roc_auc,
        average_precision: ap,
        pr_curve: pr_points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: bool, score: f64) -> ScoredLabel {
        ScoredLabel { label, score }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_confusion_matrix_counts() {
        let actual = [true, true, false, false, true];
        let predicted = [true, false, false, true, true];
        let matrix = ConfusionMatrix::from_labels(&actual, &predicted).unwrap();
        assert_eq!(matrix.true_positive, 2);
        assert_eq!(matrix.false_negative, 1);
        assert_eq!(matrix.true_negative, 1);
        assert_eq!(matrix.false_positive, 1);
        assert_eq!(matrix.total(), 5);
    }

    #[test]
    fn test_confusion_matrix_rejects_bad_input() {
        assert_eq!(
            ConfusionMatrix::from_labels(&[true], &[true, false]),
            Err(MetricsError::LengthMismatch {
                labels: 1,
                predictions: 2
            })
        );
        assert_eq!(ConfusionMatrix::from_labels(&[], &[]), Err(MetricsError::Empty));
    }

    #[test]
    fn test_ratios() {
        let matrix = ConfusionMatrix {
            true_negative: 50,
            false_positive: 10,
            false_negative: 5,
            true_positive: 35,
        };
        assert!(approx(matrix.precision(), 35.0 / 45.0));
        assert!(approx(matrix.recall(), 35.0 / 40.0));
        assert!(approx(matrix.accuracy(), 0.85));
        let expected_f1 = 2.0 * (35.0 / 45.0) * (35.0 / 40.0) / (35.0 / 45.0 + 35.0 / 40.0);
        assert!(approx(matrix.f1(), expected_f1));

        let normalized = matrix.normalized();
        assert!(approx(normalized[0][0], 50.0 / 60.0));
        assert!(approx(normalized[0][1], 10.0 / 60.0));
        assert!(approx(normalized[1][0], 5.0 / 40.0));
        assert!(approx(normalized[1][1], 35.0 / 40.0));
    }

    #[test]
    fn test_undefined_ratios_are_zero() {
        let matrix = ConfusionMatrix {
            true_negative: 4,
            ..Default::default()
        };
        assert_eq!(matrix.precision(), 0.0);
        assert_eq!(matrix.recall(), 0.0);
        assert_eq!(matrix.f1(), 0.0);
        assert_eq!(matrix.normalized()[1], [0.0, 0.0]);
    }

    #[test]
    fn test_roc_perfect_ranking() {
        let samples = [
            sample(true, 0.9),
            sample(true, 0.8),
            sample(false, 0.3),
            sample(false, 0.1),
        ];
        let points = roc_curve(&samples).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].threshold, f64::INFINITY);
        assert!(approx(points[2].true_positive_rate, 1.0));
        assert!(approx(points[2].false_positive_rate, 0.0));
        assert!(approx(auc(&points), 1.0));
    }

    #[test]
    fn test_roc_tied_scores_give_diagonal() {
        let samples = [
            sample(true, 0.5),
            sample(false, 0.5),
            sample(true, 0.5),
            sample(false, 0.5),
        ];
        let points = roc_curve(&samples).unwrap();
        assert_eq!(points.len(), 2);
        assert!(approx(auc(&points), 0.5));
    }

    #[test]
    fn test_roc_partial_ranking() {
        // one negative outranks one of two positives
        let samples = [
            sample(true, 0.9),
            sample(false, 0.7),
            sample(true, 0.6),
            sample(false, 0.2),
        ];
        let points = roc_curve(&samples).unwrap();
        assert!(approx(auc(&points), 0.75));
    }

    #[test]
    fn test_roc_errors() {
        assert_eq!(roc_curve(&[]), Err(MetricsError::Empty));
        assert_eq!(
            roc_curve(&[sample(true, 0.4), sample(true, 0.2)]),
            Err(MetricsError::SingleClass)
        );
        assert_eq!(
            roc_curve(&[sample(true, 0.4), sample(false, f64::NAN)]),
            Err(MetricsError::InvalidScore(1))
        );
    }

    #[test]
    fn test_pr_perfect_ranking() {
        let samples = [
            sample(true, 0.9),
            sample(true, 0.8),
            sample(false, 0.3),
            sample(false, 0.1),
        ];
        let points = pr_curve(&samples).unwrap();
        assert_eq!(points.len(), 5);
        assert_eq!(points[0].threshold, f64::INFINITY);
        assert!(approx(points[2].recall, 1.0));
        assert!(approx(points[2].precision, 1.0));
        assert!(approx(points[4].precision, 0.5));
        assert!(approx(average_precision(&points), 1.0));
    }

    #[test]
    fn test_pr_mixed_ranking() {
        let samples = [
            sample(true, 0.9),
            sample(false, 0.7),
            sample(true, 0.6),
            sample(false, 0.2),
        ];
        let points = pr_curve(&samples).unwrap();
        let recalls: Vec<f64> = points.iter().map(|p| p.recall).collect();
        assert_eq!(recalls, vec![0.0, 0.5, 0.5, 1.0, 1.0]);
        assert!(approx(points[2].precision, 0.5));
        assert!(approx(points[3].precision, 2.0 / 3.0));
        assert!(approx(average_precision(&points), 0.5 + 0.5 * 2.0 / 3.0));
    }

    #[test]
    fn test_pr_tied_scores_collapse() {
        let samples = [
            sample(true, 0.5),
            sample(false, 0.5),
            sample(true, 0.5),
            sample(false, 0.5),
        ];
        let points = pr_curve(&samples).unwrap();
        assert_eq!(points.len(), 2);
        assert!(approx(points[1].precision, 0.5));
        assert!(approx(average_precision(&points), 0.5));
    }

    #[test]
    fn test_pr_errors() {
        assert_eq!(pr_curve(&[]), Err(MetricsError::Empty));
        assert_eq!(
            pr_curve(&[sample(false, 0.4), sample(false, 0.2)]),
            Err(MetricsError::NoPositiveSamples)
        );
        // positives only is fine
        let points = pr_curve(&[sample(true, 0.4), sample(true, 0.2)]).unwrap();
        assert!(approx(average_precision(&points), 1.0));
    }

    #[test]
    fn test_evaluate_report() {
        let samples = [
            sample(true, 0.9),
            sample(false, 0.7),
            sample(true, 0.6),
            sample(false, 0.2),
        ];
        let report = evaluate(&samples, 0.5).unwrap();
        assert_eq!(report.confusion.true_positive, 2);
        assert_eq!(report.confusion.false_positive, 1);
        assert_eq!(report.confusion.true_negative, 1);
        assert!(approx(report.recall, 1.0));
        assert!(approx(report.roc_auc.unwrap(), 0.75));
        assert!(approx(report.average_precision.unwrap(), 0.5 + 0.5 * 2.0 / 3.0));
        assert_eq!(report.pr_curve.len(), 5);
    }

    #[test]
    fn test_evaluate_single_class_has_no_auc() {
        let report = evaluate(&[sample(false, 0.1), sample(false, 0.8)], 0.5).unwrap();
        assert_eq!(report.roc_auc, None);
        assert_eq!(report.average_precision, None);
        assert!(report.pr_curve.is_empty());
        assert_eq!(report.confusion.false_positive, 1);
    }
}
