//! Evaluation of predicted tag sequences against gold annotations: accuracy,
//! confusion matrix and a per-class precision/recall/F1 report.
//!
//! All functions work on flattened tag sequences (sentence boundaries
//! dropped) and fail with [`Error::ShapeMismatch`] when gold and predicted
//! token counts differ, rather than silently truncating.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;

fn check_shape(expected: usize, actual: usize) -> Result<(), Error> {
    if expected != actual {
        return Err(Error::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Fraction of positions where the predicted tag equals the gold tag.
/// Empty sequences evaluate to 1.0: no token is mistagged.
pub fn accuracy<G: AsRef<str>, P: AsRef<str>>(gold: &[G], pred: &[P]) -> Result<f64, Error> {
    check_shape(gold.len(), pred.len())?;

    if gold.is_empty() {
        return Ok(1.0);
    }

    let correct = gold
        .iter()
        .zip(pred)
        .filter(|(g, p)| g.as_ref() == p.as_ref())
        .count();
    Ok(correct as f64 / gold.len() as f64)
}

/// A square label-by-label count matrix of gold vs. predicted tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    labels: Vec<String>,
    counts: Vec<Vec<usize>>,
}

impl ConfusionMatrix {
    /// Counts `counts[i][j]` = tokens with gold label `labels[i]` predicted
    /// as `labels[j]`. Tokens whose gold or predicted label is outside
    /// `labels` are ignored.
    pub fn from_pairs<G, P, L>(gold: &[G], pred: &[P], labels: &[L]) -> Result<Self, Error>
    where
        G: AsRef<str>,
        P: AsRef<str>,
        L: AsRef<str>,
    {
        check_shape(gold.len(), pred.len())?;

        let index: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_ref(), i))
            .collect();
        let mut counts = vec![vec![0usize; labels.len()]; labels.len()];

        for (g, p) in gold.iter().zip(pred) {
            if let (Some(&row), Some(&col)) = (index.get(g.as_ref()), index.get(p.as_ref())) {
                counts[row][col] += 1;
            }
        }

        Ok(ConfusionMatrix {
            labels: labels.iter().map(|label| label.as_ref().to_string()).collect(),
            counts,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn counts(&self) -> &[Vec<usize>] {
        &self.counts
    }

    /// Gold occurrence count of `labels[row]`.
    pub fn support(&self, row: usize) -> usize {
        self.counts[row].iter().sum()
    }

    /// Each row divided by its sum. Rows with zero gold occurrences are left
    /// all-zero, not divided.
    pub fn row_normalized(&self) -> Vec<Vec<f64>> {
        self.counts
            .iter()
            .map(|row| {
                let total: usize = row.iter().sum();
                if total == 0 {
                    vec![0.0; row.len()]
                } else {
                    row.iter().map(|&count| count as f64 / total as f64).collect()
                }
            })
            .collect()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .labels
            .iter()
            .map(|label| label.len())
            .max()
            .unwrap_or(0)
            .max(6)
            + 1;

        write!(f, "{:>width$}", "", width = width)?;
        for label in &self.labels {
            write!(f, "{:>width$}", label, width = width)?;
        }
        writeln!(f)?;

        for (label, row) in self.labels.iter().zip(&self.counts) {
            write!(f, "{:>width$}", label, width = width)?;
            for count in row {
                write!(f, "{:>width$}", count, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Precision, recall, F1 and gold support for one label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub label: String,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl ClassMetrics {
    fn from_counts(label: String, tp: usize, fp: usize, r#fn: usize) -> Self {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + r#fn);
        let f1 = if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        };

        ClassMetrics {
            label,
            precision,
            recall,
            f1,
            support: tp + r#fn,
        }
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// The full evaluation result: accuracy, confusion matrix and per-class
/// metrics with macro and weighted aggregates. Computed fresh on every call,
/// never persisted with a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub accuracy: f64,
    pub confusion: ConfusionMatrix,
    pub classes: Vec<ClassMetrics>,
    /// Unweighted mean of the per-class metrics.
    pub macro_avg: ClassMetrics,
    /// Support-weighted mean of the per-class metrics.
    pub weighted_avg: ClassMetrics,
}

/// Computes the evaluation report for flattened gold/predicted sequences over
/// the given label inventory.
pub fn classification_report<G, P, L>(
    gold: &[G],
    pred: &[P],
    labels: &[L],
) -> Result<EvaluationReport, Error>
where
    G: AsRef<str>,
    P: AsRef<str>,
    L: AsRef<str>,
{
    let confusion = ConfusionMatrix::from_pairs(gold, pred, labels)?;
    let accuracy = accuracy(gold, pred)?;

    let size = confusion.labels().len();
    let classes: Vec<ClassMetrics> = (0..size)
        .map(|i| {
            let tp = confusion.counts()[i][i];
            let fp = (0..size).map(|row| confusion.counts()[row][i]).sum::<usize>() - tp;
            let r#fn = confusion.support(i) - tp;
            ClassMetrics::from_counts(confusion.labels()[i].clone(), tp, fp, r#fn)
        })
        .collect();

    let total_support: usize = classes.iter().map(|class| class.support).sum();
    let macro_avg = ClassMetrics {
        label: "macro avg".to_string(),
        precision: mean(classes.iter().map(|class| class.precision)),
        recall: mean(classes.iter().map(|class| class.recall)),
        f1: mean(classes.iter().map(|class| class.f1)),
        support: total_support,
    };
    let weighted_avg = ClassMetrics {
        label: "weighted avg".to_string(),
        precision: weighted_mean(&classes, |class| class.precision, total_support),
        recall: weighted_mean(&classes, |class| class.recall, total_support),
        f1: weighted_mean(&classes, |class| class.f1, total_support),
        support: total_support,
    };

    Ok(EvaluationReport {
        accuracy,
        confusion,
        classes,
        macro_avg,
        weighted_avg,
    })
}

fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        0.0
    } else {
        values.sum::<f64>() / len as f64
    }
}

fn weighted_mean(classes: &[ClassMetrics], metric: impl Fn(&ClassMetrics) -> f64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    classes
        .iter()
        .map(|class| metric(class) * class.support as f64)
        .sum::<f64>()
        / total as f64
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .classes
            .iter()
            .map(|class| class.label.len())
            .max()
            .unwrap_or(0)
            .max("weighted avg".len());

        writeln!(
            f,
            "{:>width$}  {:>9}  {:>9}  {:>9}  {:>9}",
            "", "precision", "recall", "f1-score", "support",
            width = width
        )?;
        writeln!(f)?;

        for class in &self.classes {
            writeln!(
                f,
                "{:>width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
                class.label, class.precision, class.recall, class.f1, class.support,
                width = width
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{:>width$}  {:>9}  {:>9}  {:>9.2}  {:>9}",
            "accuracy", "", "", self.accuracy,
            self.classes.iter().map(|class| class.support).sum::<usize>(),
            width = width
        )?;
        for avg in &[&self.macro_avg, &self.weighted_avg] {
            writeln!(
                f,
                "{:>width$}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9}",
                avg.label, avg.precision, avg.recall, avg.f1, avg.support,
                width = width
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: &[&str] = &["VERB", "NOUN", "DET"];

    #[test]
    fn accuracy_counts_matching_positions() {
        let gold = ["NOUN", "VERB", "NOUN", "NOUN"];
        let pred = ["NOUN", "NOUN", "NOUN", "VERB"];

        assert!((accuracy(&gold, &pred).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn accuracy_rejects_mismatched_lengths() {
        let gold = ["NOUN", "VERB"];
        let pred = ["NOUN"];

        assert!(matches!(
            accuracy(&gold, &pred),
            Err(Error::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn perfect_predictions_give_a_diagonal_matrix() {
        let gold = ["NOUN", "VERB", "DET", "NOUN"];
        let matrix = ConfusionMatrix::from_pairs(&gold, &gold, LABELS).unwrap();

        assert!((accuracy(&gold, &gold).unwrap() - 1.0).abs() < 1e-12);
        for (i, row) in matrix.counts().iter().enumerate() {
            for (j, &count) in row.iter().enumerate() {
                if i != j {
                    assert_eq!(count, 0);
                }
            }
        }
    }

    #[test]
    fn confusion_matrix_counts_gold_rows_and_predicted_columns() {
        let gold = ["NOUN", "VERB", "NOUN", "NOUN"];
        let pred = ["NOUN", "NOUN", "NOUN", "VERB"];
        let matrix = ConfusionMatrix::from_pairs(&gold, &pred, LABELS).unwrap();

        // Rows follow LABELS order: VERB, NOUN, DET.
        assert_eq!(matrix.counts()[0], vec![0, 1, 0]);
        assert_eq!(matrix.counts()[1], vec![1, 2, 0]);
        assert_eq!(matrix.counts()[2], vec![0, 0, 0]);
    }

    #[test]
    fn normalized_rows_sum_to_one_or_stay_zero() {
        let gold = ["NOUN", "VERB", "NOUN", "NOUN"];
        let pred = ["NOUN", "NOUN", "NOUN", "VERB"];
        let matrix = ConfusionMatrix::from_pairs(&gold, &pred, LABELS).unwrap();

        for (row, normalized) in matrix.row_normalized().into_iter().enumerate() {
            let sum: f64 = normalized.iter().sum();
            if matrix.support(row) > 0 {
                assert!((sum - 1.0).abs() < 1e-9);
            } else {
                assert!(normalized.iter().all(|&value| value == 0.0));
            }
        }
    }

    #[test]
    fn labels_outside_the_inventory_are_ignored() {
        let gold = ["NOUN", "MYSTERY"];
        let pred = ["NOUN", "NOUN"];
        let matrix = ConfusionMatrix::from_pairs(&gold, &pred, LABELS).unwrap();

        let total: usize = matrix.counts().iter().flatten().sum();
        assert_eq!(total, 1);
    }

    #[test]
    fn report_matches_hand_computed_metrics() {
        let gold = ["NOUN", "VERB", "NOUN", "NOUN"];
        let pred = ["NOUN", "NOUN", "NOUN", "VERB"];
        let report = classification_report(&gold, &pred, LABELS).unwrap();

        let noun = report
            .classes
            .iter()
            .find(|class| class.label == "NOUN")
            .unwrap();
        // NOUN: TP 2, FP 1 (the VERB predicted as NOUN), FN 1.
        assert!((noun.precision - 2.0 / 3.0).abs() < 1e-12);
        assert!((noun.recall - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(noun.support, 3);

        let verb = report
            .classes
            .iter()
            .find(|class| class.label == "VERB")
            .unwrap();
        assert_eq!(verb.precision, 0.0);
        assert_eq!(verb.recall, 0.0);
        assert_eq!(verb.f1, 0.0);
        assert_eq!(verb.support, 1);

        assert_eq!(report.macro_avg.support, 4);
        assert_eq!(report.weighted_avg.support, 4);
    }

    #[test]
    fn zero_support_classes_do_not_poison_aggregates() {
        let gold = ["NOUN", "NOUN"];
        let pred = ["NOUN", "NOUN"];
        let report = classification_report(&gold, &pred, LABELS).unwrap();

        let det = report
            .classes
            .iter()
            .find(|class| class.label == "DET")
            .unwrap();
        assert_eq!(det.f1, 0.0);
        assert_eq!(det.support, 0);
        assert!((report.weighted_avg.f1 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn report_renders_as_a_table() {
        let gold = ["NOUN", "VERB"];
        let pred = ["NOUN", "VERB"];
        let report = classification_report(&gold, &pred, LABELS).unwrap();
        let rendered = report.to_string();

        assert!(rendered.contains("precision"));
        assert!(rendered.contains("weighted avg"));
    }
}
