//! Evaluate command handler
//!
//! Reads scored labels from a JSON file and prints binary classification
//! metrics.

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use vigil_core::evaluation::{EvaluationReport, ScoredLabel, evaluate};

/// Handle the evaluate command
pub fn handle_evaluate_command(file: &Path, threshold: f64, json: bool) -> Result<()> {
    if !threshold.is_finite() {
        anyhow::bail!("threshold must be a finite number");
    }

    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let samples = parse_samples(&raw)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let report = evaluate(&samples, threshold).context("Failed to compute metrics")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, samples.len());
    }

    Ok(())
}

fn parse_samples(raw: &str) -> Result<Vec<ScoredLabel>> {
    let samples: Vec<ScoredLabel> = serde_json::from_str(raw)?;
    Ok(samples)
}

/// Print a human readable report
fn print_report(report: &EvaluationReport, samples: usize) {
    let matrix = &report.confusion;
    let normalized = &report.normalized;

    println!(
        "{}",
        format!(
            "Evaluated {} sample(s) at threshold {}",
            samples, report.threshold
        )
        .bold()
    );

    println!("\n{}", "Confusion matrix:".bold());
    println!("  {:>12} {:>12} {:>12}", "", "pred. neg", "pred. pos");
    println!(
        "  {:>12} {:>12} {:>12}",
        "actual neg", matrix.true_negative, matrix.false_positive
    );
    println!(
        "  {:>12} {:>12} {:>12}",
        "actual pos", matrix.false_negative, matrix.true_positive
    );

    println!("\n{}", "Normalized by actual class:".bold());
    println!(
        "  {:>12} {:>12.3} {:>12.3}",
        "actual neg", normalized[0][0], normalized[0][1]
    );
    println!(
        "  {:>12} {:>12.3} {:>12.3}",
        "actual pos", normalized[1][0], normalized[1][1]
    );

    println!("\n{}", "Scores:".bold());
    println!("  Precision: {}", format!("{:.4}", report.precision).cyan());
    println!("  Recall:    {}", format!("{:.4}", report.recall).cyan());
    println!("  F1:        {}", format!("{:.4}", report.f1).cyan());
    println!("  Accuracy:  {}", format!("{:.4}", report.accuracy).cyan());
    match report.roc_auc {
        Some(auc) => println!("  ROC AUC:   {}", format!("{:.4}", auc).cyan()),
        None => println!("  ROC AUC:   {}", "n/a (single class)".dimmed()),
    }
    match report.average_precision {
        Some(ap) => println!("  Avg. prec: {}", format!("{:.4}", ap).cyan()),
        None => println!("  Avg. prec: {}", "n/a (no positives)".dimmed()),
    }

    if !report.pr_curve.is_empty() {
        println!("\n{}", "Precision-recall curve:".bold());
        println!("  {:>10} {:>10} {:>10}", "threshold", "precision", "recall");
        for point in &report.pr_curve {
            println!(
                "  {:>10.3} {:>10.3} {:>10.3}",
                point.threshold, point.precision, point.recall
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_samples() {
        let samples = parse_samples(
            r#"[{"label": true, "score": 0.91}, {"label": false, "score": 0.12}]"#,
        )
        .unwrap();
        assert_eq!(samples.len(), 2);
        assert!(samples[0].label);
        assert_eq!(samples[1].score, 0.12);
    }

    #[test]
    fn test_parse_samples_rejects_bad_records() {
        assert!(parse_samples(r#"[{"label": "yes", "score": 0.5}]"#).is_err());
        assert!(parse_samples(r#"{"label": true}"#).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = handle_evaluate_command(Path::new("/nonexistent/scores.json"), 0.5, false)
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to read"));
    }

    #[test]
    fn test_non_finite_threshold() {
        assert!(handle_evaluate_command(Path::new("scores.json"), f64::NAN, false).is_err());
    }
}
