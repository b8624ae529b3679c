// Colored terminal output for analysis results.
//
// main.rs delegates here for the `analyze` command; the HTTP API returns the
// same AnalysisResponse as JSON instead.

use colored::Colorize;

use crate::analysis::fusion::TOXICITY_THRESHOLD;
use crate::analysis::AnalysisResponse;
use crate::text::sentiment::SentimentLabel;

/// Display a full analysis report in the terminal.
pub fn display_analysis(response: &AnalysisResponse) {
    println!("\n{}", "=== Analysis ===".bold());

    if let Some(sentiment) = response.sentiment() {
        println!(
            "  Sentiment: {} ({:.2})",
            colorize_sentiment(sentiment.label),
            sentiment.score
        );
    }
    println!("  Summary: {}", response.text_summary.dimmed());

    let topics = &response.topic_classification;
    println!("  Primary topic: {}", topics.primary.bold());
    for category in &topics.categories {
        println!("    {:<18} {:>3}%", category.name, category.percentage);
    }

    println!(
        "  Text toxicity: {}",
        colorize_toxicity(response.text_toxicity_score)
    );

    println!("\n{}", "=== Image ===".bold());
    if response.image_classification.is_empty() {
        println!("  {}", response.scene_classification.dimmed());
    } else {
        println!("  Scene: {}", response.scene_classification);
        for label in &response.image_classification {
            println!("    {:<10} {:.2}", label.label, label.score);
        }
        let ocr = response.ocr_text.trim();
        if ocr.is_empty() {
            println!("  OCR: {}", "(no text found)".dimmed());
        } else {
            println!("  OCR: \"{}\"", super::truncate_chars(ocr, 140).dimmed());
        }
        println!(
            "  Image toxicity: {}",
            colorize_toxicity(response.image_toxicity_score)
        );
    }

    println!("\n{}", "=== Automated response ===".bold());
    println!("  {}", response.automated_response);
    println!();
}

fn colorize_sentiment(label: SentimentLabel) -> colored::ColoredString {
    let s = label.as_str();
    match label {
        SentimentLabel::Positive => s.green(),
        SentimentLabel::Negative => s.red(),
        SentimentLabel::Neutral => s.normal(),
    }
}

fn colorize_toxicity(score: f64) -> colored::ColoredString {
    let s = format!("{score:.2}");
    if score > TOXICITY_THRESHOLD {
        s.red().bold()
    } else if score > 0.0 {
        s.yellow()
    } else {
        s.green()
    }
}
