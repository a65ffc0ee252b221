/// Select the winning class from a vector of per-class scores.
///
/// Returns the index of the maximum element together with its score. Ties
/// break to the lowest index. An empty score vector has no winner.
pub fn top_class(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &score) in scores.iter().enumerate() {
        match best {
            // Strict comparison keeps the first occurrence on ties
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((i, score)),
        }
    }
    best
}

/// Confidence text shown next to the predicted label.
pub fn format_confidence(score: f32) -> String {
    format!("{:.1}%", score * 100.0)
}
