use serde::{Deserialize, Serialize};

/// Status tier of a current-vs-target ratio (drives the card colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressStatus {
    OnTrack,
    Warning,
    Behind,
}

/// Progress toward a target, as a percentage.
///
/// Returns `None` when the target is not a positive number: a zero target
/// would otherwise produce an infinite/NaN ratio.
pub fn progress_percent(current: f64, target: f64) -> Option<f64> {
    if target > 0.0 {
        Some(current / target * 100.0)
    } else {
        None
    }
}

/// Classify current sales against a target.
///
/// ratio >= 100 -> OnTrack, 80 <= ratio < 100 -> Warning, ratio < 80 ->
/// Behind. Boundary values belong to the higher tier. A non-positive target
/// yields `None` (undefined status).
pub fn classify(current: f64, target: f64) -> Option<ProgressStatus> {
    let ratio = progress_percent(current, target)?;
    Some(if ratio >= 100.0 {
        ProgressStatus::OnTrack
    } else if ratio >= 80.0 {
        ProgressStatus::Warning
    } else {
        ProgressStatus::Behind
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_tiers() {
        assert_eq!(classify(100.0, 100.0), Some(ProgressStatus::OnTrack));
        assert_eq!(classify(150.0, 100.0), Some(ProgressStatus::OnTrack));
        assert_eq!(classify(85.0, 100.0), Some(ProgressStatus::Warning));
        assert_eq!(classify(80.0, 100.0), Some(ProgressStatus::Warning));
        assert_eq!(classify(79.9, 100.0), Some(ProgressStatus::Behind));
        assert_eq!(classify(0.0, 100.0), Some(ProgressStatus::Behind));
    }

    #[test]
    fn test_boundaries_belong_to_higher_tier() {
        // 100% and 80% are inclusive of the higher tier
        assert_eq!(classify(1000.0, 1000.0), Some(ProgressStatus::OnTrack));
        assert_eq!(classify(800.0, 1000.0), Some(ProgressStatus::Warning));
    }

    #[test]
    fn test_non_positive_target_is_undefined() {
        assert_eq!(classify(500.0, 0.0), None);
        assert_eq!(classify(500.0, -1.0), None);
        assert_eq!(progress_percent(500.0, 0.0), None);
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(50.0, 100.0), Some(50.0));
        assert_eq!(progress_percent(120.0, 100.0), Some(120.0));
    }
}
