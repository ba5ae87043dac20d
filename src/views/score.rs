//! Score progress bars: urgency (symptom results) and overall health
//! (report explanation). Same widget, different thresholds.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarColor {
    Green,
    Yellow,
    Red,
}

/// A filled progress bar: width in percent plus fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBar {
    pub width_percent: u8,
    pub color: BarColor,
}

/// Urgency bar: higher is worse. Red above 70, yellow above 40.
pub fn urgency_bar(score: u8) -> ScoreBar {
    let color = if score > 70 {
        BarColor::Red
    } else if score > 40 {
        BarColor::Yellow
    } else {
        BarColor::Green
    };
    ScoreBar {
        width_percent: score.min(100),
        color,
    }
}

/// Health-score bar: higher is better. Green from 80, yellow from 60.
pub fn health_score_bar(score: u8) -> ScoreBar {
    let color = if score >= 80 {
        BarColor::Green
    } else if score >= 60 {
        BarColor::Yellow
    } else {
        BarColor::Red
    };
    ScoreBar {
        width_percent: score.min(100),
        color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgency_forty_five_is_yellow_at_forty_five_percent() {
        let bar = urgency_bar(45);
        assert_eq!(bar.color, BarColor::Yellow);
        assert_eq!(bar.width_percent, 45);
    }

    #[test]
    fn urgency_thresholds_are_exclusive() {
        assert_eq!(urgency_bar(40).color, BarColor::Green);
        assert_eq!(urgency_bar(41).color, BarColor::Yellow);
        assert_eq!(urgency_bar(70).color, BarColor::Yellow);
        assert_eq!(urgency_bar(71).color, BarColor::Red);
    }

    #[test]
    fn health_score_thresholds_are_inclusive() {
        assert_eq!(health_score_bar(80).color, BarColor::Green);
        assert_eq!(health_score_bar(79).color, BarColor::Yellow);
        assert_eq!(health_score_bar(60).color, BarColor::Yellow);
        assert_eq!(health_score_bar(59).color, BarColor::Red);
    }

    #[test]
    fn width_is_clamped_to_one_hundred() {
        assert_eq!(urgency_bar(130).width_percent, 100);
        assert_eq!(health_score_bar(255).width_percent, 100);
    }
}
