//! Aggregate grading and the three-way color mapping used by record rows.

#[cfg(test)]
#[path = "grade_test.rs"]
mod grade_test;

use crate::net::types::Grade;

/// Minimum number of qualifying metrics for the top two tiers.
const TIER_THRESHOLD: usize = 5;

/// Aggregate classification of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverallGrade {
    Best,
    Good,
    NeedsImprovement,
}

impl OverallGrade {
    /// Label shown on the record badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Best => "최상",
            Self::Good => "양호",
            Self::NeedsImprovement => "개선 필요",
        }
    }

    pub fn tone(self) -> GradeTone {
        match self {
            Self::Best => GradeTone::Positive,
            Self::Good => GradeTone::Neutral,
            Self::NeedsImprovement => GradeTone::Negative,
        }
    }
}

/// Color family shared by badges, metric text and the radar glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradeTone {
    Positive,
    Neutral,
    Negative,
}

impl GradeTone {
    /// Modifier class for the overall-grade badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Positive => "grade-badge grade-badge--positive",
            Self::Neutral => "grade-badge grade-badge--neutral",
            Self::Negative => "grade-badge grade-badge--negative",
        }
    }

    /// Modifier class for per-metric grade text.
    pub fn text_class(self) -> &'static str {
        match self {
            Self::Positive => "grade-text grade-text--positive",
            Self::Neutral => "grade-text grade-text--neutral",
            Self::Negative => "grade-text grade-text--negative",
        }
    }

    /// Stroke/fill color for SVG glyphs.
    pub fn color(self) -> &'static str {
        match self {
            Self::Positive => "#6ee7b7",
            Self::Neutral => "#93c5fd",
            Self::Negative => "#fda4af",
        }
    }
}

/// Tone for a single metric grade.
pub fn metric_tone(grade: &Grade) -> GradeTone {
    match grade {
        Grade::Excellent => GradeTone::Positive,
        Grade::Good => GradeTone::Neutral,
        Grade::Other(_) => GradeTone::Negative,
    }
}

/// Classify a record from the grades of all its metrics.
///
/// Only the counts matter: five or more `excellent` grades give
/// [`OverallGrade::Best`], otherwise five or more `excellent` + `good` grades
/// give [`OverallGrade::Good`].
pub fn compute_overall_grade<'a, I>(grades: I) -> OverallGrade
where
    I: IntoIterator<Item = &'a Grade>,
{
    let (excellent, good) = grades.into_iter().fold((0_usize, 0_usize), |(e, g), grade| match grade {
        Grade::Excellent => (e + 1, g),
        Grade::Good => (e, g + 1),
        Grade::Other(_) => (e, g),
    });

    if excellent >= TIER_THRESHOLD {
        OverallGrade::Best
    } else if excellent + good >= TIER_THRESHOLD {
        OverallGrade::Good
    } else {
        OverallGrade::NeedsImprovement
    }
}
