//! Stand-in metrics without a real measurement behind them.
//!
//! Each placeholder is drawn uniformly from a fixed inclusive range using the
//! caller's generator, so seeded generators give reproducible reports.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::report::{Category, Metric};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Keywords,
    Readability,
    ColorScheme,
    Navigation,
    LayoutFlow,
    Ctas,
    Shareability,
    Stickiness,
    Clarity,
    Depth,
    Practicality,
}

impl Placeholder {
    pub fn range(self) -> RangeInclusive<u32> {
        match self {
            Placeholder::Keywords => 60..=90,
            Placeholder::Readability => 70..=95,
            Placeholder::ColorScheme => 80..=100,
            Placeholder::Navigation => 70..=90,
            Placeholder::LayoutFlow => 75..=95,
            Placeholder::Ctas => 50..=85,
            Placeholder::Shareability => 70..=95,
            Placeholder::Stickiness => 65..=90,
            Placeholder::Clarity => 80..=100,
            Placeholder::Depth => 70..=95,
            Placeholder::Practicality => 75..=95,
        }
    }

    /// Metric display name.
    pub fn name(self) -> &'static str {
        match self {
            Placeholder::Keywords => "Keywords",
            Placeholder::Readability => "Readability",
            Placeholder::ColorScheme => "Color Scheme",
            Placeholder::Navigation => "Navigation",
            Placeholder::LayoutFlow => "Layout Flow",
            Placeholder::Ctas => "CTAs",
            Placeholder::Shareability => "Shareability",
            Placeholder::Stickiness => "Stickiness",
            Placeholder::Clarity => "Clarity",
            Placeholder::Depth => "Depth",
            Placeholder::Practicality => "Practicality",
        }
    }

    pub fn draw<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(self.range())
    }

    /// Draws a value and wraps it as a named metric.
    pub fn metric<R: Rng + ?Sized>(self, rng: &mut R) -> Metric {
        Metric::new(self.name(), self.draw(rng))
    }
}

/// Navigation, layout flow, and the measured mobile score.
pub fn ux<R: Rng + ?Sized>(mobile_score: u32, rng: &mut R) -> Category {
    Category::from_metrics(vec![
        Placeholder::Navigation.metric(rng),
        Placeholder::LayoutFlow.metric(rng),
        Metric::new("Mobile Usability", mobile_score),
    ])
}

pub fn engagement<R: Rng + ?Sized>(rng: &mut R) -> Category {
    Category::from_metrics(vec![
        Placeholder::Ctas.metric(rng),
        Placeholder::Shareability.metric(rng),
        Placeholder::Stickiness.metric(rng),
    ])
}

pub fn topic_fit<R: Rng + ?Sized>(rng: &mut R) -> Category {
    Category::from_metrics(vec![
        Placeholder::Clarity.metric(rng),
        Placeholder::Depth.metric(rng),
        Placeholder::Practicality.metric(rng),
    ])
}
