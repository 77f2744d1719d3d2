//! Compiled-in page content: the feature catalog and the selling-point row.
//!
//! All of this is fixed at build time. Features have no identity beyond
//! their position in the catalog; the landing view enumerates them and the
//! expansion state tracks them by that index.

/// The closed set of glyphs the feature cards use. Each variant resolves to
/// a fixed stroke path rendered inside a 24x24 viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureIcon {
    BarChart,
    Bolt,
    TrendLine,
    People,
}

impl FeatureIcon {
    pub fn svg_path(&self) -> &'static str {
        match self {
            FeatureIcon::BarChart => "M3 3v18h18 M18 17V9 M13 17V5 M8 17v-3",
            FeatureIcon::Bolt => "M13 2 3 14h9l-1 8 10-12h-9l1-8z",
            FeatureIcon::TrendLine => "m22 7-8.5 8.5-5-5L2 17 M16 7h6v6",
            FeatureIcon::People => {
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2 \
                 M9 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8 \
                 M22 21v-2a4 4 0 0 0-3-3.87 \
                 M16 3.13a4 4 0 0 1 0 7.75"
            }
        }
    }
}

/// One entry in the feature list: always-visible summary, expandable detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// One static callout in the bottom row.
#[derive(Debug, Clone, PartialEq)]
pub struct SellingPoint {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub fn feature_catalog() -> Vec<Feature> {
    vec![
        Feature {
            icon: FeatureIcon::BarChart,
            title: "Real-time Shot Maps",
            summary: "Interactive visualization of shot locations, success rates, and tactical patterns with live match data integration.",
            detail: "Our advanced shot mapping technology uses machine learning algorithms to analyze shooting patterns, expected goals (xG), and heat maps. Features include: real-time position tracking, shot outcome prediction, tactical zone analysis, player-specific shooting tendencies, and historical comparison tools. The system processes over 1000 data points per shot to provide unprecedented accuracy in football analytics.",
        },
        Feature {
            icon: FeatureIcon::BarChart,
            title: "Advanced Statistics",
            summary: "Comprehensive match analytics including possession, passes, tackles, and performance metrics for detailed analysis.",
            detail: "Deep dive into comprehensive metrics including: passing accuracy by field zones, progressive passes, key passes leading to shots, defensive actions per zone, sprint distances, heart rate monitoring integration, and custom performance indicators. Our AI engine correlates over 200 statistical parameters to generate actionable insights for coaches, analysts, and performance specialists.",
        },
        Feature {
            icon: FeatureIcon::TrendLine,
            title: "Performance Tracking",
            summary: "Monitor player and team performance trends across seasons with predictive analytics and insights.",
            detail: "Longitudinal performance analysis featuring: injury risk assessment, fatigue monitoring, form prediction models, seasonal trend analysis, and peer comparison matrices. Our predictive algorithms use historical data spanning 10+ seasons to forecast performance drops, optimal rotation strategies, and identify emerging talent patterns across different leagues and playing styles.",
        },
        Feature {
            icon: FeatureIcon::Bolt,
            title: "Live Match Updates",
            summary: "Real-time notifications, score updates, and critical match events delivered instantly to your device.",
            detail: "Ultra-low latency data delivery system featuring: sub-second event notifications, customizable alert preferences, multi-league simultaneous tracking, social sentiment analysis, and intelligent event prioritization. Our global network of data collectors ensures 99.9% accuracy in event timing and details, with advanced filtering to deliver only the most relevant updates to each user.",
        },
        Feature {
            icon: FeatureIcon::People,
            title: "Team Comparison",
            summary: "Side-by-side analysis of team statistics, head-to-head records, and tactical formation insights.",
            detail: "Comprehensive team analysis tools including: formation effectiveness matrices, tactical transition analysis, set-piece success rates, home/away performance variations, and weather/pitch condition impacts. Advanced visualization tools help identify tactical weaknesses, optimal playing styles against specific opponents, and strategic advantages based on historical matchup data and current form metrics.",
        },
    ]
}

pub fn selling_points() -> Vec<SellingPoint> {
    vec![
        SellingPoint {
            title: "99.9% Uptime",
            blurb: "Industry-leading reliability ensures you never miss critical match moments",
        },
        SellingPoint {
            title: "50+ Leagues",
            blurb: "Comprehensive coverage of major football leagues and tournaments worldwide",
        },
        SellingPoint {
            title: "< 1s Latency",
            blurb: "Lightning-fast data delivery for the most up-to-date match information",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_features_in_page_order() {
        let catalog = feature_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog[0].title, "Real-time Shot Maps");
        assert_eq!(catalog[4].title, "Team Comparison");
    }

    #[test]
    fn every_feature_has_summary_and_detail() {
        for feature in feature_catalog() {
            assert!(!feature.summary.is_empty());
            assert!(!feature.detail.is_empty());
            assert!(!feature.icon.svg_path().is_empty());
        }
    }

    #[test]
    fn three_selling_points() {
        assert_eq!(selling_points().len(), 3);
    }
}
