use chrono::NaiveDate;

use super::panels::escape_html;
use crate::analysis::{ExecutiveSummary, RiskLevel};

pub const BLUF_DEFAULT: &str = "Multi-agent psychological analysis reveals divergent national interests.";
pub const NO_FINDINGS: &str = "No specific findings recorded.";

/// Visual weight given to the overall risk line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Calm,
    Elevated,
    Critical,
}

impl Emphasis {
    pub fn for_risk(risk: RiskLevel) -> Self {
        match risk {
            RiskLevel::Low => Emphasis::Calm,
            RiskLevel::Medium => Emphasis::Elevated,
            RiskLevel::High => Emphasis::Critical,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Emphasis::Calm => "risk-low",
            Emphasis::Elevated => "risk-medium",
            Emphasis::Critical => "risk-high",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Emphasis::Calm => "#006400",
            Emphasis::Elevated => "#8B4513",
            Emphasis::Critical => "#8b0000",
        }
    }
}

/// `1. first`, `2. second`, ... or the no-findings notice.
pub fn insights_list(insights: &[String]) -> String {
    if insights.is_empty() {
        return format!(r#"<em class="muted">{}</em>"#, NO_FINDINGS);
    }
    let items: String = insights
        .iter()
        .enumerate()
        .map(|(i, insight)| format!(r#"<div class="insight"><b>{}.</b> {}</div>"#, i + 1, escape_html(insight)))
        .collect();
    format!(r#"<div class="insights">{}</div>"#, items)
}

pub fn executive_summary(summary: &ExecutiveSummary, dated: NaiveDate) -> String {
    let bluf = summary.bluf.as_deref().unwrap_or(BLUF_DEFAULT);
    let risk = summary.risk();
    let emphasis = Emphasis::for_risk(risk);

    format!(
        concat!(
            r#"<article class="panel summary">"#,
            r#"<section class="bluf"><span class="tag">BOTTOM LINE UP FRONT (BLUF)</span><p>{bluf}</p></section>"#,
            r#"<section class="findings"><span class="tag">KEY INTELLIGENCE FINDINGS:</span>{insights}</section>"#,
            r#"<section class="confidence"><span class="tag">ASSESSMENT CONFIDENCE:</span> "#,
            r#"<strong class="{class}" style="color: {color};">{label}</strong></section>"#,
            r#"<footer><span>X ____________ ANALYZING OFFICER</span><span>DATE {date}</span></footer>"#,
            r#"</article>"#
        ),
        bluf = escape_html(bluf),
        insights = insights_list(&summary.key_insights),
        class = emphasis.css_class(),
        color = emphasis.color(),
        label = escape_html(summary.risk_label()),
        date = dated.format("%d %B %Y"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_risk_gets_its_own_emphasis() {
        let low = Emphasis::for_risk(RiskLevel::Low);
        let medium = Emphasis::for_risk(RiskLevel::Medium);
        let high = Emphasis::for_risk(RiskLevel::High);
        assert_eq!(high, Emphasis::Critical);
        assert_ne!(high.css_class(), low.css_class());
        assert_ne!(high.css_class(), medium.css_class());
        assert_ne!(low.css_class(), medium.css_class());
    }

    #[test]
    fn insights_keep_their_order() {
        let html = insights_list(&["first".to_string(), "second".to_string()]);
        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(html.contains("<b>1.</b> first"));
        assert!(html.contains("<b>2.</b> second"));
        assert!(first < second);
    }
}
