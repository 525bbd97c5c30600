use serde::{Deserialize, Serialize};

use super::{
    reveal::{MarginParseError, RevealOptions, RootMargin, StaggerGroup},
    scroll::{BACK_TO_TOP_THRESHOLD, NEAR_TOP_THRESHOLD},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct MotionConfig {
    pub near_top_threshold: u32,
    pub back_to_top_threshold: u32,
    pub card_margin: String,
    pub card_stagger: f64,
    pub desktop_link_stagger: f64,
    pub mobile_link_stagger: f64,
    pub letter_start: f64,
    pub letter_stagger: f64,
    /// Mount delays, in milliseconds, for the header, body and trailing blocks
    /// of a section.
    pub loader_delays_ms: [u32; 3],
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            near_top_threshold: NEAR_TOP_THRESHOLD,
            back_to_top_threshold: BACK_TO_TOP_THRESHOLD,
            card_margin: "-50px".to_string(),
            card_stagger: 0.1,
            desktop_link_stagger: 0.05,
            mobile_link_stagger: 0.03,
            letter_start: 0.6,
            letter_stagger: 0.05,
            loader_delays_ms: [0, 200, 400],
        }
    }
}

impl MotionConfig {
    pub fn card_group(&self) -> StaggerGroup {
        StaggerGroup::new(0.0, self.card_stagger)
    }

    pub fn card_options(&self) -> Result<RevealOptions, MarginParseError> {
        let margin: RootMargin = self.card_margin.parse()?;
        Ok(RevealOptions::default().with_margin(margin))
    }

    pub fn letter_group(&self) -> StaggerGroup {
        StaggerGroup::new(self.letter_start, self.letter_stagger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::reveal::MarginLength;

    #[test]
    fn test_missing_keys_use_defaults() {
        let cfg: MotionConfig = serde_json::from_str(r#"{ "card_stagger": 0.2 }"#).unwrap();
        assert_eq!(cfg.card_stagger, 0.2);
        assert_eq!(cfg.near_top_threshold, 50);
        assert_eq!(cfg.back_to_top_threshold, 300);
        assert_eq!(cfg.loader_delays_ms, [0, 200, 400]);
    }

    #[test]
    fn test_card_options() {
        let opts = MotionConfig::default().card_options().unwrap();
        assert_eq!(opts.root_margin, RootMargin::uniform(MarginLength::Px(-50.0)));
        assert!(opts.once);

        let bad = MotionConfig {
            card_margin: "wide".to_string(),
            ..Default::default()
        };
        assert!(bad.card_options().is_err());
    }

    #[test]
    fn test_letter_group() {
        let group = MotionConfig::default().letter_group();
        assert!((group.delay_for(12) - 1.2).abs() < 1e-9);
    }
}
