use serde::Deserialize;

use crate::explore::seed::{DEFAULT_LABEL_FORMAT, DEFAULT_LOCALE};
use crate::explore::{CapOverrides, CategoryCaps, ContentCategory, ExploreOptions, DEFAULT_TEMPLATE};

/// Explore feed settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExploreConfig {
    /// Cyclic order of categories in the feed
    pub template: Vec<ContentCategory>,

    /// Locale for the date label (default: pt_PT)
    pub locale: String,

    /// strftime pattern for the date label
    pub label_format: String,

    /// Per-category item limits
    pub caps: CategoryCaps,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_vec(),
            locale: DEFAULT_LOCALE.to_string(),
            label_format: DEFAULT_LABEL_FORMAT.to_string(),
            caps: CategoryCaps::default(),
        }
    }
}

impl ExploreConfig {
    /// Composer options for `seed` using the configured template and caps.
    pub fn options(&self, seed: u32) -> ExploreOptions {
        ExploreOptions {
            seed: Some(seed),
            template: Some(self.template.clone()),
            caps: CapOverrides {
                product: Some(self.caps.product),
                story: Some(self.caps.story),
                place: Some(self.caps.place),
                moodboard: Some(self.caps.moodboard),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExploreConfig::default();
        assert_eq!(config.template.len(), 6);
        assert_eq!(config.template[0], ContentCategory::Product);
        assert_eq!(config.caps, CategoryCaps::default());
        assert_eq!(config.locale, "pt_PT");
    }

    #[test]
    fn test_partial_caps() {
        let config: ExploreConfig = toml::from_str(
            r#"
template = ["story", "place"]

[caps]
story = 5
"#,
        )
        .unwrap();

        assert_eq!(
            config.template,
            vec![ContentCategory::Story, ContentCategory::Place]
        );
        assert_eq!(config.caps.story, 5);
        assert_eq!(config.caps.product, 4);
    }

    #[test]
    fn test_options_carry_config() {
        let mut config = ExploreConfig::default();
        config.caps.moodboard = 0;

        let options = config.options(42);
        assert_eq!(options.seed, Some(42));
        assert_eq!(options.template.as_deref(), Some(&DEFAULT_TEMPLATE[..]));
        assert_eq!(options.caps.moodboard, Some(0));
        assert_eq!(options.caps.product, Some(4));
    }
}
