use error_diffusion::{kernel, DitherOptions, Filter, Kernel, Mode, ALL_FILTERS, DEFAULT_MULTIPLIER};
use serde::Deserialize;
use std::path::Path;

use crate::error::ConfigError;

/// Keyword that expands to every shipped filter
pub const ALL_KEYWORD: &str = "all";

/// Which engine variants a run produces
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExportMode {
    /// Both monochrome and color
    #[default]
    All,
    Color,
    Mono,
}

impl ExportMode {
    /// Engine modes in output order
    pub fn modes(&self) -> &'static [Mode] {
        match self {
            ExportMode::All => &[Mode::Monochrome, Mode::Color],
            ExportMode::Color => &[Mode::Color],
            ExportMode::Mono => &[Mode::Monochrome],
        }
    }

    pub fn includes(&self, mode: Mode) -> bool {
        self.modes().contains(&mode)
    }
}

/// A user-defined kernel, selectable by name in `filters`
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CustomFilter {
    pub name: String,

    /// Row-major weights, current pixel in the center of row 0
    pub rows: Vec<Vec<f32>>,
}

/// Run configuration loaded from YAML
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Filter names in output order; `all` expands to every shipped filter
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,

    /// Scale applied to pending error
    #[serde(default = "default_multiplier")]
    pub multiplier: f32,

    #[serde(default)]
    pub export: ExportMode,

    /// Emit the luma image alongside the dithered outputs
    #[serde(default = "default_true")]
    pub grayscale: bool,

    /// Emit the fixed-cutoff threshold image
    #[serde(default = "default_true")]
    pub threshold: bool,

    #[serde(default)]
    pub custom_filters: Vec<CustomFilter>,
}

fn default_filters() -> Vec<String> {
    vec![ALL_KEYWORD.to_string()]
}

fn default_multiplier() -> f32 {
    DEFAULT_MULTIPLIER
}

fn default_true() -> bool {
    true
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            filters: default_filters(),
            multiplier: default_multiplier(),
            export: ExportMode::default(),
            grayscale: true,
            threshold: true,
            custom_filters: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        tracing::debug!(
            filters = config.filters.len(),
            custom_filters = config.custom_filters.len(),
            "Parsed configuration"
        );
        Ok(config)
    }

    /// Read and parse a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Split a comma-separated filter list such as `"atkinson, burkes"`
    pub fn parse_filter_list(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolve `filters` into concrete filters, in order.
    ///
    /// Custom filters take precedence over shipped ones with the same
    /// name. Repeated filters are dropped, keeping the first occurrence.
    pub fn resolve_filters(&self) -> Result<Vec<Filter>, ConfigError> {
        let mut resolved: Vec<Filter> = Vec::new();

        for requested in &self.filters {
            let requested = requested.trim();
            let candidates = if requested.eq_ignore_ascii_case(ALL_KEYWORD) {
                ALL_FILTERS.iter().map(|f| (*f).clone()).collect()
            } else {
                vec![self.find_filter(requested)?]
            };

            for filter in candidates {
                if resolved.iter().any(|f| f.name() == filter.name()) {
                    tracing::warn!(filter = filter.name(), "Duplicate filter ignored");
                    continue;
                }
                resolved.push(filter);
            }
        }

        if resolved.is_empty() {
            return Err(ConfigError::NoFilters);
        }
        Ok(resolved)
    }

    /// Diffusion options for this run
    pub fn dither_options(&self) -> Result<DitherOptions, ConfigError> {
        let options = DitherOptions::new().multiplier(self.multiplier);
        options
            .validate()
            .map_err(|_| ConfigError::InvalidMultiplier(self.multiplier))?;
        Ok(options)
    }

    fn find_filter(&self, name: &str) -> Result<Filter, ConfigError> {
        if let Some(custom) = self
            .custom_filters
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(name))
        {
            let kernel =
                Kernel::from_rows(&custom.rows).map_err(|source| ConfigError::InvalidKernel {
                    name: custom.name.clone(),
                    source,
                })?;
            return Ok(Filter::new(custom.name.clone(), kernel));
        }

        kernel::lookup(name)
            .cloned()
            .ok_or_else(|| ConfigError::UnknownFilter(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use error_diffusion::KernelError;

    fn names(filters: &[Filter]) -> Vec<&str> {
        filters.iter().map(|f| f.name()).collect()
    }

    #[test]
    fn test_default_config() {
        let config = RunConfig::default();
        assert_eq!(config.filters, vec!["all".to_string()]);
        assert!((config.multiplier - 1.18).abs() < f32::EPSILON);
        assert_eq!(config.export, ExportMode::All);
        assert!(config.grayscale);
        assert!(config.threshold);
        assert!(config.custom_filters.is_empty());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = RunConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, RunConfig::default());
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r#"
filters: [atkinson, my-kernel]
multiplier: 1.0
export: mono
grayscale: false
threshold: false
custom_filters:
  - name: my-kernel
    rows:
      - [0, 0, 1]
"#;
        let config = RunConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.filters, vec!["atkinson", "my-kernel"]);
        assert_eq!(config.multiplier, 1.0);
        assert_eq!(config.export, ExportMode::Mono);
        assert!(!config.grayscale);
        assert!(!config.threshold);
        assert_eq!(config.custom_filters[0].rows, vec![vec![0.0, 0.0, 1.0]]);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = RunConfig::from_yaml_str("multipler: 2.0");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_unknown_export_rejected() {
        let result = RunConfig::from_yaml_str("export: sepia");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_export_modes() {
        assert_eq!(ExportMode::All.modes(), &[Mode::Monochrome, Mode::Color]);
        assert_eq!(ExportMode::Color.modes(), &[Mode::Color]);
        assert!(ExportMode::Mono.includes(Mode::Monochrome));
        assert!(!ExportMode::Mono.includes(Mode::Color));
    }

    #[test]
    fn test_parse_filter_list() {
        assert_eq!(
            RunConfig::parse_filter_list(" atkinson,burkes , ,sierra2,"),
            vec!["atkinson", "burkes", "sierra2"]
        );
        assert!(RunConfig::parse_filter_list("").is_empty());
    }

    #[test]
    fn test_resolve_all_expands_in_order() {
        let filters = RunConfig::default().resolve_filters().unwrap();
        assert_eq!(
            names(&filters),
            vec![
                "Atkinson",
                "Burkes",
                "Floyd-Steinberg",
                "Stucki",
                "Sierra-2",
                "Sierra-3",
                "Sierra-Lite",
                "Jarvis-Judice-Ninke",
            ]
        );
    }

    #[test]
    fn test_resolve_keeps_requested_order_and_drops_duplicates() {
        let config = RunConfig {
            filters: RunConfig::parse_filter_list("stucki,ATKINSON,stucki,atkinson"),
            ..RunConfig::default()
        };
        let filters = config.resolve_filters().unwrap();
        assert_eq!(names(&filters), vec!["Stucki", "Atkinson"]);
    }

    #[test]
    fn test_resolve_named_then_all_does_not_repeat() {
        let config = RunConfig {
            filters: vec!["jjn".to_string(), "all".to_string()],
            ..RunConfig::default()
        };
        let filters = config.resolve_filters().unwrap();
        assert_eq!(filters.len(), 8);
        assert_eq!(filters[0].name(), "Jarvis-Judice-Ninke");
        assert_eq!(filters[1].name(), "Atkinson");
    }

    #[test]
    fn test_resolve_unknown_filter() {
        let config = RunConfig {
            filters: vec!["bayer".to_string()],
            ..RunConfig::default()
        };
        match config.resolve_filters() {
            Err(ConfigError::UnknownFilter(name)) => assert_eq!(name, "bayer"),
            other => panic!("Expected UnknownFilter, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_empty_list() {
        let config = RunConfig {
            filters: Vec::new(),
            ..RunConfig::default()
        };
        assert!(matches!(
            config.resolve_filters(),
            Err(ConfigError::NoFilters)
        ));
    }

    #[test]
    fn test_resolve_custom_filter() {
        let config = RunConfig {
            filters: vec!["Down".to_string()],
            custom_filters: vec![CustomFilter {
                name: "down".to_string(),
                rows: vec![vec![0.0, 0.0, 0.5], vec![0.25, 0.25, 0.0]],
            }],
            ..RunConfig::default()
        };
        let filters = config.resolve_filters().unwrap();
        assert_eq!(names(&filters), vec!["down"]);
        assert_eq!(filters[0].kernel().cols(), 3);
        assert_eq!(filters[0].kernel().get(2, 0), 0.5);
    }

    #[test]
    fn test_resolve_invalid_custom_filter() {
        let config = RunConfig {
            filters: vec!["wide".to_string()],
            custom_filters: vec![CustomFilter {
                name: "wide".to_string(),
                rows: vec![vec![0.0, 0.0, 0.5, 0.5]],
            }],
            ..RunConfig::default()
        };
        match config.resolve_filters() {
            Err(ConfigError::InvalidKernel { name, source }) => {
                assert_eq!(name, "wide");
                assert_eq!(source, KernelError::EvenWidth { cols: 4 });
            }
            other => panic!("Expected InvalidKernel, got {:?}", other),
        }
    }

    #[test]
    fn test_dither_options() {
        let config = RunConfig {
            multiplier: 0.75,
            ..RunConfig::default()
        };
        assert_eq!(config.dither_options().unwrap().multiplier, 0.75);

        let config = RunConfig {
            multiplier: 0.0,
            ..RunConfig::default()
        };
        assert!(matches!(
            config.dither_options(),
            Err(ConfigError::InvalidMultiplier(m)) if m == 0.0
        ));
    }
}
