use gistpp_config::Config;

/// Section and target-kind lists used when reading and validating a spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRules {
    pub allowed_sections: Vec<String>,
    pub required_sections: Vec<String>,
    /// Checked in order; the first one found in the title wins.
    pub target_types: Vec<String>,
}

impl SpecRules {
    pub const BEHAVIOR: &'static str = "Behavior";
    pub const TESTS: &'static str = "Tests";
    pub const DEPENDENCIES: &'static str = "Dependencies";

    pub fn is_allowed(&self, section: &str) -> bool {
        self.allowed_sections.iter().any(|s| s == section)
    }

    /// The first target type contained in `title`, ignoring case.
    pub fn classify(&self, title: &str) -> Option<&str> {
        let title = title.to_lowercase();
        self.target_types
            .iter()
            .find(|t| title.contains(&t.to_lowercase()))
            .map(String::as_str)
    }
}

impl Default for SpecRules {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SpecRules {
    fn from(config: &Config) -> Self {
        Self {
            allowed_sections: config.allowed_sections.clone(),
            required_sections: config.required_sections.clone(),
            target_types: config.target_types.clone(),
        }
    }
}
