use grablow::engine::config::{
    DEFAULT_MANIFEST_SUFFIX, DEFAULT_RESULTS_DIR, DEFAULT_SCORE_SUFFIX, DEFAULT_STRUCTURE_SUFFIX,
};

pub struct DefaultsConfig {
    pub hit_length: usize,
    pub results_dir: String,
    pub score_suffix: String,
    pub structure_suffix: String,
    pub manifest_suffix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            hit_length: 5,
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            score_suffix: DEFAULT_SCORE_SUFFIX.to_string(),
            structure_suffix: DEFAULT_STRUCTURE_SUFFIX.to_string(),
            manifest_suffix: DEFAULT_MANIFEST_SUFFIX.to_string(),
        }
    }
}
