//! Language rule loader
//!
//! Embedded rule files are parsed once on first access and shared afterwards.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::error::{CoreError, Result};
use crate::language::{interface::LanguageRules, runtime::ConfigurableLanguageRules};

/// Embedded rule sets, keyed by code and by lowercase name
static EMBEDDED: OnceLock<HashMap<String, Arc<dyn LanguageRules>>> = OnceLock::new();

fn embedded() -> &'static HashMap<String, Arc<dyn LanguageRules>> {
    EMBEDDED.get_or_init(|| {
        let mut map = HashMap::new();

        match load_embedded_language("en", include_str!("../../configs/languages/english.toml")) {
            Ok(rules) => {
                map.insert("english".to_string(), Arc::clone(&rules));
                map.insert("en".to_string(), rules);
            }
            Err(e) => {
                log::error!("Failed to load embedded English rules: {e}");
            }
        }

        map
    })
}

/// Load language rules by code (`"en"`) or name (`"english"`)
pub fn get_rules(code: &str) -> Result<Arc<dyn LanguageRules>> {
    embedded()
        .get(&code.to_ascii_lowercase())
        .cloned()
        .ok_or_else(|| CoreError::UnknownLanguage(code.to_string()))
}

/// Parse the embedded rule files now instead of on first use
pub fn preload() -> usize {
    let count = embedded().len();
    log::debug!("Preloaded {count} embedded language entries");
    count
}

fn load_embedded_language(code: &str, toml_str: &str) -> Result<Arc<dyn LanguageRules>> {
    let rules = ConfigurableLanguageRules::from_toml_str(toml_str)
        .map_err(|e| CoreError::InvalidRules(format!("embedded {code} rules: {e}")))?;
    Ok(Arc::new(rules))
}
