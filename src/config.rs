use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Render configuration: the CSS class strings attached to each emitted
/// element. Defaults match the stock dark-mode-aware utility classes.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub heading: HeadingConfig,
    pub text: TextConfig,
    pub list: ListConfig,
    pub inline: InlineConfig,
    pub spacer: SpacerConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HeadingConfig {
    pub h2_class: String,
    pub h3_class: String,
}

impl Default for HeadingConfig {
    fn default() -> Self {
        Self {
            h2_class: "text-2xl font-bold text-slate-900 dark:text-white mb-4 mt-8 flex items-center"
                .to_string(),
            h3_class: "text-xl font-bold text-slate-800 dark:text-slate-200 mb-3 mt-6".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    pub paragraph_class: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            paragraph_class: "text-slate-800 dark:text-slate-200 mb-4 leading-relaxed text-base"
                .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    pub ordered_class: String,
    pub unordered_class: String,
    pub item_class: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            ordered_class:
                "list-decimal list-inside space-y-3 mb-6 ml-4 text-slate-800 dark:text-slate-200"
                    .to_string(),
            unordered_class:
                "list-disc list-inside space-y-3 mb-6 ml-4 text-slate-800 dark:text-slate-200"
                    .to_string(),
            item_class: "text-slate-800 dark:text-slate-200 leading-relaxed".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    pub bold_class: String,
    pub italic_class: String,
    pub code_class: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            bold_class: "font-bold text-slate-900 dark:text-white".to_string(),
            italic_class: "italic".to_string(),
            code_class:
                "bg-slate-100 dark:bg-slate-800 px-2 py-1 rounded text-sm font-mono text-slate-800 dark:text-slate-200"
                    .to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SpacerConfig {
    pub class: String,
}

impl Default for SpacerConfig {
    fn default() -> Self {
        Self {
            class: "h-4".to_string(),
        }
    }
}

impl HeadingConfig {
    /// Get the class string for a heading level.
    pub fn class_for_level(&self, level: u8) -> &str {
        match level {
            3 => &self.h3_class,
            _ => &self.h2_class,
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
