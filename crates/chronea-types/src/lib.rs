use serde::{Deserialize, Serialize};

pub const DEFAULT_WISHLIST_KEY: &str = "chronea_wishlist";
pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_PRODUCT_ID: &str = "gold-horizon";

/// Display data of a product captured into the wishlist.
///
/// Identity is `name` alone. The persisted field names (`cat`, `img`) are the
/// ones the site has always written; the long forms are accepted on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSnapshot {
    pub name: String,
    #[serde(rename = "cat", alias = "category")]
    pub category: String,
    pub price: String,
    #[serde(rename = "img", alias = "image")]
    pub image: String,
    pub link: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Anything that is not exactly `"light"` reads as dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            _ => ThemeMode::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Site-wide settings. Every field falls back to the built-in value when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    pub wishlist_key: String,
    pub theme_key: String,
    pub default_product_id: String,
    pub form_reset_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wishlist_key: DEFAULT_WISHLIST_KEY.to_owned(),
            theme_key: DEFAULT_THEME_KEY.to_owned(),
            default_product_id: DEFAULT_PRODUCT_ID.to_owned(),
            form_reset_delay_ms: 3_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reads_short_and_long_field_names() -> anyhow::Result<()> {
        let short = r#"{"name":"Aviator X","cat":"Pilot Collection","price":"Price on Request","img":"ax.jpg","link":"ax.html"}"#;
        let long = r#"{"name":"Aviator X","category":"Pilot Collection","price":"Price on Request","image":"ax.jpg","link":"ax.html"}"#;

        let a: ProductSnapshot = serde_json::from_str(short)?;
        let b: ProductSnapshot = serde_json::from_str(long)?;
        assert_eq!(a, b);

        let written = serde_json::to_value(&a)?;
        assert_eq!(written["cat"], "Pilot Collection");
        assert_eq!(written["img"], "ax.jpg");
        assert!(written.get("category").is_none());
        Ok(())
    }

    #[test]
    fn theme_mode_parses_and_toggles() {
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_stored(Some("dark")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("LIGHT")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().as_str(), "dark");
    }

    #[test]
    fn partial_config_keeps_defaults() -> anyhow::Result<()> {
        let cfg: SiteConfig = serde_json::from_str(r#"{"form_reset_delay_ms":500}"#)?;
        assert_eq!(cfg.form_reset_delay_ms, 500);
        assert_eq!(cfg.wishlist_key, DEFAULT_WISHLIST_KEY);
        assert_eq!(cfg.default_product_id, DEFAULT_PRODUCT_ID);
        Ok(())
    }
}
