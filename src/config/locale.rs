use std::fmt;

/// `language[_COUNTRY[_VARIANT]]`, e.g. `ru_RU`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    pub language: String,
    pub country: String,
    pub variant: String,
}

impl Locale {
    pub fn us() -> Self {
        Self {
            language: "en".to_string(),
            country: "US".to_string(),
            variant: String::new(),
        }
    }

    /// Parse a locale definition; an empty language falls back to `en_US`.
    pub fn resolve(definition: &str) -> Self {
        let mut parts = definition.trim().split('_');
        let language = parts.next().unwrap_or_default().to_lowercase();
        if language.is_empty() {
            return Self::us();
        }
        let country = parts.next().unwrap_or_default().to_uppercase();
        let variant = parts.next().unwrap_or_default().to_string();

        Self {
            language,
            country,
            variant,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::us()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.language)?;
        if !self.country.is_empty() {
            write!(f, "_{}", self.country)?;
        }
        if !self.variant.is_empty() {
            write!(f, "_{}", self.variant)?;
        }
        Ok(())
    }
}
