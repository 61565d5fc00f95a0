use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Look and copy a host can override without touching the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub background_color: String,
    pub surface_color: String,
    pub text_color: String,
    pub primary_action: String,
    pub secondary_action: String,
    pub logo_url: String,
    pub font_family: String,
    pub font_size: u32,
    pub app_title: String,
    pub upload_button_text: String,
    pub footer_text: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: "#F7F8FA".to_string(),
            surface_color: "#C9EEF5".to_string(),
            text_color: "#2d3748".to_string(),
            primary_action: "#A6E88B".to_string(),
            secondary_action: "#C9EEF5".to_string(),
            logo_url: "https://i.ibb.co/kYkxhTd/Untitled-design-5.png".to_string(),
            font_family: "Space Grotesk".to_string(),
            font_size: 16,
            app_title: "DesignLens".to_string(),
            upload_button_text: "Click Here to Upload Design".to_string(),
            footer_text: "AI analyzes your design based on design principles".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Merges host overrides and returns the keys that were applied.
    ///
    /// Unknown keys are skipped silently; known keys with the wrong JSON type keep their
    /// current value.
    pub fn apply(&mut self, overrides: &Map<String, Value>) -> Vec<&'static str> {
        let mut applied = Vec::new();

        for (key, value) in overrides {
            let Some((name, accepted)) = self.assign(key, value) else {
                continue;
            };
            if accepted {
                applied.push(name);
            } else {
                warn!(key = name, value = %value, "ignoring theme override with unexpected type");
            }
        }

        applied
    }

    fn assign(&mut self, key: &str, value: &Value) -> Option<(&'static str, bool)> {
        let (name, slot) = match key {
            "background_color" => ("background_color", &mut self.background_color),
            "surface_color" => ("surface_color", &mut self.surface_color),
            "text_color" => ("text_color", &mut self.text_color),
            "primary_action" => ("primary_action", &mut self.primary_action),
            "secondary_action" => ("secondary_action", &mut self.secondary_action),
            "logo_url" => ("logo_url", &mut self.logo_url),
            "font_family" => ("font_family", &mut self.font_family),
            "app_title" => ("app_title", &mut self.app_title),
            "upload_button_text" => ("upload_button_text", &mut self.upload_button_text),
            "footer_text" => ("footer_text", &mut self.footer_text),
            "font_size" => {
                let size = value
                    .as_u64()
                    .and_then(|raw| u32::try_from(raw).ok())
                    .filter(|size| *size > 0);
                if let Some(size) = size {
                    self.font_size = size;
                }
                return Some(("font_size", size.is_some()));
            }
            _ => return None,
        };

        match value.as_str() {
            Some(text) => {
                *slot = text.to_string();
                Some((name, true))
            }
            None => Some((name, false)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn recognised_keys_replace_defaults() {
        let mut theme = ThemeConfig::default();
        let mut applied = theme.apply(&overrides(json!({
            "app_title": "Critique Desk",
            "font_size": 18,
        })));
        applied.sort_unstable();

        assert_eq!(applied, vec!["app_title", "font_size"]);
        assert_eq!(theme.app_title, "Critique Desk");
        assert_eq!(theme.font_size, 18);
        assert_eq!(theme.background_color, "#F7F8FA");
    }

    #[test]
    fn unknown_and_mistyped_keys_are_ignored() {
        let mut theme = ThemeConfig::default();
        let applied = theme.apply(&overrides(json!({
            "sparkles": true,
            "text_color": 42,
            "font_size": "large",
        })));

        assert!(applied.is_empty());
        assert_eq!(theme, ThemeConfig::default());
    }
}
