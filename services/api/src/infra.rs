use chrono::NaiveDate;
use design_lens::config::ThemeConfig;
use design_lens::critique::{ImageUpload, Principle};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) theme: Arc<RwLock<ThemeConfig>>,
}

impl AppState {
    pub(crate) fn new(metrics: PrometheusHandle) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            theme: Arc::new(RwLock::new(ThemeConfig::default())),
        }
    }

    pub(crate) fn theme(&self) -> ThemeConfig {
        self.theme
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub(crate) fn parse_principle(raw: &str) -> Result<Principle, String> {
    raw.parse::<Principle>().map_err(|err| {
        let known: Vec<&str> = Principle::ordered()
            .into_iter()
            .map(Principle::label)
            .collect();
        format!("{err}; expected one of: {}", known.join(", "))
    })
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

/// Declared type first, then magic bytes, then the file extension.
pub(crate) fn upload_from_file(
    path: &Path,
    bytes: Vec<u8>,
    declared: Option<String>,
) -> ImageUpload {
    if let Some(media_type) = declared {
        return ImageUpload::new(media_type, bytes);
    }

    let upload = ImageUpload::undeclared(bytes);
    if upload.sniff().is_some() {
        return upload;
    }

    match mime_guess::from_path(path).first() {
        Some(guess) => ImageUpload::new(guess.essence_str(), upload.bytes),
        None => upload,
    }
}
