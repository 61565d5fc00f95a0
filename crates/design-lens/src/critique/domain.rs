use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;

/// Design principle a critique can be requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Principle {
    Alignment,
    Balance,
    ContrastColour,
    Hierarchy,
    Readability,
    Spacing,
}

impl Principle {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Alignment,
            Self::Balance,
            Self::ContrastColour,
            Self::Hierarchy,
            Self::Readability,
            Self::Spacing,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Alignment => "Alignment",
            Self::Balance => "Balance",
            Self::ContrastColour => "Contrast & Colour",
            Self::Hierarchy => "Hierarchy",
            Self::Readability => "Readability",
            Self::Spacing => "Spacing",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Alignment => "alignment",
            Self::Balance => "balance",
            Self::ContrastColour => "contrast_colour",
            Self::Hierarchy => "hierarchy",
            Self::Readability => "readability",
            Self::Spacing => "spacing",
        }
    }

    /// Copy shown while the principle is being scanned.
    pub const fn scan_copy(self) -> ScanCopy {
        match self {
            Self::Alignment => ScanCopy {
                icon: "📐",
                message: "Checking alignment and grid structure...",
                description: "Analyzing how well elements line up",
            },
            Self::Balance => ScanCopy {
                icon: "⚖️",
                message: "Analyzing visual weight distribution...",
                description: "Assessing symmetry and equilibrium",
            },
            Self::ContrastColour => ScanCopy {
                icon: "🎨",
                message: "Analyzing color harmony and contrast...",
                description: "Reviewing color choices and readability",
            },
            Self::Hierarchy => ScanCopy {
                icon: "📊",
                message: "Examining visual hierarchy...",
                description: "Checking the flow of information",
            },
            Self::Readability => ScanCopy {
                icon: "📖",
                message: "Assessing typography and legibility...",
                description: "Analyzing text clarity and spacing",
            },
            Self::Spacing => ScanCopy {
                icon: "📏",
                message: "Measuring whitespace and proximity...",
                description: "Analyzing element spacing and breathing room",
            },
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Principle {
    type Err = UnknownPrinciple;

    /// Accepts the display label ("Contrast & Colour") or the snake_case key, ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|principle| {
                principle.label().eq_ignore_ascii_case(needle)
                    || principle.key().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownPrinciple(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown design principle '{0}'")]
pub struct UnknownPrinciple(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanCopy {
    pub icon: &'static str,
    pub message: &'static str,
    pub description: &'static str,
}

/// Qualitative bucket for a principle, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    High,
    Medium,
    Satisfactory,
    Good,
}

impl SeverityTier {
    pub const fn ordered() -> [Self; 4] {
        [Self::High, Self::Medium, Self::Satisfactory, Self::Good]
    }

    pub const fn score_range(self) -> RangeInclusive<u8> {
        match self {
            Self::High => 0..=39,
            Self::Medium => 40..=59,
            Self::Satisfactory => 60..=79,
            Self::Good => 80..=100,
        }
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => Self::High,
            40..=59 => Self::Medium,
            60..=79 => Self::Satisfactory,
            _ => Self::Good,
        }
    }

    /// High and medium findings feed the shared suggestion list.
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Satisfactory => 2,
            Self::Good => 3,
        }
    }
}

/// Ordered, duplicate-free set of principles in the order they were picked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Principle>", into = "Vec<Principle>")]
pub struct PrincipleSelection(Vec<Principle>);

impl PrincipleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the principle if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, principle: Principle) -> bool {
        if let Some(position) = self.0.iter().position(|entry| *entry == principle) {
            self.0.remove(position);
            false
        } else {
            self.0.push(principle);
            true
        }
    }

    pub fn contains(&self, principle: Principle) -> bool {
        self.0.contains(&principle)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Principle> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Principle] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Length of all principle labels concatenated without separators.
    pub fn joined_len(&self) -> usize {
        self.0.iter().map(|principle| principle.label().len()).sum()
    }
}

impl From<Vec<Principle>> for PrincipleSelection {
    fn from(principles: Vec<Principle>) -> Self {
        principles.into_iter().collect()
    }
}

impl From<PrincipleSelection> for Vec<Principle> {
    fn from(selection: PrincipleSelection) -> Self {
        selection.0
    }
}

impl FromIterator<Principle> for PrincipleSelection {
    fn from_iter<I: IntoIterator<Item = Principle>>(iter: I) -> Self {
        let mut selection = Self::new();
        for principle in iter {
            if !selection.contains(principle) {
                selection.0.push(principle);
            }
        }
        selection
    }
}

/// Raw upload as received from the host, before validation.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: Some(media_type.into()),
            bytes,
        }
    }

    /// Upload without a declared media type; the type is sniffed from magic bytes.
    pub fn undeclared(bytes: Vec<u8>) -> Self {
        Self {
            media_type: None,
            bytes,
        }
    }

    /// Media type recognised from the leading bytes, if any.
    pub fn sniff(&self) -> Option<&'static str> {
        infer::get(&self.bytes).map(|kind| kind.mime_type())
    }

    fn resolve_media_type(&self) -> Option<String> {
        match self.media_type.as_deref().map(str::trim) {
            Some(declared) if !declared.is_empty() => Some(declared.to_string()),
            _ => self.sniff().map(str::to_string),
        }
    }

    /// Accepts any `image/*` media type and rejects everything else.
    pub fn into_payload(self) -> Result<ImagePayload, InputError> {
        let resolved = self.resolve_media_type();
        let media_type = resolved
            .as_deref()
            .and_then(|raw| raw.parse::<mime::Mime>().ok())
            .filter(|parsed| parsed.type_() == mime::IMAGE)
            .ok_or_else(|| InputError::NotAnImage {
                media_type: resolved.unwrap_or_else(|| "unknown".to_string()),
            })?;

        Ok(ImagePayload {
            media_type: media_type.essence_str().to_string(),
            bytes: self.bytes.into(),
        })
    }
}

/// Validated image. Only the length of its data URL form ever feeds the scorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    media_type: String,
    bytes: Arc<[u8]>,
}

impl ImagePayload {
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Character count of `data:<media type>;base64,<payload>` without encoding anything.
    pub fn data_url_len(&self) -> usize {
        "data:".len() + self.media_type.len() + ";base64,".len() + self.bytes.len().div_ceil(3) * 4
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// What a session keeps once the bytes have been handed to the scorer.
    pub fn summary(&self) -> UploadSummary {
        UploadSummary {
            media_type: self.media_type.clone(),
            bytes: self.len(),
        }
    }
}

/// Media type and size of an accepted upload, without its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub media_type: String,
    pub bytes: usize,
}

/// Scoring input assembled at upload time and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub payload: ImagePayload,
    pub selection: PrincipleSelection,
}

impl AnalysisRequest {
    pub fn new(payload: ImagePayload, selection: PrincipleSelection) -> Self {
        Self { payload, selection }
    }
}

/// Rejections surfaced to the user as a blocking notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please select at least one design principle before uploading")]
    NoPrinciplesSelected,
    #[error("Please upload an image file (received {media_type})")]
    NotAnImage { media_type: String },
}
