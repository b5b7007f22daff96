//! Field selection and rendered tokens.
//!
//! Each record carries four renderings, arranged on two axes: script
//! (Arabic or Latin) and layer (grapheme or archigrapheme). A
//! [`Presentation`] keeps one or both values on each axis and lists the kept
//! renderings layer-major:
//!
//! | Script | Layer | Fields |
//! |--------|-------|--------|
//! | Arabic | Archigrapheme | `archigrapheme_ar` |
//! | Arabic | Grapheme | `grapheme_ar` |
//! | Arabic | Both | `grapheme_ar`, `archigrapheme_ar` |
//! | Latin | Archigrapheme | `archigrapheme_lt` |
//! | Latin | Grapheme | `grapheme_lt` |
//! | Latin | Both | `grapheme_lt`, `archigrapheme_lt` |
//! | Both | Archigrapheme | `archigrapheme_ar`, `archigrapheme_lt` |
//! | Both | Grapheme | `grapheme_ar`, `grapheme_lt` |
//! | Both | Both | `grapheme_ar`, `grapheme_lt`, `archigrapheme_ar`, `archigrapheme_lt` |
//!
//! Omitting both scripts or both layers is not representable.

use serde::Serialize;

use crate::error::PresentationError;
use crate::models::{Block, Forms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alphabet {
    Arabic,
    Latin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tier {
    Grapheme,
    Archigrapheme,
}

/// Which script(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Both,
    /// Latin omitted.
    Arabic,
    /// Arabic omitted.
    Latin,
}

impl Script {
    fn alphabets(self) -> &'static [Alphabet] {
        match self {
            Script::Both => &[Alphabet::Arabic, Alphabet::Latin],
            Script::Arabic => &[Alphabet::Arabic],
            Script::Latin => &[Alphabet::Latin],
        }
    }
}

/// Which abstraction layer(s) to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layer {
    #[default]
    Both,
    /// Archigraphemes omitted.
    Grapheme,
    /// Graphemes omitted.
    Archigrapheme,
}

impl Layer {
    fn tiers(self) -> &'static [Tier] {
        match self {
            Layer::Both => &[Tier::Grapheme, Tier::Archigrapheme],
            Layer::Grapheme => &[Tier::Grapheme],
            Layer::Archigrapheme => &[Tier::Archigrapheme],
        }
    }
}

/// Output field configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presentation {
    pub script: Script,
    pub layer: Layer,
}

impl Presentation {
    pub fn new(script: Script, layer: Layer) -> Self {
        Self { script, layer }
    }

    /// Build from the four omission flags of the command line.
    ///
    /// `no_lat` with `no_ara`, or `no_graph` with `no_arch`, would leave
    /// nothing to print and is rejected.
    pub fn from_flags(
        no_lat: bool,
        no_ara: bool,
        no_graph: bool,
        no_arch: bool,
    ) -> Result<Self, PresentationError> {
        let script = match (no_lat, no_ara) {
            (true, true) => return Err(PresentationError::NoScript),
            (true, false) => Script::Arabic,
            (false, true) => Script::Latin,
            (false, false) => Script::Both,
        };
        let layer = match (no_graph, no_arch) {
            (true, true) => return Err(PresentationError::NoLayer),
            (true, false) => Layer::Archigrapheme,
            (false, true) => Layer::Grapheme,
            (false, false) => Layer::Both,
        };
        Ok(Self::new(script, layer))
    }

    /// The selected renderings of `forms`, in output order.
    pub fn select<'f>(&self, forms: &'f Forms) -> Vec<&'f str> {
        let mut fields = Vec::with_capacity(4);
        for &tier in self.layer.tiers() {
            for &alphabet in self.script.alphabets() {
                fields.push(field(forms, tier, alphabet));
            }
        }
        fields
    }

    /// Render a record into its printable token.
    pub fn render(&self, block: &Block) -> Token {
        Token {
            fields: self.select(&block.forms).into_iter().map(str::to_owned).collect(),
            index: block.index.to_string(),
        }
    }
}

fn field(forms: &Forms, tier: Tier, alphabet: Alphabet) -> &str {
    match (tier, alphabet) {
        (Tier::Grapheme, Alphabet::Arabic) => &forms.grapheme_ar,
        (Tier::Grapheme, Alphabet::Latin) => &forms.grapheme_lt,
        (Tier::Archigrapheme, Alphabet::Arabic) => &forms.archigrapheme_ar,
        (Tier::Archigrapheme, Alphabet::Latin) => &forms.archigrapheme_lt,
    }
}

/// One printable output record: selected fields plus the coordinate string.
///
/// Serializes as `{"tok": [...], "ind": "sura:verse:word[:block]"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "tok")]
    pub fields: Vec<String>,
    #[serde(rename = "ind")]
    pub index: String,
}

impl Token {
    /// Fields followed by the coordinate, joined by `sep`.
    pub fn to_line(&self, sep: &str) -> String {
        let mut parts: Vec<&str> = self.fields.iter().map(String::as_str).collect();
        parts.push(&self.index);
        parts.join(sep)
    }
}
