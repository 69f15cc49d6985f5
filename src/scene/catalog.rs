use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{Palette, Rgb8};
use crate::foundation::error::{FrescoError, FrescoResult};

/// Background treatment of a scene.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Profile {
    /// Horizon smoke bands and low fire glows.
    Battle,
    /// Column shafts under a bright dome.
    Ceremony,
    /// Broken walls and cracks.
    Collapse,
    /// Parchment bands and cartography strokes.
    Map,
}

impl Profile {
    /// Every profile.
    pub const ALL: [Profile; 4] = [
        Profile::Battle,
        Profile::Ceremony,
        Profile::Collapse,
        Profile::Map,
    ];

    /// Built-in palette of this profile.
    pub const fn palette(self) -> Palette {
        match self {
            Profile::Battle => Palette {
                top: Rgb8::new(24, 14, 9),
                bottom: Rgb8::new(84, 40, 28),
                highlight: Rgb8::new(209, 121, 82),
                shadow: Rgb8::new(35, 20, 15),
            },
            Profile::Ceremony => Palette {
                top: Rgb8::new(18, 11, 8),
                bottom: Rgb8::new(67, 35, 25),
                highlight: Rgb8::new(196, 128, 89),
                shadow: Rgb8::new(34, 21, 16),
            },
            Profile::Collapse => Palette {
                top: Rgb8::new(14, 10, 8),
                bottom: Rgb8::new(61, 29, 22),
                highlight: Rgb8::new(176, 90, 66),
                shadow: Rgb8::new(29, 18, 14),
            },
            Profile::Map => Palette {
                top: Rgb8::new(32, 18, 12),
                bottom: Rgb8::new(96, 51, 34),
                highlight: Rgb8::new(210, 148, 104),
                shadow: Rgb8::new(45, 26, 19),
            },
        }
    }
}

/// Foreground particle or ornament layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    /// Low warm haze with sparks.
    Embers,
    /// Arc of leaves with small highlights.
    Laurel,
    /// Drifting specks and a ground haze.
    Dust,
    /// Thin bright blade strokes.
    SteelGlint,
    /// Faint scattered stars only.
    None,
}

/// Midground subject drawn over the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum Motif {
    Founding,
    SenateOath,
    BurningCity,
    ElephantLine,
    AlpineMarch,
    Encirclement,
    CarthageRuin,
    RebelCamp,
    RiverCrossing,
    SenateFall,
    ImperialStatue,
    Amphitheatre,
    ImperialMap,
    StatueFrontier,
    FracturedCity,
    BridgeBattle,
    BreachGates,
    ThroneDecline,
}

/// Style tags of one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EventVisual {
    /// Background profile.
    pub profile: Profile,
    /// Foreground accent.
    pub accent: Accent,
    /// Midground motif.
    pub motif: Motif,
}

impl EventVisual {
    /// Bundle the three tags.
    pub const fn new(profile: Profile, accent: Accent, motif: Motif) -> Self {
        Self {
            profile,
            accent,
            motif,
        }
    }
}

const BUILTIN_EVENTS: [(&str, EventVisual); 18] = {
    use Accent as A;
    use Motif as M;
    use Profile as P;
    [
        ("founding-of-rome", EventVisual::new(P::Battle, A::Embers, M::Founding)),
        ("republic-established", EventVisual::new(P::Ceremony, A::Laurel, M::SenateOath)),
        ("gallic-sack", EventVisual::new(P::Collapse, A::Embers, M::BurningCity)),
        ("pyrrhic-war", EventVisual::new(P::Battle, A::SteelGlint, M::ElephantLine)),
        ("hannibal-crosses-alps", EventVisual::new(P::Battle, A::Dust, M::AlpineMarch)),
        ("battle-cannae", EventVisual::new(P::Battle, A::SteelGlint, M::Encirclement)),
        ("carthage-destroyed", EventVisual::new(P::Collapse, A::Embers, M::CarthageRuin)),
        ("spartacus-revolt", EventVisual::new(P::Battle, A::Embers, M::RebelCamp)),
        ("rubicon", EventVisual::new(P::Battle, A::Dust, M::RiverCrossing)),
        ("caesar-assassination", EventVisual::new(P::Collapse, A::SteelGlint, M::SenateFall)),
        ("augustus-princeps", EventVisual::new(P::Ceremony, A::Laurel, M::ImperialStatue)),
        ("colosseum-opens", EventVisual::new(P::Ceremony, A::Laurel, M::Amphitheatre)),
        ("empire-maximum", EventVisual::new(P::Map, A::None, M::ImperialMap)),
        ("marcus-aurelius", EventVisual::new(P::Battle, A::SteelGlint, M::StatueFrontier)),
        ("crisis-third-century", EventVisual::new(P::Collapse, A::Dust, M::FracturedCity)),
        ("milvian-bridge", EventVisual::new(P::Battle, A::Laurel, M::BridgeBattle)),
        ("alaric-sacks-rome", EventVisual::new(P::Collapse, A::Embers, M::BreachGates)),
        ("fall-western-empire", EventVisual::new(P::Collapse, A::Dust, M::ThroneDecline)),
    ]
};

const DEFAULT_SELECTION: [&str; 15] = [
    "republic-established",
    "gallic-sack",
    "pyrrhic-war",
    "hannibal-crosses-alps",
    "battle-cannae",
    "carthage-destroyed",
    "spartacus-revolt",
    "rubicon",
    "colosseum-opens",
    "empire-maximum",
    "marcus-aurelius",
    "crisis-third-century",
    "milvian-bridge",
    "alaric-sacks-rome",
    "fall-western-empire",
];

/// Event id to style mapping, with optional palette overrides.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// Events keyed by id.
    pub events: BTreeMap<String, EventVisual>,
    /// Palette overrides keyed by profile.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub palettes: BTreeMap<Profile, Palette>,
}

impl Catalog {
    /// The built-in 18-event catalog.
    pub fn builtin() -> Self {
        Self {
            events: BUILTIN_EVENTS
                .iter()
                .map(|(id, v)| ((*id).to_string(), *v))
                .collect(),
            palettes: BTreeMap::new(),
        }
    }

    /// Events rendered when no explicit selection is given.
    pub fn default_selection() -> Vec<String> {
        DEFAULT_SELECTION.iter().map(|s| (*s).to_string()).collect()
    }

    /// Parse a JSON catalog document.
    pub fn from_json_reader(r: impl Read) -> FrescoResult<Self> {
        let catalog: Catalog = serde_json::from_reader(r)
            .map_err(|e| FrescoError::serde(format!("invalid catalog json: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a JSON catalog document from disk.
    pub fn from_json_path(path: &Path) -> FrescoResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open catalog '{}'", path.display()))?;
        Self::from_json_reader(std::io::BufReader::new(f))
    }

    /// Reject catalogs that cannot render anything.
    pub fn validate(&self) -> FrescoResult<()> {
        if self.events.is_empty() {
            return Err(FrescoError::validation("catalog has no events"));
        }
        if let Some(id) = self.events.keys().find(|id| id.trim().is_empty()) {
            return Err(FrescoError::validation(format!(
                "catalog event id must be non-empty, got {id:?}"
            )));
        }
        Ok(())
    }

    /// Look up an event.
    pub fn get(&self, id: &str) -> FrescoResult<&EventVisual> {
        self.events
            .get(id)
            .ok_or_else(|| FrescoError::validation(format!("Unknown event id: {id}")))
    }

    /// All event ids in sorted order.
    pub fn ids(&self) -> Vec<String> {
        self.events.keys().cloned().collect()
    }

    /// Palette for `profile`, honoring overrides.
    pub fn palette(&self, profile: Profile) -> Palette {
        self.palettes
            .get(&profile)
            .copied()
            .unwrap_or_else(|| profile.palette())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
