//! Fixed asset catalog: selectable envelope skins, letter papers and scene
//! backgrounds. The scene only ever consumes the image source and the
//! fallback color; how the catalog is populated is outside the core.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Envelope,
    Paper,
    Background,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetItem {
    pub id: &'static str,
    pub name: &'static str,
    /// Loadable image source (path relative to the asset root).
    pub image: &'static str,
    /// Tint applied under (or instead of) the image.
    pub fallback_color: &'static str,
}

pub const ENVELOPES: &[AssetItem] = &[
    AssetItem {
        id: "env_01",
        name: "Classic Kraft",
        image: "assets/textures/envelopes/envelope_01.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "env_02",
        name: "Blue Motif",
        image: "assets/textures/envelopes/envelope_02.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "env_03",
        name: "Art Paper",
        image: "assets/textures/envelopes/envelope_03.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "env_04",
        name: "Black Floral",
        image: "assets/textures/envelopes/envelope_04.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "env_05",
        name: "Dusty Rose",
        image: "assets/textures/envelopes/envelope_05.jpeg",
        fallback_color: "#ffffff",
    },
];

pub const PAPERS: &[AssetItem] = &[
    AssetItem {
        id: "paper_01",
        name: "Natural",
        image: "assets/textures/papers/paper_01.png",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "paper_02",
        name: "Ruled",
        image: "assets/textures/papers/paper_02.png",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "paper_03",
        name: "Patterned",
        image: "assets/textures/papers/paper_03.jpg",
        fallback_color: "#ffffff",
    },
];

pub const BACKGROUNDS: &[AssetItem] = &[
    AssetItem {
        id: "bg_wood",
        name: "Wooden Desk",
        image: "assets/textures/backgrounds/background_01.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "bg_simple",
        name: "Minimal",
        image: "assets/textures/backgrounds/background_02.jpeg",
        fallback_color: "#ffffff",
    },
    AssetItem {
        id: "bg_dark",
        name: "Night",
        image: "assets/textures/backgrounds/background_03.jpeg",
        fallback_color: "#ffffff",
    },
];

pub fn catalog(kind: AssetKind) -> &'static [AssetItem] {
    match kind {
        AssetKind::Envelope => ENVELOPES,
        AssetKind::Paper => PAPERS,
        AssetKind::Background => BACKGROUNDS,
    }
}
