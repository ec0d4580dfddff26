/// Damage variants and the fixed textures that represent them.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block whose texture marks the wear state of a material.
pub const VARIANT_BLOCK: &str = "Stage3";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Worn,
    Damage,
    Destruct,
}

impl VariantKind {
    pub const ALL: [VariantKind; 3] = [Self::Worn, Self::Damage, Self::Destruct];

    /// File name suffix inserted before the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Worn => "_worn",
            Self::Damage => "_damage",
            Self::Destruct => "_destruct",
        }
    }

    /// Engine path of the macro texture placed in [`VARIANT_BLOCK`].
    pub fn texture_path(self) -> &'static str {
        match self {
            Self::Worn => r"dz\characters\data\generic_worn_mc.paa",
            Self::Damage => r"dz\characters\data\generic_damage_mc.paa",
            Self::Destruct => r"dz\characters\data\generic_destruct_mc.paa",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Lower-cased markers that identify files which are already variants.
pub fn variant_markers() -> Vec<String> {
    VariantKind::ALL
        .iter()
        .map(|kind| kind.suffix().to_string())
        .collect()
}
