//! Preset Maps
//!
//! Closed tables translating host UI labels into renderer preset names.

use std::collections::HashMap;

/// An immutable lookup table from UI label to renderer preset with a
/// documented fallback.
#[derive(Clone, Debug)]
pub struct PresetMap {
    /// Name of the table used in diagnostics.
    name: &'static str,

    /// Preset used when a label is unknown.
    fallback: &'static str,

    /// Entries in declaration order.
    entries: Vec<(&'static str, &'static str)>,

    /// Label to entry index.
    index: HashMap<&'static str, usize>,
}

impl PresetMap {
    /// Create a new preset map.
    ///
    /// * `name`     - Name of the table.
    /// * `fallback` - Preset returned for unknown labels.
    /// * `entries`  - `(label, preset)` pairs.
    pub fn new(
        name: &'static str,
        fallback: &'static str,
        entries: &[(&'static str, &'static str)],
    ) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (label, _))| (*label, i))
            .collect();
        Self {
            name,
            fallback,
            entries: entries.to_vec(),
            index,
        }
    }

    /// Returns the preset for a label if known.
    ///
    /// * `label` - UI label.
    pub fn get(&self, label: &str) -> Option<&'static str> {
        self.index.get(label).map(|&i| self.entries[i].1)
    }

    /// Returns the preset for a label or the fallback with a warning.
    ///
    /// * `label` - UI label.
    pub fn resolve(&self, label: &str) -> &'static str {
        self.get(label).unwrap_or_else(|| {
            warn!(
                "Unknown {} '{}'; using '{}'",
                self.name, label, self.fallback
            );
            self.fallback
        })
    }

    /// Returns the fallback preset.
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Returns the UI labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(label, _)| *label)
    }

    /// Returns true if the table contains the preset value.
    ///
    /// * `preset` - Renderer preset name.
    pub fn has_preset(&self, preset: &str) -> bool {
        self.entries.iter().any(|(_, p)| *p == preset)
    }
}

/// Returns the lookup key of an IOR UI label such as `"Water - 1.3330"`:
/// the first `-` delimited token, trimmed.
///
/// * `label` - UI label.
pub fn ior_key(label: &str) -> &str {
    label.split('-').next().unwrap_or(label).trim()
}

lazy_static! {
    /// Conductor materials.
    pub static ref CONDUCTOR_PRESETS: PresetMap = PresetMap::new(
        "conductor material",
        "Cu",
        &[
            ("100% reflecting mirror", "none"),
            ("Amorphous carbon", "a-C"),
            ("Silver", "Ag"),
            ("Aluminium", "Al"),
            ("Cubic aluminium arsenide", "AlAs"),
            ("Cubic aluminium antimonide", "AlSb"),
            ("Gold", "Au"),
            ("Polycrystalline beryllium", "Be"),
            ("Chromium", "Cr"),
            ("Cubic caesium iodide", "CsI"),
            ("Copper", "Cu"),
            ("Copper (I) oxide", "Cu2O"),
            ("Copper (II) oxide", "CuO"),
            ("Cubic diamond", "d-C"),
            ("Mercury", "Hg"),
            ("Mercury telluride", "HgTe"),
            ("Iridium", "Ir"),
            ("Polycrystalline potassium", "K"),
            ("Lithium", "Li"),
            ("Magnesium oxide", "MgO"),
            ("Molybdenum", "Mo"),
            ("Sodium", "Na_palik"),
            ("Niobium", "Nb"),
            ("Nickel", "Ni_palik"),
            ("Rhodium", "Rh"),
            ("Selenium", "Se"),
            ("Hexagonal silicon carbide", "SiC"),
            ("Tin telluride", "SnTe"),
            ("Tantalum", "Ta"),
            ("Trigonal tellurium", "Te"),
            ("Polycryst. thorium (IV) fluoride", "ThF4"),
            ("Polycrystalline titanium carbide", "TiC"),
            ("Titanium nitride", "TiN"),
            ("Tetragonal titan. dioxide", "TiO2"),
            ("Vanadium carbide", "VC"),
            ("Vanadium", "V"),
            ("Vanadium nitride", "VN"),
            ("Tungsten", "W"),
        ],
    );

    /// Microfacet distributions. `as` is the anisotropic Ashikhmin-Shirley
    /// model which takes separate `alphaU`/`alphaV` roughness.
    pub static ref DISTRIBUTION_PRESETS: PresetMap = PresetMap::new(
        "microfacet distribution",
        "beckmann",
        &[
            ("Beckmann", "beckmann"),
            ("GGX", "ggx"),
            ("Phong", "phong"),
            ("Ashikhmin Shirley", "as"),
        ],
    );

    /// Indices of refraction keyed by `ior_key`.
    pub static ref IOR_PRESETS: PresetMap = PresetMap::new(
        "index of refraction",
        "bk7",
        &[
            ("Vacuum", "vacuum"),
            ("Helium", "helium"),
            ("Hydrogen", "hydrogen"),
            ("Air", "air"),
            ("Carbon Dioxide", "carbon dioxide"),
            ("Water", "water"),
            ("Acetone", "acetone"),
            ("Ethanol", "ethanol"),
            ("Carbon Tetrachloride", "carbon tetrachloride"),
            ("Glycerol", "glycerol"),
            ("Benzene", "benzene"),
            ("Silicone Oil", "silicone oil"),
            ("Bromine", "bromine"),
            ("Water Ice", "water ice"),
            ("Fused Quartz", "fused quartz"),
            ("Pyrex", "pyrex"),
            ("Acrylic Glass", "acrylic glass"),
            ("Polypropylene", "polypropylene"),
            ("BK7", "bk7"),
            ("Sodium Chloride", "sodium chloride"),
            ("Amber", "amber"),
            ("Pet", "pet"),
            ("Diamond", "diamond"),
        ],
    );

    /// Ward model variants.
    pub static ref WARD_PRESETS: PresetMap = PresetMap::new(
        "ward variant",
        "balanced",
        &[
            ("Ward", "ward"),
            ("Ward-Duer", "ward-duer"),
            ("Balanced", "balanced"),
        ],
    );

    /// Measured scattering media.
    pub static ref MEDIUM_PRESETS: PresetMap = PresetMap::new(
        "scattering medium",
        "Ketchup",
        &[
            ("Apple", "Apple"),
            ("Chicken1", "Chicken1"),
            ("Chicken2", "Chicken2"),
            ("Cream", "Cream"),
            ("Ketchup", "Ketchup"),
            ("Marble", "Marble"),
            ("Potato", "Potato"),
            ("Skimmilk", "Skimmilk"),
            ("Skin1", "Skin1"),
            ("Skin2", "Skin2"),
            ("Spectralon", "Spectralon"),
            ("Wholemilk", "Wholemilk"),
            ("Lowfat Milk", "Lowfat Milk"),
            ("Reduced Milk", "Reduced Milk"),
            ("Regular Milk", "Regular Milk"),
            ("Espresso", "Espresso"),
            ("Mint Mocha Coffee", "Mint Mocha Coffee"),
            ("Lowfat Soy Milk", "Lowfat Soy Milk"),
            ("Regular Soy Milk", "Regular Soy Milk"),
            ("Lowfat Chocolate Milk", "Lowfat Chocolate Milk"),
            ("Regular Chocolate Milk", "Regular Chocolate Milk"),
            ("Coke", "Coke"),
            ("Pepsi", "Pepsi"),
            ("Sprite", "Sprite"),
            ("Gatorade", "Gatorade"),
            ("Chardonnay", "Chardonnay"),
            ("White Zinfandel", "White Zinfandel"),
            ("Merlot", "Merlot"),
            ("Budweiser Beer", "Budweiser Beer"),
            ("Coors Light Beer", "Coors Light Beer"),
            ("Clorox", "Clorox"),
            ("Apple Juice", "Apple Juice"),
            ("Cranberry Juice", "Cranberry Juice"),
            ("Grape Juice", "Grape Juice"),
            ("Ruby Grapefruit Juice", "Ruby Grapefruit Juice"),
            ("White Grapefruit Juice", "White Grapefruit Juice"),
            ("Shampoo", "Shampoo"),
            ("Strawberry Shampoo", "Strawberry Shampoo"),
            ("Head & Shoulders Shampoo", "Head & Shoulders Shampoo"),
            ("Lemon Tea Powder", "Lemon Tea Powder"),
            ("Orange Powder", "Orange Powder"),
            ("Pink Lemonade Powder", "Pink Lemonade Powder"),
            ("Cappuccino Powder", "Cappuccino Powder"),
            ("Salt Powder", "Salt Powder"),
            ("Sugar Powder", "Sugar Powder"),
            ("Suisse Mocha Powder", "Suisse Mocha Powder"),
            ("Pacific Ocean Surface Water", "Pacific Ocean Surface Water"),
        ],
    );

    /// Phase functions.
    pub static ref PHASE_PRESETS: PresetMap = PresetMap::new(
        "phase function",
        "isotropic",
        &[
            ("Isotropic", "isotropic"),
            ("Henyey-Greenstein", "hg"),
            ("Rayleigh", "rayleigh"),
            ("Kajiya-Kay", "kkay"),
            ("Micro-Flake", "microflake"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve() {
        assert_eq!(CONDUCTOR_PRESETS.resolve("Gold"), "Au");
        assert_eq!(DISTRIBUTION_PRESETS.resolve("Ashikhmin Shirley"), "as");
        assert_eq!(WARD_PRESETS.resolve("Ward-Duer"), "ward-duer");
        assert_eq!(PHASE_PRESETS.resolve("Henyey-Greenstein"), "hg");
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(CONDUCTOR_PRESETS.resolve("Unobtainium"), "Cu");
        assert_eq!(MEDIUM_PRESETS.resolve(""), MEDIUM_PRESETS.fallback());
        assert_eq!(IOR_PRESETS.get("Kryptonite"), None);
    }

    #[test]
    fn ior_labels_use_first_token() {
        assert_eq!(ior_key("Water - 1.3330"), "Water");
        assert_eq!(ior_key("BK7 - 1.5046"), "BK7");
        assert_eq!(IOR_PRESETS.get(ior_key("Fused Quartz - 1.458")), Some("fused quartz"));
        assert_eq!(ior_key("1.5"), "1.5");
    }

    #[test]
    fn labels_keep_declaration_order() {
        let labels: Vec<&str> = DISTRIBUTION_PRESETS.labels().collect();
        assert_eq!(labels, vec!["Beckmann", "GGX", "Phong", "Ashikhmin Shirley"]);
        assert!(PHASE_PRESETS.has_preset("microflake"));
    }
}
