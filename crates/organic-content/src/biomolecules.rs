//! Biomolecule recipes and monomer definitions.
//!
//! A recipe lists the element amounts consumed when a macromolecule is
//! assembled, plus its health reward and energy cost. Monomers are the
//! smaller units synthesized along the way. Only non-zero element
//! requirements are listed.

use organic_types::{Difficulty, Element, MoleculeFamily};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Macromolecule recipes
// ---------------------------------------------------------------------------

/// A static macromolecule recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomoleculeRecipe {
    /// Stable identifier.
    pub id: &'static str,
    /// English name.
    pub name: &'static str,
    /// Traditional Chinese name shown in the client.
    pub chinese_name: &'static str,
    /// Biological family.
    pub family: MoleculeFamily,
    /// Short description.
    pub description: &'static str,
    /// Display formula.
    pub formula: &'static str,
    /// Element amounts consumed on synthesis.
    pub requirements: &'static [(Element, u32)],
    /// Primary color.
    pub color: &'static str,
    /// Glow color.
    pub glow_color: &'static str,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Nominal score value shown in the recipe card.
    pub score_reward: u64,
    /// Health restored on synthesis.
    pub health_reward: u32,
    /// Energy spent on synthesis.
    pub energy_cost: u32,
    /// Display icon.
    pub icon: &'static str,
}

impl BiomoleculeRecipe {
    /// Amount of `element` this recipe consumes.
    pub fn required(&self, element: Element) -> u32 {
        self.requirements
            .iter()
            .find(|(e, _)| *e == element)
            .map_or(0, |(_, amount)| *amount)
    }
}

/// Simple sugar; the cell's main energy source.
pub const GLUCOSE: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "glucose",
    name: "Glucose",
    chinese_name: "葡萄糖",
    family: MoleculeFamily::Carbohydrate,
    description: "A simple sugar and the main fuel for cellular respiration",
    formula: "C₆H₁₂O₆",
    requirements: &[(Element::Carbon, 6), (Element::Hydrogen, 12), (Element::Oxygen, 6)],
    color: "#06b6d4",
    glow_color: "rgba(6, 182, 212, 0.5)",
    difficulty: Difficulty::Easy,
    score_reward: 10,
    health_reward: 5,
    energy_cost: 5,
    icon: "🧬",
};

/// Amino-acid chain joined by peptide bonds.
pub const PROTEIN: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "protein",
    name: "Protein",
    chinese_name: "蛋白質",
    family: MoleculeFamily::Protein,
    description: "Amino acids linked by peptide bonds",
    formula: "(C₅H₉NO₂)ₙ",
    requirements: &[
        (Element::Carbon, 5),
        (Element::Hydrogen, 9),
        (Element::Oxygen, 2),
        (Element::Nitrogen, 1),
    ],
    color: "#a855f7",
    glow_color: "rgba(168, 85, 247, 0.5)",
    difficulty: Difficulty::Easy,
    score_reward: 50,
    health_reward: 15,
    energy_cost: 10,
    icon: "🧬",
};

/// Double-helix carrier of genetic information.
pub const DNA: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "dna",
    name: "DNA",
    chinese_name: "脫氧核糖核酸",
    family: MoleculeFamily::Dna,
    description: "The double-helix molecule that stores genetic information",
    formula: "(C₁₀H₁₂N₄O₆P)ₙ",
    requirements: &[
        (Element::Carbon, 10),
        (Element::Hydrogen, 12),
        (Element::Oxygen, 6),
        (Element::Nitrogen, 4),
        (Element::Phosphorus, 1),
    ],
    color: "#06b6d4",
    glow_color: "rgba(6, 182, 212, 0.5)",
    difficulty: Difficulty::Hard,
    score_reward: 100,
    health_reward: 20,
    energy_cost: 20,
    icon: "🧬",
};

/// Single-stranded nucleic acid.
pub const RNA: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "rna",
    name: "RNA",
    chinese_name: "核糖核酸",
    family: MoleculeFamily::Dna,
    description: "Single-stranded nucleic acid used in transcription and translation",
    formula: "(C₁₀H₁₂N₄O₇P)ₙ",
    requirements: &[
        (Element::Carbon, 10),
        (Element::Hydrogen, 12),
        (Element::Oxygen, 7),
        (Element::Nitrogen, 4),
        (Element::Phosphorus, 1),
    ],
    color: "#ef4444",
    glow_color: "rgba(239, 68, 68, 0.5)",
    difficulty: Difficulty::Medium,
    score_reward: 60,
    health_reward: 12,
    energy_cost: 12,
    icon: "🧬",
};

/// Glycerol and fatty acids.
pub const LIPID: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "lipid",
    name: "Lipid",
    chinese_name: "脂肪",
    family: MoleculeFamily::Lipid,
    description: "Glycerol and fatty acids, used for energy storage and membranes",
    formula: "C₅₅H₁₀₄O₆",
    requirements: &[(Element::Carbon, 55), (Element::Hydrogen, 104), (Element::Oxygen, 6)],
    color: "#f59e0b",
    glow_color: "rgba(245, 158, 11, 0.5)",
    difficulty: Difficulty::Medium,
    score_reward: 75,
    health_reward: 10,
    energy_cost: 15,
    icon: "🫧",
};

/// Glucose polymer used for plant energy storage.
pub const STARCH: BiomoleculeRecipe = BiomoleculeRecipe {
    id: "starch",
    name: "Starch",
    chinese_name: "澱粉",
    family: MoleculeFamily::Carbohydrate,
    description: "A glucose polymer and the main energy store of plants",
    formula: "(C₆H₁₀O₅)ₙ",
    requirements: &[(Element::Carbon, 6), (Element::Hydrogen, 10), (Element::Oxygen, 5)],
    color: "#84cc16",
    glow_color: "rgba(132, 204, 22, 0.5)",
    difficulty: Difficulty::Easy,
    score_reward: 40,
    health_reward: 12,
    energy_cost: 8,
    icon: "🌾",
};

/// Every recipe in selector order.
pub const ALL_BIOMOLECULES: &[BiomoleculeRecipe] = &[GLUCOSE, PROTEIN, DNA, RNA, LIPID, STARCH];

/// Look up a recipe by ID.
pub fn recipe_by_id(id: &str) -> Option<&'static BiomoleculeRecipe> {
    ALL_BIOMOLECULES.iter().find(|r| r.id == id)
}

/// Recipes of a given difficulty, in selector order.
pub fn recipes_by_difficulty(difficulty: Difficulty) -> Vec<&'static BiomoleculeRecipe> {
    ALL_BIOMOLECULES
        .iter()
        .filter(|r| r.difficulty == difficulty)
        .collect()
}

/// Recipes of a given family, in selector order.
pub fn recipes_by_family(family: MoleculeFamily) -> Vec<&'static BiomoleculeRecipe> {
    ALL_BIOMOLECULES
        .iter()
        .filter(|r| r.family == family)
        .collect()
}

// ---------------------------------------------------------------------------
// Monomers
// ---------------------------------------------------------------------------

/// A static monomer definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonomerDefinition {
    /// Stable identifier.
    pub id: &'static str,
    /// English name.
    pub name: &'static str,
    /// Display formula.
    pub formula: &'static str,
    /// Family of the polymers this monomer builds.
    pub family: MoleculeFamily,
    /// Element amounts consumed on synthesis.
    pub requirements: &'static [(Element, u32)],
    /// Display color.
    pub color: &'static str,
}

/// Sugar monomer.
pub const MONOSACCHARIDE: MonomerDefinition = MonomerDefinition {
    id: "monosaccharide",
    name: "Monosaccharide",
    formula: "C₆H₁₂O₆",
    family: MoleculeFamily::Carbohydrate,
    requirements: &[(Element::Carbon, 6), (Element::Hydrogen, 12), (Element::Oxygen, 6)],
    color: "#06b6d4",
};

/// Protein monomer (glycine).
pub const AMINO_ACID: MonomerDefinition = MonomerDefinition {
    id: "amino_acid",
    name: "Amino Acid",
    formula: "C₂H₅NO₂",
    family: MoleculeFamily::Protein,
    requirements: &[
        (Element::Carbon, 2),
        (Element::Hydrogen, 5),
        (Element::Oxygen, 2),
        (Element::Nitrogen, 1),
    ],
    color: "#a855f7",
};

/// Nucleic acid monomer.
pub const NUCLEOTIDE: MonomerDefinition = MonomerDefinition {
    id: "nucleotide",
    name: "Nucleotide",
    formula: "C₅H₁₀O₄NP",
    family: MoleculeFamily::Dna,
    requirements: &[
        (Element::Carbon, 5),
        (Element::Hydrogen, 10),
        (Element::Oxygen, 4),
        (Element::Nitrogen, 1),
        (Element::Phosphorus, 1),
    ],
    color: "#ef4444",
};

/// Lipid monomer (a short fatty acid).
pub const FATTY_ACID: MonomerDefinition = MonomerDefinition {
    id: "fatty_acid",
    name: "Fatty Acid",
    formula: "C₄H₈O₂",
    family: MoleculeFamily::Lipid,
    requirements: &[(Element::Carbon, 4), (Element::Hydrogen, 8), (Element::Oxygen, 2)],
    color: "#f59e0b",
};

/// Every monomer definition.
pub const ALL_MONOMERS: &[MonomerDefinition] = &[MONOSACCHARIDE, AMINO_ACID, NUCLEOTIDE, FATTY_ACID];

/// Look up a monomer by ID.
pub fn monomer_by_id(id: &str) -> Option<&'static MonomerDefinition> {
    ALL_MONOMERS.iter().find(|m| m.id == id)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn recipe_ids_are_unique() {
        let recipe_ids: BTreeSet<&str> = ALL_BIOMOLECULES.iter().map(|r| r.id).collect();
        let monomer_ids: BTreeSet<&str> = ALL_MONOMERS.iter().map(|m| m.id).collect();
        assert_eq!(recipe_ids.len(), ALL_BIOMOLECULES.len());
        assert_eq!(monomer_ids.len(), ALL_MONOMERS.len());
        assert!(recipe_ids.is_disjoint(&monomer_ids));
    }

    #[test]
    fn requirements_have_no_zero_entries() {
        for recipe in ALL_BIOMOLECULES {
            assert!(recipe.requirements.iter().all(|(_, amount)| *amount > 0));
        }
        for monomer in ALL_MONOMERS {
            assert!(monomer.requirements.iter().all(|(_, amount)| *amount > 0));
        }
    }

    #[test]
    fn glucose_and_dna_costs() {
        assert_eq!(GLUCOSE.required(Element::Carbon), 6);
        assert_eq!(GLUCOSE.required(Element::Nitrogen), 0);
        assert_eq!(DNA.required(Element::Nitrogen), 4);
        assert_eq!(DNA.required(Element::Phosphorus), 1);
    }

    #[test]
    fn grouping_by_difficulty_and_family() {
        let easy: Vec<&str> = recipes_by_difficulty(Difficulty::Easy)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(easy, vec!["glucose", "protein", "starch"]);

        let nucleic: Vec<&str> = recipes_by_family(MoleculeFamily::Dna)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(nucleic, vec!["dna", "rna"]);
    }

    #[test]
    fn lookups() {
        assert_eq!(recipe_by_id("lipid").map(|r| r.energy_cost), Some(15));
        assert!(recipe_by_id("cellulose").is_none());
        assert_eq!(monomer_by_id("nucleotide").map(|m| m.family), Some(MoleculeFamily::Dna));
    }
}
