//! Category Mapping Module
//! Fixed mapping from application category ids to the sub-category tokens
//! found in the actors CSV.

use std::collections::HashSet;
use std::sync::OnceLock;

/// Columns of the actors CSV that list sub-category tokens, one per action type.
pub const ACTION_COLUMNS: [&str; 11] = [
    "reparer",
    "donner",
    "trier",
    "echanger",
    "revendre",
    "acheter",
    "rapporter",
    "emprunter",
    "preter",
    "louer",
    "mettreenlocation",
];

/// Category id → CSV sub-category tokens, in output order.
pub const CATEGORY_TABLE: [(&str, &[&str]); 15] = [
    ("petit-electromenager", &["petit_electromenager"]),
    ("medicaments", &["medicaments"]),
    (
        "meubles",
        &[
            "meuble",
            "sieges_elements_d_ameublement",
            "rembourres_d_assise_ou_de_couchage_elements_d_ameublement",
            "literie_elements_d_ameublement",
            "decorations_textiles_elements_d_ameublement",
            "decoration",
        ],
    ),
    ("dechets-alimentaires", &["biodechets"]),
    ("cd-dvd-vhs", &["cd_dvd_et_jeu_video"]),
    ("chaussures", &["chaussures"]),
    ("marteau", &["outil_de_bricolage_et_jardinage"]),
    ("aiguille-medicale", &["dasri"]),
    ("trottinette-electrique", &["jels_mobilite_electrique"]),
    ("vetements", &["vetement", "linge_de_maison"]),
    ("livres", &["livre"]),
    ("poeles-casseroles", &["poele_casserole", "vaisselle"]),
    ("sapin-de-noel", &["biodechets", "dechets_verts"]),
    (
        "brique-alimentaire",
        &["emballage_carton", "autres_emballages_menagers"],
    ),
    (
        "gros-electromenager",
        &[
            "gros_electromenager_hors_refrigerant",
            "gros_electromenager_refrigerant",
        ],
    ),
];

/// One application category and the tokens that select it.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: &'static str,
    pub subcategories: HashSet<&'static str>,
}

impl Category {
    /// True when the actor's token set shares at least one token with this category.
    pub fn matches(&self, tokens: &HashSet<&str>) -> bool {
        tokens.iter().any(|token| self.subcategories.contains(*token))
    }
}

/// Immutable category mapping, built once per process.
#[derive(Debug, Clone)]
pub struct CategoryMapping {
    categories: Vec<Category>,
}

impl CategoryMapping {
    /// Build a mapping from a `(id, tokens)` table.
    pub fn from_table(table: &[(&'static str, &[&'static str])]) -> Self {
        let categories = table
            .iter()
            .map(|&(id, tokens)| Category {
                id,
                subcategories: tokens.iter().copied().collect(),
            })
            .collect();
        Self { categories }
    }

    /// The compiled-in mapping.
    pub fn builtin() -> &'static CategoryMapping {
        static MAPPING: OnceLock<CategoryMapping> = OnceLock::new();
        MAPPING.get_or_init(|| Self::from_table(&CATEGORY_TABLE))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.id)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories selected by a row's token set.
    pub fn matching<'a>(
        &'a self,
        tokens: &'a HashSet<&'a str>,
    ) -> impl Iterator<Item = &'a Category> + 'a {
        self.categories.iter().filter(move |c| c.matches(tokens))
    }
}
