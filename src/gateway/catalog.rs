//! Curated content sources for Aveiro.

use crate::domain::{PlaceType, ProductCategory, StoryCategory};

#[derive(Debug, Clone)]
pub struct ProductSource {
    pub id: &'static str,
    pub wiki_title: &'static str,
    pub commons_search: &'static [&'static str],
    pub category: ProductCategory,
    pub location: &'static str,
    pub fallback_title: &'static str,
    pub fallback_subtitle: &'static str,
    pub fallback_description: &'static str,
    pub fallback_image: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct StorySource {
    pub id: &'static str,
    pub wiki_title: Option<&'static str>,
    pub commons_search: &'static [&'static str],
    pub category: StoryCategory,
    pub fallback_title: &'static str,
    pub fallback_summary: &'static str,
    pub fallback_image: &'static str,
    pub date_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Overpass order: south,west,north,east
    pub fn to_overpass(&self) -> String {
        format!("{},{},{},{}", self.south, self.west, self.north, self.east)
    }
}

pub const AVEIRO_BOUNDING_BOX: BoundingBox = BoundingBox {
    south: 40.60,
    west: -8.71,
    north: 40.67,
    east: -8.61,
};

pub const PRODUCT_SOURCES: &[ProductSource] = &[
    ProductSource {
        id: "ovos-moles",
        wiki_title: "Ovos_moles",
        commons_search: &["Ovos moles Aveiro", "Aveiro convent sweets"],
        category: ProductCategory::Doce,
        location: "Oficinas da Praça do Peixe",
        fallback_title: "Ovos Moles de Aveiro",
        fallback_subtitle: "Doçaria conventual",
        fallback_description: "Gemas e açúcar envoltos em hóstias inspiradas nas velas moliceiras.",
        fallback_image: "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?auto=format&fit=crop&w=900&q=60",
        tags: &["Património Imaterial", "Convento de Jesus"],
    },
    ProductSource {
        id: "raia-molho-pardo",
        wiki_title: "Raia",
        commons_search: &["Raia preparada Aveiro", "Raia molho pardo"],
        category: ProductCategory::Mar,
        location: "Salpoente",
        fallback_title: "Raia de Molho Pardo",
        fallback_subtitle: "Sabores do Atlântico",
        fallback_description: "Receita de marinheiros com sangue do próprio peixe e vinagre aromático.",
        fallback_image: "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=60",
        tags: &["Ria de Aveiro", "Moliceiros"],
    },
    ProductSource {
        id: "caldeirada-enguias",
        wiki_title: "Caldeirada",
        commons_search: &["Caldeirada enguias Aveiro", "Eel stew Portugal"],
        category: ProductCategory::Tradicional,
        location: "Mercado do Peixe",
        fallback_title: "Caldeirada de Enguias",
        fallback_subtitle: "Ria e tradição",
        fallback_description: "Caçoilos lentos com enguias gordas, batata e especiarias.",
        fallback_image: "https://images.unsplash.com/photo-1474680091450-41c016972ad9?auto=format&fit=crop&w=800&q=60",
        tags: &["Caçoilos de barro", "Bairros piscatórios"],
    },
    ProductSource {
        id: "pao-lo-ovar",
        wiki_title: "Pão-de-ló",
        commons_search: &["Pão de Ló de Ovar", "Ovar sponge cake"],
        category: ProductCategory::Doce,
        location: "Ovar",
        fallback_title: "Pão de Ló de Ovar",
        fallback_subtitle: "Forno baixo e húmido",
        fallback_description: "Interior ainda líquido, casca tostada e viagem curta até Aveiro.",
        fallback_image: "https://images.unsplash.com/photo-1512058564366-18510be2db19?auto=format&fit=crop&w=800&q=60",
        tags: &["Forno de lenha", "Páscoa"],
    },
];

pub const STORY_SOURCES: &[StorySource] = &[
    StorySource {
        id: "mulheres-salinas",
        wiki_title: Some("Marinha_Santiago_da_Fontinha"),
        commons_search: &["Aveiro salt workers", "Marnoteiras Aveiro"],
        category: StoryCategory::Cultura,
        fallback_title: "Mulheres das Salinas",
        fallback_summary: "As marnoteiras que guardam o brilho branco e a memória do sal.",
        fallback_image: "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1200&q=60",
        date_label: "09 Jan 2026",
    },
    StorySource {
        id: "segredos-moliceiros",
        wiki_title: Some("Moliceiro"),
        commons_search: &["Moliceiro boat Aveiro", "Pinturas moliceiro"],
        category: StoryCategory::Historia,
        fallback_title: "Os segredos dos Moliceiros",
        fallback_summary: "Embarcações que passaram do transporte de moliço às narrativas satíricas.",
        fallback_image: "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=1200&q=60",
        date_label: "03 Jan 2026",
    },
    StorySource {
        id: "rota-acucar",
        wiki_title: Some("Ovos_moles"),
        commons_search: &["Doces conventuais Aveiro", "Convent sweets Aveiro"],
        category: StoryCategory::Historia,
        fallback_title: "O caminho do açúcar",
        fallback_summary: "Da cana atlântica aos claustros que moldaram os doces de gema.",
        fallback_image: "https://images.unsplash.com/photo-1504753793650-d4a2b783c15e?auto=format&fit=crop&w=1200&q=60",
        date_label: "28 Dez 2025",
    },
];

/// OSM tag filters per place type, in inference order.
pub fn place_type_filters() -> Vec<(PlaceType, Vec<String>)> {
    let filters = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    vec![
        (
            PlaceType::Loja,
            filters(&["shop=pastry", "shop=convenience", "craft=confectionery"]),
        ),
        (
            PlaceType::Restaurante,
            filters(&["amenity=restaurant", "amenity=cafe"]),
        ),
        (
            PlaceType::Historico,
            filters(&["tourism=museum", "historic=*"]),
        ),
    ]
}

pub fn product_source(id: &str) -> Option<&'static ProductSource> {
    PRODUCT_SOURCES.iter().find(|s| s.id == id)
}

pub fn story_source(id: &str) -> Option<&'static StorySource> {
    STORY_SOURCES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_ids_are_unique() {
        let mut ids: Vec<&str> = PRODUCT_SOURCES.iter().map(|s| s.id).collect();
        ids.extend(STORY_SOURCES.iter().map(|s| s.id));
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_bounding_box_overpass_order() {
        assert_eq!(AVEIRO_BOUNDING_BOX.to_overpass(), "40.6,-8.71,40.67,-8.61");
    }

    #[test]
    fn test_every_place_type_has_filters() {
        let filters = place_type_filters();
        for place_type in PlaceType::ALL {
            assert!(filters.iter().any(|(t, f)| *t == place_type && !f.is_empty()));
        }
    }

    #[test]
    fn test_lookup_by_id() {
        assert_eq!(product_source("ovos-moles").unwrap().category, ProductCategory::Doce);
        assert!(story_source("segredos-moliceiros").is_some());
        assert!(product_source("bacalhau").is_none());
    }
}
