//! Bundled content shown when the live sources come back empty.

use chrono::Utc;

use crate::domain::{
    Moodboard, Place, PlaceType, Product, ProductCategory, SavedProduct, Story, StoryCategory,
};

fn product(
    id: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    image: &str,
    category: ProductCategory,
    location: &str,
) -> Product {
    let mut product = Product::new(id, title, category);
    product.subtitle = subtitle.to_string();
    product.description = description.to_string();
    product.image = image.to_string();
    product.location = location.to_string();
    product
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "ovos-moles",
            "Ovos Moles de Aveiro",
            "Doçaria conventual",
            "Receita ancestral com gema, açúcar e história servida nas embarcações moliceiras.",
            "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?auto=format&fit=crop&w=900&q=60",
            ProductCategory::Doce,
            "Oficinas da Praça do Peixe",
        ),
        product(
            "raia-molho-pardo",
            "Raia de Molho Pardo",
            "Sabores do Atlântico",
            "Peixe preparado com sangue e especiarias, herança das famílias de pescadores.",
            "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=800&q=60",
            ProductCategory::Mar,
            "Salpoente",
        ),
        product(
            "caldeirada-enguias",
            "Caldeirada de Enguias",
            "Ria e tradição",
            "Enguias da Ria de Aveiro cozinhadas lentamente em caçoilos de barro.",
            "https://images.unsplash.com/photo-1474680091450-41c016972ad9?auto=format&fit=crop&w=800&q=60",
            ProductCategory::Tradicional,
            "O Bairro",
        ),
        product(
            "pao-lo-ovar",
            "Pão de Ló de Ovar",
            "Forno baixo e húmido",
            "Textura cremosa semelhante a um vulcão de gema.",
            "https://images.unsplash.com/photo-1512058564366-18510be2db19?auto=format&fit=crop&w=800&q=60",
            ProductCategory::Doce,
            "M Bakery Aveiro",
        ),
    ]
}

fn story(
    id: &str,
    title: &str,
    date: &str,
    category: StoryCategory,
    image: &str,
    summary: &str,
) -> Story {
    let mut story = Story::new(id, title, category);
    story.date = date.to_string();
    story.image = image.to_string();
    story.summary = summary.to_string();
    story
}

pub fn stories() -> Vec<Story> {
    vec![
        story(
            "mulheres-salinas",
            "Mulheres das Salinas",
            "09 Jan 2026",
            StoryCategory::Cultura,
            "https://images.unsplash.com/photo-1500530855697-b586d89ba3ee?auto=format&fit=crop&w=1200&q=60",
            "O artesanato do sal guiado pelas marnoteiras que mantêm viva a tradição.",
        ),
        story(
            "segredos-moliceiros",
            "Os segredos dos Moliceiros",
            "03 Jan 2026",
            StoryCategory::Historia,
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=1200&q=60",
            "Do transporte de algas aos ícones coloridos que hoje percorrem os canais.",
        ),
        story(
            "rota-acucar",
            "O caminho do açúcar",
            "28 Dez 2025",
            StoryCategory::Historia,
            "https://images.unsplash.com/photo-1504753793650-d4a2b783c15e?auto=format&fit=crop&w=1200&q=60",
            "Como a cana chegou aos conventos e virou símbolo doce de Aveiro.",
        ),
    ]
}

fn place(
    id: &str,
    name: &str,
    description: &str,
    latitude: f64,
    longitude: f64,
    kind: PlaceType,
    distance: &str,
) -> Place {
    let mut place = Place::new(id, name, kind);
    place.description = description.to_string();
    place.latitude = latitude;
    place.longitude = longitude;
    place.distance = distance.to_string();
    place
}

pub fn places() -> Vec<Place> {
    vec![
        place(
            "mercado-peixe",
            "Mercado da Praça do Peixe",
            "Bancas tradicionais com peixe fresco e conversas de madrugada.",
            40.6408,
            -8.6498,
            PlaceType::Loja,
            "0.4 km",
        ),
        place(
            "salpoente",
            "Restaurante Salpoente",
            "Fusão contemporânea dentro de antigos armazéns de sal.",
            40.6415,
            -8.662,
            PlaceType::Restaurante,
            "1.1 km",
        ),
        place(
            "museu-arte-nova",
            "Museu de Arte Nova",
            "Programações sobre cultura, arquitetura e doçaria local.",
            40.6428,
            -8.6536,
            PlaceType::Historico,
            "0.8 km",
        ),
        place(
            "oficina-ovos",
            "Oficina dos Ovos Moles",
            "Workshops de recheio e pintura inspirados nos barcos moliceiros.",
            40.6389,
            -8.6462,
            PlaceType::Loja,
            "0.6 km",
        ),
    ]
}

fn moodboard(
    id: &str,
    title: &str,
    accent_color: &str,
    cover_image: &str,
    description: &str,
    product_ids: &[&str],
) -> Moodboard {
    let catalogue = products();
    let now = Utc::now();
    Moodboard {
        id: id.to_string(),
        title: title.to_string(),
        accent_color: Some(accent_color.to_string()),
        cover_image: Some(cover_image.to_string()),
        description: Some(description.to_string()),
        products: product_ids
            .iter()
            .filter_map(|pid| catalogue.iter().find(|p| p.id == *pid))
            .map(SavedProduct::from)
            .collect(),
        created_at: now,
        updated_at: now,
    }
}

/// Example boards for users who have not created any yet.
pub fn sample_moodboards() -> Vec<Moodboard> {
    vec![
        moodboard(
            "tons-de-sal",
            "Tons de Sal e Nevoeiro",
            "#98CB4F",
            "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?auto=format&fit=crop&w=1200&q=60",
            "Paleta inspirada nas salinas ao amanhecer: texturas minerais, névoa baixa e reflexos prateados sobre a água.",
            &["raia-molho-pardo", "caldeirada-enguias"],
        ),
        moodboard(
            "doces-de-riadeaveiro",
            "Doces da Ria",
            "#EE448D",
            "https://images.unsplash.com/photo-1505253216365-4b835bcfb68d?auto=format&fit=crop&w=1200&q=60",
            "Seleção açucarada para partilhar: gemas, algas caramelizadas e motivos gráficos dos moliceiros.",
            &["ovos-moles", "pao-lo-ovar"],
        ),
        moodboard(
            "caldeiradas",
            "Caldeiradas Fumegantes",
            "#F99D2F",
            "https://images.unsplash.com/photo-1470337458703-46ad1756a187?auto=format&fit=crop&w=1200&q=60",
            "Receitas fumegantes que combinam barro vermelho com especiarias cítricas, perfeitas para noites frias.",
            &["caldeirada-enguias", "raia-molho-pardo"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_collections_are_populated() {
        assert_eq!(products().len(), 4);
        assert_eq!(stories().len(), 3);
        assert_eq!(places().len(), 4);
        assert_eq!(sample_moodboards().len(), 3);
    }

    #[test]
    fn test_sample_moodboards_reference_products() {
        for board in sample_moodboards() {
            assert_eq!(board.count(), 2, "board {}", board.id);
        }
    }
}
