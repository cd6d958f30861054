use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Doce,
    Mar,
    Tradicional,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: String,
    pub category: ProductCategory,
    pub location: String,
    pub source_url: Option<String>,
    pub image_attribution: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: ProductCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: String::new(),
            description: String::new(),
            image: String::new(),
            category,
            location: String::new(),
            source_url: None,
            image_attribution: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryCategory {
    Historia,
    Cultura,
    Natureza,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    /// Free-form publication label, e.g. "09 Jan 2026"
    pub date: String,
    pub category: StoryCategory,
    pub image: String,
    pub summary: String,
    pub source_url: Option<String>,
    pub media_attribution: Option<String>,
}

impl Story {
    pub fn new(id: impl Into<String>, title: impl Into<String>, category: StoryCategory) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date: String::new(),
            category,
            image: String::new(),
            summary: String::new(),
            source_url: None,
            media_attribution: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Loja,
    Restaurante,
    Historico,
}

impl PlaceType {
    pub const ALL: [PlaceType; 3] = [PlaceType::Loja, PlaceType::Restaurante, PlaceType::Historico];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Loja => "loja",
            PlaceType::Restaurante => "restaurante",
            PlaceType::Historico => "historico",
        }
    }

    /// Description used when the geodata carries none.
    pub fn default_description(&self) -> &'static str {
        match self {
            PlaceType::Loja => "Lojas e oficinas típicas da região",
            PlaceType::Restaurante => "Restaurantes e casas de caldeirada",
            PlaceType::Historico => "Património e espaços culturais",
        }
    }
}

impl std::str::FromStr for PlaceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "loja" => Ok(PlaceType::Loja),
            "restaurante" => Ok(PlaceType::Restaurante),
            "historico" => Ok(PlaceType::Historico),
            other => Err(format!("Unknown place type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "type")]
    pub kind: PlaceType,
    pub distance: String,
    pub address: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

impl Place {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: PlaceType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: kind.default_description().to_string(),
            latitude: 0.0,
            longitude: 0.0,
            kind,
            distance: "—".to_string(),
            address: None,
            tags: Vec::new(),
            source_url: None,
        }
    }
}
