use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Moodboard, Place, Product, Story};
use crate::explore::seed::today_seed;
use crate::explore::shuffle::shuffle_with_seed;

/// Hard bound on interleave steps.
pub const MAX_ITERATIONS: usize = 50;

pub const DEFAULT_TEMPLATE: [ContentCategory; 6] = [
    ContentCategory::Product,
    ContentCategory::Story,
    ContentCategory::Place,
    ContentCategory::Product,
    ContentCategory::Moodboard,
    ContentCategory::Story,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Product,
    Story,
    Place,
    Moodboard,
}

impl ContentCategory {
    /// Enumeration order. Also the order used to pick a substitute when a
    /// template slot's category has run dry.
    pub const ALL: [ContentCategory; 4] = [
        ContentCategory::Product,
        ContentCategory::Story,
        ContentCategory::Place,
        ContentCategory::Moodboard,
    ];

    fn index(self) -> usize {
        match self {
            ContentCategory::Product => 0,
            ContentCategory::Story => 1,
            ContentCategory::Place => 2,
            ContentCategory::Moodboard => 3,
        }
    }

    /// Added to the base seed so the four pools never share a shuffle.
    pub fn seed_offset(self) -> u32 {
        match self {
            ContentCategory::Product => 11,
            ContentCategory::Story => 23,
            ContentCategory::Place => 37,
            ContentCategory::Moodboard => 49,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentCategory::Product => "product",
            ContentCategory::Story => "story",
            ContentCategory::Place => "place",
            ContentCategory::Moodboard => "moodboard",
        }
    }
}

impl fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "product" => Ok(ContentCategory::Product),
            "story" => Ok(ContentCategory::Story),
            "place" => Ok(ContentCategory::Place),
            "moodboard" => Ok(ContentCategory::Moodboard),
            other => Err(format!("Unknown content category: {}", other)),
        }
    }
}

/// Maximum number of items taken from each category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCaps {
    pub product: usize,
    pub story: usize,
    pub place: usize,
    pub moodboard: usize,
}

impl Default for CategoryCaps {
    fn default() -> Self {
        Self {
            product: 4,
            story: 3,
            place: 3,
            moodboard: 1,
        }
    }
}

impl CategoryCaps {
    pub fn get(&self, category: ContentCategory) -> usize {
        match category {
            ContentCategory::Product => self.product,
            ContentCategory::Story => self.story,
            ContentCategory::Place => self.place,
            ContentCategory::Moodboard => self.moodboard,
        }
    }

    /// Replace only the caps that `overrides` sets.
    pub fn with_overrides(self, overrides: &CapOverrides) -> Self {
        Self {
            product: overrides.product.unwrap_or(self.product),
            story: overrides.story.unwrap_or(self.story),
            place: overrides.place.unwrap_or(self.place),
            moodboard: overrides.moodboard.unwrap_or(self.moodboard),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CapOverrides {
    pub product: Option<usize>,
    pub story: Option<usize>,
    pub place: Option<usize>,
    pub moodboard: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct ExploreOptions {
    /// Falls back to today's seed when unset
    pub seed: Option<u32>,
    pub template: Option<Vec<ContentCategory>>,
    pub caps: CapOverrides,
}

/// Already-fetched content, one collection per category.
#[derive(Debug, Clone, Default)]
pub struct ContentPools {
    pub products: Vec<Product>,
    pub stories: Vec<Story>,
    pub places: Vec<Place>,
    pub moodboards: Vec<Moodboard>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum FeedEntry {
    Product(Product),
    Story(Story),
    Place(Place),
    Moodboard(Moodboard),
}

impl FeedEntry {
    pub fn category(&self) -> ContentCategory {
        match self {
            FeedEntry::Product(_) => ContentCategory::Product,
            FeedEntry::Story(_) => ContentCategory::Story,
            FeedEntry::Place(_) => ContentCategory::Place,
            FeedEntry::Moodboard(_) => ContentCategory::Moodboard,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            FeedEntry::Product(p) => &p.id,
            FeedEntry::Story(s) => &s.id,
            FeedEntry::Place(p) => &p.id,
            FeedEntry::Moodboard(m) => &m.id,
        }
    }

    pub fn display_title(&self) -> &str {
        match self {
            FeedEntry::Product(p) => &p.title,
            FeedEntry::Story(s) => &s.title,
            FeedEntry::Place(p) => &p.name,
            FeedEntry::Moodboard(m) => &m.title,
        }
    }
}

/// Shuffle, cap and interleave the pools into one feed.
pub fn compose_feed(pools: &ContentPools, options: &ExploreOptions) -> Vec<FeedEntry> {
    let base_seed = options.seed.unwrap_or_else(|| today_seed().seed);
    let caps = CategoryCaps::default().with_overrides(&options.caps);
    let template: &[ContentCategory] = options.template.as_deref().unwrap_or(&DEFAULT_TEMPLATE);

    compose_with(pools, base_seed, &caps, template)
}

pub(crate) fn compose_with(
    pools: &ContentPools,
    base_seed: u32,
    caps: &CategoryCaps,
    template: &[ContentCategory],
) -> Vec<FeedEntry> {
    let mut queues: [VecDeque<FeedEntry>; 4] = [
        draw(&pools.products, base_seed, ContentCategory::Product, caps, FeedEntry::Product),
        draw(&pools.stories, base_seed, ContentCategory::Story, caps, FeedEntry::Story),
        draw(&pools.places, base_seed, ContentCategory::Place, caps, FeedEntry::Place),
        draw(&pools.moodboards, base_seed, ContentCategory::Moodboard, caps, FeedEntry::Moodboard),
    ];

    let mut feed = Vec::with_capacity(queues.iter().map(VecDeque::len).sum());

    for step in 0..MAX_ITERATIONS {
        let preferred = if template.is_empty() {
            None
        } else {
            Some(template[step % template.len()])
        };

        let category = preferred
            .filter(|c| !queues[c.index()].is_empty())
            .or_else(|| {
                ContentCategory::ALL
                    .into_iter()
                    .find(|c| !queues[c.index()].is_empty())
            });

        let Some(category) = category else {
            break;
        };

        if let Some(entry) = queues[category.index()].pop_front() {
            feed.push(entry);
        }
    }

    feed
}

fn draw<T: Clone>(
    items: &[T],
    base_seed: u32,
    category: ContentCategory,
    caps: &CategoryCaps,
    wrap: fn(T) -> FeedEntry,
) -> VecDeque<FeedEntry> {
    let seed = base_seed.wrapping_add(category.seed_offset());
    shuffle_with_seed(items, seed)
        .into_iter()
        .take(caps.get(category))
        .map(wrap)
        .collect()
}
