use serde::Serialize;

/// A rateable category: the stored key and the label shown to people
#[derive(Debug, Clone)]
pub struct CategoryConfig {
    pub key: &'static str,
    pub display: &'static str,
}

impl CategoryConfig {
    pub fn new(key: &'static str, display: &'static str) -> Self {
        Self { key, display }
    }
}

/// Alternative readings of an ambiguous search term
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Disambiguation {
    pub term: &'static str,
    pub meanings: Vec<&'static str>,
    pub note: &'static str,
}

/// Lookup table of known categories, in display order
#[derive(Debug, Clone)]
pub struct Categories {
    entries: Vec<CategoryConfig>,
}

impl Default for Categories {
    fn default() -> Self {
        Self::new(get_categories())
    }
}

impl Categories {
    pub fn new(entries: Vec<CategoryConfig>) -> Self {
        Self { entries }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|c| c.key == key)
    }

    /// Display label for a key, falling back to the key itself
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.display)
            .unwrap_or(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryConfig> {
        self.entries.iter()
    }
}

/// Get the list of categories items can be filed under
pub fn get_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("food", "🍔 Food & Dining"),
        CategoryConfig::new("restaurants", "🍽️ Restaurants"),
        CategoryConfig::new("recipes", "👩‍🍳 Recipes"),
        CategoryConfig::new("drinks", "🍹 Drinks & Beverages"),
        CategoryConfig::new("entertainment", "🎬 Movies & TV"),
        CategoryConfig::new("music", "🎵 Music"),
        CategoryConfig::new("books", "📚 Books"),
        CategoryConfig::new("games", "🎮 Video Games"),
        CategoryConfig::new("boardgames", "🎲 Board Games"),
        CategoryConfig::new("sports", "⚽ Sports"),
        CategoryConfig::new("fitness", "💪 Fitness & Health"),
        CategoryConfig::new("places", "📍 Places & Travel"),
        CategoryConfig::new("hotels", "🏨 Hotels"),
        CategoryConfig::new("attractions", "🎢 Attractions"),
        CategoryConfig::new("events", "🎉 Events"),
        CategoryConfig::new("technology", "💻 Technology"),
        CategoryConfig::new("software", "🖥️ Software & Apps"),
        CategoryConfig::new("gadgets", "📱 Gadgets"),
        CategoryConfig::new("shopping", "🛒 Shopping"),
        CategoryConfig::new("fashion", "👗 Fashion & Style"),
        CategoryConfig::new("beauty", "💄 Beauty & Cosmetics"),
        CategoryConfig::new("home", "🏠 Home & Garden"),
        CategoryConfig::new("automotive", "🚗 Automotive"),
        CategoryConfig::new("education", "🎓 Education"),
        CategoryConfig::new("courses", "📖 Online Courses"),
        CategoryConfig::new("services", "🔧 Services"),
        CategoryConfig::new("healthcare", "🏥 Healthcare"),
        CategoryConfig::new("finance", "💰 Finance & Banking"),
        CategoryConfig::new("art", "🎨 Art & Culture"),
        CategoryConfig::new("photography", "📸 Photography"),
        CategoryConfig::new("podcasts", "🎙️ Podcasts"),
        CategoryConfig::new("youtube", "📺 YouTube Channels"),
        CategoryConfig::new("websites", "🌐 Websites"),
        CategoryConfig::new("productivity", "⚡ Productivity Tools"),
        CategoryConfig::new("pets", "🐕 Pets & Animals"),
        CategoryConfig::new("other", "🔹 Other"),
    ]
}

/// Get the search terms known to have several unrelated meanings
pub fn get_disambiguations() -> Vec<Disambiguation> {
    vec![
        Disambiguation {
            term: "apple",
            meanings: vec!["🍎 Fruit/Food", "💻 Technology Company", "🎵 Music/Records"],
            note: "Multiple meanings: Consider the fruit, tech company, or music context",
        },
        Disambiguation {
            term: "nike",
            meanings: vec!["👟 Sportswear Brand", "⚽ Athletic Equipment", "👗 Fashion"],
            note: "Sports and fashion brand with various product categories",
        },
        Disambiguation {
            term: "star",
            meanings: vec!["⭐ Rating/Review", "🌟 Celebrity/Entertainment", "🔭 Astronomy/Space"],
            note: "Could refer to ratings, celebrities, or celestial objects",
        },
        Disambiguation {
            term: "amazon",
            meanings: vec![
                "📦 E-commerce/Shopping",
                "📚 Books/Kindle",
                "☁️ Web Services",
                "🌳 Rainforest",
            ],
            note: "Major online marketplace, cloud services, or the rainforest",
        },
        Disambiguation {
            term: "mouse",
            meanings: vec!["🖱️ Computer Hardware", "🐭 Animal/Pet", "🎮 Gaming Peripheral"],
            note: "Computer device, animal, or gaming equipment",
        },
        Disambiguation {
            term: "chrome",
            meanings: vec!["🌐 Web Browser", "🚗 Car Parts/Automotive", "💄 Beauty/Cosmetics"],
            note: "Google browser, car finishing, or beauty products",
        },
        Disambiguation {
            term: "turkey",
            meanings: vec!["🦃 Food/Thanksgiving", "🇹🇷 Country/Travel", "🥩 Meat/Cooking"],
            note: "Holiday food, country destination, or cooking ingredient",
        },
        Disambiguation {
            term: "bridge",
            meanings: vec![
                "🌉 Architecture/Places",
                "🃏 Card Game",
                "🦷 Dental/Healthcare",
                "💻 Software/Technology",
            ],
            note: "Physical structure, card game, dental work, or tech networking",
        },
    ]
}
