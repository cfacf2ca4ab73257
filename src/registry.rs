//! Aspect keyword registry.
//!
//! Maps each aspect name to its ordered trigger terms (surface forms plus
//! common inflections) and each [`Category`] to the aspects that are
//! considered for it. The default registry is built once and shared
//! read-only for the lifetime of the process.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use crate::category::Category;

/// Process-wide default registry.
pub static DEFAULT_REGISTRY: Lazy<AspectRegistry> = Lazy::new(AspectRegistry::builtin);

#[derive(Debug, Clone, Default)]
pub struct AspectRegistry {
    /// Aspect name → keywords, in registration order.
    aspects: Vec<(String, Vec<String>)>,
    /// Category → allowed aspect names.
    activation: HashMap<Category, HashSet<String>>,
    /// Every registered keyword, for O(1) membership checks.
    keyword_index: HashSet<String>,
    /// Keywords of aspects that at least one category activates.
    activated_index: HashSet<String>,
}

impl AspectRegistry {
    /// An empty registry. Use the `with_*` methods to populate it.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an aspect, or replaces the keywords of an existing one while
    /// keeping its position.
    pub fn with_aspect<I, S>(mut self, name: &str, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keywords: Vec<String> = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();

        let name = name.to_lowercase();
        match self.aspects.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = keywords,
            None => self.aspects.push((name, keywords)),
        }
        self.reindex();
        self
    }

    /// Restricts `category` to the given aspects.
    pub fn with_activation<I, S>(mut self, category: Category, aspects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = aspects.into_iter().map(|a| a.into().to_lowercase()).collect();
        self.activation.insert(category, allowed);
        self.reindex();
        self
    }

    fn reindex(&mut self) {
        self.keyword_index = self
            .aspects
            .iter()
            .flat_map(|(_, keywords)| keywords.iter().cloned())
            .collect();
        let activation = &self.activation;
        self.activated_index = self
            .aspects
            .iter()
            .filter(|(name, _)| activation.values().any(|allowed| allowed.contains(name)))
            .flat_map(|(_, keywords)| keywords.iter().cloned())
            .collect();
    }

    /// Aspects considered for `category`, in registration order. A category
    /// with no activation entry considers every registered aspect.
    pub fn active_aspects(&self, category: Category) -> Vec<(&str, &[String])> {
        let allowed = self.activation.get(&category);
        self.aspects
            .iter()
            .filter(|(name, _)| allowed.map_or(true, |set| set.contains(name)))
            .map(|(name, keywords)| (name.as_str(), keywords.as_slice()))
            .collect()
    }

    pub fn keywords(&self, aspect: &str) -> Option<&[String]> {
        let aspect = aspect.to_lowercase();
        self.aspects
            .iter()
            .find(|(name, _)| *name == aspect)
            .map(|(_, keywords)| keywords.as_slice())
    }

    /// Registration index of an aspect, case-insensitive.
    pub fn position(&self, aspect: &str) -> Option<usize> {
        let aspect = aspect.to_lowercase();
        self.aspects.iter().position(|(name, _)| *name == aspect)
    }

    pub fn aspect_names(&self) -> impl Iterator<Item = &str> {
        self.aspects.iter().map(|(name, _)| name.as_str())
    }

    /// True if `word` is a trigger term of any registered aspect (active or not).
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keyword_index.contains(word)
    }

    /// True if `word` belongs to an aspect that `category` considers, or to
    /// one that some other category activates. Keywords of aspects no
    /// category activates are not scoped.
    pub fn is_scoped_keyword(&self, word: &str, category: Category) -> bool {
        if self.activation.contains_key(&category) {
            self.activated_index.contains(word)
        } else {
            self.keyword_index.contains(word)
        }
    }

    /// Single-word keywords, used as the lemma vocabulary.
    pub fn single_word_keywords(&self) -> impl Iterator<Item = &str> {
        self.keyword_index
            .iter()
            .filter(|k| !k.contains(' '))
            .map(String::as_str)
    }

    fn builtin() -> Self {
        Self::new()
            .with_aspect(
                "battery",
                [
                    "battery", "batteries", "charge", "charges", "charging", "charged",
                    "backup", "power", "mah", "juice", "drain", "draining", "life",
                ],
            )
            .with_aspect(
                "display",
                [
                    "display", "displays", "screen", "screens", "brightness", "bright",
                    "touch", "resolution", "amoled", "lcd", "oled", "refresh", "panel",
                ],
            )
            .with_aspect(
                "performance",
                [
                    "performance", "perform", "performs", "speed", "fast", "faster",
                    "slow", "slower", "lag", "lags", "lagging", "laggy", "processor",
                    "ram", "smooth", "smoothly", "multitask", "multitasking", "hang", "hangs",
                ],
            )
            .with_aspect(
                "design",
                [
                    "design", "designed", "look", "looks", "looking", "build", "built",
                    "quality", "premium", "body", "finish", "finishing", "aesthetic",
                    "aesthetics", "appearance", "sleek",
                ],
            )
            .with_aspect(
                "camera",
                [
                    "camera", "cameras", "photo", "photos", "picture", "pictures", "pic",
                    "video", "videos", "selfie", "selfies", "lens", "megapixel", "mp",
                    "clarity", "zoom", "zooming", "shot", "shots",
                ],
            )
            .with_aspect(
                "sound",
                [
                    "sound", "sounds", "audio", "speaker", "speakers", "music", "volume",
                    "loud", "loudness", "headphone", "headphones", "bass", "treble", "clarity",
                ],
            )
            .with_aspect(
                "price",
                [
                    "price", "prices", "priced", "value", "worth", "money", "expensive",
                    "cheap", "cheaper", "affordable", "cost", "costs", "costly", "vfm",
                    "overpriced", "budget",
                ],
            )
            .with_aspect(
                "software",
                [
                    "software", "ui", "update", "updates", "updated", "android", "ios",
                    "interface", "app", "apps", "system", "bloatware", "os",
                ],
            )
            .with_aspect(
                "heating",
                [
                    "heat", "heats", "heated", "heating", "warm", "warmer", "hot",
                    "hotter", "temperature", "thermal", "overheat", "overheating",
                ],
            )
            .with_aspect(
                "durability",
                [
                    "durable", "durability", "lasting", "last", "lasts", "sturdy",
                    "fragile", "break", "breaks", "broken", "scratch", "scratches",
                    "scratched",
                ],
            )
            .with_aspect(
                "delivery",
                [
                    "delivery", "delivered", "shipping", "shipped", "packaging",
                    "package", "packed", "box", "boxed", "received", "receive",
                ],
            )
            .with_aspect(
                "service",
                [
                    "service", "services", "support", "warranty", "replacement",
                    "replace", "customer", "care", "helpline",
                ],
            )
            // Appliance-specific aspects.
            .with_aspect(
                "cooling",
                ["cool", "cooling", "chill", "chilling", "cold", "temperature", "hot room", "heat wave"],
            )
            .with_aspect(
                "power_consumption",
                ["power", "electricity", "units", "consumption", "energy", "efficient", "inverter", "star rating"],
            )
            .with_aspect(
                "noise",
                ["noise", "noisy", "silent", "quiet", "sound", "humming", "vibration"],
            )
            .with_aspect(
                "installation",
                [
                    "install", "installation", "installed", "technician", "fitting",
                    "mounting", "pipes", "drain", "outdoor unit",
                ],
            )
            .with_aspect(
                "remote",
                ["remote", "remote control", "buttons", "display panel", "led panel"],
            )
            .with_aspect(
                "airflow",
                ["airflow", "swing", "throw", "vent", "air throw", "fan speed"],
            )
            .with_aspect(
                "compressor",
                ["compressor", "coolant", "gas", "refrigerant", "condenser", "evaporator"],
            )
            .with_activation(
                Category::Mobile,
                [
                    "battery", "display", "performance", "design", "camera", "sound",
                    "price", "software", "heating", "durability", "delivery", "service",
                ],
            )
            .with_activation(
                Category::Laptop,
                [
                    "battery", "display", "performance", "design", "sound", "price",
                    "software", "heating", "durability", "delivery", "service",
                ],
            )
            .with_activation(
                Category::Television,
                ["display", "sound", "price", "design", "durability", "delivery", "service"],
            )
            .with_activation(
                Category::Audio,
                ["sound", "price", "design", "durability", "delivery", "service"],
            )
            .with_activation(
                Category::Footwear,
                ["price", "design", "durability", "delivery", "service"],
            )
            .with_activation(
                Category::Fashion,
                ["price", "design", "durability", "delivery", "service"],
            )
            .with_activation(
                Category::HomeAppliance,
                [
                    "cooling", "power_consumption", "noise", "installation", "service",
                    "durability", "price", "design", "delivery",
                ],
            )
            .with_activation(
                Category::General,
                ["price", "design", "durability", "delivery", "service"],
            )
    }
}
