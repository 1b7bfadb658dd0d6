//! Avatar catalog and the random source used to pick from it.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An externally hosted avatar image and the character it depicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub url: String,
    pub character: String,
}

impl Avatar {
    pub fn new(url: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            character: character.into(),
        }
    }
}

/// The stock avatars used when no catalog is configured.
pub fn default_avatars() -> Vec<Avatar> {
    vec![
        Avatar::new(
            "https://images.unsplash.com/photo-1618336753974-aae8e04506aa?w=100&h=100&fit=crop",
            "AI Assistant",
        ),
        Avatar::new(
            "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100&h=100&fit=crop",
            "Tech Helper",
        ),
        Avatar::new(
            "https://images.unsplash.com/photo-1563241527-3004b7be0ffd?w=100&h=100&fit=crop",
            "Creative AI",
        ),
    ]
}

/// Source of uniform random indices.
pub trait RandomSource: Send {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by the thread-local `rand` generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Non-empty list of avatars threads can be assigned.
#[derive(Debug, Clone)]
pub struct AvatarCatalog {
    avatars: Vec<Avatar>,
}

impl AvatarCatalog {
    /// Builds a catalog, falling back to [`default_avatars`] when `avatars` is empty.
    pub fn new(avatars: Vec<Avatar>) -> Self {
        if avatars.is_empty() {
            tracing::debug!("empty avatar catalog configured, using defaults");
            return Self::default();
        }
        Self { avatars }
    }

    pub fn avatars(&self) -> &[Avatar] {
        &self.avatars
    }

    /// Chooses an avatar URL uniformly at random.
    pub fn pick_url(&self, rng: &mut dyn RandomSource) -> String {
        let index = rng.pick(self.avatars.len()).min(self.avatars.len() - 1);
        self.avatars[index].url.clone()
    }

    /// Character label for a URL previously handed out by this catalog.
    pub fn character_for(&self, url: &str) -> Option<&str> {
        self.avatars
            .iter()
            .find(|avatar| avatar.url == url)
            .map(|avatar| avatar.character.as_str())
    }
}

impl Default for AvatarCatalog {
    fn default() -> Self {
        Self {
            avatars: default_avatars(),
        }
    }
}
