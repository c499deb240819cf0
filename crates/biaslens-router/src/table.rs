//! Static category→provider routing table.
//!
//! Accuracy figures are historical benchmark percentages — configuration
//! data, not computed metrics. The table is built once at startup and never
//! mutated afterwards.

/// Provider used when a category has no table entry.
pub const DEFAULT_PROVIDER: &str = "gpt4";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderEntry {
    pub provider: &'static str,
    pub accuracy: u32,
}

const ROUTING: [(&str, ProviderEntry); 9] = [
    ("gender",               ProviderEntry { provider: "gpt4",   accuracy: 90 }),
    ("race",                 ProviderEntry { provider: "claude", accuracy: 88 }),
    ("disability",           ProviderEntry { provider: "claude", accuracy: 85 }),
    ("socioeconomic_status", ProviderEntry { provider: "gpt4",   accuracy: 87 }),
    ("sexual_orientation",   ProviderEntry { provider: "claude", accuracy: 89 }),
    ("age",                  ProviderEntry { provider: "gpt4",   accuracy: 86 }),
    ("physical_appearance",  ProviderEntry { provider: "gemini", accuracy: 84 }),
    ("nationality",          ProviderEntry { provider: "gemini", accuracy: 85 }),
    ("religion",             ProviderEntry { provider: "claude", accuracy: 87 }),
];

/// Immutable category→provider lookup with an inverse provider→categories view.
#[derive(Debug, Clone)]
pub struct CategoryProviderTable {
    entries: Vec<(&'static str, ProviderEntry)>,
}

impl CategoryProviderTable {
    pub fn new() -> Self {
        Self { entries: ROUTING.to_vec() }
    }

    pub fn get(&self, category: &str) -> Option<ProviderEntry> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, e)| *e)
    }

    /// Inverse view: categories a provider specializes in, in table order.
    pub fn categories_for(&self, provider: &str) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, e)| e.provider == provider)
            .map(|(c, _)| *c)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CategoryProviderTable {
    fn default() -> Self {
        Self::new()
    }
}
