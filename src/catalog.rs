//! Item catalog.
//!
//! The catalog is fixed for a run; an item's identity is its index.

use crate::error::{KnapsackError, Result};
use crate::ga::Genome;

/// A selectable item.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: u64, weight: u64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// Ordered list of items a genome selects from.
///
/// # Example
///
/// ```
/// use u_knapsack::{Catalog, Item};
///
/// let catalog = Catalog::new(vec![
///     Item::new("Laptop", 500, 2200),
///     Item::new("Headphones", 150, 160),
/// ]);
/// let genome = "01".parse().unwrap();
/// assert_eq!(catalog.selected_names(&genome).unwrap(), vec!["Headphones"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Fails unless `genome` has exactly one flag per item.
    pub fn check_genome(&self, genome: &Genome) -> Result<()> {
        if genome.len() != self.items.len() {
            return Err(KnapsackError::GenomeCatalogMismatch {
                genome: genome.len(),
                catalog: self.items.len(),
            });
        }
        Ok(())
    }

    /// Items selected by `genome`, in catalog order.
    pub fn selected_items(&self, genome: &Genome) -> Result<Vec<&Item>> {
        self.check_genome(genome)?;
        Ok(genome.selected_indices().map(|i| &self.items[i]).collect())
    }

    /// Names of the items selected by `genome`, in catalog order.
    pub fn selected_names(&self, genome: &Genome) -> Result<Vec<&str>> {
        Ok(self
            .selected_items(genome)?
            .into_iter()
            .map(|item| item.name.as_str())
            .collect())
    }
}

impl From<Vec<Item>> for Catalog {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Item> for Catalog {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
