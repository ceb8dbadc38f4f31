//! Fitness evaluation.
//!
//! A genome scores the total value of its selected items, or 0 if the
//! selection is overweight.
//!
//! # Breach rule
//!
//! Items are scanned in catalog order and weight is accumulated as they are
//! added. As soon as the running weight exceeds the limit the genome scores
//! 0, discarding everything accrued so far. Since all weights are
//! non-negative, this is equivalent to "total selected weight exceeds the
//! limit", but the scan is order-sensitive on purpose: an item late in the
//! catalog that tips the scale zeroes the value of every earlier item.

use crate::catalog::{Catalog, Item};
use crate::error::Result;

use super::genome::Genome;

/// Scores `genome` against `catalog` under `weight_limit`.
///
/// # Errors
/// [`KnapsackError::GenomeCatalogMismatch`](crate::KnapsackError::GenomeCatalogMismatch)
/// if the genome length differs from the catalog length.
///
/// # Example
///
/// ```
/// use u_knapsack::{fitness, Catalog, Item};
///
/// let catalog = Catalog::new(vec![Item::new("a", 10, 5), Item::new("b", 7, 4)]);
/// assert_eq!(fitness(&"11".parse().unwrap(), &catalog, 9).unwrap(), 17);
/// assert_eq!(fitness(&"11".parse().unwrap(), &catalog, 8).unwrap(), 0);
/// ```
pub fn fitness(genome: &Genome, catalog: &Catalog, weight_limit: u64) -> Result<u64> {
    catalog.check_genome(genome)?;

    let mut weight = 0u64;
    let mut value = 0u64;

    for (item, &included) in catalog.iter().zip(genome.bits()) {
        if !included {
            continue;
        }
        weight = match weight.checked_add(item.weight) {
            Some(w) if w <= weight_limit => w,
            _ => return Ok(0),
        };
        value = value.saturating_add(item.value);
    }

    Ok(value)
}

/// A catalog paired with its weight capacity.
///
/// This is the problem definition handed to [`GaRunner`](super::GaRunner).
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    catalog: Catalog,
    capacity: u64,
}

/// The items a genome packs, with their totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packing<'a> {
    pub items: Vec<&'a Item>,
    pub total_value: u64,
    pub total_weight: u64,
}

impl Packing<'_> {
    /// Item names, in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.name.as_str()).collect()
    }
}

impl KnapsackProblem {
    pub fn new(catalog: Catalog, capacity: u64) -> Self {
        Self { catalog, capacity }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Genome length this problem expects.
    pub fn genome_length(&self) -> usize {
        self.catalog.len()
    }

    /// Scores a genome. See [`fitness`].
    pub fn evaluate(&self, genome: &Genome) -> Result<u64> {
        fitness(genome, &self.catalog, self.capacity)
    }

    /// Describes what `genome` packs.
    ///
    /// Totals are the raw sums, so an overweight packing reports its real
    /// weight and value even though it scores 0.
    pub fn pack(&self, genome: &Genome) -> Result<Packing<'_>> {
        let items = self.catalog.selected_items(genome)?;
        let total_value = items.iter().fold(0u64, |acc, i| acc.saturating_add(i.value));
        let total_weight = items.iter().fold(0u64, |acc, i| acc.saturating_add(i.weight));
        Ok(Packing {
            items,
            total_value,
            total_weight,
        })
    }
}
