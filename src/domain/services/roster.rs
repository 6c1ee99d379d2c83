//! Flock queries used by listings and pickers

use crate::domain::entities::Sheep;

/// Case-insensitive substring match on ear tag or breed
pub fn search<'a>(sheep: &'a [Sheep], term: &str) -> Vec<&'a Sheep> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return sheep.iter().collect();
    }
    sheep
        .iter()
        .filter(|s| {
            s.id.to_lowercase().contains(&needle) || s.breed.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn ewes(sheep: &[Sheep]) -> Vec<&Sheep> {
    sheep.iter().filter(|s| s.gender.is_ewe()).collect()
}

pub fn rams(sheep: &[Sheep]) -> Vec<&Sheep> {
    sheep.iter().filter(|s| s.gender.is_ram()).collect()
}

/// Sheep that can still be sold
pub fn saleable(sheep: &[Sheep]) -> Vec<&Sheep> {
    sheep.iter().filter(|s| s.is_in_pen()).collect()
}
