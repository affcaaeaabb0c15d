//! Draw-without-replacement pool of colors

use crate::core::Color;
use rand::Rng;

/// Colors known to be in the secret but not where they were guessed
///
/// Each draw removes a uniformly chosen index, so a pool of `n` colors yields
/// at most `n` draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPool {
    colors: Vec<Color>,
}

impl ColorPool {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, color: Color) {
        self.colors.push(color);
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Remove and return a random color, or `None` once exhausted
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Color> {
        if self.colors.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.colors.len());
        Some(self.colors.swap_remove(index))
    }
}

impl FromIterator<Color> for ColorPool {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_pool_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = ColorPool::new();
        assert!(pool.is_empty());
        assert_eq!(pool.draw(&mut rng), None);
    }

    #[test]
    fn draws_each_entry_exactly_once() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool: ColorPool = [Color::Red, Color::Red, Color::Blue].into_iter().collect();
        assert_eq!(pool.len(), 3);

        let mut drawn = Vec::new();
        while let Some(color) = pool.draw(&mut rng) {
            drawn.push(color);
        }
        drawn.sort();

        assert_eq!(drawn, vec![Color::Red, Color::Red, Color::Blue]);
        assert!(pool.is_empty());
    }

    #[test]
    fn draw_order_varies_with_seed() {
        let colors = [Color::Red, Color::Green, Color::Blue, Color::Yellow];
        let orders: Vec<Vec<Color>> = (0..16)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                let mut pool: ColorPool = colors.into_iter().collect();
                std::iter::from_fn(|| pool.draw(&mut rng)).collect()
            })
            .collect();
        assert!(orders.iter().any(|order| order != &orders[0]));
    }
}
