//! Catalog of movies available as question sources

use super::entities::Movie;
use crate::core::error::DomainError;
use rand::Rng;
use rand::seq::SliceRandom;

/// The in-memory, rating-filtered set of movies (Value Object)
///
/// Built wholesale from a loader response; movies without a rating are
/// dropped on construction so they can never become question sources.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Build a catalog, keeping the original order of rated movies
    pub fn from_movies(movies: impl IntoIterator<Item = Movie>) -> Self {
        Self {
            movies: movies.into_iter().filter(Movie::has_rating).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Pick one movie uniformly at random (with replacement across calls)
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Movie, DomainError> {
        self.movies.choose(rng).ok_or(DomainError::NoMoviesFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_rated_movies_are_filtered() {
        let catalog = Catalog::from_movies(vec![
            Movie::new("a", 8.0),
            Movie::new("b", 0.0),
            Movie::new("c", 5.0),
        ]);

        let ids: Vec<_> = catalog.movies().iter().map(Movie::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_only_unrated_movies_gives_empty_catalog() {
        let catalog = Catalog::from_movies(vec![Movie::new("z", 0.0)]);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_pick_from_empty_catalog_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::default();
        let result = catalog.pick(&mut rng);
        assert_eq!(result, Err(DomainError::NoMoviesFound));
    }

    #[test]
    fn test_pick_never_returns_unrated_movie() {
        let catalog = Catalog::from_movies(vec![
            Movie::new("zero", 0.0),
            Movie::new("one", 1.0),
            Movie::new("nine", 9.0),
        ]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let movie = catalog.pick(&mut rng).unwrap();
            assert_ne!(movie.id(), "zero");
        }
    }

    #[test]
    fn test_pick_is_reproducible_with_seed() {
        let catalog = Catalog::from_movies((1..=10).map(|i| Movie::new(format!("m{i}"), i as f64)));

        let draw = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..5)
                .map(|_| catalog.pick(&mut rng).unwrap().id().to_string())
                .collect::<Vec<_>>()
        };

        assert_eq!(draw(42), draw(42));
    }
}
