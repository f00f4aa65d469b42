use crate::{matcher, Catalog, Course, Error, Recommendation, Result, SimilarityMatrix};

/// Number of recommendations served unless configured otherwise.
pub const DEFAULT_TOP_K: usize = 6;

/// The recommendation engine: a catalog and its aligned similarity matrix,
/// assembled once at load time and read-only afterwards.
///
/// Every per-request operation is pure bounded computation over the
/// immutable state, so an `Arc<Engine>` can be shared across request
/// handlers without locking.
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    top_k: usize,
}

impl Engine {
    /// Assemble an engine, validating that the catalog and matrix are
    /// index-aligned.
    pub fn new(catalog: Catalog, matrix: SimilarityMatrix) -> Result<Self> {
        if catalog.len() != matrix.dim() {
            return Err(Error::Misaligned {
                courses: catalog.len(),
                dim: matrix.dim(),
            });
        }
        Ok(Self {
            catalog,
            matrix,
            top_k: DEFAULT_TOP_K,
        })
    }

    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    #[must_use]
    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Resolve a free-text query to a course. See [`matcher::resolve`].
    #[inline]
    pub fn resolve(&self, query: &str) -> Option<&Course> {
        matcher::resolve(query, &self.catalog)
    }

    /// Rank all courses against the seed at `index` and return the top-K.
    ///
    /// The row is enumerated in ascending index order and stable-sorted by
    /// score descending, so tied scores keep ascending catalog order. The
    /// first ranked entry is then dropped unconditionally: the seed's own
    /// cell is assumed to hold the row maximum, so rank 0 stands in for
    /// the seed itself. A matrix that puts the maximum elsewhere makes
    /// this drop the top-ranked neighbor instead — the drop is positional,
    /// never an index comparison.
    ///
    /// Any out-of-range access yields an empty result rather than an
    /// error: absence of recommendations is the only failure signal here.
    pub fn recommend_index(&self, index: usize) -> Vec<Recommendation> {
        let Some(row) = self.matrix.row(index) else {
            return Vec::new();
        };

        let mut ranked: Vec<(usize, f32)> = row.iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut recommendations = Vec::with_capacity(self.top_k);
        for &(neighbor, _score) in ranked.iter().skip(1).take(self.top_k) {
            match self.catalog.get(neighbor) {
                Some(course) => recommendations.push(Recommendation::for_course(course)),
                // A row wider than the catalog invalidates the whole
                // ranking, not just this entry.
                None => return Vec::new(),
            }
        }
        recommendations
    }

    /// Rank against a resolved course.
    #[inline]
    pub fn recommend(&self, seed: &Course) -> Vec<Recommendation> {
        self.recommend_index(seed.index)
    }

    /// The full query-to-records operation: resolve, then rank. An
    /// unresolvable query short-circuits to no recommendations.
    pub fn recommend_query(&self, query: &str) -> Vec<Recommendation> {
        match self.resolve(query) {
            Some(course) => self.recommend_index(course.index),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(names: &[&str], rows: Vec<Vec<f32>>) -> Engine {
        let catalog = Catalog::new(
            names
                .iter()
                .map(|n| (n.to_string(), format!("https://e.com/{}", n.to_lowercase())))
                .collect(),
        );
        let matrix = SimilarityMatrix::from_rows(rows).unwrap();
        Engine::new(catalog, matrix).unwrap()
    }

    #[test]
    fn test_misaligned_catalog_rejected() {
        let catalog = Catalog::new(vec![("A".to_string(), "u".to_string())]);
        let matrix = SimilarityMatrix::from_rows(vec![
            vec![1.0, 0.0],
            vec![0.0, 1.0],
        ])
        .unwrap();
        let err = Engine::new(catalog, matrix).unwrap_err();
        assert!(matches!(err, Error::Misaligned { courses: 1, dim: 2 }));
    }

    #[test]
    fn test_recommend_orders_by_score_descending() {
        let engine = engine(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.5, 0.9, 0.2],
                vec![0.5, 1.0, 0.4, 0.1],
                vec![0.9, 0.4, 1.0, 0.3],
                vec![0.2, 0.1, 0.3, 1.0],
            ],
        )
        .with_top_k(2);

        let recs = engine.recommend_index(0);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["C", "B"]);
    }

    #[test]
    fn test_ties_break_by_ascending_index() {
        let engine = engine(
            &["A", "B", "C", "D"],
            vec![
                vec![1.0, 0.5, 0.5, 0.5],
                vec![0.5, 1.0, 0.5, 0.5],
                vec![0.5, 0.5, 1.0, 0.5],
                vec![0.5, 0.5, 0.5, 1.0],
            ],
        );

        let recs = engine.recommend_index(0);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "D"]);
    }

    #[test]
    fn test_single_course_catalog_yields_nothing() {
        let engine = engine(&["A"], vec![vec![1.0]]);
        assert!(engine.recommend_index(0).is_empty());
    }

    #[test]
    fn test_out_of_range_seed_yields_nothing() {
        let engine = engine(&["A", "B"], vec![vec![1.0, 0.2], vec![0.2, 1.0]]);
        assert!(engine.recommend_index(5).is_empty());
    }

    #[test]
    fn test_result_length_is_min_of_k_and_peers() {
        let rows = vec![
            vec![1.0, 0.9, 0.8],
            vec![0.9, 1.0, 0.7],
            vec![0.8, 0.7, 1.0],
        ];
        let engine = engine(&["A", "B", "C"], rows);
        // top_k defaults to 6 but only two peers exist
        assert_eq!(engine.recommend_index(0).len(), 2);
    }

    #[test]
    fn test_rank_zero_dropped_even_when_not_seed() {
        // The seed's own cell is not the row maximum, so the positional
        // drop discards the best neighbor (C) and the seed (A) itself
        // surfaces in the output.
        let engine = engine(
            &["A", "B", "C"],
            vec![
                vec![0.5, 0.1, 0.9],
                vec![0.1, 1.0, 0.2],
                vec![0.9, 0.2, 1.0],
            ],
        );

        let recs = engine.recommend_index(0);
        let names: Vec<&str> = recs.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_recommend_query_short_circuits_on_no_match() {
        let engine = engine(&["A", "B"], vec![vec![1.0, 0.2], vec![0.2, 1.0]]);
        assert!(engine.recommend_query("").is_empty());
        assert!(engine.recommend_query("zzz").is_empty());
        assert_eq!(engine.recommend_query("a").len(), 1);
    }
}
