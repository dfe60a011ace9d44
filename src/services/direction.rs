use crate::core::DirectionRanker;
use crate::models::{Direction, DirectionOptions, InputLocation};
use crate::services::search::{PharmacySearch, SearchError};

/// Finds the nearest pharmacies to an input point
///
/// The candidate source is handed in by the caller; the service fetches the
/// full list on every call and ranks it with [`DirectionRanker`].
pub struct DirectionService<S> {
    search: S,
    ranker: DirectionRanker,
}

impl<S: PharmacySearch> DirectionService<S> {
    pub fn new(search: S, options: DirectionOptions) -> Self {
        Self {
            search,
            ranker: DirectionRanker::new(options),
        }
    }

    pub fn search(&self) -> &S {
        &self.search
    }

    pub fn options(&self) -> &DirectionOptions {
        self.ranker.options()
    }

    /// Build the direction list for `input`
    ///
    /// An absent input returns an empty list without consulting the
    /// candidate source.
    pub async fn build_direction_list(
        &self,
        input: Option<&InputLocation>,
    ) -> Result<Vec<Direction>, SearchError> {
        let Some(input) = input else {
            return Ok(Vec::new());
        };

        let candidates = self.search.search_pharmacy_list().await?;
        let total_candidates = candidates.len();

        let directions = self.ranker.build_direction_list(Some(input), candidates);

        tracing::info!(
            "Found {} pharmacies near {} (from {} candidates)",
            directions.len(),
            input.address_name,
            total_candidates
        );

        Ok(directions)
    }
}
