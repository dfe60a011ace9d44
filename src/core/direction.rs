use crate::core::distance::great_circle_distance;
use crate::models::{Direction, DirectionOptions, InputLocation, Pharmacy};

/// Ranks pharmacies by straight-line distance from an input point
///
/// # Pipeline Stages
/// 1. Distance computation for every candidate
/// 2. Radius filter (inclusive)
/// 3. Stable sort by distance, ascending
/// 4. Truncation to `max_search_count`
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectionRanker {
    options: DirectionOptions,
}

impl DirectionRanker {
    pub fn new(options: DirectionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DirectionOptions {
        &self.options
    }

    /// Build the ranked direction list for `input`
    ///
    /// Returns an empty list when there is no input point. A candidate whose
    /// distance is NaN never satisfies the radius comparison and is dropped.
    ///
    /// # Arguments
    /// * `input` - The point to search from, if any
    /// * `candidates` - Every pharmacy the candidate source returned
    pub fn build_direction_list(
        &self,
        input: Option<&InputLocation>,
        candidates: Vec<Pharmacy>,
    ) -> Vec<Direction> {
        let Some(input) = input else {
            return Vec::new();
        };

        let origin = input.location();
        let radius_km = self.options.radius_km;

        let mut directions: Vec<Direction> = candidates
            .into_iter()
            .map(|pharmacy| {
                let distance = great_circle_distance(&origin, &pharmacy.location());

                Direction {
                    input_address: input.address_name.clone(),
                    input_latitude: input.latitude,
                    input_longitude: input.longitude,
                    target_pharmacy_name: pharmacy.pharmacy_name,
                    target_address: pharmacy.pharmacy_address,
                    target_latitude: pharmacy.latitude,
                    target_longitude: pharmacy.longitude,
                    distance,
                }
            })
            .filter(|direction| direction.distance <= radius_km)
            .collect();

        // sort_by is stable, so equal distances keep candidate order
        directions.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        directions.truncate(self.options.max_search_count);

        tracing::debug!(
            "Ranked {} pharmacies within {}km of {}",
            directions.len(),
            radius_km,
            input.address_name
        );

        directions
    }
}
