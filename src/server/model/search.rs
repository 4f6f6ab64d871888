//! Search filter model and cross-field validation.
//!
//! All validation runs before any query is issued. Every violation is
//! collected into one report so a request with several bad fields fails once
//! with the complete list instead of one error at a time.

use chrono::NaiveDate;

use crate::server::{error::validation::ValidationError, model::hotel::Hotel};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 20;
pub const MAX_PAGE_SIZE: u64 = 100;

/// Recognized sort orders for hotel search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Stable default: ascending hotel id.
    #[default]
    Id,
    /// Effective price ascending; hotels without a price sink to the end.
    Price,
    /// Stars descending.
    Stars,
    /// Popularity descending.
    Popularity,
    /// Distance from the caller ascending; requires caller coordinates.
    Distance,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "id" => Some(SortKey::Id),
            "price" => Some(SortKey::Price),
            "stars" => Some(SortKey::Stars),
            "popularity" => Some(SortKey::Popularity),
            "distance" => Some(SortKey::Distance),
            _ => None,
        }
    }
}

/// Raw hotel search filters as received from the client, before validation.
///
/// `page` and `size` stay optional here so that an explicit out-of-range value
/// can be reported instead of silently replaced by the default.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Case-insensitive substring match on hotel name.
    pub q: Option<String>,
    /// Case-insensitive substring match on city.
    pub city: Option<String>,
    /// Case-insensitive substring match on neighborhood.
    pub neighborhood: Option<String>,
    /// Amenity codes the hotel must ALL have.
    pub amenities: Vec<String>,
    /// At least one room of this type must exist.
    pub room_type: Option<String>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub stars_min: Option<f64>,
    pub stars_max: Option<f64>,
    pub user_lat: Option<f64>,
    pub user_lng: Option<f64>,
    pub sort: Option<String>,
    pub page: Option<u64>,
    pub size: Option<u64>,
}

impl SearchFilters {
    /// Validates primitive ranges and cross-field rules, returning the parsed
    /// sort key on success and the full violation list otherwise.
    ///
    /// Rules:
    /// - `user_lat` in [-90, 90], `user_lng` in [-180, 180]
    /// - `check_out` strictly after `check_in` when both are given
    /// - `stars_max` at least `stars_min` when both are given
    /// - `sort` one of id/price/stars/popularity/distance
    /// - `sort=distance` requires both coordinates
    /// - `page` at least 1, `size` between 1 and 100
    pub fn validate(&self) -> Result<SortKey, ValidationError> {
        let mut report = ValidationError::new();

        if let Some(lat) = self.user_lat {
            if !(-90.0..=90.0).contains(&lat) {
                report.push("user_lat", "must be between -90 and 90");
            }
        }
        if let Some(lng) = self.user_lng {
            if !(-180.0..=180.0).contains(&lng) {
                report.push("user_lng", "must be between -180 and 180");
            }
        }

        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) {
            if check_out <= check_in {
                report.push("check_in, check_out", "check_out must be after check_in");
            }
        }

        if let (Some(stars_min), Some(stars_max)) = (self.stars_min, self.stars_max) {
            if stars_max < stars_min {
                report.push(
                    "stars_min, stars_max",
                    "stars_max must be greater than or equal to stars_min",
                );
            }
        }

        let sort = match self.sort.as_deref() {
            None => SortKey::default(),
            Some(raw) => match SortKey::parse(raw) {
                Some(sort) => sort,
                None => {
                    report.push(
                        "sort",
                        "must be one of: id, price, stars, popularity, distance",
                    );
                    SortKey::default()
                }
            },
        };

        if sort == SortKey::Distance && (self.user_lat.is_none() || self.user_lng.is_none()) {
            report.push(
                "sort, user_lat, user_lng",
                "sorting by distance requires user_lat and user_lng",
            );
        }

        if let Some(page) = self.page {
            if page < 1 {
                report.push("page", "must be at least 1");
            }
        }
        if let Some(size) = self.size {
            if !(1..=MAX_PAGE_SIZE).contains(&size) {
                report.push("size", "must be between 1 and 100");
            }
        }

        report.into_result()?;
        Ok(sort)
    }

    /// The requested stay window, present only when both dates were given.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_in, check_out)),
            _ => None,
        }
    }

    /// The caller's location, present only when both coordinates were given.
    pub fn user_location(&self) -> Option<(f64, f64)> {
        match (self.user_lat, self.user_lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }

    pub fn page(&self) -> u64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn size(&self) -> u64 {
        self.size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn has_price_bound(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }
}

/// A hotel that survived filtering, enriched with everything ranking and
/// rendering need.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedHotel {
    pub hotel: Hotel,
    /// Cheapest sellable room ignoring dates.
    pub min_price_general: Option<f64>,
    /// Cheapest room with free units over the requested window; only present
    /// when both dates were given.
    pub min_price_available: Option<f64>,
    /// Distance from the caller; only present when coordinates were given.
    pub distance_km: Option<f64>,
    /// First media URL, if the hotel has any media.
    pub thumbnail: Option<String>,
}

impl RankedHotel {
    /// The price the price-range filter and price sort operate on.
    pub fn effective_price(&self) -> Option<f64> {
        self.min_price_available.or(self.min_price_general)
    }
}

/// One page of ranked search results. `total` counts matches before
/// pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub page: u64,
    pub size: u64,
    pub total: u64,
    pub items: Vec<RankedHotel>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_filters_default_to_id_sort() {
        let filters = SearchFilters::default();
        assert_eq!(filters.validate().unwrap(), SortKey::Id);
        assert_eq!(filters.page(), 1);
        assert_eq!(filters.size(), 20);
    }

    #[test]
    fn distance_sort_requires_both_coordinates() {
        let filters = SearchFilters {
            sort: Some("distance".to_string()),
            user_lat: Some(38.7),
            ..Default::default()
        };

        let err = filters.validate().unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "sort, user_lat, user_lng");
    }

    #[test]
    fn inverted_dates_are_rejected() {
        let filters = SearchFilters {
            check_in: Some(date(2024, 6, 10)),
            check_out: Some(date(2024, 6, 5)),
            ..Default::default()
        };

        let err = filters.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "check_in, check_out");
    }

    #[test]
    fn back_to_back_dates_are_rejected() {
        // check_out == check_in is a zero-night stay
        let filters = SearchFilters {
            check_in: Some(date(2024, 6, 10)),
            check_out: Some(date(2024, 6, 10)),
            ..Default::default()
        };

        assert!(filters.validate().is_err());
    }

    #[test]
    fn all_violations_are_collected_in_one_report() {
        let filters = SearchFilters {
            user_lat: Some(120.0),
            user_lng: Some(-300.0),
            stars_min: Some(4.0),
            stars_max: Some(2.0),
            sort: Some("rating".to_string()),
            page: Some(0),
            size: Some(500),
            ..Default::default()
        };

        let err = filters.validate().unwrap_err();
        let fields: Vec<&str> = err.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "user_lat",
                "user_lng",
                "stars_min, stars_max",
                "sort",
                "page",
                "size"
            ]
        );
    }

    #[test]
    fn unknown_sort_is_rejected_by_name() {
        let filters = SearchFilters {
            sort: Some("name".to_string()),
            ..Default::default()
        };

        let err = filters.validate().unwrap_err();
        assert_eq!(err.errors[0].field, "sort");
    }
}
