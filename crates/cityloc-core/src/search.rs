// crates/cityloc-core/src/search.rs

use crate::error::{LocError, Result};
use crate::model::{CatalogSnapshot, CatalogStats, CityRecord, NearestMatch};
use crate::text::fold_key;
use crate::traits::CatalogSearch;
use std::collections::HashSet;

/// Mean Earth radius in kilometres, as used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Hard cap on autocomplete results. The scan stops as soon as this many
/// records have been accepted.
pub const MAX_SUGGESTIONS: usize = 10;

/// Queries shorter than this (after folding) return no suggestions.
pub const MIN_QUERY_LEN: usize = 2;

/// Great-circle distance between two coordinates in kilometres.
///
/// Haversine with the atan2 form, which stays numerically stable for
/// near-antipodal points. Symmetric, and zero for identical inputs.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

fn validate_coordinates(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() || !lon.is_finite() {
        return Err(LocError::InvalidCoordinates(format!(
            "non-finite coordinates ({lat}, {lon})"
        )));
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(LocError::InvalidCoordinates(format!(
            "latitude {lat} outside [-90, 90]"
        )));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(LocError::InvalidCoordinates(format!(
            "longitude {lon} outside [-180, 180]"
        )));
    }
    Ok(())
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Priority class a record matched under. Classification decides whether a
/// record qualifies at all; it is not a score and does not reorder results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchTier {
    /// Folded name or region equals the full query.
    Exact,
    /// Folded name or region starts with the query.
    Prefix,
    /// Every query token is a substring of folded name or region; tokens may
    /// match across the two fields.
    MultiToken,
}

/// First tier the record satisfies, highest first, or `None` to exclude it.
fn classify(name: &str, region: &str, query: &str, terms: &[&str]) -> Option<MatchTier> {
    if name == query || region == query {
        return Some(MatchTier::Exact);
    }
    if name.starts_with(query) || region.starts_with(query) {
        return Some(MatchTier::Prefix);
    }
    if !terms.is_empty()
        && terms
            .iter()
            .all(|t| name.contains(t) || region.contains(t))
    {
        return Some(MatchTier::MultiToken);
    }
    None
}

impl CatalogSearch for CatalogSnapshot {
    fn stats(&self) -> CatalogStats {
        CatalogStats {
            cities: self.len(),
            urban: self.records().iter().filter(|r| r.is_urban).count(),
            popular: self.records().iter().filter(|r| r.is_popular).count(),
        }
    }

    fn nearest(&self, latitude: f64, longitude: f64) -> Result<NearestMatch<'_>> {
        validate_coordinates(latitude, longitude)?;

        // Single pass tracking the minimum. Strict `<` keeps the earlier
        // record on exact ties (catalog order is the only tie-break).
        let mut best: Option<(&CityRecord, f64)> = None;
        for rec in self.records() {
            let d = haversine_km(latitude, longitude, rec.latitude, rec.longitude);
            if best.is_none_or(|(_, best_d)| d < best_d) {
                best = Some((rec, d));
            }
        }

        let (record, distance) = best.ok_or(LocError::NoCitiesAvailable)?;
        Ok(NearestMatch {
            record,
            distance_km: round2(distance),
        })
    }

    fn suggest(&self, query: &str) -> Vec<&CityRecord> {
        let q = fold_key(query.trim());
        if q.chars().count() < MIN_QUERY_LEN {
            return Vec::new();
        }
        let terms: Vec<&str> = q.split_whitespace().collect();

        // Pass-through filter: tier classification gates inclusion, output
        // keeps catalog order, and the scan stops at the cap. De-dup keys on
        // the folded (name, region) pair and keeps the first occurrence no
        // matter which tier matched it.
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut out = Vec::new();
        for rec in self.records() {
            let name = fold_key(&rec.name);
            let region = fold_key(&rec.region);
            if classify(&name, &region, &q, &terms).is_none() {
                continue;
            }
            if !seen.insert((name, region)) {
                continue;
            }
            out.push(rec);
            if out.len() == MAX_SUGGESTIONS {
                break;
            }
        }
        out
    }
}
