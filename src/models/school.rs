//! School records parsed from CSV rows.

use serde::{Deserialize, Serialize};

use super::Coordinate;
use crate::error::CatalogError;

/// Raw string fields for one school, borrowed from a CSV row.
#[derive(Debug, Clone, Copy)]
pub struct SchoolFields<'a> {
    pub id: &'a str,
    pub short_name: &'a str,
    pub network: &'a str,
    pub address: &'a str,
    pub zip: &'a str,
    pub phone: &'a str,
    pub grades: &'a str,
    pub latitude: &'a str,
    pub longitude: &'a str,
}

/// One school: identity, descriptive fields, offered grades, and location.
///
/// Immutable once constructed; a catalog holds these in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: u32,
    pub short_name: String,
    pub network: String,
    pub address: String,
    pub zip: String,
    pub phone: String,
    /// Grade labels in file order, e.g. "PK", "K", "1" .. "12".
    /// Treated as a set by grade-containment queries.
    pub grades: Vec<String>,
    pub location: Coordinate,
}

impl School {
    /// Build a school from one row's raw string fields.
    ///
    /// The identifier must parse as an integer and the coordinates as finite
    /// decimal degrees within geographic range; anything else rejects the
    /// row. `row` is the 1-based data row number used in error messages.
    pub fn from_fields(row: usize, fields: &SchoolFields<'_>) -> Result<Self, CatalogError> {
        let id = fields
            .id
            .trim()
            .parse::<u32>()
            .map_err(|_| CatalogError::Parse {
                row,
                field: "School_ID",
                value: fields.id.to_string(),
            })?;

        let latitude = parse_degrees(row, "Lat", fields.latitude, 90.0)?;
        let longitude = parse_degrees(row, "Long", fields.longitude, 180.0)?;

        Ok(Self {
            id,
            short_name: fields.short_name.to_string(),
            network: fields.network.to_string(),
            address: fields.address.to_string(),
            zip: fields.zip.to_string(),
            phone: fields.phone.to_string(),
            // An empty field yields a single empty-string grade, matching
            // the source data's convention for schools with no grade list.
            grades: fields.grades.split(", ").map(str::to_string).collect(),
            location: Coordinate::from_degrees(latitude, longitude),
        })
    }

    /// Great-circle distance in miles from this school to a point.
    pub fn distance_to(&self, point: &Coordinate) -> f64 {
        self.location.distance_to(point)
    }

    /// Whether this school offers every grade in the given set.
    ///
    /// Vacuously true for an empty set.
    pub fn teaches_all<'a, I>(&self, grades: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        grades
            .into_iter()
            .all(|wanted| self.grades.iter().any(|g| g == wanted))
    }

    /// Multi-line street address, city/state, and ZIP code.
    pub fn full_address(&self) -> String {
        format!("{}\nChicago, IL\n{}", self.address, self.zip)
    }
}

/// Parse a coordinate field as decimal degrees, rejecting non-numeric,
/// non-finite, or out-of-range values.
fn parse_degrees(
    row: usize,
    field: &'static str,
    value: &str,
    limit: f64,
) -> Result<f64, CatalogError> {
    let degrees = value
        .trim()
        .parse::<f64>()
        .map_err(|_| CatalogError::Parse {
            row,
            field,
            value: value.to_string(),
        })?;

    // NaN fails the contains check, so non-finite input is rejected here too.
    if !(-limit..=limit).contains(&degrees) {
        return Err(CatalogError::OutOfRange {
            row,
            field,
            value: degrees,
        });
    }

    Ok(degrees)
}
