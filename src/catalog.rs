//! The in-memory school catalog and its query operations.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::info;

use crate::error::CatalogError;
use crate::models::{Coordinate, School, SchoolFields};

/// Default search radius for proximity queries, in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 1.0;

/// Resolved indices of the required columns within the header row.
struct Columns {
    id: usize,
    short_name: usize,
    network: usize,
    address: usize,
    zip: usize,
    phone: usize,
    grades: usize,
    latitude: usize,
    longitude: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            id: find("School_ID")?,
            short_name: find("Short_Name")?,
            network: find("Network")?,
            address: find("Address")?,
            zip: find("Zip")?,
            phone: find("Phone")?,
            grades: find("Grades")?,
            latitude: find("Lat")?,
            longitude: find("Long")?,
        })
    }

    fn fields<'a>(&self, record: &'a StringRecord) -> SchoolFields<'a> {
        let get = |idx: usize| record.get(idx).unwrap_or_default();
        SchoolFields {
            id: get(self.id),
            short_name: get(self.short_name),
            network: get(self.network),
            address: get(self.address),
            zip: get(self.zip),
            phone: get(self.phone),
            grades: get(self.grades),
            latitude: get(self.latitude),
            longitude: get(self.longitude),
        }
    }
}

/// An ordered collection of schools, loaded once and read-only thereafter.
///
/// Schools keep the order of their rows in the source file, and every query
/// preserves that order in its results. Since nothing mutates the catalog
/// after construction, shared references to it are safe across threads.
#[derive(Debug)]
pub struct Catalog {
    schools: Vec<School>,
}

impl Catalog {
    /// Load a catalog from a CSV file at the given path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_reader(file)?;
        info!("Loaded {} schools from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Load a catalog from any CSV source with a header row.
    ///
    /// The load is all-or-nothing: a malformed row or a missing required
    /// column aborts with an error and no catalog is produced.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let columns = Columns::resolve(&headers)?;

        let mut schools = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            // Data rows are numbered from 1, header excluded.
            schools.push(School::from_fields(idx + 1, &columns.fields(&record))?);
        }

        Ok(Self { schools })
    }

    pub fn len(&self) -> usize {
        self.schools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// All schools, in file order.
    pub fn schools(&self) -> &[School] {
        &self.schools
    }

    /// Schools within `radius_miles` of `center`, inclusive.
    ///
    /// A zero radius matches only schools at exactly the given point, which
    /// in practice means none unless the coordinates are bit-identical.
    pub fn nearby_schools(&self, center: &Coordinate, radius_miles: f64) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|school| school.distance_to(center) <= radius_miles)
            .collect()
    }

    /// Schools offering every one of the given grades.
    ///
    /// Duplicate grades collapse to a set before the containment check, and
    /// an empty input matches every school (vacuous superset).
    pub fn schools_by_grades<'a, I>(&self, grades: I) -> Vec<&School>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: HashSet<&str> = grades.into_iter().collect();
        self.schools
            .iter()
            .filter(|school| school.teaches_all(wanted.iter().copied()))
            .collect()
    }

    /// Schools whose network matches `network` exactly, case-sensitively.
    pub fn schools_by_network(&self, network: &str) -> Vec<&School> {
        self.schools
            .iter()
            .filter(|school| school.network == network)
            .collect()
    }
}
