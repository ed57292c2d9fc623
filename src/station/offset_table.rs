use std::{
    cmp::Ordering,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::Context;
use log::debug;
use nalgebra::{convert, Point2};

use crate::{
    bonjean::{BonjeanOption, BonjeanResult},
    error::{BonjeanError, OffsetTableError},
    misc::FloatingPoint,
};

use super::{OffsetTableOption, Station};

/// Offsets of a hull grouped into stations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffsetTable<T: FloatingPoint> {
    stations: Vec<Station<T>>,
}

impl<T: FloatingPoint> OffsetTable<T> {
    pub fn new(stations: Vec<Station<T>>) -> Self {
        Self { stations }
    }

    /// Parse a delimited offset table
    ///
    /// Every non blank row yields one offset point of the station found in the station column.
    /// A table listed with decreasing station positions is read in reverse,
    /// stations are kept in the order they first appear,
    /// and the points of each station are sorted by height.
    /// # Example
    /// ```
    /// use bonjean::prelude::*;
    /// let text = "0\t0.0\t0.0\t0.0\n1\t0.0\t1.0\t1.0\n2\t5.0\t0.5\t0.0\n";
    /// let table = OffsetTable::<f64>::parse(text, &OffsetTableOption::default()).unwrap();
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.stations()[1].position(), 5.);
    /// ```
    pub fn parse(text: &str, option: &OffsetTableOption) -> Result<Self, OffsetTableError> {
        Self::try_from_reader(text.as_bytes(), option)
    }

    pub fn try_from_reader<R: BufRead>(
        reader: R,
        option: &OffsetTableOption,
    ) -> Result<Self, OffsetTableError> {
        let mut rows = vec![];
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(parse_row::<T>(&line, index + 1, option)?);
        }

        let (first, last) = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (first.0, last.0),
            _ => return Err(OffsetTableError::Empty),
        };
        if first > last {
            debug!("offset table listed with decreasing stations, reversed");
            rows.reverse();
        }

        let mut stations: Vec<(T, Vec<Point2<T>>)> = vec![];
        for (position, offset, height) in rows {
            let point = Point2::new(offset, height);
            match stations.iter_mut().find(|(p, _)| *p == position) {
                Some((_, points)) => points.push(point),
                None => stations.push((position, vec![point])),
            }
        }

        Ok(stations
            .into_iter()
            .map(|(position, mut points)| {
                points.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));
                Station::new(position, points)
            })
            .collect())
    }

    /// Read an offset table from a file
    pub fn try_from_path<P: AsRef<Path>>(
        path: P,
        option: &OffsetTableOption,
    ) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open offset table {}", path.display()))?;
        Self::try_from_reader(BufReader::new(file), option)
            .with_context(|| format!("Failed to read offset table {}", path.display()))
    }

    pub fn stations(&self) -> &[Station<T>] {
        &self.stations
    }

    pub fn into_stations(self) -> Vec<Station<T>> {
        self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Compute the Bonjean curves of every station, in station order
    pub fn bonjeans(
        &self,
        option: &BonjeanOption<T>,
    ) -> Result<Vec<BonjeanResult<T>>, BonjeanError> {
        self.stations
            .iter()
            .map(|station| station.bonjean(option))
            .collect()
    }
}

impl<T: FloatingPoint> FromIterator<Station<T>> for OffsetTable<T> {
    fn from_iter<I: IntoIterator<Item = Station<T>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Read (station position, half breadth, height) from a single row
fn parse_row<T: FloatingPoint>(
    line: &str,
    line_number: usize,
    option: &OffsetTableOption,
) -> Result<(T, T, T), OffsetTableError> {
    let fields = line.split(option.delimiter()).collect::<Vec<_>>();
    let field = |column: usize| -> Result<T, OffsetTableError> {
        let raw = fields
            .get(column)
            .ok_or(OffsetTableError::MissingColumn {
                line: line_number,
                column,
            })?;
        raw.trim()
            .parse::<f64>()
            .map(convert)
            .map_err(|source| OffsetTableError::InvalidNumber {
                line: line_number,
                column,
                source,
            })
    };
    Ok((
        field(option.station_column())?,
        field(option.offset_column())?,
        field(option.height_column())?,
    ))
}
