/// Column layout of a delimited offset table
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetTableOption {
    /// Column holding the longitudinal station position
    station_column: usize,
    /// Column holding the half breadth
    offset_column: usize,
    /// Column holding the height above base
    height_column: usize,
    /// Field delimiter
    delimiter: char,
}

impl Default for OffsetTableOption {
    fn default() -> Self {
        Self {
            station_column: 1,
            offset_column: 2,
            height_column: 3,
            delimiter: '\t',
        }
    }
}

impl OffsetTableOption {
    pub fn station_column(&self) -> usize {
        self.station_column
    }

    pub fn offset_column(&self) -> usize {
        self.offset_column
    }

    pub fn height_column(&self) -> usize {
        self.height_column
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    pub fn with_station_column(mut self, column: usize) -> Self {
        self.station_column = column;
        self
    }

    pub fn with_offset_column(mut self, column: usize) -> Self {
        self.offset_column = column;
        self
    }

    pub fn with_height_column(mut self, column: usize) -> Self {
        self.height_column = column;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}
