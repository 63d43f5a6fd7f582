//! Canonical column list and the row type built on it.

/// Number of columns in every schedule export.
pub const COLUMN_COUNT: usize = 19;

/// Canonical column names, in positional order.
pub const COLUMNS: [&str; COLUMN_COUNT] = [
    "Agency Code",
    "Agency",
    "Subagency1",
    "Subagency2",
    "Subagency3",
    "Subagency4",
    "Title",
    "SeriesID",
    "Description",
    "Status",
    "Approved",
    "Retention",
    "Disposition",
    "Restrictions",
    "Comments",
    "Authority",
    "KAR#",
    "Format",
    "Last Survey",
];

/// Styling hook for a column: the name with all whitespace removed.
pub fn field_class(column: &str) -> String {
    column.chars().filter(|c| !c.is_whitespace()).collect()
}

/// One schedule record.
///
/// Values are opaque text. An empty cell is stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleRow {
    values: [Option<String>; COLUMN_COUNT],
}

impl ScheduleRow {
    /// Build a row from positional values.
    pub fn new(values: [Option<String>; COLUMN_COUNT]) -> Self {
        Self { values }
    }

    /// Build a row from cell text, treating empty cells as absent.
    pub fn from_cells<'a>(cells: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let cells: Vec<Option<String>> = cells
            .into_iter()
            .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
            .collect();

        let values: [Option<String>; COLUMN_COUNT] = cells.try_into().ok()?;
        Some(Self { values })
    }

    /// Value at a column position.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).and_then(|v| v.as_deref())
    }

    /// Value for a canonical column name.
    pub fn get_by_name(&self, column: &str) -> Option<&str> {
        COLUMNS
            .iter()
            .position(|c| *c == column)
            .and_then(|index| self.get(index))
    }

    /// Iterate `(column name, value)` pairs in schema order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        COLUMNS
            .iter()
            .zip(self.values.iter())
            .map(|(column, value)| (*column, value.as_deref()))
    }
}
