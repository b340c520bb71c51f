//! Month grid layout (Sunday through Saturday).

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Day(u32),
    /// A day that has notes, shown as "{day}!".
    Marked(u32),
}

impl Cell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Cell::Blank => None,
            Cell::Day(day) | Cell::Marked(day) => Some(*day),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Blank => Ok(()),
            Cell::Day(day) => write!(f, "{}", day),
            Cell::Marked(day) => write!(f, "{}!", day),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    rows: Vec<[Cell; 7]>,
}

impl MonthGrid {
    /// Place `day_count` days starting at `first_column` (0 = Sunday).
    ///
    /// A row is closed after each Saturday. The last row may be partial, and
    /// a row without any day is never emitted.
    pub fn layout(first_column: usize, day_count: u32, is_marked: impl Fn(u32) -> bool) -> Self {
        let mut rows = Vec::new();
        let mut row = [Cell::Blank; 7];

        for day in 1..=day_count {
            let column = (first_column + day as usize - 1) % 7;
            row[column] = if is_marked(day) {
                Cell::Marked(day)
            } else {
                Cell::Day(day)
            };

            if column == 6 {
                rows.push(row);
                row = [Cell::Blank; 7];
            }
        }

        if row.iter().any(|cell| *cell != Cell::Blank) {
            rows.push(row);
        }

        MonthGrid { rows }
    }

    pub fn rows(&self) -> &[[Cell; 7]] {
        &self.rows
    }

    /// (row, column) of a day, if it is on the grid.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(row_index, row)| {
            row.iter()
                .position(|cell| cell.day() == Some(day))
                .map(|column| (row_index, column))
        })
    }

    /// Cells as display strings, row by row.
    pub fn to_strings(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarRecord;

    #[test]
    fn january_2021_starts_on_friday() {
        let record = CalendarRecord::create("Journal", "January", "2021", None).unwrap();
        let grid = record.render_grid().unwrap();

        assert_eq!(grid.position_of(1), Some((0, 5)));
        assert_eq!(grid.rows()[0][..5], [Cell::Blank; 5]);
        // 31 lands on a Sunday and opens a sixth row
        assert_eq!(grid.rows().len(), 6);
        assert_eq!(grid.position_of(31), Some((5, 0)));
    }

    #[test]
    fn marks_days_with_content() {
        let mut record = CalendarRecord::create("Journal", "January", "2021", None).unwrap();
        record.add_note(2, "Call mom").unwrap();
        record.add_note(3, "").unwrap();

        let strings = record.render_grid().unwrap().to_strings();
        assert_eq!(strings[0], vec!["", "", "", "", "", "1", "2!"]);
        assert_eq!(strings[1][0], "3");
    }

    #[test]
    fn no_trailing_blank_row_when_month_ends_on_saturday() {
        // September 2023 starts on a Friday and ends on a Saturday
        let record = CalendarRecord::create("Journal", "September", "2023", None).unwrap();
        let grid = record.render_grid().unwrap();

        assert_eq!(grid.position_of(30), Some((4, 6)));
        assert_eq!(grid.rows().len(), 5);
    }

    #[test]
    fn february_starting_on_sunday_fills_four_rows() {
        // February 2015: Sunday the 1st, 28 days
        let record = CalendarRecord::create("Journal", "Feb", "2015", None).unwrap();
        let grid = record.render_grid().unwrap();

        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.position_of(1), Some((0, 0)));
        assert_eq!(grid.position_of(28), Some((3, 6)));
    }

    #[test]
    fn override_shortens_the_grid() {
        let record = CalendarRecord::create("Sprint", "January", "2021", Some(2)).unwrap();
        let grid = record.render_grid().unwrap();

        assert_eq!(grid.rows().len(), 1);
        assert_eq!(grid.position_of(3), None);
    }

    #[test]
    fn layout_with_no_days_is_empty() {
        let grid = MonthGrid::layout(3, 0, |_| false);
        assert!(grid.rows().is_empty());
    }
}
