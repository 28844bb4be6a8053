//! Раскладка ячеек в сетку фиксированной ширины
//!
//! Чистая функция: одинаковый упорядоченный список всегда дает одинаковую
//! сетку. Строки и колонки нумеруются с 1, последняя строка может быть короче.

use serde::{Deserialize, Serialize};

use crate::domain::a001_locker_master::Locker;

pub const DEFAULT_GRID_COLUMNS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub locker: Locker,
    pub row: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridLayout {
    columns: usize,
    rows: Vec<Vec<GridCell>>,
}

/// Разложить отсортированный список ячеек по строкам по `columns` штук
///
/// `columns == 0` трактуется как одна колонка.
pub fn layout(lockers: &[Locker], columns: usize) -> GridLayout {
    let columns = columns.max(1);

    let rows = lockers
        .chunks(columns)
        .enumerate()
        .map(|(row_index, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(column_index, locker)| GridCell {
                    locker: locker.clone(),
                    row: row_index + 1,
                    column: column_index + 1,
                })
                .collect()
        })
        .collect();

    GridLayout { columns, rows }
}

impl GridLayout {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[Vec<GridCell>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Общее число ячеек
    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ячейки в порядке строка → колонка
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }

    /// Hit-test по координатам (1-based)
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&GridCell> {
        if row == 0 || column == 0 {
            return None;
        }
        self.rows.get(row - 1).and_then(|r| r.get(column - 1))
    }
}
