//! Masonry layout.
//!
//! The column count follows the average panel width. Panels are taken
//! tallest first and stacked into the shortest column. Column x coordinates
//! are only known once every panel is assigned, so assignment and final
//! positioning are two separate passes over an intermediate table.

use log::{debug, trace};

use corkboard_core::geometry::{Point, Size};

use super::{ArrangeEngine, shortest_column};

/// Running state of one masonry column.
#[derive(Debug, Clone, Copy)]
struct Column {
    height: f32,
    max_width: f32,
}

/// A panel assigned to a column, before the column's x is known.
#[derive(Debug, Clone, Copy)]
struct Assignment {
    index: usize,
    column: usize,
    y: f32,
}

pub struct Masonry {
    max_columns: usize,
    available_width: f32,
    padding: f32,
    margin: f32,
}

impl Masonry {
    pub fn new() -> Self {
        Self {
            max_columns: 4,
            available_width: 1400.0,
            padding: 20.0,
            margin: 20.0,
        }
    }

    pub fn set_max_columns(&mut self, columns: usize) -> &mut Self {
        self.max_columns = columns.max(1);
        self
    }

    pub fn set_available_width(&mut self, width: f32) -> &mut Self {
        self.available_width = width;
        self
    }

    pub fn set_padding(&mut self, padding: f32) -> &mut Self {
        self.padding = padding;
        self
    }

    pub fn set_margin(&mut self, margin: f32) -> &mut Self {
        self.margin = margin;
        self
    }

    /// `floor(available / (average width + padding))`, clamped to `1..=max_columns`.
    fn column_count(&self, sizes: &[Size]) -> usize {
        if sizes.is_empty() {
            return 1;
        }
        let average = sizes.iter().map(|s| s.width()).sum::<f32>() / sizes.len() as f32;
        // Saturating float-to-int cast: NaN becomes 0, infinity usize::MAX
        let fitting = (self.available_width / (average + self.padding)).floor() as usize;
        fitting.clamp(1, self.max_columns)
    }
}

impl ArrangeEngine for Masonry {
    fn arrange(&self, sizes: &[Size]) -> Vec<Point> {
        let column_count = self.column_count(sizes);
        debug!(columns = column_count, panels = sizes.len(); "Masonry layout");

        let mut order: Vec<usize> = (0..sizes.len()).collect();
        order.sort_by(|&a, &b| sizes[b].height().total_cmp(&sizes[a].height()));

        let mut columns = vec![
            Column {
                height: self.margin,
                max_width: 0.0,
            };
            column_count
        ];
        let mut heights: Vec<f32> = columns.iter().map(|c| c.height).collect();
        let mut assignments = Vec::with_capacity(sizes.len());

        for index in order {
            let size = sizes[index];
            let column = shortest_column(&heights);
            let slot = &mut columns[column];

            assignments.push(Assignment {
                index,
                column,
                y: slot.height,
            });

            slot.height += size.height() + self.padding;
            slot.max_width = slot.max_width.max(size.width());
            heights[column] = slot.height;
        }

        let mut column_x = Vec::with_capacity(column_count);
        let mut x = self.margin;
        for column in &columns {
            column_x.push(x);
            x += column.max_width + self.padding;
        }

        let mut positions = vec![Point::default(); sizes.len()];
        for assignment in assignments {
            let position = Point::new(column_x[assignment.column], assignment.y);
            trace!(index = assignment.index, column = assignment.column; "Masonry placement");
            positions[assignment.index] = position;
        }
        positions
    }
}
