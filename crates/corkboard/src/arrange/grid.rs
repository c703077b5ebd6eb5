//! Column grid packing.
//!
//! Panels are taken smallest area first and each one is dropped into the
//! column whose stack is currently the shortest. A column's x coordinate is
//! derived from the widest panel placed so far in every column to its left.

use log::trace;

use corkboard_core::geometry::{Point, Size};

use super::{ArrangeEngine, shortest_column};

pub struct Grid {
    columns: usize,
    padding: f32,
    margin: f32,
}

impl Grid {
    pub fn new() -> Self {
        Self {
            columns: 3,
            padding: 20.0,
            margin: 20.0,
        }
    }

    pub fn set_columns(&mut self, columns: usize) -> &mut Self {
        self.columns = columns.max(1);
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
}

impl ArrangeEngine for Grid {
    fn arrange(&self, sizes: &[Size]) -> Vec<Point> {
        let mut positions = vec![Point::default(); sizes.len()];

        let mut order: Vec<usize> = (0..sizes.len()).collect();
        order.sort_by(|&a, &b| sizes[a].area().total_cmp(&sizes[b].area()));

        // Both start at the margin; widths only ever grow from there.
        let mut widths = vec![self.margin; self.columns];
        let mut heights = vec![self.margin; self.columns];

        for idx in order {
            let size = sizes[idx];
            let column = shortest_column(&heights);

            let x = self.margin
                + widths[..column]
                    .iter()
                    .map(|width| width + self.padding)
                    .sum::<f32>();
            positions[idx] = Point::new(x, heights[column]);
            trace!(index = idx, column, x, y = heights[column]; "Grid placement");

            heights[column] += size.height() + self.padding;
            widths[column] = widths[column].max(size.width());
        }

        positions
    }
}
