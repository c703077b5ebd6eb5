//! First-fit row packing.
//!
//! Panels are taken shortest first. Each goes into the first existing row
//! that still has room under the width budget, otherwise it opens a new row.
//! Rows are stacked top to bottom and panels are top-aligned within a row.

use log::trace;

use corkboard_core::geometry::{Point, Size};

use super::ArrangeEngine;

#[derive(Debug, Default)]
struct Row {
    members: Vec<usize>,
    width: f32,
    max_height: f32,
}

pub struct Compact {
    row_width: f32,
    padding: f32,
    margin: f32,
}

impl Compact {
    pub fn new() -> Self {
        Self {
            row_width: 1400.0,
            padding: 20.0,
            margin: 20.0,
        }
    }

    pub fn set_row_width(&mut self, width: f32) -> &mut Self {
        self.row_width = width;
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

    fn pack(&self, sizes: &[Size], order: &[usize]) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();

        for &index in order {
            let size = sizes[index];
            let fitting = rows.iter_mut().find_map(|row| {
                let gap = if row.members.is_empty() {
                    0.0
                } else {
                    self.padding
                };
                let needed = row.width + size.width() + gap;
                (needed <= self.row_width).then_some((row, needed))
            });

            match fitting {
                Some((row, needed)) => {
                    row.members.push(index);
                    row.width = needed;
                    row.max_height = row.max_height.max(size.height());
                }
                None => rows.push(Row {
                    members: vec![index],
                    width: size.width(),
                    max_height: size.height(),
                }),
            }
        }
        rows
    }
}

impl ArrangeEngine for Compact {
    fn arrange(&self, sizes: &[Size]) -> Vec<Point> {
        let mut order: Vec<usize> = (0..sizes.len()).collect();
        order.sort_by(|&a, &b| sizes[a].height().total_cmp(&sizes[b].height()));

        let rows = self.pack(sizes, &order);

        let mut positions = vec![Point::default(); sizes.len()];
        let mut y = self.margin;
        for (row_idx, row) in rows.iter().enumerate() {
            let mut x = self.margin;
            for &index in &row.members {
                positions[index] = Point::new(x, y);
                x += sizes[index].width() + self.padding;
            }
            trace!(row = row_idx, y, panels = row.members.len(); "Compact row");
            y += row.max_height + self.padding;
        }
        positions
    }
}
