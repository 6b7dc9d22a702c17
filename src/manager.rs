use crate::*;
use std::iter::Enumerate;
use std::slice::ChunksExactMut;
use std::sync::Mutex;

#[derive(Debug)]
pub struct Task<'a> {
    pub row: u32,
    pub pixels: &'a mut [RGB],
}

/// Hands out framebuffer rows to worker threads, each row exactly once.
pub struct Manager<'a> {
    rows: Mutex<Enumerate<ChunksExactMut<'a, RGB>>>,
    total: usize,
}

impl<'a> Manager<'a> {
    pub fn new(image: &'a mut image::Image) -> Self {
        let total = image.h() as usize;
        Manager {
            rows: Mutex::new(image.rows_mut().enumerate()),
            total,
        }
    }

    /// `None` once every row has been handed out.
    pub fn next(&self) -> Option<Task<'a>> {
        let mut rows = match self.rows.lock() {
            Ok(rows) => rows,
            Err(poisoned) => poisoned.into_inner(),
        };
        rows.next().map(|(row, pixels)| Task {
            row: row as u32,
            pixels,
        })
    }

    pub fn total(&self) -> usize {
        self.total
    }
}
