use crate::*;
use thiserror::Error;

/// Largest framebuffer `try_new` will allocate.
pub const MAX_PIXELS: usize = 1 << 28;

#[derive(Debug, Error, PartialEq)]
#[error("{w}x{h} image is larger than {} pixels", MAX_PIXELS)]
pub struct TooLarge {
    pub w: u32,
    pub h: u32,
}

/// Row-major framebuffer. Row 0 is the bottom of the picture.
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    w: u32,
    h: u32,
    buf: Vec<RGB>,
}

impl Image {
    pub fn new(w: u32, h: u32) -> Self {
        Image {
            w,
            h,
            buf: vec![RGB::black(); w as usize * h as usize],
        }
    }

    pub fn try_new(w: u32, h: u32) -> Result<Self, TooLarge> {
        match (w as usize).checked_mul(h as usize) {
            Some(n) if n <= MAX_PIXELS => Ok(Image::new(w, h)),
            _ => Err(TooLarge { w, h }),
        }
    }

    /// Writes linear, unclamped floats. The file is top row first.
    pub fn write_exr(&self, filename: &str) -> exr::error::UnitResult {
        let h = self.h as usize;
        exr::prelude::write_rgb_file(filename, self.w as usize, h, |x, y| {
            let c = self.at(x as u32, (h - 1 - y) as u32);
            (c.r, c.g, c.b)
        })
    }

    pub fn at(&self, x: u32, y: u32) -> &RGB {
        &self.buf[y as usize * self.w as usize + x as usize]
    }

    pub fn pixels(&self) -> &[RGB] {
        &self.buf[..]
    }

    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, RGB> {
        // chunks_exact_mut panics on 0; an empty buffer yields no rows either way
        self.buf.chunks_exact_mut((self.w as usize).max(1))
    }

    pub fn w(&self) -> u32 {
        self.w
    }
    pub fn h(&self) -> u32 {
        self.h
    }
}
