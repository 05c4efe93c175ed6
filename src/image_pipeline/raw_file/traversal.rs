//! Pixel traversal strategies, one per orientation.
//!
//! A traversal yields every `(x, y)` of a `width x height` grid exactly once.
//! Rotation is expressed purely as visiting order:
//!
//! | Orientation | outer loop          | inner loop          |
//! |-------------|---------------------|---------------------|
//! | 0           | y ascending         | x ascending         |
//! | 90          | x descending        | y ascending         |
//! | 180         | y descending        | x descending        |
//! | 270         | x ascending         | y descending        |

use std::iter::FusedIterator;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::png::types::RgbaImageData;
use crate::image_pipeline::raw_file::types::Orientation;

/// Iterator over grid coordinates in the visiting order of one orientation.
#[derive(Debug, Clone)]
pub struct Traversal {
    orientation: Orientation,
    width: u32,
    height: u32,
    next: u64,
    total: u64,
}

impl Traversal {
    pub fn new(orientation: Orientation, width: u32, height: u32) -> Self {
        Self {
            orientation,
            width,
            height,
            next: 0,
            total: width as u64 * height as u64,
        }
    }

    fn coordinate(&self, index: u64) -> (u32, u32) {
        let (w, h) = (self.width as u64, self.height as u64);
        let (x, y) = match self.orientation {
            Orientation::Deg0 => (index % w, index / w),
            Orientation::Deg90 => (w - 1 - index / h, index % h),
            Orientation::Deg180 => (w - 1 - index % w, h - 1 - index / w),
            Orientation::Deg270 => (index / h, h - 1 - index % h),
        };
        (x as u32, y as u32)
    }
}

impl Iterator for Traversal {
    type Item = (u32, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let coordinate = self.coordinate(self.next);
        self.next += 1;
        Some(coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.total - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Traversal {}

impl FusedIterator for Traversal {}

/// Walks `image` in the order of `orientation`, handing each source pixel to `visit`.
///
/// Stops at the first error returned by `visit` and propagates it.
pub fn traverse<F>(image: &RgbaImageData, orientation: Orientation, mut visit: F) -> Result<()>
where
    F: FnMut([u8; 4]) -> Result<()>,
{
    let data = image.data();

    for (x, y) in Traversal::new(orientation, image.width(), image.height()) {
        let offset = image.offset(x, y);
        let pixel = [data[offset], data[offset + 1], data[offset + 2], data[offset + 3]];
        visit(pixel)?;
    }

    Ok(())
}
