//! Integer line rasterization between two pixel coordinates

use crate::spatial::nails::Nail;

/// Rasterize the segment from `start` to `end` with Bresenham's algorithm
///
/// The result is 8-connected and contains both endpoints exactly once.
/// The walk always runs from the lexicographically smaller endpoint, so
/// `rasterize(a, b)` is `rasterize(b, a)` reversed.
pub fn rasterize(start: Nail, end: Nail) -> Vec<Nail> {
    if end < start {
        let mut pixels = bresenham(end, start);
        pixels.reverse();
        pixels
    } else {
        bresenham(start, end)
    }
}

fn bresenham(start: Nail, end: Nail) -> Vec<Nail> {
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let step_x = if start.x < end.x { 1 } else { -1 };
    let step_y = if start.y < end.y { 1 } else { -1 };

    let mut pixels = Vec::with_capacity(dx.max(-dy) as usize + 1);
    let mut current = start;
    let mut error = dx + dy;

    loop {
        pixels.push(current);
        if current == end {
            break;
        }
        let doubled = 2 * error;
        if doubled >= dy {
            error += dy;
            current.x += step_x;
        }
        if doubled <= dx {
            error += dx;
            current.y += step_y;
        }
    }

    pixels
}
