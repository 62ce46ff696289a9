/// Pixels of the line from `(x1, y1)` to `(x2, y2)` that fall inside a
/// `width × height` canvas, in drawing order.
///
/// The line steps one pixel at a time along its major axis; the minor
/// coordinate is the exact interpolation rounded to nearest (Bresenham's
/// line, with halves rounded up). Steps outside the canvas along the major
/// axis are skipped without being visited, so the work is bounded by the
/// canvas size however far away the endpoints are.
pub fn line_points(x1: i32, y1: i32, x2: i32, y2: i32, width: i32, height: i32) -> Vec<(i32, i32)> {
    let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
    let (dx, dy) = (x2 - x1, y2 - y1);
    let x_major = dx.abs() >= dy.abs();

    let (start, delta, minor_start, minor_delta, extent) = if x_major {
        (x1, dx, y1, dy, i64::from(width))
    } else {
        (y1, dy, x1, dx, i64::from(height))
    };
    let steps = delta.abs();
    let dir = delta.signum();

    // Step range whose major coordinate lies in [0, extent)
    let (lo, hi) = if dir >= 0 {
        (-start, extent - 1 - start)
    } else {
        (start - (extent - 1), start)
    };
    let (first, last) = (lo.max(0), hi.min(steps));

    let mut points = Vec::new();
    for k in first..=last {
        let major = start + k * dir;
        let minor = if steps == 0 {
            minor_start
        } else {
            minor_start + round_div(i128::from(k) * i128::from(minor_delta), i128::from(steps))
        };
        let (x, y) = if x_major { (major, minor) } else { (minor, major) };
        if (0..i64::from(width)).contains(&x) && (0..i64::from(height)).contains(&y) {
            points.push((x as i32, y as i32));
        }
    }
    points
}

/// `n / d` rounded to nearest, halves rounded up. `d` must be positive.
fn round_div(n: i128, d: i128) -> i64 {
    (2 * n + d).div_euclid(2 * d) as i64
}

/// Whether pixel `(px, py)` lies within `half` of the segment, measured
/// perpendicular to it, with its projection inside the segment.
pub(crate) fn segment_covers(x1: i32, y1: i32, x2: i32, y2: i32, half: f64, px: i32, py: i32) -> bool {
    let (ax, ay) = (f64::from(x1), f64::from(y1));
    let (bx, by) = (f64::from(x2) - ax, f64::from(y2) - ay);
    let (vx, vy) = (f64::from(px) - ax, f64::from(py) - ay);

    let len_sq = bx * bx + by * by;
    if len_sq == 0.0 {
        return false;
    }
    let t = (vx * bx + vy * by) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }
    let cross = vx * by - vy * bx;
    cross * cross <= half * half * len_sq
}
