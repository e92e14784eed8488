use super::{Canvas, Color};

/// Fill a solid disk of `radius` pixels centered on `center`
///
/// Covers every offset with `dx² + dy² <= radius²`. Pixels that fall off
/// the canvas are skipped; overlapping stamps overwrite, there is no blending.
///
/// # Returns
/// Number of pixels actually written
pub fn stamp_dot(canvas: &mut Canvas, center: (i64, i64), radius: u32, color: Color) -> usize {
    let (cx, cy) = center;
    let r = i64::from(radius);
    // squared distances of far-off centers exceed i64
    let r2 = i128::from(r) * i128::from(r);

    let x_min = cx.saturating_sub(r).max(0);
    let x_max = cx.saturating_add(r).min(i64::from(canvas.width()) - 1);
    let y_min = cy.saturating_sub(r).max(0);
    let y_max = cy.saturating_add(r).min(i64::from(canvas.height()) - 1);

    let mut written = 0;
    for y in y_min..=y_max {
        let dy = i128::from(y) - i128::from(cy);
        for x in x_min..=x_max {
            let dx = i128::from(x) - i128::from(cx);
            if dx * dx + dy * dy <= r2 {
                canvas.set(x, y, color);
                written += 1;
            }
        }
    }
    written
}

/// Pixel count of a fully visible dot of `radius`
pub fn disk_area(radius: u32) -> usize {
    let r = i64::from(radius);
    let mut count = 0;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                count += 1;
            }
        }
    }
    count
}
