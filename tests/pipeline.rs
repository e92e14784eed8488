use geo::{Coord, line_string, polygon};
use image::Rgb;
use ishihara_map::config::RenderConfig;
use ishihara_map::domain::Shape;
use ishihara_map::geometry::{Bounds, Transform};
use ishihara_map::layers::fill_background;
use ishihara_map::raster::{Canvas, WHITE};
use ishihara_map::render;

const RED: Rgb<u8> = Rgb([200, 0, 0]);

fn triangle_config() -> RenderConfig {
    RenderConfig {
        canvas_size: 100,
        circle_radius: 40,
        dot_radius: 2,
        dot_spacing: 8,
        padding_factor: 1.6,
        geometry_dot_color: [200, 0, 0],
        ..Default::default()
    }
}

fn triangle() -> Shape {
    Shape::from(polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 0.0, y: 10.0)])
}

#[test]
fn test_triangle_plate() {
    let shape = triangle();
    let config = triangle_config();
    let rendered = render(&shape, &config).unwrap();
    let canvas = &rendered.canvas;

    let transform = Transform::fit(&Bounds::of(&shape).unwrap(), 100, 40.0, 1.6).unwrap();
    let centers: Vec<(i64, i64)> = [(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)]
        .into_iter()
        .map(|(x, y)| transform.project(Coord { x, y }))
        .collect();
    assert_eq!(centers, vec![(18, 82), (82, 82), (18, 18)]);

    for (x, y, p) in canvas.pixels() {
        let (x, y) = (i64::from(x), i64::from(y));
        let in_dot = centers
            .iter()
            .any(|&(cx, cy)| (x - cx).pow(2) + (y - cy).pow(2) <= 4);
        if in_dot {
            assert_eq!(p, RED, "pixel ({x}, {y}) should be red");
        } else {
            assert_ne!(p, RED, "stray red pixel at ({x}, {y})");
        }
    }
    assert_eq!(canvas.count(RED), 3 * 13);
}

#[test]
fn test_render_is_deterministic() {
    let shape = triangle();
    let config = triangle_config();

    let a = render(&shape, &config).unwrap();
    let b = render(&shape, &config).unwrap();
    assert_eq!(a.canvas, b.canvas);
    assert_eq!(a.stats, b.stats);
}

#[test]
fn test_geometry_drawn_over_background() {
    // canvas 96 puts the center on the (48, 48) background grid point
    let config = RenderConfig {
        canvas_size: 96,
        ..triangle_config()
    };
    let shape = Shape::from(line_string![(x: 0.0, y: 0.0), (x: 5.0, y: 5.0), (x: 10.0, y: 10.0)]);

    let mut background_only = Canvas::new(96, 96, WHITE);
    fill_background(&mut background_only, &config);
    let under = background_only.get(48, 48).unwrap();
    assert_ne!(under, WHITE);
    assert_ne!(under, RED);

    let rendered = render(&shape, &config).unwrap();
    assert_eq!(rendered.canvas.get(48, 48), Some(RED));
    assert_eq!(rendered.canvas.get(50, 48), Some(RED));
}

#[test]
fn test_large_default_plate() {
    let shape = Shape::from(polygon!(
        exterior: [
            (x: 4_500_000.0, y: 5_000_000.0),
            (x: 5_200_000.0, y: 5_000_000.0),
            (x: 5_200_000.0, y: 5_400_000.0),
            (x: 4_500_000.0, y: 5_400_000.0),
        ],
        interiors: [[
            (x: 4_800_000.0, y: 5_100_000.0),
            (x: 4_900_000.0, y: 5_100_000.0),
            (x: 4_900_000.0, y: 5_200_000.0),
        ]],
    ));
    let config = RenderConfig::default();
    let rendered = render(&shape, &config).unwrap();

    // wide bounds: x decides the scale, 480 * 1.6 / 700_000
    assert!((rendered.stats.scale - 768.0 / 700_000.0).abs() < 1e-15);
    assert_eq!(rendered.stats.geometry_dots, 5 + 4);
    assert!(rendered.canvas.count(config.geometry_color()) > 0);
}
