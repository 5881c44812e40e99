//! Terminal menu: reads geometry from stdin and dispatches one drawing
//! transaction per selection.
//!
//! Runs on its own thread so blocking reads never stall the render loop.
//! Everything here is I/O orchestration; each option translates directly
//! into raster/geometry calls inside a single canvas transaction.

use std::io::{self, BufRead, Write};

use crate::display::Color;
use crate::drawing::{Drawing, Shape};
use crate::geometry::{rotate_point, sutherland_hodgman, Point, Polygon};
use crate::session::SharedCanvas;

pub const DRAWING_FILE: &str = "drawing.json";

const CLIP_COLOR_A: Color = 0xFF000000;
const CLIP_COLOR_B: Color = 0x00FF0000;

/// Menu loop. Returns when the user ends the program or stdin closes.
pub fn run(canvas: &SharedCanvas, input: &mut dyn BufRead) {
    let width = canvas.width();
    let height = canvas.height();

    // Shapes currently on screen, kept for Save Drawing
    let mut current = Drawing::new();

    loop {
        println!("Menu");
        println!(" 1) End Program");
        println!(" 2) Draw Points");
        println!(" 3) Draw Line");
        println!(" 4) Draw Circle");
        println!(" 5) Clip Polygons");
        println!(" 6) Fill Polygon");
        println!(" 7) Save Drawing");
        println!(" 8) Load Drawing");

        let Some(option) = prompt_ints(input, "Select an option", 1) else {
            break;
        };

        let outcome = match option[0] {
            1 => break,
            2 => menu_points(canvas, input, &mut current),
            3 => menu_line(canvas, input, &mut current),
            4 => menu_circle(canvas, input, &mut current),
            5 => menu_clip(canvas, input, &mut current, width, height),
            6 => menu_fill(canvas, input, &mut current, width, height),
            7 => {
                match current.save(DRAWING_FILE) {
                    Ok(()) => println!("Drawing saved to {}", DRAWING_FILE),
                    Err(e) => eprintln!("Failed to save: {}", e),
                }
                Some(())
            },
            8 => {
                match Drawing::load(DRAWING_FILE) {
                    Ok(loaded) => {
                        submit(canvas, &loaded);
                        current = loaded;
                        println!("Drawing loaded from {}", DRAWING_FILE);
                    },
                    Err(e) => eprintln!("Failed to load: {}", e),
                }
                Some(())
            },
            _ => {
                println!("Invalid menu option. Please specify an actual menu item.");
                Some(())
            },
        };

        // A prompt hit end-of-input mid-operation
        if outcome.is_none() {
            break;
        }
    }

    canvas.shutdown();
}

/// Clear-draw-mark-dirty as one transaction.
fn submit(canvas: &SharedCanvas, drawing: &Drawing) {
    canvas.draw(|buffer| drawing.render(buffer));
}

fn menu_points(
    canvas: &SharedCanvas,
    input: &mut dyn BufRead,
    current: &mut Drawing,
) -> Option<()> {
    let n = loop {
        let n = prompt_ints(input, "Specify number of points (1-5)", 1)?[0];
        if (1..=5).contains(&n) {
            break n;
        }
        println!("Number of points must be between 1 and 5.");
    };

    let mut drawing = Drawing::new();
    for i in 0..n {
        let xy = prompt_ints(input, &format!("Point {} (x y)", i + 1), 2)?;
        let color = prompt_color(input, &format!("Point {} color (hex)", i + 1))?;
        drawing.push(Shape::Point {
            at: Point::new(xy[0], xy[1]),
            color,
        });
    }

    submit(canvas, &drawing);
    *current = drawing;
    Some(())
}

fn menu_line(
    canvas: &SharedCanvas,
    input: &mut dyn BufRead,
    current: &mut Drawing,
) -> Option<()> {
    let coords = prompt_ints(input, "Specify line (x1 y1 x2 y2)", 4)?;
    let color = prompt_color(input, "Specify a color (hex)")?;
    let trans = prompt_ints(input, "Specify a translation (trans_x trans_y)", 2)?;
    let degrees = prompt_ints(input, "Specify an angle in degrees (angle)", 1)?[0];

    let radians = (degrees as f32).to_radians();
    println!("angle in radians {}", radians);

    let a = Point::new(coords[0], coords[1]);
    let b = Point::new(coords[2], coords[3]);

    let mut drawing = Drawing::new();

    // The line itself
    drawing.push(Shape::Line { a, b, color });

    // Its translation
    drawing.push(Shape::Line {
        a: Point::new(a.x + trans[0], a.y + trans[1]),
        b: Point::new(b.x + trans[0], b.y + trans[1]),
        color,
    });

    // Its rotation about the midpoint: translate to the origin, rotate,
    // translate back
    let mid = Point::new((a.x + b.x) / 2, (a.y + b.y) / 2);
    let a_rot = rotate_point(Point::new(a.x - mid.x, a.y - mid.y), radians);
    let b_rot = rotate_point(Point::new(b.x - mid.x, b.y - mid.y), radians);
    drawing.push(Shape::Line {
        a: Point::new(a_rot.x + mid.x, a_rot.y + mid.y),
        b: Point::new(b_rot.x + mid.x, b_rot.y + mid.y),
        color,
    });

    submit(canvas, &drawing);
    *current = drawing;
    Some(())
}

fn menu_circle(
    canvas: &SharedCanvas,
    input: &mut dyn BufRead,
    current: &mut Drawing,
) -> Option<()> {
    let params = prompt_ints(input, "Specify circle (x y radius)", 3)?;
    let color = prompt_color(input, "Specify a color (hex)")?;
    let trans = prompt_ints(input, "Specify a translation (trans_x trans_y)", 2)?;
    let scale = prompt_ints(input, "Specify a scale (scale_x scale_y)", 2)?;

    let center = Point::new(params[0], params[1]);
    let radius = params[2];

    let mut drawing = Drawing::new();
    drawing.push(Shape::Ellipse {
        center,
        half_w: radius,
        half_h: radius,
        color,
    });
    drawing.push(Shape::Ellipse {
        center: Point::new(center.x + trans[0], center.y + trans[1]),
        half_w: radius,
        half_h: radius,
        color,
    });
    drawing.push(Shape::Ellipse {
        center,
        half_w: radius + scale[0],
        half_h: radius + scale[1],
        color,
    });

    submit(canvas, &drawing);
    *current = drawing;
    Some(())
}

fn menu_clip(
    canvas: &SharedCanvas,
    input: &mut dyn BufRead,
    current: &mut Drawing,
    width: u32,
    height: u32,
) -> Option<()> {
    let clipper = screen_clipper(width, height);
    let polygon = prompt_polygon(input)?;

    let first = prompt_ints(input, "Enter a starting point (x y)", 2)?;
    let second = prompt_ints(input, "Enter a second starting point (x y)", 2)?;

    // Clip both placements outside the lock; only rasterization happens
    // inside the transaction.
    let mut first_poly = polygon.translated(Point::new(first[0], first[1]));
    sutherland_hodgman(&mut first_poly, &clipper);

    let mut second_poly = polygon.translated(Point::new(second[0], second[1]));
    sutherland_hodgman(&mut second_poly, &clipper);

    let mut drawing = Drawing::new();
    for (poly, color) in [(first_poly, CLIP_COLOR_A), (second_poly, CLIP_COLOR_B)] {
        if poly.is_empty() {
            println!("A polygon was clipped away entirely.");
        } else {
            drawing.push(Shape::Outline {
                polygon: poly,
                color,
            });
        }
    }

    submit(canvas, &drawing);
    *current = drawing;
    Some(())
}

fn menu_fill(
    canvas: &SharedCanvas,
    input: &mut dyn BufRead,
    current: &mut Drawing,
    width: u32,
    height: u32,
) -> Option<()> {
    let clipper = screen_clipper(width, height);

    let mut polygon = prompt_polygon(input)?;
    sutherland_hodgman(&mut polygon, &clipper);
    if !polygon.is_closed() {
        println!("Polygon lies outside the canvas; nothing to fill.");
        return Some(());
    }

    let seed = prompt_ints(input, "Enter a point inside of the polygon (x y)", 2)?;

    // First pass: outline plus flood fill
    let mut drawing = Drawing::new();
    drawing.push(Shape::FloodFill {
        polygon: polygon.clone(),
        seed: Point::new(seed[0], seed[1]),
        color: CLIP_COLOR_A,
    });
    submit(canvas, &drawing);
    *current = drawing;

    loop {
        let answer = prompt_line(input, "Draw scanline algorithm? (y)")?;
        if answer.trim() == "y" {
            break;
        }
    }

    // Second pass: same polygon, scan-line fill
    let mut drawing = Drawing::new();
    drawing.push(Shape::ScanlineFill {
        polygon,
        color: CLIP_COLOR_B,
    });
    submit(canvas, &drawing);
    *current = drawing;
    Some(())
}

/// Clockwise rectangle covering the drawable canvas.
fn screen_clipper(width: u32, height: u32) -> Polygon {
    Polygon::rect(0, 0, width as i32 - 1, height as i32 - 1)
}

fn prompt_polygon(input: &mut dyn BufRead) -> Option<Polygon> {
    let n = loop {
        let n = prompt_ints(input, "Number of vertices ( > 2 )", 1)?[0];
        if n > 2 {
            break n;
        }
        println!("Number of vertices must be > 2");
    };

    println!("Points in clockwise order:");
    let mut vertices = Vec::with_capacity(n as usize);
    for _ in 0..n {
        let xy = prompt_ints(input, "Enter point (x y)", 2)?;
        vertices.push(Point::new(xy[0], xy[1]));
    }

    Some(Polygon::from_vertices(vertices))
}

// ============================================================================
// Prompt helpers
// ============================================================================

/// Read one line, or None on end-of-input.
fn prompt_line(input: &mut dyn BufRead, prompt: &str) -> Option<String> {
    print!("{} > ", prompt);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

/// Prompt until a line parses as exactly `count` integers.
fn prompt_ints(input: &mut dyn BufRead, prompt: &str, count: usize) -> Option<Vec<i32>> {
    loop {
        let line = prompt_line(input, prompt)?;
        let parsed: Result<Vec<i32>, _> =
            line.split_whitespace().map(str::parse).collect();
        match parsed {
            Ok(values) if values.len() == count => return Some(values),
            _ => println!("Expected {} integer value(s).", count),
        }
    }
}

/// Prompt until a line parses as a hex color (with or without 0x prefix).
fn prompt_color(input: &mut dyn BufRead, prompt: &str) -> Option<Color> {
    loop {
        let line = prompt_line(input, prompt)?;
        let token = line.trim();
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        match Color::from_str_radix(digits, 16) {
            Ok(color) if !digits.is_empty() => return Some(color),
            _ => println!("Expected a hex color like FF0000FF."),
        }
    }
}
