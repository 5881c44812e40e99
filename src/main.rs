// Allow unused code for designed-but-not-yet-used APIs
#![allow(dead_code)]

mod display;
mod drawing;
mod geometry;
mod menu;
mod raster;
mod session;

use std::io;
use std::sync::Arc;
use std::thread;

use display::{Display, RenderTarget, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use session::{Poll, SharedCanvas};

/// Parse command line arguments and return (width, height, vsync)
fn parse_args() -> (u32, u32, bool) {
    let args: Vec<String> = std::env::args().collect();
    let mut width = DEFAULT_WIDTH;
    let mut height = DEFAULT_HEIGHT;
    let mut vsync = true;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => vsync = false,
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        width = w;
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        height = h;
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 800x600)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            width = w;
                            height = h;
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                println!("Usage: rasterpad [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  --width W, -w W       Set canvas width (default: {})",
                    DEFAULT_WIDTH
                );
                println!(
                    "  --height H, -h H      Set canvas height (default: {})",
                    DEFAULT_HEIGHT
                );
                println!("  --resolution WxH, -r WxH  Set resolution (e.g., 800x600)");
                println!("  --no-vsync            Disable VSync for uncapped framerate");
                println!("  --help                Show this help message");
                std::process::exit(0);
            },
            _ => {},
        }
        i += 1;
    }

    (width, height, vsync)
}

fn main() -> Result<(), String> {
    let (width, height, vsync) = parse_args();

    let (mut display, texture_creator) = Display::with_options("rasterpad", width, height, vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, width, height)?;

    let canvas = Arc::new(SharedCanvas::new(width, height));

    // The menu reads stdin on its own thread so the window keeps
    // repainting while the user types.
    let menu_canvas = Arc::clone(&canvas);
    let menu_thread = thread::spawn(move || {
        menu::run(&menu_canvas, &mut io::stdin().lock());
    });

    println!("=== rasterpad ===");
    println!("Canvas: {}x{}", width, height);
    println!("Draw from the menu in this terminal; results appear in the window.");

    'render: loop {
        display.pump_events();

        // Non-blocking poll: pick up finished frames, never wait on a
        // drawing operation in progress.
        let mut uploaded = Ok(());
        match canvas.try_present(|buffer| {
            uploaded = display.upload(&mut target, buffer);
        }) {
            Poll::Stopped => break 'render,
            Poll::Presented => uploaded?,
            Poll::Unchanged | Poll::Busy => {},
        }

        display.present(&target)?;
    }

    menu_thread
        .join()
        .map_err(|_| "menu thread panicked".to_string())?;

    Ok(())
}
