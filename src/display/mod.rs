mod pixel_buffer;

pub use pixel_buffer::{Color, PixelBuffer, BACKGROUND};

use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub const DEFAULT_WIDTH: u32 = 640;
pub const DEFAULT_HEIGHT: u32 = 480;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    width: u32,
    height: u32,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
}

impl Display {
    /// Create display with VSync enabled (default, 60fps locked)
    pub fn new(title: &str) -> Result<(Self, TextureCreator<WindowContext>), String> {
        Self::with_options(title, DEFAULT_WIDTH, DEFAULT_HEIGHT, true)
    }

    /// Create display with custom resolution and VSync settings
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((
            Self {
                canvas,
                event_pump,
                width,
                height,
            },
            texture_creator,
        ))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Drain pending window events so the window stays responsive.
    ///
    /// Window close is ignored on purpose: shutdown belongs to the stdin
    /// menu, which would otherwise be left blocked on a read.
    pub fn pump_events(&mut self) {
        for event in self.event_pump.poll_iter() {
            if let Event::Quit { .. } = event {
                println!("(use the menu's End Program option to quit)");
            }
        }
    }

    /// Upload new canvas contents to the streaming texture.
    pub fn upload(&mut self, target: &mut RenderTarget, buffer: &PixelBuffer) -> Result<(), String> {
        target
            .texture
            .update(None, buffer.as_bytes(), (buffer.width() * 4) as usize)
            .map_err(|e| e.to_string())
    }

    /// Draw the current texture to the window.
    pub fn present(&mut self, target: &RenderTarget) -> Result<(), String> {
        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

impl<'a> RenderTarget<'a> {
    /// Create render target with default resolution
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Result<Self, String> {
        Self::with_size(texture_creator, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create render target with custom resolution
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGBA8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self { texture })
    }
}
