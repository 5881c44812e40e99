//! Shared canvas state between the menu thread and the render thread.
//!
//! One mutex guards the pixel buffer together with the `dirty` and
//! `running` flags, so the render thread can never observe a half-drawn
//! frame: visibility is gated on `dirty`, which only flips inside the
//! lock at the end of a completed draw.

use std::sync::Mutex;

use crate::display::PixelBuffer;

struct CanvasState {
    buffer: PixelBuffer,
    dirty: bool,
    running: bool,
}

/// What the render thread learned from one non-blocking poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// New frame contents were handed to the closure.
    Presented,
    /// Lock acquired, nothing new to show.
    Unchanged,
    /// Lock was held by a drawing operation; try again next frame.
    Busy,
    /// The menu requested shutdown.
    Stopped,
}

pub struct SharedCanvas {
    state: Mutex<CanvasState>,
    width: u32,
    height: u32,
}

impl SharedCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            state: Mutex::new(CanvasState {
                buffer: PixelBuffer::with_size(width, height),
                dirty: false,
                running: true,
            }),
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Blocking read access to the buffer, without touching the flags.
    pub fn with_buffer<F>(&self, f: F)
    where
        F: FnOnce(&PixelBuffer),
    {
        f(&self.lock().buffer);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CanvasState> {
        // A poisoned lock only means a draw panicked mid-frame; the buffer
        // is still usable pixel data.
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Run one drawing transaction: lock, clear, rasterize, mark dirty.
    ///
    /// Blocks until the render thread releases the buffer. The closure
    /// gets a cleared canvas and whatever it rasterizes becomes the next
    /// presented frame.
    pub fn draw<F>(&self, f: F)
    where
        F: FnOnce(&mut PixelBuffer),
    {
        let mut state = self.lock();
        state.buffer.clear();
        f(&mut state.buffer);
        state.dirty = true;
    }

    /// Non-blocking poll from the render thread.
    ///
    /// Never waits: if a drawing operation holds the lock this returns
    /// `Busy` and the caller just re-presents its current texture. When
    /// the buffer is dirty the closure sees the finished frame and the
    /// flag is cleared.
    pub fn try_present<F>(&self, f: F) -> Poll
    where
        F: FnOnce(&PixelBuffer),
    {
        let mut state = match self.state.try_lock() {
            Ok(state) => state,
            Err(std::sync::TryLockError::Poisoned(p)) => p.into_inner(),
            Err(std::sync::TryLockError::WouldBlock) => return Poll::Busy,
        };

        if !state.running {
            return Poll::Stopped;
        }
        if state.dirty {
            f(&state.buffer);
            state.dirty = false;
            Poll::Presented
        } else {
            Poll::Unchanged
        }
    }

    /// Cooperative shutdown: the render thread sees this on its next
    /// successful poll and exits its loop.
    pub fn shutdown(&self) {
        self.lock().running = false;
    }
}
