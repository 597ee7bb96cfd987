//! Double-buffered, scoped frame rendering.
//!
//! Every frame is drawn into the back buffer, then the buffers swap and the new
//! front buffer is handed to the panel flusher. Drawing happens inside a closure
//! passed to [`Screen::frame`], so the flip and the flush run on every exit path
//! of the draw code and a half-drawn buffer is never presented.

use super::Framebuffer;

/// Sends a completed frame to the panel.
pub trait Flush {
    type Error;

    /// Present `frame`. Called once per completed frame.
    fn flush(
        &mut self,
        frame: &Framebuffer,
    ) -> Result<(), Self::Error>;
}

/// Two framebuffers: one being drawn, one last presented.
pub struct DoubleBuffer {
    buffers: [Framebuffer; 2],
    /// Index of the buffer currently being rendered to (0 or 1).
    render_idx: usize,
}

impl DoubleBuffer {
    pub const fn new() -> Self {
        Self {
            buffers: [Framebuffer::new(), Framebuffer::new()],
            render_idx: 0,
        }
    }

    /// The back buffer, cleared and ready to draw into.
    pub fn begin(&mut self) -> &mut Framebuffer {
        let back = &mut self.buffers[self.render_idx];
        back.clear_buffer();
        back
    }

    /// Swap buffers after rendering completes.
    ///
    /// Returns the buffer that was just rendered to (the new front).
    pub fn swap(&mut self) -> &Framebuffer {
        let completed_idx = self.render_idx;
        self.render_idx = 1 - self.render_idx;
        &self.buffers[completed_idx]
    }

    /// The last completed frame.
    #[inline]
    pub fn front(&self) -> &Framebuffer { &self.buffers[1 - self.render_idx] }

    /// Index of the buffer the next frame renders into.
    #[inline]
    pub const fn render_idx(&self) -> usize { self.render_idx }
}

impl Default for DoubleBuffer {
    fn default() -> Self { Self::new() }
}

/// The display as seen by the renderer: a double buffer plus a flusher.
pub struct Screen<F> {
    buffers: DoubleBuffer,
    flusher: F,
}

impl<F: Flush> Screen<F> {
    pub const fn new(flusher: F) -> Self {
        Self {
            buffers: DoubleBuffer::new(),
            flusher,
        }
    }

    /// Draw one complete frame and present it.
    ///
    /// The back buffer is cleared before `draw` runs. Once `draw` returns the
    /// buffers swap and the finished frame is flushed, whatever `draw` did or skipped.
    pub fn frame<R>(
        &mut self,
        draw: impl FnOnce(&mut Framebuffer) -> R,
    ) -> Result<R, F::Error> {
        let result = draw(self.buffers.begin());
        let front = self.buffers.swap();
        self.flusher.flush(front)?;
        Ok(result)
    }

    /// The frame currently on the panel.
    #[inline]
    pub fn front(&self) -> &Framebuffer { self.buffers.front() }

    #[inline]
    pub const fn flusher(&self) -> &F { &self.flusher }
}

// =============================================================================
// Unit Tests
// =============================================================================
