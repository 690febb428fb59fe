use anyhow::Result;

use crate::color::Color;

/// Where finished pixels go.
///
/// Construction is initialisation. Writes are sequenced by the single
/// render thread: one clear, any number of pixels, one present per frame.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Resets every pixel to the background.
    fn clear(&mut self);

    /// Out-of-bounds coordinates are ignored.
    fn set_pixel(&mut self, color: Color, x: i32, y: i32);

    /// Shows the frame written since the last `clear`.
    fn present(&mut self) -> Result<()>;

    /// Drains pending events; true once the user asked to quit.
    fn poll_quit(&mut self) -> bool {
        false
    }

    /// Restores whatever the surface changed on the outside world.
    fn shutdown(&mut self) -> Result<()> {
        Ok(())
    }
}
