use core::fmt;

/// Prints a screen one byte per line, as `screen[<index>] is: <hex>`.
pub struct ScreenDump<'a> {
    screen: &'a [u8],
}

impl<'a> ScreenDump<'a> {
    pub fn new(screen: &'a [u8], width: usize, depth: usize) -> Self {
        let len = width.saturating_mul(depth).min(screen.len());
        Self { screen: &screen[..len] }
    }
}

impl fmt::Display for ScreenDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.screen.iter().enumerate() {
            writeln!(f, "screen[{}] is: {:x}", i, byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_format() {
        let screen = [0x1F, 0xFF, 0x00];
        let dump = ScreenDump::new(&screen, 3, 1).to_string();
        assert_eq!(dump, "screen[0] is: 1f\nscreen[1] is: ff\nscreen[2] is: 0\n");
    }

    #[test]
    fn test_dump_clamps_to_geometry() {
        let screen = [0x80, 0x00, 0x11];
        assert_eq!(ScreenDump::new(&screen, 1, 2).to_string().lines().count(), 2);
        assert_eq!(ScreenDump::new(&screen, 4, 4).to_string().lines().count(), 3);
    }
}
