//! Terminal color abstraction that becomes plain output when the `color` feature is disabled

#[cfg(feature = "color")]
pub use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

#[cfg(not(feature = "color"))]
pub use self::plain::*;

#[cfg(not(feature = "color"))]
mod plain {
    use std::io::{self, Write};

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Color {
        Black,
        Blue,
        Green,
        Red,
        Cyan,
        Magenta,
        Yellow,
        White,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ColorChoice {
        Always,
        AlwaysAnsi,
        Auto,
        Never,
    }

    /// Accepted and ignored
    #[derive(Clone, Debug, Default)]
    pub struct ColorSpec;

    impl ColorSpec {
        pub fn new() -> Self {
            ColorSpec
        }

        pub fn set_fg(&mut self, _color: Option<Color>) -> &mut Self {
            self
        }

        pub fn set_bold(&mut self, _yes: bool) -> &mut Self {
            self
        }
    }

    pub trait WriteColor: Write {
        fn set_color(&mut self, _spec: &ColorSpec) -> io::Result<()> {
            Ok(())
        }

        fn reset(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Uncolored stdout
    pub struct StandardStream(io::Stdout);

    impl StandardStream {
        pub fn stdout(_choice: ColorChoice) -> Self {
            StandardStream(io::stdout())
        }
    }

    impl Write for StandardStream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.flush()
        }
    }

    impl WriteColor for StandardStream {}

    /// Writer that drops all color requests
    pub struct NoColor<W>(W);

    impl<W: Write> NoColor<W> {
        pub fn new(wtr: W) -> Self {
            NoColor(wtr)
        }

        pub fn into_inner(self) -> W {
            self.0
        }

        pub fn get_ref(&self) -> &W {
            &self.0
        }
    }

    impl<W: Write> Write for NoColor<W> {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.0.flush()
        }
    }

    impl<W: Write> WriteColor for NoColor<W> {}
}
