use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, Write};

/// [`ExternalPrinter`] prints command output line by line.
///
/// The sink is pluggable: the demo console points it at stdout, tests point
/// it at a buffer and assert on captured lines.
pub struct ExternalPrinter {
    out: RefCell<Box<dyn Write + Send>>,
}

impl ExternalPrinter {
    pub fn new<W: Write + Send + 'static>(sink: W) -> Self {
        Self {
            out: RefCell::new(Box::new(sink)),
        }
    }

    pub fn to_stdout() -> Self {
        Self::new(io::stdout())
    }

    pub fn print(&self, msg: impl Display) {
        let mut out = self.out.borrow_mut();
        writeln!(out, "{msg}").expect("printer write error");
    }
}

impl Default for ExternalPrinter {
    fn default() -> Self {
        Self::to_stdout()
    }
}

pub mod style {
    use crossterm::style::{Color, Stylize};
    use std::fmt::{Display, Formatter};

    struct View<T: Display> {
        inner: T,
        color: Color,
    }

    impl<T: Display> Display for View<T> {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_fmt(format_args!("{}", self.inner.to_string().with(self.color)))
        }
    }

    /// Construct structure declaration to display data of the same type
    /// (variable names, errors, etc.).
    macro_rules! view_struct {
        ($name: ident, $color: expr) => {
            pub struct $name<T: Display>(View<T>);

            impl<T: Display> From<T> for $name<T> {
                fn from(value: T) -> Self {
                    Self(View {
                        inner: value,
                        color: $color,
                    })
                }
            }

            impl<T: Display> Display for $name<T> {
                fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                    self.0.fmt(f)
                }
            }
        };
    }

    view_struct!(KeywordView, Color::Magenta);
    view_struct!(ErrorView, Color::Red);
}
