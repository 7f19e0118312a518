//! Presence-aware rendering of node values.
//!
//! [`LinkedList::stringify`](crate::LinkedList::stringify) prints one line per
//! node but skips values that are explicitly absent. [`Render`] is how a value
//! says which of the two it is.

use core::fmt;

/// A value that renders on its own line, or is skipped when absent.
///
/// Implemented for the primitive types, `String`, `&str`, and `Option<T>`
/// where `T: Render` (`None` is absent). Other `Display` types opt in by
/// returning `Some(self)`.
///
/// # Example
///
/// ```
/// use core::fmt;
/// use nexus_chain::Render;
///
/// struct Airport(&'static str);
///
/// impl fmt::Display for Airport {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(self.0)
///     }
/// }
///
/// impl Render for Airport {
///     fn present(&self) -> Option<&dyn fmt::Display> {
///         Some(self)
///     }
/// }
///
/// assert!(Airport("SFO").present().is_some());
/// assert!(None::<Airport>.present().is_none());
/// ```
pub trait Render {
    /// Returns the displayable form of the value, or `None` if it is absent.
    fn present(&self) -> Option<&dyn fmt::Display>;
}

impl<T: Render> Render for Option<T> {
    #[inline]
    fn present(&self) -> Option<&dyn fmt::Display> {
        self.as_ref().and_then(Render::present)
    }
}

impl Render for &str {
    #[inline]
    fn present(&self) -> Option<&dyn fmt::Display> {
        Some(self)
    }
}

macro_rules! impl_render_for_display {
    ($($ty:ty),*) => {
        $(
            impl Render for $ty {
                #[inline]
                fn present(&self) -> Option<&dyn fmt::Display> {
                    Some(self)
                }
            }
        )*
    };
}

impl_render_for_display!(
    bool, char, String, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64
);

#[cfg(test)]
mod tests {
    use super::*;

    fn shown<R: Render>(value: &R) -> Option<String> {
        value.present().map(ToString::to_string)
    }

    macro_rules! test_render_present {
        ($($value:expr => $expected:expr, $name:ident),*) => {
            $(
                #[test]
                fn $name() {
                    assert_eq!(shown(&$value).as_deref(), Some($expected));
                }
            )*
        };
    }

    test_render_present!(
        5675_u32 => "5675", u32_present,
        -3_i64 => "-3", i64_present,
        'x' => "x", char_present,
        true => "true", bool_present,
        "kitties" => "kitties", str_present,
        String::from("mustache") => "mustache", string_present
    );

    #[test]
    fn none_is_absent() {
        assert_eq!(shown(&None::<u32>), None);
    }

    #[test]
    fn some_defers_to_inner() {
        assert_eq!(shown(&Some(90_u32)).as_deref(), Some("90"));
        assert_eq!(shown(&Some(None::<u32>)), None);
    }
}
