//! Class-name concatenation.
//!
//! ```rust
//! use physchat::cn;
//!
//! let active = false;
//! let extra: Option<&str> = Some("mt-2");
//! assert_eq!(cn!("flex", active.then_some("ring"), "", extra), "flex mt-2");
//! ```

/// A value that may contribute a class fragment.
///
/// `None`, empty and whitespace-only strings contribute nothing.
pub trait ClassFragment {
    fn as_class(&self) -> Option<&str>;
}

impl ClassFragment for str {
    fn as_class(&self) -> Option<&str> {
        let trimmed = self.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

impl ClassFragment for String {
    fn as_class(&self) -> Option<&str> {
        self.as_str().as_class()
    }
}

impl<T: ClassFragment> ClassFragment for Option<T> {
    fn as_class(&self) -> Option<&str> {
        self.as_ref().and_then(ClassFragment::as_class)
    }
}

impl<T: ClassFragment + ?Sized> ClassFragment for &T {
    fn as_class(&self) -> Option<&str> {
        (**self).as_class()
    }
}

/// Join class fragments with single spaces, skipping absent ones.
pub fn cn<'a, I>(fragments: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for fragment in fragments.into_iter().flatten() {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(fragment);
    }
    out
}

/// Variadic form of [`cn`](crate::ui::style::cn) accepting any
/// [`ClassFragment`](crate::ui::style::ClassFragment).
#[macro_export]
macro_rules! cn {
    ($($fragment:expr),* $(,)?) => {
        $crate::ui::style::cn([
            $($crate::ui::style::ClassFragment::as_class(&$fragment)),*
        ])
    };
}
