//! Truthiness classification and sequence filtering
//!
//! Falsy values are exactly: `None`, numeric zero, the empty string, and
//! `false`. Everything else (NaN included) is truthy.

/// Classify a value as truthy or falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_int {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        })*
    };
}

impl_truthy_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_truthy_float {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            // only exact zero is falsy; NaN is truthy
            fn is_truthy(&self) -> bool {
                *self != 0.0
            }
        })*
    };
}

impl_truthy_float!(f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is falsy, `Some` defers to the wrapped value
impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        match self {
            Some(v) => v.is_truthy(),
            None => false,
        }
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Standalone predicate for use with [`Iterator::filter`]
///
/// # Example
/// ```rust
/// use web_display_formatting::truthy::truthy;
///
/// let kept: Vec<i32> = [1, 0, 2].into_iter().filter(truthy).collect();
/// assert_eq!(kept, [1, 2]);
/// ```
pub fn truthy<T: Truthy>(value: &T) -> bool {
    value.is_truthy()
}

fn some_truthy<T: Truthy>(opt: Option<T>) -> Option<T> {
    opt.filter(|v| v.is_truthy())
}

#[easy_ext::ext(TruthyIterExt)]
pub impl<I: Iterator> I
where
    I: Sized,
{
    /// Drop falsy elements, preserving order
    fn filter_truthy(self) -> std::iter::Filter<Self, fn(&Self::Item) -> bool>
    where
        Self::Item: Truthy,
    {
        self.filter(truthy::<Self::Item> as fn(&Self::Item) -> bool)
    }

    /// Unwrap and drop `None`s as well as falsy inner values.
    /// The item type is narrowed from `Option<T>` to `T`.
    fn truthy_values<T>(self) -> std::iter::FilterMap<Self, fn(Option<T>) -> Option<T>>
    where
        Self: Iterator<Item = Option<T>>,
        T: Truthy,
    {
        self.filter_map(some_truthy::<T> as fn(Option<T>) -> Option<T>)
    }
}
