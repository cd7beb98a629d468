//! Compile-time future-output resolution
//!
//! No runtime behaviour lives here; the alias only participates in type
//! resolution.

use std::future::Future;

/// The resolved output type of a future.
///
/// `Resolved<F>` is `U` for any `F: Future<Output = U>`. Unlike a
/// conditional type there is no fallback arm for non-future types: Rust's
/// type algebra has no way to say "otherwise, the type itself" without
/// specialization, so non-future types are simply outside the alias's
/// domain.
///
/// ```rust
/// use std::future::Ready;
/// use web_display_formatting::fut::Resolved;
///
/// let resolved: Resolved<Ready<u8>> = 7;
/// assert_eq!(resolved, 7u8);
/// ```
pub type Resolved<F> = <F as Future>::Output;
