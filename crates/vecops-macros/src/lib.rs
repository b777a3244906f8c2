//! Proc-macros for `vecops`.
use proc_macro::TokenStream;

mod swizzle;

/// Generates a named swizzle trait for `N` component sources.
///
/// ```rust, ignore
/// vecops_macros::swizzle!(Swizzle3, 3, [x, y, z]);
/// ```
///
/// expands to a trait `Swizzle3: Source<3>` carrying one method per 2 and 3
/// letter combination of the component names (`xx`, `xy`, ..., `zzz`), each
/// returning the selected components as an array, plus a blanket impl for
/// every `Source<3>`.
#[proc_macro]
pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    swizzle::swizzle(token_stream)
}
