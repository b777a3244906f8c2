//! Swizzle implementation macro.

use proc_macro::TokenStream;
use proc_macro2::Literal;
use quote::{format_ident, quote};
use syn::{Ident, LitInt, Token, parse::Parse, punctuated::Punctuated};

/// The longest swizzle generated, in components.
const MAX_SWIZZLE_LEN: usize = 3;

/// Parses macro input like `Swizzle2, 2, [x, y]` and produces a trait
/// with the swizzle methods xx, xy, yx, yy, xxx, ..., yyy.
struct Swizzling {
    trait_name: Ident,
    dimension: usize,
    names: Vec<Ident>,
}

impl Parse for Swizzling {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let trait_name = Ident::parse(input)?;
        let _comma = <Token![,]>::parse(input)?;
        let dimension_lit = LitInt::parse(input)?;
        let dimension = dimension_lit.base10_parse::<usize>()?;
        let _comma = <Token![,]>::parse(input)?;

        // Parse the bracketed component names: [x, y, z]
        let bracketed;
        syn::bracketed!(bracketed in input);
        let names: Punctuated<Ident, Token![,]> =
            bracketed.parse_terminated(Ident::parse, Token![,])?;
        let names = names.into_iter().collect::<Vec<_>>();

        if names.len() != dimension {
            return Err(syn::Error::new(
                dimension_lit.span(),
                format!(
                    "expected {dimension} component names, found {}",
                    names.len()
                ),
            ));
        }

        Ok(Swizzling {
            trait_name,
            dimension,
            names,
        })
    }
}

/// Every index sequence of length `len` over `0..dimension`, in
/// lexicographic order.
fn sequences(dimension: usize, len: usize) -> Vec<Vec<usize>> {
    let mut out = vec![vec![]];
    for _ in 0..len {
        out = out
            .into_iter()
            .flat_map(|prefix: Vec<usize>| {
                (0..dimension).map(move |i| {
                    let mut seq = prefix.clone();
                    seq.push(i);
                    seq
                })
            })
            .collect();
    }
    out
}

impl Swizzling {
    fn into_tokens(self) -> proc_macro2::TokenStream {
        let Swizzling {
            trait_name,
            dimension,
            names,
        } = self;

        let n = Literal::usize_unsuffixed(dimension);
        let methods = (2..=MAX_SWIZZLE_LEN)
            .flat_map(|len| sequences(dimension, len))
            .map(|seq| {
                let method = format_ident!(
                    "{}",
                    seq.iter()
                        .map(|&i| names[i].to_string())
                        .collect::<String>()
                );
                let len = Literal::usize_unsuffixed(seq.len());
                let doc = format!("Returns the `{method}` swizzle.");
                let indices = seq.iter().map(|&i| Literal::usize_unsuffixed(i));
                quote! {
                    #[doc = #doc]
                    fn #method(&self) -> [Self::Scalar; #len] {
                        let c = <Self as crate::Source<#n>>::components(self);
                        [#(c[#indices]),*]
                    }
                }
            });

        let trait_doc = format!(
            "Named swizzles over {dimension} component sources.\n\nImplemented for \
             every `Source<{dimension}>`."
        );
        quote! {
            #[doc = #trait_doc]
            pub trait #trait_name: crate::Source<#n> {
                #(#methods)*
            }

            impl<T: crate::Source<#n> + ?Sized> #trait_name for T {}
        }
    }
}

pub fn swizzle(token_stream: TokenStream) -> TokenStream {
    let swizzling: Swizzling = syn::parse_macro_input!(token_stream);
    swizzling.into_tokens().into()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanity_sequences() {
        assert_eq!(
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]],
            sequences(2, 2)
        );
        assert_eq!(27, sequences(3, 3).len());
        assert_eq!(vec![2, 1, 0], sequences(3, 3)[21]);
    }

    #[test]
    fn parse_rejects_mismatched_names() {
        let result = syn::parse_str::<Swizzling>("Swizzle3, 3, [x, y]");
        assert!(result.is_err());
    }

    #[test]
    fn generates_one_method_per_sequence() {
        let swizzling = syn::parse_str::<Swizzling>("Swizzle2, 2, [x, y]").unwrap();
        let tokens = swizzling.into_tokens().to_string();
        assert!(tokens.contains("fn yx"));
        assert!(tokens.contains("fn yxy"));
        assert!(!tokens.contains("fn z"));
    }
}
