use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, parse_quote, Data, DeriveInput, Fields, Generics, Index, Member};

mod helpers;

use helpers::{parse_field_attrs, reject_attrs};

/// Derives `binpad::BinEncode` for a struct.
///
/// Fields are encoded in declaration order. Each field takes the length
/// directive of its parent unless it declares its own:
///
/// - `#[binpad(len = 4)]` or `#[binpad(len = "4")]` pads the field to 4 bytes
/// - `#[binpad(len = 0)]` keeps the field at natural width
/// - `#[binpad(skip)]` or `#[binpad(len = "-")]` leaves it out
///
/// A string `len` that is not a non-negative integer is ignored and the
/// field inherits.
#[proc_macro_derive(BinEncode, attributes(binpad))]
pub fn derive_binencode(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let attr_errors = reject_attrs(&input.attrs);
    let ident = &input.ident;

    let (generics, body) = match input.data {
        Data::Struct(s) => encode_fields(input.generics, s.fields),
        Data::Enum(_) | Data::Union(_) => {
            let span = ident.span();
            (
                input.generics,
                quote_spanned! {span=>
                    compile_error!("BinEncode can only be derived for structs");
                },
            )
        }
    };
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let s = quote! {
        #[automatically_derived]
        impl #impl_generics ::binpad::BinEncode for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn encode_to(
                &self,
                out: &mut dyn ::binpad::BinWrite,
                len: ::binpad::attr::Len,
            ) -> ::binpad::Result<()> {
                #body
                ::core::result::Result::Ok(())
            }
        }
        #(#attr_errors)*
    };
    s.into()
}

fn encode_fields(mut generics: Generics, fields: Fields) -> (Generics, TokenStream2) {
    let fields = match fields {
        Fields::Named(n) => n.named,
        Fields::Unnamed(u) => u.unnamed,
        Fields::Unit => return (generics, quote! {}),
    };
    let generic = !generics.params.is_empty();
    let inherited = quote! { len };

    let mut encodes = vec![];
    for (i, f) in fields.into_iter().enumerate() {
        let span = f.span();
        let (field_len, attr_errors) = parse_field_attrs(&f.attrs);

        let len = match field_len.to_tokens(&inherited) {
            Some(len) => len,
            None => {
                encodes.push(quote! { #(#attr_errors)* });
                continue;
            }
        };

        if generic {
            let ty = &f.ty;
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote! { #ty: ::binpad::BinEncode });
        }

        let member = match f.ident {
            Some(ident) => Member::Named(ident),
            None => Member::Unnamed(Index {
                index: i as u32,
                span: Span::call_site(),
            }),
        };

        encodes.push(quote_spanned! {span=>
            ::binpad::BinEncode::encode_to(&self.#member, out, #len)?;
        });
        encodes.push(quote! { #(#attr_errors)* });
    }
    (generics, quote! { #(#encodes)* })
}
