use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{Attribute, Lit};

pub(crate) const ATTR_NAME: &str = "binpad";

/// Length metadata of one field, resolved while the derive expands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub(crate) enum FieldLen {
    Inherit,
    Natural,
    Fixed(usize),
    Skip,
}

impl FieldLen {
    fn fixed(n: usize) -> Self {
        if n == 0 {
            FieldLen::Natural
        } else {
            FieldLen::Fixed(n)
        }
    }

    // Same rule as binpad::attr::Len::from_tag.
    fn from_tag(tag: &str) -> Self {
        if tag == "-" {
            return FieldLen::Skip;
        }
        match tag.parse::<i64>() {
            Ok(n) if n >= 0 => usize::try_from(n)
                .map(FieldLen::fixed)
                .unwrap_or(FieldLen::Inherit),
            _ => FieldLen::Inherit,
        }
    }

    /// Expression for the directive handed to the field's `encode_to`.
    /// `None` for skipped fields, which generate no code.
    pub(crate) fn to_tokens(self, inherited: &TokenStream) -> Option<TokenStream> {
        match self {
            FieldLen::Inherit => Some(inherited.clone()),
            FieldLen::Natural => Some(quote! { ::binpad::attr::Len::Natural }),
            FieldLen::Fixed(n) => Some(quote! { ::binpad::attr::Len::Fixed(#n) }),
            FieldLen::Skip => None,
        }
    }
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> (FieldLen, Vec<TokenStream>) {
    let mut len = FieldLen::Inherit;
    let mut errors = vec![];

    for attr in attrs {
        if !attr.path().is_ident(ATTR_NAME) {
            continue; // not ours
        }
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                len = FieldLen::Skip;
                Ok(())
            } else if meta.path.is_ident("len") {
                let lit: Lit = meta.value()?.parse()?;
                len = parse_len_lit(&lit)?;
                Ok(())
            } else {
                Err(meta.error("unknown attribute"))
            }
        });
        if let Err(e) = parsed {
            errors.push(e.to_compile_error());
        }
    }

    (len, errors)
}

fn parse_len_lit(lit: &Lit) -> syn::Result<FieldLen> {
    match lit {
        Lit::Int(i) => Ok(FieldLen::fixed(i.base10_parse::<usize>()?)),
        Lit::Str(s) => Ok(FieldLen::from_tag(&s.value())),
        _ => Err(syn::Error::new(lit.span(), "illegal attribute argument")),
    }
}

/// Length metadata belongs on fields; reject it anywhere else.
pub(crate) fn reject_attrs(attrs: &[Attribute]) -> Vec<TokenStream> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident(ATTR_NAME))
        .map(|attr| {
            let span = attr.span();
            quote_spanned! {span=>
                compile_error!("illegal attribute target");
            }
        })
        .collect()
}
