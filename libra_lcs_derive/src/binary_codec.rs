//! Derive macro for canonical (LCS) serialization.
//!
//! Generates `Encode` and `Decode` implementations for structs and enums.
//!
//! # Supported Types
//!
//! - **Named structs**: `struct RawTransaction { sender: AccountAddress, .. }`
//! - **Tuple structs**: `struct AccountAddress([u8; 32])`
//! - **Enums**: `enum TransactionArgument { U64(u64), Address(AccountAddress) }`
//!
//! Unit structs and unions are rejected at compile time.
//!
//! # Binary Format
//!
//! Fields are serialized in declaration order, so the order of fields in the
//! source *is* the wire contract. Enums write a little-endian `u32`
//! discriminant followed by the variant's fields. Decoding an unknown
//! discriminant yields `CodecError::UnknownVariant` carrying the type name.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DataEnum, DeriveInput, Fields, parse_macro_input};

/// Derives `Encode` and `Decode` for a type.
///
/// # Example
///
/// ```ignore
/// use libra_lcs_derive::BinaryCodec;
///
/// #[derive(BinaryCodec)]
/// pub struct GasConstraint {
///     pub max_gas_amount: u64,
///     pub gas_unit_price: u64,
/// }
/// ```
///
/// # Generated Code
///
/// ```ignore
/// impl Encode for GasConstraint {
///     fn encode<S: EncodeSink>(&self, out: &mut S) -> Result<(), CodecError> {
///         Encode::encode(&self.max_gas_amount, out)?;
///         Encode::encode(&self.gas_unit_price, out)?;
///         Ok(())
///     }
/// }
///
/// impl Decode for GasConstraint {
///     fn decode(cursor: &mut Cursor<'_>) -> Result<Self, CodecError> {
///         Ok(Self {
///             max_gas_amount: Decode::decode(cursor)?,
///             gas_unit_price: Decode::decode(cursor)?,
///         })
///     }
/// }
/// ```
pub fn derive_binary_codec(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (encode_body, decode_body) = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => named_struct_bodies(fields),
            Fields::Unnamed(fields) => tuple_struct_bodies(fields),
            Fields::Unit => {
                return Err(syn::Error::new_spanned(
                    input,
                    "BinaryCodec derive requires at least one field; unit structs have no wire form",
                ));
            }
        },
        Data::Enum(data_enum) => enum_bodies(name, data_enum)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "BinaryCodec derive does not support unions",
            ));
        }
    };

    Ok(quote! {
        impl #impl_generics crate::types::encoding::Encode for #name #ty_generics #where_clause {
            fn encode<S: crate::types::encoding::EncodeSink>(
                &self,
                out: &mut S,
            ) -> ::std::result::Result<(), crate::types::errors::CodecError> {
                #encode_body
            }
        }

        impl #impl_generics crate::types::encoding::Decode for #name #ty_generics #where_clause {
            fn decode(
                cursor: &mut crate::types::cursor::Cursor<'_>,
            ) -> ::std::result::Result<Self, crate::types::errors::CodecError> {
                #decode_body
            }
        }
    })
}

/// Bodies for named-field structs: fields accessed as `self.field_name`.
fn named_struct_bodies(fields: &syn::FieldsNamed) -> (TokenStream2, TokenStream2) {
    let field_names: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();

    let encode_fields = field_names.iter().map(|name| {
        quote! { crate::types::encoding::Encode::encode(&self.#name, out)?; }
    });
    let decode_fields = field_names.iter().map(|name| {
        quote! { #name: crate::types::encoding::Decode::decode(cursor)?, }
    });

    (
        quote! {
            #(#encode_fields)*
            Ok(())
        },
        quote! {
            Ok(Self {
                #(#decode_fields)*
            })
        },
    )
}

/// Bodies for tuple structs: fields accessed by index, as in newtype wrappers.
fn tuple_struct_bodies(fields: &syn::FieldsUnnamed) -> (TokenStream2, TokenStream2) {
    let field_indices: Vec<_> = (0..fields.unnamed.len()).map(syn::Index::from).collect();

    let encode_fields = field_indices.iter().map(|idx| {
        quote! { crate::types::encoding::Encode::encode(&self.#idx, out)?; }
    });
    let decode_fields = field_indices.iter().map(|_| {
        quote! { crate::types::encoding::Decode::decode(cursor)?, }
    });

    (
        quote! {
            #(#encode_fields)*
            Ok(())
        },
        quote! {
            Ok(Self(
                #(#decode_fields)*
            ))
        },
    )
}

/// Bodies for enums: `u32` discriminant, then the variant's fields in order.
fn enum_bodies(name: &syn::Ident, data_enum: &DataEnum) -> syn::Result<(TokenStream2, TokenStream2)> {
    let discriminants = compute_discriminants(data_enum)?;
    let type_name = name.to_string();

    let encode_arms = data_enum.variants.iter().zip(&discriminants).map(|(variant, &tag)| {
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Unit => quote! {
                Self::#variant_name => {
                    crate::types::encoding::Encode::encode(&#tag, out)?;
                }
            },
            Fields::Unnamed(fields) => {
                let bindings: Vec<_> = (0..fields.unnamed.len()).map(|i| format_ident!("f{}", i)).collect();
                quote! {
                    Self::#variant_name(#(#bindings),*) => {
                        crate::types::encoding::Encode::encode(&#tag, out)?;
                        #(crate::types::encoding::Encode::encode(#bindings, out)?;)*
                    }
                }
            }
            Fields::Named(fields) => {
                let bindings: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();
                quote! {
                    Self::#variant_name { #(#bindings),* } => {
                        crate::types::encoding::Encode::encode(&#tag, out)?;
                        #(crate::types::encoding::Encode::encode(#bindings, out)?;)*
                    }
                }
            }
        }
    });

    let decode_arms = data_enum.variants.iter().zip(&discriminants).map(|(variant, &tag)| {
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Unit => quote! {
                #tag => Ok(Self::#variant_name),
            },
            Fields::Unnamed(fields) => {
                let decode_fields = (0..fields.unnamed.len()).map(|_| {
                    quote! { crate::types::encoding::Decode::decode(cursor)?, }
                });
                quote! {
                    #tag => Ok(Self::#variant_name(#(#decode_fields)*)),
                }
            }
            Fields::Named(fields) => {
                let decode_fields = fields.named.iter().map(|f| {
                    let field_name = &f.ident;
                    quote! { #field_name: crate::types::encoding::Decode::decode(cursor)?, }
                });
                quote! {
                    #tag => Ok(Self::#variant_name { #(#decode_fields)* }),
                }
            }
        }
    });

    Ok((
        quote! {
            match self {
                #(#encode_arms)*
            }
            Ok(())
        },
        quote! {
            let tag: u32 = crate::types::encoding::Decode::decode(cursor)?;
            match tag {
                #(#decode_arms)*
                tag => Err(crate::types::errors::CodecError::UnknownVariant {
                    type_name: #type_name,
                    tag,
                }),
            }
        },
    ))
}

/// Computes the wire tag of every variant.
///
/// Follows Rust's discriminant rules: an explicit `Variant = 5` is used as is,
/// otherwise the tag is the previous one plus one, starting at 0.
fn compute_discriminants(data_enum: &DataEnum) -> syn::Result<Vec<u32>> {
    let mut discriminants = Vec::with_capacity(data_enum.variants.len());
    let mut next: Option<u32> = Some(0);

    for variant in &data_enum.variants {
        let tag = match &variant.discriminant {
            Some((_, expr)) => parse_discriminant_expr(expr)?,
            None => next.ok_or_else(|| {
                syn::Error::new_spanned(variant, "enum discriminant overflows u32")
            })?,
        };
        discriminants.push(tag);
        next = tag.checked_add(1);
    }

    Ok(discriminants)
}

fn parse_discriminant_expr(expr: &syn::Expr) -> syn::Result<u32> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(lit_int),
            ..
        }) => lit_int.base10_parse::<u32>(),
        _ => Err(syn::Error::new_spanned(
            expr,
            "discriminant must be an integer literal that fits in u32",
        )),
    }
}
