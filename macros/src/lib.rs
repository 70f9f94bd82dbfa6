use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Attribute, Data, DeriveInput, Fields, GenericArgument, LitStr, Meta, PathArguments,
    PathSegment, Type, Visibility, parse_macro_input,
};

/// Derive `envar::Record` for a struct with named fields
///
/// Field attributes:
/// - `#[envar("KEY")]` or `#[envar(key = "KEY")]`: read from `KEY` instead of the field name
/// - `#[envar(skip)]`: never bind this field
///
/// Fields without `pub` visibility are never bound either.
#[proc_macro_derive(Envar, attributes(envar))]
pub fn derive_envar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate_record(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate_record(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Envar can only be derived for structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Envar can only be derived for structs",
            ));
        }
    };

    let mut descriptors = Vec::new();
    let mut assign_arms = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let field_type = &field.ty;
        let name = field_ident.unraw().to_string();
        let config = parse_field_config(&field.attrs)?;

        let settable = !config.skip && !matches!(field.vis, Visibility::Inherited);
        let kind_name = unsupported_name(field_type);

        let key = match config.key {
            Some(key) => quote! { ::std::option::Option::Some(#key) },
            None => quote! { ::std::option::Option::None },
        };
        descriptors.push(quote! {
            ::envar::FieldDescriptor {
                name: #name,
                key: #key,
                kind: (&&::envar::macros::FieldSlot::<#field_type>::new()).field_kind(#kind_name),
                settable: #settable,
            }
        });

        // Unsettable fields get no arm, so the binder can never write them
        // even through a hand-crafted index
        if settable {
            assign_arms.push(quote! {
                #index => {
                    self.#field_ident =
                        (&&::envar::macros::FieldSlot::<#field_type>::new()).convert(value)?;
                    ::std::result::Result::Ok(())
                }
            });
        }
    }

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envar::Record for #struct_name #ty_generics #where_clause {
            fn fields() -> ::std::vec::Vec<::envar::FieldDescriptor> {
                #[allow(unused_imports)]
                use ::envar::macros::{ViaFallback as _, ViaFieldType as _};

                ::std::vec![#(#descriptors),*]
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                index: usize,
                value: ::envar::Value,
            ) -> ::std::result::Result<(), ::envar::BindError> {
                #[allow(unused_imports)]
                use ::envar::macros::{ViaFallback as _, ViaFieldType as _};

                match index {
                    #(#assign_arms)*
                    _ => ::std::result::Result::Err(::envar::BindError::InvalidTarget {
                        reason: ::std::format!("no writable field at index {}", index),
                    }),
                }
            }
        }
    })
}

#[derive(Debug, Default)]
struct FieldConfig {
    key: Option<String>,
    skip: bool,
}

/// Parse `#[envar("KEY")]`, `#[envar(key = "KEY")]` and `#[envar(skip)]`
fn parse_field_config(attrs: &[Attribute]) -> syn::Result<FieldConfig> {
    let mut config = FieldConfig::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("envar")) {
        let list = match &attr.meta {
            Meta::List(list) => list,
            _ => {
                return Err(syn::Error::new_spanned(
                    attr,
                    "envar attribute must be a list: #[envar(\"KEY\")]",
                ));
            }
        };

        if let Ok(key) = list.parse_args::<LitStr>() {
            config.key = Some(key.value());
            continue;
        }

        list.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let value: LitStr = meta.value()?.parse()?;
                config.key = Some(value.value());
                Ok(())
            } else if meta.path.is_ident("skip") {
                config.skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown envar attribute, expected `key = \"...\"` or `skip`"))
            }
        })?;
    }

    // An empty key falls back to the field name
    if config.key.as_deref() == Some("") {
        config.key = None;
    }

    Ok(config)
}

/// Display name reported by `UnsupportedType` when the field's type has no
/// `FieldType` impl
///
/// For a `Vec<T>` the element is named, since that is the part the binder
/// could not coerce. The name is for display only: it is rendered from the
/// tokens as written, so aliases and paths show their last segment.
fn unsupported_name(ty: &Type) -> String {
    match extract_vec_type(ty) {
        Some(element) => type_name(element),
        None => type_name(ty),
    }
}

/// Extract the element type from Vec<T>
fn extract_vec_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = strip_group(ty) else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != "Vec" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}

// Types passed through macro_rules arrive wrapped in invisible groups
fn strip_group(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => strip_group(&group.elem),
        Type::Paren(paren) => strip_group(&paren.elem),
        _ => ty,
    }
}

fn type_name(ty: &Type) -> String {
    match strip_group(ty) {
        Type::Path(type_path) if type_path.qself.is_none() => match type_path.path.segments.last() {
            Some(segment) => segment_name(segment),
            None => String::new(),
        },
        Type::Reference(reference) => {
            let mutability = if reference.mutability.is_some() { "mut " } else { "" };
            format!("&{}{}", mutability, type_name(&reference.elem))
        }
        Type::Slice(slice) => format!("[{}]", type_name(&slice.elem)),
        Type::Array(array) => {
            let len = &array.len;
            format!("[{}; {}]", type_name(&array.elem), quote! { #len })
        }
        Type::Tuple(tuple) => {
            let elems: Vec<String> = tuple.elems.iter().map(type_name).collect();
            format!("({})", elems.join(", "))
        }
        // Trait objects, function pointers and the like keep their token rendering
        other => quote! { #other }.to_string(),
    }
}

fn segment_name(segment: &PathSegment) -> String {
    let ident = segment.ident.unraw().to_string();
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return ident;
    };
    let args: Vec<String> = args
        .args
        .iter()
        .map(|arg| match arg {
            GenericArgument::Type(ty) => type_name(ty),
            GenericArgument::Lifetime(lifetime) => lifetime.to_string(),
            other => quote! { #other }.to_string(),
        })
        .collect();
    format!("{}<{}>", ident, args.join(", "))
}
