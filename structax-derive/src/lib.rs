use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Lit, Meta, Type};

/// Derive macro that describes the monetary input fields of a struct.
///
/// For each field, extracts:
/// - Field name as it appears in JSON/CSV (respects #[serde(rename = "...")])
/// - Command-line flag (`--field-name`)
/// - Required (false if `Option<T>` or `#[serde(default)]`)
/// - Description (from doc comments)
///
/// Generates an `input_fields() -> &'static [InputField]` method.
#[proc_macro_derive(InputSchema, attributes(serde))]
pub fn derive_input_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => panic!("InputSchema only supports structs with named fields"),
        },
        _ => panic!("InputSchema only supports structs"),
    };

    let field_info: Vec<_> = fields
        .iter()
        .map(|field| {
            let field_name = field.ident.as_ref().unwrap().to_string();

            // clap derives long flags from the Rust field name
            let flag = format!("--{}", field_name.replace('_', "-"));

            // Check for #[serde(rename = "...")]
            let input_name = get_serde_rename(&field.attrs).unwrap_or(field_name);

            // Optional if Option<T> or #[serde(default)]
            let required = !is_option_type(&field.ty) && !has_serde_default(&field.attrs);

            // Extract doc comments
            let doc = get_doc_comment(&field.attrs);

            (input_name, flag, required, doc)
        })
        .collect();

    let field_entries = field_info.iter().map(|(name, flag, required, desc)| {
        quote! {
            InputField {
                name: #name,
                flag: #flag,
                required: #required,
                description: #desc,
            }
        }
    });

    let expanded = quote! {
        impl #name {
            pub fn input_fields() -> &'static [InputField] {
                static FIELDS: &[InputField] = &[
                    #(#field_entries),*
                ];
                FIELDS
            }
        }
    };

    TokenStream::from(expanded)
}

fn serde_tokens(attrs: &[syn::Attribute]) -> impl Iterator<Item = String> + '_ {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| match &attr.meta {
            Meta::List(meta_list) => Some(meta_list.tokens.to_string()),
            _ => None,
        })
}

fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    for tokens in serde_tokens(attrs) {
        // Simple parsing: look for rename = "..."
        if let Some(start) = tokens.find("rename") {
            let rest = &tokens[start..];
            if let Some(eq_pos) = rest.find('=') {
                let after_eq = rest[eq_pos + 1..].trim();
                if let Some(stripped) = after_eq.strip_prefix('"') {
                    if let Some(end_quote) = stripped.find('"') {
                        return Some(stripped[..end_quote].to_string());
                    }
                }
            }
        }
    }
    None
}

fn has_serde_default(attrs: &[syn::Attribute]) -> bool {
    serde_tokens(attrs).any(|tokens| {
        tokens
            .split(',')
            .any(|part| part.trim().starts_with("default"))
    })
}

fn get_doc_comment(attrs: &[syn::Attribute]) -> String {
    attrs
        .iter()
        .filter_map(|attr| {
            if !attr.path().is_ident("doc") {
                return None;
            }
            if let Meta::NameValue(meta) = &attr.meta {
                if let syn::Expr::Lit(expr_lit) = &meta.value {
                    if let Lit::Str(lit_str) = &expr_lit.lit {
                        return Some(lit_str.value().trim().to_string());
                    }
                }
            }
            None
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_option_type(ty: &Type) -> bool {
    if let Type::Path(type_path) = ty {
        if let Some(segment) = type_path.path.segments.last() {
            return segment.ident == "Option";
        }
    }
    false
}
