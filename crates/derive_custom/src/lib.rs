use proc_macro2::Literal;
use quote::quote;
use syn::*;

/// Turns a struct or enum into a parameter type. With a string
/// argument, e.g. `#[collisim_parameters("arena")]`, the type is
/// read from the section of that name in the parameter file.
/// Without an argument it can only be used inside other sections.
#[proc_macro_attribute]
pub fn collisim_parameters(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    parameter_attr_derive(args, input)
}

pub(crate) fn parameter_attr_derive(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let args: proc_macro2::TokenStream = args.into();
    let name: Option<Literal> = args.into_iter().next().map(|x| match x {
        proc_macro2::TokenTree::Literal(s) => s,
        _ => panic!("Unexpected token in collisim_parameters macro"),
    });

    let trait_impl: proc_macro2::TokenStream = parameters_trait_impl(input.clone(), name).into();
    let input: proc_macro2::TokenStream = input.into();
    let output = quote! {
        #[derive(Clone, serde::Serialize, serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        #[serde(rename_all = "snake_case")]
        #input

        #trait_impl
    };
    output.into()
}

pub(crate) fn parameters_trait_impl(
    input: proc_macro::TokenStream,
    section_name: Option<Literal>,
) -> proc_macro::TokenStream {
    let ast: DeriveInput = syn::parse(input).unwrap();
    let type_name = &ast.ident;
    let (impl_generics, type_generics, where_clause) = &ast.generics.split_for_impl();

    let section_name = match section_name {
        Some(section_name) => quote! { Some(#section_name) },
        None => quote! { None },
    };
    let gen = quote! {
        impl #impl_generics ::derive_traits::SectionParameters for #type_name #type_generics #where_clause {
            fn section_name() -> Option<&'static str> {
                #section_name
            }
        }
    };
    gen.into()
}
