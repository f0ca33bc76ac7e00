use parsing::ArnComponents;
use proc_macro_crate::{Error as MacroCrateError, FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

pub fn arn_impl(input: &LitStr) -> Result<TokenStream, syn::Error> {
    let value = input.value();
    let components =
        ArnComponents::parse(&value).map_err(|e| syn::Error::new_spanned(input, e))?;
    let root = crate_root("aws-arn").map_err(|err| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("Root crate not found:{err}"),
        )
    })?;

    // Same fallback as runtime parsing: an empty partition means `aws`.
    let partition = match components.partition {
        None | Some("aws") => quote!(#root::Partition::Aws),
        Some("aws-cn") => quote!(#root::Partition::AwsCn),
        Some("aws-us-gov") => quote!(#root::Partition::AwsUsGov),
        Some(other) => {
            return Err(syn::Error::new_spanned(
                input,
                format!(
                    "unknown partition value: {other:?}, must be one of: {:?}",
                    ["aws", "aws-cn", "aws-us-gov"]
                ),
            ));
        }
    };

    let mut expanded = quote! {
        #root::Arn::builder().partition(#partition)
    };
    if let Some(service) = components.service {
        expanded.extend(quote! { .service(#service) });
    }
    if let Some(region) = components.region {
        expanded.extend(quote! { .region(#region) });
    }
    if let Some(account_id) = components.account_id {
        expanded.extend(quote! { .account_id(#account_id) });
    }
    if let Some(resource_type) = components.resource_type {
        expanded.extend(quote! { .resource_type(#resource_type) });
    }
    if let Some(resource_id) = components.resource_id {
        expanded.extend(quote! { .resource_id(#resource_id) });
    }
    expanded.extend(quote! { .build() });
    Ok(expanded)
}

fn crate_root(name: &str) -> Result<TokenStream, MacroCrateError> {
    crate_name(name).map(|found| match found {
        FoundCrate::Name(found_name) => {
            let ident = syn::Ident::new(&found_name, proc_macro2::Span::call_site());
            quote!(::#ident)
        }
        FoundCrate::Itself => quote!(crate),
    })
}
