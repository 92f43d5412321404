use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["storefront-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(cli.api_base.is_none());
}

#[test]
fn parses_products_with_defaults() {
    let cli = Cli::try_parse_from(["storefront-cli", "products"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Products {
            search: None,
            min_price: None,
            max_price: None,
            limit: None,
            ref sort,
            ref categories,
            ref attrs,
        }) if sort == "recommended" && categories.is_empty() && attrs.is_empty()
    ));
}

#[test]
fn parses_products_with_every_filter() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "products",
        "--search",
        "shirt",
        "--category",
        "men's clothing",
        "--category",
        "jewelery",
        "--min-price",
        "20",
        "--max-price",
        "50.5",
        "--sort",
        "price-high",
        "--attr",
        "FABRIC:Cotton",
        "--attr",
        "suitable-for:winter",
        "--limit",
        "0",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Products {
        search,
        categories,
        min_price,
        max_price,
        sort,
        attrs,
        limit,
    }) = cli.command
    else {
        panic!("expected products command");
    };
    assert_eq!(search.as_deref(), Some("shirt"));
    assert_eq!(categories, vec!["men's clothing", "jewelery"]);
    assert_eq!(min_price, Some(Decimal::from(20)));
    assert_eq!(max_price, Some(Decimal::new(505, 1)));
    assert_eq!(sort, "price-high");
    assert_eq!(attrs, vec!["FABRIC:Cotton", "suitable-for:winter"]);
    assert_eq!(limit, Some(0));
}

#[test]
fn rejects_non_numeric_price() {
    let result = Cli::try_parse_from(["storefront-cli", "products", "--min-price", "cheap"]);
    assert!(result.is_err());
}

#[test]
fn api_base_is_global() {
    let cli = Cli::try_parse_from([
        "storefront-cli",
        "categories",
        "--api-base",
        "http://localhost:9000",
    ])
    .expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Categories)));
    assert_eq!(cli.api_base.as_deref(), Some("http://localhost:9000"));
}

#[test]
fn parses_filters_command() {
    let cli = Cli::try_parse_from(["storefront-cli", "filters"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Filters)));
}
