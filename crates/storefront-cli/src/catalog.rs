//! Catalog commands: fetch from the product source, run the filter/sort
//! pipeline, print plain-text tables.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use storefront_core::{
    parse_selector, AppConfig, AttributeGroup, CatalogAction, CatalogState, CatalogView,
    PriceRange, SortKey,
};
use storefront_source::{load_catalog, FakeStoreClient, LoadOptions};

#[derive(Debug, Default)]
pub(crate) struct ProductsArgs {
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: String,
    pub attrs: Vec<String>,
    pub limit: Option<usize>,
}

fn client(config: &AppConfig) -> anyhow::Result<FakeStoreClient> {
    Ok(FakeStoreClient::with_base_url(
        &config.api_base_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?)
}

/// Turns the command-line filters into reducer actions, in the order a
/// shopper would click them.
///
/// # Errors
///
/// Returns an error for an inverted price range or an unknown attribute
/// selector.
pub(crate) fn actions_from_args(args: &ProductsArgs) -> anyhow::Result<Vec<CatalogAction>> {
    let mut actions = Vec::new();

    if let Some(search) = args.search.as_ref().filter(|s| !s.is_empty()) {
        actions.push(CatalogAction::SetSearch(search.clone()));
    }
    // Categories are toggles in the reducer, so a repeated flag must not
    // switch its category back off.
    let mut seen = BTreeSet::new();
    for category in &args.categories {
        if seen.insert(category.as_str()) {
            actions.push(CatalogAction::ToggleCategory(category.clone()));
        }
    }

    if args.min_price.is_some() || args.max_price.is_some() {
        let defaults = PriceRange::default();
        let range = PriceRange::new(
            args.min_price.unwrap_or(defaults.min()),
            args.max_price.unwrap_or(defaults.max()),
        )?;
        actions.push(CatalogAction::SetPriceRange(range));
    }

    for selector in &args.attrs {
        let (group, option) = parse_selector(selector)?;
        actions.push(CatalogAction::ToggleOption {
            group,
            option,
            included: true,
        });
    }

    actions.push(CatalogAction::SetSort(SortKey::parse(&args.sort)));
    Ok(actions)
}

pub(crate) async fn run_products(config: &AppConfig, args: ProductsArgs) -> anyhow::Result<()> {
    let actions = actions_from_args(&args)?;

    let display_limit = match args.limit {
        Some(0) => None,
        Some(n) => Some(n),
        None => config.display_limit,
    };
    let loaded = load_catalog(
        &client(config)?,
        LoadOptions {
            copies: config.catalog_copies,
            display_limit,
        },
    )
    .await;

    let mut state = CatalogState::new(loaded.products, loaded.categories);
    tracing::debug!(
        products = state.products().len(),
        actions = actions.len(),
        "applying filters"
    );
    for action in actions {
        state.apply(action);
    }

    print!("{}", render_view(&state.view()));
    Ok(())
}

pub(crate) async fn run_categories(config: &AppConfig) -> anyhow::Result<()> {
    let categories = categories_or_empty(&client(config)?).await;
    print!("{}", render_categories(&categories, &config.api_base_url));
    Ok(())
}

/// Fetches the category list. A failed fetch is logged and yields no
/// categories.
async fn categories_or_empty(client: &FakeStoreClient) -> Vec<String> {
    client.fetch_categories().await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to fetch categories");
        Vec::new()
    })
}

fn render_categories(categories: &[String], api_base_url: &str) -> String {
    if categories.is_empty() {
        return format!("no categories returned by {api_base_url}\n");
    }
    categories.iter().map(|c| format!("{c}\n")).collect()
}

pub(crate) fn run_filters() {
    println!("{:<14}{:<22}MENU", "SLUG", "SORT");
    for key in SortKey::ALL {
        let menu = if SortKey::MENU.contains(&key) { "yes" } else { "" };
        println!("{:<14}{:<22}{menu}", key.slug(), key.label());
    }
    println!();
    for group in AttributeGroup::ALL {
        println!("{:<16}{}", group.label(), group.options().join(", "));
    }
}

/// Renders a view as a fixed-width table followed by a count line.
pub(crate) fn render_view(view: &CatalogView) -> String {
    if view.is_empty() {
        return format!("No items found (catalog has {} products)\n", view.total_count);
    }

    let mut out = format!(
        "{:<7}{:>10}  {:<12}{:<14}{:<3}TITLE\n",
        "ID", "PRICE", "RATING", "STOCK", "WL"
    );
    for item in &view.items {
        let stock = if item.out_of_stock { "OUT OF STOCK" } else { "in stock" };
        let wishlist = if item.wishlisted { "*" } else { "" };
        let price = format!("${:.2}", item.product.price.round_dp(2));
        out.push_str(&format!(
            "{:<7}{:>10}  {:<12}{:<14}{:<3}{}\n",
            item.product.id,
            price,
            item.product.rating.stars(),
            stock,
            wishlist,
            item.product.title,
        ));
    }
    out.push_str(&format!(
        "{} ITEMS ({} in stock) of {} | sort: {}\n",
        view.items.len(),
        view.in_stock_count,
        view.total_count,
        view.sort.label()
    ));
    out
}

#[cfg(test)]
mod tests {
    use storefront_core::{Product, Rating};

    use super::*;

    fn product(id: i64, title: &str, cents: i64) -> Product {
        Product {
            id,
            title: title.to_string(),
            description: String::new(),
            category: "jewelery".to_string(),
            price: Decimal::new(cents, 2),
            image: None,
            rating: Rating {
                rate: 3.0,
                count: 4,
            },
        }
    }

    #[test]
    fn actions_from_empty_args_only_set_sort() {
        let args = ProductsArgs {
            sort: "recommended".to_string(),
            ..ProductsArgs::default()
        };
        let actions = actions_from_args(&args).unwrap();
        assert_eq!(actions, vec![CatalogAction::SetSort(SortKey::Recommended)]);
    }

    #[test]
    fn actions_fill_missing_price_bound_with_default() {
        let args = ProductsArgs {
            min_price: Some(Decimal::from(20)),
            sort: "price-low".to_string(),
            ..ProductsArgs::default()
        };
        let actions = actions_from_args(&args).unwrap();
        let expected = PriceRange::new(Decimal::from(20), Decimal::ONE_THOUSAND).unwrap();
        assert_eq!(actions[0], CatalogAction::SetPriceRange(expected));
        assert_eq!(actions[1], CatalogAction::SetSort(SortKey::PriceAsc));
    }

    #[test]
    fn actions_reject_unknown_selector() {
        let args = ProductsArgs {
            attrs: vec!["FABRIC:Denim".to_string()],
            ..ProductsArgs::default()
        };
        assert!(actions_from_args(&args).is_err());
    }

    #[test]
    fn actions_reject_inverted_price_range() {
        let args = ProductsArgs {
            min_price: Some(Decimal::from(80)),
            max_price: Some(Decimal::from(10)),
            ..ProductsArgs::default()
        };
        assert!(actions_from_args(&args).is_err());
    }

    #[test]
    fn repeated_category_flag_still_includes_it() {
        let args = ProductsArgs {
            categories: vec!["jewelery".to_string(), "jewelery".to_string()],
            sort: "recommended".to_string(),
            ..ProductsArgs::default()
        };
        let actions = actions_from_args(&args).unwrap();

        let mut jewel = product(1, "Gold Ring", 16800);
        jewel.category = "jewelery".to_string();
        let mut gadget = product(2, "Headphones", 4999);
        gadget.category = "electronics".to_string();
        let mut state = CatalogState::new(vec![jewel, gadget], Vec::new());
        for action in actions {
            state.apply(action);
        }

        let ids: Vec<i64> = state.view().items.iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn unreachable_source_yields_no_categories() {
        let client = FakeStoreClient::with_base_url("http://127.0.0.1:9", 2, "storefront-test/0.1")
            .unwrap();
        let categories = categories_or_empty(&client).await;
        assert!(categories.is_empty());
        assert_eq!(
            render_categories(&categories, "http://127.0.0.1:9"),
            "no categories returned by http://127.0.0.1:9\n"
        );
    }

    #[test]
    fn render_categories_one_per_line() {
        let categories = vec!["electronics".to_string(), "jewelery".to_string()];
        assert_eq!(
            render_categories(&categories, "unused"),
            "electronics\njewelery\n"
        );
    }

    #[test]
    fn render_view_lists_items_and_counts() {
        let state = CatalogState::new(
            vec![product(1, "Gold Ring", 16800), product(2, "Silver Chain", 995)],
            Vec::new(),
        );
        let out = render_view(&state.view());

        assert!(out.contains("OUT OF STOCK"));
        assert!(out.contains("$168.00"));
        assert!(out.contains("$9.95"));
        assert!(out.contains("★★★☆☆"));
        assert!(out.ends_with("2 ITEMS (1 in stock) of 2 | sort: RECOMMENDED\n"));
    }

    #[test]
    fn render_empty_view() {
        let state = CatalogState::new(Vec::new(), Vec::new());
        assert_eq!(
            render_view(&state.view()),
            "No items found (catalog has 0 products)\n"
        );
    }
}
