//! Server-rendered storefront page.
//!
//! Every filter control is a plain link or GET form that rewrites the query
//! string, so the page works without client-side state. Only the wishlist
//! hearts use a small script that calls the JSON API.

mod chrome;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use storefront_core::{AttributeGroup, CatalogView, FilterCriteria, PriceRange, SortKey};

use crate::api::{AppState, CatalogQuery};

/// Everything one render needs, borrowed from the request and the catalog.
pub(crate) struct PageContext<'a> {
    pub view: &'a CatalogView,
    pub criteria: &'a FilterCriteria,
    pub sort: SortKey,
    pub categories: &'a [String],
    /// Validation message shown above the grid when the query was rejected.
    pub notice: Option<&'a str>,
}

pub(crate) async fn storefront_page(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let (criteria, sort, notice, status) = match CatalogQuery::from_pairs(pairs).to_criteria() {
        Ok((criteria, sort)) => (criteria, sort, None, StatusCode::OK),
        Err(message) => {
            tracing::debug!(reason = %message, "rejected storefront query");
            (
                FilterCriteria::default(),
                SortKey::default(),
                Some(message),
                StatusCode::BAD_REQUEST,
            )
        }
    };

    let catalog = state.catalog.read().await;
    let view = catalog.view_with(&criteria, sort);
    let html = render_page(&PageContext {
        view: &view,
        criteria: &criteria,
        sort,
        categories: catalog.categories(),
        notice: notice.as_deref(),
    });
    drop(catalog);

    (status, Html(html)).into_response()
}

#[must_use]
pub(crate) fn render_page(ctx: &PageContext<'_>) -> String {
    let mut html = String::from(concat!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n",
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        "<title>Premium E-commerce Store - Discover Quality Products</title>\n",
        "<meta name=\"description\" content=\"Shop premium quality products including ",
        "electronics, jewelry, clothing and more.\">\n",
        "</head>\n<body>\n",
    ));
    html.push_str(&chrome::header());
    html.push_str(concat!(
        "<main class=\"main-content\"><div class=\"container\">\n",
        "<header class=\"page-header\"><h1 class=\"page-title\">DISCOVER OUR PRODUCTS</h1>",
        "<p class=\"page-subtitle\">Lorem ipsum dolor sit amet consectetur. Amet est posuere ",
        "rhoncus scelerisque. Dolor integer scelerisque nibh amet mi ut elementum dolor.</p>",
        "</header>\n",
    ));

    if let Some(notice) = ctx.notice {
        html.push_str(&format!(
            "<div class=\"notice\" role=\"alert\">{}</div>\n",
            escape_html(notice)
        ));
    }

    html.push_str(&products_header(ctx));
    html.push_str("<section class=\"products-section\">\n");
    html.push_str(&sidebar(ctx));
    html.push_str(&grid(ctx.view));
    html.push_str("</section>\n</div></main>\n");
    html.push_str(&chrome::footer());
    html.push_str(WISHLIST_SCRIPT);
    html.push_str("</body>\n</html>\n");
    html
}

fn products_header(ctx: &PageContext<'_>) -> String {
    let mut html = format!(
        concat!(
            "<div class=\"products-header\"><div class=\"products-header-left\">",
            "<span class=\"products-count-bold\">{} ITEMS</span>",
            "<span class=\"products-instock\">{} IN STOCK</span></div>\n",
            "<nav class=\"products-sort\" aria-label=\"Sort\"><span class=\"sort-label\">{}</span>",
            "<ul class=\"sort-dropdown\">"
        ),
        ctx.view.items.len(),
        ctx.view.in_stock_count,
        ctx.sort.label(),
    );
    for key in SortKey::MENU {
        let check = if key == ctx.sort {
            "<span class=\"sort-check\">&#10004;</span>"
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a class=\"sort-dropdown-option\" href=\"{}\">{}{check}</a></li>",
            page_href(ctx.criteria, key),
            key.label()
        ));
    }
    html.push_str("</ul></nav></div>\n");
    html
}

fn sidebar(ctx: &PageContext<'_>) -> String {
    let criteria = ctx.criteria;
    let mut html = String::from("<aside class=\"sidebar\" aria-label=\"Filters\">\n");

    html.push_str(&search_form(criteria, ctx.sort));

    if !ctx.categories.is_empty() {
        html.push_str(
            "<div class=\"filter-group\"><span class=\"filter-title\">CATEGORY</span><div class=\"filter-options\">",
        );
        for category in ctx.categories {
            let mut toggled = criteria.clone();
            toggled.toggle_category(category);
            html.push_str(&option_link(
                &page_href(&toggled, ctx.sort),
                category,
                criteria.categories.contains(category),
            ));
        }
        html.push_str("</div></div>\n<div class=\"filter-divider\"></div>\n");
    }

    for group in AttributeGroup::ALL {
        let selected = criteria.attributes.selected(group);
        let summary = if selected.is_empty() {
            "All".to_string()
        } else {
            selected.join(", ")
        };
        html.push_str(&format!(
            "<details class=\"filter-group\"{}><summary><span class=\"filter-title\">{}</span>\
             <span class=\"filter-group-all\">{}</span></summary><div class=\"filter-options\">",
            if selected.is_empty() { "" } else { " open" },
            group.label(),
            escape_html(&summary),
        ));

        let mut cleared = criteria.clone();
        cleared.attributes.clear_group(group);
        let mut all = criteria.clone();
        all.attributes.select_all(group);
        html.push_str(&format!(
            "<a class=\"filter-unselect-all\" href=\"{}\">Unselect all</a>\
             <a class=\"filter-select-all\" href=\"{}\">Select all</a>",
            page_href(&cleared, ctx.sort),
            page_href(&all, ctx.sort),
        ));

        for &option in group.options() {
            let checked = criteria.attributes.is_selected(group, option);
            let mut toggled = criteria.clone();
            toggled.attributes.toggle(group, option, !checked);
            html.push_str(&option_link(&page_href(&toggled, ctx.sort), option, checked));
        }
        html.push_str("</div></details>\n<div class=\"filter-divider\"></div>\n");
    }

    html.push_str("</aside>\n");
    html
}

/// Search box and price bounds. The rest of the current selection rides
/// along in hidden fields.
fn search_form(criteria: &FilterCriteria, sort: SortKey) -> String {
    let mut html = format!(
        concat!(
            "<form class=\"filter-search\" method=\"get\" action=\"/\">",
            "<input type=\"search\" name=\"search\" placeholder=\"Search products\" value=\"{}\">",
            "<label>Min <input type=\"number\" name=\"min_price\" min=\"0\" step=\"0.01\" value=\"{}\"></label>",
            "<label>Max <input type=\"number\" name=\"max_price\" min=\"0\" step=\"0.01\" value=\"{}\"></label>",
        ),
        escape_html(&criteria.search),
        criteria.price.min(),
        criteria.price.max(),
    );

    for category in &criteria.categories {
        html.push_str(&hidden("category", category));
    }
    for selector in attr_params(criteria) {
        html.push_str(&hidden("attr", &selector));
    }
    if sort != SortKey::Recommended {
        html.push_str(&hidden("sort", sort.slug()));
    }
    html.push_str("<button type=\"submit\">APPLY</button><a href=\"/\">RESET</a></form>\n");
    html
}

fn grid(view: &CatalogView) -> String {
    if view.is_empty() {
        return "<div class=\"products-container\"><div class=\"products-empty\">No items found</div></div>\n"
            .to_string();
    }

    let mut html = String::from(
        "<div class=\"products-container\"><div class=\"products-grid\" role=\"grid\" aria-label=\"Products\">\n",
    );
    for item in &view.items {
        let product = &item.product;
        let title = escape_html(&product.title);
        html.push_str("<article class=\"product-card\" role=\"gridcell\"><div class=\"product-image-container\">");
        if item.out_of_stock {
            html.push_str("<div class=\"product-outofstock-overlay\">OUT OF STOCK</div>");
        }
        if let Some(image) = &product.image {
            html.push_str(&format!(
                "<img src=\"{}\" alt=\"{title} - High quality product image\" class=\"product-image\" \
                 loading=\"lazy\" width=\"180\" height=\"180\">",
                escape_html(image)
            ));
        }
        html.push_str(&format!(
            concat!(
                "</div><div class=\"product-info\">",
                "<h3 class=\"product-title\" title=\"{title}\">{title}</h3>",
                "<div class=\"product-rating\" aria-label=\"{rate} out of 5\">{stars} ({count})</div>",
                "<div class=\"product-price\">${price:.2}</div>",
                "<div class=\"product-pricing-msg\"><a href=\"#\">Sign in</a> or Create an account to see pricing</div>",
                "</div>",
                "<button class=\"product-wishlist{active}\" data-id=\"{id}\" aria-label=\"Add to wishlist\" ",
                "aria-pressed=\"{pressed}\">&#9829;</button></article>\n",
            ),
            title = title,
            rate = product.rating.rate,
            stars = product.rating.stars(),
            count = product.rating.count,
            price = product.price.round_dp(2),
            active = if item.wishlisted { " active" } else { "" },
            id = product.id,
            pressed = item.wishlisted,
        ));
    }
    html.push_str("</div></div>\n");
    html
}

const WISHLIST_SCRIPT: &str = concat!(
    "<script>\n",
    "document.querySelectorAll('.product-wishlist').forEach(function (btn) {\n",
    "  btn.addEventListener('click', function () {\n",
    "    fetch('/api/v1/wishlist/' + btn.dataset.id, { method: 'POST' })\n",
    "      .then(function (r) { return r.json(); })\n",
    "      .then(function (body) {\n",
    "        if (!body.data) { return; }\n",
    "        btn.classList.toggle('active', body.data.wishlisted);\n",
    "        btn.setAttribute('aria-pressed', String(body.data.wishlisted));\n",
    "      });\n",
    "  });\n",
    "});\n",
    "</script>\n",
);

fn option_link(href: &str, label: &str, checked: bool) -> String {
    format!(
        "<a class=\"filter-option{}\" href=\"{href}\" role=\"checkbox\" aria-checked=\"{checked}\">{}</a>",
        if checked { " checked" } else { "" },
        escape_html(label),
    )
}

fn hidden(name: &str, value: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"{name}\" value=\"{}\">",
        escape_html(value)
    )
}

fn attr_params(criteria: &FilterCriteria) -> Vec<String> {
    criteria
        .attributes
        .active()
        .flat_map(|(group, options)| {
            options
                .iter()
                .map(move |option| format!("{}:{option}", group.label()))
        })
        .collect()
}

/// Page URL reproducing `criteria` and `sort`, already escaped for an
/// `href` attribute. Default values are omitted.
pub(crate) fn page_href(criteria: &FilterCriteria, sort: SortKey) -> String {
    let defaults = PriceRange::default();
    let mut pairs: Vec<(&str, String)> = Vec::new();

    if !criteria.search.is_empty() {
        pairs.push(("search", criteria.search.clone()));
    }
    for category in &criteria.categories {
        pairs.push(("category", category.clone()));
    }
    if criteria.price.min() != defaults.min() {
        pairs.push(("min_price", criteria.price.min().to_string()));
    }
    if criteria.price.max() != defaults.max() {
        pairs.push(("max_price", criteria.price.max().to_string()));
    }
    if sort != SortKey::Recommended {
        pairs.push(("sort", sort.slug().to_string()));
    }
    for selector in attr_params(criteria) {
        pairs.push(("attr", selector));
    }

    if pairs.is_empty() {
        return "/".to_string();
    }
    let query = pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&amp;");
    format!("/?{query}")
}

/// Escapes text for use in element content and double-quoted attributes.
pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "page_test.rs"]
mod tests;
