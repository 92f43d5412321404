//! Static header and footer markup around the catalog.

const SIDE_MENU: [&str; 5] = ["Home", "Shop", "Skills", "About", "Contact Us"];

/// `(label, active, desktop_only)`
const NAV: [(&str, bool, bool); 6] = [
    ("HOME", true, false),
    ("SHOP", false, false),
    ("SKILLS", false, true),
    ("STORIES", false, true),
    ("ABOUT", false, true),
    ("CONTACT US", false, true),
];

const ABOUT_LINKS: [&str; 6] = [
    "About Us",
    "Stories",
    "Artisans",
    "Boutiques",
    "Contact Us",
    "EU Compliances Docs",
];

const QUICK_LINKS: [&str; 7] = [
    "Orders &amp; Shipping",
    "Join/Login as a Seller",
    "Payment &amp; Pricing",
    "Return &amp; Refunds",
    "FAQs",
    "Privacy Policy",
    "Terms &amp; Conditions",
];

const PAYMENT_METHODS: [&str; 6] = ["GPay", "Mastercard", "PayPal", "Amex", "Apple Pay", "OPay"];

pub(super) fn header() -> String {
    let mut html = String::from("<header>\n<section class=\"header-top\">\n");
    for i in 0..3 {
        let class = if i < 2 { "header-top-item mobile" } else { "header-top-item" };
        html.push_str(&format!("<div class=\"{class}\"><p>Lorem ipsum dolor</p></div>\n"));
    }
    html.push_str("</section>\n<section class=\"header-body\">\n<div class=\"company-logo\">\n");
    html.push_str("<details class=\"burger-menu\"><summary aria-label=\"Menu\">&#9776;</summary>\n");
    html.push_str("<nav class=\"nav-lists\">");
    for item in SIDE_MENU {
        html.push_str(&format!("<a href=\"#\" class=\"nav-items\">{item}</a>"));
    }
    html.push_str("</nav></details>\n</div>\n");
    html.push_str("<div class=\"company-title\"><h1>LOGO</h1></div>\n");
    html.push_str(concat!(
        "<div class=\"header-nav-icons\">",
        "<a href=\"#\" aria-label=\"Search\">&#128269;</a>",
        "<a href=\"#\" aria-label=\"Wishlist\">&#9825;</a>",
        "<a href=\"#\" aria-label=\"Bag\">&#128717;</a>",
        "<a href=\"#\" class=\"mobile\" aria-label=\"Account\">&#128100;</a>",
        "<select name=\"languages\" class=\"select mobile\">",
        "<option value=\"ENG\">ENG</option><option value=\"ESP\">ESP</option>",
        "<option value=\"FRA\">FRA</option></select>",
        "</div>\n</section>\n",
    ));

    html.push_str("<section class=\"header-footer\"><nav>");
    for (label, active, desktop_only) in NAV {
        let mut class = String::from("footer-item");
        if active {
            class.push_str(" footer-item-active");
        }
        if desktop_only {
            class.push_str(" mobile");
        }
        html.push_str(&format!(
            "<div class=\"{class}\"><a href=\"#\" class=\"link-txt\"><p>{label}</p></a>"
        ));
        if active {
            html.push_str("<p class=\"divider\">|</p>");
        }
        html.push_str("</div>");
    }
    html.push_str("</nav></section>\n</header>\n");
    html
}

pub(super) fn footer() -> String {
    let mut html = String::from(concat!(
        "<footer class=\"footer\">\n<div class=\"footer-top-row\">\n",
        "<div class=\"footer-newsletter\">",
        "<div class=\"footer-news-title\">BE THE FIRST TO KNOW</div>",
        "<div class=\"footer-news-desc\">Sign up for updates from mett&auml; muse.</div>",
        "<form class=\"footer-news-form\">",
        "<input class=\"footer-news-input\" type=\"email\" placeholder=\"Enter your e-mail...\">",
        "<button class=\"footer-news-btn\" type=\"submit\">SUBSCRIBE</button>",
        "</form></div>\n",
        "<div class=\"footer-contactcol\">",
        "<div class=\"footer-col-title\">CONTACT US</div>",
        "<div class=\"footer-contact\">+44 221 133 5360<br>customercare@mettamuse.com</div>",
        "<div class=\"footer-col-title\">CURRENCY</div>",
        "<div class=\"footer-currency\"><b>USD</b></div>",
        "<div class=\"footer-currency-note\">Transactions will be completed in Euros ",
        "and a currency reference is available on hover.</div>",
        "</div>\n</div>\n<div class=\"footer-divider\"></div>\n",
        "<div class=\"footer-content footer-content-3col\">\n",
    ));

    html.push_str(&link_column("mett&auml; muse", &ABOUT_LINKS));
    html.push_str(&link_column("QUICK LINKS", &QUICK_LINKS));

    html.push_str(concat!(
        "<details class=\"footer-col\" open><summary class=\"footer-col-title\">FOLLOW US</summary>",
        "<div class=\"footer-socials\">",
        "<a href=\"#\" aria-label=\"Instagram\">Instagram</a>",
        "<a href=\"#\" aria-label=\"LinkedIn\">LinkedIn</a></div>",
        "<div class=\"footer-col-title\">mett&auml; muse ACCEPTS</div>",
        "<div class=\"footer-payments\">",
    ));
    for method in PAYMENT_METHODS {
        html.push_str(&format!("<span class=\"payment\">{method}</span>"));
    }
    html.push_str("</div></details>\n</div>\n");
    html.push_str(
        "<div class=\"footer-copyright\">Copyright &copy; 2023 mettamuse. All rights reserved.</div>\n",
    );
    html.push_str("</footer>\n");
    html
}

/// Collapsible on narrow screens via `<details>`, open by default.
fn link_column(title: &str, links: &[&str]) -> String {
    let mut html = format!(
        "<details class=\"footer-col\" open><summary class=\"footer-col-title\">{title}</summary><ul>"
    );
    for link in links {
        html.push_str(&format!("<li><a href=\"#\">{link}</a></li>"));
    }
    html.push_str("</ul></details>\n");
    html
}
