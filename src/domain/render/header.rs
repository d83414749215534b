//! Header and navigation renderer.

use crate::domain::descriptor::{HeaderOptions, NavItem};
use crate::domain::markup::{Markup, escape_text};
use crate::domain::tokens::TokenStore;

const LOGO_SVG: &str = "<svg class=\"header-logo-icon\" viewBox=\"0 0 24 24\" fill=\"none\" \
     stroke=\"currentColor\" stroke-width=\"2\"><path d=\"M3 3v18h18M7 16l4-8 4 8 4-12\"/></svg>";

const SEARCH_ICON_SVG: &str = "<svg class=\"search-icon\" width=\"16\" height=\"16\" \
     viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\">\
     <circle cx=\"11\" cy=\"11\" r=\"8\"></circle><path d=\"m21 21-4.35-4.35\"></path></svg>";

const BELL_SVG: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" \
     stroke=\"currentColor\" stroke-width=\"2\">\
     <path d=\"M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9\"></path>\
     <path d=\"M13.73 21a2 2 0 0 1-3.46 0\"></path></svg>";

const PROFILE_SVG: &str = "<svg width=\"20\" height=\"20\" viewBox=\"0 0 24 24\" fill=\"none\" \
     stroke=\"currentColor\" stroke-width=\"2\">\
     <path d=\"M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2\"></path>\
     <circle cx=\"12\" cy=\"7\" r=\"4\"></circle></svg>";

/// Render the page header with navigation.
///
/// The active item is determined by exact string match of each item's path
/// against `current_path`; at most one item is marked active, none if no
/// item matches. Prefix matching is deliberately not performed. Infallible
/// for any well-formed `nav_items`; an empty list renders a bare header.
pub fn render_header(
    _tokens: &TokenStore,
    nav_items: &[NavItem],
    current_path: &str,
    options: &HeaderOptions,
) -> Markup {
    let mut html = String::from("<div class=\"chartmaster-header\">");

    html.push_str("<div class=\"header-logo\">");
    html.push_str(LOGO_SVG);
    html.push_str("<span>ChartMaster Pro</span></div>");

    html.push_str("<nav class=\"header-nav\">");
    // Only the first exact match wins; duplicate paths never yield a second
    // active marker.
    let mut active_seen = false;
    for item in nav_items {
        let class = if !active_seen && item.path == current_path {
            active_seen = true;
            "nav-item active"
        } else {
            "nav-item"
        };
        html.push_str(&format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            escape_text(&item.path),
            class,
            escape_text(&item.label),
        ));
    }
    html.push_str("</nav>");

    html.push_str("<div class=\"header-actions\">");
    if options.show_search {
        html.push_str("<div class=\"header-search\">");
        html.push_str(SEARCH_ICON_SVG);
        html.push_str(
            "<input type=\"text\" class=\"search-bar\" placeholder=\"Search symbol...\">",
        );
        html.push_str("</div>");
    }
    if options.show_notification_bell {
        html.push_str("<button class=\"icon-button\" title=\"Notifications\">");
        html.push_str(BELL_SVG);
        html.push_str("</button>");
    }
    if options.show_profile {
        html.push_str("<button class=\"icon-button\" title=\"Profile\">");
        html.push_str(PROFILE_SVG);
        html.push_str("</button>");
    }
    html.push_str("</div></div>");

    Markup::trusted(html)
}
