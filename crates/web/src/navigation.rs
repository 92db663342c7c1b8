//! Roles, the views each role can open, and the page shell around a view.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use bizdesk_core::{DomainError, DomainResult};

use crate::markup::{Element, Node};
use crate::panels::Panel;
use crate::stock_table::{self, StockTable};
use crate::style;

pub const APP_NAME: &str = "BizDesk";

/// Who is looking at the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Sales,
    Clerk,
}

impl Role {
    pub const ALL: [Role; 2] = [Role::Sales, Role::Clerk];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sales => "sales",
            Role::Clerk => "clerk",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Sales => "Sales",
            Role::Clerk => "Clerk",
        }
    }

    /// Views listed in this role's navigation, in display order.
    pub fn views(&self) -> &'static [View] {
        match self {
            Role::Sales => &[
                View::Panel(Panel::Orders),
                View::Panel(Panel::Invoices),
                View::Panel(Panel::Returns),
                View::Panel(Panel::Reports),
                View::Stock,
            ],
            Role::Clerk => &[
                View::Panel(Panel::Inventory),
                View::Stock,
                View::Panel(Panel::Returns),
                View::Panel(Panel::Reports),
            ],
        }
    }

    pub fn can_view(&self, view: View) -> bool {
        self.views().contains(&view)
    }

    /// First view in the role's navigation.
    pub fn home(&self) -> View {
        self.views()[0]
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sales" => Ok(Role::Sales),
            "clerk" => Ok(Role::Clerk),
            _ => Err(DomainError::validation(format!("unknown role '{s}'"))),
        }
    }
}

/// Something that can be shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Panel(Panel),
    Stock,
}

impl View {
    pub fn slug(&self) -> &'static str {
        match self {
            View::Panel(p) => p.slug(),
            View::Stock => "stock",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Panel(p) => p.title(),
            View::Stock => stock_table::TITLE,
        }
    }

    pub fn from_slug(slug: &str) -> DomainResult<Self> {
        if slug == "stock" {
            return Ok(View::Stock);
        }
        Panel::ALL
            .into_iter()
            .find(|p| p.slug() == slug)
            .map(View::Panel)
            .ok_or_else(|| DomainError::not_found(format!("view '{slug}'")))
    }

    pub fn render(&self) -> Node {
        match self {
            View::Panel(p) => p.render(),
            View::Stock => StockTable::sample().render(),
        }
    }
}

/// Route path for a view as seen by a role, e.g. `/clerk/stock`.
pub fn route(role: Role, view: View) -> String {
    format!("/{}/{}", role.as_str(), view.slug())
}

/// Resolve a slug for a role, checking the role may open it.
pub fn resolve(role: Role, slug: &str) -> DomainResult<View> {
    let view = View::from_slug(slug)?;
    if !role.can_view(view) {
        return Err(DomainError::unauthorized(format!(
            "{role} cannot open '{}'",
            view.slug()
        )));
    }
    Ok(view)
}

/// Navigation bar with the role's views, marking `active`.
pub fn nav_bar(role: Role, active: View) -> Node {
    let links = role.views().iter().map(|view| {
        let mut link = Element::new("a")
            .class(style::NAV_LINK)
            .attr("href", route(role, *view));
        if *view == active {
            link = link.class(style::ACTIVE);
        }
        link.child(Node::text(view.title()))
    });
    Element::new("nav").class(style::NAV).children(links).into()
}

/// Full page: header, navigation and the view itself.
pub fn render_page(role: Role, view: View) -> DomainResult<Node> {
    if !role.can_view(view) {
        return Err(DomainError::unauthorized(format!(
            "{role} cannot open '{}'",
            view.slug()
        )));
    }
    tracing::debug!(role = %role, view = view.slug(), "rendering page");

    let header = Element::new("header")
        .child(Element::new("h1").child(Node::text(APP_NAME)))
        .child(Element::new("span").class("role").child(Node::text(role.label())));

    Ok(Element::new("div")
        .class("app")
        .child(header)
        .child(nav_bar(role, view))
        .child(Element::new("main").child(view.render()))
        .into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_parse_case_insensitively() {
        assert_eq!("sales".parse::<Role>(), Ok(Role::Sales));
        assert_eq!(" Clerk ".parse::<Role>(), Ok(Role::Clerk));
        assert!(matches!("admin".parse::<Role>(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn every_view_slug_resolves() {
        for role in Role::ALL {
            for view in role.views() {
                assert_eq!(View::from_slug(view.slug()), Ok(*view));
                assert_eq!(resolve(role, view.slug()), Ok(*view));
            }
        }
    }

    #[test]
    fn unknown_slug_is_not_found() {
        assert!(matches!(View::from_slug("ledger"), Err(DomainError::NotFound(_))));
        assert!(matches!(resolve(Role::Sales, "ledger"), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn clerk_cannot_open_orders() {
        assert!(matches!(
            resolve(Role::Clerk, "orders"),
            Err(DomainError::Unauthorized(_))
        ));
        assert!(render_page(Role::Clerk, View::Panel(Panel::Invoices)).is_err());
    }

    #[test]
    fn both_roles_see_stock() {
        for role in Role::ALL {
            assert!(role.can_view(View::Stock));
        }
    }

    #[test]
    fn routes() {
        assert_eq!(route(Role::Clerk, View::Stock), "/clerk/stock");
        assert_eq!(route(Role::Sales, View::Panel(Panel::Orders)), "/sales/orders");
        assert_eq!(Role::Sales.home(), View::Panel(Panel::Orders));
        assert_eq!(Role::Clerk.home(), View::Panel(Panel::Inventory));
    }

    #[test]
    fn nav_marks_only_active_view() {
        let page = render_page(Role::Sales, View::Stock).unwrap();
        let links = page.find_by_class(style::NAV_LINK);
        assert_eq!(links.len(), Role::Sales.views().len());

        let active = page.find_by_class(style::ACTIVE);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text_content(), "Stock");
        assert_eq!(active[0].attr_value("href"), Some("/sales/stock"));
    }

    #[test]
    fn page_contains_view() {
        let page = render_page(Role::Clerk, View::Panel(Panel::Inventory)).unwrap();
        let main = page.find_by_tag("main");
        assert_eq!(main.len(), 1);
        assert!(main[0].text_content().contains(Panel::Inventory.placeholder()));
    }
}
