//! Placeholder panels: a titled card, some inert buttons and a
//! "coming soon" line.

use serde::{Deserialize, Serialize};

use crate::markup::Node;
use crate::toolkit;

/// The five placeholder panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    Inventory,
    Invoices,
    Orders,
    Reports,
    Returns,
}

impl Panel {
    pub const ALL: [Panel; 5] = [
        Panel::Inventory,
        Panel::Invoices,
        Panel::Orders,
        Panel::Reports,
        Panel::Returns,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Panel::Inventory => "Inventory",
            Panel::Invoices => "Invoices",
            Panel::Orders => "Orders",
            Panel::Reports => "Reports",
            Panel::Returns => "Returns",
        }
    }

    pub fn actions(&self) -> &'static [&'static str] {
        match self {
            Panel::Inventory => &["Add Item", "Transfer Stock"],
            Panel::Invoices => &["New Invoice"],
            Panel::Orders => &["New Order", "Import Orders"],
            Panel::Reports => &[],
            Panel::Returns => &["Process Return"],
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Panel::Inventory => "Inventory management is coming soon.",
            Panel::Invoices => "Invoice management is coming soon.",
            Panel::Orders => "Order management is coming soon.",
            Panel::Reports => "Reports and analytics are coming soon.",
            Panel::Returns => "Returns processing is coming soon.",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Panel::Inventory => "inventory",
            Panel::Invoices => "invoices",
            Panel::Orders => "orders",
            Panel::Reports => "reports",
            Panel::Returns => "returns",
        }
    }

    pub fn card(&self) -> PanelCard {
        PanelCard {
            title: self.title().to_string(),
            actions: self.actions().iter().map(|a| a.to_string()).collect(),
            placeholder: self.placeholder().to_string(),
        }
    }

    pub fn render(&self) -> Node {
        self.card().render()
    }
}

/// View model for a placeholder panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelCard {
    pub title: String,
    pub actions: Vec<String>,
    pub placeholder: String,
}

impl PanelCard {
    pub fn render(&self) -> Node {
        toolkit::card(
            &self.title,
            &self.actions,
            vec![toolkit::placeholder(&self.placeholder)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn each_panel_renders_title_and_placeholder_verbatim() {
        for panel in Panel::ALL {
            let node = panel.render();
            let titles = node.find_by_class(style::CARD_TITLE);
            let placeholders = node.find_by_class(style::PLACEHOLDER);
            assert_eq!(titles.len(), 1);
            assert_eq!(titles[0].text_content(), panel.title());
            assert_eq!(placeholders.len(), 1);
            assert_eq!(placeholders[0].text_content(), panel.placeholder());
        }
    }

    #[test]
    fn rendering_is_stable() {
        for panel in Panel::ALL {
            assert_eq!(panel.render().to_html(), panel.render().to_html());
        }
    }

    #[test]
    fn action_buttons_match_labels() {
        for panel in Panel::ALL {
            let node = panel.render();
            let labels: Vec<String> = node
                .find_by_tag("button")
                .iter()
                .map(|b| b.text_content())
                .collect();
            assert_eq!(labels, panel.actions());
        }
    }

    #[test]
    fn reports_has_no_actions() {
        assert!(Panel::Reports.render().find_by_tag("button").is_empty());
    }

    #[test]
    fn inventory_html() {
        assert_eq!(
            Panel::Inventory.render().to_html(),
            concat!(
                r#"<div class="card"><div class="card-header"><h2 class="card-title">Inventory</h2>"#,
                r#"<div class="card-actions"><button class="btn" type="button">Add Item</button>"#,
                r#"<button class="btn" type="button">Transfer Stock</button></div></div>"#,
                r#"<div class="card-content"><p class="placeholder-text">Inventory management is coming soon.</p></div></div>"#,
            )
        );
    }
}
