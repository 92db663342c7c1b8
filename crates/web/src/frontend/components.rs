//! Leptos renditions of the toolkit primitives and views.
//!
//! Class names come from [`crate::style`] so the browser and the static
//! preview produce the same markup.

use leptos::*;

use crate::panels::PanelCard;
use crate::stock_table::{self, StockRow, StockTable};
use crate::style::{self, BadgeTone};

/// Titled card with optional inert action buttons.
#[component]
pub fn Card(
    #[prop(into)] title: String,
    #[prop(optional)] actions: Vec<String>,
    children: Children,
) -> impl IntoView {
    let action_bar = (!actions.is_empty()).then(|| {
        view! {
            <div class=style::CARD_ACTIONS>
                {actions
                    .into_iter()
                    .map(|label| view! { <Button label=label/> })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <div class=style::CARD>
            <div class=style::CARD_HEADER>
                <h2 class=style::CARD_TITLE>{title}</h2>
                {action_bar}
            </div>
            <div class=style::CARD_CONTENT>{children()}</div>
        </div>
    }
}

/// Button with no handler attached.
#[component]
pub fn Button(#[prop(into)] label: String) -> impl IntoView {
    view! { <button class=style::BUTTON type="button">{label}</button> }
}

#[component]
pub fn Badge(#[prop(into)] label: String, tone: Option<BadgeTone>) -> impl IntoView {
    view! { <span class=style::badge_classes(tone)>{label}</span> }
}

#[component]
pub fn PanelView(card: PanelCard) -> impl IntoView {
    let PanelCard {
        title,
        actions,
        placeholder,
    } = card;

    view! {
        <Card title=title actions=actions>
            <p class=style::PLACEHOLDER>{placeholder}</p>
        </Card>
    }
}

#[component]
pub fn StockTableView(table: StockTable) -> impl IntoView {
    view! {
        <Card title=stock_table::TITLE>
            <table class=style::TABLE>
                <thead>
                    <tr>
                        {stock_table::COLUMNS
                            .iter()
                            .map(|column| view! { <th>{*column}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {table
                        .rows
                        .into_iter()
                        .map(|row| view! { <StockRowView row=row/> })
                        .collect_view()}
                </tbody>
            </table>
            <p class=style::PLACEHOLDER>{stock_table::PLACEHOLDER}</p>
        </Card>
    }
}

#[component]
fn StockRowView(row: StockRow) -> impl IntoView {
    let quantity_class = format!("{} {}", style::QUANTITY_CELL, row.quantity_class());
    let StockRow {
        code,
        name,
        quantity,
        status,
        badge,
        ..
    } = row;

    view! {
        <tr>
            <td>{code}</td>
            <td>{name}</td>
            <td class=quantity_class>{quantity}</td>
            <td>
                <Badge label=status tone=badge/>
            </td>
        </tr>
    }
}
