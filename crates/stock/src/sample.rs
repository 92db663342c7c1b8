//! Hard-coded sample rows shown by the stock view.

use crate::item::StockItem;

/// Build the sample stock list. A fresh `Vec` on every call.
pub fn sample_stock() -> Vec<StockItem> {
    vec![
        StockItem::new(1, "Firmware Update Kit", "FW-001", 0, "Out of Stock"),
        StockItem::new(2, "USB-C Charging Cable", "CB-104", 12, "Low Stock"),
        StockItem::new(3, "Wireless Keyboard", "KB-220", 45, "In Stock"),
        StockItem::new(4, "Optical Mouse", "MS-310", 7, "Low Stock"),
        StockItem::new(5, "24\" Monitor", "MN-480", 26, "In Stock"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StockStatus;
    use std::collections::HashSet;

    #[test]
    fn contains_the_out_of_stock_firmware_row() {
        let rows = sample_stock();
        let fw = rows.iter().find(|r| r.code == "FW-001").expect("FW-001 present");
        assert_eq!(fw.quantity, 0);
        assert_eq!(fw.status, "Out of Stock");
    }

    #[test]
    fn covers_every_status() {
        let rows = sample_stock();
        for status in StockStatus::ALL {
            assert!(rows.iter().any(|r| r.known_status() == Some(status)), "missing {status}");
        }
    }

    #[test]
    fn ids_and_codes_are_unique() {
        let rows = sample_stock();
        let ids: HashSet<_> = rows.iter().map(|r| r.id).collect();
        let codes: HashSet<_> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(ids.len(), rows.len());
        assert_eq!(codes.len(), rows.len());
    }

    #[test]
    fn each_call_builds_a_fresh_list() {
        let mut first = sample_stock();
        first[0].quantity = 99;
        assert_eq!(sample_stock()[0].quantity, 0);
    }
}
