use speculate2::speculate;
use stockroom::models::*;
use stockroom::store::Inventory;

fn tools() -> Inventory {
    Inventory::with_items(vec![
        Item::new("Hammer"),
        Item::new("Drill"),
        Item::new("Screws"),
    ])
}

speculate! {
    before {
        let mut inventory = tools();
    }

    describe "add" {
        it "appends a trimmed name at the tail" {
            let notice = inventory.add("Saw");

            assert_eq!(notice.level, NoticeLevel::Success);
            assert_eq!(inventory.len(), 4);
            assert_eq!(inventory.labels().last().map(String::as_str), Some("Saw"));
        }

        it "leaves the inventory unchanged for blank names" {
            for blank in ["", "   "] {
                let notice = inventory.add(blank);
                assert_eq!(notice.level, NoticeLevel::Warning);
            }

            assert_eq!(inventory.len(), 3);
        }

        it "allows duplicates" {
            inventory.add("Hammer");

            assert_eq!(inventory.labels(), vec!["Hammer", "Drill", "Screws", "Hammer"]);
        }
    }

    describe "remove" {
        it "drops an item present exactly once" {
            let notice = inventory.remove("Drill");

            assert_eq!(notice.level, NoticeLevel::Success);
            assert_eq!(inventory.len(), 2);
            assert!(!inventory.contains("Drill"));
        }

        it "reports not found without changing anything" {
            let notice = inventory.remove("Saw");

            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(inventory.labels(), vec!["Hammer", "Drill", "Screws"]);
        }

        it "empties the inventory once every item is gone" {
            for name in ["Hammer", "Drill", "Screws"] {
                inventory.remove(name);
            }

            assert!(inventory.is_empty());
            assert_eq!(inventory.stock_level(5), StockLevel::NeedsRestock);
        }
    }

    describe "a full interaction" {
        it "adds, removes, then reports a repeated removal as missing" {
            inventory.add("Saw");
            assert_eq!(inventory.labels(), vec!["Hammer", "Drill", "Screws", "Saw"]);

            inventory.remove("Drill");
            assert_eq!(inventory.labels(), vec!["Hammer", "Screws", "Saw"]);

            let notice = inventory.remove("Drill");
            assert_eq!(notice.level, NoticeLevel::Error);
            assert_eq!(inventory.labels(), vec!["Hammer", "Screws", "Saw"]);
        }
    }

    describe "seeded inventories" {
        it "start with three plain items" {
            let seeded = Inventory::seeded(Variant::Plain);
            assert_eq!(seeded.labels(), vec!["Młotek", "Wiertarka", "Śruby M8"]);
        }

        it "empty out when every decorated seed is removed by name" {
            let mut seeded = Inventory::seeded(Variant::Decorated);
            for name in ["Młotek", "Wkrętarka", "Śruby M8"] {
                assert_eq!(seeded.remove(name).level, NoticeLevel::Success);
            }
            assert!(seeded.is_empty());
        }
    }
}
