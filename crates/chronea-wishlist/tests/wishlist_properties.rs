use chronea_storage::{InMemoryStore, KeyValueStore};
use chronea_types::ProductSnapshot;
use chronea_wishlist::WishlistStore;
use std::collections::HashSet;
use std::rc::Rc;

fn product(name: &str) -> ProductSnapshot {
    ProductSnapshot {
        name: name.to_owned(),
        category: "Moonphase Collection".to_owned(),
        price: "Price on Request".to_owned(),
        image: "gold.jpg".to_owned(),
        link: "gold.html".to_owned(),
    }
}

type SharedStore = WishlistStore<Rc<InMemoryStore>>;

fn seeded(names: &[&str]) -> anyhow::Result<(Rc<InMemoryStore>, SharedStore)> {
    let storage = Rc::new(InMemoryStore::new());
    let store = WishlistStore::new(Rc::clone(&storage));
    for name in names {
        store.add(product(name))?;
    }
    Ok((storage, store))
}

#[test]
fn scenario_add_to_empty_store() -> anyhow::Result<()> {
    let (_, store) = seeded(&[])?;
    store.add(ProductSnapshot {
        name: "Gold Horizon".to_owned(),
        category: "Moonphase Collection".to_owned(),
        price: "Price on Request".to_owned(),
        image: "gold.jpg".to_owned(),
        link: "gold.html".to_owned(),
    })?;
    assert_eq!(store.count(), 1);
    Ok(())
}

#[test]
fn scenario_same_name_different_price_toggles_off() -> anyhow::Result<()> {
    let (_, store) = seeded(&["Gold Horizon"])?;
    let mut repriced = product("Gold Horizon");
    repriced.price = "CHF 52,000".to_owned();
    repriced.image = "gold-v2.jpg".to_owned();

    let list = store.add(repriced)?;
    assert!(list.is_empty());
    assert_eq!(store.count(), 0);
    Ok(())
}

#[test]
fn scenario_remove_absent_leaves_list_untouched() -> anyhow::Result<()> {
    let (storage, store) = seeded(&["A", "B"])?;
    let before = storage.get("chronea_wishlist")?;

    let list = store.remove("C")?;
    assert_eq!(list.names(), vec!["A", "B"]);
    assert_eq!(store.count(), 2);
    assert_eq!(storage.get("chronea_wishlist")?, before);
    Ok(())
}

#[test]
fn scenario_remove_keeps_order_of_the_rest() -> anyhow::Result<()> {
    let (_, store) = seeded(&["A", "B"])?;
    let list = store.remove("A")?;
    assert_eq!(list.names(), vec!["B"]);
    assert_eq!(store.load().names(), vec!["B"]);
    Ok(())
}

#[test]
fn names_stay_unique_over_any_add_sequence() -> anyhow::Result<()> {
    let names = ["A", "B", "C", "A", "a", "B", "B", "C", "D", "A"];
    // every rotation exercises a different interleaving of repeats
    for shift in 0..names.len() {
        let (_, store) = seeded(&[])?;
        for i in 0..names.len() {
            store.add(product(names[(i + shift) % names.len()]))?;
            let list = store.load();
            let unique: HashSet<&str> = list.names().into_iter().collect();
            assert_eq!(unique.len(), list.len());
            assert_eq!(store.count(), list.len());
        }
    }
    Ok(())
}

#[test]
fn adding_twice_is_the_same_as_never_adding() -> anyhow::Result<()> {
    let (storage, store) = seeded(&["A", "B"])?;
    let before = store.load();

    store.add(product("Celestial Rose"))?;
    store.add(product("Celestial Rose"))?;

    assert_eq!(store.load(), before);
    assert_eq!(
        storage.get("chronea_wishlist")?,
        Some(serde_json::to_string(&before)?)
    );
    Ok(())
}

#[test]
fn corrupt_value_loads_empty_and_is_overwritten_on_next_add() -> anyhow::Result<()> {
    let (storage, store) = seeded(&[])?;
    storage.set("chronea_wishlist", "{{{ definitely not json")?;

    assert!(store.load().is_empty());
    assert_eq!(store.count(), 0);

    store.add(product("Aviator X"))?;
    assert_eq!(store.load().names(), vec!["Aviator X"]);
    Ok(())
}

#[test]
fn state_survives_a_new_handle_and_last_writer_wins() -> anyhow::Result<()> {
    let (storage, first) = seeded(&["A"])?;
    let second = WishlistStore::new(Rc::clone(&storage));
    assert_eq!(second.load().names(), vec!["A"]);

    // each write is a full read-modify-write of the blob
    let stale = first.load();
    second.add(product("B"))?;
    storage.set("chronea_wishlist", &serde_json::to_string(&stale)?)?;
    assert_eq!(first.load().names(), vec!["A"]);
    assert_eq!(second.count(), 1);
    Ok(())
}

#[test]
fn legacy_long_field_names_load() -> anyhow::Result<()> {
    let (storage, store) = seeded(&[])?;
    storage.set(
        "chronea_wishlist",
        r#"[{"name":"Royal Emblem","category":"Heritage Series","price":"Price on Request","image":"images/watch-gold.png","link":"product-details.html?id=royal-emblem"}]"#,
    )?;

    let list = store.load();
    let entry = list
        .get("Royal Emblem")
        .ok_or_else(|| anyhow::anyhow!("entry missing"))?;
    assert_eq!(entry.category, "Heritage Series");
    assert_eq!(entry.image, "images/watch-gold.png");
    Ok(())
}
