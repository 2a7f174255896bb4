use rb_ordered_map::{Error, OrderedMap};

fn main() -> Result<(), Error> {
    let mut inventory = OrderedMap::<&str, i32>::new();
    inventory.insert("CPU", 10)?;
    inventory.insert("GPU", 15)?;
    inventory.insert("RAM", 20)?;
    assert_eq!(
        inventory.keys().copied().collect::<Vec<_>>(),
        vec!["CPU", "GPU", "RAM"]
    );

    *inventory.at_mut(&"CPU")? = 25;
    *inventory.get_or_insert_default("SSD")? = 30;
    inventory.get_or_insert_default("UPS")?;
    assert_eq!(inventory.at(&"UPS"), Ok(&0));
    assert_eq!(inventory.at(&"HDD"), Err(Error::KeyNotFound));

    inventory.erase(&"GPU");
    assert_eq!(inventory.len(), 4);
    assert_eq!(
        inventory.iter().collect::<Vec<_>>(),
        vec![(&"CPU", &25), (&"RAM", &20), (&"SSD", &30), (&"UPS", &0)]
    );

    inventory.clear();
    assert!(inventory.is_empty());
    Ok(())
}
