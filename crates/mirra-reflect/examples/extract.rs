//! Extract a value's public properties into ordered maps.
//!
//! Run with: `cargo run --example extract`

use mirra_reflect::{reflectable, reflector, ReflectExt};

#[allow(non_snake_case)]
struct Order {
    id: i64,
    customerName: String,
    couponCode: Option<String>,
    totalCents: i64,
    auditToken: String,
}

reflectable! {
    Order {
        pub id: i64,
        pub customerName: String,
        pub couponCode: Option<String>,
        pub totalCents: i64,
        auditToken: String,
    }
}

fn main() {
    let order = Order {
        id: 1042,
        customerName: "Ann Lee".to_string(),
        couponCode: None,
        totalCents: 15_990,
        auditToken: "do-not-log".to_string(),
    };

    println!("public property names: {:?}", order.property_names());

    println!("\nto_map:");
    for (key, value) in order.to_map().iter() {
        println!("  {} = {}", key, value);
    }

    println!("\nto_map_not_null (couponCode dropped):");
    for (key, value) in order.to_map_not_null(&[]).iter() {
        println!("  {} = {}", key, value);
    }

    println!("\nto_map_snake_case, excluding totalCents:");
    for (key, value) in order.to_map_snake_case(&["totalCents"]).iter() {
        println!("  {} = {}", key, value);
    }

    let json = serde_json::to_string_pretty(&order.to_map_snake_case(&[])).unwrap();
    println!("\nas JSON:\n{}", json);

    // Direct lookups error instead of silently filtering.
    match order.property_value("auditToken") {
        Ok(value) => println!("auditToken = {}", value),
        Err(err) => println!("\nauditToken refused: {}", err),
    }

    let strings = reflector::properties_of_type::<Order, String>();
    println!(
        "\nString-typed descriptors (both visibilities): {:?}",
        strings.iter().map(|p| p.name()).collect::<Vec<_>>()
    );
}
