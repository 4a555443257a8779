use sovran_propset::{PropertyError, PropertySet};

/// Stores a handful of unrelated values under string keys and reads them back
fn main() -> Result<(), PropertyError> {
    let i = 1024i32;
    let mut properties = PropertySet::<String>::new();

    properties.set("distance".to_string(), 123.456f64);
    properties.set("flat".to_string(), 789i32);
    properties.set("city_name".to_string(), "Stockholm".to_string());
    properties.set(
        "string_array".to_string(),
        vec!["hello".to_string(), "world".to_string()],
    );
    properties.set("int_ptr".to_string(), &i as *const i32);
    properties.set("null".to_string(), ());

    println!("Properties: {:?}", properties);

    let distance = properties.try_get::<f64>(&"distance".to_string())?;
    println!("distance = {}", distance);

    let flat = properties.try_get::<i32>(&"flat".to_string())?;
    println!("flat = {}", flat);

    let city = properties.try_get::<String>(&"city_name".to_string())?;
    println!("city_name = {}", city);

    let words = properties.try_get::<Vec<String>>(&"string_array".to_string())?;
    println!("string_array = {}", words.join(" "));

    // Asking for the wrong type reports absence instead of reinterpreting
    match properties.get::<bool>(&"string_array".to_string()) {
        Some(value) => println!("string_array as bool = {}", value),
        None => println!("string_array is not a bool"),
    }

    if let Err(e) = properties.try_get::<bool>(&"flat".to_string()) {
        println!("flat: {}", e);
    }

    let pointer = properties.try_get::<*const i32>(&"int_ptr".to_string())?;
    println!("int_ptr points at i: {}", std::ptr::eq(*pointer, &i));

    println!(
        "null is unit: {}",
        properties.is::<()>(&"null".to_string())
    );

    // Moving the set out leaves an empty one behind
    let moved = std::mem::take(&mut properties);
    println!(
        "after move: source has {} entries, target has {}",
        properties.len(),
        moved.len()
    );

    Ok(())
}
