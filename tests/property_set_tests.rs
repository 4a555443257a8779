use sovran_propset::{identity_of, PropertyError, PropertySet};
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_basic_operations() {
    let mut properties = PropertySet::<String>::new();
    assert!(properties.is_empty());

    properties.set("key".to_string(), 42i32);

    assert!(properties.has(&"key".to_string()));
    assert!(properties.is::<i32>(&"key".to_string()));
    assert!(!properties.is::<i64>(&"key".to_string()));
    assert_eq!(properties.get::<i32>(&"key".to_string()), Some(&42));
    assert_eq!(properties.get::<u32>(&"key".to_string()), None);
    assert_eq!(properties.len(), 1);

    assert!(!properties.has(&"missing".to_string()));
    assert!(!properties.is::<i32>(&"missing".to_string()));
    assert_eq!(properties.get::<i32>(&"missing".to_string()), None);
}

#[test]
fn test_city_scenario() {
    let mut properties = PropertySet::<String>::new();
    let i = 1024i32;

    properties.set("distance".to_string(), 123.456f64);
    properties.set("flat".to_string(), 789i32);
    properties.set("city_name".to_string(), "Stockholm".to_string());
    properties.set(
        "string_array".to_string(),
        vec!["hello".to_string(), "world".to_string()],
    );
    properties.set("int_ptr".to_string(), &i as *const i32);
    properties.set("null".to_string(), ());

    assert_eq!(properties.get::<f64>(&"distance".to_string()), Some(&123.456));
    assert_eq!(properties.get::<i32>(&"flat".to_string()), Some(&789));
    assert_eq!(properties.get::<bool>(&"flat".to_string()), None);
    assert!(properties.is::<String>(&"city_name".to_string()));
    assert_eq!(
        properties
            .get::<String>(&"city_name".to_string())
            .map(String::as_str),
        Some("Stockholm")
    );
    assert_eq!(
        properties.get::<Vec<String>>(&"string_array".to_string()),
        Some(&vec!["hello".to_string(), "world".to_string()])
    );
    assert_eq!(properties.get::<bool>(&"string_array".to_string()), None);
    assert_eq!(
        properties.get::<*const i32>(&"int_ptr".to_string()).copied(),
        Some(&i as *const i32)
    );
    assert_eq!(properties.get::<()>(&"null".to_string()), Some(&()));
    assert_eq!(properties.len(), 6);
}

#[test]
fn test_string_slice_is_not_string() {
    let mut properties = PropertySet::<&str>::new();
    properties.set("name", "literal");

    assert!(properties.is::<&str>(&"name"));
    assert!(!properties.is::<String>(&"name"));
    assert_eq!(properties.get::<String>(&"name"), None);
    assert_eq!(properties.get::<&str>(&"name"), Some(&"literal"));
}

#[test]
fn test_overwrite_changes_type() {
    let mut properties = PropertySet::<&str>::new();

    properties.set("key", 1.5f32);
    properties.set("key", "new value".to_string());

    assert_eq!(properties.get::<f32>(&"key"), None);
    assert!(!properties.is::<f32>(&"key"));
    assert_eq!(
        properties.get::<String>(&"key").map(String::as_str),
        Some("new value")
    );
    assert_eq!(properties.type_of(&"key"), Some(identity_of::<String>()));
    assert_eq!(properties.len(), 1);
}

#[test]
fn test_overwrite_drops_previous_value() {
    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    let dropped = Rc::new(Cell::new(false));
    let mut properties = PropertySet::<u32>::new();

    properties.set(1, DropFlag(Rc::clone(&dropped)));
    assert!(!dropped.get());

    properties.set(1, 0u8);
    assert!(dropped.get());
}

#[test]
fn test_dropping_set_drops_entries() {
    let shared = Rc::new("owned".to_string());
    let mut properties = PropertySet::<u32>::new();
    properties.set(1, Rc::clone(&shared));
    properties.set(2, Rc::clone(&shared));
    assert_eq!(Rc::strong_count(&shared), 3);

    drop(properties);
    assert_eq!(Rc::strong_count(&shared), 1);
}

#[test]
fn test_move_transfers_entries() {
    let mut source = PropertySet::<String>::new();
    source.set("number".to_string(), 7u64);
    source.set("text".to_string(), "seven".to_string());

    let target = std::mem::take(&mut source);

    assert!(source.is_empty());
    assert!(!source.has(&"number".to_string()));
    assert_eq!(target.len(), 2);
    assert_eq!(target.get::<u64>(&"number".to_string()), Some(&7));
    assert_eq!(
        target.get::<String>(&"text".to_string()).map(String::as_str),
        Some("seven")
    );
}

#[test]
fn test_swap() {
    let mut first = PropertySet::<&str>::new();
    let mut second = PropertySet::<&str>::new();
    first.set("a", 1i16);
    second.set("b", 2u16);
    second.set("c", 3u16);

    first.swap(&mut second);

    assert_eq!(first.len(), 2);
    assert_eq!(first.get::<u16>(&"c"), Some(&3));
    assert!(!first.has(&"a"));
    assert_eq!(second.len(), 1);
    assert_eq!(second.get::<i16>(&"a"), Some(&1));
}

#[test]
fn test_try_get_errors() {
    let mut properties = PropertySet::<&str>::new();
    properties.set("key", 42i32);

    assert_eq!(properties.try_get::<i32>(&"key"), Ok(&42));

    match properties.try_get::<i32>(&"nonexistent") {
        Err(PropertyError::KeyNotFound(key)) => assert_eq!(key, "\"nonexistent\""),
        other => panic!("Expected KeyNotFound, got {:?}", other),
    }

    match properties.try_get::<String>(&"key") {
        Err(PropertyError::TypeMismatch { expected, found }) => {
            assert_eq!(expected, identity_of::<String>().name());
            assert_eq!(found, "i32");
        }
        other => panic!("Expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let key_not_found = PropertyError::KeyNotFound("\"city\"".to_string());
    let type_mismatch = PropertyError::TypeMismatch {
        expected: "f64",
        found: "i32",
    };

    assert_eq!(format!("{}", key_not_found), "Key not found: \"city\"");
    assert_eq!(
        format!("{}", type_mismatch),
        "Type mismatch: expected f64, found i32"
    );
    assert!(format!("{:?}", key_not_found).contains("KeyNotFound"));
}

#[test]
fn test_set_with() {
    let mut properties = PropertySet::<String>::new();

    properties.set_with("expensive".to_string(), || {
        let mut data = Vec::new();
        for i in 0..10 {
            data.push(i);
        }
        data
    });

    assert_eq!(
        properties.get::<Vec<i32>>(&"expensive".to_string()),
        Some(&vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9])
    );
}

#[test]
fn test_custom_key_types() {
    let mut properties = PropertySet::<(i32, i32)>::new();
    properties.set((1, 2), "point".to_string());

    assert!(properties.is::<String>(&(1, 2)));
    assert!(!properties.has(&(2, 1)));
}

#[test]
fn test_debug_lists_types() {
    let mut properties = PropertySet::<&str>::new();
    properties.set("flag", true);

    assert_eq!(format!("{:?}", properties), "{\"flag\": <bool>}");
}

#[test]
fn test_default_is_empty() {
    let properties: PropertySet<String> = Default::default();
    assert!(properties.is_empty());
    assert_eq!(properties.len(), 0);
}
