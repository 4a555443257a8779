use sovran_propset::{Variant, VariantError, VariantValue, Visitor, WideString};

/// Prints whatever the variant holds
struct Printer;

impl Visitor for Printer {
    fn visit_i8(&mut self, value: i8) {
        println!("  int8: {}", value);
    }
    fn visit_u8(&mut self, value: u8) {
        println!("  uint8: {}", value);
    }
    fn visit_i32(&mut self, value: i32) {
        println!("  int32: {}", value);
    }
    fn visit_i64(&mut self, value: i64) {
        println!("  int64: {}", value);
    }
    fn visit_f64(&mut self, value: f64) {
        println!("  double: {}", value);
    }
    fn visit_string(&mut self, value: &String) {
        println!("  string: {:?}", value);
    }
    fn visit_wstring(&mut self, value: &WideString) {
        println!("  wstring: {:?} ({} units)", value.to_string_lossy(), value.len());
    }
}

fn show(label: &str, variant: &Variant) {
    println!("{} [{}]", label, variant.variant_type());
    if !variant.visit(&mut Printer) {
        println!("  (empty)");
    }
}

fn main() -> Result<(), VariantError> {
    let mut v = Variant::from(12i8);
    show("constructed", &v);

    v.set("text");
    show("assigned", &v);

    let copy = v.clone();
    v.set(WideString::from("wide text"));
    show("source after change", &v);
    show("copy", &copy);

    let narrow = VariantValue::<String>::from(&v);
    println!("as narrow string valid: {}", narrow.is_valid());
    let wide = VariantValue::<WideString>::from(&v);
    println!("as wide string valid: {}", wide.is_valid());

    let mut number = Variant::from(1i64 << 40);
    show("number", &number);
    match i32::try_from(&number) {
        Ok(value) => println!("as int32: {}", value),
        Err(e) => println!("as int32: {}", e),
    }
    println!("as int64: {}", i64::try_from(&number)?);

    let moved = number.take();
    show("moved-from", &number);
    show("moved-to", &moved);

    v.clear();
    show("cleared", &v);

    Ok(())
}
