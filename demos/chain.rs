//

extern crate decorum;
use decorum::{curry, decorate_object, Decorations, Method, Object, Result, SharedObject, Value};

fn main() -> Result<()> {
    let greet = Method::new(|call| {
        let name = call.this().as_object()?.get("name")?;
        Ok(Value::from(format!("hello, {}", name.as_str()?)))
    });
    let mut greeter = SharedObject::new(Object::with_props(vec![
        ("name", Value::from("world")),
        ("greet", Value::from(greet)),
    ]));

    // greet() = super() + suffix, with the suffix fixed by curry
    let punctuate = Method::new(|call| {
        let below = call.call_super(Vec::new())?;
        Ok(Value::from(format!("{}{}", below.as_str()?, call.arg(0).as_str()?)))
    });
    let shout = Method::new(|call| {
        let below = call.call_super(Vec::new())?;
        Ok(Value::from(below.as_str()?.to_uppercase()))
    });
    let decorations = Decorations::new()
        .group(
            "punctuation",
            vec![(
                "greet",
                curry(punctuate, Value::from(greeter.share()), vec![Value::from("!")]),
            )],
        )
        .group("volume", vec![("greet", shout)]);

    decorate_object(&mut greeter, &decorations)?;
    println!("{}", greeter.invoke("greet", Vec::new())?.as_str()?);
    Ok(())
}
