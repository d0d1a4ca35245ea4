//! Example demonstrating the optional conditional block.
//!
//! Run with:
//!   cargo run --example optional_filter -p sqltpl

use sqltpl::{TplResult, Value, skip, template};

fn list_users(city: Option<&str>) -> TplResult<String> {
    let tpl = template("SELECT name, email FROM users WHERE active = ?d {AND city = ?}");
    let city = match city {
        Some(city) => Value::from(city),
        None => skip(),
    };
    tpl.build(&[Value::from(true), city])
}

fn main() -> TplResult<()> {
    println!("{}", list_users(Some("Oslo"))?);
    println!("{}", list_users(None)?);

    let update = sqltpl::build_query(
        "UPDATE users SET ?a WHERE user_id = ?d",
        &[
            Value::map([("name", Value::from("Jack")), ("email", Value::Null)]),
            Value::from(42),
        ],
    )?;
    println!("{update}");

    Ok(())
}
