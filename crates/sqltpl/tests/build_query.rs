use serde_json::json;
use sqltpl::{TplError, Value, build_query, skip, template};

#[test]
fn constant_query_passes_through() {
    let q = build_query("SELECT name FROM users WHERE user_id = 1", &[]).unwrap();
    assert_eq!(q, "SELECT name FROM users WHERE user_id = 1");
}

#[test]
fn generic_and_integer_placeholders() {
    let q = build_query(
        "SELECT * FROM users WHERE name = ? AND block = ?d",
        &[Value::from("Jack"), Value::from(true)],
    )
    .unwrap();
    assert_eq!(q, "SELECT * FROM users WHERE name = 'Jack' AND block = 1");
}

#[test]
fn identifier_list_in_select() {
    let q = build_query(
        "SELECT ?# FROM users WHERE user_id = ?d AND block = ?d",
        &[Value::from(vec!["name", "email"]), Value::from(2), Value::from(true)],
    )
    .unwrap();
    assert_eq!(
        q,
        "SELECT `name`, `email` FROM users WHERE user_id = 2 AND block = 1"
    );
}

#[test]
fn update_with_mapping() {
    let fields = Value::map([("name", Value::from("Jack")), ("email", Value::Null)]);
    let q = build_query("UPDATE users SET ?a WHERE user_id = -1", &[fields]).unwrap();
    assert_eq!(
        q,
        "UPDATE users SET `name` = 'Jack', `email` = NULL WHERE user_id = -1"
    );
}

#[test]
fn mapping_values_are_escaped() {
    let fields = Value::map([("name", Value::from("a'b")), ("age", Value::Null)]);
    let q = build_query("?a", &[fields]).unwrap();
    assert_eq!(q, r"`name` = 'a\'b', `age` = NULL");
}

#[test]
fn single_identifier_is_backticked() {
    assert_eq!(build_query("?#", &[Value::from("users")]).unwrap(), "`users`");
}

#[test]
fn integer_specifier_takes_digit_prefix() {
    assert_eq!(build_query("?d", &[Value::from("12abc")]).unwrap(), "12");
}

#[test]
fn float_specifier_renders_decimal() {
    assert_eq!(build_query("?f", &[Value::from(3.5)]).unwrap(), "3.5");
}

#[test]
fn generic_specifier_escapes_quotes() {
    assert_eq!(
        build_query("?", &[Value::from("O'Brien")]).unwrap(),
        r"'O\'Brien'"
    );
}

#[test]
fn block_kept_without_sentinel() {
    let q = build_query("SELECT * FROM t {WHERE id = ?d}", &[Value::from(5)]).unwrap();
    assert_eq!(q, "SELECT * FROM t WHERE id = 5");
}

#[test]
fn block_dropped_with_sentinel() {
    let q = build_query("SELECT * FROM t {WHERE id = ?d}", &[skip()]).unwrap();
    assert_eq!(q, "SELECT * FROM t");
}

#[test]
fn in_list_with_trailing_block() {
    let tpl = template("SELECT name FROM users WHERE ?# IN (?a){ AND block = ?d}");
    let ids = || Value::from(vec![1, 2, 3]);

    let q = tpl
        .build(&[Value::from("user_id"), ids(), Value::from(true)])
        .unwrap();
    assert_eq!(
        q,
        "SELECT name FROM users WHERE `user_id` IN (1, 2, 3) AND block = 1"
    );

    let q = tpl.build(&[Value::from("user_id"), ids(), skip()]).unwrap();
    assert_eq!(q, "SELECT name FROM users WHERE `user_id` IN (1, 2, 3)");
}

#[test]
fn two_regions_are_rejected() {
    let err = build_query("a {b = ?} c {d = ?}", &[Value::from(1), Value::from(2)]).unwrap_err();
    assert_eq!(err, TplError::NestedConditionalBlock);
}

#[test]
fn equal_length_lists_never_starve() {
    let cases: &[(&str, &[Value])] = &[
        ("? ?d ?f", &[Value::Null, Value::Int(1), Value::Float(2.0)]),
        ("a = ? AND b = ?", &[Value::Bool(false), Value::from("x")]),
        ("no placeholders at all", &[]),
    ];
    for (tpl, args) in cases {
        let res = build_query(tpl, args);
        assert!(
            !matches!(res, Err(TplError::MissingArgument { .. })),
            "starved on {tpl:?}"
        );
    }
}

#[test]
fn missing_argument_is_reported() {
    let err = build_query("a = ? AND b = ?", &[Value::from(1)]).unwrap_err();
    assert_eq!(
        err,
        TplError::MissingArgument {
            placeholder: 2,
            provided: 1,
        }
    );
}

#[test]
fn container_on_generic_path_is_rejected() {
    let err = build_query("v = ?", &[Value::from(json!({"a": 1}))]).unwrap_err();
    assert!(err.is_unsupported_type());
    assert_eq!(err.to_string(), "Unsupported argument type: mapping");
}

#[test]
fn json_arguments_bind_like_native_ones() {
    let q = build_query(
        "SELECT ?# FROM t WHERE id = ?d AND note = ?",
        &[
            Value::from(json!(["id", "name"])),
            Value::from(json!(7)),
            Value::from(json!("it's fine")),
        ],
    )
    .unwrap();
    assert_eq!(
        q,
        r"SELECT `id`, `name` FROM t WHERE id = 7 AND note = 'it\'s fine'"
    );
}

#[test]
fn output_is_deterministic() {
    let tpl = "SELECT * FROM t WHERE a = ?d {AND b = ?}";
    let args = [Value::from(9), Value::from("x")];
    let first = build_query(tpl, &args).unwrap();
    for _ in 0..3 {
        assert_eq!(build_query(tpl, &args).unwrap(), first);
    }
}
