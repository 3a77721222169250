//! Demo of scripting a stub and querying how it was used.

use standin::{any, args, contains, field, key, record, regexp, Stub, Value};

fn main() {
    // Example 1: Script returns, then invoke like the code under test would
    println!("=== Scripting Example ===");
    let mut store = Stub::new();
    store.returns_once(args![false, "cache miss"]);
    store.returns(args![true, "ok"]);

    for attempt in 1..=3 {
        let out = store.invoke(args!["users/42", record! { "ttl" => 60 }]);
        println!("attempt {attempt}: {out:?}");
    }

    // Example 2: Call bookkeeping
    println!("\n=== Query Example ===");
    println!("called: {}", store.called());
    println!("call count: {}", store.call_count());
    println!("first args: {:?}", store.first_call().map(|c| c.args()));

    // Example 3: Argument matching with literals and matchers
    println!("\n=== Matching Example ===");
    println!("fetched users/42: {}", store.called_with(&args!["users/42"]));
    println!(
        "every path under users/: {}",
        store.always_called_with(&args![regexp("^users/")])
    );
    println!(
        "always sent a ttl: {}",
        store.always_called_with(&args![any(), field("ttl", 60)])
    );

    // Example 4: Relative ordering between stubs
    println!("\n=== Ordering Example ===");
    let mut auth = Stub::new();
    let mut fetch = Stub::new();
    auth.invoke(args!["token"]);
    fetch.invoke(args!["users/42"]);
    println!("auth before fetch: {}", auth.called_before(&fetch));
    println!("fetch after auth: {}", fetch.called_after(&auth));

    // Example 5: Reading scripted returns back out
    println!("\n=== Extraction Example ===");
    let out = store.invoke(args!["users/42", record! { "ttl" => 60 }]);
    let hit = bool::try_from(&out[0]).unwrap();
    let status = String::try_from(&out[1]).unwrap();
    println!("hit: {hit}, status: {status}");

    store.reset();
    println!("after reset, called: {}", store.called());

    // Example 6: JSON payloads match directly
    println!("\n=== JSON Example ===");
    let mut api = Stub::new();
    api.invoke(args![Value::from(serde_json::json!({
        "user": { "id": 7 },
        "tags": ["alpha", "beta"],
    }))]);
    println!(
        "saw user id 7: {}",
        api.called_with(&args![key("user", key("id", 7))])
    );
    println!(
        "saw tag beta: {}",
        api.called_with(&args![key("tags", contains("beta"))])
    );
}
