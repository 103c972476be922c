mod common;

use common::TestEnv;

#[test]
fn attach_detach_delete_cycle_enforces_the_guard() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);
    let item = env.run_json(&["item", "add", "lamp", "--category", "lighting"]);
    assert_eq!(item["data"]["id"], 1);

    let attach = env.run_json(&["version", "attach", "1", "1"]);
    assert_eq!(attach["ok"], true);

    let blocked = env.run_json_err(&["item", "remove", "1"]);
    assert_eq!(blocked["ok"], false);
    assert_eq!(blocked["error"]["code"], "IN_USE");

    let detach = env.run_json(&["version", "detach", "1", "1"]);
    assert_eq!(detach["data"], true);

    let removed = env.run_json(&["item", "remove", "1"]);
    assert_eq!(removed["data"]["id"], 1);

    let list = env.run_json(&["item", "list"]);
    assert_eq!(list["data"].as_array().expect("items array").len(), 0);
}

#[test]
fn attaching_twice_keeps_a_single_association() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);
    env.run_json(&["item", "add", "lamp", "--category", "lighting"]);

    env.run_json(&["version", "attach", "1", "1"]);
    env.run_json(&["version", "attach", "1", "1"]);

    let show = env.run_json(&["version", "show", "1"]);
    let attached = show["data"]["version"]["itemIds"]
        .as_array()
        .expect("itemIds array");
    assert_eq!(attached.len(), 1);
}

#[test]
fn attach_rejects_unknown_version_or_item() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);
    env.run_json(&["item", "add", "lamp", "--category", "lighting"]);

    let err = env.run_json_err(&["version", "attach", "9", "1"]);
    assert_eq!(err["error"]["code"], "NOT_FOUND");
    let err = env.run_json_err(&["version", "attach", "1", "9"]);
    assert_eq!(err["error"]["code"], "NOT_FOUND");
}

#[test]
fn attach_new_creates_and_links_in_one_step() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);

    let created = env.run_json(&[
        "version",
        "attach-new",
        "1",
        "chair",
        "--category",
        "seating",
        "--product-link",
        "https://example.com/chair",
    ]);
    assert_eq!(created["data"]["id"], 1);
    assert_eq!(created["data"]["productLink"], "https://example.com/chair");

    let show = env.run_json(&["version", "show", "1"]);
    assert_eq!(show["data"]["items"][0]["name"], "chair");

    let invalid = env.run_json_err(&["version", "attach-new", "1", "", "--category", "seating"]);
    assert_eq!(invalid["error"]["code"], "VALIDATION");

    let missing = env.run_json_err(&["version", "attach-new", "9", "desk", "--category", "tables"]);
    assert_eq!(missing["error"]["code"], "NOT_FOUND");
}

#[test]
fn detach_of_missing_association_is_not_an_error() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);

    let detach = env.run_json(&["version", "detach", "1", "42"]);
    assert_eq!(detach["data"], false);

    let err = env.run_json_err(&["version", "detach", "9", "1"]);
    assert_eq!(err["error"]["code"], "NOT_FOUND");
}

#[test]
fn edit_updates_fields_and_validates_required_ones() {
    let env = TestEnv::new();
    env.run_json(&["item", "add", "lamp", "--category", "lighting"]);

    let edited = env.run_json(&["item", "edit", "1", "--name", "desk lamp"]);
    assert_eq!(edited["data"]["name"], "desk lamp");
    assert_eq!(edited["data"]["category"], "lighting");

    let linked = env.run_json(&[
        "item",
        "edit",
        "1",
        "--product-link",
        "https://example.com/lamp",
    ]);
    assert_eq!(linked["data"]["productLink"], "https://example.com/lamp");

    let cleared = env.run_json(&["item", "edit", "1", "--product-link", ""]);
    assert!(cleared["data"].get("productLink").is_none());

    let invalid = env.run_json_err(&["item", "edit", "1", "--category", ""]);
    assert_eq!(invalid["error"]["code"], "VALIDATION");

    let missing = env.run_json_err(&["item", "edit", "9", "--name", "x"]);
    assert_eq!(missing["error"]["code"], "NOT_FOUND");
}

#[test]
fn usage_lists_referencing_versions_most_recent_first() {
    let env = TestEnv::new();
    env.run_json(&["version", "add", "a", "--start", "2024-01-01"]);
    env.run_json(&["version", "add", "b", "--start", "2024-06-01"]);
    env.run_json(&["item", "add", "lamp", "--category", "lighting"]);
    env.run_json(&["version", "attach", "1", "1"]);
    env.run_json(&["version", "attach", "2", "1"]);

    let usage = env.run_json(&["item", "usage", "1"]);
    let versions = usage["data"].as_array().expect("usage array");
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0]["versionName"], "b");
    assert_eq!(versions[1]["versionName"], "a");

    let unused = env.run_json(&["item", "usage", "42"]);
    assert_eq!(unused["data"].as_array().expect("usage array").len(), 0);
}
