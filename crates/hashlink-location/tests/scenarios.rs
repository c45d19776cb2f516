//! End-to-end scenarios: a shared link is opened, edited through the public
//! API, and the resulting URL is checked byte for byte.

use std::sync::{Arc, Mutex};

use hashlink_location::{
    add_hash_params, get_hash_params, has_hash_params, object_params, remove_hash_params,
    set_hash_params, HashState, InMemoryLocation, Location, ParamMapping, ParamValue,
};

const BASE: &str = "https://viewer.example/share/v/gh/org/repo/main/index.ifc";

fn open(hash: &str) -> InMemoryLocation {
    InMemoryLocation::new(&format!("{BASE}#{hash}")).unwrap()
}

#[test]
fn get_then_remove_keys_then_remove_channel() {
    let loc = open("p:x=1,y=2;v:cam=0");

    assert_eq!(get_hash_params(&loc, "p").unwrap().as_deref(), Some("p:x=1,y=2"));

    remove_hash_params(&loc, "p", &["x"]).unwrap();
    assert_eq!(loc.hash().unwrap(), "p:y=2;v:cam=0");

    remove_hash_params(&loc, "v", &[] as &[&str]).unwrap();
    assert_eq!(loc.hash().unwrap(), "p:y=2");
    assert_eq!(loc.href().unwrap(), format!("{BASE}#p:y=2"));
}

#[test]
fn set_is_remove_then_add() {
    let loc = open("p:x=1,y=2");
    let params: ParamMapping = [("x", 3)].into_iter().collect();
    set_hash_params(&loc, "p", &params, true).unwrap();
    assert_eq!(loc.hash().unwrap(), "p:x=3");
}

#[test]
fn positional_decode_of_shared_entry() {
    let params = object_params("p:1,2,foo");
    let expected: ParamMapping = [
        ("0", ParamValue::from("1")),
        ("1", ParamValue::from("2")),
        ("foo", ParamValue::Number(0.0)),
    ]
    .into_iter()
    .collect();
    assert_eq!(params, expected);
}

#[test]
fn removed_channel_is_gone() {
    let loc = open("p:x=1;c:1,2,3");
    remove_hash_params(&loc, "c", &[] as &[&str]).unwrap();
    assert!(!has_hash_params(&loc, "c").unwrap());
    assert!(has_hash_params(&loc, "p").unwrap());
}

#[test]
fn emptying_every_channel_leaves_a_clean_url() {
    let loc = InMemoryLocation::new(&format!("{BASE}?q=wall#p:x=1;c:1,2")).unwrap();
    remove_hash_params(&loc, "p", &[] as &[&str]).unwrap();
    remove_hash_params(&loc, "c", &[] as &[&str]).unwrap();
    assert_eq!(loc.href().unwrap(), format!("{BASE}?q=wall"));
    assert!(!loc.href().unwrap().contains('#'));
}

#[test]
fn camera_and_selection_share_one_fragment() {
    let loc = InMemoryLocation::new(BASE).unwrap();

    let mut camera = ParamMapping::new();
    camera.insert("x", 12.5);
    camera.insert("y", -4);
    camera.insert("z", 30);
    add_hash_params(&loc, "c", &camera, false).unwrap();

    let selection: ParamMapping = [("id", "1842")].into_iter().collect();
    add_hash_params(&loc, "p", &selection, true).unwrap();

    assert_eq!(loc.hash().unwrap(), "c:12.5,-4,30;p:id=1842");

    // Moving the camera leaves the selection entry as it was.
    let moved: ParamMapping = [("0", ParamValue::from(13))].into_iter().collect();
    add_hash_params(&loc, "c", &moved, false).unwrap();
    assert_eq!(loc.hash().unwrap(), "c:13,-4,30;p:id=1842");
}

#[test]
fn hash_state_notifies_listeners_after_write() {
    let mut state = HashState::new(open("p:x=1"));
    let seen = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&seen);
    state.register_hash_listener("nav-tree", move || {
        log.lock().unwrap().push("nav-tree");
        Ok(())
    });
    let log = Arc::clone(&seen);
    state.register_hash_listener("camera", move || {
        log.lock().unwrap().push("camera");
        Ok(())
    });

    state.add_params_with("p", &[("y", "2")].into_iter().collect(), true).unwrap();
    assert_eq!(state.get_params("p").unwrap().as_deref(), Some("p:x=1,y=2"));
    assert_eq!(*seen.lock().unwrap(), vec!["nav-tree", "camera"]);
}
