#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use reqline_core::commands;
use reqline_core::{Attributes, Console, Error, Namespace, PlainStyle, Session, SessionRef};

fn namespace() -> Namespace {
    commands::namespace().unwrap()
}

#[test]
fn test_fragment_set_metadata() {
    let ns = namespace();
    let fragment_set = ns.get("FragmentSet").unwrap();

    assert_eq!(fragment_set.alias_for(), None);
    assert!(fragment_set.aliases().is_empty());
    assert_eq!(fragment_set.category(), Some("Navigation"));
    assert_eq!(fragment_set.command_line().to_string(), "fragment-s[et]");
    assert_eq!(fragment_set.command_line_arguments(), Some("FRAGMENT"));
    assert_eq!(
        fragment_set.help(&PlainStyle),
        "Sets the fragment of the request's address"
    );
    assert_eq!(
        fragment_set.help_extended(&PlainStyle),
        "Sets the page fragment used for the request. Does not communicate with the host.\n\n\
         The page fragment will be URL-encoded if necessary.\n\n\
         The console prompt shows the address for the current request."
    );
    assert_eq!(
        fragment_set.see_also_commands(),
        vec![ns.get("FragmentUnset").unwrap(), ns.get("Address").unwrap()]
    );
}

#[test]
fn test_fragment_set_build_for() {
    let ns = namespace();
    let fragment_set = ns.get("FragmentSet").unwrap();
    let session = Session::open("localhost").unwrap();
    let attributes = Attributes::new(Rc::clone(&session));
    let mut console = Console::plain();

    let built = fragment_set
        .build_for("fragment-set foo", &attributes, &mut console)
        .unwrap()
        .unwrap();
    assert_eq!(built.arguments(), ["foo"]);
    assert!(Rc::ptr_eq(built.session(), &session));

    let built = fragment_set
        .build_for("fragment-s bar", &attributes, &mut console)
        .unwrap()
        .unwrap();
    assert_eq!(built.arguments(), ["bar"]);

    assert!(fragment_set
        .build_for("x baz", &attributes, &mut console)
        .unwrap()
        .is_none());
    assert!(fragment_set
        .build_for("fragment-unset", &attributes, &mut console)
        .unwrap()
        .is_none());
    assert!(console.lines().is_empty());
}

#[test]
fn test_hash_is_an_ordinary_argument() {
    let ns = namespace();
    let attributes = Attributes::new(Session::open("localhost").unwrap());
    let mut console = Console::plain();
    let built = ns
        .parse_line("fragment-set #top", &attributes, &mut console)
        .unwrap();
    assert_eq!(built.arguments(), ["#top"]);
}

fn perform(ns: &Namespace, line: &str, session: &SessionRef) {
    let attributes = Attributes::new(Rc::clone(session));
    let mut console = Console::plain();
    ns.parse_line(line, &attributes, &mut console)
        .unwrap()
        .perform(&mut console)
        .unwrap();
}

#[test]
fn test_set_and_unset_fragment() {
    let ns = namespace();
    let session = Session::open("http://example.com/docs").unwrap();

    perform(&ns, "fragment-s 'getting started'", &session);
    assert_eq!(
        session.borrow().last_request().unwrap().address(),
        "http://example.com/docs#getting%20started"
    );

    perform(&ns, "FRAGMENT-U", &session);
    assert_eq!(
        session.borrow().last_request().unwrap().address(),
        "http://example.com/docs"
    );
    assert_eq!(session.borrow().requests().len(), 3);

    // Already unset: the request object is unchanged and not recorded again
    perform(&ns, "fragment-unset", &session);
    assert_eq!(session.borrow().requests().len(), 3);
}

#[test]
fn test_fragment_set_without_argument() {
    let ns = namespace();
    let attributes = Attributes::new(Session::open("localhost").unwrap());
    let mut console = Console::plain();
    let command = ns.parse_line("fragment-set", &attributes, &mut console).unwrap();
    assert!(matches!(
        command.perform(&mut console),
        Err(Error::MissingArgument { .. })
    ));
}
