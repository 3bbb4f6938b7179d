//! Content pane injection tests

use super::helpers::*;
use crate::names::{navigators, params, screens};
use crate::{ScreenLayout, ensure_content_pane};

#[test]
fn wide_layout_gets_a_content_pane_at_slot_one() {
    let overlay = navigator(
        navigators::MODAL_OVERLAY,
        vec![context_route(screens::CONTENT, "123")],
    );
    let mut tree = state(vec![route(HOME), overlay]);
    ensure_content_pane(&mut tree, ScreenLayout::Wide);

    assert_eq!(tree.routes.len(), 3);
    let pane = &tree.routes[1];
    assert_eq!(pane.name, navigators::CONTENT_PANE);
    let nested = pane.state.as_ref().unwrap();
    assert_eq!(nested.routes.len(), 1);
    assert_eq!(nested.routes[0].name, screens::CONTENT);
    assert_eq!(
        nested.routes[0].string_param(params::CONTEXT_ID),
        Some("123")
    );
    assert_eq!(tree.index, Some(2));
    assert!(tree.stale);
}

#[test]
fn narrow_layout_is_left_alone() {
    let mut tree = state(vec![
        route(HOME),
        navigator(
            navigators::MODAL_OVERLAY,
            vec![context_route(screens::CONTENT, "123")],
        ),
    ]);
    let before = tree.clone();
    ensure_content_pane(&mut tree, ScreenLayout::Narrow);
    assert_eq!(tree, before);
}

#[test]
fn existing_pane_is_not_duplicated() {
    let mut tree = state(vec![
        route(HOME),
        navigator(navigators::CONTENT_PANE, vec![route(screens::CONTENT)]),
    ]);
    let before = tree.clone();
    ensure_content_pane(&mut tree, ScreenLayout::Wide);
    assert_eq!(tree, before);
}

#[test]
fn injection_is_idempotent() {
    let mut tree = state(vec![route(HOME)]);
    ensure_content_pane(&mut tree, ScreenLayout::Wide);
    let after_first = tree.clone();
    ensure_content_pane(&mut tree, ScreenLayout::Wide);
    assert_eq!(tree, after_first);
}

#[test]
fn empty_stack_takes_the_pane_as_its_only_route() {
    let mut tree = state(vec![]);
    ensure_content_pane(&mut tree, ScreenLayout::Wide);
    assert_eq!(tree.routes.len(), 1);
    assert_eq!(tree.routes[0].name, navigators::CONTENT_PANE);
    assert_eq!(tree.index, Some(0));
    assert!(tree.stale);
}

#[test]
fn missing_context_yields_an_empty_identifier() {
    let mut tree = state(vec![route(HOME)]);
    ensure_content_pane(&mut tree, ScreenLayout::Wide);
    let pane = &tree.routes[1];
    assert_eq!(
        pane.state.as_ref().unwrap().routes[0].string_param(params::CONTEXT_ID),
        Some("")
    );
}
