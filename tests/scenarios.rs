//! End-to-end drawing and recognition scenarios.

use glyph_core::persistence::{load_dictionary, save_dictionary};
use glyph_core::{Dictionary, InputPad, PadConfig, PadEvent, PadState, Symbol};
use std::cell::RefCell;
use std::rc::Rc;

fn gesture(pad: &mut InputPad, points: &[usize]) -> bool {
    if !pad.begin_gesture(None) {
        return false;
    }
    for &p in points {
        pad.point_moved(Some(p));
    }
    pad.end_gesture()
}

#[test]
fn two_segment_symbol_encodes_and_decodes() {
    let mut pad = InputPad::new();
    gesture(&mut pad, &[0, 1, 2]);
    let symbol = pad.symbol();
    assert_eq!(symbol.to_string(), "0112");
    assert_eq!(Symbol::from("0112"), symbol);
}

#[test]
fn immediate_retrace_collapses() {
    let mut pad = InputPad::new();
    gesture(&mut pad, &[0, 1, 0]);
    assert_eq!(pad.draft().connection_count(), 2);
    assert_eq!(pad.draft().clone().normalize().connection_count(), 1);
}

#[test]
fn exhausted_stroke_budget_rejects_without_side_effects() {
    let config = PadConfig { stroke_limit: 1, ..PadConfig::default() };
    let mut pad = InputPad::with_config(&config);
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    pad.subscribe(move |event, _| sink.borrow_mut().push(event));

    assert!(pad.begin_gesture(None));
    assert!(pad.is_dragging());
    assert!(pad.end_gesture());
    assert_eq!(*events.borrow(), vec![PadEvent::StrokeEnded]);

    assert!(!pad.begin_gesture(None));
    assert_eq!(pad.state(), PadState::Idle);
    assert_eq!(events.borrow().len(), 1);
}

#[test]
fn lookup_by_drawn_symbol() {
    let mut dictionary = Dictionary::new();
    dictionary.insert(Symbol::from("01"), "A");
    dictionary.insert(Symbol::from("23"), "B");

    assert_eq!(dictionary.get(&Symbol::from("45")), None);
    assert_eq!(dictionary.get(&Symbol::from("23")), Some(&"B"));

    let mut pad = InputPad::new();
    gesture(&mut pad, &[3, 2]);
    assert_eq!(dictionary.get(&pad.symbol()), Some(&"B"));
}

#[test]
fn multi_stroke_symbol_is_order_independent() {
    let mut first = InputPad::new();
    gesture(&mut first, &[0, 10, 3]);
    gesture(&mut first, &[5, 1]);

    let mut second = InputPad::new();
    gesture(&mut second, &[1, 5]);
    gesture(&mut second, &[3, 10, 0]);

    assert_eq!(first.symbol(), second.symbol());
    assert_ne!(first.draft().to_string(), second.draft().to_string());
}

#[test]
fn learned_symbols_survive_a_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dictionary.bin");

    let mut pad = InputPad::new();
    gesture(&mut pad, &[4, 8, 10, 7, 2]);
    let mut dictionary = Dictionary::new();
    assert!(dictionary.insert(pad.symbol(), "path".to_string()));
    save_dictionary(&dictionary, &path).unwrap();

    let reloaded: Dictionary<String> = load_dictionary(&path).unwrap();
    pad.clear_symbol();
    gesture(&mut pad, &[2, 7, 10, 8, 4]);
    assert_eq!(reloaded.get(&pad.symbol()).map(String::as_str), Some("path"));
}
