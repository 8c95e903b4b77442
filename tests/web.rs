#![cfg(target_arch = "wasm32")]

use js_sys::{Array, Function, Object, Reflect};
use tictactoe::web::{WebGame, wasm_ready};
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::*;

fn ok<T>(result: Result<T, JsError>) -> T {
    result.unwrap_or_else(|err| panic!("{:?}", JsValue::from(err)))
}

fn get(target: &JsValue, key: &str) -> JsValue {
    Reflect::get(target, &JsValue::from_str(key)).unwrap()
}

fn noop() -> Function {
    Function::new_no_args("")
}

/// Returns a callback that appends its argument to `sink`.
fn collector(sink: &Array) -> Function {
    let push = Function::new_with_args("sink, value", "sink.push(value);");
    push.bind1(&JsValue::NULL, sink)
}

#[wasm_bindgen_test]
fn wasm_is_ready() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn play_round_reports_outcome_and_renders_frames() {
    let frames = Array::new();
    let announcements = Array::new();
    let mut game = ok(WebGame::new(
        JsValue::UNDEFINED,
        collector(&frames),
        collector(&announcements),
    ));

    for index in [0, 4, 1, 8] {
        let outcome = ok(game.play_round(index));
        assert_eq!(get(&outcome, "kind"), "continued");
    }
    let outcome = ok(game.play_round(2));

    assert_eq!(get(&outcome, "kind"), "finished");
    assert_eq!(frames.length(), 5);
    assert_eq!(announcements.length(), 1);

    let announcement = announcements.get(0);
    assert_eq!(get(&announcement, "message"), "Player 1 wins!");
    assert_eq!(get(&announcement, "delayMs").as_f64(), Some(50.0));

    let last = frames.get(4);
    assert_eq!(get(&last, "gameOver"), JsValue::TRUE);
    let cells: Array = get(&last, "cells").into();
    assert_eq!(get(&cells.get(1), "highlighted"), JsValue::TRUE);
    assert_eq!(get(&cells.get(4), "highlighted"), JsValue::FALSE);
}

#[wasm_bindgen_test]
fn reset_and_board_snapshot() {
    let mut game = ok(WebGame::new(JsValue::NULL, noop(), noop()));
    ok(game.play_round(4));

    let board: Array = ok(game.get_board()).into();
    assert_eq!(board.length(), 9);
    assert_eq!(board.get(4), "X");
    assert_eq!(board.get(0), "");

    game.reset_game();

    let board: Array = ok(game.get_board()).into();
    assert_eq!(board.get(4), "");
    let player = ok(game.get_player());
    assert_eq!(get(&player, "name"), "Player 1");
    assert_eq!(get(&ok(game.state()), "gameOver"), JsValue::FALSE);
}

#[wasm_bindgen_test]
fn config_object_and_errors() {
    let config = Object::new();
    let names = Array::of2(&"Ada".into(), &"Linus".into());
    Reflect::set(&config, &"playerNames".into(), &names).unwrap();

    let mut game = ok(WebGame::new(config.into(), noop(), noop()));
    assert_eq!(get(&ok(game.get_player()), "name"), "Ada");
    assert!(game.play_round(9).is_err());

    let bad = Object::new();
    Reflect::set(&bad, &"boardSize".into(), &JsValue::from(4)).unwrap();
    assert!(WebGame::new(bad.into(), noop(), noop()).is_err());
}

#[wasm_bindgen_test]
fn throwing_callback_does_not_break_the_game() {
    let throws = Function::new_no_args("throw new Error('boom');");
    let mut game = ok(WebGame::new(JsValue::UNDEFINED, throws, noop()));

    let outcome = ok(game.play_round(0));

    assert_eq!(get(&outcome, "kind"), "continued");
    assert_eq!(get(&ok(game.get_player()), "symbol"), "O");
}
