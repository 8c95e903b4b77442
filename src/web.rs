use js_sys::Function;
use serde::Serialize;
use tracing::warn;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::{GameController, Presenter};
use crate::types::Announcement;
use crate::view::BoardView;

/// Forwards frames and result notifications to JS callbacks.
///
/// A throwing callback is logged and otherwise ignored; core state is
/// already updated by the time the presenter runs.
struct JsPresenter {
    render: Function,
    announce: Function,
}

impl JsPresenter {
    fn call<T: Serialize>(callback: &Function, payload: &T, what: &str) {
        let value = match serde_wasm_bindgen::to_value(payload) {
            Ok(value) => value,
            Err(err) => {
                warn!(what, error = %err, "failed to serialize payload");
                return;
            }
        };
        if let Err(err) = callback.call1(&JsValue::NULL, &value) {
            warn!(what, error = ?err, "presenter callback threw");
        }
    }
}

impl Presenter for JsPresenter {
    fn render(&mut self, view: &BoardView) {
        Self::call(&self.render, view, "render");
    }

    fn announce(&mut self, announcement: &Announcement) {
        Self::call(&self.announce, announcement, "announce");
    }
}

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

/// Browser entry point. The page forwards cell clicks to `playRound` and
/// the reset button to `resetGame`; frames arrive through `render`.
#[wasm_bindgen]
pub struct WebGame {
    controller: GameController,
}

#[wasm_bindgen]
impl WebGame {
    /// `config` may be `undefined`/`null` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue, render: Function, announce: Function) -> Result<WebGame, JsError> {
        let config = parse_config(config)?;
        let presenter = JsPresenter { render, announce };
        Ok(WebGame {
            controller: GameController::new(&config, Box::new(presenter)),
        })
    }

    /// Pushes the current frame, e.g. on page load.
    pub fn render(&mut self) {
        self.controller.render();
    }

    #[wasm_bindgen(js_name = playRound)]
    pub fn play_round(&mut self, index: u32) -> Result<JsValue, JsError> {
        let outcome = self.controller.play_round(index as usize)?;
        Ok(serde_wasm_bindgen::to_value(&outcome)?)
    }

    #[wasm_bindgen(js_name = resetGame)]
    pub fn reset_game(&mut self) {
        self.controller.reset_game();
    }

    #[wasm_bindgen(js_name = getPlayer)]
    pub fn get_player(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(self.controller.player())?)
    }

    /// Nine strings, each `""`, `"X"` or `"O"`.
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.controller.board().cells())?)
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        Ok(serde_wasm_bindgen::to_value(&self.controller.state())?)
    }
}

fn parse_config(value: JsValue) -> Result<GameConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(GameConfig::default());
    }
    let config: GameConfig = serde_wasm_bindgen::from_value(value)?;
    config.validate()?;
    Ok(config)
}
