//! Lyric player API
//!
//! `fetchTrack` loads the lyric resource (falling back to the placeholder
//! track), and `LyricPlayer` turns playback ticks into row highlights and
//! scroll positions on an attached container.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlElement, Request, RequestCache, RequestInit, Response};

use crate::api::helpers::{deserialize_or_default, serialize, window};
use crate::config::PlayerConfig;
use crate::errors::LyricsError;
use crate::fallback::track_from_fetch;
use crate::models::{LyricEntry, Track};
use crate::parse::parse_lrc;
use crate::sync::{format_clock, seek_fraction, time_for_seek, LineHighlight, LyricSync};
use crate::{wasm_error, wasm_info, wasm_log, wasm_warn};

const LINE_CLASS: &str = "line";
const ACTIVE_CLASS: &str = "active";
const UPCOMING_CLASS: &str = "upNext";

/// Fetch lyric text, bypassing the HTTP cache
async fn fetch_text(url: &str) -> Result<String, LyricsError> {
    let transport = |e: JsValue| LyricsError::Transport(format!("{:?}", e));

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts).map_err(transport)?;
    let win = window().map_err(transport)?;
    let resp_value = JsFuture::from(win.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let resp: Response = resp_value.dyn_into().map_err(transport)?;

    if !resp.ok() {
        return Err(LyricsError::Status(resp.status()));
    }

    let body = resp
        .text()
        .map_err(|e| LyricsError::Body(format!("{:?}", e)))?;
    JsFuture::from(body)
        .await
        .map_err(|e| LyricsError::Body(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| LyricsError::Body("response text was not a string".to_string()))
}

/// Load a lyric track from `url`.
///
/// Always resolves to a track: transport errors, non-2xx responses and files
/// without timed lines all produce the placeholder track.
pub async fn load_track(url: &str) -> Track {
    let result = fetch_text(url).await;
    if let Err(e) = &result {
        wasm_warn!("Lyrics fetch failed ({}), using placeholder", e);
    }
    track_from_fetch(result)
}

/// JS entry point for [`load_track`]
#[wasm_bindgen(js_name = fetchTrack)]
pub async fn fetch_track(url: String) -> Result<JsValue, JsValue> {
    let track = load_track(&url).await;
    wasm_info!("fetchTrack: {} entries from {:?}", track.len(), track.source);
    serialize(&track, "Failed to serialize track")
}

/// Parse LRC text into a JS array of `{ timestamp, text }`
#[wasm_bindgen(js_name = parseLrc)]
pub fn parse_lrc_js(text: &str) -> Result<JsValue, JsValue> {
    serialize(&parse_lrc(text), "Failed to serialize lyric entries")
}

#[wasm_bindgen(js_name = formatClock)]
pub fn format_clock_js(seconds: f64) -> String {
    format_clock(seconds)
}

#[wasm_bindgen(js_name = seekFraction)]
pub fn seek_fraction_js(current: f64, duration: f64) -> f64 {
    seek_fraction(current, duration)
}

/// Seek target in seconds, or `undefined` while the duration is unknown
#[wasm_bindgen(js_name = timeForSeek)]
pub fn time_for_seek_js(fraction: f64, duration: f64) -> Option<f64> {
    time_for_seek(fraction, duration)
}

/// Lyric display bound to a scrollable container of `<p class="line">` rows
#[wasm_bindgen]
pub struct LyricPlayer {
    sync: LyricSync,
    container: Option<HtmlElement>,
}

#[wasm_bindgen]
impl LyricPlayer {
    /// Create a player; `config` may be `undefined` or a partial `PlayerConfig`
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<LyricPlayer, JsValue> {
        let config: PlayerConfig = deserialize_or_default(config, "Invalid player config")?;
        Ok(LyricPlayer {
            sync: LyricSync::new(config),
            container: None,
        })
    }

    /// Configured lyric resource URL
    #[wasm_bindgen(getter, js_name = lyricsUrl)]
    pub fn lyrics_url(&self) -> String {
        self.sync.config().lyrics_url.clone()
    }

    /// Attach the scrollable container rows are rendered into
    pub fn attach(&mut self, container: HtmlElement) -> Result<(), JsValue> {
        self.container = Some(container);
        self.render()
    }

    /// Load a track (as returned by `fetchTrack`) and render its rows.
    ///
    /// Returns the calibrated entries.
    pub fn load(&mut self, track: JsValue) -> Result<JsValue, JsValue> {
        let track: Track = serde_wasm_bindgen::from_value(track).map_err(|e| {
            wasm_error!("Rejected track, keeping {} current rows: {}", self.sync.entries().len(), e);
            JsValue::from_str(&format!("Invalid track: {}", e))
        })?;
        let entries = self.sync.load(&track).to_vec();
        self.render()?;
        serialize(&entries, "Failed to serialize lyric entries")
    }

    /// Change calibration; rows are re-rendered with the new timestamps
    #[wasm_bindgen(js_name = setOffset)]
    pub fn set_offset(&mut self, offset_seconds: f64) -> Result<(), JsValue> {
        self.sync.set_offset(offset_seconds);
        self.render()
    }

    /// Process a playback position. Returns the `LineChange` when the active
    /// row changed, otherwise `null`.
    pub fn tick(&mut self, time: f64) -> Result<JsValue, JsValue> {
        match self.sync.update(time) {
            Some(change) => {
                wasm_log!("Active line {} at {:.2}s", change.highlight.active, time);
                self.highlight(change.highlight)?;
                serialize(&change, "Failed to serialize line change")
            }
            None => Ok(JsValue::NULL),
        }
    }

    /// Scroll offset that anchors a row at the configured viewport ratio
    #[wasm_bindgen(js_name = scrollTopFor)]
    pub fn scroll_top_for(&self, row_offset_top: f64, viewport_height: f64) -> f64 {
        self.sync.scroll_top(row_offset_top, viewport_height)
    }
}

impl LyricPlayer {
    fn render(&self) -> Result<(), JsValue> {
        let Some(container) = &self.container else {
            return Ok(());
        };
        let document = window()?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        container.set_inner_html("");
        for (idx, entry) in self.sync.entries().iter().enumerate() {
            let row = row_element(&document, idx, entry)?;
            container.append_child(&row)?;
        }
        Ok(())
    }

    fn highlight(&self, highlight: LineHighlight) -> Result<(), JsValue> {
        let Some(container) = &self.container else {
            return Ok(());
        };

        let rows = container.children();
        for i in 0..rows.length() {
            if let Some(row) = rows.item(i) {
                row.class_list().remove_2(ACTIVE_CLASS, UPCOMING_CLASS)?;
            }
        }

        let Some(active) = rows.item(highlight.active as u32) else {
            return Ok(());
        };
        active.class_list().add_1(ACTIVE_CLASS)?;
        if let Some(next) = highlight.upcoming.and_then(|i| rows.item(i as u32)) {
            next.class_list().add_1(UPCOMING_CLASS)?;
        }

        let active: HtmlElement = active.dyn_into()?;
        let top = self.sync.scroll_top(
            active.offset_top() as f64,
            container.client_height() as f64,
        );
        container.set_scroll_top(top as i32);
        Ok(())
    }
}

fn row_element(
    document: &web_sys::Document,
    idx: usize,
    entry: &LyricEntry,
) -> Result<web_sys::Element, JsValue> {
    let row = document.create_element("p")?;
    row.set_class_name(LINE_CLASS);
    row.set_attribute("data-idx", &idx.to_string())?;
    row.set_attribute("data-t", &entry.timestamp.to_string())?;
    row.set_text_content(Some(&entry.text));
    Ok(row)
}
